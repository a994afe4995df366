use strsim::jaro_winkler;

use crate::error::{AppError, Result};
use crate::models::Extra;
use crate::state::OrderState;

/// Minimum Jaro-Winkler score for a fuzzy extra-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Largest quantity a single quote may ask for, for the food or any extra.
pub const MAX_SELECTION_QUANTITY: u32 = 999;

/// One `NAME=QTY` or `ID=QTY` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraSelection {
    pub key: String,
    pub quantity: u32,
}

impl ExtraSelection {
    pub fn parse(raw: &str) -> Result<Self> {
        let (key, qty) = raw
            .rsplit_once('=')
            .ok_or_else(|| AppError::InvalidInput(format!("expected NAME=QTY, got '{}'", raw)))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::InvalidInput(format!("missing extra name in '{}'", raw)));
        }

        let quantity = qty
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("invalid quantity in '{}'", raw)))?;

        Ok(Self {
            key: key.to_string(),
            quantity,
        })
    }
}

/// Find the extra `key` refers to.
///
/// Tries a numeric id, then an exact case-insensitive name, then the best
/// fuzzy match above [`FUZZY_MATCH_THRESHOLD`].
pub fn resolve_extra<'a>(extras: &'a [Extra], key: &str) -> Result<&'a Extra> {
    if let Ok(id) = key.parse::<i64>() {
        if let Some(extra) = extras.iter().find(|e| e.id == id) {
            return Ok(extra);
        }
    }

    let wanted = key.to_lowercase();
    if let Some(extra) = extras.iter().find(|e| e.name.to_lowercase() == wanted) {
        return Ok(extra);
    }

    extras
        .iter()
        .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(e, _)| e)
        .ok_or_else(|| AppError::InvalidInput(format!("no extra matches '{}'", key)))
}

/// Apply a non-interactive selection to freshly loaded state.
///
/// Goes through the same increment operations the screen uses.
pub fn apply_selection(
    state: &mut OrderState,
    quantity: u32,
    selections: &[ExtraSelection],
) -> Result<()> {
    if quantity == 0 {
        return Err(AppError::InvalidInput("quantity must be at least 1".to_string()));
    }
    if quantity > MAX_SELECTION_QUANTITY {
        return Err(AppError::InvalidInput(format!(
            "quantity {} exceeds the maximum of {}",
            quantity, MAX_SELECTION_QUANTITY
        )));
    }
    if let Some(selection) = selections.iter().find(|s| s.quantity > MAX_SELECTION_QUANTITY) {
        return Err(AppError::InvalidInput(format!(
            "extra '{}' quantity {} exceeds the maximum of {}",
            selection.key, selection.quantity, MAX_SELECTION_QUANTITY
        )));
    }

    for _ in 1..quantity {
        state.increment_food();
    }

    for selection in selections {
        let id = resolve_extra(state.extras(), &selection.key)?.id;
        for _ in 0..selection.quantity {
            state.increment_extra(id);
        }
    }

    Ok(())
}
