use dialoguer::Select;

use crate::error::Result;
use crate::screen::{ScreenController, ScreenPhase};

/// A user action on the details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    IncrementExtra(i64),
    DecrementExtra(i64),
    IncrementFood,
    DecrementFood,
    ToggleFavorite,
    ConfirmOrder,
    Back,
}

/// Menu entries available in the controller's current phase.
pub fn available_actions(controller: &ScreenController) -> Vec<(String, ScreenAction)> {
    if controller.phase() != ScreenPhase::Ready {
        return vec![("Back".to_string(), ScreenAction::Back)];
    }

    let state = controller.state();
    let mut actions = Vec::with_capacity(state.extras().len() * 2 + 5);

    for extra in state.extras() {
        actions.push((
            format!("+ {} ({})", extra.name, extra.quantity),
            ScreenAction::IncrementExtra(extra.id),
        ));
        actions.push((
            format!("- {} ({})", extra.name, extra.quantity),
            ScreenAction::DecrementExtra(extra.id),
        ));
    }

    actions.push((
        format!("+ Quantity ({})", state.food_quantity()),
        ScreenAction::IncrementFood,
    ));
    actions.push((
        format!("- Quantity ({})", state.food_quantity()),
        ScreenAction::DecrementFood,
    ));

    let favorite_label = if state.is_favorite() {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };
    actions.push((favorite_label.to_string(), ScreenAction::ToggleFavorite));
    actions.push((
        format!("Confirm order ({})", state.compute_total()),
        ScreenAction::ConfirmOrder,
    ));
    actions.push(("Back".to_string(), ScreenAction::Back));

    actions
}

/// Prompt for the next action on the screen.
pub fn prompt_action(controller: &ScreenController, last: usize) -> Result<(usize, ScreenAction)> {
    let actions = available_actions(controller);
    let labels: Vec<&str> = actions.iter().map(|(label, _)| label.as_str()).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(last.min(labels.len().saturating_sub(1)))
        .interact()?;

    Ok((selection, actions[selection].1))
}
