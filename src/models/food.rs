use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_value;

/// An optional add-on attached to a food, priced per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub id: i64,

    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,

    #[serde(default)]
    pub quantity: u32,
}

impl Extra {
    /// Line cost: value times quantity.
    #[inline]
    pub fn subtotal(&self) -> Decimal {
        self.value * Decimal::from(self.quantity)
    }

    /// Copy of this extra with the quantity cleared.
    pub fn zeroed(&self) -> Self {
        Self {
            quantity: 0,
            ..self.clone()
        }
    }
}

/// The orderable item shown on the details screen.
///
/// Deserializes straight from the `GET foods/{id}` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub thumbnail_url: String,

    #[serde(default)]
    pub category: i64,

    #[serde(default)]
    pub extras: Vec<Extra>,
}

impl Food {
    /// Display price, always derived from `price`.
    pub fn formatted_price(&self) -> String {
        format_value(self.price)
    }

    /// True for the placeholder shown before a load completes.
    pub fn is_placeholder(&self) -> bool {
        *self == Food::default()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "#{} {} @ {} (category {}, {} extras)",
            self.id,
            self.name,
            self.price,
            self.category,
            self.extras.len()
        )
    }
}
