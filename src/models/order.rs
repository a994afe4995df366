use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Extra, Food};

/// Navigation parameter selecting which food the details screen loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    pub id: i64,
}

/// Body of `POST favorites`: a snapshot of the food at toggle time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePayload {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: i64,
    pub image_url: String,
    pub thumbnail_url: String,
}

impl FavoritePayload {
    pub fn from_food(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            category: food.category,
            image_url: food.image_url.clone(),
            thumbnail_url: food.thumbnail_url.clone(),
        }
    }
}

/// Body of `POST orders`, built fresh when the user confirms.
///
/// Carries the unit price only; the food quantity is not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub product_id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: i64,
    /// Populated from the food's `image_url`, which is what existing clients send.
    pub thumbnail_url: String,
    pub extras: Vec<Extra>,
}

impl OrderDraft {
    pub fn new(food: &Food, extras: &[Extra]) -> Self {
        Self {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            category: food.category,
            thumbnail_url: food.image_url.clone(),
            extras: extras.to_vec(),
        }
    }

    /// Number of extra units in the draft.
    pub fn extra_units(&self) -> u64 {
        self.extras.iter().map(|e| u64::from(e.quantity)).sum()
    }
}
