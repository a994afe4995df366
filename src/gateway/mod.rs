//! Remote data gateway for the GoRestaurant API.
//!
//! The screen only talks to [`FoodGateway`]; [`HttpGateway`] is the live
//! implementation.

mod http;

pub use http::HttpGateway;

use crate::error::Result;
use crate::models::{FavoritePayload, Food, OrderDraft};

/// Food lookup, order creation and favorite creation.
///
/// Implementations must be `Send + Sync` so detached calls can run on
/// spawned tasks.
#[async_trait::async_trait]
pub trait FoodGateway: Send + Sync {
    /// `GET foods/{id}`, extras included.
    async fn fetch_food(&self, id: i64) -> Result<Food>;

    /// `POST orders`.
    async fn create_order(&self, order: &OrderDraft) -> Result<()>;

    /// `POST favorites`.
    async fn create_favorite(&self, favorite: &FavoritePayload) -> Result<()>;
}
