mod food;
mod order;

pub use food::{Extra, Food};
pub use order::{FavoritePayload, OrderDraft, RouteParams};
