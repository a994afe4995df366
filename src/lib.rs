pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod gateway;
pub mod interface;
pub mod logging;
pub mod models;
pub mod screen;
pub mod state;

pub use error::{AppError, Result};
pub use models::{Extra, FavoritePayload, Food, OrderDraft, RouteParams};
