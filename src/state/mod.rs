mod order;
mod selection;

pub use order::{FavoriteIcon, MIN_FOOD_QUANTITY, OrderState};
pub use selection::{
    ExtraSelection, FUZZY_MATCH_THRESHOLD, MAX_SELECTION_QUANTITY, apply_selection, resolve_extra,
};
