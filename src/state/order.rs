use rust_decimal::Decimal;

use crate::format::{CurrencyFormat, Locale};
use crate::models::{Extra, FavoritePayload, Food, OrderDraft};

/// Smallest food quantity the screen allows.
pub const MIN_FOOD_QUANTITY: u32 = 1;

/// Header icon reflecting the favorite flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteIcon {
    Favorite,
    FavoriteBorder,
}

impl FavoriteIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteIcon::Favorite => "favorite",
            FavoriteIcon::FavoriteBorder => "favorite-border",
        }
    }
}

/// Order state for a single details screen.
///
/// Holds the loaded food, its extras with the user's quantities, the food
/// quantity and the favorite flag. The total is derived on every read.
#[derive(Debug, Clone)]
pub struct OrderState {
    food: Food,
    /// Extras keep their load order; quantities start at zero.
    extras: Vec<Extra>,
    food_quantity: u32,
    is_favorite: bool,
    currency: CurrencyFormat,
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl OrderState {
    /// Empty placeholder state, as shown before a load completes.
    pub fn new(locale: Locale) -> Self {
        Self {
            food: Food::default(),
            extras: Vec::new(),
            food_quantity: MIN_FOOD_QUANTITY,
            is_favorite: false,
            currency: locale.currency(),
        }
    }

    /// Replace the food and its extras. Every extra quantity is reset to 0,
    /// whatever the caller passed in.
    pub fn initialize(&mut self, food: Food, extras: &[Extra]) {
        self.extras = extras.iter().map(Extra::zeroed).collect();
        self.food = food;
    }

    /// Initialize from a load response, taking the extras embedded in it.
    pub fn load(&mut self, mut food: Food) {
        let extras = std::mem::take(&mut food.extras);
        self.initialize(food, &extras);
    }

    /// Add one unit of the extra with `id`. Unknown ids are ignored.
    pub fn increment_extra(&mut self, id: i64) {
        for extra in self.extras.iter_mut().filter(|e| e.id == id) {
            extra.quantity = extra.quantity.saturating_add(1);
        }
    }

    /// Remove one unit of the extra with `id`, stopping at zero.
    pub fn decrement_extra(&mut self, id: i64) {
        for extra in self.extras.iter_mut().filter(|e| e.id == id) {
            extra.quantity = extra.quantity.saturating_sub(1);
        }
    }

    pub fn increment_food(&mut self) {
        self.food_quantity = self.food_quantity.saturating_add(1);
    }

    /// Remove one unit of food, never going below [`MIN_FOOD_QUANTITY`].
    pub fn decrement_food(&mut self) {
        if self.food_quantity > MIN_FOOD_QUANTITY {
            self.food_quantity -= 1;
        }
    }

    /// Flip the favorite flag and return the payload to send for it.
    ///
    /// The flag is not tied to the outcome of sending the payload.
    pub fn toggle_favorite(&mut self) -> FavoritePayload {
        self.is_favorite = !self.is_favorite;
        FavoritePayload::from_food(&self.food)
    }

    /// `price * food_quantity + sum(extra.value * extra.quantity)`.
    pub fn total(&self) -> Decimal {
        let food_total = self.food.price * Decimal::from(self.food_quantity);
        let extras_total: Decimal = self.extras.iter().map(Extra::subtotal).sum();
        food_total + extras_total
    }

    /// Formatted order total.
    pub fn compute_total(&self) -> String {
        self.currency.format(self.total())
    }

    /// Formatted unit price of the food.
    pub fn formatted_price(&self) -> String {
        self.currency.format(self.food.price)
    }

    /// Order payload for the current selection.
    pub fn order_draft(&self) -> OrderDraft {
        OrderDraft::new(&self.food, &self.extras)
    }

    pub fn favorite_icon(&self) -> FavoriteIcon {
        if self.is_favorite {
            FavoriteIcon::Favorite
        } else {
            FavoriteIcon::FavoriteBorder
        }
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// Look up an extra by id.
    pub fn extra(&self, id: i64) -> Option<&Extra> {
        self.extras.iter().find(|e| e.id == id)
    }

    pub fn food_quantity(&self) -> u32 {
        self.food_quantity
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn currency(&self) -> CurrencyFormat {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food {
            id: 1,
            name: "Ao molho".to_string(),
            description: "Pasta with white sauce".to_string(),
            price: Decimal::new(1990, 2),
            image_url: "https://img/ao_molho.png".to_string(),
            thumbnail_url: "https://img/ao_molho_thumb.png".to_string(),
            category: 1,
            extras: vec![
                Extra {
                    id: 1,
                    name: "Bacon".to_string(),
                    value: Decimal::new(150, 2),
                    quantity: 4,
                },
                Extra {
                    id: 2,
                    name: "Frango".to_string(),
                    value: Decimal::new(200, 2),
                    quantity: 0,
                },
            ],
        }
    }

    #[test]
    fn test_placeholder_state() {
        let state = OrderState::default();
        assert!(state.food().is_placeholder());
        assert!(state.extras().is_empty());
        assert_eq!(state.food_quantity(), 1);
        assert!(!state.is_favorite());
        assert_eq!(state.total(), Decimal::ZERO);
    }

    #[test]
    fn test_load_zeroes_extras() {
        let mut state = OrderState::default();
        state.load(sample_food());

        assert_eq!(state.extras().len(), 2);
        assert!(state.extras().iter().all(|e| e.quantity == 0));
        assert!(state.food().extras.is_empty());
    }

    #[test]
    fn test_increment_only_matching_extra() {
        let mut state = OrderState::default();
        state.load(sample_food());

        state.increment_extra(2);
        state.increment_extra(2);
        assert_eq!(state.extra(1).unwrap().quantity, 0);
        assert_eq!(state.extra(2).unwrap().quantity, 2);
    }

    #[test]
    fn test_unknown_extra_is_noop() {
        let mut state = OrderState::default();
        state.load(sample_food());
        let before = state.extras().to_vec();

        state.increment_extra(99);
        state.decrement_extra(99);
        assert_eq!(state.extras(), before.as_slice());
    }

    #[test]
    fn test_total_includes_extras() {
        let mut state = OrderState::default();
        state.load(sample_food());
        state.increment_food();
        state.increment_extra(1);

        // 19.90 * 2 + 1.50
        assert_eq!(state.total(), Decimal::new(4130, 2));
        assert_eq!(state.compute_total(), "R$ 41,30");
    }

    #[test]
    fn test_toggle_favorite_snapshot() {
        let mut state = OrderState::default();
        state.load(sample_food());

        let payload = state.toggle_favorite();
        assert!(state.is_favorite());
        assert_eq!(state.favorite_icon(), FavoriteIcon::Favorite);
        assert_eq!(payload.name, "Ao molho");
        assert_eq!(payload.thumbnail_url, "https://img/ao_molho_thumb.png");

        state.toggle_favorite();
        assert!(!state.is_favorite());
        assert_eq!(state.favorite_icon().as_str(), "favorite-border");
    }

    #[test]
    fn test_order_draft_reflects_quantities() {
        let mut state = OrderState::new(Locale::EnUs);
        state.load(sample_food());
        state.increment_extra(1);

        let draft = state.order_draft();
        assert_eq!(draft.product_id, 1);
        assert_eq!(draft.extras[0].quantity, 1);
        assert_eq!(draft.extras[1].quantity, 0);
        assert_eq!(state.formatted_price(), "$19.90");
    }
}
