use crate::format::CurrencyFormat;
use crate::models::Extra;
use crate::screen::{ScreenController, ScreenPhase};
use crate::state::OrderState;

/// Text shown on the confirmation overlay.
pub const CONFIRMATION_TEXT: &str = "Order confirmed!";

/// Display the food card: name, description and unit price.
pub fn display_food(state: &OrderState) {
    let food = state.food();

    println!();
    println!("=== {} ===", food.name);
    if !food.description.is_empty() {
        println!("{}", food.description);
    }
    println!("Price: {}", state.formatted_price());
    if !food.image_url.is_empty() {
        println!("Image: {}", food.image_url);
    }
}

/// Display the extras with their current quantities.
pub fn display_extras(state: &OrderState) {
    println!();
    println!("--- Extras ---");

    if state.extras().is_empty() {
        println!("  (none)");
        return;
    }

    let currency = state.currency();
    let width = name_column_width(state.extras());

    for extra in state.extras() {
        println!("{}", extra_row(extra, &currency, width));
    }
}

/// Width of the name column, in characters.
fn name_column_width(extras: &[Extra]) -> usize {
    extras
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(10)
}

fn extra_row(extra: &Extra, currency: &CurrencyFormat, width: usize) -> String {
    format!(
        "  {:<width$}  {:>12}  x{}",
        extra.name,
        currency.format(extra.value),
        extra.quantity,
        width = width
    )
}

/// Display the order total block.
pub fn display_total(state: &OrderState) {
    println!();
    println!("--- Order total ---");
    println!("Quantity: {}", state.food_quantity());
    println!("Total: {}", state.compute_total());
    println!();
}

/// Render the whole screen for the controller's current phase.
pub fn display_screen(controller: &ScreenController) {
    let state = controller.state();
    let heart = if state.is_favorite() { "[♥]" } else { "[♡]" };

    match controller.phase() {
        ScreenPhase::Loading => {
            println!();
            println!("{} Loading...", heart);
        }
        ScreenPhase::Ready | ScreenPhase::Submitting => {
            println!();
            println!("{} Food details", heart);
            display_food(state);
            display_extras(state);
            display_total(state);
        }
    }

    if controller.modal_visible() {
        display_confirmation();
    }
}

/// Display the confirmation overlay.
pub fn display_confirmation() {
    println!();
    println!("  +------------------------+");
    println!("  |   {:<20} |", CONFIRMATION_TEXT);
    println!("  +------------------------+");
    println!();
}
