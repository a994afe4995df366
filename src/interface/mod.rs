pub mod prompts;
pub mod render;
pub mod terminal;

pub use prompts::{ScreenAction, available_actions, prompt_action};
pub use render::{
    CONFIRMATION_TEXT, display_confirmation, display_extras, display_food, display_screen,
    display_total,
};
pub use terminal::{TerminalNavigator, run_order_screen};
