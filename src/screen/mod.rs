mod controller;
mod navigation;

pub use controller::{DEFAULT_EXIT_DELAY, ScreenController, ScreenOptions, ScreenPhase};
pub use navigation::NavigationHost;
