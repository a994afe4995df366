use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;
use tracing::debug;

use crate::config::{Config, SETTLE_GRACE};
use crate::error::Result;
use crate::gateway::FoodGateway;
use crate::interface::prompts::{ScreenAction, prompt_action};
use crate::interface::render::display_screen;
use crate::models::RouteParams;
use crate::screen::{NavigationHost, ScreenController};
use crate::state::FavoriteIcon;

/// Navigation host for the terminal: one screen, so "back" means "done".
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    left: AtomicBool,
    exited: Notify,
}

impl TerminalNavigator {
    pub fn has_left(&self) -> bool {
        self.left.load(Ordering::Acquire)
    }

    /// Resolve once the screen has asked to go back.
    pub async fn wait_for_exit(&self) {
        if self.has_left() {
            return;
        }
        self.exited.notified().await;
    }
}

impl NavigationHost for TerminalNavigator {
    fn set_header_favorite(&self, icon: FavoriteIcon) {
        debug!(icon = icon.as_str(), "header favorite updated");
    }

    fn go_back(&self) {
        self.left.store(true, Ordering::Release);
        self.exited.notify_one();
    }
}

/// Run the interactive details screen for `params` until the user leaves or
/// the post-order exit fires.
pub async fn run_order_screen(
    gateway: Arc<dyn FoodGateway>,
    config: &Config,
    params: RouteParams,
) -> Result<()> {
    let navigator = Arc::new(TerminalNavigator::default());
    let mut controller = ScreenController::new(
        gateway,
        Arc::clone(&navigator) as Arc<dyn NavigationHost>,
        config.screen_options(),
    );

    controller.enter(params).await;
    let mut last = 0;

    loop {
        display_screen(&controller);

        // dialoguer blocks; keep the runtime's other workers free for detached calls.
        let (index, action) = tokio::task::block_in_place(|| prompt_action(&controller, last))?;
        last = index;

        match action {
            ScreenAction::IncrementExtra(id) => controller.increment_extra(id),
            ScreenAction::DecrementExtra(id) => controller.decrement_extra(id),
            ScreenAction::IncrementFood => controller.increment_food(),
            ScreenAction::DecrementFood => controller.decrement_food(),
            ScreenAction::ToggleFavorite => controller.toggle_favorite(),
            ScreenAction::ConfirmOrder => {
                controller.confirm_order()?;
                display_screen(&controller);
                navigator.wait_for_exit().await;
                break;
            }
            ScreenAction::Back => {
                controller.unmount();
                break;
            }
        }
    }

    // Give in-flight order and favorite requests a chance before the runtime shuts down.
    controller.settle(SETTLE_GRACE).await;
    Ok(())
}
