use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::format::Locale;
use crate::gateway::FoodGateway;
use crate::models::{FavoritePayload, OrderDraft, RouteParams};
use crate::screen::NavigationHost;
use crate::state::OrderState;

/// Delay between confirming an order and leaving the screen.
pub const DEFAULT_EXIT_DELAY: Duration = Duration::from_secs(2);

/// Lifecycle of the details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    /// Waiting for the food to load; placeholders only.
    Loading,
    /// Food loaded, user input accepted.
    Ready,
    /// Order confirmed, overlay shown, exit scheduled.
    Submitting,
}

impl ScreenPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenPhase::Loading => "loading",
            ScreenPhase::Ready => "ready",
            ScreenPhase::Submitting => "submitting",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScreenOptions {
    pub exit_delay: Duration,
    pub locale: Locale,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            exit_delay: DEFAULT_EXIT_DELAY,
            locale: Locale::default(),
        }
    }
}

/// Drives the food details screen.
///
/// Owns the [`OrderState`] and the modal flag, loads the food on entry and
/// turns user actions into state changes and gateway calls. Order and
/// favorite requests run as detached tasks: their outcome is logged and
/// never fed back into the screen.
pub struct ScreenController {
    gateway: Arc<dyn FoodGateway>,
    navigation: Arc<dyn NavigationHost>,
    state: OrderState,
    phase: ScreenPhase,
    modal_visible: bool,
    exit_delay: Duration,
    /// Cleared on unmount; checked by the exit timer before navigating.
    mounted: Arc<AtomicBool>,
    exit_timer: Option<JoinHandle<()>>,
    detached: Vec<JoinHandle<()>>,
}

impl ScreenController {
    pub fn new(
        gateway: Arc<dyn FoodGateway>,
        navigation: Arc<dyn NavigationHost>,
        options: ScreenOptions,
    ) -> Self {
        Self {
            gateway,
            navigation,
            state: OrderState::new(options.locale),
            phase: ScreenPhase::Loading,
            modal_visible: false,
            exit_delay: options.exit_delay,
            mounted: Arc::new(AtomicBool::new(true)),
            exit_timer: None,
            detached: Vec::new(),
        }
    }

    /// Load the food selected by `params` and move to [`ScreenPhase::Ready`].
    ///
    /// A failed load is logged and leaves the screen on its placeholders.
    /// Only runs from [`ScreenPhase::Loading`]; later calls are ignored.
    pub async fn enter(&mut self, params: RouteParams) {
        if self.phase != ScreenPhase::Loading {
            debug!(id = params.id, phase = self.phase.as_str(), "screen already loaded");
            return;
        }

        self.navigation.set_header_favorite(self.state.favorite_icon());

        match self.gateway.fetch_food(params.id).await {
            Ok(food) => {
                info!(food = %food.debug_string(), "details screen ready");
                self.state.load(food);
                self.phase = ScreenPhase::Ready;
            }
            Err(e) => {
                warn!(id = params.id, error = %e, "failed to load food");
            }
        }
    }

    pub fn increment_extra(&mut self, id: i64) {
        if self.accepts_input("increment_extra") {
            self.state.increment_extra(id);
        }
    }

    pub fn decrement_extra(&mut self, id: i64) {
        if self.accepts_input("decrement_extra") {
            self.state.decrement_extra(id);
        }
    }

    pub fn increment_food(&mut self) {
        if self.accepts_input("increment_food") {
            self.state.increment_food();
        }
    }

    pub fn decrement_food(&mut self) {
        if self.accepts_input("decrement_food") {
            self.state.decrement_food();
        }
    }

    /// Flip the favorite flag, refresh the header and send the favorite as a
    /// detached call.
    pub fn toggle_favorite(&mut self) {
        if !self.accepts_input("toggle_favorite") {
            return;
        }

        let payload = self.state.toggle_favorite();
        self.navigation.set_header_favorite(self.state.favorite_icon());
        self.spawn_detached_favorite(payload);
    }

    /// Confirm the order.
    ///
    /// Shows the overlay, schedules the exit and sends the order, in that
    /// order. The exit fires after the configured delay whether or not the
    /// order request has finished or succeeded.
    pub fn confirm_order(&mut self) -> Result<()> {
        if self.phase != ScreenPhase::Ready {
            return Err(AppError::NotReady(self.phase.as_str()));
        }

        self.modal_visible = true;
        self.phase = ScreenPhase::Submitting;
        self.schedule_exit();
        self.spawn_detached_submit(self.state.order_draft());
        Ok(())
    }

    /// Stop the screen from navigating after it has been torn down.
    pub fn unmount(&mut self) {
        self.mounted.store(false, Ordering::Release);
        if let Some(timer) = self.exit_timer.take() {
            timer.abort();
        }
    }

    /// Wait up to `grace` for detached requests to finish.
    ///
    /// Returns `false` when some were still running at the deadline; those
    /// keep running in the background.
    pub async fn settle(&mut self, grace: Duration) -> bool {
        let handles = std::mem::take(&mut self.detached);
        if handles.is_empty() {
            return true;
        }

        let pending = handles.len();
        let settled = tokio::time::timeout(grace, async move {
            for handle in handles {
                let _ = handle.await;
            }
        })
        .await
        .is_ok();

        if !settled {
            warn!(pending, "detached requests still running after grace period");
        }
        settled
    }

    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    fn accepts_input(&self, action: &str) -> bool {
        if self.phase == ScreenPhase::Ready {
            return true;
        }
        debug!(action, phase = self.phase.as_str(), "ignoring input");
        false
    }

    fn schedule_exit(&mut self) {
        let navigation = Arc::clone(&self.navigation);
        let mounted = Arc::clone(&self.mounted);
        let delay = self.exit_delay;

        if let Some(previous) = self.exit_timer.take() {
            previous.abort();
        }
        self.exit_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if mounted.load(Ordering::Acquire) {
                info!("leaving details screen");
                navigation.go_back();
            } else {
                debug!("screen unmounted before exit timer fired");
            }
        }));
    }

    /// Send the order; failures are logged and otherwise dropped.
    fn spawn_detached_submit(&mut self, order: OrderDraft) {
        let gateway = Arc::clone(&self.gateway);
        self.track(tokio::spawn(async move {
            match gateway.create_order(&order).await {
                Ok(()) => info!(product_id = order.product_id, "order submitted"),
                Err(e) => warn!(product_id = order.product_id, error = %e, "order submission failed"),
            }
        }));
    }

    /// Send the favorite; failures are logged and otherwise dropped.
    fn spawn_detached_favorite(&mut self, favorite: FavoritePayload) {
        let gateway = Arc::clone(&self.gateway);
        self.track(tokio::spawn(async move {
            match gateway.create_favorite(&favorite).await {
                Ok(()) => debug!(name = %favorite.name, "favorite created"),
                Err(e) => warn!(name = %favorite.name, error = %e, "favorite request failed"),
            }
        }));
    }

    fn track(&mut self, handle: JoinHandle<()>) {
        self.detached.retain(|h| !h.is_finished());
        self.detached.push(handle);
    }
}

impl Drop for ScreenController {
    fn drop(&mut self) {
        self.unmount();
    }
}
