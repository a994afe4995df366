use crate::state::FavoriteIcon;

/// Host that owns the navigation stack the details screen lives on.
pub trait NavigationHost: Send + Sync {
    /// Update the favorite control in the header bar.
    fn set_header_favorite(&self, icon: FavoriteIcon);

    /// Pop the details screen.
    fn go_back(&self);
}
