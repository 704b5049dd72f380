use crate::view::{CategoryGrid, CategoryMenu, MealDetailView, MealGrid, Region, ViewState};

/// Display capabilities the controller drives.
///
/// Implementations own the actual presentation surface (a page, a terminal,
/// a test recorder). Methods take `&self` since several actions can be in
/// flight at once; implementations use interior mutability.
pub trait UiPorts: Send + Sync {
    fn render_categories(&self, grid: &CategoryGrid);

    fn render_menu(&self, menu: &CategoryMenu);

    fn render_listing(&self, listing: &MealGrid);

    fn clear_listing(&self);

    fn render_detail(&self, detail: &MealDetailView);

    fn clear_detail(&self);

    /// Make `state`'s panel the visible one
    fn show_panel(&self, state: ViewState);

    fn set_menu_open(&self, open: bool);

    /// Bring a region into view. Hosts without scrolling ignore this.
    fn scroll_into_view(&self, _region: Region) {}
}
