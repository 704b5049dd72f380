use crate::ports::UiPorts;
use crate::render::html;
use crate::view::{CategoryGrid, CategoryMenu, MealDetailView, MealGrid, Region, ViewState};
use html_escape::encode_text;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default, Clone)]
struct Regions {
    categories: String,
    menu: String,
    listing: String,
    detail: String,
    detail_visible: bool,
    menu_open: bool,
    last_scrolled: Option<Region>,
}

/// In-memory HTML page implementing [`UiPorts`].
///
/// Each mount point holds the latest fragment written to it; `render_page`
/// stitches them into a standalone document.
#[derive(Debug)]
pub struct HtmlDocument {
    title: String,
    regions: Mutex<Regions>,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new("Meal Finder")
    }
}

impl HtmlDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            regions: Mutex::new(Regions::default()),
        }
    }

    fn regions(&self) -> MutexGuard<'_, Regions> {
        // A panic while holding the lock leaves plain strings behind, still usable
        self.regions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current HTML of a mount point
    pub fn region_html(&self, region: Region) -> String {
        let regions = self.regions();
        match region {
            Region::Categories => regions.categories.clone(),
            Region::Menu => regions.menu.clone(),
            Region::Listing => regions.listing.clone(),
            Region::Detail => regions.detail.clone(),
        }
    }

    pub fn is_detail_visible(&self) -> bool {
        self.regions().detail_visible
    }

    pub fn is_menu_open(&self) -> bool {
        self.regions().menu_open
    }

    pub fn last_scrolled(&self) -> Option<Region> {
        self.regions().last_scrolled
    }

    /// Assemble the whole page from the current region contents
    pub fn render_page(&self) -> String {
        let regions = self.regions().clone();
        let display = |visible: bool| if visible { "block" } else { "none" };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<header>
<button class="menu-btn" data-action="toggle-menu">Categories</button>
<input type="text" id="searchInput" placeholder="Search for a meal">
</header>
<nav id="menu" style="display: {menu_display};">{menu}</nav>
<section id="categories">{categories}</section>
<section id="meal-section">{listing}</section>
<section id="meal-details" style="display: {detail_display};">{detail}</section>
</body>
</html>
"#,
            title = encode_text(&self.title),
            menu_display = display(regions.menu_open),
            menu = regions.menu,
            categories = regions.categories,
            listing = regions.listing,
            detail_display = display(regions.detail_visible),
            detail = regions.detail,
        )
    }
}

impl UiPorts for HtmlDocument {
    fn render_categories(&self, grid: &CategoryGrid) {
        self.regions().categories = html::category_grid(grid);
    }

    fn render_menu(&self, menu: &CategoryMenu) {
        self.regions().menu = html::category_menu(menu);
    }

    fn render_listing(&self, listing: &MealGrid) {
        self.regions().listing = html::meal_grid(listing);
    }

    fn clear_listing(&self) {
        self.regions().listing.clear();
    }

    fn render_detail(&self, detail: &MealDetailView) {
        self.regions().detail = html::meal_detail(detail);
    }

    fn clear_detail(&self) {
        self.regions().detail.clear();
    }

    fn show_panel(&self, state: ViewState) {
        self.regions().detail_visible = state == ViewState::Detail;
    }

    fn set_menu_open(&self, open: bool) {
        self.regions().menu_open = open;
    }

    fn scroll_into_view(&self, region: Region) {
        self.regions().last_scrolled = Some(region);
    }
}
