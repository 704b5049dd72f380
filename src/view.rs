//! Display-ready view models.
//!
//! These are produced by [`crate::render`] from API data and handed to a
//! [`crate::UiPorts`] host. They carry no markup; turning them into HTML is
//! the job of [`crate::render::html`].

use serde::Serialize;

/// Which of the two main panels is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ViewState {
    /// Meal tiles (search results or a category's meals)
    #[default]
    Listing,
    /// One meal's full recipe
    Detail,
}

/// Mount points of the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    Categories,
    Listing,
    Detail,
    Menu,
}

/// What a rendered affordance triggers when activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    SelectCategory(String),
    SelectMeal(String),
    ToggleMenu,
    GoBack,
}

impl Action {
    /// Stable name used as the `data-action` attribute
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectCategory(_) => "select-category",
            Action::SelectMeal(_) => "select-meal",
            Action::ToggleMenu => "toggle-menu",
            Action::GoBack => "go-back",
        }
    }

    /// Argument carried by the action, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Action::SelectCategory(v) | Action::SelectMeal(v) => Some(v.as_str()),
            Action::ToggleMenu | Action::GoBack => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub label: String,
    pub thumbnail: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGrid {
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLink {
    pub label: String,
    pub action: Action,
}

/// Side menu with one shortcut per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMenu {
    pub close: Action,
    pub links: Vec<MenuLink>,
}

/// Category description shown above search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBanner {
    pub title: String,
    pub description: String,
}

/// Content of the listing panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MealGrid {
    /// Nothing matched; `title` echoes what was asked for
    Empty { title: String, message: String },
    Tiles {
        header: Option<CategoryBanner>,
        tiles: Vec<Tile>,
    },
}

impl MealGrid {
    pub fn tiles(&self) -> &[Tile] {
        match self {
            MealGrid::Empty { .. } => &[],
            MealGrid::Tiles { tiles, .. } => tiles,
        }
    }
}

/// A line of marker-prefixed text (measures and instruction paragraphs)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedLine {
    pub marker: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealDetailView {
    pub heading: &'static str,
    pub name: String,
    pub thumbnail: String,
    pub category: String,
    pub source: String,
    pub area: String,
    /// Comma-joined tags, or "N/A"
    pub tags: String,
    pub ingredients: Vec<String>,
    pub measures: Vec<MarkedLine>,
    pub instructions: Vec<MarkedLine>,
    pub back: Action,
    pub back_label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_and_values() {
        let select = Action::SelectCategory("Seafood".into());
        assert_eq!(select.name(), "select-category");
        assert_eq!(select.value(), Some("Seafood"));
        assert_eq!(Action::GoBack.value(), None);
        assert_eq!(Action::ToggleMenu.name(), "toggle-menu");
    }

    #[test]
    fn test_initial_view_state_is_listing() {
        assert_eq!(ViewState::default(), ViewState::Listing);
    }
}
