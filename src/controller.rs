use crate::api::MealApi;
use crate::error::FinderError;
use crate::ports::UiPorts;
use crate::render::{
    category_title, render_category_banner, render_category_grid, render_category_menu,
    render_meal_detail, render_meal_grid, search_title,
};
use crate::view::{Action, Region, ViewState};
use log::{debug, error};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// How a controller action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The display was updated
    Rendered,
    /// Nothing to do (e.g. blank search input)
    Ignored,
    /// A newer action was issued before this one finished; result dropped
    Superseded,
    /// Fetch or parse failed; logged, display left as it was
    Failed,
}

#[derive(Debug, Default)]
struct FinderState {
    view: ViewState,
    menu_open: bool,
}

/// Monotonic request counter. A response is only applied if no newer
/// request was issued while it was in flight.
#[derive(Debug, Default)]
struct Generation(AtomicU64);

impl Generation {
    fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

/// Drives the finder: fetches through `A`, renders, and pushes to `U`.
///
/// The listing and detail panels are mutually exclusive. Actions can overlap;
/// the most recently issued one wins.
pub struct MealFinder<A, U> {
    api: A,
    ui: U,
    state: Mutex<FinderState>,
    /// Guards the listing/detail panels
    panels: Generation,
    /// Guards the categories grid and menu
    categories: Generation,
    /// Held from the generation check through the last UI write
    render: Mutex<()>,
}

impl<A: MealApi, U: UiPorts> MealFinder<A, U> {
    pub fn new(api: A, ui: U) -> Self {
        Self {
            api,
            ui,
            state: Mutex::new(FinderState::default()),
            panels: Generation::default(),
            categories: Generation::default(),
            render: Mutex::new(()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    fn state(&self) -> MutexGuard<'_, FinderState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn render_lock(&self) -> MutexGuard<'_, ()> {
        self.render
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn view_state(&self) -> ViewState {
        self.state().view
    }

    pub fn is_menu_open(&self) -> bool {
        self.state().menu_open
    }

    fn set_view(&self, view: ViewState) {
        self.state().view = view;
        match view {
            ViewState::Listing => self.ui.clear_detail(),
            ViewState::Detail => self.ui.clear_listing(),
        }
        self.ui.show_panel(view);
    }

    fn failed(&self, what: &str, err: FinderError) -> Outcome {
        error!("Error {}: {}", what, err);
        Outcome::Failed
    }

    /// Fetch categories and render both the grid and the side menu
    pub async fn load_categories(&self) -> Outcome {
        let generation = self.categories.next();
        let categories = match self.api.fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => return self.failed("loading categories", e),
        };
        let _render = self.render_lock();
        if !self.categories.is_current(generation) {
            debug!("Dropping stale category list (generation {})", generation);
            return Outcome::Superseded;
        }

        self.ui.render_categories(&render_category_grid(&categories));
        self.ui.render_menu(&render_category_menu(&categories));
        Outcome::Rendered
    }

    /// Search meals by name and show the results in the listing panel.
    ///
    /// When there are hits, the category list is fetched again to find the
    /// first hit's category; its description is shown above the tiles.
    pub async fn search_meals(&self, input: &str) -> Outcome {
        let term = input.trim();
        if term.is_empty() {
            return Outcome::Ignored;
        }
        let generation = self.panels.next();
        let title = search_title(term);

        let meals = match self.api.search_meals_by_name(term).await {
            Ok(meals) => meals,
            Err(e) => return self.failed("searching meals", e),
        };

        let header = match meals.first() {
            None => None,
            Some(first) => {
                let categories = match self.api.fetch_categories().await {
                    Ok(categories) => categories,
                    Err(e) => return self.failed("searching meals", e),
                };
                first.category.as_deref().and_then(|wanted| {
                    categories
                        .iter()
                        .find(|c| c.name == wanted)
                        .map(render_category_banner)
                })
            }
        };

        let _render = self.render_lock();
        if !self.panels.is_current(generation) {
            debug!("Dropping stale search results for {:?}", term);
            return Outcome::Superseded;
        }

        self.set_view(ViewState::Listing);
        self.ui
            .render_listing(&render_meal_grid(Some(meals.as_slice()), &title, header));
        if !meals.is_empty() {
            self.ui.scroll_into_view(Region::Listing);
        }
        Outcome::Rendered
    }

    /// Run the search only when `key` is Enter
    pub async fn handle_search_key(&self, key: &str, input: &str) -> Outcome {
        if key == "Enter" {
            self.search_meals(input).await
        } else {
            Outcome::Ignored
        }
    }

    /// Show the meals of one category in the listing panel
    pub async fn load_meals_by_category(&self, category: &str) -> Outcome {
        let generation = self.panels.next();
        let meals = match self.api.fetch_meals_by_category(category).await {
            Ok(meals) => meals,
            Err(e) => return self.failed("loading meals by category", e),
        };
        let _render = self.render_lock();
        if !self.panels.is_current(generation) {
            debug!("Dropping stale meals for category {:?}", category);
            return Outcome::Superseded;
        }

        self.set_view(ViewState::Listing);
        self.ui.render_listing(&render_meal_grid(
            Some(meals.as_slice()),
            &category_title(category),
            None,
        ));
        Outcome::Rendered
    }

    /// Replace the listing with one meal's details
    pub async fn load_meal_detail(&self, id: &str) -> Outcome {
        let generation = self.panels.next();
        let meal = match self.api.fetch_meal_detail(id).await {
            Ok(meal) => meal,
            Err(e) => return self.failed("loading meal details", e),
        };
        let _render = self.render_lock();
        if !self.panels.is_current(generation) {
            debug!("Dropping stale details for meal {}", id);
            return Outcome::Superseded;
        }

        self.set_view(ViewState::Detail);
        self.ui.render_detail(&render_meal_detail(&meal));
        self.ui.scroll_into_view(Region::Detail);
        Outcome::Rendered
    }

    /// Leave the detail panel and reload the category list from the API.
    /// Also invalidates any panel fetch still in flight.
    pub async fn go_back(&self) -> Outcome {
        {
            let _render = self.render_lock();
            self.panels.next();
            self.set_view(ViewState::Listing);
        }
        let outcome = self.load_categories().await;
        self.ui.scroll_into_view(Region::Categories);
        outcome
    }

    pub fn toggle_menu(&self) -> bool {
        let open = {
            let mut state = self.state();
            state.menu_open = !state.menu_open;
            state.menu_open
        };
        self.ui.set_menu_open(open);
        open
    }

    /// Run the operation a rendered affordance is bound to
    pub async fn dispatch(&self, action: &Action) -> Outcome {
        match action {
            Action::SelectCategory(name) => self.load_meals_by_category(name).await,
            Action::SelectMeal(id) => self.load_meal_detail(id).await,
            Action::ToggleMenu => {
                self.toggle_menu();
                Outcome::Rendered
            }
            Action::GoBack => self.go_back().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_tracks_latest() {
        let generation = Generation::default();
        let first = generation.next();
        assert!(generation.is_current(first));
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
