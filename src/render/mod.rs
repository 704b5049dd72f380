pub mod html;

use crate::model::{Category, MealDetail, MealSummary};
use crate::view::{
    Action, CategoryBanner, CategoryGrid, CategoryMenu, MarkedLine, MealDetailView, MealGrid,
    MenuLink, Tile,
};

pub const NO_MEALS_MESSAGE: &str = "No meals found.";
pub const TAGS_FALLBACK: &str = "N/A";
pub const MEASURE_MARKER: &str = "🔸";
pub const INSTRUCTION_MARKER: &str = "✔";
pub const DETAIL_HEADING: &str = "MEAL DETAILS";
pub const BACK_LABEL: &str = "Back to Meals";

/// Title of the listing produced by a name search
pub fn search_title(term: &str) -> String {
    format!("Search results for \"{term}\"")
}

/// Title of the listing produced by picking a category
pub fn category_title(category: &str) -> String {
    format!("Meals in \"{category}\" category")
}

pub fn render_category_grid(categories: &[Category]) -> CategoryGrid {
    CategoryGrid {
        tiles: categories
            .iter()
            .map(|c| Tile {
                label: c.name.clone(),
                thumbnail: c.thumbnail.clone(),
                action: Action::SelectCategory(c.name.clone()),
            })
            .collect(),
    }
}

pub fn render_category_menu(categories: &[Category]) -> CategoryMenu {
    CategoryMenu {
        close: Action::ToggleMenu,
        links: categories
            .iter()
            .map(|c| MenuLink {
                label: c.name.clone(),
                action: Action::SelectCategory(c.name.clone()),
            })
            .collect(),
    }
}

/// Banner describing `category`; the description is empty when the API had none
pub fn render_category_banner(category: &Category) -> CategoryBanner {
    CategoryBanner {
        title: category.name.clone(),
        description: category.description.clone().unwrap_or_default(),
    }
}

/// Build the listing panel. `None` and an empty slice both mean "no meals".
/// The title is only shown in the empty state.
pub fn render_meal_grid(
    meals: Option<&[MealSummary]>,
    title: &str,
    header: Option<CategoryBanner>,
) -> MealGrid {
    match meals {
        Some(meals) if !meals.is_empty() => MealGrid::Tiles {
            header,
            tiles: meals
                .iter()
                .map(|m| Tile {
                    label: m.name.clone(),
                    thumbnail: m.thumbnail.clone(),
                    action: Action::SelectMeal(m.id.clone()),
                })
                .collect(),
        },
        _ => MealGrid::Empty {
            title: title.to_string(),
            message: NO_MEALS_MESSAGE.to_string(),
        },
    }
}

pub fn render_meal_detail(meal: &MealDetail) -> MealDetailView {
    let tags = if meal.tags.is_empty() {
        TAGS_FALLBACK.to_string()
    } else {
        meal.tags.join(", ")
    };

    MealDetailView {
        heading: DETAIL_HEADING,
        name: meal.name.clone(),
        thumbnail: meal.thumbnail.clone(),
        category: meal.category.clone(),
        source: meal.source.clone(),
        area: meal.area.clone(),
        tags,
        ingredients: meal.ingredient_names().map(String::from).collect(),
        measures: meal
            .measures()
            .map(|m| MarkedLine {
                marker: MEASURE_MARKER,
                text: m.to_string(),
            })
            .collect(),
        instructions: meal
            .instructions
            .iter()
            .map(|p| MarkedLine {
                marker: INSTRUCTION_MARKER,
                text: p.clone(),
            })
            .collect(),
        back: Action::GoBack,
        back_label: BACK_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn category(name: &str) -> Category {
        Category {
            name: name.to_string(),
            thumbnail: format!("https://example.com/{name}.png"),
            description: Some(format!("All about {name}")),
        }
    }

    fn summary(id: &str, name: &str) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: format!("https://example.com/{id}.jpg"),
            category: None,
        }
    }

    fn detail() -> MealDetail {
        MealDetail {
            id: "52772".into(),
            name: "Teriyaki Chicken Casserole".into(),
            thumbnail: "https://example.com/t.jpg".into(),
            category: "Chicken".into(),
            area: "Japanese".into(),
            source: "https://example.com/src".into(),
            tags: vec![],
            ingredients: vec![
                Ingredient {
                    name: "soy sauce".into(),
                    measure: "3/4 cup".into(),
                },
                Ingredient {
                    name: "water".into(),
                    measure: "".into(),
                },
            ],
            instructions: vec!["Preheat oven.".into(), "Bake.".into()],
        }
    }

    #[test]
    fn test_category_grid_binds_tiles_to_category() {
        let grid = render_category_grid(&[category("Beef"), category("Seafood")]);
        assert_eq!(grid.tiles.len(), 2);
        assert_eq!(grid.tiles[1].label, "Seafood");
        assert_eq!(grid.tiles[1].thumbnail, "https://example.com/Seafood.png");
        assert_eq!(
            grid.tiles[1].action,
            Action::SelectCategory("Seafood".into())
        );
    }

    #[test]
    fn test_category_menu_has_close_and_links() {
        let menu = render_category_menu(&[category("Beef"), category("Dessert")]);
        assert_eq!(menu.close, Action::ToggleMenu);
        let labels: Vec<&str> = menu.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Beef", "Dessert"]);
        assert_eq!(menu.links[0].action, Action::SelectCategory("Beef".into()));
    }

    #[test]
    fn test_empty_search_renders_placeholder_with_title() {
        let title = search_title("zzz");
        for meals in [None, Some(&[][..])] {
            let grid = render_meal_grid(meals, &title, None);
            match &grid {
                MealGrid::Empty { title, message } => {
                    assert_eq!(title, "Search results for \"zzz\"");
                    assert_eq!(message, NO_MEALS_MESSAGE);
                }
                other => panic!("expected empty state, got {other:?}"),
            }
            assert!(grid.tiles().is_empty());
        }
    }

    #[test]
    fn test_meal_grid_keeps_order_and_header() {
        let meals = vec![summary("1", "Arrabiata"), summary("2", "Carbonara")];
        let banner = render_category_banner(&category("Pasta"));
        let grid = render_meal_grid(
            Some(meals.as_slice()),
            &search_title("a"),
            Some(banner.clone()),
        );

        match grid {
            MealGrid::Tiles { header, tiles } => {
                assert_eq!(header, Some(banner));
                assert_eq!(tiles[0].label, "Arrabiata");
                assert_eq!(tiles[1].action, Action::SelectMeal("2".into()));
            }
            other => panic!("expected tiles, got {other:?}"),
        }
    }

    #[test]
    fn test_banner_without_description() {
        let mut cat = category("Misc");
        cat.description = None;
        assert_eq!(render_category_banner(&cat).description, "");
    }

    #[test]
    fn test_meal_detail_view() {
        let view = render_meal_detail(&detail());
        assert_eq!(view.tags, "N/A");
        assert_eq!(view.ingredients, vec!["soy sauce", "water"]);
        assert_eq!(view.measures.len(), 2);
        assert_eq!(view.measures[1].text, "");
        assert_eq!(view.measures[0].marker, MEASURE_MARKER);
        assert_eq!(view.instructions.len(), 2);
        assert_eq!(view.instructions[0].marker, INSTRUCTION_MARKER);
        assert_eq!(view.back, Action::GoBack);
    }

    #[test]
    fn test_meal_detail_tags_joined() {
        let mut meal = detail();
        meal.tags = vec!["Meat".into(), "Casserole".into()];
        assert_eq!(render_meal_detail(&meal).tags, "Meat, Casserole");
    }

    #[test]
    fn test_titles() {
        assert_eq!(category_title("Beef"), "Meals in \"Beef\" category");
        assert_eq!(search_title("pie"), "Search results for \"pie\"");
    }
}
