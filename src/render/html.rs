//! HTML templating for the view models.
//!
//! All text goes through `html_escape`; actions are emitted as
//! `data-action` / `data-value` attributes for the host page to wire up.

use crate::view::{
    Action, CategoryBanner, CategoryGrid, CategoryMenu, MarkedLine, MealDetailView, MealGrid,
    Tile,
};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

fn action_attrs(action: &Action) -> String {
    match action.value() {
        Some(value) => format!(
            r#"data-action="{}" data-value="{}""#,
            action.name(),
            attr(value)
        ),
        None => format!(r#"data-action="{}""#, action.name()),
    }
}

fn tile(class: &str, tile: &Tile) -> String {
    format!(
        r#"<div class="{class}" {action}><img src="{src}" alt="{alt}"><p>{label}</p></div>"#,
        action = action_attrs(&tile.action),
        src = attr(&tile.thumbnail),
        alt = attr(&tile.label),
        label = text(&tile.label),
    )
}

pub fn category_grid(grid: &CategoryGrid) -> String {
    grid.tiles
        .iter()
        .map(|t| tile("category-card", t))
        .collect()
}

pub fn category_menu(menu: &CategoryMenu) -> String {
    let mut out = format!(
        r#"<div class="menu-close" {}><i class="fa-solid fa-xmark"></i></div>"#,
        action_attrs(&menu.close)
    );
    for link in &menu.links {
        out.push_str(&format!(
            r##"<a href="#" {}>{}</a>"##,
            action_attrs(&link.action),
            text(&link.label)
        ));
    }
    out
}

fn banner(banner: &CategoryBanner) -> String {
    format!(
        r#"<div class="category-banner"><h3 class="section-title">{}</h3><p>{}</p></div>"#,
        text(&banner.title),
        text(&banner.description)
    )
}

pub fn meal_grid(grid: &MealGrid) -> String {
    match grid {
        MealGrid::Empty { title, message } => format!(
            r#"<div class="empty-state"><h3 class="section-title">{}</h3><p>{}</p></div>"#,
            text(title),
            text(message)
        ),
        MealGrid::Tiles { header, tiles } => {
            let mut out = header.as_ref().map(banner).unwrap_or_default();
            for t in tiles {
                out.push_str(&tile("meal-card", t));
            }
            out
        }
    }
}

fn marked_line(line: &MarkedLine) -> String {
    format!("{} {}", line.marker, text(&line.text))
}

pub fn meal_detail(view: &MealDetailView) -> String {
    let ingredients: String = view
        .ingredients
        .iter()
        .map(|i| format!("<li>{}</li>", text(i)))
        .collect();
    let measures: String = view
        .measures
        .iter()
        .map(|m| format!("<li>{}</li>", marked_line(m)))
        .collect();
    let instructions: String = view
        .instructions
        .iter()
        .map(|p| format!("<p>{}</p>", marked_line(p)))
        .collect();

    format!(
        concat!(
            r#"<div class="meal-header"><h3>{heading}</h3></div>"#,
            r#"<div class="meal-detail-container">"#,
            r#"<div class="meal-img"><img src="{thumb}" alt="{name_attr}"></div>"#,
            r#"<div class="meal-info"><h3>{name}</h3>"#,
            r#"<p><strong>CATEGORY:</strong> {category}</p>"#,
            r#"<p><strong>Source:</strong> <a href="{source_attr}" target="_blank">{source}</a></p>"#,
            r#"<p><strong>Area:</strong> {area}</p>"#,
            r#"<p><strong>Tags:</strong> <span class="str-tags">{tags}</span></p>"#,
            r#"<div class="ingredients-box"><h4>Ingredients</h4><ol class="ingredient-list">{ingredients}</ol></div>"#,
            r#"</div></div>"#,
            r#"<div class="measure-box"><h4>Measure:</h4><ul class="measure-list">{measures}</ul></div>"#,
            r#"<div class="meal-instructions"><h4>Instructions:</h4>{instructions}</div>"#,
            r#"<button class="back-btn" {back}>{back_label}</button>"#,
        ),
        heading = text(view.heading),
        thumb = attr(&view.thumbnail),
        name_attr = attr(&view.name),
        name = text(&view.name),
        category = text(&view.category),
        source_attr = attr(&view.source),
        source = text(&view.source),
        area = text(&view.area),
        tags = text(&view.tags),
        ingredients = ingredients,
        measures = measures,
        instructions = instructions,
        back = action_attrs(&view.back),
        back_label = text(view.back_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_meal_grid, search_title};

    #[test]
    fn test_tile_escapes_label_and_attributes() {
        let t = Tile {
            label: "Mac & <Cheese>".into(),
            thumbnail: "https://example.com/a.jpg?x=\"1\"".into(),
            action: Action::SelectMeal("7\"".into()),
        };
        let html = tile("meal-card", &t);
        assert!(html.contains("<p>Mac &amp; &lt;Cheese&gt;</p>"));
        assert!(html.contains(r#"data-value="7&quot;""#));
        assert!(!html.contains("<Cheese>"));
    }

    #[test]
    fn test_empty_grid_html() {
        let grid = render_meal_grid(None, &search_title("xyz"), None);
        let html = meal_grid(&grid);
        assert!(html.contains(r#"<h3 class="section-title">Search results for "xyz"</h3>"#));
        assert!(html.contains("No meals found."));
        assert!(!html.contains("meal-card"));
    }

    #[test]
    fn test_menu_html() {
        let menu = CategoryMenu {
            close: Action::ToggleMenu,
            links: vec![crate::view::MenuLink {
                label: "Beef".into(),
                action: Action::SelectCategory("Beef".into()),
            }],
        };
        let html = category_menu(&menu);
        assert!(html.starts_with(r#"<div class="menu-close" data-action="toggle-menu">"#));
        assert!(html.contains(
            r##"<a href="#" data-action="select-category" data-value="Beef">Beef</a>"##
        ));
    }
}
