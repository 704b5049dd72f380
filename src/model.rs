use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Number of ingredient/measure slots a TheMealDB record carries
pub const INGREDIENT_SLOTS: usize = 20;

/// A food category as listed by `categories.php`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(
        rename = "strCategoryThumb",
        default,
        deserialize_with = "null_as_default"
    )]
    pub thumbnail: String,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

/// A meal as it appears in listings (search and filter results)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    /// Only present on search results; filter results omit it
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
}

/// One kept ingredient line of a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Empty when the API had no measure for this slot
    pub measure: String,
}

/// Full meal record from `lookup.php`, already cleaned up.
/// The API's flat record is decoded through `RawMealDetail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: String,
    pub area: String,
    pub source: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

impl MealDetail {
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    pub fn measures(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.measure.as_str())
    }
}

/// Wire shape of a lookup record. Ingredient and measure slots are flat
/// `strIngredientN` / `strMeasureN` keys, so they land in `slots`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMealDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl From<RawMealDetail> for MealDetail {
    fn from(raw: RawMealDetail) -> Self {
        let ingredients = collect_ingredients(&raw.slots);
        MealDetail {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            area: raw.area.unwrap_or_default(),
            source: raw.source.unwrap_or_default(),
            tags: raw.tags.as_deref().map(split_tags).unwrap_or_default(),
            ingredients,
            instructions: raw
                .instructions
                .as_deref()
                .map(split_paragraphs)
                .unwrap_or_default(),
        }
    }
}

/// Treats an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn slot_text<'a>(slots: &'a HashMap<String, Value>, key: &str) -> Option<&'a str> {
    slots.get(key).and_then(Value::as_str).map(str::trim)
}

/// Walks slots 1..=20 in order and keeps those with a non-blank ingredient
fn collect_ingredients(slots: &HashMap<String, Value>) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|i| {
            let name = slot_text(slots, &format!("strIngredient{i}"))?;
            if name.is_empty() {
                return None;
            }
            let measure = slot_text(slots, &format!("strMeasure{i}")).unwrap_or_default();
            Some(Ingredient {
                name: name.to_string(),
                measure: measure.to_string(),
            })
        })
        .collect()
}

/// Splits the free-text `strTags` field, e.g. "Meat,Casserole"
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Splits instructions on line breaks, dropping blank lines
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
