//! Recipe types shared between the session core and the frontend app.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// MealDB fans ingredients out over numbered columns, twenty slots per dish.
const INGREDIENT_SLOTS: usize = 20;

/// Envelope returned by both lookup endpoints. A miss is `"meals": null`,
/// not an empty list.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MealsResponse {
    pub meals: Option<Vec<RecipeDto>>,
}

/// A recipe as MealDB serves it.
///
/// Only id and name are guaranteed; everything else is nullable. The
/// numbered `strIngredient1..20` / `strMeasure1..20` columns land in `rest`
/// and are paired up by [`Recipe::from`].
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RecipeDto {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub rest: HashMap<String, Option<String>>,
}

/// A single "1 tbsp soy sauce" line. Some dishes list an ingredient without
/// a measure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ingredient {
    pub measure: Option<String>,
    pub name: String,
}

/// A dish record, immutable once converted from the wire shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub image_url: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl From<RecipeDto> for Recipe {
    fn from(dto: RecipeDto) -> Self {
        // Slots with a blank ingredient name are padding; source order 1..20
        // is the display order.
        let ingredients = (1..=INGREDIENT_SLOTS)
            .filter_map(|index| {
                let name = dto
                    .rest
                    .get(&format!("strIngredient{index}"))?
                    .as_deref()?
                    .trim();

                if name.is_empty() {
                    return None;
                }

                let measure = dto
                    .rest
                    .get(&format!("strMeasure{index}"))
                    .and_then(|value| value.as_deref())
                    .map(str::trim)
                    .filter(|measure| !measure.is_empty())
                    .map(str::to_owned);

                Some(Ingredient {
                    measure,
                    name: name.to_owned(),
                })
            })
            .collect();

        Self {
            id: dto.id,
            name: dto.name,
            category: dto.category,
            area: dto.area,
            image_url: dto.thumbnail,
            instructions: dto.instructions,
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_recipe_payload() {
        let payload = r#"{
            "meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.\nCook the rice.",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
                "strIngredient1": "soy sauce",
                "strIngredient2": "water",
                "strIngredient3": "",
                "strIngredient4": null,
                "strMeasure1": "3/4 cup",
                "strMeasure2": " ",
                "strMeasure3": "1 tbsp",
                "strMeasure4": null
            }]
        }"#;

        let response: MealsResponse = serde_json::from_str(payload).unwrap();
        let dto = response.meals.unwrap().into_iter().next().unwrap();
        let recipe = Recipe::from(dto);

        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.category.as_deref(), Some("Chicken"));
        assert_eq!(recipe.area.as_deref(), Some("Japanese"));
        assert_eq!(
            recipe.instructions.as_deref(),
            Some("Preheat oven to 350.\nCook the rice.")
        );
        assert!(recipe.image_url.is_some());

        // The blank and null slots are dropped, the measure-less slot keeps
        // its name only.
        assert_eq!(
            recipe.ingredients,
            vec![
                Ingredient {
                    measure: Some("3/4 cup".to_string()),
                    name: "soy sauce".to_string(),
                },
                Ingredient {
                    measure: None,
                    name: "water".to_string(),
                },
            ]
        );
    }

    #[test]
    fn pairs_ingredients_with_measures_in_source_order() {
        let mut rest = HashMap::new();
        rest.insert("strIngredient1".to_string(), Some("chicken".to_string()));
        rest.insert("strMeasure1".to_string(), Some("1 lb".to_string()));
        rest.insert("strIngredient2".to_string(), Some("rice".to_string()));
        rest.insert("strMeasure2".to_string(), Some("2 cups".to_string()));

        let recipe = Recipe::from(RecipeDto {
            id: "1".to_string(),
            name: "Test".to_string(),
            rest,
            ..RecipeDto::default()
        });

        assert_eq!(
            recipe.ingredients,
            vec![
                Ingredient {
                    measure: Some("1 lb".to_string()),
                    name: "chicken".to_string(),
                },
                Ingredient {
                    measure: Some("2 cups".to_string()),
                    name: "rice".to_string(),
                },
            ]
        );
    }

    #[test]
    fn skips_blank_ingredient_slots() {
        let mut rest = HashMap::new();
        rest.insert("strIngredient1".to_string(), Some("  ".to_string()));
        rest.insert("strMeasure1".to_string(), Some("1 tsp".to_string()));
        rest.insert("strIngredient2".to_string(), None);
        rest.insert("strIngredient3".to_string(), Some("salt".to_string()));
        rest.insert("strMeasure3".to_string(), Some("".to_string()));

        let recipe = Recipe::from(RecipeDto {
            id: "2".to_string(),
            name: "Sparse".to_string(),
            rest,
            ..RecipeDto::default()
        });

        assert_eq!(
            recipe.ingredients,
            vec![Ingredient {
                measure: None,
                name: "salt".to_string(),
            }]
        );
    }

    #[test]
    fn decodes_null_meals_envelope() {
        let response: MealsResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.meals.is_none());
    }
}
