use crate::ServiceError;
use models::{MealsResponse, Recipe};

/// A recipe lookup backend.
///
/// One outbound request per call, no retries; timeouts are whatever the
/// transport enforces. The futures are not required to be `Send` so that
/// browser implementations can hold JS values across await points.
#[async_trait::async_trait(?Send)]
pub trait RecipeService {
    /// Fetch one randomly chosen recipe.
    async fn fetch_random(&self) -> Result<Recipe, ServiceError>;

    /// Look up recipes matching `term` by name and surface the first match.
    ///
    /// The term goes out URL-query-encoded exactly as given; callers are
    /// expected to have validated it already.
    async fn search_by_name(&self, term: &str) -> Result<Recipe, ServiceError>;
}

/// Reduce a decoded lookup envelope to the single surfaced recipe.
///
/// Only the first match is surfaced even when the service returned several.
/// Pass the search `term` to get a not-found message that names it.
pub fn first_recipe(
    response: MealsResponse,
    term: Option<&str>,
) -> Result<Recipe, ServiceError> {
    response
        .meals
        .and_then(|meals| meals.into_iter().next())
        .map(Recipe::from)
        .ok_or_else(|| ServiceError::NotFound(term.map(str::to_owned)))
}
