use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use models::{MealsResponse, Recipe};
use session::{first_recipe, RecipeService, ServiceError};

const BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// MealDB lookups over the browser's fetch API.
pub struct MealDb;

async fn fetch_envelope(request: RequestBuilder) -> Result<MealsResponse, ServiceError> {
    let response = request
        .send()
        .await
        .map_err(|err| ServiceError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(ServiceError::Network(format!(
            "HTTP status {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|err| ServiceError::Network(err.to_string()))
}

#[async_trait(?Send)]
impl RecipeService for MealDb {
    async fn fetch_random(&self) -> Result<Recipe, ServiceError> {
        let envelope = fetch_envelope(Request::get(&format!("{BASE_URL}/random.php"))).await?;
        first_recipe(envelope, None)
    }

    async fn search_by_name(&self, term: &str) -> Result<Recipe, ServiceError> {
        let request = Request::get(&format!("{BASE_URL}/search.php")).query([("s", term)]);
        let envelope = fetch_envelope(request).await?;
        first_recipe(envelope, Some(term))
    }
}
