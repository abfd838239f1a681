use models::Recipe;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe: Recipe,
}

#[function_component(RecipeCard)]
pub fn recipe_card(Props { recipe }: &Props) -> Html {
    let classification = match (&recipe.category, &recipe.area) {
        (Some(category), Some(area)) => Some(format!("{category} | {area}")),
        (Some(category), None) => Some(category.clone()),
        (None, Some(area)) => Some(area.clone()),
        (None, None) => None,
    };

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            let line = match &ingredient.measure {
                Some(measure) => format!("{measure} {}", ingredient.name),
                None => ingredient.name.clone(),
            };

            html! { <li>{ line }</li> }
        })
        .collect::<Html>();

    html! {
        <div class="recipe-card">
            { for recipe.image_url.iter().map(|url| html! {
                <img src={url.clone()} alt={recipe.name.clone()} />
            }) }
            <h2>{ recipe.name.clone() }</h2>
            { for classification.map(|line| html! {
                <p class="classification">{ line }</p>
            }) }
            <h3>{ "Ingredients" }</h3>
            <ul class="ingredients">{ ingredients }</ul>
            { for recipe.instructions.iter().map(|instructions| html! {
                <>
                <h3>{ "Instructions" }</h3>
                // Instructions come with meaningful line breaks.
                <p class="instructions" style="white-space: pre-wrap">{ instructions.clone() }</p>
                </>
            }) }
        </div>
    }
}
