use models::Recipe;
use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub recipes: Vec<Recipe>,
    pub on_select: Callback<Recipe>,
}

/// The recipes viewed this session, oldest first. Clicking an entry shows
/// it again without refetching.
#[function_component(HistoryList)]
pub fn history_list(Props { recipes, on_select }: &Props) -> Html {
    if recipes.is_empty() {
        return html! {};
    }

    let items = recipes
        .iter()
        .map(|recipe| {
            let on_click = {
                let on_select = on_select.clone();
                let recipe = recipe.clone();

                Callback::from(move |_| on_select.emit(recipe.clone()))
            };

            html! {
                <li key={recipe.id.clone()} onclick={on_click}>
                    <span class="name">{ recipe.name.clone() }</span>
                    { for recipe.category.iter().map(|category| html! {
                        <span class="category">{ category.clone() }</span>
                    }) }
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section class="history">
            <h2>{ "Recipe history" }</h2>
            <ul>{ items }</ul>
        </section>
    }
}
