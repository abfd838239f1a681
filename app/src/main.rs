#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

mod components;
mod service;

use components::{HistoryList, RecipeCard, SearchBar};
use models::Recipe;
use service::MealDb;
use session::{FetchState, Machine, RecipeService, ServiceError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

enum Message {
    FetchRandom,
    Search(String),
    Resolved(Result<Recipe, ServiceError>),
    SelectFromHistory(Recipe),
}

/// Application root. Owns the fetch machine (and with it the history) and
/// hands slices of it down to the components.
struct Model {
    machine: Machine,
    validation: Option<String>,
}

impl Component for Model {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // The machine starts out loading; fire the matching startup fetch.
        ctx.link().send_message(Message::FetchRandom);

        Self {
            machine: Machine::new(),
            validation: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::FetchRandom => {
                self.validation = None;
                self.machine.begin_random();

                let link = ctx.link().clone();

                spawn_local(async move {
                    link.send_message(Message::Resolved(MealDb.fetch_random().await));
                });

                true
            }
            Message::Search(term) => match self.machine.begin_search(&term) {
                Ok(()) => {
                    self.validation = None;

                    let link = ctx.link().clone();

                    spawn_local(async move {
                        link.send_message(Message::Resolved(MealDb.search_by_name(&term).await));
                    });

                    true
                }
                Err(err) => {
                    self.validation = Some(err.to_string());
                    true
                }
            },
            Message::Resolved(outcome) => {
                if let Err(err) = &outcome {
                    log::error!("Recipe fetch failed: {err}");
                }

                self.machine.resolve(outcome);
                true
            }
            Message::SelectFromHistory(recipe) => {
                log::info!("Showing {} from history", recipe.name);
                self.validation = None;
                self.machine.select_from_history(recipe);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = matches!(self.machine.state(), FetchState::Loading);

        let on_random = ctx.link().callback(|_| Message::FetchRandom);
        let on_search = ctx.link().callback(Message::Search);
        let on_select = ctx.link().callback(Message::SelectFromHistory);

        html! {
            <div class="container">
                <header class="header">
                    <h1>{ "🍴 Recipe of the Day" }</h1>
                    <p class="subtitle">
                        { "Don't know what to cook today? Discover a new recipe with a single click!" }
                    </p>
                </header>
                <main>
                    <button class="random" onclick={on_random} disabled={loading}>
                        { if loading { "Fetching..." } else { "Surprise me!" } }
                    </button>
                    <SearchBar on_search={on_search} disabled={loading} error={self.validation.clone()} />
                    { self.view_state() }
                    <HistoryList recipes={self.machine.history().to_vec()} on_select={on_select} />
                </main>
            </div>
        }
    }
}

impl Model {
    fn view_state(&self) -> Html {
        match self.machine.state() {
            FetchState::Loading => html! { <p class="loading">{ "Loading..." }</p> },
            FetchState::Error(message) => html! { <p class="error">{ message.clone() }</p> },
            FetchState::Success(recipe) => html! { <RecipeCard recipe={recipe.clone()} /> },
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::start_app::<Model>();
}
