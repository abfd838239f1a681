use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_search: Callback<String>,
    pub disabled: bool,
    /// Validation message to show next to the input, if any.
    pub error: Option<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &Props) -> Html {
    let term = use_state(String::default);

    let on_input = {
        let term = term.clone();

        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            term.set(input.value());
        })
    };

    let on_submit = {
        let term = term.clone();
        let on_search = props.on_search.clone();

        Callback::from(move |_| on_search.emit((*term).clone()))
    };

    html! {
        <div class="search">
            <input
                type="text"
                placeholder="Search recipes by name"
                value={(*term).clone()}
                oninput={on_input}
            />
            <button onclick={on_submit} disabled={props.disabled}>{ "Search" }</button>
            { for props.error.iter().map(|message| html! {
                <p class="validation">{ message.clone() }</p>
            }) }
        </div>
    }
}
