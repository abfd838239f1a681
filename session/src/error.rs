use thiserror::Error;

/// Errors surfaced by a recipe lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Transport failure or a non-success HTTP status.
    #[error("Network request failed: {0}")]
    Network(String),
    /// Well-formed response with no recipes in it. Carries the search term
    /// when the lookup was a search.
    #[error("{}", not_found_message(.0.as_deref()))]
    NotFound(Option<String>),
}

/// Rejected before any network call; surfaced next to the input, never
/// stored in the fetch state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Enter a recipe name to search for.")]
pub struct ValidationError;

fn not_found_message(term: Option<&str>) -> String {
    match term {
        Some(term) => format!("No recipe found for \"{term}\"."),
        None => "No recipe found.".to_string(),
    }
}
