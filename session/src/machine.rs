use crate::{History, ServiceError, ValidationError};
use models::Recipe;

/// Outcome of the most recent fetch attempt. Exactly one variant is active
/// at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState {
    Loading,
    Success(Recipe),
    Error(String),
}

/// Fetch lifecycle for the single "current recipe" view.
///
/// Owns the [`FetchState`] and the session [`History`]. One request is
/// modeled at a time; if a second one is issued anyway, the last response
/// to land wins — there is no cancellation.
#[derive(Debug)]
pub struct Machine {
    state: FetchState,
    history: History,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Starts in `Loading`: the app fires its initial random fetch right
    /// away rather than idling until the first click.
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            history: History::new(),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn history(&self) -> &[Recipe] {
        self.history.list()
    }

    /// A random fetch is about to go out.
    pub fn begin_random(&mut self) {
        self.state = FetchState::Loading;
    }

    /// A search for `term` is about to go out.
    ///
    /// A term that trims to nothing is rejected before any network call and
    /// leaves the current state and history untouched.
    pub fn begin_search(&mut self, term: &str) -> Result<(), ValidationError> {
        if term.trim().is_empty() {
            return Err(ValidationError);
        }

        self.state = FetchState::Loading;
        Ok(())
    }

    /// Apply the outcome of a fetch. Successes are recorded in the history.
    pub fn resolve(&mut self, outcome: Result<Recipe, ServiceError>) {
        self.state = match outcome {
            Ok(recipe) => {
                self.history.append(recipe.clone());
                FetchState::Success(recipe)
            }
            Err(err) => FetchState::Error(err.to_string()),
        };
    }

    /// Show a recipe picked from the history again. No network involved:
    /// the success state is injected directly and the entry is promoted.
    pub fn select_from_history(&mut self, recipe: Recipe) {
        self.history.append(recipe.clone());
        self.state = FetchState::Success(recipe);
    }
}
