//! Fetch lifecycle and viewing history for the recipe browser.
//!
//! The [`Machine`] owns the state of the single "current recipe" view and
//! the session's [`History`]; a [`RecipeService`] implementation supplies
//! the actual lookups.

mod error;
mod history;
mod machine;
mod service;

pub use error::{ServiceError, ValidationError};
pub use history::History;
pub use machine::{FetchState, Machine};
pub use service::{first_recipe, RecipeService};
