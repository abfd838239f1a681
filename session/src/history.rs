use models::Recipe;

/// Ordered record of every recipe viewed this session, most recent last.
///
/// An id appears at most once: viewing a dish again moves its entry to the
/// tail instead of duplicating it. Lives for the process lifetime, nothing
/// is ever removed or persisted.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Recipe>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a viewed recipe at the tail, promoting an existing entry.
    pub fn append(&mut self, recipe: Recipe) {
        self.entries.retain(|entry| entry.id != recipe.id);
        self.entries.push(recipe);
    }

    /// Full viewing order, oldest first.
    pub fn list(&self) -> &[Recipe] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            ..Recipe::default()
        }
    }

    #[test]
    fn appends_in_viewing_order() {
        let mut history = History::new();
        history.append(recipe("1", "Carbonara"));
        history.append(recipe("2", "Goulash"));

        let names: Vec<_> = history.list().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Carbonara", "Goulash"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn promotes_a_repeat_viewing_instead_of_duplicating() {
        let mut history = History::new();
        history.append(recipe("1", "Carbonara"));
        history.append(recipe("2", "Goulash"));
        history.append(recipe("1", "Carbonara"));

        let ids: Vec<_> = history.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn starts_empty() {
        assert!(History::new().is_empty());
    }
}
