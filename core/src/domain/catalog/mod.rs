use std::sync::Arc;

mod world_foods;

pub use world_foods::WORLD_FOODS;

/// Ordered, immutable list of food names.
///
/// Matching is case-insensitive substring containment in both directions; the
/// lower-cased form of every entry is computed once at construction.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    entries: Arc<[String]>,
    lowercase: Arc<[String]>,
}

impl FoodCatalog {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let lowercase: Vec<String> = entries.iter().map(|e| e.to_lowercase()).collect();

        Self {
            entries: entries.into(),
            lowercase: lowercase.into(),
        }
    }

    /// The built-in world food list.
    pub fn world() -> Self {
        Self::new(WORLD_FOODS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the first entry, in catalog order, that is contained in `label`
    /// or that contains `label`.
    pub fn first_match(&self, label: &str) -> Option<&str> {
        let label = label.to_lowercase();

        self.lowercase
            .iter()
            .position(|entry| label.contains(entry.as_str()) || entry.contains(label.as_str()))
            .map(|index| self.entries[index].as_str())
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::world()
    }
}
