use crate::domain::model::{Recipe, Variant};
use std::collections::HashMap;

/// Base recipes keyed by trimmed, lowercased name, kept in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

fn catalog_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a base recipe. A recipe whose key already exists replaces the old one
    /// without changing its position.
    pub fn insert(&mut self, recipe: Recipe) {
        let key = catalog_key(&recipe.name);
        match self.index.get(&key) {
            Some(&slot) => {
                tracing::debug!("Replacing recipe definition for '{}'", recipe.name);
                self.recipes[slot] = recipe;
            }
            None => {
                self.index.insert(key, self.recipes.len());
                self.recipes.push(recipe);
            }
        }
    }

    /// Look up a cake-type label, deriving Mini/Premium variants from their base.
    pub fn resolve(&self, label: &str) -> Option<Recipe> {
        let (kind, base_name) = Variant::split_label(label);
        let base = self.get(base_name)?;
        Some(base.variant(kind))
    }

    /// Base recipe by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.index
            .get(&catalog_key(name))
            .map(|&slot| &self.recipes[slot])
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeCatalog {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut catalog = RecipeCatalog::new();
        for recipe in iter {
            catalog.insert(recipe);
        }
        catalog
    }
}
