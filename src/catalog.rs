//! In-memory recipe catalog and calorie checks.

use crate::model::Recipe;
use crate::store::{RecipeStore, Skipped};
use anyhow::Result;

/// Calorie total above which a recipe is flagged.
pub const DEFAULT_CALORIE_THRESHOLD: u64 = 300;

/// Outcome of comparing a recipe's calories against a threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalorieCheck {
    pub recipe: String,
    pub total: u64,
    pub threshold: u64,
    pub exceeded: bool,
}

/// Sum of a recipe's ingredient calories.
pub fn total_calories(recipe: &Recipe) -> u64 {
    recipe.total_calories()
}

/// `exceeded` is true only when the total is strictly above `threshold`.
pub fn check_calories(recipe: &Recipe, threshold: u64) -> CalorieCheck {
    let total = recipe.total_calories();
    CalorieCheck {
        recipe: recipe.name().to_string(),
        total,
        threshold,
        exceeded: total > threshold,
    }
}

/// Recipes loaded for the current session.
///
/// Populated once from a store. Recipes created later are written to the
/// store but only show up here after the next load.
#[derive(Debug, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load every recipe from `store`, returning what was skipped alongside.
    pub fn load(store: &impl RecipeStore) -> Result<(Self, Vec<Skipped>)> {
        let report = store.load_all()?;
        tracing::debug!(
            recipes = report.recipes.len(),
            skipped = report.skipped.len(),
            "catalog loaded"
        );
        Ok((Self::new(report.recipes), report.skipped))
    }

    /// Case-insensitive exact match; first match in load order wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        let wanted = name.to_lowercase();
        self.recipes
            .iter()
            .find(|r| r.name().to_lowercase() == wanted)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(Recipe::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodGroup, Ingredient};
    use crate::store::MemoryStore;

    fn recipe_with_calories(name: &str, calories: &[u32]) -> Recipe {
        let ingredients = calories
            .iter()
            .enumerate()
            .map(|(i, c)| Ingredient::new(format!("item{}", i), "1", "g", *c, FoodGroup::StarchyFoods))
            .collect();
        Recipe::new(name, ingredients, vec!["Cook".into()])
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let catalog = Catalog::new(vec![recipe_with_calories("pasta", &[10])]);
        assert_eq!(catalog.find_by_name("Pasta").map(Recipe::name), Some("pasta"));
        assert_eq!(catalog.find_by_name("PASTA").map(Recipe::name), Some("pasta"));
        assert!(catalog.find_by_name("past").is_none());
        assert!(catalog.find_by_name("pasta ").is_none());
    }

    #[test]
    fn test_find_by_name_first_wins() {
        let catalog = Catalog::new(vec![
            recipe_with_calories("Soup", &[1]),
            recipe_with_calories("SOUP", &[2]),
        ]);
        assert_eq!(catalog.find_by_name("soup").unwrap().total_calories(), 1);
    }

    #[test]
    fn test_total_calories_sum() {
        let recipe = recipe_with_calories("Mix", &[120, 80, 0, 45]);
        assert_eq!(total_calories(&recipe), 245);
        assert_eq!(total_calories(&recipe_with_calories("Empty", &[])), 0);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = check_calories(&recipe_with_calories("At", &[300]), DEFAULT_CALORIE_THRESHOLD);
        assert!(!at.exceeded);
        assert_eq!(at.total, 300);

        let above = check_calories(&recipe_with_calories("Above", &[200, 101]), DEFAULT_CALORIE_THRESHOLD);
        assert!(above.exceeded);
        assert_eq!(above.recipe, "Above");
        assert_eq!(above.total, 301);
        assert_eq!(above.threshold, 300);
    }

    #[test]
    fn test_custom_threshold() {
        let check = check_calories(&recipe_with_calories("Snack", &[150]), 100);
        assert!(check.exceeded);
    }

    #[test]
    fn test_load_from_store() {
        let store = MemoryStore::new();
        store.insert_raw("a.txt", "Pasta\nNoodles,1,pack,400,1\nBoil");
        store.insert_raw("b.txt", "Broken\nBoil");
        store.insert_raw("c.txt", "Salad\nLettuce,1,head,15,2\nbad line\nToss;Serve");

        let (catalog, skipped) = Catalog::load(&store).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Pasta", "Salad"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(skipped.len(), 2);
        assert!(matches!(skipped[0], Skipped::File { line_count: 2, .. }));
        assert!(matches!(skipped[1], Skipped::Line { line_number: 3, .. }));
    }

    #[test]
    fn test_empty_catalog() {
        let (catalog, skipped) = Catalog::load(&MemoryStore::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(skipped.is_empty());
        assert!(catalog.find_by_name("anything").is_none());
    }
}
