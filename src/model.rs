//! Recipe data model - food groups, ingredients and recipes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Nutritional category of an ingredient.
///
/// The numeric code (1-based) is what recipe files store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodGroup {
    StarchyFoods = 1,
    VegetablesAndFruits,
    DryBeansPeasLentilsSoya,
    ChickenFishMeatEggs,
    MilkAndDairyProducts,
    FatsAndOil,
    Water,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown food group: {0:?}")]
pub struct UnknownFoodGroup(pub String);

impl FoodGroup {
    /// All groups in code order.
    pub const ALL: [FoodGroup; 7] = [
        FoodGroup::StarchyFoods,
        FoodGroup::VegetablesAndFruits,
        FoodGroup::DryBeansPeasLentilsSoya,
        FoodGroup::ChickenFishMeatEggs,
        FoodGroup::MilkAndDairyProducts,
        FoodGroup::FatsAndOil,
        FoodGroup::Water,
    ];

    /// The 1-based code written to recipe files.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.code() == code)
    }

    /// Identifier as shown in recipe details (e.g. `StarchyFoods`).
    pub fn name(self) -> &'static str {
        match self {
            FoodGroup::StarchyFoods => "StarchyFoods",
            FoodGroup::VegetablesAndFruits => "VegetablesAndFruits",
            FoodGroup::DryBeansPeasLentilsSoya => "DryBeansPeasLentilsSoya",
            FoodGroup::ChickenFishMeatEggs => "ChickenFishMeatEggs",
            FoodGroup::MilkAndDairyProducts => "MilkAndDairyProducts",
            FoodGroup::FatsAndOil => "FatsAndOil",
            FoodGroup::Water => "Water",
        }
    }

    /// Human description used when prompting for a group.
    pub fn description(self) -> &'static str {
        match self {
            FoodGroup::StarchyFoods => "Starchy foods",
            FoodGroup::VegetablesAndFruits => "Vegetables and fruits",
            FoodGroup::DryBeansPeasLentilsSoya => "Dry beans, peas, lentils and soya",
            FoodGroup::ChickenFishMeatEggs => "Chicken, fish, meat and eggs",
            FoodGroup::MilkAndDairyProducts => "Milk and dairy products",
            FoodGroup::FatsAndOil => "Fats and oil",
            FoodGroup::Water => "Water",
        }
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the numeric code or the exact identifier.
impl FromStr for FoodGroup {
    type Err = UnknownFoodGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| UnknownFoodGroup(s.to_string()));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name() == trimmed)
            .ok_or_else(|| UnknownFoodGroup(s.to_string()))
    }
}

/// Parse a calorie count: surrounding whitespace and a sign are accepted,
/// but the value must be a non-negative integer that fits in `u32`.
pub fn parse_calorie(s: &str) -> Option<u32> {
    let value = s.trim().parse::<i64>().ok()?;
    u32::try_from(value).ok()
}

/// A single ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub calorie: u32,
    pub food_group: FoodGroup,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
        calorie: u32,
        food_group: FoodGroup,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
            calorie,
            food_group,
        }
    }
}

/// A named recipe with its ingredients and ordered preparation steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>, steps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            steps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Sum of ingredient calories; 0 for a recipe without ingredients.
    pub fn total_calories(&self) -> u64 {
        self.ingredients.iter().map(|i| u64::from(i.calorie)).sum()
    }
}
