//! Gourmet Guide - a console recipe catalog backed by plain-text files.
//!
//! Each recipe lives in its own `<name>.txt` file inside a recipes directory:
//!
//! ```text
//! Soup
//! Water,2,cups,0,7
//! Salt,1,tsp,0,6
//! Boil water;Add salt
//! ```
//!
//! The first line is the recipe name, the last line holds the preparation
//! steps separated by `;`, and every line in between is an ingredient:
//! `name,quantity,unit,calorie,food-group-code`.
//!
//! # Food Groups
//!
//! | Code | Group |
//! |------|-------|
//! | 1 | Starchy foods |
//! | 2 | Vegetables and fruits |
//! | 3 | Dry beans, peas, lentils and soya |
//! | 4 | Chicken, fish, meat and eggs |
//! | 5 | Milk and dairy products |
//! | 6 | Fats and oil |
//! | 7 | Water |
//!
//! # Loading
//!
//! [`Catalog::load`] reads every recipe from a [`RecipeStore`]. Files with fewer
//! than three lines and ingredient lines that do not parse are skipped and
//! reported; they never abort the load.

pub mod catalog;
pub mod config;
pub mod menu;
pub mod model;
pub mod output;
pub mod store;

pub use catalog::{CalorieCheck, Catalog, DEFAULT_CALORIE_THRESHOLD, check_calories, total_calories};
pub use config::Config;
pub use menu::Menu;
pub use model::{FoodGroup, Ingredient, Recipe};
pub use store::{FileStore, LoadReport, MemoryStore, RecipeStore, Skipped};
