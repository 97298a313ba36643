//! Common test utilities.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp dir with an empty `Recipes` directory inside it.
pub fn create_test_env() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let recipes = dir.path().join("Recipes");
    std::fs::create_dir_all(&recipes).unwrap();
    (dir, recipes)
}

/// Write a raw recipe file and return its path.
pub fn write_recipe_file(recipes_dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = recipes_dir.join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}
