//! Recipe store - plain-text recipe files.
//!
//! One file per recipe, named `<name>.txt`:
//!
//! ```text
//! Soup
//! Water,2,cups,0,7
//! Salt,1,tsp,0,6
//! Boil water;Add salt
//! ```
//!
//! The first line is the name, the last line holds the steps joined by `;`,
//! and every line in between is an ingredient `name,quantity,unit,calorie,group`.
//! Malformed ingredient lines and files too short to be a recipe are skipped
//! and reported, never fatal.

use crate::model::{FoodGroup, Ingredient, Recipe, UnknownFoodGroup, parse_calorie};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const RECIPE_EXTENSION: &str = "txt";
pub const FIELD_SEPARATOR: char = ',';
pub const STEP_SEPARATOR: char = ';';

/// Name line + at least one ingredient line + steps line.
pub const MIN_RECIPE_LINES: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 5 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("invalid calorie value: {0:?}")]
    InvalidCalorie(String),
    #[error(transparent)]
    FoodGroup(#[from] UnknownFoodGroup),
}

/// Something the loader had to leave out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// File with fewer than [`MIN_RECIPE_LINES`] lines.
    File { path: PathBuf, line_count: usize },
    /// Ingredient line that did not parse. `line_number` is 1-based.
    Line {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: LineError,
    },
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skipped::File { path, .. } => {
                write!(f, "Skipping malformed recipe file: {}", path.display())
            }
            Skipped::Line { line, .. } => write!(f, "Skipping malformed line: {}", line),
        }
    }
}

/// Result of loading a recipe directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub recipes: Vec<Recipe>,
    pub skipped: Vec<Skipped>,
}

/// A recipe parsed from one file, with the lines that had to be dropped.
#[derive(Debug)]
pub struct ParsedRecipe {
    pub recipe: Recipe,
    pub skipped: Vec<Skipped>,
}

/// Persistence backend for recipes.
pub trait RecipeStore {
    /// Load every recipe the store holds.
    fn load_all(&self) -> Result<LoadReport>;

    /// Persist a recipe, replacing any existing one with the same name.
    fn write(&self, recipe: &Recipe) -> Result<()>;
}

/// Validate a recipe name before it becomes a file name.
///
/// Delimiters (`,` and `;`) are allowed here: the name line is never split.
pub fn validate_recipe_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("Recipe name cannot be empty");
    }
    if name.contains('/') || name.contains('\\') {
        anyhow::bail!("Invalid recipe name '{}': path separators are not allowed", name);
    }
    if name.contains('\n') || name.contains('\r') {
        anyhow::bail!("Invalid recipe name: line breaks are not allowed");
    }
    Ok(())
}

pub fn format_ingredient_line(ingredient: &Ingredient) -> String {
    format!(
        "{},{},{},{},{}",
        ingredient.name,
        ingredient.quantity,
        ingredient.unit,
        ingredient.calorie,
        ingredient.food_group.code()
    )
}

/// Serialize a recipe into file contents (trailing newline included).
pub fn format_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(recipe.name());
    out.push('\n');
    for ingredient in recipe.ingredients() {
        out.push_str(&format_ingredient_line(ingredient));
        out.push('\n');
    }
    out.push_str(&recipe.steps().join(&STEP_SEPARATOR.to_string()));
    out.push('\n');
    out
}

pub fn parse_ingredient_line(line: &str) -> Result<Ingredient, LineError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, quantity, unit, calorie, group] = fields[..] else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let calorie =
        parse_calorie(calorie).ok_or_else(|| LineError::InvalidCalorie(calorie.to_string()))?;
    let food_group: FoodGroup = group.parse()?;

    Ok(Ingredient::new(name, quantity, unit, calorie, food_group))
}

/// Parse one recipe file. `path` is only used for reporting.
///
/// Returns `Err` with the file-level skip when there are too few lines.
pub fn parse_recipe(path: &Path, content: &str) -> Result<ParsedRecipe, Skipped> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < MIN_RECIPE_LINES {
        return Err(Skipped::File {
            path: path.to_path_buf(),
            line_count: lines.len(),
        });
    }

    let last = lines.len() - 1;
    let mut ingredients = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in lines.iter().enumerate().take(last).skip(1) {
        match parse_ingredient_line(line) {
            Ok(ingredient) => ingredients.push(ingredient),
            Err(reason) => skipped.push(Skipped::Line {
                path: path.to_path_buf(),
                line_number: index + 1,
                line: line.to_string(),
                reason,
            }),
        }
    }

    // Only the final line carries steps; empty segments are kept as-is.
    let steps = lines[last].split(STEP_SEPARATOR).map(str::to_string).collect();

    Ok(ParsedRecipe {
        recipe: Recipe::new(lines[0], ingredients, steps),
        skipped,
    })
}

fn collect_parsed(report: &mut LoadReport, path: &Path, content: &str) {
    match parse_recipe(path, content) {
        Ok(parsed) => {
            for skip in &parsed.skipped {
                tracing::debug!(path = %path.display(), "{}", skip);
            }
            tracing::debug!(
                recipe = parsed.recipe.name(),
                ingredients = parsed.recipe.ingredients().len(),
                steps = parsed.recipe.steps().len(),
                "loaded recipe"
            );
            report.skipped.extend(parsed.skipped);
            report.recipes.push(parsed.recipe);
        }
        Err(skip) => {
            tracing::debug!("{}", skip);
            report.skipped.push(skip);
        }
    }
}

/// Directory of `<name>.txt` recipe files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing the recipe called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, RECIPE_EXTENSION))
    }

    /// Create the recipes directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create recipes directory: {}", self.dir.display())
        })
    }

    fn recipe_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(&self.dir.to_string_lossy()),
            RECIPE_EXTENSION
        );
        let paths = glob::glob(&pattern)
            .with_context(|| format!("Invalid recipes directory: {}", self.dir.display()))?;

        let mut files = Vec::new();
        for entry in paths {
            let path = entry.context("Failed to list recipes directory")?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl RecipeStore for FileStore {
    fn load_all(&self) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        if !self.dir.exists() {
            tracing::debug!(dir = %self.dir.display(), "recipes directory missing, nothing to load");
            return Ok(report);
        }

        for path in self.recipe_files()? {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read recipe: {}", path.display()))?;
            // Invalid UTF-8 is replaced rather than rejected; only real I/O errors abort.
            let content = String::from_utf8_lossy(&bytes);
            collect_parsed(&mut report, &path, &content);
        }

        Ok(report)
    }

    fn write(&self, recipe: &Recipe) -> Result<()> {
        validate_recipe_name(recipe.name())?;
        self.ensure_dir()?;

        let path = self.path_for(recipe.name());
        std::fs::write(&path, format_recipe(recipe))
            .with_context(|| format!("Failed to write recipe: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote recipe");
        Ok(())
    }
}

/// In-memory store holding file contents keyed by file name.
///
/// Goes through the same text format as [`FileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert raw file contents under `file_name`.
    pub fn insert_raw(&self, file_name: impl Into<String>, content: impl Into<String>) {
        self.files.borrow_mut().insert(file_name.into(), content.into());
    }

    pub fn get_raw(&self, file_name: &str) -> Option<String> {
        self.files.borrow().get(file_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl RecipeStore for MemoryStore {
    fn load_all(&self) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        for (file_name, content) in self.files.borrow().iter() {
            collect_parsed(&mut report, Path::new(file_name), content);
        }
        Ok(report)
    }

    fn write(&self, recipe: &Recipe) -> Result<()> {
        validate_recipe_name(recipe.name())?;
        let file_name = format!("{}.{}", recipe.name(), RECIPE_EXTENSION);
        self.insert_raw(file_name, format_recipe(recipe));
        Ok(())
    }
}
