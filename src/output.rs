//! Colored output for Gourmet Guide
//!
//! Uses owo-colors for terminal colors.

use crate::catalog::{CalorieCheck, check_calories};
use crate::model::Recipe;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Print an action header (blue, bold)
/// Example: "==> 3 recipe(s)"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print an info message (cyan)
pub fn info(message: &str) {
    println!("{} {}", "::".cyan(), message);
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}

/// Print a detail line (dimmed)
pub fn detail(message: &str) {
    eprintln!("     {}", message.dimmed());
}

/// Print a recipe name in list output
pub fn list_item(name: &str) {
    println!("  {} {}", "-".cyan(), name);
}

/// Write a success line (green) to `out`
pub fn write_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green())
}

/// Write a warning line (yellow) to `out`
pub fn write_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "warning:".yellow().bold(), message.yellow())
}

/// Warning line for a recipe above the calorie threshold.
pub fn calorie_warning(check: &CalorieCheck) -> String {
    format!(
        "Recipe '{}' exceeds {} calories (total: {})",
        check.recipe, check.threshold, check.total
    )
}

/// Write a recipe's ingredients, calorie total and steps.
///
/// Returns the calorie check so the caller can react to it.
pub fn write_recipe_details<W: Write>(
    out: &mut W,
    recipe: &Recipe,
    threshold: u64,
) -> io::Result<CalorieCheck> {
    writeln!(out, "Recipe Details for '{}':", recipe.name().bold())?;
    writeln!(out)?;
    writeln!(out, "{}", "Ingredients:".underline())?;
    for ingredient in recipe.ingredients() {
        writeln!(out, "{}", ingredient.name.bold())?;
        writeln!(out, "Quantity: {}", ingredient.quantity)?;
        writeln!(out, "Unit: {}", ingredient.unit)?;
        writeln!(out, "Calorie: {}", ingredient.calorie)?;
        writeln!(out, "Food Group: {}", ingredient.food_group)?;
    }

    let check = check_calories(recipe, threshold);
    writeln!(out, "Total Calories: {}", check.total)?;
    writeln!(out, "{}", "Steps:".underline())?;
    for step in recipe.steps() {
        writeln!(out, "- {}", step)?;
        writeln!(out)?;
    }

    if check.exceeded {
        write_warning(out, &calorie_warning(&check))?;
    }
    Ok(check)
}
