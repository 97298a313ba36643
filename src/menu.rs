//! Interactive console menu.
//!
//! Reads answers line by line from any `BufRead` and writes prompts to any
//! `Write`, so a whole session can be scripted. Running out of input ends the
//! session the same way choosing "Exit" does.

use crate::catalog::Catalog;
use crate::model::{FoodGroup, Ingredient, Recipe, parse_calorie};
use crate::output::{write_recipe_details, write_success};
use crate::store::{RecipeStore, validate_recipe_name};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use thiserror::Error;

const BANNER_RULE: &str = "************************";

#[derive(Error, Debug)]
#[error("input closed")]
struct InputClosed;

/// One interactive session over a loaded catalog.
pub struct Menu<S, R, W> {
    catalog: Catalog,
    store: S,
    calorie_threshold: u64,
    input: R,
    out: W,
}

impl<S: RecipeStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(catalog: Catalog, store: S, calorie_threshold: u64, input: R, out: W) -> Self {
        Self {
            catalog,
            store,
            calorie_threshold,
            input,
            out,
        }
    }

    /// Give back the output sink (used to inspect scripted sessions).
    pub fn into_output(self) -> W {
        self.out
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Ask until `parse` accepts the answer, repeating `retry` on each failure.
    fn prompt_until<T>(
        &mut self,
        message: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        writeln!(self.out, "{}", message)?;
        loop {
            self.out.flush()?;
            let answer = self.read_line()?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            writeln!(self.out, "{}", retry.yellow())?;
        }
    }

    /// Welcome banner and launch gate. Returns false when the user declines.
    pub fn welcome(&mut self) -> Result<bool> {
        writeln!(self.out, "{}", "Welcome to Gourmet Guide!".bold())?;
        writeln!(self.out, "*****************************")?;
        writeln!(self.out)?;
        let answer = match self.prompt("Enter '1' to launch menu or any other key to exit:") {
            Ok(answer) => answer,
            Err(e) if e.is::<InputClosed>() => String::new(),
            Err(e) => return Err(e),
        };
        if answer.trim() == "1" {
            return Ok(true);
        }
        writeln!(self.out, "Exiting the program.")?;
        Ok(false)
    }

    /// Main menu loop. Returns when the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.run_once() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(e) if e.is::<InputClosed>() => {
                    tracing::debug!("input closed, leaving menu");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn run_once(&mut self) -> Result<bool> {
        writeln!(self.out, "Please select one of the following menu items:")?;
        writeln!(self.out, "(1) Create a new recipe")?;
        writeln!(self.out, "(2) Display list of recipes")?;
        writeln!(self.out, "(3) Exit application")?;
        self.out.flush()?;

        let answer = self.read_line()?;
        let Ok(choice) = answer.trim().parse::<i32>() else {
            writeln!(self.out, "{}", "Invalid input. Please enter a number.".yellow())?;
            return Ok(true);
        };

        match choice {
            1 => {
                self.banner("CREATE A NEW RECIPE")?;
                self.create_recipe()?;
            }
            2 => {
                self.banner("LIST OF RECIPES")?;
                self.display_recipes()?;
            }
            3 => {
                self.banner("EXIT APPLICATION")?;
                return Ok(false);
            }
            _ => {
                writeln!(
                    self.out,
                    "{}",
                    "Invalid choice. Please select a valid option.".yellow()
                )?;
            }
        }
        Ok(true)
    }

    fn banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "{}", title.bold())?;
        writeln!(self.out, "{}", BANNER_RULE)?;
        Ok(())
    }

    fn create_recipe(&mut self) -> Result<()> {
        let name = self.prompt_until(
            "Enter the name of the recipe:",
            "Please enter a non-empty name without slashes.",
            |s| validate_recipe_name(s).ok().map(|_| s.to_string()),
        )?;

        let ingredient_count = self.prompt_until(
            "Enter the number of ingredients:",
            "Please enter a valid positive number for the number of ingredients.",
            parse_positive,
        )?;

        let mut ingredients = Vec::with_capacity(ingredient_count);
        for i in 0..ingredient_count {
            ingredients.push(self.read_ingredient(i + 1)?);
        }

        let step_count = self.prompt_until(
            "Enter the number of steps:",
            "Please enter a valid positive number.",
            parse_positive,
        )?;

        let mut steps = Vec::with_capacity(step_count);
        for i in 0..step_count {
            steps.push(self.prompt(&format!("Enter step {}:", i + 1))?);
        }

        let recipe = Recipe::new(name, ingredients, steps);
        self.store.write(&recipe)?;
        tracing::info!(recipe = recipe.name(), "recipe created");
        writeln!(self.out)?;
        write_success(
            &mut self.out,
            &format!("Recipe '{}' was created successfully!", recipe.name()),
        )?;
        Ok(())
    }

    fn read_ingredient(&mut self, number: usize) -> Result<Ingredient> {
        let name = self.prompt(&format!("Enter name for ingredient {}:", number))?;
        let quantity = self.prompt(&format!("Enter quantity for {}:", name))?;
        let unit = self.prompt(&format!(
            "Enter unit of measurement for {} (e.g., grams, cups):",
            name
        ))?;
        let calorie = self.prompt_until(
            &format!("Enter calorie count for {}:", name),
            "Please enter a valid non-negative integer for the calorie count.",
            parse_calorie,
        )?;

        let mut group_prompt = format!("Specify the food group for {}:", name);
        for group in FoodGroup::ALL {
            group_prompt.push_str(&format!("\n{} - {}", group.code(), group.description()));
        }
        let food_group = self.prompt_until(
            &group_prompt,
            "Please enter a valid food group number between 1 and 7.",
            |s| s.trim().parse::<u8>().ok().and_then(FoodGroup::from_code),
        )?;

        Ok(Ingredient::new(name, quantity, unit, calorie, food_group))
    }

    fn display_recipes(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.out, "No recipes available.")?;
            return Ok(());
        }

        writeln!(self.out, "List of Recipes:")?;
        for name in self.catalog.names() {
            writeln!(self.out, "- {}", name)?;
        }

        let input = self.prompt(
            "Enter the name of the recipe to display details (or type 'b' to return to the main menu):\n",
        )?;
        if input.eq_ignore_ascii_case("b") {
            return Ok(());
        }

        match self.catalog.find_by_name(&input) {
            Some(recipe) => {
                let check = write_recipe_details(&mut self.out, recipe, self.calorie_threshold)?;
                if check.exceeded {
                    tracing::info!(recipe = %check.recipe, total = check.total, "calorie threshold exceeded");
                }
            }
            None => writeln!(self.out, "{}", format!("Recipe '{}' not found.", input).red())?,
        }
        Ok(())
    }
}

fn parse_positive(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|n| *n >= 1)
}
