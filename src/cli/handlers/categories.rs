//! Handlers for `categories` and `category add|edit|rm`.

use anyhow::{Context, Result};

use crate::cli::output::{CategoryListing, OutputFormat, print_json};
use crate::cli::{
    CategoriesArgs, CategoryAddArgs, CategoryCommand, CategoryEditArgs, CategoryRemoveArgs,
};
use crate::notebook::Notebook;
use crate::store::Store;

use super::resolve::resolve_category;

/// Number of notes whose category is exactly `name`.
fn usage_count<S: Store>(notebook: &Notebook<S>, name: &str) -> usize {
    notebook
        .notes()
        .notes()
        .iter()
        .filter(|n| n.category() == name)
        .count()
}

pub fn handle_categories<S: Store>(args: &CategoriesArgs, notebook: &Notebook<S>) -> Result<()> {
    let categories = notebook.categories().categories();

    match args.format {
        OutputFormat::Human => {
            if categories.is_empty() {
                println!("No categories found.");
                return Ok(());
            }
            for c in categories {
                println!(
                    "{:<10}  {:<30}  {:<8}  {}",
                    c.id().prefix(),
                    c.name(),
                    c.color(),
                    usage_count(notebook, c.name())
                );
            }
        }
        OutputFormat::Json => {
            let listings: Vec<CategoryListing> = categories
                .iter()
                .map(|c| CategoryListing::new(c, usage_count(notebook, c.name())))
                .collect();
            print_json(listings)?;
        }
        OutputFormat::Ids => {
            for c in categories {
                println!("{}", c.id());
            }
        }
    }
    Ok(())
}

pub fn handle_category<S: Store>(
    command: &CategoryCommand,
    notebook: &mut Notebook<S>,
) -> Result<()> {
    match command {
        CategoryCommand::Add(args) => handle_category_add(args, notebook),
        CategoryCommand::Edit(args) => handle_category_edit(args, notebook),
        CategoryCommand::Remove(args) => handle_category_remove(args, notebook),
    }
}

fn handle_category_add<S: Store>(
    args: &CategoryAddArgs,
    notebook: &mut Notebook<S>,
) -> Result<()> {
    let category = notebook
        .add_category(&args.name, &args.color)
        .with_context(|| format!("failed to add category '{}'", args.name.trim()))?;
    println!(
        "Added category: {} {} [{}]",
        category.name(),
        category.color(),
        category.id().prefix()
    );
    Ok(())
}

fn handle_category_edit<S: Store>(
    args: &CategoryEditArgs,
    notebook: &mut Notebook<S>,
) -> Result<()> {
    let mut category = resolve_category(notebook, &args.category)?;
    let old_name = category.name().to_string();

    if let Some(name) = &args.name {
        category
            .set_name(name)
            .with_context(|| format!("invalid category name '{}'", name))?;
    }
    if let Some(color) = &args.color {
        category
            .set_color(color)
            .with_context(|| format!("invalid category color '{}'", color))?;
    }

    let relabelled = notebook
        .update_category(category.clone())
        .context("failed to save category")?
        .unwrap_or(0);

    if old_name != category.name() {
        println!(
            "Renamed category '{}' to '{}' ({} note(s) updated)",
            old_name,
            category.name(),
            relabelled
        );
    } else {
        println!("Updated category: {} {}", category.name(), category.color());
    }
    Ok(())
}

fn handle_category_remove<S: Store>(
    args: &CategoryRemoveArgs,
    notebook: &mut Notebook<S>,
) -> Result<()> {
    let category = resolve_category(notebook, &args.category)?;
    let cleared = notebook
        .delete_category(category.id())
        .context("failed to delete category")?
        .unwrap_or(0);
    println!(
        "Deleted category '{}' ({} note(s) now uncategorized)",
        category.name(),
        cleared
    );
    Ok(())
}
