//! Handlers for `tags` and `tag add|rm`.

use anyhow::{Context, Result};

use crate::cli::output::{OutputFormat, TagListing, print_json};
use crate::cli::{TagCommand, TagNameArgs, TagsArgs};
use crate::notebook::Notebook;
use crate::repo::TagPlacement;
use crate::store::Store;

pub fn handle_tags<S: Store>(args: &TagsArgs, notebook: &Notebook<S>) -> Result<()> {
    let tags = notebook.all_tags();

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for tag in &tags {
                    if args.counts {
                        println!("{} ({})", tag.name(), tag.count());
                    } else {
                        println!("{}", tag.name());
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags
                .iter()
                .map(|t| TagListing {
                    name: t.name().to_string(),
                    count: args.counts.then_some(t.count()),
                })
                .collect();
            print_json(listings)?;
        }
        OutputFormat::Ids => {
            for tag in &tags {
                println!("{}", tag.name());
            }
        }
    }
    Ok(())
}

pub fn handle_tag<S: Store>(command: &TagCommand, notebook: &mut Notebook<S>) -> Result<()> {
    match command {
        TagCommand::Add(args) => handle_tag_add(args, notebook),
        TagCommand::Remove(args) => handle_tag_remove(args, notebook),
    }
}

fn handle_tag_add<S: Store>(args: &TagNameArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let placement = notebook
        .add_tag(&args.name)
        .with_context(|| format!("failed to add tag '{}'", args.name.trim()))?;

    let (id, created) = match &placement {
        TagPlacement::Selected(id) => (id, false),
        TagPlacement::NewNote(id) => (id, true),
    };
    let title = notebook
        .notes()
        .get(id)
        .map(|n| n.title().to_string())
        .unwrap_or_default();

    if created {
        println!(
            "Created note: {} [{}] with tag '{}'",
            title,
            id.prefix(),
            args.name.trim()
        );
    } else {
        println!(
            "Tagged: {} [{}] with '{}'",
            title,
            id.prefix(),
            args.name.trim()
        );
    }
    Ok(())
}

fn handle_tag_remove<S: Store>(args: &TagNameArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let changed = notebook
        .delete_tag(&args.name)
        .with_context(|| format!("failed to remove tag '{}'", args.name.trim()))?;

    if changed == 0 {
        println!("No notes have tag '{}'", args.name.trim());
    } else {
        println!(
            "Removed tag '{}' from {} note(s)",
            args.name.trim(),
            changed
        );
    }
    Ok(())
}
