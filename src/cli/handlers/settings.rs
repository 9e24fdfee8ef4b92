//! Handlers for `view` and `theme`.

use anyhow::{Context, Result};

use crate::cli::{ThemeArgs, ThemeChoice, ViewArgs};
use crate::domain::{ThemeMode, View};
use crate::notebook::Notebook;
use crate::store::Store;

pub fn handle_view<S: Store>(args: &ViewArgs, notebook: &mut Notebook<S>) -> Result<()> {
    match args.view {
        Some(view) => {
            notebook.set_view(view).context("failed to save view")?;
            println!("View: {}", view);
        }
        None => {
            for view in View::ALL {
                let marker = if view == notebook.view() { '*' } else { ' ' };
                println!("{} {}", marker, view);
            }
        }
    }
    Ok(())
}

pub fn handle_theme<S: Store>(args: &ThemeArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let theme = match args.mode {
        None => notebook.theme(),
        Some(ThemeChoice::Toggle) => notebook.toggle_theme().context("failed to save theme")?,
        Some(ThemeChoice::Light) => set(notebook, ThemeMode::Light)?,
        Some(ThemeChoice::Dark) => set(notebook, ThemeMode::Dark)?,
    };
    println!("{}", theme);
    Ok(())
}

fn set<S: Store>(notebook: &mut Notebook<S>, theme: ThemeMode) -> Result<ThemeMode> {
    notebook.set_theme(theme).context("failed to save theme")?;
    Ok(theme)
}
