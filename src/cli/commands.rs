use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use colored::Colorize;
use tracing::{debug, instrument};

use crate::arena::FamilyTree;
use crate::builder::TreeBuilder;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::config::Settings;
use crate::errors::TreeError;
use crate::query::most_recent_common_ancestor;
use crate::select::select_file_with_suffix;
use crate::tree_traits::TreeConvert;

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Show { file }) => _show(file.as_deref()),
        Some(Commands::Tree { file }) => _tree(file.as_deref()),
        Some(Commands::Mrca { name1, name2, file }) => _mrca(file.as_deref(), name1, name2),
        Some(Commands::Ancestors { name, file }) => _ancestors(file.as_deref(), name),
        Some(Commands::Leaves { file }) => _leaves(file.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        None => Ok(()),
    }
}

/// Resolve the lineage file: the given path, or interactive selection
/// in the configured data directory.
fn resolve_file(file: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = file {
        if !path.exists() {
            return Err(anyhow!("File does not exist: {:?}", path));
        }
        return Ok(path.to_path_buf());
    }
    let settings = Settings::load()?;
    debug!("selecting from {:?}", settings.data_dir);
    let selected = select_file_with_suffix(&settings.data_dir, &settings.suffix)
        .ok_or_else(|| anyhow!("No file selected"))?;
    Ok(PathBuf::from(selected))
}

fn load_tree(file: Option<&Path>) -> Result<FamilyTree> {
    let path = resolve_file(file)?;
    debug!("building tree from {:?}", path);
    Ok(TreeBuilder::build_from_path(&path)?)
}

#[instrument]
fn _show(file: Option<&Path>) -> Result<()> {
    let tree = load_tree(file)?;
    print!("{}", tree.render());
    Ok(())
}

#[instrument]
fn _tree(file: Option<&Path>) -> Result<()> {
    let tree = load_tree(file)?;
    println!(
        "{} people, {} generations",
        tree.person_count(),
        tree.generations()
    );
    println!("{}", tree.to_tree_string());
    Ok(())
}

#[instrument]
fn _mrca(file: Option<&Path>, name1: &str, name2: &str) -> Result<()> {
    let tree = load_tree(file)?;
    match most_recent_common_ancestor(&tree, name1, name2)? {
        Some(idx) => {
            if let Some(node) = tree.get_node(idx) {
                println!("{}", node.person);
            }
        }
        None => println!("{}", "no common ancestor".yellow()),
    }
    Ok(())
}

#[instrument]
fn _ancestors(file: Option<&Path>, name: &str) -> Result<()> {
    let tree = load_tree(file)?;
    let idx = tree
        .find_by_name(name)
        .ok_or_else(|| TreeError::UnknownPerson(name.to_string()))?;
    for ancestor in tree.ancestors(idx) {
        if let Some(node) = tree.get_node(ancestor) {
            println!("{}", node.person);
        }
    }
    Ok(())
}

#[instrument]
fn _leaves(file: Option<&Path>) -> Result<()> {
    let tree = load_tree(file)?;
    for name in tree.leaves() {
        println!("{}", name);
    }
    Ok(())
}

#[instrument]
fn _config_show() -> Result<()> {
    let settings = Settings::load()?;
    print!("{}", settings.to_toml()?);
    Ok(())
}

#[instrument]
fn _config_init() -> Result<()> {
    let path = Settings::global_config_path()
        .ok_or_else(|| anyhow!("Cannot determine config directory"))?;
    if path.exists() {
        return Err(anyhow!("Config already exists: {:?}", path));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Settings::default().to_toml()?)?;
    println!("{} {:?}", "Created".green(), path);
    Ok(())
}

#[instrument]
fn _config_path() -> Result<()> {
    let path = Settings::global_config_path()
        .ok_or_else(|| anyhow!("Cannot determine config directory"))?;
    println!("{}", path.display());
    Ok(())
}
