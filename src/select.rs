//! Interactive lineage-file selection via fuzzy finder.

use std::path::Path;

use skim::prelude::*;
use walkdir::WalkDir;

/// List all files under `dir` ending in `suffix` and let the user pick
/// one with skim. Returns `None` when nothing was selected.
pub fn select_file_with_suffix(dir: &Path, suffix: &str) -> Option<String> {
    let files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.path().is_dir())
        .filter(|e| e.path().to_string_lossy().ends_with(suffix))
        .map(|e| e.path().to_string_lossy().into_owned())
        .collect();

    // Skim consumes items from a channel; dropping the sender signals
    // end of input.
    let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
    for file in files {
        let item = Arc::new(file) as Arc<dyn SkimItem>;
        tx.send(item).unwrap();
    }
    drop(tx);

    let options = SkimOptionsBuilder::default()
        .height(Some("50%"))
        .multi(false)
        .build()
        .unwrap();

    let selected_items = Skim::run_with(&options, Some(rx))
        .map(|out| out.selected_items)
        .unwrap_or_default();

    selected_items.first().map(|item| item.output().to_string())
}
