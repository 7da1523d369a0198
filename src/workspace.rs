use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use cph_lang::LanguageManager;

/// Name of the workspace file holding the sample input.
pub const INPUT_FILE_NAME: &str = "inputs.txt";
/// Name of the workspace file holding the expected output.
pub const OUTPUT_FILE_NAME: &str = "outputs.txt";
/// File stem of the scaffolded solution file.
pub const SOLUTION_FILE_STEM: &str = "solution";

/// Whether the entry must not be searched: hidden files and build directories.
fn is_excluded(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    entry.depth() > 0 && (name.starts_with('.') || (entry.file_type().is_dir() && name == "target"))
}

/// The entries of the workspace tree, depth-first in file name order.
fn walk_workspace(root: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry))
        .filter_map(Result::ok)
}

/// Search the workspace tree for the first file with the given name.
///
/// The first match in walk order wins: in a workspace with more than one problem the picked file
/// is just the first one found. Good enough for the single-problem workspaces this tool targets,
/// not guaranteed-correct beyond them.
pub fn find_file<P: AsRef<Path>>(root: P, name: &str) -> Option<PathBuf> {
    for entry in walk_workspace(root.as_ref()) {
        if entry.file_type().is_file() && entry.file_name() == OsStr::new(name) {
            debug!("Found {} at {:?}", name, entry.path());
            return Some(entry.into_path());
        }
    }
    None
}

/// Search the workspace tree for a `solution.*` file in a supported language, with the same
/// first-match policy of [`find_file`](fn.find_file.html).
pub fn find_solution<P: AsRef<Path>>(root: P) -> Option<PathBuf> {
    for entry in walk_workspace(root.as_ref()) {
        if entry.file_type().is_file()
            && entry.path().file_stem() == Some(OsStr::new(SOLUTION_FILE_STEM))
            && LanguageManager::detect_language(entry.path()).is_some()
        {
            debug!("Found the solution at {:?}", entry.path());
            return Some(entry.into_path());
        }
    }
    None
}
