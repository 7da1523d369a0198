use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use colored::Colorize;

use cph_lang::LanguageManager;

use crate::error::CphError;
use crate::fetcher::{validate_problem_url, CommandFetcher, Fetcher};
use crate::opt::FetchOpt;
use crate::workspace::{find_file, INPUT_FILE_NAME, OUTPUT_FILE_NAME, SOLUTION_FILE_STEM};

/// Fetch the sample test case of the problem and scaffold the solution file.
///
/// The URL and the language are validated before any side effect. The fetcher, when one is
/// configured, must deposit both workspace files. The scaffold is then written next to the
/// discovered `inputs.txt`, or at the workspace root when nothing has been fetched yet.
///
/// Re-running this operation overwrites the solution file: that is the explicit re-trigger, the
/// `test` operation never touches it.
pub fn fetch_and_scaffold(root: &Path, opt: &FetchOpt) -> Result<PathBuf, Error> {
    validate_problem_url(&opt.url)?;
    let language = LanguageManager::from_name(&opt.language)
        .ok_or_else(|| CphError::UnsupportedLanguage(opt.language.clone()))?;

    let fetcher = match &opt.fetcher {
        Some(command_line) => Some(CommandFetcher::new(command_line)?),
        None => CommandFetcher::from_env()?,
    };
    match fetcher {
        Some(fetcher) => {
            fetcher.fetch(&opt.url, root)?;
            // the fetcher returned successfully, now both files must be in the workspace
            for name in [INPUT_FILE_NAME, OUTPUT_FILE_NAME] {
                if find_file(root, name).is_none() {
                    return Err(CphError::MissingWorkspaceFile {
                        name,
                        root: root.to_path_buf(),
                    }
                    .into());
                }
            }
        }
        None => warn!("No fetcher configured, only the solution file will be scaffolded"),
    }

    let solution_dir = match find_file(root, INPUT_FILE_NAME) {
        Some(input) => input
            .parent()
            .expect("The input file has no parent directory")
            .to_path_buf(),
        None => root.to_path_buf(),
    };
    let solution = solution_dir.join(format!(
        "{}.{}",
        SOLUTION_FILE_STEM,
        language.extensions()[0]
    ));

    let mut content = String::new();
    if let Some(prefix) = language.inline_comment_prefix() {
        content.push_str(&format!("{} {}\n", prefix, opt.url));
    }
    content.push_str(language.starter_code());
    std::fs::write(&solution, content)
        .with_context(|| format!("Failed to write the solution file {:?}", solution))?;
    info!(
        "Scaffolded {:?} with the {} starter code",
        solution,
        language.name()
    );
    Ok(solution)
}

/// Entry point of the `fetch` operation.
pub fn main_fetch(root: &Path, opt: FetchOpt) -> Result<(), Error> {
    let solution = fetch_and_scaffold(root, &opt)?;
    println!(
        "{} {}",
        "Solution ready:".bright_green().bold(),
        solution.display()
    );
    Ok(())
}
