use std::path::Path;
use std::time::Duration;

use anyhow::{ensure, Context, Error};
use itertools::Itertools;

use cph_check::check;
use cph_lang::{ExecutionOptions, LanguageManager, SourceFile};

use crate::error::CphError;
use crate::opt::TestOpt;
use crate::report::TestReport;
use crate::workspace::{find_file, find_solution, INPUT_FILE_NAME, OUTPUT_FILE_NAME};

/// Run the solution against the fetched sample test case and compare the outputs.
///
/// Both workspace files are located and the language of the solution is resolved before any
/// process is spawned. The produced output and the expected output are normalized independently
/// before the comparison, the raw bytes are never compared.
pub fn run_and_compare(root: &Path, opt: &TestOpt) -> Result<TestReport, Error> {
    let missing = |name: &'static str| CphError::MissingWorkspaceFile {
        name,
        root: root.to_path_buf(),
    };
    let input = find_file(root, INPUT_FILE_NAME).ok_or_else(|| missing(INPUT_FILE_NAME))?;
    let expected_path = find_file(root, OUTPUT_FILE_NAME).ok_or_else(|| missing(OUTPUT_FILE_NAME))?;

    let solution = match &opt.solution {
        Some(path) => path.clone(),
        None => find_solution(root).with_context(|| {
            format!(
                "No solution file found under {:?}, fetch the problem first",
                root
            )
        })?,
    };
    ensure!(
        solution.is_file(),
        "The solution file {:?} does not exist",
        solution
    );
    let source = SourceFile::new(&solution)
        .ok_or_else(|| CphError::UnsupportedLanguage(solution.display().to_string()))?;

    let options = ExecutionOptions {
        lenient_stderr: opt.allow_stderr,
        timeout: opt.timeout.map(Duration::from_secs),
    };
    let result = source
        .execute(&input, &options)
        .map_err(CphError::ExecutionFailure)?;
    let expected = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("Failed to read the expected output {:?}", expected_path))?;

    Ok(TestReport::new(
        source.name(),
        check(&result.stdout, &expected),
    ))
}

/// Entry point of the `test` operation.
pub fn main_test(root: &Path, opt: TestOpt) -> Result<(), Error> {
    let report = run_and_compare(root, &opt)?;
    if opt.json {
        let json = serde_json::to_string(&report).context("Non-serializable report")?;
        println!("{}", json);
    } else {
        report.print();
    }
    if !report.passed {
        // a mismatch is a normal result, but it is reported in the exit status
        std::process::exit(1);
    }
    Ok(())
}

/// Entry point of the `languages` operation.
pub fn main_languages() -> Result<(), Error> {
    for language in LanguageManager::languages() {
        let kind = if language.need_compilation() {
            "compiled"
        } else {
            "interpreted"
        };
        println!(
            "{:<10} {:<12} {}",
            language.name(),
            kind,
            language.extensions().iter().join(", ")
        );
    }
    Ok(())
}
