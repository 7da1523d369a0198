mod common;

use cph_rust::error::CphError;
use cph_rust::fetch::fetch_and_scaffold;
use cph_rust::opt::FetchOpt;

use common::TestWorkspace;

const PROBLEM_URL: &str = "https://leetcode.com/problems/two-sum";

fn opt(url: &str, language: &str, fetcher: Option<String>) -> FetchOpt {
    FetchOpt {
        url: url.to_string(),
        language: language.to_string(),
        fetcher,
    }
}

fn downcast(error: &anyhow::Error) -> &CphError {
    error
        .downcast_ref::<CphError>()
        .unwrap_or_else(|| panic!("not a CphError: {:?}", error))
}

#[cfg(unix)]
fn write_script(ws: &TestWorkspace, name: &str, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;
    let path = ws.write(name, body);
    let mut permissions = std::fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).unwrap();
    path.display().to_string()
}

#[test]
fn test_invalid_url_writes_nothing() {
    let ws = TestWorkspace::new();
    let error =
        fetch_and_scaffold(ws.root(), &opt("https://example.com/nope", "cpp", None)).unwrap_err();
    assert!(matches!(downcast(&error), CphError::InvalidInput(_)));
    assert!(!ws.exists("solution.cpp"));
}

#[test]
fn test_unknown_language() {
    let ws = TestWorkspace::new();
    let error = fetch_and_scaffold(ws.root(), &opt(PROBLEM_URL, "cobol", None)).unwrap_err();
    assert!(matches!(
        downcast(&error),
        CphError::UnsupportedLanguage(_)
    ));
    assert!(!ws.exists("solution.cobol"));
}

#[test]
fn test_scaffold_without_a_fetcher() {
    let ws = TestWorkspace::new();
    let solution = fetch_and_scaffold(ws.root(), &opt(PROBLEM_URL, "python", None)).unwrap();
    assert_eq!(solution, ws.root().join("solution.py"));

    let content = ws.read("solution.py");
    // the first line points back to the problem
    assert!(content.starts_with(&format!("# {}\n", PROBLEM_URL)));
    assert!(content.contains("def main()"));
}

#[test]
fn test_scaffold_cpp_starter_code() {
    let ws = TestWorkspace::new();
    fetch_and_scaffold(ws.root(), &opt(PROBLEM_URL, "cpp", None)).unwrap();

    let content = ws.read("solution.cpp");
    assert!(content.starts_with(&format!("// {}\n", PROBLEM_URL)));
    assert!(content.contains("#include <bits/stdc++.h>"));
    assert!(content.contains("int main()"));
}

#[cfg(unix)]
#[test]
fn test_fetcher_deposits_the_files_and_the_scaffold_lands_next_to_them() {
    let ws = TestWorkspace::new();
    let script = write_script(
        &ws,
        "fetch.sh",
        "#!/bin/sh\nmkdir -p \"$2/two-sum\"\necho '1 2' > \"$2/two-sum/inputs.txt\"\necho '3' > \"$2/two-sum/outputs.txt\"\n",
    );

    let solution = fetch_and_scaffold(ws.root(), &opt(PROBLEM_URL, "py", Some(script))).unwrap();
    assert_eq!(solution, ws.root().join("two-sum/solution.py"));
    assert_eq!(ws.read("two-sum/inputs.txt"), "1 2\n");
    assert_eq!(ws.read("two-sum/outputs.txt"), "3\n");
    assert!(ws.exists("two-sum/solution.py"));
}

#[cfg(unix)]
#[test]
fn test_refetch_overwrites_the_solution() {
    let ws = TestWorkspace::new();
    let script = write_script(
        &ws,
        "fetch.sh",
        "#!/bin/sh\necho '1 2' > \"$2/inputs.txt\"\necho '3' > \"$2/outputs.txt\"\n",
    );

    fetch_and_scaffold(ws.root(), &opt(PROBLEM_URL, "py", Some(script.clone()))).unwrap();
    ws.write("solution.py", "print(\"my work\")\n");
    fetch_and_scaffold(ws.root(), &opt(PROBLEM_URL, "py", Some(script))).unwrap();
    assert!(!ws.read("solution.py").contains("my work"));
}

#[cfg(unix)]
#[test]
fn test_fetcher_depositing_nothing() {
    let ws = TestWorkspace::new();
    let script = write_script(&ws, "fetch.sh", "#!/bin/sh\nexit 0\n");

    let error =
        fetch_and_scaffold(ws.root(), &opt(PROBLEM_URL, "py", Some(script))).unwrap_err();
    match downcast(&error) {
        CphError::MissingWorkspaceFile { name, .. } => assert_eq!(*name, "inputs.txt"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_fetcher_failure_surfaces_its_message() {
    let ws = TestWorkspace::new();
    let script = write_script(&ws, "fetch.sh", "#!/bin/sh\necho 'no such problem' >&2\nexit 1\n");

    let error =
        fetch_and_scaffold(ws.root(), &opt(PROBLEM_URL, "py", Some(script))).unwrap_err();
    assert!(format!("{:#}", error).contains("no such problem"));
}
