use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use crate::execution::{run_process, ExecutionError, ExecutionOptions, ExecutionResult};
use crate::{Language, LanguageManager};

/// A solution source file that can be compiled (if the language requires it) and run against an
/// input file.
///
/// After creating a `SourceFile` using `new` you can run it via the `execute` method. Each call to
/// `execute` is a complete compile-and-run: nothing is cached between calls, matching the
/// one-shot nature of a judging run.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the source file.
    pub path: PathBuf,
    /// Language of the source file.
    language: Arc<dyn Language>,
}

impl SourceFile {
    /// Make a new `SourceFile` from the provided file. Will return `None` if the language is
    /// unknown.
    ///
    /// The language of the source file will be detected using the
    /// [`LanguageManager`](struct.LanguageManager.html), only those languages are supported.
    pub fn new<P: Into<PathBuf>>(path: P) -> Option<SourceFile> {
        let path = path.into();
        let language = LanguageManager::detect_language(&path)?;
        Some(SourceFile { path, language })
    }

    /// The language of this source file.
    pub fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    /// The file name of the source file.
    ///
    /// ```
    /// use cph_lang::SourceFile;
    /// let source = SourceFile::new("path/to/solution.cpp").unwrap();
    ///
    /// assert_eq!(source.name(), "solution.cpp");
    /// ```
    pub fn name(&self) -> String {
        String::from(self.path.file_name().unwrap().to_str().unwrap())
    }

    /// Compile the source file if the language requires it, then run it to completion feeding
    /// `input` to its standard input.
    ///
    /// The compilation step always treats stderr output as fatal, so compiler diagnostics surface
    /// as an [`ExecutionError::Failed`] even when the compiler exits with status zero; the
    /// configured time limit applies to it as well. The run step follows `options` fully.
    ///
    /// There is no sandbox and no resource limit: the child runs with the privileges of the
    /// current process and, without a configured timeout, may block indefinitely.
    pub fn execute(
        &self,
        input: &Path,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, ExecutionError> {
        let workdir = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };
        if self.language.need_compilation() {
            let build_dir = TempDir::new().map_err(ExecutionError::BuildDir)?;
            let binary = build_dir
                .path()
                .join(self.language.executable_name(&self.path));
            let compile_options = ExecutionOptions {
                lenient_stderr: false,
                timeout: options.timeout,
            };
            run_process(
                format!("Compilation of {}", self.name()),
                &self.language.compilation_command(&self.path),
                &self.language.compilation_args(&self.path, &binary),
                workdir,
                None,
                &compile_options,
            )?;
            run_process(
                format!("Execution of {}", self.name()),
                &self.language.runtime_command(&self.path, Some(&binary)),
                &self.language.runtime_args(&self.path, Some(&binary)),
                workdir,
                Some(input),
                options,
            )
            // build_dir is removed here, after the run completed
        } else {
            run_process(
                format!("Execution of {}", self.name()),
                &self.language.runtime_command(&self.path, None),
                &self.language.runtime_args(&self.path, None),
                workdir,
                Some(input),
                options,
            )
        }
    }
}
