use std::path::Path;

use crate::execution::ExecutionCommand;
use crate::languages::Language;

/// The starter code written into a new Python solution file.
const STARTER_CODE: &str = r#"# Write your code here
def main():
    pass

if __name__ == "__main__":
    main()
"#;

/// Configuration of the Python language to use.
#[derive(Clone, Debug)]
pub struct LanguagePythonConfiguration {
    /// Interpreter to use (e.g. `ExecutionCommand::system("python3")`).
    pub interpreter: ExecutionCommand,
}

impl LanguagePythonConfiguration {
    /// Get the configuration of Python from the environment variables.
    pub fn from_env() -> LanguagePythonConfiguration {
        let interpreter = std::env::var_os("CPH_PYTHON").unwrap_or_else(|| "python3".into());
        LanguagePythonConfiguration {
            interpreter: ExecutionCommand::System(interpreter.into()),
        }
    }
}

/// The Python language.
#[derive(Debug)]
pub struct LanguagePython {
    /// The configuration of this language.
    pub config: LanguagePythonConfiguration,
}

impl LanguagePython {
    /// Make a new LanguagePython using the specified configuration.
    pub fn new(config: LanguagePythonConfiguration) -> LanguagePython {
        LanguagePython { config }
    }
}

impl Language for LanguagePython {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn extensions(&self) -> Vec<&'static str> {
        vec!["py"]
    }

    fn starter_code(&self) -> &'static str {
        STARTER_CODE
    }

    fn inline_comment_prefix(&self) -> Option<&'static str> {
        Some("#")
    }

    fn need_compilation(&self) -> bool {
        false
    }

    fn runtime_command(&self, _path: &Path, _binary: Option<&Path>) -> ExecutionCommand {
        self.config.interpreter.clone()
    }

    fn runtime_args(&self, path: &Path, _binary: Option<&Path>) -> Vec<String> {
        // will run for example: python3 solution.py
        vec![path
            .file_name()
            .expect("Invalid source file name")
            .to_string_lossy()
            .to_string()]
    }
}
