use std::path::Path;

use crate::execution::ExecutionCommand;
use crate::languages::Language;

/// The starter code written into a new C++ solution file.
const STARTER_CODE: &str = r#"#include <bits/stdc++.h>
using namespace std;
using llu = unsigned long long;
using ll = long long;
using ld = long double;
using vl = vector<ll>;
using sl = set<ll>;
using msl = multiset<ll>;
using ma = map<ll, ll>;
using vvl = vector<vector<ll>>;
using vp = vector<pair<ll, ll>>;
using sp = set<pair<ll, ll>>;
using msp = multiset<pair<ll, ll>>;

int main()
{
    ios_base::sync_with_stdio(false);
    cin.tie(NULL);
    cout.tie(NULL);
    // Start your code here
    return 0;
}
"#;

/// Configuration of the C++ language to use.
#[derive(Clone, Debug)]
pub struct LanguageCppConfiguration {
    /// Compiler to use (e.g. `ExecutionCommand::system("g++")`).
    pub compiler: ExecutionCommand,
    /// Version of the C++ standard to use (e.g. c++17).
    pub std_version: String,
    /// Extra flags to pass to the compiler.
    pub extra_flags: Vec<String>,
}

impl LanguageCppConfiguration {
    /// Get the configuration of C++ from the environment variables.
    pub fn from_env() -> LanguageCppConfiguration {
        let compiler = std::env::var_os("CPH_CXX").unwrap_or_else(|| "g++".into());
        let std_version = std::env::var("CPH_CXX_STD_VERSION").unwrap_or_else(|_| "c++17".into());
        let extra_flags = std::env::var("CPH_CXXFLAGS").unwrap_or_else(|_| String::new());
        let extra_flags = shell_words::split(&extra_flags).expect("Invalid $CPH_CXXFLAGS");
        LanguageCppConfiguration {
            compiler: ExecutionCommand::System(compiler.into()),
            std_version,
            extra_flags,
        }
    }
}

/// The C++ language.
#[derive(Debug)]
pub struct LanguageCpp {
    /// The configuration of this language.
    pub config: LanguageCppConfiguration,
}

impl LanguageCpp {
    /// Make a new LanguageCpp using the specified configuration.
    pub fn new(config: LanguageCppConfiguration) -> LanguageCpp {
        LanguageCpp { config }
    }
}

impl Language for LanguageCpp {
    fn name(&self) -> &'static str {
        "C++"
    }

    fn extensions(&self) -> Vec<&'static str> {
        vec!["cpp", "cc", "c++"]
    }

    fn starter_code(&self) -> &'static str {
        STARTER_CODE
    }

    fn inline_comment_prefix(&self) -> Option<&'static str> {
        Some("//")
    }

    fn need_compilation(&self) -> bool {
        true
    }

    fn compilation_command(&self, _path: &Path) -> ExecutionCommand {
        self.config.compiler.clone()
    }

    fn compilation_args(&self, path: &Path, write_to: &Path) -> Vec<String> {
        let mut args = vec![
            "-O2".to_string(),
            "-Wall".to_string(),
            "-o".to_string(),
            write_to.to_string_lossy().to_string(),
        ];
        args.push(format!("-std={}", self.config.std_version));
        for arg in &self.config.extra_flags {
            args.push(arg.clone());
        }
        args.push(
            path.file_name()
                .expect("Invalid source file name")
                .to_string_lossy()
                .to_string(),
        );
        args
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use speculoos::prelude::*;

    use super::*;

    fn language() -> LanguageCpp {
        LanguageCpp::new(LanguageCppConfiguration {
            compiler: ExecutionCommand::System("g++".into()),
            std_version: "c++17".to_string(),
            extra_flags: vec!["-lfoobar".into()],
        })
    }

    #[test]
    fn test_compilation_args() {
        let args = language().compilation_args(Path::new("foo.cpp"), Path::new("/tmp/foo"));
        assert_that!(args).contains("foo.cpp".to_string());
        assert_that!(args).contains("-std=c++17".to_string());
        assert_that!(args).contains("-lfoobar".to_string());
        assert_that!(args).contains("-o".to_string());
        assert_that!(args).contains("/tmp/foo".to_string());
    }

    #[test]
    fn test_executable_name() {
        assert_that!(language().executable_name(Path::new("foo.cpp")))
            .is_equal_to(PathBuf::from("foo"));
    }

    #[test]
    fn test_runtime_command_is_the_binary() {
        let command = language().runtime_command(Path::new("foo.cpp"), Some(Path::new("/tmp/foo")));
        assert_that!(command).is_equal_to(ExecutionCommand::Local("/tmp/foo".into()));
    }

    #[test]
    fn test_starter_code_has_a_main() {
        assert!(language().starter_code().contains("int main()"));
    }
}
