//! Crate for managing programming languages and solution files.
//!
//! The [`Language`](languages/trait.Language.html) trait exposes the interface for defining new
//! programming languages: the file extensions, the starter code written into a freshly scaffolded
//! solution and the commands used to compile and run a solution. The list of supported languages
//! can be found in the source of this crate.
//!
//! The entry point of this crate is [`LanguageManager`](struct.LanguageManager.html), a struct
//! that is able to detect the language of a source file based on its extension. A trait object is
//! used to keep track of the language.
//!
//! To actually use the language you can use [`SourceFile`](struct.SourceFile.html), it exposes the
//! functionalities for compiling and running a solution against an input file.
//!
//! # Example
//!
//! ```
//! use cph_lang::LanguageManager;
//!
//! let lang = LanguageManager::detect_language("solution.cpp").expect("unknown lang");
//! assert!(lang.name().contains("C++"))
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;

mod execution;
mod languages;
mod source_file;

pub use execution::{ExecutionCommand, ExecutionError, ExecutionOptions, ExecutionResult};
pub use languages::Language;
pub use source_file::SourceFile;

use std::path::Path;
use std::sync::Arc;

use languages::*;

/// Manager of all the known languages, you should use this to get
/// [`Language`](languages/trait.Language.html) instances.
pub struct LanguageManager {
    /// The list of all the known languages.
    known_languages: Vec<Arc<dyn Language>>,
}

impl LanguageManager {
    /// Make a new `LanguageManager` with all the known languages.
    fn new() -> LanguageManager {
        LanguageManager {
            // ordered by most important first
            known_languages: vec![
                Arc::new(cpp::LanguageCpp::new(
                    cpp::LanguageCppConfiguration::from_env(),
                )),
                Arc::new(python::LanguagePython::new(
                    python::LanguagePythonConfiguration::from_env(),
                )),
            ],
        }
    }

    /// Given a path to a file guess the language that the source file probably is.
    ///
    /// ```
    /// use cph_lang::LanguageManager;
    ///
    /// let cpp = LanguageManager::detect_language("solution.cpp").unwrap();
    /// assert!(cpp.name().contains("C++"));
    /// let py = LanguageManager::detect_language("solution.py").unwrap();
    /// assert!(py.name().contains("Python"));
    /// let unknown = LanguageManager::detect_language("solution.foobar");
    /// assert!(unknown.is_none());
    /// ```
    pub fn detect_language<P: AsRef<Path>>(path: P) -> Option<Arc<dyn Language>> {
        let manager = &LANGUAGE_MANAGER_SINGL;
        let ext = path
            .as_ref()
            .extension()
            .map(|s| s.to_string_lossy())
            .unwrap_or_else(|| "".into())
            .to_lowercase();
        for lang in manager.known_languages.iter() {
            for lang_ext in lang.extensions().iter() {
                if ext == *lang_ext {
                    return Some(lang.clone());
                }
            }
        }
        None
    }

    /// Search between the known languages the one with the specified name and return it if found.
    ///
    /// The match is case-insensitive and any of the registered extensions works as an alias, so
    /// `C++`, `cpp` and `py` are all valid names.
    pub fn from_name<S: AsRef<str>>(name: S) -> Option<Arc<dyn Language>> {
        let manager = &LANGUAGE_MANAGER_SINGL;
        let name = name.as_ref().to_lowercase();
        for lang in manager.known_languages.iter() {
            if lang.name().to_lowercase() == name {
                return Some(lang.clone());
            }
            for ext in lang.extensions().iter() {
                if *ext == name {
                    return Some(lang.clone());
                }
            }
        }
        None
    }

    /// The list of all the known languages, in detection order.
    pub fn languages() -> Vec<Arc<dyn Language>> {
        LANGUAGE_MANAGER_SINGL.known_languages.clone()
    }
}

lazy_static! {
    /// The singleton instance of the `LanguageManager`.
    static ref LANGUAGE_MANAGER_SINGL: LanguageManager = LanguageManager::new();
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn test_detect_language() {
        let lang = LanguageManager::detect_language("foo.cpp").unwrap();
        assert_that!(lang.name()).is_equal_to("C++");
    }

    #[test]
    fn test_detect_language_uppercase() {
        let lang = LanguageManager::detect_language("foo.CPP").unwrap();
        assert_that!(lang.name()).is_equal_to("C++");
    }

    #[test]
    fn test_detect_language_unknown() {
        let lang = LanguageManager::detect_language("foo.blah");
        assert_that!(lang).is_none();
    }

    #[test]
    fn test_detect_language_no_extension() {
        let lang = LanguageManager::detect_language("foo");
        assert_that!(lang).is_none();
    }

    #[test]
    fn test_from_name() {
        let lang = LanguageManager::from_name("Python").unwrap();
        assert_that!(lang.name()).is_equal_to("Python");
    }

    #[test]
    fn test_from_name_alias() {
        let lang = LanguageManager::from_name("cpp").unwrap();
        assert_that!(lang.name()).is_equal_to("C++");
        let lang = LanguageManager::from_name("py").unwrap();
        assert_that!(lang.name()).is_equal_to("Python");
    }

    #[test]
    fn test_from_name_case_insensitive() {
        let lang = LanguageManager::from_name("c++").unwrap();
        assert_that!(lang.name()).is_equal_to("C++");
    }

    #[test]
    fn test_from_name_unknown() {
        let lang = LanguageManager::from_name("Nope, this is not a language");
        assert_that!(lang).is_none();
    }

    #[test]
    fn test_registry_totality() {
        for lang in LanguageManager::languages() {
            assert!(
                !lang.extensions().is_empty(),
                "{} has no extensions",
                lang.name()
            );
            assert!(
                !lang.starter_code().is_empty(),
                "{} has an empty starter template",
                lang.name()
            );
            if lang.need_compilation() {
                // the compilation command must be available for compiled languages
                lang.compilation_command(std::path::Path::new("foo.x"));
            }
        }
    }
}
