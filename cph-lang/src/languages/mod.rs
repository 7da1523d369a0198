use std::path::{Path, PathBuf};

use crate::execution::ExecutionCommand;

pub(crate) mod cpp;
pub(crate) mod python;

/// Trait that defines the properties of the supported languages. Most of the methods have a safe
/// blanket implementation, note that not all of them are _really_ optional: based on the value
/// returned by `need_compilation` some of the methods become required.
///
/// A language can be either compiled or not-compiled.
///
/// When a language is compiled the extra required implementations are:
/// - `compilation_command`
/// - `compilation_args`
pub trait Language: std::fmt::Debug + Send + Sync {
    /// Full name of the language. This must be unique between all the other languages.
    fn name(&self) -> &'static str;

    /// List of valid extensions for this language. A file is considered in this language if its
    /// extension is inside this list. The first extension is the one used when scaffolding a new
    /// solution file.
    fn extensions(&self) -> Vec<&'static str>;

    /// Boilerplate written into a newly scaffolded solution file so the user can start coding
    /// immediately.
    fn starter_code(&self) -> &'static str;

    /// The prefix to put at the start of a line to mark the whole line as a comment.
    ///
    /// The return value should include a space character only if required by the language.
    ///
    /// If the language does not support inline comments, return `None`.
    fn inline_comment_prefix(&self) -> Option<&'static str> {
        None
    }

    /// Whether this language needs a compilation step. Returning `true` here forces the
    /// implementation of `compilation_command` and `compilation_args`.
    fn need_compilation(&self) -> bool;

    /// Command to use to compile the source file. The blanket implementation is intended for
    /// not-compiled languages.
    ///
    /// Will panic if this language does not support compilation.
    fn compilation_command(&self, _path: &Path) -> ExecutionCommand {
        panic!("Language {} cannot be compiled!", self.name());
    }

    /// Arguments to pass to the compiler to compile the source file. The compiler runs in the
    /// directory of the source file and the result of the compilation must be placed at
    /// `write_to`. The blanket implementation is intended for not-compiled languages.
    ///
    /// Will panic if this language does not support compilation.
    fn compilation_args(&self, _path: &Path, _write_to: &Path) -> Vec<String> {
        panic!("Language {} cannot be compiled!", self.name());
    }

    /// Command to use to run the program. It defaults to the compiled binary. Languages that need
    /// to run a separate program (e.g. a system-wise interpreter) may change the return value of
    /// this method.
    ///
    /// For compiled languages `binary` is the path the compilation step wrote the executable to.
    fn runtime_command(&self, path: &Path, binary: Option<&Path>) -> ExecutionCommand {
        match binary {
            Some(binary) => ExecutionCommand::local(binary),
            None => ExecutionCommand::local(path),
        }
    }

    /// Arguments to pass to the runtime command to start the evaluation.
    fn runtime_args(&self, _path: &Path, _binary: Option<&Path>) -> Vec<String> {
        vec![]
    }

    /// The file name of the compiled binary. It defaults to the file name of the source file,
    /// without the extension.
    fn executable_name(&self, path: &Path) -> PathBuf {
        let name = PathBuf::from(path.file_name().expect("Invalid source file name"));
        PathBuf::from(name.file_stem().expect("Invalid source file name"))
    }
}
