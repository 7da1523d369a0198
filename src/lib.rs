//! Competitive programming helper.
//!
//! Two user-triggered operations, always run in sequence and never concurrently:
//!
//! - `fetch` asks the external fetcher to deposit the sample test case of a problem
//!   (`inputs.txt` / `outputs.txt`) in the workspace and scaffolds a `solution.<ext>` file from
//!   the starter code of the chosen language;
//! - `test` compiles and runs the solution against `inputs.txt` and compares the produced output
//!   with `outputs.txt`, after normalizing both sides.
//!
//! The languages and the execution of the solutions live in the `cph-lang` crate, the output
//! normalization and comparison in `cph-check`.

#[macro_use]
extern crate log;

pub mod error;
pub mod fetch;
pub mod fetcher;
pub mod judge;
pub mod opt;
pub mod report;
pub mod workspace;
