use clap::Parser;

use cph_rust::error::NiceError;
use cph_rust::fetch::main_fetch;
use cph_rust::judge::{main_languages, main_test};
use cph_rust::opt::{Command, Opt};

fn main() {
    let opt = Opt::parse();
    opt.logger.enable_log();

    match opt.command {
        Command::Fetch(fetch_opt) => main_fetch(&opt.workspace, fetch_opt),
        Command::Test(test_opt) => main_test(&opt.workspace, test_opt),
        Command::Languages => main_languages(),
    }
    .nice_unwrap()
}
