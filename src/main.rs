//! wally-scaffold CLI
//!
//! Emit the generated source for Wally's simulated account-linking page.

use std::process::ExitCode;

use clap::Parser;

use wally_scaffold::preview::format_preview;
use wally_scaffold::template::link_account_source;

#[derive(Parser)]
#[command(name = "wally-scaffold")]
#[command(about = "Emit the generated Link / Add Account page source")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// The emitter reads no arguments; anything supplied is ignored so that
    /// stray invocations still produce the same output.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<String>,
}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let source = link_account_source();
    print!("{}", format_preview(&source));

    ExitCode::SUCCESS
}
