//! Matbench main — parse args for help/version, then drop into the console.
use clap::Parser;

use matbench::cli::MatbenchCli;
use matbench::shell;

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    let _ = execute!(std::io::stdout(), SetTitle("Matbench"));
}

fn main() -> anyhow::Result<()> {
    set_console_title();

    // No operational flags: everything happens inside the menu loop.
    let _args = MatbenchCli::parse();

    shell::start()
}
