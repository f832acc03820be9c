use clap::Parser;

/// Binary argument surface. The workbench is menu-driven; the parser exists
/// so `--help` and `--version` behave like any other console tool.
#[derive(Debug, Parser)]
#[command(
    name = "matbench",
    about = "Matbench — random dense matrices and timed linear algebra, menu-driven",
    version,
    disable_help_subcommand = true
)]
pub struct MatbenchCli {}
