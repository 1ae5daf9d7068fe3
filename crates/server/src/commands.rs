//! Clap command tree definition.

use clap::{Arg, Command};

/// Default data directory when `--data-dir` is not given.
pub const DEFAULT_DATA_DIR: &str = ".";

/// Build the complete CLI command tree.
///
/// Running without a subcommand is the same as `serve`.
pub fn build_cli() -> Command {
    Command::new("geoaddr")
        .about("Address book service with nearby search")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory holding geoaddr.toml, the database and the log file")
                .default_value(DEFAULT_DATA_DIR)
                .global(true),
        )
        .subcommand(
            Command::new("serve").about("Run the HTTP server").arg(
                Arg::new("bind")
                    .long("bind")
                    .help("Listen address, overrides [server] bind (e.g. 0.0.0.0:8000)"),
            ),
        )
        .subcommand(Command::new("dump").about("Print every stored address, one per line"))
}
