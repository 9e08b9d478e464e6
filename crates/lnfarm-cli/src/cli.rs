use clap::Parser;
use lnfarm_core::Mode;
use std::path::PathBuf;

/// Symlink Farm Maintainer
///
/// Link every file of one or more source trees into a single target tree,
/// creating plain directories along the way
#[derive(Parser, Debug)]
#[command(name = "lnfarm")]
#[command(long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Target tree the links are placed in
    #[arg(short, long, value_name = "TARGET")]
    pub target: PathBuf,

    /// Remove links that point into the sources and prune empty directories
    #[arg(short, long, conflicts_with = "show")]
    pub clean: bool,

    /// Print the links that would be created without touching anything
    #[arg(short, long)]
    pub show: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Also report links that are already in place
    #[arg(short, long)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long)]
    pub no_config: bool,

    /// Source trees or files, applied in order
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<PathBuf>,
}

impl Cli {
    /// Reconciliation mode selected by the flags
    pub const fn mode(&self) -> Mode {
        if self.clean {
            Mode::Clean
        } else if self.show {
            Mode::Show
        } else {
            Mode::Create
        }
    }

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
