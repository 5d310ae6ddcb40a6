use anyhow::Result;
use clap::Parser;
use pakrm::commands::{clean, uninstall};
use std::path::PathBuf;

/// pakrm - package footprint manager
///
/// Removes the on-disk traces of an installed package: build artifacts
/// left in a source tree, or the installed module directories and
/// launcher script of a previous installation.
///
/// Examples:
///   pakrm clean                 # Remove build artifacts from the current directory
///   pakrm uninstall             # Remove the installed package
#[derive(Parser, Debug)]
#[command(author, version = env!("PAKRM_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Remove build artifacts from a source tree
    Clean(CleanArgs),

    /// Remove an installed package's module directories and launcher script
    Uninstall(UninstallArgs),

    /// Print the version string, with the git revision suffix when available
    Version(VersionArgs),
}

#[derive(clap::Args, Debug)]
pub struct CleanArgs {
    /// Directory to clean
    #[arg(long = "dir", value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct UninstallArgs {
    /// Name of the installed package
    #[arg(value_name = "NAME", default_value = env!("CARGO_PKG_NAME"))]
    pub name: String,

    /// Installation prefix; removals never reach outside it (also via PAKRM_PREFIX)
    #[arg(long = "prefix", env = "PAKRM_PREFIX", value_name = "PATH")]
    pub prefix: Option<PathBuf>,

    /// Directory holding the launcher script (also via PAKRM_BIN_DIR)
    #[arg(long = "bin-dir", env = "PAKRM_BIN_DIR", value_name = "PATH")]
    pub bin_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct VersionArgs {
    /// Base version to suffix with the current git revision
    #[arg(value_name = "BASE", default_value = env!("CARGO_PKG_VERSION"))]
    pub base: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = pakrm::runtime::RealRuntime;

    match cli.command {
        Commands::Clean(args) => clean::clean(&runtime, &args.dir),
        Commands::Uninstall(args) => {
            uninstall::uninstall(&runtime, &args.name, args.prefix, args.bin_dir)?
        }
        Commands::Version(args) => {
            println!("{}", pakrm::version::resolve(&runtime, &args.base)?)
        }
    }
    Ok(())
}
