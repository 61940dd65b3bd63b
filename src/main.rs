use anyhow::Result;
use clap::Parser;
use ghrm::commands::{Config, generate};
use std::path::PathBuf;

/// ghrm - GitHub Release Manifest
///
/// Write the version manifest read by the plugin auto-updater for a GitHub release.
///
/// Every entry of the assets directory must be a '.zip' archive.
///
/// Examples:
///   ghrm --assets_dir dist --version v1.1 --repository owner/repo
#[derive(Parser, Debug)]
#[command(author, about, disable_version_flag = true)]
struct Cli {
    /// Directory containing the zipped release builds
    #[arg(long = "assets_dir", alias = "assets-dir", value_name = "PATH")]
    pub assets_dir: PathBuf,

    /// Tag name of the release
    #[arg(long, value_name = "TAG")]
    pub version: String,

    /// The GitHub repository in the format "owner/repo"
    #[arg(long, value_name = "OWNER/REPO")]
    pub repository: String,

    /// Manifest file to write (defaults to current_version.json; also via GHRM_OUTPUT)
    #[arg(long, short = 'o', env = "GHRM_OUTPUT", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = ghrm::runtime::RealRuntime;

    let config = Config::new(cli.assets_dir, cli.version, cli.repository, cli.output);
    let descriptor = generate(&runtime, &config)?;

    println!(
        "Wrote {} {} ({} assets) to {:?}",
        config.repository,
        descriptor.tag_name,
        descriptor.assets.len(),
        config.output
    );
    Ok(())
}
