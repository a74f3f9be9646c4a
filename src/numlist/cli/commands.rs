use super::session::Session;
use super::setup::Cli;
use clap::Parser;
use directories::ProjectDirs;
use numlist::api::NumlistApi;
use numlist::config::NumlistConfig;
use numlist::error::Result;
use numlist::logging::init_cli_logger;
use std::io;
use std::path::PathBuf;

const CONFIG_DIR_ENV: &str = "NUMLIST_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_cli_logger(cli.verbose);

    let mut api = init_context(&cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run(&mut api)
}

fn init_context(cli: &Cli) -> Result<NumlistApi> {
    let mut config = match resolve_config_dir(cli) {
        Some(dir) => NumlistConfig::load(&dir)?,
        None => {
            tracing::debug!("no config directory available, using defaults");
            NumlistConfig::default()
        }
    };
    apply_overrides(&mut config, cli);

    tracing::debug!(
        seed_len = config.seed.len(),
        export_file = %config.export_file,
        "session configured"
    );
    Ok(NumlistApi::from_config(&config))
}

/// Flag first, then `NUMLIST_CONFIG_DIR`, then the platform config dir.
fn resolve_config_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Some(dir.clone());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "numlist", "numlist").map(|dirs| dirs.config_dir().to_path_buf())
}

fn apply_overrides(config: &mut NumlistConfig, cli: &Cli) {
    if cli.empty {
        config.seed.clear();
    }
    if let Some(path) = &cli.export_file {
        config.export_file = path.to_string_lossy().into_owned();
    }
}
