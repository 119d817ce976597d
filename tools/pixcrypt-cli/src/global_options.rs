use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn, Level};
use pixcrypt::{Key, Mode, SessionConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) -> Result<()> {
    let log_level = if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("info") {
        Level::Info
    } else {
        // --warn is the default
        Level::Warn
    };

    simple_logger::init_with_level(log_level).context("failed to initialize logger")?;

    info!("Initialized logger");
    info!("Log level :{}", log_level);
    Ok(())
}

/// Build the session configuration: the JSON file given with `--config` if
/// any, then overrides from the subcommand's flags.
pub fn parse_config(options: &ArgMatches, sub: &ArgMatches, output_is_decrypted: bool) -> Result<SessionConfig> {
    let mut config = match options.get_one::<PathBuf>("config") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open config {}", path.display()))?;
            let config: SessionConfig = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid config {}", path.display()))?;
            info!("Loaded configuration from {}", path.display());
            config
        }
        None => SessionConfig::default(),
    };

    if let Some(&key) = sub.get_one::<i64>("key") {
        let reduced = Key::from_int(key);
        if Key::needs_reduction(key) {
            warn!("Key {key} is outside 0-255, using {reduced}");
        }
        config.codec.key = reduced;
    }
    if let Some(mode) = sub.get_one::<String>("mode") {
        config.codec.mode = mode.parse::<Mode>()?;
    }
    if sub.get_flag("serial") {
        config.codec.parallel = false;
    }
    if let Some(dir) = sub.get_one::<PathBuf>("out-dir") {
        config.output_dir = dir.clone();
    }
    if let Ok(Some(name)) = sub.try_get_one::<String>("output") {
        if output_is_decrypted {
            config.decrypted_name = name.clone();
        } else {
            config.encrypted_name = name.clone();
        }
    }

    info!(
        "Mode {} key {} output {}",
        config.codec.mode,
        config.codec.key,
        config.output_dir.display()
    );
    Ok(config)
}
