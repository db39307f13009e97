use crate::Config;
use anyhow::Result;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = "# tagwm configuration\n\n";

/// Path of the config file in the user's XDG config directory.
///
/// # Errors
///
/// Will error if the XDG base directories can't be determined or the config
/// directory can't be created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tagwm")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Load the config from `path`, or from the default location.
///
/// When the default file does not exist yet it is created with the default
/// config. An explicit `path` has to exist.
///
/// # Errors
///
/// Will error if the file can't be read or parsed, or if the default file
/// can't be written.
pub fn load_config_file(path: Option<&Path>) -> Result<Config> {
    tracing::debug!("Loading config file");
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (get_default_path()?, false),
    };

    if explicit || path.exists() {
        tracing::debug!("Config file '{}' found.", path.to_string_lossy());
        let contents = fs::read_to_string(&path)?;
        return Ok(toml::from_str(&contents)?);
    }

    let config = Config::default();
    write_config_file(&path, &config)?;
    tracing::info!("Wrote default config to '{}'", path.to_string_lossy());
    Ok(config)
}

/// # Errors
///
/// Will error if the config can't be serialized or the file can't be written.
pub fn write_config_file(path: &Path, config: &Config) -> Result<()> {
    let text = toml::to_string(config)?;
    let mut file = File::create(path)?;
    file.write_all(COMMENT_HEADER.as_bytes())?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
