//! Config subcommands handler

use anyhow::Result;

use termspan::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    let config_path = Config::config_path()?;
    println!("{}", config_path.display());
    Ok(())
}
