//! Command handlers for the termspan binary

pub mod config;
pub mod convert;

use anyhow::Result;

/// Print the class stylesheet.
pub fn handle_css(scope: Option<&str>) -> Result<()> {
    print!("{}", termspan::stylesheet::generate(scope));
    Ok(())
}
