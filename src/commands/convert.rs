//! Convert command handler

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use termspan::{to_html, Config};

/// Options collected from the command line. `None` defers to the config file.
#[derive(Debug, Default)]
pub struct ConvertOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub document: bool,
    pub no_stylesheet: bool,
    pub title: Option<String>,
}

/// Convert terminal output from a file or stdin to HTML.
pub fn handle(options: ConvertOptions) -> Result<()> {
    let config = Config::load()?;

    let raw = read_input(options.input.as_deref())?;
    let text = String::from_utf8_lossy(&raw);
    let fragment = to_html(&text);

    let mut document_config = config.document;
    if options.document {
        document_config.enabled = true;
    }
    if options.no_stylesheet {
        document_config.stylesheet = false;
    }
    if let Some(title) = options.title {
        document_config.title = title;
    }

    let html = if document_config.enabled {
        document_config.to_document().render(&fragment)
    } else {
        fragment
    };

    write_output(options.output.as_deref(), &html)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::info!(path = %path.display(), "reading input");
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, html: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "wrote html");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
