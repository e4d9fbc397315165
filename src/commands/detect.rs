use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::{render::Format, runtime::Runtime};

use super::config::{Config, Options};

/// Print the detected platform name
#[tracing::instrument(skip(runtime))]
pub fn detect<R: Runtime>(runtime: R, options: Options) -> Result<()> {
    let config = Config::new(runtime, options);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_detect(&config, &mut out)
}

pub fn run_detect<R: Runtime, W: Write>(config: &Config<R>, out: &mut W) -> Result<()> {
    let platform = config.widget().mount();
    match config.format {
        Format::Text => writeln!(out, "{}", platform)?,
        Format::Json => {
            serde_json::to_writer(&mut *out, &serde_json::json!({ "platform": platform }))
                .context("Failed to serialize platform")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
