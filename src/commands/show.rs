use anyhow::Result;
use log::debug;
use std::io::{self, Write};

use crate::{render::render, runtime::Runtime};

use super::config::{Config, Options};

/// Render the install widget for the detected platform
#[tracing::instrument(skip(runtime))]
pub fn show<R: Runtime>(runtime: R, options: Options) -> Result<()> {
    let config = Config::new(runtime, options);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_show(&config, &mut out)
}

pub fn run_show<R: Runtime, W: Write>(config: &Config<R>, out: &mut W) -> Result<()> {
    let widget = config.widget();
    let platform = widget.mount();
    debug!("Showing install command for {}", platform);
    render(&widget.view(), config.format, out)
}
