use anyhow::Result;
use log::info;
use std::io::{self, Write};

use crate::{render::render, runtime::Runtime};

use super::config::{Config, Options};

/// Copy the install command to the clipboard and render the widget.
///
/// A failed copy is not an error here: it is logged by the widget and the
/// rendered output simply carries no confirmation.
#[tracing::instrument(skip(runtime))]
pub async fn copy<R: Runtime + 'static>(runtime: R, options: Options) -> Result<()> {
    let config = Config::new(runtime, options);
    run_copy(&config, &mut io::stdout()).await
}

pub async fn run_copy<R: Runtime + 'static, W: Write>(config: &Config<R>, out: &mut W) -> Result<()> {
    let widget = config.widget();
    let platform = widget.mount();

    if widget.copy().await {
        info!("Copied {} install command to clipboard", platform);
    }

    render(&widget.view(), config.format, out)
}
