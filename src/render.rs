//! Text and JSON presentation of the install widget.

use anyhow::{Context, Result};
use std::io::Write;

use crate::widget::WidgetView;

pub const HEADLINE: &str = "Install LocalDev + AI in One Line";
pub const TAGLINE: &str = "Get LocalDev and Ollama with all models pre-loaded in seconds";
pub const COMPATIBILITY: &str = "Compatible with macOS, Linux, and Windows";
pub const REPOSITORY_URL: &str = "https://github.com/yourorg/localdev";

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Render the widget box: label, command, copy confirmation and the
/// detected platform once known.
pub fn render_widget<W: Write>(view: &WidgetView, out: &mut W) -> Result<()> {
    writeln!(out, "{}", view.label)?;
    writeln!(out, "  {}", view.command)?;
    if view.copied {
        writeln!(out, "✓ {}", COPIED_MESSAGE)?;
    }
    if let Some(platform) = view.platform {
        writeln!(out, "Detected: {}", platform.label())?;
    }
    Ok(())
}

/// Render the widget framed by the page headline and repository link.
pub fn render_page<W: Write>(view: &WidgetView, out: &mut W) -> Result<()> {
    writeln!(out, "{}", HEADLINE)?;
    writeln!(out, "{}", TAGLINE)?;
    writeln!(out, "{}", COMPATIBILITY)?;
    writeln!(out)?;
    render_widget(view, out)?;
    writeln!(out)?;
    writeln!(out, "GitHub: {}", REPOSITORY_URL)?;
    Ok(())
}

pub fn render_json<W: Write>(view: &WidgetView, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, view).context("Failed to serialize widget")?;
    writeln!(out)?;
    Ok(())
}

pub fn render<W: Write>(view: &WidgetView, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Text => render_page(view, out),
        Format::Json => render_json(view, out),
    }
}
