//! Clipboard operations backed by the platform clipboard tool.

use anyhow::{Context, Result};
use log::debug;
use std::fmt;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::RealRuntime;

/// A command-line program that reads text from stdin into the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardTool {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

#[cfg(target_os = "macos")]
const PLATFORM_TOOLS: &[ClipboardTool] = &[ClipboardTool::new("pbcopy", &[])];

#[cfg(windows)]
const PLATFORM_TOOLS: &[ClipboardTool] = &[ClipboardTool::new("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const PLATFORM_TOOLS: &[ClipboardTool] = &[
    ClipboardTool::new("wl-copy", &[]),
    ClipboardTool::new("xclip", &["-selection", "clipboard"]),
    ClipboardTool::new("xsel", &["--clipboard", "--input"]),
];

/// Reasons a clipboard write did not succeed.
#[derive(Debug)]
pub enum ClipboardError {
    /// None of the known clipboard tools is installed
    Unavailable,
    /// A clipboard tool ran but exited unsuccessfully
    ToolFailed { tool: String, status: String },
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => {
                write!(f, "No clipboard tool available on this system")
            }
            ClipboardError::ToolFailed { tool, status } => {
                write!(f, "Clipboard tool '{}' failed: {}", tool, status)
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Pipe `text` into a single clipboard tool.
/// Returns `Ok(false)` if the tool is not installed.
async fn write_with_tool(tool: &ClipboardTool, text: &str) -> Result<bool> {
    let spawned = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to start '{}'", tool.program));
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .with_context(|| format!("Failed to write to '{}'", tool.program))?;
        // Dropping stdin closes the pipe so the tool sees EOF
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("Failed to wait for '{}'", tool.program))?;

    if !status.success() {
        return Err(ClipboardError::ToolFailed {
            tool: tool.program.to_string(),
            status: status.to_string(),
        }
        .into());
    }
    Ok(true)
}

/// Try each tool in order until one accepts the text.
/// The last failure is returned if every installed tool failed.
pub async fn write_clipboard_with(tools: &[ClipboardTool], text: &str) -> Result<()> {
    let mut last_error = None;

    for tool in tools {
        match write_with_tool(tool, text).await {
            Ok(true) => {
                debug!("Copied {} bytes with '{}'", text.len(), tool.program);
                return Ok(());
            }
            Ok(false) => debug!("Clipboard tool '{}' not found", tool.program),
            Err(e) => {
                debug!("Clipboard tool '{}' failed: {:#}", tool.program, e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| ClipboardError::Unavailable.into()))
}

impl RealRuntime {
    #[tracing::instrument(skip(self, text))]
    pub(crate) async fn write_clipboard_impl(&self, text: &str) -> Result<()> {
        write_clipboard_with(PLATFORM_TOOLS, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "No clipboard tool available on this system"
        );
        let err = ClipboardError::ToolFailed {
            tool: "xclip".into(),
            status: "exit status: 1".into(),
        };
        assert!(err.to_string().contains("xclip"));
        assert!(err.to_string().contains("exit status: 1"));
    }

    #[tokio::test]
    async fn test_no_tools_is_unavailable() {
        let err = write_clipboard_with(&[], "text").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClipboardError>(),
            Some(ClipboardError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_missing_tool_is_unavailable() {
        let tools = [ClipboardTool::new("oneline-no-such-clipboard-tool", &[])];
        let err = write_clipboard_with(&tools, "text").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClipboardError>(),
            Some(ClipboardError::Unavailable)
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_tool() {
        // `cat` drains stdin and exits 0, like a clipboard tool would
        let tools = [ClipboardTool::new("cat", &[])];
        write_clipboard_with(&tools, "curl -fsSL https://your-site.com/setup.sh | sh")
            .await
            .unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_falls_back_to_next_tool() {
        let tools = [
            ClipboardTool::new("oneline-no-such-clipboard-tool", &[]),
            ClipboardTool::new("sh", &["-c", "exit 1"]),
            ClipboardTool::new("cat", &[]),
        ];
        write_clipboard_with(&tools, "text").await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_tool_reports_failure() {
        let tools = [ClipboardTool::new("sh", &["-c", "cat > /dev/null; exit 3"])];
        let err = write_clipboard_with(&tools, "text").await.unwrap_err();
        match err.downcast_ref::<ClipboardError>() {
            Some(ClipboardError::ToolFailed { tool, .. }) => assert_eq!(tool, "sh"),
            other => panic!("Expected ToolFailed, got {:?}", other),
        }
    }
}
