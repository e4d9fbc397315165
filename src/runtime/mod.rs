//! Runtime abstraction for host environment operations.
//!
//! This module provides a trait-based abstraction over what the host
//! environment supplies to the install widget, enabling dependency
//! injection and testability.
//!
//! # Structure
//!
//! - `env` - Environment variables and the environment-identifying string
//! - `clipboard` - Clipboard writes through the platform clipboard tool

mod clipboard;
mod env;

use anyhow::Result;
use async_trait::async_trait;
use std::env as std_env;

pub use clipboard::{ClipboardError, ClipboardTool, write_clipboard_with};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    /// String describing the visitor's environment, used for platform detection.
    fn user_agent(&self) -> String;

    // Clipboard
    /// Place `text` on the system clipboard. May suspend and may fail.
    async fn write_clipboard(&self, text: &str) -> Result<()>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn user_agent(&self) -> String {
        self.user_agent_impl()
    }

    async fn write_clipboard(&self, text: &str) -> Result<()> {
        self.write_clipboard_impl(text).await
    }
}
