use log::debug;
use std::sync::Arc;

use crate::{platform::Platform, render::Format, runtime::Runtime, widget::InstallWidget};

/// Environment variable consulted when no `--user-agent` flag is given.
pub const USER_AGENT_ENV: &str = "ONELINE_USER_AGENT";

/// Options collected from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub user_agent: Option<String>,
    pub platform: Option<Platform>,
    pub format: Format,
}

pub struct Config<R: Runtime> {
    pub runtime: Arc<R>,
    pub user_agent: Option<String>,
    pub platform: Option<Platform>,
    pub format: Format,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, options: Options) -> Self {
        let user_agent = options.user_agent.or_else(|| match runtime.env_var(USER_AGENT_ENV) {
            Ok(ua) if !ua.trim().is_empty() => {
                debug!("Using user agent from {}: {:?}", USER_AGENT_ENV, ua);
                Some(ua)
            }
            _ => None,
        });

        Self {
            runtime: Arc::new(runtime),
            user_agent,
            platform: options.platform,
            format: options.format,
        }
    }

    /// Build an unmounted widget honoring the user agent and platform overrides.
    pub fn widget(&self) -> InstallWidget<R> {
        let mut widget = InstallWidget::with_runtime(Arc::clone(&self.runtime));
        if let Some(ua) = &self.user_agent {
            widget = widget.with_user_agent(ua.clone());
        }
        if let Some(platform) = self.platform {
            debug!("Platform pinned to {}", platform);
            widget = widget.with_platform(platform);
        }
        widget
    }
}
