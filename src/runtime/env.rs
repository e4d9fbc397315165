//! Environment and system information operations.

use std::env;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn env_var_impl(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }

    /// Synthesize a user agent from the compile target, e.g.
    /// `oneline/1.2.0 (macos; aarch64)`.
    #[tracing::instrument(skip(self))]
    pub(crate) fn user_agent_impl(&self) -> String {
        format!(
            "oneline/{} ({}; {})",
            env!("ONELINE_VERSION"),
            env::consts::OS,
            env::consts::ARCH
        )
    }
}
