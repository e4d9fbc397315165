use anyhow::{Result, anyhow};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Platform category used to select an install command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Linux,
    Windows,
}

impl Platform {
    /// Classify an identifying string. Matching is case-insensitive and
    /// ordered: "darwin"/"mac" first, then "linux", then "win".
    /// Anything unrecognized (including the empty string) is treated as mac.
    pub fn detect(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if ua.contains("darwin") || ua.contains("mac") {
            Platform::Mac
        } else if ua.contains("linux") {
            Platform::Linux
        } else if ua.contains("win") {
            Platform::Windows
        } else {
            // Default to the shell command shared by mac and linux
            Platform::Mac
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mac => "mac",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        }
    }

    /// Upper-cased name shown in the "Detected:" line
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mac" | "macos" | "darwin" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            "windows" | "win" => Ok(Platform::Windows),
            other => Err(anyhow!(
                "Unknown platform '{}'. Expected one of: mac, linux, windows",
                other
            )),
        }
    }
}

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector: Send + Sync {
    fn detect(&self, user_agent: &str) -> Platform;
}

/// Default detector using substring classification of the user agent
#[derive(Debug, Default, Clone, Copy)]
pub struct UserAgentDetector;

impl PlatformDetector for UserAgentDetector {
    fn detect(&self, user_agent: &str) -> Platform {
        Platform::detect(user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mac_user_agents() {
        let cases = [
            "mozilla/5.0 (macintosh; intel mac os x 10_15_7)",
            "Darwin/23.1.0",
            "MAC",
            "oneline/1.0.0 (macos; aarch64)",
        ];
        for ua in cases {
            assert_eq!(Platform::detect(ua), Platform::Mac, "ua: {}", ua);
        }
    }

    #[test]
    fn test_detect_linux_user_agents() {
        assert_eq!(
            Platform::detect("mozilla/5.0 (x11; linux x86_64)"),
            Platform::Linux
        );
        assert_eq!(Platform::detect("Linux"), Platform::Linux);
    }

    #[test]
    fn test_detect_windows_user_agents() {
        assert_eq!(
            Platform::detect("mozilla/5.0 (windows nt 10.0; win64; x64)"),
            Platform::Windows
        );
        assert_eq!(Platform::detect("WIN32"), Platform::Windows);
    }

    #[test]
    fn test_detect_priority_order() {
        // mac wins over linux and win
        assert_eq!(Platform::detect("darwin linux win"), Platform::Mac);
        // linux wins over win
        assert_eq!(Platform::detect("linux; win64"), Platform::Linux);
        // "darwin" contains "win" but is matched as mac first
        assert_eq!(Platform::detect("darwin"), Platform::Mac);
    }

    #[test]
    fn test_detect_unrecognized_defaults_to_mac() {
        assert_eq!(Platform::detect("some-bot/1.0"), Platform::Mac);
        assert_eq!(Platform::detect(""), Platform::Mac);
        assert_eq!(Platform::detect("freebsd"), Platform::Mac);
    }

    #[test]
    fn test_platform_display_and_label() {
        assert_eq!(Platform::Mac.to_string(), "mac");
        assert_eq!(Platform::Windows.to_string(), "windows");
        assert_eq!(Platform::Linux.label(), "LINUX");
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("macOS".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!(" linux ".parse::<Platform>().unwrap(), Platform::Linux);
        assert_eq!("win".parse::<Platform>().unwrap(), Platform::Windows);

        let err = "plan9".parse::<Platform>().unwrap_err();
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn test_user_agent_detector() {
        let detector = UserAgentDetector;
        assert_eq!(
            detector.detect("Mozilla/5.0 (X11; Linux x86_64)"),
            Platform::Linux
        );
    }
}
