//! Install command literals and their selection by platform.

use crate::platform::Platform;

/// Shell install command shared by mac and linux.
pub const UNIX_INSTALL_COMMAND: &str = "curl -fsSL https://your-site.com/setup.sh | sh";

/// PowerShell install command for windows.
pub const WINDOWS_INSTALL_COMMAND: &str = "iwr -useb https://your-site.com/setup.ps1 | iex";

/// Resolve the command for a platform. Before detection has completed
/// (`None`) the mac command is shown so the widget is never empty.
pub fn install_command(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::Windows) => WINDOWS_INSTALL_COMMAND,
        Some(Platform::Mac) | Some(Platform::Linux) | None => UNIX_INSTALL_COMMAND,
    }
}

pub fn shell_label(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::Windows) => "PowerShell",
        _ => "Terminal",
    }
}

pub fn command_label(platform: Option<Platform>) -> String {
    format!("{} Command", shell_label(platform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_command_per_platform() {
        assert_eq!(install_command(Some(Platform::Mac)), UNIX_INSTALL_COMMAND);
        assert_eq!(install_command(Some(Platform::Linux)), UNIX_INSTALL_COMMAND);
        assert_eq!(
            install_command(Some(Platform::Windows)),
            "iwr -useb https://your-site.com/setup.ps1 | iex"
        );
    }

    #[test]
    fn test_unset_platform_uses_mac_command() {
        assert_eq!(install_command(None), install_command(Some(Platform::Mac)));
    }

    #[test]
    fn test_windows_command_differs_from_unix() {
        assert_ne!(
            install_command(Some(Platform::Windows)),
            install_command(Some(Platform::Mac))
        );
        assert_eq!(
            install_command(Some(Platform::Mac)),
            install_command(Some(Platform::Linux))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(command_label(Some(Platform::Windows)), "PowerShell Command");
        assert_eq!(command_label(Some(Platform::Linux)), "Terminal Command");
        assert_eq!(command_label(Some(Platform::Mac)), "Terminal Command");
        assert_eq!(command_label(None), "Terminal Command");
    }
}
