pub mod command;
pub mod commands;
pub mod platform;
pub mod render;
pub mod runtime;
pub mod widget;

pub use platform::Platform;
pub use widget::{FEEDBACK_WINDOW, InstallWidget, WidgetView};
