//! Platform detection module
//!
//! This module classifies the visitor's environment-identifying string
//! (a user agent) into one of the platform categories that have their own
//! install command.

mod detection;

pub use detection::{Platform, PlatformDetector, UserAgentDetector};
