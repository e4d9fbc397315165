pub mod config;
mod copy;
mod detect;
mod show;

pub use config::{Config, Options};
pub use copy::{copy, run_copy};
pub use detect::{detect, run_detect};
pub use show::{run_show, show};
