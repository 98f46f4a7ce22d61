//! Command implementations for the CLI

pub mod caveats;
pub mod completions;
pub mod helpers;
pub mod info;
pub mod install;
pub mod uninstall;
pub mod verify;
pub mod version;
