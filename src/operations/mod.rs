//! Operations run against an existing install

pub mod smoke;
pub mod uninstall;
