//! Command implementations.

pub mod assess;
pub mod clean;
pub mod init;
