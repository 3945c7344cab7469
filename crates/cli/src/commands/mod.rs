//! CLI commands

pub mod explain;
pub mod init;
pub mod review;
pub mod rules;
