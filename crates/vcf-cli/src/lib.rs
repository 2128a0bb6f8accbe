//! vCard generator CLI library.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
