//! Command implementations for rapport

pub mod components;
pub mod connected;
pub mod dispatch;
pub mod find;
pub mod format;
pub mod limit;
pub mod load;
pub mod path;
pub mod stats;
