//! Command implementations for stride

pub mod dispatch;
pub mod ladder;
pub mod paths;
