//! Process execution module

mod command;

pub use command::ProcessExecutor;
