//! Configuration storage module

mod xdg;

pub use xdg::XdgConfigStore;
