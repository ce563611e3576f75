//! Alert domain module

pub mod arguments;
mod notification;
mod response;
mod timeout;

pub use arguments::build_arguments;
pub use notification::Notification;
pub use response::{ActivationKind, Response};
pub use timeout::Timeout;
