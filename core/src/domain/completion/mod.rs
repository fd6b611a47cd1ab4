pub mod ports;
pub mod reply;

pub use ports::*;
