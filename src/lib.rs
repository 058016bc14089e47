pub mod accel;
pub mod config;
pub mod error;
pub mod storage;

pub use error::{AccelError, Result};
