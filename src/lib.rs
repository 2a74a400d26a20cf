pub mod config;
pub mod error;
pub mod formats;
pub mod handlers;
pub mod lookup;
pub mod request;
pub mod response;
pub mod storage;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
