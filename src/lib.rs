pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod plotting;
pub mod processors;
pub mod readers;
pub mod utils;

pub use error::{ProcessingError, Result};
