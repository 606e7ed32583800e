pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod history;
pub mod notes;
pub mod pipeline;
pub mod promotion;
pub mod service;
pub mod target;
pub mod ui;

pub use error::{ReleaseGateError, Result};
