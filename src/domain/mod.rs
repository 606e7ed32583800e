//! Domain value types shared across the release pipeline

pub mod build;
pub mod version;

pub use build::{BuildRecord, SUCCESS_STATUS};
pub use version::{Identifier, Version};
