//! Common types and utilities for radiocfg
//!
//! This crate provides the identity value objects, resource metadata, the
//! validation error taxonomy and the document codecs shared by the PLMN and
//! RAN configuration crates.

pub mod document;
pub mod error;
pub mod logging;
pub mod meta;
pub mod types;

pub use document::Document;
pub use error::{validate_list, Error, Validate, ValidationError, Violation};
pub use logging::{init_logging, init_logging_with_filter, log_validation, LogLevel, LOG_TARGETS};
pub use meta::{ListMeta, ObjectMeta, API_VERSION};
pub use types::*;
