//! Integration test framework for radiocfg
//!
//! This crate provides fixtures and helpers for testing the PLMN and RAN
//! configuration resources across crate boundaries.
//!
//! # Components
//!
//! - [`test_fixtures`] - Builders for valid resources and testdata paths
//! - [`test_utils`] - Logging setup and rejection assertions
//!
//! # Test Categories
//!
//! 1. **PLMN Resource Tests** - Decode, validate and round-trip PLMN documents
//! 2. **RAN Resource Tests** - Decode, validate and round-trip RanConfig documents
//! 3. **Acceptance Properties** - Field constraints checked over generated inputs

#![allow(missing_docs)]

pub mod test_utils;

pub use test_fixtures::{testdata_path, TestCellConfig, TestPlmnConfig, TestSliceConfig};
pub use test_utils::{assert_rejected_at, init_test_logging, TestResult};
