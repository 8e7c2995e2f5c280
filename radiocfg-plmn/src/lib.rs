//! PLMN identity and slice configuration
//!
//! A [`Plmn`] resource wraps a [`PlmnSpec`]: the ordered PLMN entries of a
//! deployment, each with its PLMN ID, tracking area code and served slices.

pub mod resource;
pub mod spec;

pub use resource::{Plmn, PlmnList, PlmnStatus, PLMN_KIND, PLMN_LIST_KIND};
pub use spec::{PlmnInfo, PlmnSpec, MAX_TAC};
