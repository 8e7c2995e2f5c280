//! RAN cell radio configuration
//!
//! A [`RanConfig`] resource wraps a [`RanConfigSpec`]: the cell identity,
//! physical cell ID and per-direction band, subcarrier spacing and carrier
//! bandwidth of one cell.

pub mod resource;
pub mod spec;

pub use resource::{
    RanConfig, RanConfigList, RanConfigStatus, RAN_CONFIG_KIND, RAN_CONFIG_LIST_KIND,
};
pub use spec::{RanConfigSpec, MAX_PHYSICAL_CELL_ID};
