//! Static radio configuration of one cell.

use std::fmt;

use serde::{Deserialize, Serialize};

use radiocfg_common::{Validate, ValidationError};

/// Largest Physical Cell Identity (504 values, 0-503).
pub const MAX_PHYSICAL_CELL_ID: u32 = 503;

/// Radio parameters of a single cell.
///
/// Only the physical cell ID is range-checked. Frequency bands, subcarrier
/// spacings and carrier bandwidths are accepted as given; band-plan legality
/// belongs to deployment-time policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanConfigSpec {
    /// Opaque cell identity
    pub cell_identity: String,
    /// Physical Cell Identity (0-503)
    #[serde(rename = "physicalCellID")]
    pub physical_cell_id: u32,
    pub downlink_frequency_band: u32,
    pub downlink_sub_carrier_spacing: u16,
    pub downlink_carrier_bandwidth: u32,
    pub uplink_frequency_band: u32,
    pub uplink_sub_carrier_spacing: u16,
    pub uplink_carrier_bandwidth: u32,
}

impl RanConfigSpec {
    /// Creates a validated cell configuration with zeroed carrier parameters.
    ///
    /// # Arguments
    /// * `cell_identity` - Opaque cell identifier
    /// * `physical_cell_id` - Physical Cell Identity (0-503)
    pub fn new(
        cell_identity: impl Into<String>,
        physical_cell_id: u32,
    ) -> Result<Self, ValidationError> {
        let spec = Self {
            cell_identity: cell_identity.into(),
            physical_cell_id,
            ..Self::default()
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Sets the downlink band, subcarrier spacing and carrier bandwidth.
    pub fn with_downlink(mut self, band: u32, sub_carrier_spacing: u16, bandwidth: u32) -> Self {
        self.downlink_frequency_band = band;
        self.downlink_sub_carrier_spacing = sub_carrier_spacing;
        self.downlink_carrier_bandwidth = bandwidth;
        self
    }

    /// Sets the uplink band, subcarrier spacing and carrier bandwidth.
    pub fn with_uplink(mut self, band: u32, sub_carrier_spacing: u16, bandwidth: u32) -> Self {
        self.uplink_frequency_band = band;
        self.uplink_sub_carrier_spacing = sub_carrier_spacing;
        self.uplink_carrier_bandwidth = bandwidth;
        self
    }
}

impl Validate for RanConfigSpec {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.physical_cell_id > MAX_PHYSICAL_CELL_ID {
            return Err(ValidationError::out_of_range(
                "physicalCellID",
                i64::from(self.physical_cell_id),
                0,
                i64::from(MAX_PHYSICAL_CELL_ID),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for RanConfigSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/pci={}", self.cell_identity, self.physical_cell_id)
    }
}
