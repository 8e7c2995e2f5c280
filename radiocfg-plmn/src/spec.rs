//! PLMN entries and the per-deployment PLMN specification.

use std::fmt;

use serde::{Deserialize, Serialize};

use radiocfg_common::{validate_list, Nssai, PlmnId, Validate, ValidationError};

/// Largest Tracking Area Code (24-bit).
pub const MAX_TAC: u32 = 0xFF_FFFF;

/// One PLMN to configure: identity, tracking area and served slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnInfo {
    /// PLMN identifier
    #[serde(rename = "plmnID")]
    pub plmn_id: PlmnId,
    /// Tracking Area Code (24-bit, range 0-16777215)
    pub tac: u32,
    /// Network slices served, in configured order
    pub nssai: Vec<Nssai>,
}

impl PlmnInfo {
    /// Creates a validated PLMN entry.
    ///
    /// The entry is rejected if the PLMN ID, the TAC or any slice is invalid.
    pub fn new(plmn_id: PlmnId, tac: u32, nssai: Vec<Nssai>) -> Result<Self, ValidationError> {
        let info = Self {
            plmn_id,
            tac,
            nssai,
        };
        info.validate()?;
        Ok(info)
    }

    /// Returns the number of configured slices.
    pub fn slice_count(&self) -> usize {
        self.nssai.len()
    }

    /// Encodes the Tracking Area Identity to 3GPP format (6 bytes).
    ///
    /// The encoding follows 3GPP TS 24.501 format:
    /// - Bytes 0-2: PLMN in 3GPP encoding
    /// - Bytes 3-5: TAC in big-endian format (24-bit)
    pub fn encode_tai(&self) -> Result<[u8; 6], ValidationError> {
        self.validate()?;
        let plmn = self
            .plmn_id
            .encode()
            .map_err(|e| e.within("plmnID"))?;
        let [_, tac_hi, tac_mid, tac_lo] = self.tac.to_be_bytes();

        Ok([plmn[0], plmn[1], plmn[2], tac_hi, tac_mid, tac_lo])
    }
}

impl Validate for PlmnInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        self.plmn_id.validate().map_err(|e| e.within("plmnID"))?;
        if self.tac > MAX_TAC {
            return Err(ValidationError::out_of_range(
                "tac",
                i64::from(self.tac),
                0,
                i64::from(MAX_TAC),
            ));
        }
        validate_list("nssai", &self.nssai)
    }
}

impl fmt::Display for PlmnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.plmn_id, self.tac)
    }
}

/// The PLMNs configured for a deployment.
///
/// An empty list is valid and means no PLMN is configured yet. Order is kept
/// as given and carries no priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnSpec {
    /// PLMN entries, in configured order
    #[serde(rename = "PLMNInfo", alias = "plmnInfo")]
    pub plmn_info: Vec<PlmnInfo>,
}

impl PlmnSpec {
    /// Creates a validated specification.
    pub fn new(plmn_info: Vec<PlmnInfo>) -> Result<Self, ValidationError> {
        let spec = Self { plmn_info };
        spec.validate()?;
        Ok(spec)
    }

    /// Returns true if no PLMN is configured.
    pub fn is_empty(&self) -> bool {
        self.plmn_info.is_empty()
    }

    /// Returns the first entry for the given PLMN ID.
    pub fn find(&self, plmn_id: &PlmnId) -> Option<&PlmnInfo> {
        self.plmn_info.iter().find(|info| &info.plmn_id == plmn_id)
    }
}

impl Validate for PlmnSpec {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_list("PLMNInfo", &self.plmn_info)
    }
}
