//! Identity value objects: PLMN ID, S-NSSAI, DNN information.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Pattern an MCC must match in full.
pub const MCC_PATTERN: &str = "[02-79][0-9][0-9]";
/// Pattern an MNC must match in full.
pub const MNC_PATTERN: &str = "[0-9][0-9][0-9]|[0-9][0-9]";
/// Pattern a slice differentiator must match in full.
pub const SD_PATTERN: &str = "^[A-Fa-f0-9]{6}$";

/// Largest Slice/Service Type value.
pub const MAX_SST: i64 = 255;

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_mcc(mcc: &str) -> bool {
    let bytes = mcc.as_bytes();
    bytes.len() == 3 && matches!(bytes[0], b'0' | b'2'..=b'7') && all_digits(mcc)
}

fn is_valid_mnc(mnc: &str) -> bool {
    matches!(mnc.len(), 2 | 3) && all_digits(mnc)
}

fn is_valid_sd(sd: &str) -> bool {
    sd.len() == 6 && sd.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Public Land Mobile Network identifier.
///
/// A PLMN uniquely identifies a mobile network and consists of:
/// - MCC (Mobile Country Code): 3 decimal digits, first digit 0 or 2-7
/// - MNC (Mobile Network Code): 2 or 3 decimal digits
///
/// Both codes are kept as the digit strings given, so a leading zero and the
/// 2-versus-3 digit MNC length survive a round trip.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlmnId {
    /// Mobile Country Code
    pub mcc: String,
    /// Mobile Network Code
    pub mnc: String,
}

impl PlmnId {
    /// Creates a validated PLMN ID.
    ///
    /// # Arguments
    /// * `mcc` - Mobile Country Code (3 digits)
    /// * `mnc` - Mobile Network Code (2-3 digits)
    pub fn new(mcc: impl Into<String>, mnc: impl Into<String>) -> Result<Self, ValidationError> {
        let plmn = Self {
            mcc: mcc.into(),
            mnc: mnc.into(),
        };
        plmn.validate()?;
        Ok(plmn)
    }

    /// Returns true if the MNC has 3 digits.
    pub fn long_mnc(&self) -> bool {
        self.mnc.len() == 3
    }

    /// Encodes the PLMN to 3GPP format (3 bytes).
    ///
    /// The encoding follows 3GPP TS 24.008 format:
    /// - Byte 0: MCC digit 2 (high nibble) | MCC digit 1 (low nibble)
    /// - Byte 1: MNC digit 3 or 0xF (high nibble) | MCC digit 3 (low nibble)
    /// - Byte 2: MNC digit 2 (high nibble) | MNC digit 1 (low nibble)
    pub fn encode(&self) -> Result<[u8; 3], ValidationError> {
        self.validate()?;

        let mcc: Vec<u8> = self.mcc.bytes().map(|b| b - b'0').collect();
        let mnc: Vec<u8> = self.mnc.bytes().map(|b| b - b'0').collect();
        let mnc3 = if self.long_mnc() { mnc[2] } else { 0x0F };

        Ok([
            (mcc[1] << 4) | mcc[0],
            (mnc3 << 4) | mcc[2],
            (mnc[1] << 4) | mnc[0],
        ])
    }
}

impl Validate for PlmnId {
    fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_mcc(&self.mcc) {
            return Err(ValidationError::pattern("mcc", &self.mcc, MCC_PATTERN));
        }
        if !is_valid_mnc(&self.mnc) {
            return Err(ValidationError::pattern("mnc", &self.mnc, MNC_PATTERN));
        }
        Ok(())
    }
}

impl fmt::Debug for PlmnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlmnId({}-{})", self.mcc, self.mnc)
    }
}

impl fmt::Display for PlmnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mcc, self.mnc)
    }
}

/// PDU session type a data network accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SessionType {
    /// IPv4 PDU session
    Ipv4,
    /// IPv6 PDU session
    Ipv6,
    /// IPv4v6 (dual-stack) PDU session
    Ipv4v6,
    /// Unstructured PDU session
    Unstructured,
    /// Ethernet PDU session
    Ethernet,
}

impl SessionType {
    /// Every session type, in wire order.
    pub const ALL: [SessionType; 5] = [
        SessionType::Ipv4,
        SessionType::Ipv6,
        SessionType::Ipv4v6,
        SessionType::Unstructured,
        SessionType::Ethernet,
    ];

    /// Accepted wire values, as reported in validation errors.
    pub const ALLOWED: &'static str = "ipv4, ipv6, ipv4v6, unstructured, ethernet";

    /// Returns the wire value for this session type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Ipv4 => "ipv4",
            SessionType::Ipv6 => "ipv6",
            SessionType::Ipv4v6 => "ipv4v6",
            SessionType::Unstructured => "unstructured",
            SessionType::Ethernet => "ethernet",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact lowercase wire value; `"IPv4"` is rejected.
impl FromStr for SessionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::not_in_enum("sessionType", s, Self::ALLOWED))
    }
}

impl TryFrom<String> for SessionType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Data Network Name information attached to a slice.
///
/// The session type is kept as the wire string so that an unknown value is
/// reported by [`Validate::validate`] with its field path instead of failing
/// deserialization. [`DnnInfo::session_type`] yields the closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnInfo {
    /// Data Network Name
    pub name: String,
    /// PDU session type, one of the [`SessionType`] wire values
    #[serde(rename = "sessionType")]
    pub session_type_value: String,
    /// Domain Name Server; `None` means unset, distinct from `Some("")`
    #[serde(default)]
    pub dns: Option<String>,
}

impl DnnInfo {
    /// Creates DNN information from a wire session type string.
    pub fn new(
        name: impl Into<String>,
        session_type: &str,
        dns: Option<String>,
    ) -> Result<Self, ValidationError> {
        let dnn = Self {
            name: name.into(),
            session_type_value: session_type.to_string(),
            dns,
        };
        dnn.validate()?;
        Ok(dnn)
    }

    /// Creates DNN information from an already typed session type.
    pub fn with_session_type(
        name: impl Into<String>,
        session_type: SessionType,
        dns: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            session_type_value: session_type.as_str().to_string(),
            dns,
        }
    }

    /// Returns the PDU session type.
    pub fn session_type(&self) -> Result<SessionType, ValidationError> {
        self.session_type_value.parse()
    }
}

impl Validate for DnnInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        self.session_type().map(|_| ())
    }
}

/// Network Slice Selection Assistance Information entry.
///
/// Identifies a network slice by:
/// - SST (Slice/Service Type): 0-255
/// - SD (Slice Differentiator): optional 6 hex digits (24-bit)
///
/// and names the data network served on that slice.
///
/// Standard SST values (3GPP TS 23.501):
/// - 1: eMBB (enhanced Mobile Broadband)
/// - 2: URLLC (Ultra-Reliable Low-Latency Communications)
/// - 3: MIoT (Massive IoT)
/// - 4: V2X (Vehicle-to-Everything)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nssai {
    /// Slice/Service Type
    pub sst: i64,
    /// Slice Differentiator as 6 hex digits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sd: Option<String>,
    /// Data network served on this slice
    pub dnn_info: DnnInfo,
}

impl Nssai {
    /// Creates a validated slice entry.
    ///
    /// # Arguments
    /// * `sst` - Slice/Service Type (0-255)
    /// * `sd` - Slice Differentiator, exactly 6 hex digits (case-insensitive)
    /// * `dnn_info` - Data network served on the slice
    pub fn new(sst: i64, sd: Option<String>, dnn_info: DnnInfo) -> Result<Self, ValidationError> {
        let nssai = Self { sst, sd, dnn_info };
        nssai.validate()?;
        Ok(nssai)
    }

    /// Returns the SD as 3 bytes, or None if SD is not set or malformed.
    pub fn sd_octets(&self) -> Option<[u8; 3]> {
        self.sd_as_u32().map(|sd| {
            [
                ((sd >> 16) & 0xFF) as u8,
                ((sd >> 8) & 0xFF) as u8,
                (sd & 0xFF) as u8,
            ]
        })
    }

    /// Returns the SD as a u32 value, or None if SD is not set or malformed.
    pub fn sd_as_u32(&self) -> Option<u32> {
        self.sd
            .as_deref()
            .filter(|sd| is_valid_sd(sd))
            .and_then(|sd| u32::from_str_radix(sd, 16).ok())
    }

    /// Encodes the S-NSSAI to 3GPP format.
    ///
    /// The encoding follows 3GPP TS 24.501:
    /// - 1 byte: SST
    /// - 3 bytes (optional): SD in big-endian format
    pub fn encode(&self) -> Result<Vec<u8>, ValidationError> {
        self.validate()?;
        let sst = self.sst as u8;
        Ok(match self.sd_octets() {
            Some(sd) => vec![sst, sd[0], sd[1], sd[2]],
            None => vec![sst],
        })
    }
}

impl Validate for Nssai {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(0..=MAX_SST).contains(&self.sst) {
            return Err(ValidationError::out_of_range("sst", self.sst, 0, MAX_SST));
        }
        if let Some(sd) = &self.sd {
            if !is_valid_sd(sd) {
                return Err(ValidationError::pattern("sd", sd, SD_PATTERN));
            }
        }
        self.dnn_info.validate().map_err(|e| e.within("dnnInfo"))
    }
}

impl fmt::Display for Nssai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sd {
            Some(sd) => write!(f, "{}-{}", self.sst, sd.to_ascii_uppercase()),
            None => write!(f, "{}", self.sst),
        }
    }
}
