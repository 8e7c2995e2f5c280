//! The RanConfig resource and its list form.

use serde::{Deserialize, Serialize};

use radiocfg_common::{
    validate_list, Document, ListMeta, ObjectMeta, Validate, ValidationError, API_VERSION,
};

use crate::spec::RanConfigSpec;

/// Resource kind of [`RanConfig`].
pub const RAN_CONFIG_KIND: &str = "RanConfig";
/// Resource kind of [`RanConfigList`].
pub const RAN_CONFIG_LIST_KIND: &str = "RanConfigList";

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    RAN_CONFIG_KIND.to_string()
}

fn default_list_kind() -> String {
    RAN_CONFIG_LIST_KIND.to_string()
}

/// Observed state of a RanConfig. Carries no fields yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RanConfigStatus {}

/// Cell radio configuration resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanConfig {
    /// API group and version
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Resource kind
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Resource metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired cell configuration
    #[serde(default)]
    pub spec: RanConfigSpec,
    /// Observed state
    #[serde(default)]
    pub status: RanConfigStatus,
}

impl RanConfig {
    /// Creates a named RanConfig resource around a cell configuration.
    pub fn new(name: impl Into<String>, spec: RanConfigSpec) -> Self {
        Self::with_metadata(ObjectMeta::named(name), spec)
    }

    /// Creates a RanConfig resource with full metadata.
    pub fn with_metadata(metadata: ObjectMeta, spec: RanConfigSpec) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata,
            spec,
            status: RanConfigStatus::default(),
        }
    }
}

impl Validate for RanConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.spec.validate().map_err(|e| e.within("spec"))
    }
}

impl Document for RanConfig {
    const KIND: &'static str = RAN_CONFIG_KIND;

    fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }
}

/// An enumerated collection of RanConfig resources, in storage order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanConfigList {
    /// API group and version
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Resource kind
    #[serde(default = "default_list_kind")]
    pub kind: String,
    /// Resource metadata
    #[serde(default)]
    pub metadata: ListMeta,
    /// Listed resources
    pub items: Vec<RanConfig>,
}

impl RanConfigList {
    /// Creates a list of the given resources.
    pub fn new(items: Vec<RanConfig>) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_list_kind(),
            metadata: ListMeta::default(),
            items,
        }
    }

    /// Returns the number of resources in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no resources.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the resources in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &RanConfig> {
        self.items.iter()
    }

    /// Returns the resource configuring the given cell, if any.
    pub fn find_cell(&self, cell_identity: &str) -> Option<&RanConfig> {
        self.items
            .iter()
            .find(|rc| rc.spec.cell_identity == cell_identity)
    }
}

impl Default for RanConfigList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Validate for RanConfigList {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_list("items", &self.items)
    }
}

impl Document for RanConfigList {
    const KIND: &'static str = RAN_CONFIG_LIST_KIND;
}
