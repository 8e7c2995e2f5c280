//! The PLMN resource and its list form.

use serde::{Deserialize, Serialize};

use radiocfg_common::{
    validate_list, Document, ListMeta, ObjectMeta, Validate, ValidationError, API_VERSION,
};

use crate::spec::PlmnSpec;

/// Resource kind of [`Plmn`].
pub const PLMN_KIND: &str = "PLMN";
/// Resource kind of [`PlmnList`].
pub const PLMN_LIST_KIND: &str = "PLMNList";

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_plmn_kind() -> String {
    PLMN_KIND.to_string()
}

fn default_plmn_list_kind() -> String {
    PLMN_LIST_KIND.to_string()
}

/// Observed state of a PLMN. Carries no fields yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnStatus {}

/// PLMN configuration resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plmn {
    /// API group and version
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Resource kind
    #[serde(default = "default_plmn_kind")]
    pub kind: String,
    /// Resource metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired PLMN configuration
    #[serde(default)]
    pub spec: PlmnSpec,
    /// Observed state
    #[serde(default)]
    pub status: PlmnStatus,
}

impl Plmn {
    /// Creates a named PLMN resource around a specification.
    pub fn new(name: impl Into<String>, spec: PlmnSpec) -> Self {
        Self::with_metadata(ObjectMeta::named(name), spec)
    }

    /// Creates a PLMN resource with full metadata.
    pub fn with_metadata(metadata: ObjectMeta, spec: PlmnSpec) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_plmn_kind(),
            metadata,
            spec,
            status: PlmnStatus::default(),
        }
    }
}

impl Validate for Plmn {
    fn validate(&self) -> Result<(), ValidationError> {
        self.spec.validate().map_err(|e| e.within("spec"))
    }
}

impl Document for Plmn {
    const KIND: &'static str = PLMN_KIND;

    fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }
}

/// An enumerated collection of PLMN resources, in storage order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlmnList {
    /// API group and version
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Resource kind
    #[serde(default = "default_plmn_list_kind")]
    pub kind: String,
    /// Resource metadata
    #[serde(default)]
    pub metadata: ListMeta,
    /// Listed resources
    pub items: Vec<Plmn>,
}

impl PlmnList {
    /// Creates a list of the given resources.
    pub fn new(items: Vec<Plmn>) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_plmn_list_kind(),
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
    pub fn iter(&self) -> impl Iterator<Item = &Plmn> {
        self.items.iter()
    }
}

impl Default for PlmnList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Validate for PlmnList {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_list("items", &self.items)
    }
}

impl Document for PlmnList {
    const KIND: &'static str = PLMN_LIST_KIND;
}
