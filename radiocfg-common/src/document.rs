//! YAML and JSON document codecs for configuration resources.
//!
//! Decoding through [`Document`] is decode-then-validate: a document that
//! parses but breaks a field constraint is rejected whole with
//! [`Error::Validation`]. Plain `serde` decoding stays available for callers
//! that want to inspect invalid documents.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Validate};
use crate::logging::log_validation;

/// A top-level resource or resource list exchanged with the platform.
pub trait Document: Serialize + DeserializeOwned + Validate {
    /// Resource kind, as carried in the `kind` field.
    const KIND: &'static str;

    /// Resource name used in log output, if the document carries one.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Parses and validates a document from a YAML string.
    ///
    /// # Returns
    /// * `Ok(Self)` - Document decoded and every constraint holds
    /// * `Err(Error)` - YAML parsing or validation error
    fn from_yaml(yaml: &str) -> Result<Self, Error> {
        accept(serde_yaml::from_str(yaml)?)
    }

    /// Loads and validates a document from a YAML file.
    fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("Loading {} from {}", Self::KIND, path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parses and validates a document from a JSON string.
    fn from_json(json: &str) -> Result<Self, Error> {
        accept(serde_json::from_str(json)?)
    }

    /// Serializes the document to a YAML string.
    fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serializes the document to a JSON string.
    fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

fn accept<T: Document>(doc: T) -> Result<T, Error> {
    let result = doc.validate();
    log_validation(T::KIND, doc.name(), &result);
    result?;
    Ok(doc)
}
