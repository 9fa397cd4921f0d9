//! Outbound representations of configuration resources.
//!
//! Hypermedia links live only here: the store keeps id/content/status and
//! the link is computed fresh for every response.

use serde::{Deserialize, Serialize};
use service::domain::{ConfigStatus, Configuration};

/// Canonical mount point of the configuration resources.
pub const CONFIGURATIONS_PATH: &str = "/configurations";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub rel: String,
}

/// Link to a single record, rel "self". Pure function of its inputs.
pub fn self_link(base: &str, id: u32) -> Link {
    Link { href: format!("{}/{}", base, id), rel: "self".to_string() }
}

/// Link to the collection itself, rel "uri".
pub fn collection_link(base: &str) -> Link {
    Link { href: base.to_string(), rel: "uri".to_string() }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigurationRepr {
    pub id: u32,
    pub link: Link,
    pub content: String,
    pub status: ConfigStatus,
}

impl ConfigurationRepr {
    pub fn from_record(record: Configuration, base: &str) -> Self {
        Self {
            id: record.id,
            link: self_link(base, record.id),
            content: record.content,
            status: record.status,
        }
    }
}

/// Collection wrapper; `size` always equals the number of elements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigurationList {
    pub size: usize,
    pub link: Link,
    pub configurations: Vec<ConfigurationRepr>,
}

impl ConfigurationList {
    pub fn from_records(records: Vec<Configuration>, base: &str) -> Self {
        let configurations: Vec<_> = records
            .into_iter()
            .map(|r| ConfigurationRepr::from_record(r, base))
            .collect();
        Self { size: configurations.len(), link: collection_link(base), configurations }
    }
}

/// Single-field body for error and success messages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
