//! Core data models for Publink
//!
//! Thin serde views over the records the tracking service returns and over
//! the inbound event payload. Every field beyond the identifiers is optional
//! or defaulted: the service only returns what was asked for, and records in
//! the wild are sparse.

use serde::{Deserialize, Serialize};

/// Reference to a named entity, e.g. a published-file type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// The `path` field of a published file record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilePath {
    /// Absolute path of the file on shared storage, when known
    #[serde(default)]
    pub local_path: Option<String>,
}

/// A published file record as returned by the tracking service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedFile {
    #[serde(default)]
    pub id: i64,

    /// Display code of the publish
    #[serde(default)]
    pub code: String,

    /// Pipeline status the event fired for
    #[serde(default, rename = "sg_status_list")]
    pub status: Option<String>,

    #[serde(default)]
    pub path: Option<FilePath>,

    /// Type descriptor; its name drives handler dispatch
    #[serde(default, rename = "published_file_type")]
    pub file_type: Option<EntityRef>,
}

impl PublishedFile {
    /// Local filesystem path of the publish, if the record carries one
    pub fn local_path(&self) -> Option<&str> {
        self.path.as_ref()?.local_path.as_deref()
    }

    /// Name of the published-file type, if the record carries one
    pub fn type_name(&self) -> Option<&str> {
        self.file_type.as_ref().map(|t| t.name.as_str())
    }
}

/// A project record as returned by the tracking service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    /// Short project code used by the allow-list filter
    #[serde(default, rename = "sg_project_code")]
    pub code: Option<String>,
}

/// Inbound "published file status changed" event payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeEvent {
    pub meta: EventMeta,
    pub project: ProjectRef,
}

/// Event metadata identifying the changed record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    pub entity_id: i64,
}

/// Project reference carried on the event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: i64,
}
