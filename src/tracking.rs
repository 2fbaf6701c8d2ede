//! Tracking service port
//!
//! The pipeline tracking service is an external collaborator reached through
//! the [`TrackingClient`] trait. Records come back as opaque JSON values;
//! the typed fetch helpers decode them into the models this crate consumes.

use serde_json::Value;

use crate::error::{PublinkError, PublinkResult};
use crate::models::{Project, PublishedFile};

/// Entity type name of published file records
pub const PUBLISHED_FILE_TYPE: &str = "PublishedFile";
/// Entity type name of project records
pub const PROJECT_TYPE: &str = "Project";

/// Fields requested when fetching a published file
pub const PUBLISHED_FILE_FIELDS: &[&str] =
    &["code", "sg_status_list", "path", "published_file_type"];
/// Fields requested when fetching a project
pub const PROJECT_FIELDS: &[&str] = &["id", "name", "sg_project_code"];

/// A single filter condition, e.g. `id is 451`
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: String,
    pub value: Value,
}

impl Filter {
    /// Equality filter on a field
    pub fn is(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: "is".to_string(),
            value: value.into(),
        }
    }
}

/// Abstract tracking service query interface
pub trait TrackingClient {
    /// Find the first record of `entity_type` matching all `filters`,
    /// returning the requested `fields` (plus the identifier), or `None`
    fn find_one(
        &self,
        entity_type: &str,
        filters: &[Filter],
        fields: &[&str],
    ) -> PublinkResult<Option<Value>>;
}

/// Fetch a published file record by identifier
pub fn find_published_file(
    client: &dyn TrackingClient,
    id: i64,
) -> PublinkResult<Option<PublishedFile>> {
    let record = client.find_one(
        PUBLISHED_FILE_TYPE,
        &[Filter::is("id", id)],
        PUBLISHED_FILE_FIELDS,
    )?;
    record
        .map(serde_json::from_value)
        .transpose()
        .map_err(|source| PublinkError::MalformedRecord {
            entity: PUBLISHED_FILE_TYPE,
            source,
        })
}

/// Fetch a project record by identifier
pub fn find_project(client: &dyn TrackingClient, id: i64) -> PublinkResult<Option<Project>> {
    let record = client.find_one(PROJECT_TYPE, &[Filter::is("id", id)], PROJECT_FIELDS)?;
    record
        .map(serde_json::from_value)
        .transpose()
        .map_err(|source| PublinkError::MalformedRecord {
            entity: PROJECT_TYPE,
            source,
        })
}

/// In-memory tracking service for testing
///
/// Stores records keyed by entity type and identifier, and answers `find_one`
/// calls whose filters are a single `id is N` condition.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MockTracking {
    records: std::collections::HashMap<(String, i64), Value>,
}

#[cfg(test)]
impl MockTracking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_type: &str, id: i64, record: Value) {
        self.records.insert((entity_type.to_string(), id), record);
    }
}

#[cfg(test)]
impl TrackingClient for MockTracking {
    fn find_one(
        &self,
        entity_type: &str,
        filters: &[Filter],
        _fields: &[&str],
    ) -> PublinkResult<Option<Value>> {
        let id = filters
            .iter()
            .find(|f| f.field == "id" && f.op == "is")
            .and_then(|f| f.value.as_i64());
        Ok(id.and_then(|id| self.records.get(&(entity_type.to_string(), id)).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_is() {
        let filter = Filter::is("id", 451);

        assert_eq!(filter.field, "id");
        assert_eq!(filter.op, "is");
        assert_eq!(filter.value, json!(451));
    }

    #[test]
    fn test_find_published_file_decodes_record() {
        let mut client = MockTracking::new();
        client.insert(
            PUBLISHED_FILE_TYPE,
            451,
            json!({
                "id": 451,
                "code": "hero_model.fbx",
                "published_file_type": { "id": 7, "name": "Motion Builder FBX" }
            }),
        );

        let record = find_published_file(&client, 451).unwrap().unwrap();
        assert_eq!(record.code, "hero_model.fbx");
        assert_eq!(record.type_name(), Some("Motion Builder FBX"));
    }

    #[test]
    fn test_find_published_file_missing_is_none() {
        let client = MockTracking::new();

        assert!(find_published_file(&client, 451).unwrap().is_none());
    }

    #[test]
    fn test_find_published_file_malformed_record() {
        let mut client = MockTracking::new();
        client.insert(PUBLISHED_FILE_TYPE, 451, json!({ "id": "not-a-number" }));

        let err = find_published_file(&client, 451).unwrap_err();
        assert!(matches!(
            err,
            PublinkError::MalformedRecord {
                entity: PUBLISHED_FILE_TYPE,
                ..
            }
        ));
    }

    #[test]
    fn test_find_project_decodes_record() {
        let mut client = MockTracking::new();
        client.insert(
            PROJECT_TYPE,
            3,
            json!({ "id": 3, "name": "Show One", "sg_project_code": "show1" }),
        );

        let project = find_project(&client, 3).unwrap().unwrap();
        assert_eq!(project.code.as_deref(), Some("show1"));
    }
}
