//! In-memory transport that records calls instead of sending them.

use super::{ApiError, CreateObjectRequest, ObjectRecord, Transport, UpdateObjectRequest};
use std::cell::RefCell;
use std::collections::BTreeMap;
use ulid::Ulid;

/// A transport that keeps created objects in memory.
///
/// Ids are freshly generated ULIDs. Every request is recorded and can be
/// inspected afterwards, which makes this transport useful for dry runs.
///
/// # Examples
///
/// ```
/// use anytype::api::{CreateObjectRequest, MemoryTransport, Transport};
///
/// let transport = MemoryTransport::new();
/// let request = CreateObjectRequest { name: "Dune".into(), ..Default::default() };
/// let record = transport.create_object("s1", &request).unwrap();
/// assert_eq!(record.space_id, "s1");
/// assert_eq!(transport.created().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryTransport {
    state: RefCell<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    objects: BTreeMap<String, ObjectRecord>,
    created: Vec<(String, CreateObjectRequest)>,
    updated: Vec<(String, UpdateObjectRequest)>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the create requests received so far, with their space id.
    pub fn created(&self) -> Vec<(String, CreateObjectRequest)> {
        self.state.borrow().created.clone()
    }

    /// Returns the update requests received so far, with their object id.
    pub fn updated(&self) -> Vec<(String, UpdateObjectRequest)> {
        self.state.borrow().updated.clone()
    }

    /// Returns the stored record for `object_id`.
    pub fn object(&self, object_id: &str) -> Option<ObjectRecord> {
        self.state.borrow().objects.get(object_id).cloned()
    }
}

impl Transport for MemoryTransport {
    fn create_object(
        &self,
        space_id: &str,
        request: &CreateObjectRequest,
    ) -> Result<ObjectRecord, ApiError> {
        let record = ObjectRecord {
            id: Ulid::new().to_string(),
            space_id: space_id.to_string(),
            name: request.name.clone(),
            snippet: snippet(&request.body),
            layout: "basic".to_string(),
        };

        let mut state = self.state.borrow_mut();
        state.created.push((space_id.to_string(), request.clone()));
        state.objects.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update_object(
        &self,
        space_id: &str,
        object_id: &str,
        request: &UpdateObjectRequest,
    ) -> Result<ObjectRecord, ApiError> {
        let mut state = self.state.borrow_mut();
        let record = state
            .objects
            .get_mut(object_id)
            .filter(|record| record.space_id == space_id)
            .ok_or_else(|| ApiError::NotFound(object_id.to_string()))?;
        record.name = request.name.clone();
        let record = record.clone();

        state.updated.push((object_id.to_string(), request.clone()));
        Ok(record)
    }
}

/// First line of the body, as the API reports it.
fn snippet(body: &str) -> String {
    body.lines()
        .map(|line| line.trim_start_matches(['#', ' ']))
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}
