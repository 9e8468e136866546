/// Document identifiers are opaque strings assigned server-side.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identity token for a newly created entity.
pub fn new_doc_id() -> DocId {
    uuid::Uuid::new_v4().to_string()
}
