/// Documents are keyed by store-generated UUIDs.
pub type DocId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a raw path segment into a [`DocId`].
///
/// Returns `None` for anything that is not exactly a well-formed UUID
/// (surrounding whitespace included) so callers can treat malformed ids
/// exactly like unknown ones.
pub fn parse_doc_id(raw: &str) -> Option<DocId> {
    DocId::parse_str(raw).ok()
}
