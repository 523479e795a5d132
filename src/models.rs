use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// One row of remote tabular data, created only by decoding a server response.
// Field values are strings only; a non-string value fails the decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub fields: HashMap<String, String>,
}

// Top-level envelope wrapping one page of records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordPage {
    pub records: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_page_decodes_string_fields() {
        let json = r#"{"records":[{"id":"rec123","fields":{"name":"Test Item"}}]}"#;
        let page: RecordPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].id, "rec123");
        assert_eq!(page.records[0].fields["name"], "Test Item");
    }

    #[test]
    fn test_record_page_decodes_empty_records() {
        let page: RecordPage = serde_json::from_str(r#"{"records":[]}"#).unwrap();
        assert!(page.records.is_empty());
    }

    #[test]
    fn test_record_page_rejects_non_string_field_value() {
        let json = r#"{"records":[{"id":"rec123","fields":{"count":3}}]}"#;
        let parsed: Result<RecordPage, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_record_page_rejects_missing_records_key() {
        let parsed: Result<RecordPage, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_record_page_rejects_missing_id() {
        let json = r#"{"records":[{"fields":{"name":"Test Item"}}]}"#;
        let parsed: Result<RecordPage, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
