//! Catalog call result type.

use serde_json::Value;

/// Result of one catalog API call.
///
/// `Data` carries the parsed JSON document verbatim; the catalog layer performs no
/// normalization or schema checks. `Absent` means the call failed (non-200 status,
/// transport fault, or undecodable body) and the failure was already logged; it is
/// distinct from a valid-but-empty document, so callers cannot conflate the two.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResponse {
    Data(Value),
    Absent,
}

impl CatalogResponse {
    /// True if the call failed and no document is available.
    pub fn is_absent(&self) -> bool {
        matches!(self, CatalogResponse::Absent)
    }

    /// Borrows the document, if any.
    pub fn as_data(&self) -> Option<&Value> {
        match self {
            CatalogResponse::Data(value) => Some(value),
            CatalogResponse::Absent => None,
        }
    }

    /// Consumes into the document, if any.
    pub fn into_data(self) -> Option<Value> {
        match self {
            CatalogResponse::Data(value) => Some(value),
            CatalogResponse::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_is_not_absent() {
        let response = CatalogResponse::Data(json!({"results": []}));
        assert!(!response.is_absent());
        assert_eq!(response.as_data(), Some(&json!({"results": []})));
    }

    #[test]
    fn test_absent_has_no_data() {
        let response = CatalogResponse::Absent;
        assert!(response.is_absent());
        assert!(response.as_data().is_none());
        assert!(response.into_data().is_none());
    }
}
