pub mod applicant;
pub mod job;
pub mod profile;

use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by the backend's listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_deserializes() {
        let json = r#"{"items": ["a", "b"], "page": 2, "per_page": 10, "total": 12}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 12);
    }
}
