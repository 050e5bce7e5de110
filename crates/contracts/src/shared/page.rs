use serde::{Deserialize, Serialize};

/// Spring-style page envelope returned by paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub size: u64,
    /// Zero-based page index.
    pub number: u64,
    pub first: bool,
    pub last: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_response_parses_backend_shape() {
        let json = r#"{
            "content": [1, 2, 3],
            "totalElements": 23,
            "totalPages": 2,
            "size": 20,
            "number": 0,
            "first": true,
            "last": false
        }"#;
        let page: PageResponse<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 2);
        assert!(page.first && !page.last);
    }
}
