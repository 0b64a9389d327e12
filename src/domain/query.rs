//! Query - List Request Parameters and Paginated Responses

use serde::{Deserialize, Serialize};

/// Server-side sort direction, serialized the way the backend expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Parameters for the list endpoints.
///
/// Only set fields become query-string pairs, so a default query hits the
/// bare endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
    /// Server-side search term
    pub search: Option<String>,
    /// Field to sort by
    pub sort_by: Option<String>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
    /// Role filter (users endpoint only)
    pub role: Option<String>,
}

impl ListQuery {
    /// Query that only asks for the total count
    pub fn count_only() -> Self {
        Self {
            page: Some(1),
            limit: Some(1),
            ..Default::default()
        }
    }

    /// Pairs for the request URL, in the backend's expected order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.trim().to_string()));
        }
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("sortBy", sort_by.to_string()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_string()));
        }
        if let Some(role) = self.role.as_deref().filter(|r| !r.is_empty()) {
            pairs.push(("role", role.to_string()));
        }
        pairs
    }
}

/// Paginated list response envelope shared by the list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Records on this page
    pub data: Vec<T>,
    /// Total records across all pages
    pub total: u64,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total page count
    pub total_pages: u32,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: 1,
            limit: 0,
            total_pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::User;
    use serde_json::json;

    #[test]
    fn test_default_query_has_no_pairs() {
        assert!(ListQuery::default().query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_in_order() {
        let query = ListQuery {
            page: Some(2),
            limit: Some(10),
            search: Some("napa".to_string()),
            sort_by: Some("createdAt".to_string()),
            sort_order: Some(SortOrder::Desc),
            role: Some("user".to_string()),
        };
        assert_eq!(
            query.query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("search", "napa".to_string()),
                ("sortBy", "createdAt".to_string()),
                ("sortOrder", "DESC".to_string()),
                ("role", "user".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_search_is_skipped() {
        let query = ListQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(query.query_pairs().is_empty());
    }

    #[test]
    fn test_count_only_query() {
        assert_eq!(
            ListQuery::count_only().query_pairs(),
            vec![("page", "1".to_string()), ("limit", "1".to_string())]
        );
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    #[test]
    fn test_paginated_deserialize() {
        let page: Paginated<User> = serde_json::from_value(json!({
            "data": [
                {"id": "u1", "name": "A", "email": "a@example.com", "role": "user"},
                {"id": "u2", "name": "B", "email": "b@example.com", "role": "admin"}
            ],
            "total": 23,
            "page": 1,
            "limit": 10,
            "totalPages": 3
        }))
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages, 3);
    }
}
