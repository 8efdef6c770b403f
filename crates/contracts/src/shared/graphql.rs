//! GraphQL envelopes shared by every query and mutation.

use crate::shared::list_view::PageInfo;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body POSTed to the API
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'a str>,
    pub variables: V,
}

/// Top-level error of a GraphQL response (not a validation error)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::Graphql(
                self.errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; "),
            ));
        }
        self.data.ok_or(ApiError::EmptyData)
    }
}

/// Field-level validation error returned inside a mutation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// `None` for errors that concern the whole input
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

/// Payload of a mutation that only reports errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorsPayload {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Payload of a bulk mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulkPayload {
    #[serde(default)]
    pub errors: Vec<FieldError>,
    #[serde(default)]
    pub count: u32,
}

/// Ids argument of bulk mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdsVariables {
    pub ids: Vec<String>,
}

/// Id argument of single-entity queries and mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdVariables {
    pub id: String,
}

/// First error reported for `field`
pub fn field_error<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a FieldError> {
    errors.iter().find(|e| e.field.as_deref() == Some(field))
}

/// Transport and protocol failures of an API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Http(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("API error: {0}")]
    Graphql(String),

    #[error("Response carried no data")]
    EmptyData,
}

/// `sortBy` argument of list queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortingInput {
    pub direction: &'static str,
    pub field: &'static str,
}

impl SortingInput {
    pub fn new(field: &'static str, ascending: bool) -> Self {
        Self {
            direction: if ascending { "ASC" } else { "DESC" },
            field,
        }
    }
}

/// `filter` argument of list queries that only search by text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilterInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl SearchFilterInput {
    pub fn new(search: Option<&str>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }
}

/// `{ totalCount }` selection of a countable connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountableTotal {
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// Relay connection
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    pub fn nodes(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.edges.iter().map(|edge| edge.node.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Data {
        ok: bool,
    }

    #[test]
    fn test_response_with_errors_is_err() {
        let response: GraphQlResponse<Data> = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "boom" }, { "message": "bang" }]
        }))
        .expect("valid response");
        assert_eq!(
            response.into_result(),
            Err(ApiError::Graphql("boom; bang".into()))
        );
    }

    #[test]
    fn test_response_without_data_is_err() {
        let response: GraphQlResponse<Data> =
            serde_json::from_value(json!({ "data": null })).expect("valid response");
        assert_eq!(response.into_result(), Err(ApiError::EmptyData));
    }

    #[test]
    fn test_connection_nodes_and_page_info() {
        let connection: Connection<Data> = serde_json::from_value(json!({
            "edges": [{ "node": { "ok": true } }, { "node": { "ok": false } }],
            "pageInfo": {
                "hasNextPage": true,
                "hasPreviousPage": false,
                "startCursor": "a",
                "endCursor": "b"
            }
        }))
        .expect("valid connection");
        assert_eq!(
            connection.page_info.as_ref().map(|p| p.has_next_page),
            Some(true)
        );
        assert_eq!(
            connection.into_nodes(),
            vec![Data { ok: true }, Data { ok: false }]
        );
    }

    #[test]
    fn test_field_error_lookup() {
        let errors = vec![FieldError::new("name", "required")];
        assert_eq!(
            field_error(&errors, "name").map(|e| e.message.as_str()),
            Some("required")
        );
        assert!(field_error(&errors, "slug").is_none());
    }
}
