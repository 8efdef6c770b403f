//! GraphQL transport: POST `{query, operationName, variables}` to the API.

use super::api_utils::{api_url, auth_token};
use contracts::shared::graphql::{ApiError, GraphQlRequest, GraphQlResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn execute<V, T>(operation_name: &str, query: &str, variables: &V) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let body = GraphQlRequest {
        query,
        operation_name: Some(operation_name),
        variables,
    };

    let mut request = Request::post(&api_url());
    if let Some(token) = auth_token() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    log::debug!("GraphQL {}", operation_name);

    let response = request
        .json(&body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!("GraphQL {} failed with status {}", operation_name, response.status());
        return Err(ApiError::Http(response.status()));
    }

    let envelope = response
        .json::<GraphQlResponse<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_result()
}
