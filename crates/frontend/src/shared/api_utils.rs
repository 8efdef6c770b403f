//! GraphQL endpoint configuration.
//!
//! The endpoint defaults to the current host on port 8000 and can be
//! overridden by storing a full URL under the `api_url` localStorage key.

use super::local_storage;

pub const API_URL_STORAGE_KEY: &str = "api_url";
pub const AUTH_TOKEN_STORAGE_KEY: &str = "auth_token";

const API_PORT: u16 = 8000;
const API_PATH: &str = "/graphql/";

/// Endpoint on `hostname` using the default port and path
pub fn default_api_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}{}", protocol, hostname, API_PORT, API_PATH)
}

/// Get the GraphQL endpoint URL
///
/// # Returns
/// - the `api_url` override when set
/// - otherwise a URL like "http://localhost:8000/graphql/"
/// - empty string if window is not available
pub fn api_url() -> String {
    if let Some(url) = local_storage::get_item(API_URL_STORAGE_KEY).filter(|u| !u.is_empty()) {
        return url;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    default_api_url(&protocol, &hostname)
}

/// Bearer token sent with every request, if one is stored
pub fn auth_token() -> Option<String> {
    local_storage::get_item(AUTH_TOKEN_STORAGE_KEY).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        assert_eq!(
            default_api_url("https:", "shop.example.com"),
            "https://shop.example.com:8000/graphql/"
        );
    }
}
