//! Path helpers shared by every section's URL module.

/// Join path pieces with exactly one `/` between them.
///
/// A trailing slash on the last piece is kept, so `url_join(&["/discounts/"])`
/// stays `/discounts/`.
pub fn url_join(parts: &[&str]) -> String {
    let leading = parts.first().is_some_and(|p| p.starts_with('/'));
    let trailing = parts.last().is_some_and(|p| p.ends_with('/'));

    let mut out = parts
        .iter()
        .map(|part| part.trim_matches('/'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if leading {
        out.insert(0, '/');
    }
    if trailing && !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Percent-encode an entity id before it is placed in a path segment
pub fn escape_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Inverse of [`escape_id`] for ids read back from a route parameter
pub fn unescape_id(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|id| id.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// `path` followed by `?query` when the query is not empty
pub fn with_query(path: String, query: String) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_normalizes_slashes() {
        assert_eq!(url_join(&["/discounts/", "sales"]), "/discounts/sales");
        assert_eq!(url_join(&["/discounts/sales", "add"]), "/discounts/sales/add");
        assert_eq!(url_join(&["/categories/", "/42/", "add"]), "/categories/42/add");
    }

    #[test]
    fn test_url_join_keeps_section_slash() {
        assert_eq!(url_join(&["/products/"]), "/products/");
        assert_eq!(url_join(&["/"]), "/");
    }

    #[test]
    fn test_escape_id_encodes_reserved_characters() {
        assert_eq!(escape_id("U2FsZToy=="), "U2FsZToy%3D%3D");
        assert_eq!(escape_id("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(unescape_id(&escape_id("a/b?c")), "a/b?c");
    }

    #[test]
    fn test_with_query_skips_empty_query() {
        assert_eq!(with_query("/products/".into(), String::new()), "/products/");
        assert_eq!(
            with_query("/products/".into(), "query=hat".into()),
            "/products/?query=hat"
        );
    }
}
