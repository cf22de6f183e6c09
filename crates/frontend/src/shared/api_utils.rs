//! Base URL and query-string helpers for the external REST services.

/// Compile-time override, e.g. `API_BASE_URL=https://api.example.in trunk build`.
const API_BASE_URL: Option<&str> = option_env!("API_BASE_URL");

/// Get the base URL for API requests
///
/// Uses `API_BASE_URL` when the bundle was built with it, otherwise the
/// current window location on port 3000.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/inventory/items", api_base());
/// ```
pub fn api_base() -> String {
    if let Some(base) = API_BASE_URL.filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Builds `?a=1&b=2`, skipping `None` values. Returns an empty string when
/// nothing is left.
pub fn query_string(params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_skips_missing() {
        assert_eq!(query_string(&[]), "");
        assert_eq!(query_string(&[("parentId", None)]), "");
        assert_eq!(
            query_string(&[
                ("parentId", Some("gj,mh".to_string())),
                ("search", None),
                ("isActive", Some("true".to_string())),
            ]),
            "?parentId=gj%2Cmh&isActive=true"
        );
    }

    #[test]
    fn test_query_string_encodes_spaces() {
        assert_eq!(
            query_string(&[("brand", Some("Tata Power".to_string()))]),
            "?brand=Tata%20Power"
        );
    }
}
