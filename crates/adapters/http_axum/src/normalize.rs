//! Route path normalization, applied before routing.
//!
//! Page and API routes match without regard to letter case and tolerate one
//! trailing slash, so `/API/Data/` routes like `/api/data`. Path parameters
//! keep their case, and paths naming no known route (static files) pass
//! through untouched.

use axum::extract::Request;
use axum::http::Uri;
use axum::http::uri::PathAndQuery;

/// Canonical spelling of `path` when it names a known route and differs
/// from it.
#[must_use]
pub fn canonical_route(path: &str) -> Option<String> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
    let canonical = match segments.as_slice() {
        [page] if page.eq_ignore_ascii_case("customer") => "/customer".to_string(),
        [api, data] if is_data_prefix(api, data) => "/api/data".to_string(),
        [api, data, polygon_id] if is_data_prefix(api, data) && !polygon_id.is_empty() => {
            format!("/api/data/{polygon_id}")
        }
        _ => return None,
    };
    (canonical != path).then_some(canonical)
}

fn is_data_prefix(api: &str, data: &str) -> bool {
    api.eq_ignore_ascii_case("api") && data.eq_ignore_ascii_case("data")
}

fn with_path(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>()?);
    Ok(Uri::from_parts(parts)?)
}

/// Request mapper rewriting the URI onto its canonical route.
pub async fn normalize_route(mut req: Request) -> Request {
    let Some(path) = canonical_route(req.uri().path()) else {
        return req;
    };
    match with_path(req.uri(), &path) {
        Ok(uri) => *req.uri_mut() = uri,
        Err(err) => tracing::warn!(error = %err, path = %path, "failed to rewrite request path"),
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;

    #[test]
    fn should_trim_single_trailing_slash_from_routes() {
        assert_eq!(canonical_route("/api/data/").as_deref(), Some("/api/data"));
        assert_eq!(canonical_route("/customer/").as_deref(), Some("/customer"));
        assert_eq!(
            canonical_route("/api/data/A/").as_deref(),
            Some("/api/data/A")
        );
    }

    #[test]
    fn should_fold_case_of_route_literals_only() {
        assert_eq!(canonical_route("/API/DATA").as_deref(), Some("/api/data"));
        assert_eq!(canonical_route("/Customer").as_deref(), Some("/customer"));
        assert_eq!(
            canonical_route("/Api/Data/North-7").as_deref(),
            Some("/api/data/North-7")
        );
    }

    #[test]
    fn should_leave_canonical_and_unknown_paths_alone() {
        assert_eq!(canonical_route("/"), None);
        assert_eq!(canonical_route("/api/data"), None);
        assert_eq!(canonical_route("/api/data/A"), None);
        assert_eq!(canonical_route("/customer.html"), None);
        assert_eq!(canonical_route("/Index.html/"), None);
        assert_eq!(canonical_route("/api/data//"), None);
        assert_eq!(canonical_route("/api/data/A/b"), None);
    }

    #[tokio::test]
    async fn should_keep_query_when_rewriting() {
        let req = http::Request::builder()
            .uri("/API/data/?verbose=1")
            .body(Body::empty())
            .unwrap();
        let req = normalize_route(req).await;
        assert_eq!(req.uri().path(), "/api/data");
        assert_eq!(req.uri().query(), Some("verbose=1"));
    }
}
