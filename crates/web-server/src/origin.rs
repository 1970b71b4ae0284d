use crate::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use std::convert::Infallible;
use std::sync::Arc;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// The scheme and host a client used to reach the API, as needed to build
/// absolute resource URIs.
///
/// Proxy headers win over the direct request, but only when the server is
/// configured to trust them; otherwise any client could rewrite the URIs.
/// Without any host information the origin falls back to `localhost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    pub fn from_parts(parts: &Parts, trust_forwarded: bool) -> Self {
        let forwarded = |name: &str| {
            if trust_forwarded {
                first_value(&parts.headers, name)
            } else {
                None
            }
        };

        let scheme = forwarded(X_FORWARDED_PROTO)
            .or_else(|| parts.uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| "http".to_string());

        let host = forwarded(X_FORWARDED_HOST)
            .or_else(|| first_value(&parts.headers, header::HOST.as_str()))
            .or_else(|| parts.uri.authority().map(|a| a.to_string()))
            .unwrap_or_else(|| "localhost".to_string());

        Self { scheme, host }
    }
}

/// First entry of a possibly comma-separated header, e.g. `https, http`.
fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts, state.trust_forwarded_headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn origin(request: Request<()>) -> RequestOrigin {
        origin_with(request, false)
    }

    fn origin_with(request: Request<()>, trust_forwarded: bool) -> RequestOrigin {
        let (parts, _) = request.into_parts();
        RequestOrigin::from_parts(&parts, trust_forwarded)
    }

    fn proxied_request() -> Request<()> {
        Request::get("/api")
            .header("host", "10.0.0.7:8080")
            .header("x-forwarded-proto", "https, http")
            .header("x-forwarded-host", "countries.example")
            .body(())
            .unwrap()
    }

    #[test]
    fn uses_host_header_over_plain_http() {
        let request = Request::get("/api")
            .header("host", "countries.local:8080")
            .body(())
            .unwrap();
        assert_eq!(
            origin(request),
            RequestOrigin {
                scheme: "http".to_string(),
                host: "countries.local:8080".to_string(),
            }
        );
    }

    #[test]
    fn trusted_proxy_headers_take_precedence() {
        let origin = origin_with(proxied_request(), true);
        assert_eq!(origin.scheme, "https");
        assert_eq!(origin.host, "countries.example");
    }

    #[test]
    fn untrusted_proxy_headers_are_ignored() {
        let origin = origin(proxied_request());
        assert_eq!(origin.scheme, "http");
        assert_eq!(origin.host, "10.0.0.7:8080");
    }

    #[test]
    fn absolute_uri_is_used_without_headers() {
        let request = Request::get("https://api.example:8443/api").body(()).unwrap();
        let origin = origin(request);
        assert_eq!(origin.scheme, "https");
        assert_eq!(origin.host, "api.example:8443");
    }

    #[test]
    fn falls_back_to_localhost() {
        let origin = origin(Request::get("/api").body(()).unwrap());
        assert_eq!(origin.scheme, "http");
        assert_eq!(origin.host, "localhost");
    }
}
