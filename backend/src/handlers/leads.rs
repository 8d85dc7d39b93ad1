use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::RelayError;
use crate::AppState;

const REQUIRED_FIELDS: [&str; 3] = ["Name", "Email", "Company"];

/// Decodes a form body into ordered pairs. A repeated name keeps its first
/// position and takes the latest value.
pub fn parse_lead(body: &[u8]) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::new();
    for (name, value) in url::form_urlencoded::parse(body) {
        match fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value.into_owned(),
            None => fields.push((name.into_owned(), value.into_owned())),
        }
    }
    fields
}

pub fn validate_lead(fields: &[(String, String)]) -> Result<(), RelayError> {
    let value_of = |name: &str| {
        fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .unwrap_or("")
    };

    if let Some(missing) = REQUIRED_FIELDS.into_iter().find(|name| value_of(name).is_empty()) {
        return Err(RelayError::MissingField(missing));
    }
    if !value_of("Email").contains('@') {
        return Err(RelayError::InvalidEmail);
    }
    Ok(())
}

pub async fn relay_lead(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), RelayError> {
    if state.limiter.check().is_err() {
        warn!("Lead submission rejected: rate limit reached");
        return Err(RelayError::RateLimited);
    }

    let fields = parse_lead(&body);
    if let Err(e) = validate_lead(&fields) {
        warn!("Lead submission rejected: {}", e);
        return Err(e);
    }

    let response = state
        .http
        .post(&state.config.lead_form_endpoint)
        .form(&fields)
        .send()
        .await
        .map_err(|e| {
            error!("Failed to reach form endpoint: {}", e);
            RelayError::UpstreamUnreachable(e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        error!("Form endpoint returned {}", status);
        return Err(RelayError::UpstreamRejected(status.as_u16()));
    }

    info!("Lead relayed ({} fields)", fields.len());
    Ok((StatusCode::ACCEPTED, Json(json!({ "status": "queued" }))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;
    use crate::config::RelayConfig;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::Router;
    use std::collections::HashMap;
    use tower::ServiceExt;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ALEX_MORGAN: &str = "Name=Alex+Morgan&Email=alex%40company.com&Company=Acme+Ltd.\
        &Target_Architecture=Finance&Primary_Objective=Cost+reduction\
        &Data_Maturity=Unsure&AI_Experience=No+prior+experience\
        &Timeline=Exploratory&Success_Criteria=";

    fn test_router(endpoint: &str, rate: &str) -> Router {
        let vars: HashMap<&str, String> = [
            ("LEAD_FORM_ENDPOINT", endpoint.to_string()),
            ("LEAD_RATE_PER_MINUTE", rate.to_string()),
            ("UPSTREAM_TIMEOUT_SECS", "2".to_string()),
        ]
        .into_iter()
        .collect();
        let config = RelayConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        build_router(Arc::new(AppState::new(config).unwrap()))
    }

    fn lead_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/leads")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_parse_lead_keeps_order_and_last_value() {
        let fields = parse_lead(b"Name=first&Email=a%40b.c&Name=second&Timeline=3%E2%80%936+Months");
        assert_eq!(
            fields,
            vec![
                ("Name".to_string(), "second".to_string()),
                ("Email".to_string(), "a@b.c".to_string()),
                ("Timeline".to_string(), "3–6 Months".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_lead() {
        assert!(validate_lead(&parse_lead(ALEX_MORGAN.as_bytes())).is_ok());
        assert!(matches!(
            validate_lead(&parse_lead(b"Name=Alex&Email=a%40b.c&Company=+++")),
            Err(RelayError::MissingField("Company"))
        ));
        assert!(matches!(
            validate_lead(&parse_lead(b"Email=a%40b.c")),
            Err(RelayError::MissingField("Name"))
        ));
        assert!(matches!(
            validate_lead(&parse_lead(b"Name=Alex&Email=alex.company.com&Company=Acme")),
            Err(RelayError::InvalidEmail)
        ));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_router("http://127.0.0.1:9/exec", "30");
        let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_lead_is_forwarded_and_queued() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/exec"))
            .and(body_string(ALEX_MORGAN))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test_router(&format!("{}/exec", upstream.uri()), "30");
        let resp = app.oneshot(lead_request(ALEX_MORGAN)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        assert_eq!(json_body(resp).await, json!({ "status": "queued" }));
    }

    #[tokio::test]
    async fn test_upstream_rejection_is_bad_gateway() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&upstream)
            .await;

        let app = test_router(&format!("{}/exec", upstream.uri()), "30");
        let resp = app.oneshot(lead_request(ALEX_MORGAN)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "Form endpoint rejected the submission (500)");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let app = test_router("http://127.0.0.1:1/exec", "30");
        let resp = app.oneshot(lead_request(ALEX_MORGAN)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Form endpoint unreachable"));
    }

    #[tokio::test]
    async fn test_blank_required_field_is_not_forwarded() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let app = test_router(&format!("{}/exec", upstream.uri()), "30");
        let resp = app
            .oneshot(lead_request("Name=Alex+Morgan&Email=alex%40company.com&Company="))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(resp).await["error"], "Company is required");
    }

    #[tokio::test]
    async fn test_quota_exhaustion_returns_429() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test_router(&format!("{}/exec", upstream.uri()), "1");
        let first = app.clone().oneshot(lead_request(ALEX_MORGAN)).await.unwrap();
        assert_eq!(first.status(), StatusCode::ACCEPTED);

        let second = app.oneshot(lead_request(ALEX_MORGAN)).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_unknown_paths_fall_back_to_the_app_shell() {
        let dist = std::env::temp_dir().join(format!("aventeq-relay-dist-{}", std::process::id()));
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html>shell</html>").unwrap();

        let vars: HashMap<&str, String> = [
            ("LEAD_FORM_ENDPOINT", "http://127.0.0.1:9/exec".to_string()),
            ("STATIC_DIR", dist.display().to_string()),
        ]
        .into_iter()
        .collect();
        let config = RelayConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        let app = build_router(Arc::new(AppState::new(config).unwrap()));

        let req = Request::builder().uri("/solutions/finance").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>shell</html>");

        let _ = std::fs::remove_dir_all(&dist);
    }
}
