use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use tracing::error;

use crate::state::AppState;

pub const SECRET_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Guards the webhook: passes when no secret is configured, otherwise the
/// header Telegram sends must match.
pub struct WebhookSecret;

impl<S> FromRequestParts<S> for WebhookSecret
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Some(state) = parts.extensions.get::<AppState>() else {
            error!("Webhook called without application state; rejecting.");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Webhook not configured"));
        };
        let expected = state.webhook_secret.clone();
        let provided = parts.headers.get(SECRET_HEADER).and_then(|h| h.to_str().ok());

        if secret_matches(expected.as_deref(), provided) {
            Ok(WebhookSecret)
        } else {
            error!("Rejected webhook call with missing or invalid secret token.");
            Err((StatusCode::UNAUTHORIZED, "Invalid webhook secret"))
        }
    }
}

pub fn secret_matches(expected: Option<&str>, provided: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => provided == Some(expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::webhook::router;
    use crate::test_support::harness;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn webhook_request(secret: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/telegram/webhook")
            .header("content-type", "application/json");
        if let Some(secret) = secret {
            builder = builder.header(SECRET_HEADER, secret);
        }
        builder.body(Body::from(r#"{"update_id": 1}"#)).unwrap()
    }

    #[test]
    fn secret_is_optional_until_configured() {
        assert!(secret_matches(None, None));
        assert!(secret_matches(None, Some("anything")));
        assert!(secret_matches(Some("s3cret"), Some("s3cret")));
        assert!(!secret_matches(Some("s3cret"), Some("guess")));
        assert!(!secret_matches(Some("s3cret"), None));
    }

    #[tokio::test]
    async fn configured_secret_guards_the_webhook_route() {
        let mut h = harness().await;
        h.state.webhook_secret = Some("s3cret".into());
        let app = router(h.state.clone());

        let missing = app.clone().oneshot(webhook_request(None)).await.unwrap();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

        let wrong = app.clone().oneshot(webhook_request(Some("guess"))).await.unwrap();
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

        let ok = app.oneshot(webhook_request(Some("s3cret"))).await.unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_state_is_rejected() {
        let app = axum::Router::new().route(
            "/telegram/webhook",
            axum::routing::post(|_secret: WebhookSecret| async { StatusCode::OK }),
        );

        let response = app.oneshot(webhook_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
