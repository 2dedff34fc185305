//! reqwest Transport
//!
//! Native HTTP transport. No timeout is configured: a hung backend leaves the
//! view loading, same as the browser build.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use super::{FetchError, Transport};

/// Transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn check(response: Response) -> Result<Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Backend returned an error status");
        Err(FetchError::Http {
            status: status.as_u16(),
            detail,
        })
    }
}

fn network_error(e: reqwest::Error) -> FetchError {
    FetchError::Network(e.to_string())
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await.map_err(network_error)?;
        let response = Self::check(response).await?;

        let body = response.text().await.map_err(network_error)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    async fn put_json(&self, url: &str, body: &Value) -> Result<(), FetchError> {
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(network_error)?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use crate::edit::{FormField, UsersPanel};
    use crate::fetch::{fetch_collection, ResourceView};
    use crate::records::TeamRow;
    use axum::{
        extract::Path,
        http::StatusCode,
        routing::{get, put},
        Json, Router,
    };
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    fn users_payload() -> Value {
        json!([
            {"id": 42, "name": "Rex", "alias": "R", "email": "r@x.com", "team": "Falcons", "fitness_level": "beginner"},
            {"id": 43, "name": "Kit", "email": "k@x.com", "team": "Owls"}
        ])
    }

    #[tokio::test]
    async fn test_get_bare_array() {
        let base = spawn_backend(Router::new().route(
            "/api/teams/",
            get(|| async { Json(json!([{"name": "Falcons", "members": ["a", "b"]}])) }),
        ))
        .await;

        let transport = HttpTransport::new();
        let mut view = ResourceView::<TeamRow>::mount(&Endpoints::from_base(&base));
        let items = view.load(&transport).await.items().unwrap().to_vec();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].member_count, 2);
    }

    #[tokio::test]
    async fn test_get_envelope() {
        let base = spawn_backend(Router::new().route(
            "/api/teams/",
            get(|| async { Json(json!({"count": 1, "results": [{"name": "Owls"}]})) }),
        ))
        .await;

        let records = fetch_collection(&HttpTransport::new(), &format!("{}/teams/", base))
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text(&["name"]).as_deref(), Some("Owls"));
    }

    #[tokio::test]
    async fn test_error_status() {
        let base = spawn_backend(Router::new().route(
            "/api/teams/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let err = HttpTransport::new()
            .get_json(&format!("{}/teams/", base))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 500,
                detail: "boom".into()
            }
        );
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let base = spawn_backend(
            Router::new().route("/api/teams/", get(|| async { "<html>not json</html>" })),
        )
        .await;

        let err = HttpTransport::new()
            .get_json(&format!("{}/teams/", base))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpTransport::new()
            .get_json(&format!("http://{}/api/users/", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_edit_accepted_refetches_users() {
        let list_hits = Arc::new(AtomicUsize::new(0));
        let received = Arc::new(Mutex::new(None::<(String, Value)>));

        let router = Router::new()
            .route(
                "/api/users/",
                get({
                    let hits = list_hits.clone();
                    move || async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        Json(users_payload())
                    }
                }),
            )
            .route(
                "/api/users/:id/",
                put({
                    let received = received.clone();
                    move |Path(id): Path<String>, Json(body): Json<Value>| async move {
                        *received.lock().unwrap() = Some((id, body));
                        StatusCode::OK
                    }
                }),
            )
            .route("/api/teams/", get(|| async { Json(json!([{"name": "Falcons"}])) }));
        let base = spawn_backend(router).await;

        let transport = HttpTransport::new();
        let mut panel = UsersPanel::mount(&Endpoints::from_base(&base));
        panel.load(&transport).await;
        assert_eq!(list_hits.load(Ordering::SeqCst), 1);
        assert_eq!(panel.team_options, vec!["Falcons".to_string()]);

        assert!(panel.open_editor("42"));
        panel.editor.set_field(FormField::Team, "Falcons");
        panel.editor.set_field(FormField::FitnessLevel, "advanced");
        assert!(panel.submit(&transport).await);

        assert!(!panel.editor.is_visible());
        assert!(panel.editor.notice().unwrap().is_success());
        assert_eq!(list_hits.load(Ordering::SeqCst), 2);

        let (id, body) = received.lock().unwrap().clone().unwrap();
        assert_eq!(id, "42");
        assert_eq!(
            body,
            json!({
                "name": "Rex",
                "alias": "R",
                "email": "r@x.com",
                "team": "Falcons",
                "fitness_level": "advanced"
            })
        );
    }

    #[tokio::test]
    async fn test_edit_rejected_keeps_modal_open() {
        let router = Router::new()
            .route("/api/users/", get(|| async { Json(users_payload()) }))
            .route(
                "/api/users/:id/",
                put(|| async { (StatusCode::NOT_FOUND, "{\"detail\":\"Not found.\"}") }),
            )
            .route("/api/teams/", get(|| async { Json(json!([{"name": "Falcons"}])) }));
        let base = spawn_backend(router).await;

        let transport = HttpTransport::new();
        let mut panel = UsersPanel::mount(&Endpoints::from_base(&base));
        panel.load(&transport).await;

        assert!(panel.open_editor("42"));
        panel.editor.set_field(FormField::FitnessLevel, "advanced");
        let form_before = panel.editor.form().clone();

        assert!(!panel.submit(&transport).await);
        assert!(panel.editor.is_visible());
        assert_eq!(panel.editor.form(), &form_before);

        let notice = panel.editor.notice().unwrap();
        assert!(!notice.is_success());
        assert!(notice.message().contains("Not found."));
    }
}
