//! HTTP API Client
//!
//! gloo-net transport for the OctoFit REST API and build-time endpoint
//! resolution.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use octofit::{Endpoints, Environment, ExecutionMode, FetchError, Transport};
use serde_json::Value;

/// Codespace name baked in at build time, if the build ran inside one
pub fn codespace_name() -> Option<&'static str> {
    option_env!("OCTOFIT_CODESPACE_NAME").or(option_env!("CODESPACE_NAME"))
}

/// Resolve the endpoints once for the whole app
pub fn endpoints() -> Endpoints {
    let env = Environment::new(
        codespace_name().map(str::to_string),
        ExecutionMode::from_build(),
    );
    let endpoints = Endpoints::resolve(&env);

    if env.mode == ExecutionMode::Development {
        web_sys::console::log_1(&format!("OctoFit API base: {}", endpoints.base_url).into());
    }
    endpoints
}

/// Transport backed by the browser's fetch
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

async fn check(response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let detail = response.text().await.unwrap_or_default();
    web_sys::console::warn_1(&format!("Backend returned status {}", status).into());
    Err(FetchError::Http { status, detail })
}

fn network_error(e: gloo_net::Error) -> FetchError {
    FetchError::Network(e.to_string())
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = Request::get(url).send().await.map_err(network_error)?;
        let response = check(response).await?;

        let body = response.text().await.map_err(network_error)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    async fn put_json(&self, url: &str, body: &Value) -> Result<(), FetchError> {
        let response = Request::put(url)
            .json(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check(response).await?;
        Ok(())
    }
}
