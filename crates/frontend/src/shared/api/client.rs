use super::{ApiError, ApiRequest, GlooTransport, HttpTransport, Method};
use crate::shared::config::AppConfig;
use crate::system::auth::storage;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Configured API client: base URL, credential source and transport.
///
/// Cheap to clone; one instance is provided through context by `App`.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<AppConfig>,
    transport: Arc<dyn HttpTransport>,
    token: fn() -> Option<String>,
}

impl ApiClient {
    /// Browser client: gloo-net transport, token from localStorage
    pub fn new(config: AppConfig) -> Self {
        Self::with_transport(config, Arc::new(GlooTransport), storage::get_access_token)
    }

    pub fn with_transport(
        config: AppConfig,
        transport: Arc<dyn HttpTransport>,
        token: fn() -> Option<String>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            token,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let request = ApiRequest {
            method,
            url: self.config.api_url(path),
            bearer: (self.token)(),
            body,
        };
        log::debug!("{} {}", method.as_str(), path);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            e
        })?;

        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            log::warn!("{} {} -> {}: {}", method.as_str(), path, response.status, err);
            return Err(err);
        }
        Ok(response.body)
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::Get, path, None).await?;
        Self::decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = Self::encode(body)?;
        let body = self.execute(Method::Post, path, Some(payload)).await?;
        Self::decode(&body)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = Self::encode(body)?;
        let body = self.execute(Method::Patch, path, Some(payload)).await?;
        Self::decode(&body)
    }

    /// DELETE ignores the response body
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None).await.map(|_| ())
    }
}

/// Hook to access the API client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{test_client, RecordingTransport};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_get_builds_absolute_url_and_attaches_token() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"id":3}"#);
        let client = test_client(&transport);

        let item: Item = block_on(client.get("/product-categories/3")).unwrap();

        assert_eq!(item, Item { id: 3 });
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "http://api.test/product-categories/3");
        assert_eq!(requests[0].bearer.as_deref(), Some("test-token"));
        assert_eq!(requests[0].body, None);
    }

    #[test]
    fn test_post_serializes_body() {
        let transport = RecordingTransport::new();
        transport.respond(201, r#"{"id":9}"#);
        let client = test_client(&transport);

        let body = serde_json::json!({"name": "Frutas"});
        let created: Item = block_on(client.post("/product-categories", &body)).unwrap();

        assert_eq!(created.id, 9);
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"Frutas"}"#));
    }

    #[test]
    fn test_error_status_becomes_value() {
        let transport = RecordingTransport::new();
        transport.respond(404, r#"{"message":"Producto no encontrado"}"#);
        let client = test_client(&transport);

        let result = block_on(client.delete("/products/7"));

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 404,
                message: "Producto no encontrado".into()
            })
        );
    }

    #[test]
    fn test_transport_failure_is_propagated() {
        let transport = RecordingTransport::new();
        transport.fail(ApiError::Network("offline".into()));
        let client = test_client(&transport);

        let result: Result<Item, _> = block_on(client.get("/users"));
        assert_eq!(result, Err(ApiError::Network("offline".into())));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let transport = RecordingTransport::new();
        transport.respond(200, "not json");
        let client = test_client(&transport);

        let result: Result<Item, _> = block_on(client.get("/users/1"));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
