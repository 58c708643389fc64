//! HTTP transport port definition.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::RequestError;

/// Request method used by the voting API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read-only query.
    Get,
    /// State-changing action.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Request against the voting API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request without body.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::get(path)
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes and attaches a JSON body.
    ///
    /// # Errors
    /// Returns error if the body cannot be represented as JSON.
    pub fn with_body<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, RequestError> {
        let value = serde_json::to_value(body).map_err(|e| {
            RequestError::malformed_body(format!("failed to encode request body: {e}"))
        })?;
        Ok(self.with_json(value))
    }
}

/// Port for performing requests against the voting backend.
///
/// Implementations decode JSON bodies, wrap plain-text successes as
/// `{"success": true, "message": <text>}` and map non-success statuses to
/// [`RequestError`].
#[async_trait]
pub trait HttpPort: Send + Sync {
    /// Sends the request and returns the decoded body.
    async fn send(&self, request: ApiRequest) -> Result<Value, RequestError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Body<'a> {
        tema: &'a str,
    }

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::get("/resultados").with_query("tema", "Best Pet");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.query, vec![("tema".to_string(), "Best Pet".to_string())]);
        assert!(request.body.is_none());

        let request = ApiRequest::post("/votacion/iniciar")
            .with_body(&Body { tema: "Best Pet" })
            .unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({"tema": "Best Pet"})));
        assert_eq!(request.method.to_string(), "POST");
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scripted transport recording every request it receives.
    #[derive(Default)]
    pub struct MockHttpPort {
        responses: Mutex<HashMap<(HttpMethod, String), Result<Value, RequestError>>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl MockHttpPort {
        /// Creates mock without responses.
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts the response for a method and path.
        pub fn respond(
            self,
            method: HttpMethod,
            path: &str,
            result: Result<Value, RequestError>,
        ) -> Self {
            self.set_response(method, path, result);
            self
        }

        /// Replaces the scripted response for a method and path.
        pub fn set_response(
            &self,
            method: HttpMethod,
            path: &str,
            result: Result<Value, RequestError>,
        ) {
            self.responses
                .lock()
                .unwrap()
                .insert((method, path.to_string()), result);
        }

        /// Returns every request received so far.
        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Returns the number of requests received so far.
        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        /// Returns the requests sent with the given method to the given path.
        pub fn requests_to(&self, method: HttpMethod, path: &str) -> Vec<ApiRequest> {
            self.requests()
                .into_iter()
                .filter(|r| r.method == method && r.path == path)
                .collect()
        }
    }

    #[async_trait]
    impl HttpPort for MockHttpPort {
        async fn send(&self, request: ApiRequest) -> Result<Value, RequestError> {
            let key = (request.method, request.path.clone());
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .get(&key)
                .cloned()
                .unwrap_or_else(|| Err(RequestError::network("no scripted response")))
        }
    }
}
