//! Voting API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode, header};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::domain::errors::RequestError;
use crate::domain::ports::{ApiRequest, HttpMethod, HttpPort};

const USER_AGENT: &str = concat!("urna/", env!("CARGO_PKG_VERSION"));

/// Decoded response body, before status handling.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body declared as `application/json`.
    Json(Value),
    /// Any other body, read as text.
    Text(String),
}

impl ResponseBody {
    /// Decodes a body according to its declared content type.
    ///
    /// A JSON document that is a bare string counts as text.
    ///
    /// # Errors
    /// Returns error if a body declared as JSON does not parse.
    pub fn decode(content_type: Option<&str>, text: String) -> Result<Self, RequestError> {
        let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
        if !is_json {
            return Ok(Self::Text(text));
        }

        match serde_json::from_str(&text) {
            Ok(Value::String(text)) => Ok(Self::Text(text)),
            Ok(value) => Ok(Self::Json(value)),
            Err(e) => Err(RequestError::malformed_body(format!(
                "invalid JSON response: {e}"
            ))),
        }
    }

    /// Message for a failed response: the JSON `error` field, the text body,
    /// or a generic status message.
    #[must_use]
    pub fn error_message(&self, status: u16) -> String {
        match self {
            Self::Json(value) => value
                .get("error")
                .and_then(Value::as_str)
                .filter(|e| !e.is_empty())
                .map_or_else(|| generic_status_message(status), str::to_string),
            Self::Text(text) if text.trim().is_empty() => generic_status_message(status),
            Self::Text(text) => text.clone(),
        }
    }

    /// Success payload; text bodies are wrapped so callers always get JSON.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => json!({ "success": true, "message": text }),
        }
    }
}

fn generic_status_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Maps a received response to the port result.
///
/// Failed statuses keep their code even when the body is unreadable.
fn read_response(
    status: StatusCode,
    content_type: Option<&str>,
    text: String,
) -> Result<Value, RequestError> {
    let body = ResponseBody::decode(content_type, text);

    if !status.is_success() {
        let code = status.as_u16();
        let message = body.map_or_else(
            |_| generic_status_message(code),
            |body| body.error_message(code),
        );
        debug!(status = %status, message = %message, "Voting API returned an error");
        return Err(RequestError::from_status(code, message));
    }

    Ok(body?.into_value())
}

/// Voting backend client.
pub struct VotingApiClient {
    client: Client,
    base_url: String,
}

impl VotingApiClient {
    /// Creates client against the given base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RequestError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RequestError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build_request(&self, request: &ApiRequest) -> Result<Request, RequestError> {
        let url = self.url(&request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .build()
            .map_err(|e| RequestError::network(format!("invalid request to {url}: {e}")))
    }
}

#[async_trait]
impl HttpPort for VotingApiClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, RequestError> {
        let http_request = self.build_request(&request)?;
        let url = http_request.url().clone();

        let response = self.client.execute(http_request).await.map_err(|e| {
            warn!(error = %e, url = %url, "Failed to reach voting API");
            if e.is_timeout() {
                RequestError::network("request timed out")
            } else if e.is_connect() {
                RequestError::network("failed to connect to the voting API")
            } else {
                RequestError::network(e.to_string())
            }
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let text = response
            .text()
            .await
            .map_err(|e| RequestError::malformed_body(format!("failed to read response: {e}")))?;

        let value = read_response(status, content_type.as_deref(), text)?;
        debug!(status = %status, method = %request.method, path = %request.path, "Request succeeded");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_client_creation_trims_base_url() {
        let client = VotingApiClient::new("http://127.0.0.1:5001/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("/cadena"), "http://127.0.0.1:5001/cadena");
    }

    fn client() -> VotingApiClient {
        VotingApiClient::new("http://127.0.0.1:5001", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_post_encodes_json_body() {
        let request = ApiRequest::post("/votacion/votar")
            .with_json(json!({"id_votante": "V-1", "id_candidato": "2"}));

        let built = client().build_request(&request).unwrap();

        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(built.url().as_str(), "http://127.0.0.1:5001/votacion/votar");
        assert_eq!(
            built.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = built.body().and_then(reqwest::Body::as_bytes).unwrap();
        let sent: Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(sent, json!({"id_votante": "V-1", "id_candidato": "2"}));
    }

    #[test]
    fn test_get_encodes_query() {
        let request = ApiRequest::get("/resultados").with_query("tema", "Best Pet");

        let built = client().build_request(&request).unwrap();

        assert_eq!(built.method(), reqwest::Method::GET);
        assert_eq!(built.url().path(), "/resultados");
        let pairs: Vec<(String, String)> = built.url().query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("tema".to_string(), "Best Pet".to_string())]);
        assert!(built.body().is_none());
    }

    #[test]
    fn test_get_without_query_has_clean_url() {
        let built = client().build_request(&ApiRequest::get("/cadena")).unwrap();
        assert_eq!(built.url().query(), None);
    }

    #[test]
    fn test_read_response_success_json() {
        let value = read_response(
            StatusCode::OK,
            Some("application/json"),
            r#"{"integridad_valida": true}"#.to_string(),
        )
        .unwrap();
        assert_eq!(value, json!({"integridad_valida": true}));
    }

    #[test]
    fn test_read_response_failure_with_malformed_json_keeps_status() {
        let err = read_response(
            StatusCode::NOT_FOUND,
            Some("application/json"),
            "{not json".to_string(),
        )
        .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.message(), "HTTP error! status: 404");
    }

    #[test]
    fn test_read_response_failure_uses_error_field() {
        let err = read_response(
            StatusCode::CONFLICT,
            Some("application/json"),
            r#"{"error": "Ya hay una votación activa"}"#.to_string(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            RequestError::Status {
                status: 409,
                message: "Ya hay una votación activa".to_string()
            }
        );
    }

    #[test]
    fn test_read_response_success_with_malformed_json() {
        let err = read_response(StatusCode::OK, Some("application/json"), "[1,".to_string())
            .unwrap_err();
        assert!(matches!(err, RequestError::MalformedBody { .. }));
    }

    #[test]
    fn test_json_string_body_is_text() {
        let body = ResponseBody::decode(Some("application/json"), r#""hecho""#.to_string()).unwrap();
        assert_eq!(
            body.into_value(),
            json!({"success": true, "message": "hecho"})
        );

        let err = read_response(
            StatusCode::BAD_REQUEST,
            Some("application/json"),
            r#""Falta el tema""#.to_string(),
        )
        .unwrap_err();
        assert_eq!(err.message(), "Falta el tema");
    }

    #[test]
    fn test_decode_json() {
        let body = ResponseBody::decode(
            Some("application/json; charset=utf-8"),
            r#"{"mensaje": "ok"}"#.to_string(),
        )
        .unwrap();
        assert_eq!(body, ResponseBody::Json(json!({"mensaje": "ok"})));
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = ResponseBody::decode(Some("application/json"), "{oops".to_string()).unwrap_err();
        assert!(matches!(err, RequestError::MalformedBody { .. }));
    }

    #[test]
    fn test_text_success_is_wrapped() {
        let body = ResponseBody::decode(Some("text/html"), "<p>hola</p>".to_string()).unwrap();
        assert_eq!(
            body.into_value(),
            json!({"success": true, "message": "<p>hola</p>"})
        );

        let body = ResponseBody::decode(None, "plain".to_string()).unwrap();
        assert_eq!(body, ResponseBody::Text("plain".to_string()));
    }

    #[test_case(ResponseBody::Json(json!({"error": "Se requiere el campo 'tema'"})), 400, "Se requiere el campo 'tema'" ; "json_error_field")]
    #[test_case(ResponseBody::Json(json!({"mensaje": "No hay ninguna votación activa"})), 404, "HTTP error! status: 404" ; "json_without_error")]
    #[test_case(ResponseBody::Text("Internal Server Error".to_string()), 500, "Internal Server Error" ; "text_body")]
    #[test_case(ResponseBody::Text(String::new()), 502, "HTTP error! status: 502" ; "empty_text_body")]
    fn test_error_message_priority(body: ResponseBody, status: u16, expected: &str) {
        assert_eq!(body.error_message(status), expected);
    }
}
