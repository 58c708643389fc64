//! View-sync controller: keeps the display in step with the backend.

mod actions;
mod queries;
mod sync;

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::services::MessageDisplay;
use crate::domain::NotificationLevel;
use crate::domain::errors::RequestError;
use crate::domain::ports::{ApiRequest, HttpPort, ViewPort};

pub use actions::FINALIZE_PROMPT;
pub use sync::apply_session;

const ACTIVE_SESSION_PATH: &str = "/votacion/activa";
const GLOBAL_CANDIDATES_PATH: &str = "/candidatos";
const START_VOTING_PATH: &str = "/votacion/iniciar";
const ADD_CANDIDATE_PATH: &str = "/votacion/candidato";
const CAST_VOTE_PATH: &str = "/votacion/votar";
const FINALIZE_PATH: &str = "/votacion/finalizar";
const RESULTS_PATH: &str = "/resultados";
const CHAIN_PATH: &str = "/cadena";
const VERIFY_PATH: &str = "/verificar";

/// Fetches backend state into a [`ViewPort`] and runs user actions.
///
/// Every request error is shown once, through the status region, by the
/// fetch helpers. Handlers then drop the error and leave the view as is.
pub struct ViewSyncController<V: ViewPort> {
    http: Arc<dyn HttpPort>,
    view: V,
    messages: MessageDisplay,
}

impl<V: ViewPort> ViewSyncController<V> {
    /// Creates a controller over the given transport and view.
    #[must_use]
    pub fn new(http: Arc<dyn HttpPort>, view: V, clear_delay: Duration) -> Self {
        Self {
            http,
            view,
            messages: MessageDisplay::new(clear_delay),
        }
    }

    /// Returns the view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns the view for input handling.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Shows a status message, scheduling its clear.
    pub fn show_message(&mut self, message: &str, level: NotificationLevel) {
        self.messages.show(&mut self.view, message, level);
    }

    /// Clears status messages whose delay has elapsed.
    pub fn expire_messages(&mut self, now: Instant) {
        self.messages.expire(&mut self.view, now);
    }

    /// Loads every view: session, global directory, chain and results.
    pub async fn load_all(&mut self) {
        self.refresh_session().await;
        self.refresh_global_candidates().await;
        self.show_chain().await;
        self.show_results().await;
    }

    /// Performs a request, surfacing any failure before returning it.
    async fn fetch_data(&mut self, request: ApiRequest) -> Result<Value, RequestError> {
        debug!(method = %request.method, path = %request.path, "Sending request");
        let path = request.path.clone();

        let result = self.http.send(request).await;
        if let Err(e) = &result {
            warn!(error = %e, path = %path, "Request failed");
            self.surface(e);
        }
        result
    }

    /// Like [`Self::fetch_data`], but a missing resource is `Ok(None)` and
    /// is not surfaced.
    async fn fetch_optional(&mut self, request: ApiRequest) -> Result<Option<Value>, RequestError> {
        debug!(method = %request.method, path = %request.path, "Sending request");
        let path = request.path.clone();

        let result = self.http.send(request).await;
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => {
                debug!(path = %path, "Resource not found");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, path = %path, "Request failed");
                self.surface(&e);
                Err(e)
            }
        }
    }

    /// POSTs a JSON body.
    async fn post_json<T: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &T,
    ) -> Result<Value, RequestError> {
        match ApiRequest::post(path).with_body(body) {
            Ok(request) => self.fetch_data(request).await,
            Err(e) => {
                warn!(error = %e, path = %path, "Failed to build request");
                self.surface(&e);
                Err(e)
            }
        }
    }

    fn surface(&mut self, error: &RequestError) {
        let message = format!("Error: {}", error.message());
        self.show_message(&message, NotificationLevel::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::HttpMethod;
    use crate::domain::ports::mocks::{MockHttpPort, MockViewPort};
    use serde_json::json;

    pub(super) fn controller(
        http: Arc<MockHttpPort>,
        view: MockViewPort,
    ) -> ViewSyncController<MockViewPort> {
        ViewSyncController::new(http, view, Duration::from_secs(7))
    }

    #[tokio::test]
    async fn test_fetch_error_is_surfaced() {
        let http = Arc::new(MockHttpPort::new().respond(
            HttpMethod::Get,
            CHAIN_PATH,
            Err(RequestError::from_status(500, "boom")),
        ));
        let mut controller = controller(http, MockViewPort::new());

        let result = controller.fetch_data(ApiRequest::get(CHAIN_PATH)).await;

        assert!(result.is_err());
        assert_eq!(controller.view().status_text(), Some("Error: boom"));
        assert_eq!(
            controller.view().status_level(),
            Some(NotificationLevel::Error)
        );
    }

    #[tokio::test]
    async fn test_fetch_optional_not_found_is_silent() {
        let http = Arc::new(MockHttpPort::new().respond(
            HttpMethod::Get,
            ACTIVE_SESSION_PATH,
            Err(RequestError::from_status(404, "HTTP error! status: 404")),
        ));
        let mut controller = controller(http, MockViewPort::new());

        let result = controller
            .fetch_optional(ApiRequest::get(ACTIVE_SESSION_PATH))
            .await;

        assert_eq!(result, Ok(None));
        assert_eq!(controller.view().status_text(), None);
    }

    #[tokio::test]
    async fn test_load_all_queries_every_view() {
        let http = Arc::new(
            MockHttpPort::new()
                .respond(
                    HttpMethod::Get,
                    ACTIVE_SESSION_PATH,
                    Err(RequestError::from_status(404, "none")),
                )
                .respond(HttpMethod::Get, GLOBAL_CANDIDATES_PATH, Ok(json!({})))
                .respond(HttpMethod::Get, CHAIN_PATH, Ok(json!([])))
                .respond(
                    HttpMethod::Get,
                    RESULTS_PATH,
                    Ok(json!({"resultados": {}, "info": {}})),
                ),
        );
        let mut controller = controller(http.clone(), MockViewPort::new());

        controller.load_all().await;

        let paths: Vec<String> = http.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                ACTIVE_SESSION_PATH,
                GLOBAL_CANDIDATES_PATH,
                CHAIN_PATH,
                RESULTS_PATH
            ]
        );
        assert_eq!(controller.view().status_text(), None);
    }
}
