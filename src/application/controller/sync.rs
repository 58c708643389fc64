//! Session and candidate directory refreshes.

use tracing::debug;

use super::{ACTIVE_SESSION_PATH, GLOBAL_CANDIDATES_PATH, ViewSyncController};
use crate::application::services::{populate_list, populate_select};
use crate::domain::entities::ActiveVotingSession;
use crate::domain::ports::{ApiRequest, ListId, Section, SelectId, TextRegion, ViewPort};
use crate::domain::NotificationLevel;

const SELECT_PLACEHOLDER: &str = "Selecciona un candidato";
const SESSION_LOAD_ERROR: &str = "Error al obtener el estado de la votación activa.";
const GLOBAL_LOAD_ERROR: &str = "Error al cargar la lista de candidatos globales.";

/// Renders the session into the view.
///
/// Section visibility depends only on whether `session` has a topic. Without
/// one, nothing but visibility is touched.
pub fn apply_session<V: ViewPort + ?Sized>(view: &mut V, session: Option<&ActiveVotingSession>) {
    let topic = session.and_then(ActiveVotingSession::active_topic);
    let active = topic.is_some();

    for section in Section::ALL {
        view.set_section_visible(section, section.is_visible(active));
    }

    let (Some(session), Some(topic)) = (session, topic) else {
        return;
    };

    view.set_text(TextRegion::ActiveTopic, topic);
    view.set_text(TextRegion::TopicReference, topic);
    view.set_text(
        TextRegion::VotesReceived,
        &session.received_vote_count.to_string(),
    );
    view.set_text(
        TextRegion::Participants,
        &session.participant_voter_count.to_string(),
    );

    let candidates = session.candidates_or_empty();
    populate_list(view, ListId::ActiveCandidates, &candidates, Some("nombre"), true);
    populate_select(
        view,
        SelectId::ActiveCandidate,
        &candidates,
        "id",
        "nombre",
        Some(SELECT_PLACEHOLDER),
        true,
    );
}

impl<V: ViewPort> ViewSyncController<V> {
    /// Fetches the active session and toggles the session sections.
    ///
    /// A 404 means no session is open. Other failures leave visibility as is.
    pub async fn refresh_session(&mut self) -> Option<ActiveVotingSession> {
        match self
            .fetch_optional(ApiRequest::get(ACTIVE_SESSION_PATH))
            .await
        {
            Ok(Some(value)) => {
                let session =
                    ActiveVotingSession::from_value(&value).filter(ActiveVotingSession::is_active);
                apply_session(&mut self.view, session.as_ref());
                session
            }
            Ok(None) => {
                debug!("No active voting session");
                apply_session(&mut self.view, None);
                None
            }
            Err(_) => {
                self.show_message(SESSION_LOAD_ERROR, NotificationLevel::Error);
                None
            }
        }
    }

    /// Fetches the global candidate directory into its list.
    pub async fn refresh_global_candidates(&mut self) {
        match self
            .fetch_data(ApiRequest::get(GLOBAL_CANDIDATES_PATH))
            .await
        {
            Ok(candidates) => {
                populate_list(
                    &mut self.view,
                    ListId::GlobalCandidates,
                    &candidates,
                    Some("nombre"),
                    true,
                );
            }
            Err(_) => {
                self.show_message(GLOBAL_LOAD_ERROR, NotificationLevel::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::controller::tests::controller;
    use crate::domain::errors::RequestError;
    use crate::domain::ports::mocks::{MockHttpPort, MockViewPort};
    use crate::domain::ports::{HttpMethod, SelectOption};
    use serde_json::json;

    fn session_http(response: Result<serde_json::Value, RequestError>) -> Arc<MockHttpPort> {
        Arc::new(MockHttpPort::new().respond(HttpMethod::Get, ACTIVE_SESSION_PATH, response))
    }

    #[tokio::test]
    async fn test_active_session_shows_sections() {
        let http = session_http(Ok(json!({
            "tema_activo": "Best Pet",
            "numero_votos_recibidos": 3,
            "candidatos": {"1": {"nombre": "Cat"}, "2": {"nombre": "Dog"}}
        })));
        let mut controller = controller(http, MockViewPort::new());

        let session = controller.refresh_session().await;
        assert!(session.is_some());

        let view = controller.view();
        assert_eq!(view.is_visible(Section::StartVoting), Some(false));
        for section in [
            Section::SessionStatus,
            Section::AddCandidate,
            Section::CastVote,
            Section::Finalize,
        ] {
            assert_eq!(view.is_visible(section), Some(true));
        }

        assert_eq!(view.text(TextRegion::ActiveTopic), Some("Best Pet"));
        assert_eq!(view.text(TextRegion::TopicReference), Some("Best Pet"));
        assert_eq!(view.text(TextRegion::VotesReceived), Some("3"));
        assert_eq!(view.text(TextRegion::Participants), Some("0"));

        let options = view.options(SelectId::ActiveCandidate);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], SelectOption::placeholder(SELECT_PLACEHOLDER));
        assert_eq!(options[1], SelectOption::new("1", "Cat"));
        assert_eq!(options[2], SelectOption::new("2", "Dog"));

        assert_eq!(
            view.list_texts(ListId::ActiveCandidates),
            vec!["ID: 1 - Nombre: Cat", "ID: 2 - Nombre: Dog"]
        );
    }

    #[tokio::test]
    async fn test_not_found_hides_sections_without_message() {
        let http = session_http(Err(RequestError::from_status(404, "HTTP error! status: 404")));
        let mut view = MockViewPort::new();
        view.texts
            .insert(TextRegion::ActiveTopic, "Old topic".to_string());
        let mut controller = controller(http, view);

        let session = controller.refresh_session().await;

        assert!(session.is_none());
        let view = controller.view();
        assert_eq!(view.is_visible(Section::StartVoting), Some(true));
        assert_eq!(view.is_visible(Section::CastVote), Some(false));
        assert_eq!(view.is_visible(Section::Finalize), Some(false));
        assert_eq!(view.text(TextRegion::ActiveTopic), Some("Old topic"));
        assert_eq!(view.status_text(), None);
    }

    #[tokio::test]
    async fn test_session_without_topic_is_inactive() {
        let http = session_http(Ok(json!({"tema_activo": null, "candidatos": {}})));
        let mut controller = controller(http, MockViewPort::new());

        assert!(controller.refresh_session().await.is_none());
        assert_eq!(
            controller.view().is_visible(Section::StartVoting),
            Some(true)
        );
    }

    #[tokio::test]
    async fn test_other_failure_keeps_visibility() {
        let http = session_http(Err(RequestError::network("connection refused")));
        let mut controller = controller(http, MockViewPort::new());

        controller.refresh_session().await;

        let view = controller.view();
        assert!(view.visible.is_empty());
        assert_eq!(view.status_text(), Some(SESSION_LOAD_ERROR));
        assert_eq!(view.status_level(), Some(NotificationLevel::Error));
    }

    #[tokio::test]
    async fn test_global_candidates_list() {
        let http = Arc::new(MockHttpPort::new().respond(
            HttpMethod::Get,
            GLOBAL_CANDIDATES_PATH,
            Ok(json!({"1": "Cat", "2": "Dog"})),
        ));
        let mut controller = controller(http, MockViewPort::new());

        controller.refresh_global_candidates().await;

        assert_eq!(
            controller.view().list_texts(ListId::GlobalCandidates),
            vec!["ID: 1 - Nombre: Cat", "ID: 2 - Nombre: Dog"]
        );
    }

    #[tokio::test]
    async fn test_global_candidates_failure() {
        let http = Arc::new(MockHttpPort::new().respond(
            HttpMethod::Get,
            GLOBAL_CANDIDATES_PATH,
            Err(RequestError::from_status(500, "boom")),
        ));
        let mut controller = controller(http, MockViewPort::new());

        controller.refresh_global_candidates().await;

        assert_eq!(controller.view().status_text(), Some(GLOBAL_LOAD_ERROR));
    }
}
