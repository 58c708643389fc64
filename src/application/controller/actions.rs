//! User actions. Each one validates presence, posts once, reports and
//! refreshes the views it affects.

use tracing::{debug, info};

use super::{
    ADD_CANDIDATE_PATH, CAST_VOTE_PATH, FINALIZE_PATH, GLOBAL_CANDIDATES_PATH, START_VOTING_PATH,
    ViewSyncController,
};
use crate::application::dto::{
    ActionResponse, CandidateRequest, CastVoteRequest, StartVotingRequest,
};
use crate::domain::NotificationLevel;
use crate::domain::entities::GlobalCandidate;
use crate::domain::ports::{ApiRequest, FieldId, SelectId, ViewPort};

/// Confirmation asked before sealing the open session.
pub const FINALIZE_PROMPT: &str =
    "¿Estás seguro de que quieres finalizar la votación actual y crear el bloque?";

const MISSING_TOPIC: &str = "Por favor, introduce un tema para la votación.";
const MISSING_CANDIDATE_NAME: &str = "Por favor, introduce un nombre para el candidato.";
const MISSING_VOTER_ID: &str = "Por favor, introduce tu identificación.";
const MISSING_CANDIDATE: &str = "Por favor, selecciona un candidato.";

impl<V: ViewPort> ViewSyncController<V> {
    /// Opens a voting session on the entered topic.
    pub async fn start_voting(&mut self) {
        let tema = self.view.field_value(FieldId::Topic);
        if tema.is_empty() {
            self.show_message(MISSING_TOPIC, NotificationLevel::Error);
            return;
        }

        let request = StartVotingRequest { tema: tema.clone() };
        let Ok(response) = self.post_json(START_VOTING_PATH, &request).await else {
            return;
        };

        info!(topic = %tema, "Voting session started");
        let message =
            ActionResponse::from_value(&response).message_or(format!("Votación para '{tema}' iniciada."));
        self.show_message(&message, NotificationLevel::Success);
        self.view.clear_field(FieldId::Topic);
        self.refresh_session().await;
    }

    /// Adds the entered candidate to the open session.
    pub async fn add_candidate(&mut self) {
        let nombre = self.view.field_value(FieldId::CandidateName);
        if nombre.is_empty() {
            self.show_message(MISSING_CANDIDATE_NAME, NotificationLevel::Error);
            return;
        }

        let request = CandidateRequest {
            nombre: nombre.clone(),
        };
        let Ok(response) = self.post_json(ADD_CANDIDATE_PATH, &request).await else {
            return;
        };

        info!(candidate = %nombre, "Candidate added to session");
        let message = ActionResponse::from_value(&response)
            .message_or(format!("Candidato '{nombre}' añadido/confirmado."));
        self.show_message(&message, NotificationLevel::Success);
        self.view.clear_field(FieldId::CandidateName);
        self.refresh_session().await;
        self.refresh_global_candidates().await;
    }

    /// Casts a vote for the selected candidate.
    ///
    /// The candidate selection is kept so several voters can vote in a row.
    pub async fn cast_vote(&mut self) {
        let id_votante = self.view.field_value(FieldId::VoterId);
        let id_candidato = self.view.selected_value(SelectId::ActiveCandidate);

        if id_votante.is_empty() {
            self.show_message(MISSING_VOTER_ID, NotificationLevel::Error);
            return;
        }
        if id_candidato.is_empty() {
            self.show_message(MISSING_CANDIDATE, NotificationLevel::Error);
            return;
        }

        let request = CastVoteRequest {
            id_votante,
            id_candidato,
        };
        let Ok(response) = self.post_json(CAST_VOTE_PATH, &request).await else {
            return;
        };

        info!(candidate = %request.id_candidato, "Vote cast");
        let message = ActionResponse::from_value(&response)
            .message_or("Voto emitido correctamente (pendiente de finalizar).");
        self.show_message(&message, NotificationLevel::Success);
        self.view.clear_field(FieldId::VoterId);
        self.refresh_session().await;
    }

    /// Seals the open session into a ledger block, after confirmation.
    pub async fn finalize_voting(&mut self) {
        if !self.view.confirm(FINALIZE_PROMPT) {
            debug!("Finalization declined");
            return;
        }

        let Ok(response) = self.fetch_data(ApiRequest::post(FINALIZE_PATH)).await else {
            return;
        };

        info!("Voting session finalized");
        let message = ActionResponse::from_value(&response)
            .message_or("Votación finalizada y bloque creado.");
        self.show_message(&message, NotificationLevel::Success);
        self.refresh_session().await;
        self.show_chain().await;
        self.show_results().await;
    }

    /// Registers a candidate in the global directory without a session.
    pub async fn register_global_candidate(&mut self) {
        let nombre = self.view.field_value(FieldId::GlobalCandidateName);
        if nombre.is_empty() {
            self.show_message(MISSING_CANDIDATE_NAME, NotificationLevel::Error);
            return;
        }

        let request = CandidateRequest {
            nombre: nombre.clone(),
        };
        let Ok(response) = self.post_json(GLOBAL_CANDIDATES_PATH, &request).await else {
            return;
        };

        if let Some(candidate) = GlobalCandidate::from_registration(&response) {
            info!(id = %candidate.id, name = %candidate.name, "Global candidate registered");
        }
        let message = ActionResponse::from_value(&response)
            .message_or(format!("Candidato '{nombre}' registrado globalmente."));
        self.show_message(&message, NotificationLevel::Success);
        self.view.clear_field(FieldId::GlobalCandidateName);
        self.refresh_global_candidates().await;
    }
}
