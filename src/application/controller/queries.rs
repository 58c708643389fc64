//! Read-only views: results, chain and integrity.

use super::{CHAIN_PATH, RESULTS_PATH, VERIFY_PATH, ViewSyncController};
use crate::domain::NotificationLevel;
use crate::domain::entities::{IntegrityResult, ResultsReport, blocks_from_value, render_chain};
use crate::domain::ports::{ApiRequest, FieldId, ListId, ListItem, TextRegion, ViewPort};

const RESULTS_LOAD_ERROR: &str = "Error al cargar resultados.";
const CHAIN_EMPTY: &str = "La cadena está vacía o no se pudo cargar.";
const CHAIN_LOAD_ERROR: &str = "Error al cargar la cadena.";
const INTEGRITY_VALID: &str = "La integridad de la cadena de bloques es VÁLIDA.";
const INTEGRITY_INVALID: &str = "¡ALERTA! La integridad de la cadena de bloques es INVÁLIDA.";

impl<V: ViewPort> ViewSyncController<V> {
    /// Fetches the tally, optionally filtered by the entered topic.
    pub async fn show_results(&mut self) {
        let filter = self.view.field_value(FieldId::ResultsTopicFilter);
        let mut request = ApiRequest::get(RESULTS_PATH);
        if !filter.is_empty() {
            request = request.with_query("tema", filter.clone());
        }

        let result = self.fetch_data(request).await;

        self.view.clear_list(ListId::Results);
        self.view.set_text(TextRegion::ResultsInfo, "");

        let Ok(value) = result else {
            self.view
                .push_list_item(ListId::Results, ListItem::placeholder(RESULTS_LOAD_ERROR));
            return;
        };

        let report = ResultsReport::from_value(&value);
        if report.is_empty() {
            let empty = if filter.is_empty() {
                "No hay votos registrados para mostrar.".to_string()
            } else {
                format!("No hay votos registrados para mostrar para el tema '{filter}'.")
            };
            self.view
                .push_list_item(ListId::Results, ListItem::placeholder(empty));
        } else {
            for entry in &report.entries {
                self.view
                    .push_list_item(ListId::Results, ListItem::new(entry.to_string()));
            }
        }

        if let Some(pending) = &report.pending {
            self.view
                .set_text(TextRegion::ResultsInfo, &pending.to_string());
        }
    }

    /// Fetches the ledger and shows it verbatim.
    pub async fn show_chain(&mut self) {
        let text = match self.fetch_data(ApiRequest::get(CHAIN_PATH)).await {
            Ok(value) => {
                render_chain(&blocks_from_value(&value)).unwrap_or_else(|| CHAIN_EMPTY.to_string())
            }
            Err(_) => CHAIN_LOAD_ERROR.to_string(),
        };
        self.view.set_text(TextRegion::Chain, &text);
    }

    /// Asks the backend to verify the ledger and reports the verdict.
    pub async fn verify_integrity(&mut self) {
        let Ok(value) = self.fetch_data(ApiRequest::get(VERIFY_PATH)).await else {
            return;
        };

        if IntegrityResult::from_value(&value).valid {
            self.show_message(INTEGRITY_VALID, NotificationLevel::Success);
        } else {
            self.show_message(INTEGRITY_INVALID, NotificationLevel::Error);
        }
    }
}
