//! Terminal-backed implementation of the view port.

use std::collections::{HashMap, VecDeque};

use crate::domain::NotificationLevel;
use crate::domain::ports::{
    FieldId, ListId, ListItem, SelectId, SelectOption, Section, TextRegion, ViewPort,
};
use crate::presentation::widgets::{SelectState, TextInput};

/// Everything the voting screen displays.
///
/// The controller writes through [`ViewPort`]; the screen reads the same
/// record when drawing and edits the inputs on key presses.
#[derive(Debug)]
pub struct ViewState {
    visible: HashMap<Section, bool>,
    texts: HashMap<TextRegion, String>,
    lists: HashMap<ListId, Vec<ListItem>>,
    selects: HashMap<SelectId, SelectState>,
    inputs: FormInputs,
    status: Option<(String, NotificationLevel)>,
    status_region: bool,
    alerts: VecDeque<String>,
    pending_confirmation: Option<String>,
    confirm_answer: Option<bool>,
}

/// One input per [`FieldId`].
#[derive(Debug)]
struct FormInputs {
    topic: TextInput,
    candidate_name: TextInput,
    voter_id: TextInput,
    results_topic_filter: TextInput,
    global_candidate_name: TextInput,
}

impl FormInputs {
    fn new() -> Self {
        Self {
            topic: TextInput::new(" Tema de la votación ").placeholder("Escribe el tema..."),
            candidate_name: TextInput::new(" Nuevo candidato ")
                .placeholder("Nombre del candidato..."),
            voter_id: TextInput::new(" ID del votante ").placeholder("Identificación..."),
            results_topic_filter: TextInput::new(" Filtrar resultados por tema ")
                .placeholder("(opcional)"),
            global_candidate_name: TextInput::new(" Registrar candidato global ")
                .placeholder("Nombre del candidato..."),
        }
    }

    const fn get(&self, field: FieldId) -> &TextInput {
        match field {
            FieldId::Topic => &self.topic,
            FieldId::CandidateName => &self.candidate_name,
            FieldId::VoterId => &self.voter_id,
            FieldId::ResultsTopicFilter => &self.results_topic_filter,
            FieldId::GlobalCandidateName => &self.global_candidate_name,
        }
    }

    fn get_mut(&mut self, field: FieldId) -> &mut TextInput {
        match field {
            FieldId::Topic => &mut self.topic,
            FieldId::CandidateName => &mut self.candidate_name,
            FieldId::VoterId => &mut self.voter_id,
            FieldId::ResultsTopicFilter => &mut self.results_topic_filter,
            FieldId::GlobalCandidateName => &mut self.global_candidate_name,
        }
    }
}

impl ViewState {
    /// Creates the state shown before the first load: no session.
    #[must_use]
    pub fn new() -> Self {
        let visible = Section::ALL
            .into_iter()
            .map(|section| (section, section.is_visible(false)))
            .collect();

        Self {
            visible,
            texts: HashMap::new(),
            lists: HashMap::new(),
            selects: HashMap::new(),
            inputs: FormInputs::new(),
            status: None,
            status_region: true,
            alerts: VecDeque::new(),
            pending_confirmation: None,
            confirm_answer: None,
        }
    }

    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.get(&section).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn text(&self, region: TextRegion) -> &str {
        self.texts.get(&region).map_or("", String::as_str)
    }

    #[must_use]
    pub fn list(&self, list: ListId) -> &[ListItem] {
        self.lists.get(&list).map_or(&[], Vec::as_slice)
    }

    /// Dropdown state, created empty on first access.
    pub fn select_mut(&mut self, select: SelectId) -> &mut SelectState {
        self.selects.entry(select).or_default()
    }

    #[must_use]
    pub fn select(&self, select: SelectId) -> Option<&SelectState> {
        self.selects.get(&select)
    }

    /// Input widget of a field.
    #[must_use]
    pub const fn field(&self, field: FieldId) -> &TextInput {
        self.inputs.get(field)
    }

    pub fn field_mut(&mut self, field: FieldId) -> &mut TextInput {
        self.inputs.get_mut(field)
    }

    #[must_use]
    pub fn status(&self) -> Option<(&str, NotificationLevel)> {
        self.status
            .as_ref()
            .map(|(text, level)| (text.as_str(), *level))
    }

    /// Records whether the last layout had room for the status bar.
    pub fn set_status_region(&mut self, available: bool) {
        self.status_region = available;
    }

    /// Oldest alert not yet dismissed.
    #[must_use]
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// Prompt awaiting a yes/no answer.
    #[must_use]
    pub fn pending_confirmation(&self) -> Option<&str> {
        self.pending_confirmation.as_deref()
    }

    /// Opens the confirmation dialog.
    pub fn request_confirmation(&mut self, prompt: &str) {
        self.pending_confirmation = Some(prompt.to_string());
        self.confirm_answer = None;
    }

    /// Closes the confirmation dialog; the next [`ViewPort::confirm`]
    /// call returns `answer`.
    pub fn answer_confirmation(&mut self, answer: bool) {
        self.pending_confirmation = None;
        self.confirm_answer = Some(answer);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPort for ViewState {
    fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.visible.insert(section, visible);
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        self.texts.insert(region, text.to_string());
    }

    fn clear_list(&mut self, list: ListId) {
        self.lists.insert(list, Vec::new());
    }

    fn push_list_item(&mut self, list: ListId, item: ListItem) {
        self.lists.entry(list).or_default().push(item);
    }

    fn clear_select(&mut self, select: SelectId) {
        self.select_mut(select).clear();
    }

    fn push_option(&mut self, select: SelectId, option: SelectOption) {
        self.select_mut(select).push(option);
    }

    fn selected_value(&self, select: SelectId) -> String {
        self.select(select)
            .map(SelectState::selected_value)
            .unwrap_or_default()
    }

    fn field_value(&self, field: FieldId) -> String {
        self.field(field).value().to_string()
    }

    fn clear_field(&mut self, field: FieldId) {
        self.field_mut(field).clear();
    }

    fn has_status_region(&self) -> bool {
        self.status_region
    }

    fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|(text, _)| text.as_str())
    }

    fn set_status(&mut self, text: &str, level: NotificationLevel) {
        self.status = Some((text.to_string(), level));
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn alert(&mut self, text: &str) {
        self.alerts.push_back(text.to_string());
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        self.confirm_answer.take().unwrap_or(false)
    }
}
