//! View port: the display regions the controller reads from and writes to.

use crate::domain::NotificationLevel;

/// Page sections whose visibility follows the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Form to open a new session.
    StartVoting,
    /// Topic and counters of the open session.
    SessionStatus,
    /// Form to add a candidate to the open session.
    AddCandidate,
    /// Form to cast a vote.
    CastVote,
    /// Finalization control.
    Finalize,
}

impl Section {
    /// All session-dependent sections.
    pub const ALL: [Self; 5] = [
        Self::StartVoting,
        Self::SessionStatus,
        Self::AddCandidate,
        Self::CastVote,
        Self::Finalize,
    ];

    /// Visibility of the section given whether a session is active.
    #[must_use]
    pub const fn is_visible(self, session_active: bool) -> bool {
        match self {
            Self::StartVoting => !session_active,
            Self::SessionStatus | Self::AddCandidate | Self::CastVote | Self::Finalize => {
                session_active
            }
        }
    }
}

/// Plain-text display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRegion {
    /// Topic shown in the session status section.
    ActiveTopic,
    /// Topic references repeated in the session forms.
    TopicReference,
    /// Received votes counter.
    VotesReceived,
    /// Participating voters counter.
    Participants,
    /// Pretty-printed ledger.
    Chain,
    /// Provisional votes disclosure under the results.
    ResultsInfo,
}

/// List regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListId {
    /// Candidates of the open session.
    ActiveCandidates,
    /// Global candidate directory.
    GlobalCandidates,
    /// Tally lines.
    Results,
}

/// Dropdown regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectId {
    /// Candidate to vote for.
    ActiveCandidate,
}

/// Free-text input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Topic for a new session.
    Topic,
    /// Name of the candidate to add to the session.
    CandidateName,
    /// Identification of the voter.
    VoterId,
    /// Optional topic filter for the results.
    ResultsTopicFilter,
    /// Name of the candidate to register globally.
    GlobalCandidateName,
}

/// Item of a list region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    /// Placeholder items (empty state, no data) render de-emphasized.
    pub placeholder: bool,
}

impl ListItem {
    /// Creates a regular item.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: false,
        }
    }

    /// Creates a placeholder item.
    #[must_use]
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: true,
        }
    }
}

/// Option of a dropdown region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    pub disabled: bool,
    pub selected: bool,
}

impl SelectOption {
    /// Creates a selectable option.
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            disabled: false,
            selected: false,
        }
    }

    /// Creates the leading disabled prompt, selected by default.
    #[must_use]
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            text: text.into(),
            disabled: true,
            selected: true,
        }
    }
}

/// Port over the display. Every write replaces the region's content.
pub trait ViewPort: Send {
    /// Shows or hides a section.
    fn set_section_visible(&mut self, section: Section, visible: bool);

    /// Replaces the text of a region.
    fn set_text(&mut self, region: TextRegion, text: &str);

    /// Removes every item of a list.
    fn clear_list(&mut self, list: ListId);

    /// Appends an item to a list.
    fn push_list_item(&mut self, list: ListId, item: ListItem);

    /// Removes every option of a dropdown.
    fn clear_select(&mut self, select: SelectId);

    /// Appends an option to a dropdown.
    fn push_option(&mut self, select: SelectId, option: SelectOption);

    /// Value of the selected option, empty when nothing usable is selected.
    fn selected_value(&self, select: SelectId) -> String;

    /// Current content of an input field.
    fn field_value(&self, field: FieldId) -> String;

    /// Empties an input field.
    fn clear_field(&mut self, field: FieldId);

    /// Whether the status region can be drawn.
    fn has_status_region(&self) -> bool;

    /// Text currently in the status region.
    fn status_text(&self) -> Option<&str>;

    /// Replaces the status region content and severity.
    fn set_status(&mut self, text: &str, level: NotificationLevel);

    /// Empties the status region.
    fn clear_status(&mut self);

    /// Shows a blocking alert.
    fn alert(&mut self, text: &str);

    /// Asks the user to confirm an irreversible action.
    fn confirm(&mut self, prompt: &str) -> bool;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_is_function_of_session() {
        for section in Section::ALL {
            assert_ne!(section.is_visible(true), section.is_visible(false));
        }
        assert!(Section::StartVoting.is_visible(false));
        assert!(Section::CastVote.is_visible(true));
    }
}
