//! Voting screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem as ListRow, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::application::controller::FINALIZE_PROMPT;
use crate::domain::ports::{FieldId, ListId, ListItem, SelectId, Section, TextRegion};
use crate::presentation::events::EventHandler;
use crate::presentation::ui::dialog::Dialog;
use crate::presentation::view_state::ViewState;
use crate::presentation::widgets::{Dropdown, SelectState, StatusBar};
use crate::{NAME, VERSION};

/// Below this height the status bar is dropped and messages become alerts.
const MIN_HEIGHT_FOR_STATUS: u16 = 12;
const INPUT_HEIGHT: u16 = 3;
const KEY_HINTS: &str = "Tab foco · Enter enviar · F2 resultados · F3 cadena · F4 verificar · F5 recargar · F8 finalizar · Esc salir";

/// Focusable element of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Topic,
    CandidateName,
    VoterId,
    Candidate,
    ResultsFilter,
    GlobalCandidateName,
}

impl Focus {
    const ORDER: [Self; 6] = [
        Self::Topic,
        Self::CandidateName,
        Self::VoterId,
        Self::Candidate,
        Self::ResultsFilter,
        Self::GlobalCandidateName,
    ];

    /// Section that must be visible for the element to take focus.
    const fn section(self) -> Option<Section> {
        match self {
            Self::Topic => Some(Section::StartVoting),
            Self::CandidateName => Some(Section::AddCandidate),
            Self::VoterId | Self::Candidate => Some(Section::CastVote),
            Self::ResultsFilter | Self::GlobalCandidateName => None,
        }
    }

    const fn field(self) -> Option<FieldId> {
        match self {
            Self::Topic => Some(FieldId::Topic),
            Self::CandidateName => Some(FieldId::CandidateName),
            Self::VoterId => Some(FieldId::VoterId),
            Self::ResultsFilter => Some(FieldId::ResultsTopicFilter),
            Self::GlobalCandidateName => Some(FieldId::GlobalCandidateName),
            Self::Candidate => None,
        }
    }

    const fn submit_action(self) -> ScreenAction {
        match self {
            Self::Topic => ScreenAction::StartVoting,
            Self::CandidateName => ScreenAction::AddCandidate,
            Self::VoterId | Self::Candidate => ScreenAction::CastVote,
            Self::ResultsFilter => ScreenAction::ShowResults,
            Self::GlobalCandidateName => ScreenAction::RegisterGlobalCandidate,
        }
    }

    fn is_available(self, view: &ViewState) -> bool {
        self.section().is_none_or(|section| view.is_visible(section))
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self, view: &ViewState) -> Self {
        let start = self.index();
        (1..=Self::ORDER.len())
            .map(|step| Self::ORDER[(start + step) % Self::ORDER.len()])
            .find(|focus| focus.is_available(view))
            .unwrap_or(self)
    }

    fn previous(self, view: &ViewState) -> Self {
        let start = self.index();
        let len = Self::ORDER.len();
        (1..=len)
            .map(|step| Self::ORDER[(start + len - step) % len])
            .find(|focus| focus.is_available(view))
            .unwrap_or(self)
    }
}

/// What the app loop must run after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Quit,
    StartVoting,
    AddCandidate,
    CastVote,
    FinalizeVoting,
    RegisterGlobalCandidate,
    ShowResults,
    ShowChain,
    VerifyIntegrity,
    RefreshAll,
}

/// Focus and scroll state of the voting screen.
#[derive(Debug, Clone)]
pub struct VotingScreenState {
    focus: Focus,
    chain_scroll: u16,
}

impl VotingScreenState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            focus: Focus::Topic,
            chain_scroll: 0,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Moves focus off elements hidden by a session change.
    fn settle_focus(&mut self, view: &ViewState) {
        if !self.focus.is_available(view) {
            self.focus = self.focus.next(view);
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent, view: &mut ViewState) -> ScreenAction {
        if view.current_alert().is_some() {
            view.dismiss_alert();
            return ScreenAction::None;
        }

        if view.pending_confirmation().is_some() {
            return match EventHandler::confirmation_answer(&key) {
                Some(answer) => {
                    view.answer_confirmation(answer);
                    ScreenAction::FinalizeVoting
                }
                None => ScreenAction::None,
            };
        }

        if EventHandler::is_quit_event(&key) {
            return ScreenAction::Quit;
        }

        self.settle_focus(view);

        if EventHandler::is_submit_event(&key) {
            return self.focus.submit_action();
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(view),
            KeyCode::BackTab => self.focus = self.focus.previous(view),
            KeyCode::F(2) => return ScreenAction::ShowResults,
            KeyCode::F(3) => return ScreenAction::ShowChain,
            KeyCode::F(4) => return ScreenAction::VerifyIntegrity,
            KeyCode::F(5) => return ScreenAction::RefreshAll,
            KeyCode::F(8) => {
                if view.is_visible(Section::Finalize) {
                    view.request_confirmation(FINALIZE_PROMPT);
                }
            }
            KeyCode::PageDown => self.chain_scroll = self.chain_scroll.saturating_add(5),
            KeyCode::PageUp => self.chain_scroll = self.chain_scroll.saturating_sub(5),
            KeyCode::Down if self.focus == Focus::Candidate => {
                view.select_mut(SelectId::ActiveCandidate).select_next();
            }
            KeyCode::Up if self.focus == Focus::Candidate => {
                view.select_mut(SelectId::ActiveCandidate).select_previous();
            }
            code => {
                if let Some(field) = self.focus.field() {
                    edit_field(view, field, code);
                }
            }
        }

        ScreenAction::None
    }
}

impl Default for VotingScreenState {
    fn default() -> Self {
        Self::new()
    }
}

fn edit_field(view: &mut ViewState, field: FieldId, code: KeyCode) {
    let input = view.field_mut(field);
    match code {
        KeyCode::Char(c) => input.input_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Voting screen widget, drawn over the [`ViewState`].
pub struct VotingScreen<'a> {
    screen: &'a VotingScreenState,
}

impl<'a> VotingScreen<'a> {
    #[must_use]
    pub const fn new(screen: &'a VotingScreenState) -> Self {
        Self { screen }
    }
}

impl StatefulWidget for VotingScreen<'_> {
    type State = ViewState;

    fn render(self, area: Rect, buf: &mut Buffer, view: &mut Self::State) {
        let has_status = area.height >= MIN_HEIGHT_FOR_STATUS;
        view.set_status_region(has_status);

        let status_height = u16::from(has_status);
        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(status_height),
        ])
        .areas(area);

        render_header(header_area, buf);

        let [session_area, results_area, chain_area] = Layout::horizontal([
            Constraint::Percentage(36),
            Constraint::Percentage(34),
            Constraint::Percentage(30),
        ])
        .areas(content_area);

        let focus = self.screen.focus;
        render_session_column(view, focus, session_area, buf);
        render_results_column(view, focus, results_area, buf);
        render_chain(view, self.screen.chain_scroll, chain_area, buf);

        if has_status {
            render_status(view, status_area, buf);
        }

        if let Some(prompt) = view.pending_confirmation() {
            Dialog::confirm(prompt).render(area, buf);
        } else if let Some(alert) = view.current_alert() {
            Dialog::alert(alert).render(area, buf);
        }
    }
}

fn render_header(area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {NAME} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" v{VERSION}"), Style::default().fg(Color::DarkGray)),
    ]);
    Paragraph::new(line).render(area, buf);
}

fn render_session_column(view: &ViewState, focus: Focus, area: Rect, buf: &mut Buffer) {
    let mut constraints = Vec::new();
    if view.is_visible(Section::StartVoting) {
        constraints.push(Constraint::Length(INPUT_HEIGHT));
    }
    if view.is_visible(Section::SessionStatus) {
        constraints.push(Constraint::Length(5));
    }
    if view.is_visible(Section::AddCandidate) {
        constraints.push(Constraint::Length(INPUT_HEIGHT));
    }
    if view.is_visible(Section::CastVote) {
        constraints.push(Constraint::Length(INPUT_HEIGHT));
        constraints.push(Constraint::Length(INPUT_HEIGHT));
    }
    if view.is_visible(Section::Finalize) {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let areas = Layout::vertical(constraints).split(area);
    let mut slots = areas.iter().copied();
    let mut next = || slots.next().unwrap_or_default();

    if view.is_visible(Section::StartVoting) {
        render_input(view, FieldId::Topic, focus == Focus::Topic, next(), buf);
    }
    if view.is_visible(Section::SessionStatus) {
        render_session_status(view, next(), buf);
    }
    if view.is_visible(Section::AddCandidate) {
        render_input(view, FieldId::CandidateName, focus == Focus::CandidateName, next(), buf);
    }
    if view.is_visible(Section::CastVote) {
        render_input(view, FieldId::VoterId, focus == Focus::VoterId, next(), buf);
        let empty = SelectState::new();
        let select = view.select(SelectId::ActiveCandidate).unwrap_or(&empty);
        Dropdown::new(select, " Candidato (↑/↓) ")
            .focused(focus == Focus::Candidate)
            .render(next(), buf);
    }
    if view.is_visible(Section::Finalize) {
        Paragraph::new(Span::styled(
            format!("F8: finalizar «{}»", view.text(TextRegion::TopicReference)),
            Style::default().fg(Color::Red),
        ))
        .render(next(), buf);
    }

    render_list(view.list(ListId::ActiveCandidates), " Candidatos de la votación ", next(), buf);
}

fn render_session_status(view: &ViewState, area: Rect, buf: &mut Buffer) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Tema: ", label),
            Span::styled(view.text(TextRegion::ActiveTopic), value),
        ]),
        Line::from(vec![
            Span::styled("Votos recibidos: ", label),
            Span::styled(view.text(TextRegion::VotesReceived), value),
        ]),
        Line::from(vec![
            Span::styled("Votantes participantes: ", label),
            Span::styled(view.text(TextRegion::Participants), value),
        ]),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Votación activa "),
        )
        .render(area, buf);
}

fn render_results_column(view: &ViewState, focus: Focus, area: Rect, buf: &mut Buffer) {
    let [filter_area, results_area, info_area, global_input_area, global_area] =
        Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);

    render_input(view, FieldId::ResultsTopicFilter, focus == Focus::ResultsFilter, filter_area, buf);
    render_list(view.list(ListId::Results), " Resultados (F2) ", results_area, buf);
    Paragraph::new(view.text(TextRegion::ResultsInfo))
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .render(info_area, buf);
    render_input(
        view,
        FieldId::GlobalCandidateName,
        focus == Focus::GlobalCandidateName,
        global_input_area,
        buf,
    );
    render_list(view.list(ListId::GlobalCandidates), " Candidatos globales ", global_area, buf);
}

fn render_chain(view: &ViewState, scroll: u16, area: Rect, buf: &mut Buffer) {
    Paragraph::new(view.text(TextRegion::Chain))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .title(" Cadena de bloques (F3, PgUp/PgDn) "),
        )
        .scroll((scroll, 0))
        .render(area, buf);
}

fn render_input(view: &ViewState, field: FieldId, focused: bool, area: Rect, buf: &mut Buffer) {
    let mut input = view.field(field).clone();
    input.set_focused(focused);
    (&input).render(area, buf);
}

fn render_list(items: &[ListItem], title: &str, area: Rect, buf: &mut Buffer) {
    let rows: Vec<ListRow> = items
        .iter()
        .map(|item| {
            let style = if item.placeholder {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Color::White)
            };
            ListRow::new(item.text.as_str()).style(style)
        })
        .collect();

    Widget::render(
        List::new(rows).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .title(title),
        ),
        area,
        buf,
    );
}

fn render_status(view: &ViewState, area: Rect, buf: &mut Buffer) {
    let bar = match view.status() {
        Some((text, level)) => StatusBar::new().left(text).level(level),
        None => StatusBar::new(),
    };
    (&bar.right(KEY_HINTS)).render(area, buf);
}
