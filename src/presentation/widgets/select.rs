//! Dropdown widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::ports::SelectOption;

/// Options and selection of a dropdown.
///
/// Repopulating keeps the previously selected value when it is offered
/// again.
#[derive(Debug, Clone, Default)]
pub struct SelectState {
    options: Vec<SelectOption>,
    selected: Option<usize>,
    retained: Option<String>,
}

impl SelectState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every option, remembering the selected value.
    pub fn clear(&mut self) {
        let value = self.selected_value();
        self.retained = (!value.is_empty()).then_some(value);
        self.options.clear();
        self.selected = None;
    }

    /// Appends an option.
    pub fn push(&mut self, option: SelectOption) {
        let index = self.options.len();
        let retained = !option.disabled && self.retained.as_deref() == Some(option.value.as_str());

        if retained {
            self.selected = Some(index);
            self.retained = None;
        } else if option.selected && self.selected.is_none() {
            self.selected = Some(index);
        }
        self.options.push(option);
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Selected option, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Value of the selected option; empty for a disabled or missing one.
    #[must_use]
    pub fn selected_value(&self) -> String {
        self.selected()
            .filter(|option| !option.disabled)
            .map(|option| option.value.clone())
            .unwrap_or_default()
    }

    /// Moves the selection to the next enabled option.
    pub fn select_next(&mut self) {
        let start = self.selected.map_or(0, |i| i + 1);
        if let Some(i) = (start..self.options.len()).find(|&i| !self.options[i].disabled) {
            self.selected = Some(i);
        }
    }

    /// Moves the selection to the previous enabled option.
    pub fn select_previous(&mut self) {
        let end = self.selected.unwrap_or(self.options.len());
        if let Some(i) = (0..end).rev().find(|&i| !self.options[i].disabled) {
            self.selected = Some(i);
        }
    }
}

/// Renders a [`SelectState`] as a one-line dropdown.
pub struct Dropdown<'a> {
    state: &'a SelectState,
    label: &'a str,
    focused: bool,
}

impl<'a> Dropdown<'a> {
    #[must_use]
    pub const fn new(state: &'a SelectState, label: &'a str) -> Self {
        Self {
            state,
            label,
            focused: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = match self.state.selected() {
            Some(option) => {
                let style = if option.disabled {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };
                Line::from(vec![
                    Span::styled("▾ ", border_style),
                    Span::styled(option.text.as_str(), style),
                ])
            }
            None => Line::from(Span::styled("▾", Style::default().fg(Color::DarkGray))),
        };

        Paragraph::new(line).render(inner, buf);
    }
}
