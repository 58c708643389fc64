use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

const MAX_DIALOG_WIDTH: u16 = 64;

/// Centered modal box: the alert and the yes/no confirmation.
pub struct Dialog<'a> {
    title: &'a str,
    message: &'a str,
    hint: &'a str,
    color: Color,
}

impl<'a> Dialog<'a> {
    #[must_use]
    pub const fn alert(message: &'a str) -> Self {
        Self {
            title: " Aviso ",
            message,
            hint: "Pulsa cualquier tecla para continuar",
            color: Color::Yellow,
        }
    }

    #[must_use]
    pub const fn confirm(message: &'a str) -> Self {
        Self {
            title: " Confirmar ",
            message,
            hint: "[s] Sí   [n] No",
            color: Color::Red,
        }
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_width = MAX_DIALOG_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(self.message.width().max(self.hint.width()))
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(self.message.width()).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(4).min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let dialog_area = area.intersection(Rect::new(x, y, width, height));
        if dialog_area.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title)
            .border_style(Style::default().fg(self.color));

        let text = vec![
            Line::from(Span::styled(
                self.message,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(self.hint, Style::default().fg(Color::DarkGray))),
        ];

        Clear.render(dialog_area, buf);
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(dialog_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .flat_map(|y| (area.x..area.right()).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_alert_renders_message_and_hint() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        Dialog::alert("ERROR: sin conexión").render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("ERROR: sin conexión"));
        assert!(text.contains("Pulsa cualquier tecla"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        Dialog::confirm("¿Seguro?").render(area, &mut buf);
    }
}
