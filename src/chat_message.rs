use crate::models::{Message, Role};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Renders one transcript message as a bordered block of lines.
pub struct MessageView<'a> {
    message: &'a Message,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let style = self.base_style();
        let indent = self.indent();

        let timestamp = self.message.timestamp.format("%H:%M").to_string();
        let who = match self.message.role {
            Role::User => "you",
            Role::Assistant => "inspector",
        };
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
            Span::styled(" ".to_string(), style),
            Span::styled(who.to_string(), style.add_modifier(Modifier::BOLD)),
        ]));

        let wrap_width = (area.width as usize).saturating_sub(4 + indent.len());
        for paragraph in self.message.content.lines() {
            if paragraph.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│".to_string(), style),
                ]));
                continue;
            }
            for wrapped_line in wrap(paragraph, wrap_width.max(8)) {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│ ".to_string(), style),
                    Span::styled(wrapped_line.to_string(), style),
                ]));
            }
        }

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));

        lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(match self.message.role {
            Role::User => Color::Rgb(255, 223, 128),
            Role::Assistant => Color::Rgb(144, 238, 144),
        })
    }

    fn indent(&self) -> &'static str {
        match self.message.role {
            Role::User => "  ",
            Role::Assistant => "",
        }
    }
}
