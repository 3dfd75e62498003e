use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Busy spinner plus a one-line status message shown under the transcript.
#[derive(Debug)]
pub struct StatusIndicator {
    busy: bool,
    status_text: String,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            busy: false,
            status_text: String::new(),
            spinner_idx: 0,
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status_text = status.into();
    }

    pub fn clear_status(&mut self) {
        self.status_text.clear();
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let spinner = if self.busy {
            spinner_frames[self.spinner_idx % spinner_frames.len()]
        } else {
            " "
        };

        let status_text = if !self.status_text.is_empty() {
            self.status_text.as_str()
        } else if self.busy {
            "Working..."
        } else {
            ""
        };

        let status_color = if self.busy {
            Color::DarkGray
        } else {
            Color::Yellow
        };

        let status = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        frame.render_widget(
            Paragraph::new(status).alignment(ratatui::layout::Alignment::Left),
            Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: 1,
            },
        );
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
