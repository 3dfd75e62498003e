use crate::chat_message::MessageView;
use crate::controller::InspectPhase;
use crate::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_inspect(f: &mut Frame, app: &mut App, area: Rect) {
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .margin(1)
        .split(area);

    let chat_vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(2),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(horizontal_chunks[0]);

    draw_photo_banner(f, app, chat_vertical_chunks[0]);
    draw_messages(f, app, chat_vertical_chunks[1]);

    app.status_indicator.update_spinner();
    app.status_indicator.render(f, chat_vertical_chunks[2]);

    draw_input(f, app, chat_vertical_chunks[3]);
    draw_logs(f, app, horizontal_chunks[1]);
}

fn draw_photo_banner(f: &mut Frame, app: &App, area: Rect) {
    let banner = match app.controller.image() {
        Some(asset) => {
            let marker = match app.controller.phase() {
                InspectPhase::Analyzed => " ✓ analyzed",
                _ => " — not analyzed",
            };
            Line::from(vec![
                Span::styled("📷 ", Style::default()),
                Span::styled(asset.describe(), Style::default().fg(Color::White)),
                Span::styled(marker, Style::default().fg(Color::DarkGray)),
            ])
        }
        None => Line::from(Span::styled(
            "No site photo loaded — press Ctrl+O to open one.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(banner), area);
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages = app.controller.store().messages();

    if messages.is_empty() {
        let hint = match app.controller.phase() {
            InspectPhase::ImageLoaded => {
                "Photo loaded. Press Enter to run the inspection analysis."
            }
            _ => "The inspection report and your follow-up questions will appear here.",
        };
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    let mut lines = Vec::new();
    for message in messages {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(MessageView::new(message).render(area));
    }

    let total_lines = lines.len() as u16;
    let available_height = area.height;
    let max_scroll = total_lines.saturating_sub(available_height);
    let chat_scroll = app.chat_scroll.min(max_scroll);

    let msgs_para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(msgs_para.scroll((chat_scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let accepting_input = app.controller.phase() == InspectPhase::Analyzed;

    let input = if accepting_input {
        Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.input.as_str(), Style::default().fg(Color::White)),
        ])
    } else {
        Line::from(Span::styled(
            "(follow-up questions unlock after the analysis)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ))
    };

    f.render_widget(
        Paragraph::new(input),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    if accepting_input {
        let cursor_x = area.x + 2 + app.input.width() as u16;
        f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(1)), area.y + 1));
    }
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let log_lines: Vec<Line> = app
        .logs
        .entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();

    let total_log_lines = log_lines.len() as u16;
    let max_log_scroll = total_log_lines.saturating_sub(area.height);
    let logs_scroll = app.logs_scroll.min(max_log_scroll);

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(logs_para.scroll((logs_scroll, 0)), area);
}
