use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_header(f: &mut Frame, area: Rect) {
    // ASCII Art Logo
    let logo = r#"
  ___ ___ _____ ___ ___ ___ ___ ___
 / __|_ _|_   _| __/ __| __| __| _ \
 \__ \| |  | | | _|\__ \ _|| _||   /
 |___/___| |_| |___|___/___|___|_|_\
    "#;

    let block = Block::default()
        .style(Style::default().fg(Color::LightCyan).bg(Color::Black))
        .borders(Borders::NONE);

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let logo_paragraph = Paragraph::new(logo)
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);

    f.render_widget(logo_paragraph, chunks[0]);

    let title = Paragraph::new("Siteseer - Construction Site Inspector")
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )
        .alignment(Alignment::Center);

    f.render_widget(title, chunks[1]);
}
