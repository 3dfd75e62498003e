use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_help(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help")
        .style(Style::default().fg(Color::LightYellow).bg(Color::Black));

    f.render_widget(block, area);

    let help_text = "\
How to use Siteseer:

1. Open a construction site photo (PNG or JPEG) from the picker.
2. Press Enter to run the inspection analysis.
3. Ask follow-up questions about the site; the inspector keeps the
   context of its previous analysis while answering.
4. Ctrl+E exports the conversation to construction_analysis.txt.
5. Ctrl+R clears the chat and starts a fresh session.

Example questions you can ask:
- Can you explain more about the safety concerns you noticed?
- What stage of construction is this project in?
- What types of equipment do you see on site?
- Are there any quality control issues I should be aware of?

The Gemini API key is read from GEMINI_API_KEY (a .env file works)
or from ~/.config/siteseer/config.json.";

    let paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
