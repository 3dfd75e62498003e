use crate::controller::InspectPhase;
use crate::{App, AppScreen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let instructions = match app.screen {
        AppScreen::MainMenu => {
            "Use Up/Down arrows to navigate, Enter to select, 'q' or Esc to quit."
        }
        AppScreen::PickImage => {
            "Up/Down to move, Enter to expand a folder or open a photo, Esc to go back."
        }
        AppScreen::Inspect => match app.controller.phase() {
            InspectPhase::NoImage => "Ctrl+O to open a site photo. Esc to return to the menu.",
            InspectPhase::ImageLoaded => {
                "Press Enter to analyze the photo. Ctrl+O opens another photo, Esc returns to the menu."
            }
            InspectPhase::Analyzed => {
                "Type a question and press Enter. Ctrl+E exports, Ctrl+R resets, Esc returns to the menu."
            }
        },
        AppScreen::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        _ => "Press 'q' or Esc to return to the main menu.",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
