// src/ui.rs

pub mod file_picker;
pub mod footer;
pub mod header;
pub mod help;
pub mod inspect;
pub mod main_menu;
pub mod quit_confirm;

use crate::{App, AppScreen};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Top-level draw dispatch: header, screen body, footer.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(7),
                Constraint::Min(1),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.area());

    header::draw_header(f, chunks[0]);

    match app.screen {
        AppScreen::MainMenu => main_menu::draw_main_menu(f, chunks[1], app),
        AppScreen::PickImage => {
            app.picker.render(f, chunks[1], app.picker_error.as_deref());
        }
        AppScreen::Inspect => inspect::draw_inspect(f, app, chunks[1]),
        AppScreen::Help => help::draw_help(f, chunks[1]),
        AppScreen::QuitConfirm => quit_confirm::draw_quit_confirm(f, chunks[1]),
        AppScreen::Quit => {}
    }

    footer::draw_footer(f, chunks[2], app);
}
