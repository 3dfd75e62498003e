use crate::app::{App, AppScreen};
use crate::controller::InspectPhase;
use crate::conversation::EXPORT_FILE_NAME;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use std::error::Error;
use std::path::Path;

pub async fn handle_key<B: ratatui::backend::Backend>(
    key: KeyEvent,
    app: &mut App,
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn Error>> {
    match app.screen {
        AppScreen::MainMenu => handle_main_menu(key, app),
        AppScreen::PickImage => handle_picker(key, app),
        AppScreen::Inspect => handle_inspect(key, app, terminal).await?,
        AppScreen::Help => handle_help(key, app),
        AppScreen::QuitConfirm => handle_quit_confirm(key, app),
        AppScreen::Quit => {}
    }
    Ok(())
}

fn handle_main_menu(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up => {
            if app.selected_menu_item > 0 {
                app.selected_menu_item -= 1;
            }
        }
        KeyCode::Down => {
            if app.selected_menu_item + 1 < app.menu_items.len() {
                app.selected_menu_item += 1;
            }
        }
        KeyCode::Enter => match app.selected_menu_item {
            0 => {
                app.picker_error = None;
                app.screen = AppScreen::PickImage;
            }
            1 => app.screen = AppScreen::Help,
            _ => app.screen = AppScreen::QuitConfirm,
        },
        KeyCode::Char('q') | KeyCode::Esc => app.screen = AppScreen::QuitConfirm,
        _ => {}
    }
}

fn handle_picker(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up => app.picker.move_selection_up(),
        KeyCode::Down => app.picker.move_selection_down(),
        KeyCode::Enter | KeyCode::Right => {
            let selected = app.picker.selected_path.clone();
            if selected.is_dir() {
                app.picker.toggle_expand(&selected);
            } else if let Some(path) = app.picker.selected_image() {
                match app.controller.load_image(&path) {
                    Ok(()) => {
                        app.picker_error = None;
                        app.input.clear();
                        app.logs.add(format!("Loaded {}", path.display()));
                        app.screen = AppScreen::Inspect;
                    }
                    Err(e) => {
                        app.picker_error = Some(e.to_string());
                        app.logs.add(format!("Could not load image: {}", e));
                    }
                }
            }
        }
        KeyCode::Left => {
            let selected = app.picker.selected_path.clone();
            if selected.is_dir() {
                app.picker.toggle_expand(&selected);
            }
        }
        KeyCode::Esc => app.screen = AppScreen::MainMenu,
        _ => {}
    }
}

async fn handle_inspect<B: ratatui::backend::Backend>(
    key: KeyEvent,
    app: &mut App,
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn Error>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('o') => {
                app.picker_error = None;
                app.screen = AppScreen::PickImage;
            }
            KeyCode::Char('r') => {
                app.controller.reset();
                app.input.clear();
                app.chat_scroll = 0;
                app.logs
                    .add("Conversation cleared; started a fresh chat session.");
            }
            KeyCode::Char('e') => export_transcript(app),
            KeyCode::Char('u') => app.scroll_up(),
            KeyCode::Char('d') => app.scroll_down(),
            KeyCode::Char('c') => app.screen = AppScreen::QuitConfirm,
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => app.screen = AppScreen::MainMenu,
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Enter => match app.controller.phase() {
            InspectPhase::ImageLoaded => run_analysis(app, terminal).await?,
            InspectPhase::Analyzed => submit_question(app, terminal).await?,
            InspectPhase::NoImage => {
                app.logs.add("Open a site photo first (Ctrl+O).");
            }
        },
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if app.controller.phase() == InspectPhase::Analyzed {
                app.input.push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Runs the one-shot analysis. The call is a blocking round-trip from the
/// UI's perspective; the busy indicator is drawn once before awaiting.
async fn run_analysis<B: ratatui::backend::Backend>(
    app: &mut App,
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn Error>> {
    app.status_indicator.set_busy(true);
    app.status_indicator
        .set_status("Analyzing construction site...");
    app.logs.add("Submitting photo for analysis...");
    terminal.draw(|f| crate::ui::draw(f, app))?;

    let ran = app.controller.analyze().await;

    app.status_indicator.set_busy(false);
    app.status_indicator.clear_status();
    if ran {
        app.logs.add("Analysis complete.");
        app.scroll_to_bottom();
    } else {
        app.logs.add("Analysis request ignored.");
    }
    Ok(())
}

async fn submit_question<B: ratatui::backend::Backend>(
    app: &mut App,
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn Error>> {
    let question = app.input.trim().to_string();
    if question.is_empty() {
        return Ok(());
    }
    app.input.clear();

    app.status_indicator.set_busy(true);
    app.status_indicator.set_status("Thinking...");
    terminal.draw(|f| crate::ui::draw(f, app))?;

    app.controller.ask(&question).await;

    app.status_indicator.set_busy(false);
    app.status_indicator.clear_status();
    app.scroll_to_bottom();
    Ok(())
}

fn export_transcript(app: &mut App) {
    if app.controller.store().is_empty() {
        app.logs.add("Nothing to export yet.");
        return;
    }
    match app.controller.write_transcript(Path::new(EXPORT_FILE_NAME)) {
        Ok(()) => app
            .logs
            .add(format!("Transcript exported to {}", EXPORT_FILE_NAME)),
        Err(e) => app.logs.add(format!("Export failed: {}", e)),
    }
}

fn handle_help(key: KeyEvent, app: &mut App) {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.screen = AppScreen::MainMenu;
    }
}

fn handle_quit_confirm(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::MainMenu;
        }
        _ => {}
    }
}
