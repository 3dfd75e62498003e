use crate::client::InspectorClient;
use crate::controller::InteractionController;
use crate::log_view::LogView;
use crate::status_indicator::StatusIndicator;
use crate::ui::file_picker::FilePicker;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    MainMenu,
    PickImage,
    Inspect,
    Help,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub screen: AppScreen,
    pub menu_items: Vec<&'static str>,
    pub selected_menu_item: usize,
    pub controller: InteractionController,
    pub input: String,
    pub chat_scroll: u16,
    pub logs_scroll: u16,
    pub picker: FilePicker,
    pub picker_error: Option<String>,
    pub status_indicator: StatusIndicator,
    pub logs: LogView,
}

impl App {
    pub fn new(client: InspectorClient) -> App {
        let home_directory = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let configured = client.is_configured();
        let mut app = App {
            screen: AppScreen::MainMenu,
            menu_items: vec!["📷 Inspect a site photo", "❓ Help", "🚪 Quit"],
            selected_menu_item: 0,
            controller: InteractionController::new(client),
            input: String::new(),
            chat_scroll: 0,
            logs_scroll: 0,
            picker: FilePicker::new(home_directory),
            picker_error: None,
            status_indicator: StatusIndicator::new(),
            logs: LogView::new(),
        };
        if !configured {
            app.logs.add(
                "No Gemini API key found; analysis requests will fail until one is configured.",
            );
        }
        app
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    /// Pins the transcript to its newest lines; the draw pass clamps this
    /// to whatever the real maximum is.
    pub fn scroll_to_bottom(&mut self) {
        self.chat_scroll = u16::MAX;
    }
}
