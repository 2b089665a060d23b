// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Dataset path as typed in the side panel
    pub input_text: String,
    /// Profession substring as typed in the side panel
    pub profession_text: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            input_text: s!(),
            profession_text: s!(),
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Seed the text fields from loaded options.
    pub fn from_options(options: AppOptions) -> Self {
        let gui = GuiState {
            input_text: options
                .stats
                .input
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            profession_text: options.stats.profession.clone(),
            ..GuiState::default()
        };
        Self { options, gui }
    }

    /// Mirror the text fields back into options before a run.
    pub fn sync_gui_into_options(&mut self) {
        let input = self.gui.input_text.trim();
        self.options.stats.input = (!input.is_empty()).then(|| input.into());
        self.options.stats.profession = self.gui.profession_text.clone();
    }
}
