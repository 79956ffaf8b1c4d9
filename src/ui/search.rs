use crate::state::AppState;
use eframe::egui;
use std::time::Instant;

/// The search input row: text edit, clear button, inline preloader.
///
/// There is no search button; edits feed the debounce watcher and the search
/// fires on its own once the value settles.
pub struct SearchPanel;

impl SearchPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Search:");

            let response = ui.add(
                egui::TextEdit::singleline(&mut state.search_text)
                    .hint_text("Start typing a name...")
                    .desired_width(260.0),
            );
            if response.changed() {
                state.note_input_edit(Instant::now());
            }

            if ui.button("Clear").clicked() {
                state.search_text.clear();
                // An emptied input is an ordinary change; the debounce
                // watcher decides whether it fires.
                state.note_input_edit(Instant::now());
            }

            if state.preloader.visible() {
                ui.spinner();
            }
        });
    }
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self::new()
    }
}
