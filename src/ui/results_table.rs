use crate::models::UserRow;
use crate::search::ScrollMetrics;
use crate::ui::RowTemplate;
use eframe::egui;

/// Scrollable results table.
///
/// A pure view over the row vec in `AppState`: clearing and appending happen
/// there, this widget just paints whatever it is handed, cell by cell through
/// the row template. Each frame it reports the scroll geometry the scroll
/// watcher needs.
pub struct ResultsTable {
    template: Box<dyn RowTemplate>,
    compact: bool,
}

impl ResultsTable {
    pub fn new(template: Box<dyn RowTemplate>, compact: bool) -> Self {
        Self { template, compact }
    }

    pub fn show(&self, ui: &mut egui::Ui, rows: &[UserRow]) -> ScrollMetrics {
        let row_spacing = if self.compact { 2.0 } else { 6.0 };

        let output = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = row_spacing;
                egui::Grid::new("results_table")
                    .striped(true)
                    .num_columns(self.template.headers().len())
                    .min_col_width(80.0)
                    .show(ui, |ui| {
                        for header in self.template.headers() {
                            ui.strong(header);
                        }
                        ui.end_row();

                        for row in rows {
                            for cell in self.template.cells(row) {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });

                if rows.is_empty() {
                    ui.weak("No results");
                }
            });

        ScrollMetrics {
            offset: output.state.offset.y,
            content_height: output.content_size.y,
            viewport_height: output.inner_rect.height(),
        }
    }
}
