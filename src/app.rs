use crate::search::{HttpBackend, SearchClient};
use crate::state::{AppConfig, AppState};
use crate::ui::{ColumnTemplate, ResultsTable, SearchPanel};
use eframe::egui;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct RosterApp {
    state: AppState,
    config: AppConfig,
    search_panel: SearchPanel,
    results_table: ResultsTable,
    // Owned by the app: dropping it on teardown aborts any outstanding
    // search task.
    _runtime: tokio::runtime::Runtime,
}

impl RosterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let config = AppConfig::load();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let backend = Arc::new(HttpBackend::new(&config.backend_url)?);
        let client = SearchClient::new(backend, runtime.handle().clone());

        let state = AppState::new(client, &config);
        let results_table = ResultsTable::new(
            Box::new(ColumnTemplate::new(config.columns.clone())),
            config.compact_rows,
        );

        Ok(Self {
            state,
            config,
            search_panel: SearchPanel::new(),
            results_table,
            _runtime: runtime,
        })
    }

    fn show_search_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.search_panel.show(ui, &mut self.state);
            ui.add_space(4.0);
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Users: {}", self.state.rows.len()));
                ui.separator();
                if self.state.last_searched().is_empty() {
                    ui.label("No search");
                } else {
                    ui.label(format!("Query: {}", self.state.last_searched()));
                }
                ui.separator();
                ui.label(&self.config.backend_url);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.preloader.visible() {
                        ui.spinner();
                        ui.label("Loading...");
                    }
                });
            });
        });
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Settle the in-flight request first so this frame paints its result.
        if self.state.poll_pending() {
            ctx.request_repaint();
        }

        // Debounced input firing.
        self.state.poll_input(now);

        self.show_search_bar(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let metrics = self.results_table.show(ui, &self.state.rows);
            self.state.poll_scroll(&metrics);
        });

        // Keep frames coming while a request is in flight, and wake up at
        // the debounce deadline even if no further input events arrive.
        if self.state.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
        if let Some(deadline) = self.state.next_input_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        let _ = self.config.save();
    }
}
