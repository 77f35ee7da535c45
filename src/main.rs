//! Zone Map Editor.
//!
//! Interaktiver Karteneditor für Wetter-Zonen, Positions-Marker und
//! Distanzmessungen. Zonen werden über ein HTTP-Backend verwaltet.

use eframe::egui;
use std::time::Duration;
use zone_map_editor::app::use_cases;
use zone_map_editor::backend::BackendReply;
use zone_map_editor::{
    render, ui, AppController, AppIntent, AppState, BackendWorker, EditorOptions, HttpZoneBackend,
};

/// Abfrage-Intervall für Backend-Antworten, solange Requests offen sind.
const BACKEND_POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Zone Map Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht geschrieben werden: {}", e);
            }
        }

        // Ungültige Backend-URL ist ein Startfehler
        let backend = HttpZoneBackend::new(&editor_options.backend_url)?;
        let worker = BackendWorker::spawn(Box::new(backend))?;
        log::info!("Backend: {}", editor_options.backend_url);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Zone Map Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Zone Map Editor",
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(editor_options, worker)))),
        )
        .map_err(|e| anyhow::anyhow!("eframe beendet mit Fehler: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    worker: BackendWorker,
    input: ui::InputState,
}

impl EditorApp {
    fn new(editor_options: EditorOptions, worker: BackendWorker) -> Self {
        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            worker,
            input: ui::InputState::new(),
        };
        app.process_events(vec![AppIntent::ZonesReloadRequested]);
        app.flush_backend_requests();
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events: Vec<AppIntent> = self
            .worker
            .drain_replies()
            .into_iter()
            .map(|reply| AppIntent::BackendReplied { reply })
            .collect();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);
        self.flush_backend_requests();

        let dt = f64::from(ctx.input(|i| i.stable_dt));
        let animating = use_cases::camera::advance_animation(&mut self.state, dt);

        self.maybe_request_repaint(ctx, has_meaningful_events || animating);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    self.state.mode,
                    &self.state.options,
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);
                render::render_scene(&ui.painter_at(rect), rect, &scene);

                if scene.is_empty() && self.state.backend.pending_count() == 0 {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No zones yet. Press Z and drag to draw one",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.last_error = Some(format!("{e:#}"));
            }
        }
    }

    /// Reicht eingereihte Backend-Requests an den Worker weiter.
    fn flush_backend_requests(&mut self) {
        let requests = self.state.backend.take_outbox();
        if requests.is_empty() {
            return;
        }
        if let Err(e) = self.worker.submit(requests.clone()) {
            // Nicht übergebene Requests als Fehlschlag beantworten, damit
            // offene Requests und die Zonen-Sperre freigegeben werden
            log::warn!("Backend-Requests konnten nicht übergeben werden: {:#}", e);
            let message = format!("{e:#}");
            let replies = requests
                .into_iter()
                .map(|request| AppIntent::BackendReplied {
                    reply: BackendReply::failed(request, message.clone()),
                })
                .collect();
            self.process_events(replies);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        } else if self.state.backend.pending_count() > 0 {
            ctx.request_repaint_after(BACKEND_POLL_INTERVAL);
        }
    }
}
