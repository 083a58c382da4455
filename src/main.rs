//! Screen Protractor.
//!
//! Transparentes, immer obenliegendes Overlay mit einem verschiebbaren
//! Winkelmesser (Scheitel + zwei Schenkel) über beliebigem Bildschirminhalt.

use eframe::egui;
use screen_protractor::{ui, AppController, AppIntent, AppState, OverlayOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Screen Protractor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("Screen Protractor")
                .with_transparent(true)
                .with_decorations(false)
                .with_window_level(egui::WindowLevel::AlwaysOnTop)
                .with_maximized(true),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Screen Protractor",
            options,
            Box::new(|_cc| Ok(Box::new(ProtractorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ProtractorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl ProtractorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = OverlayOptions::config_path();
        let overlay_options = OverlayOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(overlay_options);
        state.options_path = Some(config_path);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for ProtractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = ui::collect_keyboard_intents(ctx);
        events.extend(self.input.collect_pointer_intents(ctx));
        let has_events = !events.is_empty();

        self.process_events(events);

        let label_size = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |panel_ui| {
                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_overlay(panel_ui.painter(), &scene)
            })
            .inner;
        self.process_events(vec![AppIntent::LabelMeasured { size: label_size }]);

        self.input.sync_passthrough(ctx, &self.state);
        ui::update_cursor(ctx, &self.state);

        if has_events || self.state.drag.is_dragging() {
            ctx.request_repaint();
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Vollständig transparent: nur der Winkelmesser ist sichtbar
        [0.0, 0.0, 0.0, 0.0]
    }
}

impl ProtractorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
