use eframe::egui;
use std::sync::mpsc;

use crate::engine::engine::Engine;
use crate::engine::gemini_client::ClientConfig;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::form_input::FormInput;
use crate::model::lesson_plan::LessonPlan;
use crate::ui::form_panel::draw_form_panel;
use crate::ui::plan_panel::draw_plan_panel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

/* =========================
   UI State
   ========================= */

pub struct UiState {
    pub form: FormInput,
    pub plan: Option<LessonPlan>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub generating: bool,
    pub settings: UiSettings,
}

impl UiState {
    fn new() -> Self {
        Self {
            form: FormInput::default(),
            plan: None,
            error: None,
            notice: None,
            generating: false,
            settings: settings_io::load_settings(),
        }
    }
}

/* =========================
   App
   ========================= */

pub struct PlannerApp {
    ui: UiState,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl PlannerApp {
    pub fn new(config: ClientConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, config);
            engine.run();
        });

        Self {
            ui: UiState::new(),
            cmd_tx,
            resp_rx,
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::PlanReady(plan) => {
                    self.ui.plan = Some(*plan);
                    self.ui.error = None;
                    self.ui.generating = false;
                }
                EngineResponse::GenerateFailed(message) => {
                    self.ui.error = Some(message);
                    self.ui.generating = false;
                }
            }
        }

        draw_form_panel(ctx, &mut self.ui, &self.cmd_tx);
        draw_plan_panel(ctx, &mut self.ui);

        // The engine answers on its own thread; keep polling while a
        // request is in flight so the response is picked up promptly.
        if self.ui.generating {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
