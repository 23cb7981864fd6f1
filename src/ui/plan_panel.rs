use eframe::egui;

use crate::export::{self, ExportFormat};
use crate::render;
use crate::ui::app::UiState;

pub fn draw_plan_panel(ctx: &egui::Context, state: &mut UiState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(
                egui::RichText::new("MATATAG Lesson Plan Studio")
                    .color(state.settings.heading()),
            );
        });
        ui.separator();

        if let Some(error) = &state.error {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("Error: {error}"));
            ui.add_space(6.0);
        }
        if let Some(notice) = &state.notice {
            ui.colored_label(egui::Color32::YELLOW, notice);
            ui.add_space(6.0);
        }

        if state.generating {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating lesson plan…");
            });
            return;
        }

        let Some(plan) = state.plan.clone() else {
            ui.label("Fill in the lesson parameters and press Generate.");
            return;
        };

        draw_export_row(ui, state, &plan);
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for section in render::plan_sections(&plan) {
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(section.heading)
                        .strong()
                        .size(18.0)
                        .color(state.settings.heading()),
                );
                for entry in section.entries {
                    ui.add_space(4.0);
                    if !entry.label.is_empty() {
                        ui.label(egui::RichText::new(entry.label).strong());
                    }
                    ui.label(entry.body);
                }
            }
        });
    });
}

fn draw_export_row(
    ui: &mut egui::Ui,
    state: &mut UiState,
    plan: &crate::model::lesson_plan::LessonPlan,
) {
    ui.horizontal(|ui| {
        for format in [ExportFormat::Docx, ExportFormat::Pdf] {
            if ui.button(format.button_label()).clicked() {
                run_export(state, plan, format);
            }
        }
    });
}

fn run_export(
    state: &mut UiState,
    plan: &crate::model::lesson_plan::LessonPlan,
    format: ExportFormat,
) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(export::suggested_filename(&state.form))
        .save_file()
    else {
        return; // user cancelled
    };

    let text = render::plan_to_text(plan);
    match export::export_plan(&path, &text, format) {
        Ok(receipt) => state.notice = Some(receipt.notice),
        Err(err) => state.error = Some(err.to_string()),
    }
}
