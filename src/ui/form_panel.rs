use eframe::egui;
use std::sync::mpsc::Sender;

use crate::engine::protocol::EngineCommand;
use crate::model::catalog::{self, GRADE_LEVELS, LANGUAGES, QUARTERS, WEEKS};
use crate::model::form_input::FormField;
use crate::ui::app::UiState;
use crate::ui::settings_io;

pub fn draw_form_panel(
    ctx: &egui::Context,
    state: &mut UiState,
    cmd_tx: &Sender<EngineCommand>,
) {
    egui::SidePanel::left("form")
        .resizable(true)
        .default_width(280.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Lesson Parameters");
                ui.separator();

                draw_selectors(ui, state);
                draw_text_fields(ui, state);

                ui.add_space(8.0);
                draw_generate_button(ui, state, cmd_tx);

                ui.add_space(12.0);
                ui.separator();
                draw_options(ui, state);
            });
        });
}

fn draw_selectors(ui: &mut egui::Ui, state: &mut UiState) {
    let form = &mut state.form;

    ui.label("Grade Level");
    egui::ComboBox::from_id_salt("grade_level")
        .selected_text(format!("Grade {}", form.grade_level))
        .show_ui(ui, |ui| {
            for grade in GRADE_LEVELS {
                if ui
                    .selectable_label(form.grade_level == grade, format!("Grade {grade}"))
                    .clicked()
                {
                    form.set_grade(grade);
                }
            }
        });

    ui.label("Subject");
    let offered = catalog::subjects_for(form.grade_level);
    egui::ComboBox::from_id_salt("subject")
        .selected_text(form.subject.clone())
        .show_ui(ui, |ui| {
            for option in offered {
                if ui
                    .selectable_label(form.subject == option.value, option.label)
                    .clicked()
                {
                    form.set_field(FormField::Subject, option.value);
                }
            }
        });

    ui.label("Quarter");
    egui::ComboBox::from_id_salt("quarter")
        .selected_text(form.quarter.clone())
        .show_ui(ui, |ui| {
            for quarter in QUARTERS {
                if ui.selectable_label(form.quarter == quarter, quarter).clicked() {
                    form.set_field(FormField::Quarter, quarter);
                }
            }
        });

    ui.label("Week");
    egui::ComboBox::from_id_salt("week")
        .selected_text(format!("Week {}", form.week))
        .show_ui(ui, |ui| {
            for week in WEEKS {
                if ui
                    .selectable_label(form.week == week, format!("Week {week}"))
                    .clicked()
                {
                    form.set_field(FormField::Week, &week.to_string());
                }
            }
        });

    ui.label("Language");
    egui::ComboBox::from_id_salt("language")
        .selected_text(form.language.as_str())
        .show_ui(ui, |ui| {
            for language in LANGUAGES {
                if ui
                    .selectable_label(form.language.as_str() == language, language)
                    .clicked()
                {
                    form.set_field(FormField::Language, language);
                }
            }
        });
}

fn draw_text_fields(ui: &mut egui::Ui, state: &mut UiState) {
    ui.add_space(6.0);
    ui.label("Lesson Topic");
    let mut topic = state.form.lesson_topic.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut topic)
                .hint_text("e.g., Understanding the Water Cycle")
                .desired_rows(3),
        )
        .changed()
    {
        state.form.set_field(FormField::LessonTopic, &topic);
    }

    ui.label("Duration");
    let mut duration = state.form.duration.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut duration)
                .hint_text("e.g., 60 minutes or 1 hour"),
        )
        .changed()
    {
        state.form.set_field(FormField::Duration, &duration);
    }
}

fn draw_generate_button(
    ui: &mut egui::Ui,
    state: &mut UiState,
    cmd_tx: &Sender<EngineCommand>,
) {
    // One request at a time: the button stays disabled until the engine
    // answers the outstanding one.
    let button = egui::Button::new(if state.generating {
        "Generating…"
    } else {
        "Generate Lesson Plan"
    });

    if ui.add_enabled(!state.generating, button).clicked() {
        match state.form.validate() {
            Ok(()) => {
                state.generating = true;
                state.error = None;
                state.notice = None;
                state.plan = None;
                let _ = cmd_tx.send(EngineCommand::Generate(state.form.clone()));
            }
            Err(msg) => state.error = Some(msg),
        }
    }
}

fn draw_options(ui: &mut egui::Ui, state: &mut UiState) {
    ui.collapsing("Options", |ui| {
        ui.label("UI Scale");
        let changed = ui
            .add(egui::Slider::new(&mut state.settings.ui_scale, 0.75..=2.0))
            .changed();

        ui.label("Heading Color");
        let mut color = state.settings.heading();
        if ui.color_edit_button_srgba(&mut color).changed() {
            state.settings.set_heading(color);
            settings_io::save_settings(&state.settings);
        }
        if changed {
            settings_io::save_settings(&state.settings);
        }
    });
}
