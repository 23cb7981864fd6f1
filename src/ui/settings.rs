use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct UiSettings {
    pub ui_scale: f32,

    // RGBA, kept as plain bytes so the file stays hand-editable
    pub heading_color: [u8; 4],
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            heading_color: [90, 80, 180, 255],
        }
    }
}

impl UiSettings {
    pub fn heading(&self) -> Color32 {
        let [r, g, b, a] = self.heading_color;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn set_heading(&mut self, color: Color32) {
        self.heading_color = [color.r(), color.g(), color.b(), color.a()];
    }
}
