use egui::Color32;

pub const PRIMARY: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const CHEF_ACCENT: Color32 = Color32::from_rgb(0xFF, 0xC1, 0x07);
pub const DANGER: Color32 = Color32::from_rgb(0xF4, 0x43, 0x36);
pub const BUTTON_TEXT: Color32 = Color32::WHITE;

pub const TITLE_SIZE: f32 = 20.0;
pub const SCREEN_TITLE_SIZE: f32 = 24.0;
pub const LIST_TITLE_SIZE: f32 = 18.0;
pub const ITEM_SIZE: f32 = 16.0;

pub fn apply(ctx: &egui::Context, text_scale: f32) {
    ctx.set_zoom_factor(text_scale);
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 10.0);
    });
}
