use egui::Color32;

use crate::controller::events::{err_label, UiError};
use crate::ui::theme;

pub fn filled_button(ui: &mut egui::Ui, label: &str, fill: Color32) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(label)
                .color(theme::BUTTON_TEXT)
                .size(theme::ITEM_SIZE),
        )
        .fill(fill)
        .corner_radius(5.0),
    )
}

pub fn small_filled_button(ui: &mut egui::Ui, label: &str, fill: Color32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(theme::BUTTON_TEXT))
            .fill(fill)
            .corner_radius(5.0),
    )
}

pub fn form_input(ui: &mut egui::Ui, hint: &str, value: &mut String) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
}

pub fn item_label(ui: &mut egui::Ui, text: impl Into<String>) -> egui::Response {
    ui.label(egui::RichText::new(text).size(theme::ITEM_SIZE))
}

/// Modal that blocks the screen until acknowledged. Returns true once dismissed.
pub fn blocking_notice(ctx: &egui::Context, notice: &UiError) -> bool {
    let modal = egui::Modal::new(egui::Id::new("blocking_notice")).show(ctx, |ui| {
        ui.set_width(280.0);
        ui.heading(err_label(notice.category()));
        ui.add_space(4.0);
        ui.label(notice.message());
        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    });
    modal.inner || modal.should_close()
}
