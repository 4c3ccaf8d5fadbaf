use crate::controller::{events::UiAction, orchestration::ActionQueue, reducer::Screen};
use crate::ui::{theme, widgets};

pub fn show(ui: &mut egui::Ui, actions: &mut ActionQueue) {
    let avail = ui.available_size();
    ui.add_space((avail.y * 0.3).clamp(16.0, 240.0));

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Welcome to the Chef App")
                .size(theme::TITLE_SIZE)
                .strong(),
        );
        ui.add_space(20.0);

        if widgets::filled_button(ui, "Enter Menu", theme::PRIMARY).clicked() {
            actions.dispatch(UiAction::Navigate(Screen::Menu));
        }
        if widgets::filled_button(ui, "Chef Control", theme::CHEF_ACCENT).clicked() {
            actions.dispatch(UiAction::Navigate(Screen::ChefControl));
        }
    });
}
