use menu_core::ChefControlForm;

use crate::controller::{events::UiAction, orchestration::ActionQueue};
use crate::ui::{theme, widgets};

pub fn show(ui: &mut egui::Ui, form: &mut ChefControlForm, actions: &mut ActionQueue) {
    ui.label(
        egui::RichText::new("Chef Control")
            .size(theme::SCREEN_TITLE_SIZE)
            .strong(),
    );
    ui.add_space(12.0);

    widgets::form_input(ui, "Dish Name", &mut form.name);
    widgets::form_input(ui, "Dish Description", &mut form.description);
    let price_resp = widgets::form_input(ui, "Price", &mut form.price);
    let course_resp = widgets::form_input(
        ui,
        "Course (e.g., starter, main, dessert)",
        &mut form.course,
    );

    // Enter in the last two fields submits like the button.
    let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
    let submit_on_enter =
        enter_pressed && (price_resp.lost_focus() || course_resp.lost_focus());

    if ui.button("Add Dish").clicked() || submit_on_enter {
        actions.dispatch(UiAction::SubmitChefForm);
    }

    ui.add_space(20.0);
    ui.label(
        egui::RichText::new("Added Dishes:")
            .size(theme::LIST_TITLE_SIZE)
            .strong(),
    );

    if form.submitted().is_empty() {
        ui.label("No dishes added yet.");
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for dish in form.submitted() {
                ui.add_space(6.0);
                widgets::item_label(ui, format!("Name: {}", dish.name));
                widgets::item_label(ui, format!("Description: {}", dish.description));
                widgets::item_label(ui, format!("Price: {}", dish.price));
                widgets::item_label(ui, format!("Course: {}", dish.course));
            }
        });
}
