use shared::Course;

use crate::controller::{events::UiAction, orchestration::ActionQueue, reducer::AppState};
use crate::ui::{theme, widgets};

pub fn show(ui: &mut egui::Ui, state: &AppState, actions: &mut ActionQueue) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Our Menu")
                    .size(theme::SCREEN_TITLE_SIZE)
                    .strong(),
            );
            ui.add_space(12.0);

            if widgets::filled_button(ui, "Enter Menu", theme::PRIMARY).clicked() {
                actions.dispatch(UiAction::SeedShowcase);
            }

            let summary = state.store.summary();
            widgets::item_label(ui, format!("Total Number of Dishes: {}", summary.count));
            for course in Course::ALL {
                widgets::item_label(
                    ui,
                    format!(
                        "Average {} Price: R {:.2}",
                        course.title(),
                        summary.average(course)
                    ),
                );
            }

            ui.add_space(8.0);
            for slot in state.showcase.slots() {
                widgets::item_label(ui, format!("{}: {}", slot.course.title(), slot.title));
                if !slot.description.is_empty() {
                    widgets::item_label(ui, format!("Description: {}", slot.description));
                }
                if let Some(price) = slot.price {
                    widgets::item_label(ui, format!("Price: {price}"));
                }
            }

            ui.add_space(8.0);
            for course in Course::ALL {
                let label = format!("Add {} to Menu", course.title());
                if widgets::filled_button(ui, &label, theme::PRIMARY).clicked() {
                    actions.dispatch(UiAction::AddShowcaseDish(course));
                }
            }

            ui.add_space(8.0);
            // Indices come from the live list every frame.
            for (index, item) in state.store.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(item.to_string());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if widgets::small_filled_button(ui, "Remove", theme::DANGER).clicked() {
                            actions.dispatch(UiAction::RemoveDish(index));
                        }
                    });
                });
            }
        });
}
