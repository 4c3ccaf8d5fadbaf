use eframe::egui;

use crate::controller::{
    events::{UiAction, UiError},
    orchestration::ActionQueue,
    reducer::{AppState, Screen},
};
use crate::ui::{panels, theme, widgets};

pub struct ChefApp {
    state: AppState,
    actions: ActionQueue,
}

impl ChefApp {
    pub fn new(seed_showcase: bool, startup_notice: Option<UiError>) -> Self {
        let mut state = AppState::new(seed_showcase);
        if let Some(notice) = startup_notice {
            state.raise_notice(notice);
        }
        Self {
            state,
            actions: ActionQueue::default(),
        }
    }

    fn process_actions(&mut self) {
        for action in self.actions.take() {
            self.state.apply(action);
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let screen = self.state.current_screen();
        if screen == Screen::Home {
            return;
        }

        egui::TopBottomPanel::top("screen_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.can_go_back() && ui.button("< Back").clicked() {
                    self.actions.dispatch(UiAction::Back);
                }
                ui.label(egui::RichText::new(screen.title()).size(theme::TITLE_SIZE).strong());
            });
        });
    }
}

impl eframe::App for ChefApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_actions();
        self.show_header(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::same(20)))
            .show(ctx, |ui| match self.state.current_screen() {
                Screen::Home => panels::home::show(ui, &mut self.actions),
                Screen::Menu => panels::menu::show(ui, &self.state, &mut self.actions),
                Screen::ChefControl => {
                    panels::chef_control::show(ui, &mut self.state.chef_form, &mut self.actions)
                }
            });

        if let Some(notice) = &self.state.notice {
            if widgets::blocking_notice(ctx, notice) {
                self.actions.dispatch(UiAction::DismissNotice);
            }
        }

        if !self.actions.is_empty() {
            ctx.request_repaint();
        }
    }
}
