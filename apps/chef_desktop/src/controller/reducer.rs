//! Application state and the transitions driven by [`UiAction`]s.

use menu_core::{ChefControlForm, DemoMenu, MenuStore};
use tracing::{info, warn};

use crate::controller::events::{UiAction, UiError, UiErrorContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Menu,
    ChefControl,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
            Self::ChefControl => "Chef Control",
        }
    }
}

/// Everything the screens read and mutate. One [`MenuStore`] is shared by
/// the menu and chef-control screens for the whole session.
#[derive(Debug)]
pub struct AppState {
    nav: Vec<Screen>,
    pub store: MenuStore,
    pub showcase: DemoMenu,
    pub chef_form: ChefControlForm,
    pub notice: Option<UiError>,
}

impl AppState {
    pub fn new(seed_showcase: bool) -> Self {
        let mut showcase = DemoMenu::new();
        if seed_showcase {
            showcase.seed();
        }
        Self {
            nav: vec![Screen::Home],
            store: MenuStore::new(),
            showcase,
            chef_form: ChefControlForm::new(),
            notice: None,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.nav.last().copied().unwrap_or(Screen::Home)
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.len() > 1
    }

    pub fn raise_notice(&mut self, notice: UiError) {
        warn!(context = ?notice.context(), message = notice.message(), "blocking notice raised");
        self.notice = Some(notice);
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Navigate(screen) => self.navigate(screen),
            UiAction::Back => {
                if self.can_go_back() {
                    self.nav.pop();
                    info!(screen = self.current_screen().title(), "navigated back");
                }
            }
            UiAction::SeedShowcase => self.showcase.seed(),
            UiAction::AddShowcaseDish(course) => {
                self.store.push(self.showcase.slot(course).to_record());
            }
            UiAction::RemoveDish(index) => {
                self.store.remove_item(index);
            }
            UiAction::SubmitChefForm => match self.chef_form.submit() {
                Ok(record) => self.store.push(record),
                Err(err) => {
                    self.raise_notice(UiError::from_menu_error(UiErrorContext::AddDish, &err));
                }
            },
            UiAction::DismissNotice => self.notice = None,
        }
    }

    /// Moves to `screen`, unwinding to it when it is already on the stack.
    fn navigate(&mut self, screen: Screen) {
        if let Some(pos) = self.nav.iter().position(|s| *s == screen) {
            self.nav.truncate(pos + 1);
        } else {
            self.nav.push(screen);
        }
        info!(screen = screen.title(), depth = self.nav.len(), "navigated");
    }
}
