//! UI actions and error modeling for the desktop controller.

use shared::{Course, MenuError, Notice};

use crate::controller::reducer::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Navigate(Screen),
    Back,
    SeedShowcase,
    AddShowcaseDish(Course),
    RemoveDish(usize),
    SubmitChefForm,
    DismissNotice,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::Back => "back",
            Self::SeedShowcase => "seed_showcase",
            Self::AddShowcaseDish(_) => "add_showcase_dish",
            Self::RemoveDish(_) => "remove_dish",
            Self::SubmitChefForm => "submit_chef_form",
            Self::DismissNotice => "dismiss_notice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    AddDish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_menu_error(context: UiErrorContext, err: &MenuError) -> Self {
        let notice = Notice::from(err);
        Self {
            category: UiErrorCategory::Validation,
            context,
            message: notice.message,
        }
    }

    /// Startup failure to load settings; the app continues on defaults.
    pub fn from_config_error(err: &anyhow::Error) -> Self {
        Self {
            category: UiErrorCategory::Config,
            context: UiErrorContext::Startup,
            message: format!("{err:#}; using default settings"),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Check your input",
        UiErrorCategory::Config => "Configuration",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_form_becomes_validation_notice() {
        let err = UiError::from_menu_error(UiErrorContext::AddDish, &MenuError::IncompleteForm);
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err.context(), UiErrorContext::AddDish);
        assert_eq!(err.message(), "Please fill all fields!");
    }

    #[test]
    fn config_failure_becomes_startup_notice_with_full_chain() {
        let err = anyhow::anyhow!("expected a float")
            .context("failed to parse config file 'chef_app.toml'");
        let notice = UiError::from_config_error(&err);

        assert_eq!(notice.category(), UiErrorCategory::Config);
        assert_eq!(notice.context(), UiErrorContext::Startup);
        assert_eq!(err_label(notice.category()), "Configuration");
        assert_eq!(
            notice.message(),
            "failed to parse config file 'chef_app.toml': expected a float; using default settings"
        );
    }
}
