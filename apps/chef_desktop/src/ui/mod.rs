//! UI layer for the chef app: app shell, screen panels, widgets, and theme.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::ChefApp;
