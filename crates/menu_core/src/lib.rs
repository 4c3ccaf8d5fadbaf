//! In-memory menu model: the dish store, the chef-control form and the
//! showcase menu seeded by "Enter Menu".

pub mod demo;
pub mod form;
pub mod store;

pub use demo::{DemoDish, DemoMenu};
pub use form::{ChefControlForm, SubmittedDish, DEFAULT_COURSE_INPUT};
pub use store::{MenuStore, MenuSummary};
