pub mod domain;
pub mod error;

pub use domain::{Course, DishRecord, Price};
pub use error::{ErrorCode, MenuError, Notice};
