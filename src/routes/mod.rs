pub mod conversation;
pub mod dashboard;
pub mod health_checks;
pub mod inquiry;
pub mod property;

pub use health_checks::*;
