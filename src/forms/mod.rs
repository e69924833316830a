pub mod conversation;
pub mod inquiry;
pub mod property;

pub use conversation::*;
pub use inquiry::*;
pub use property::*;
