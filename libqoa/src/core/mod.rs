pub mod lms;
pub mod tables;
pub mod types;

pub use lms::LmsState;
pub use tables::*;
pub use types::*;
