pub mod json;
pub mod panic;
