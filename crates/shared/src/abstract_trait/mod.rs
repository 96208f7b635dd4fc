pub mod reward;
pub mod transaction;
