pub mod branch;
pub mod errors;
pub mod hierarchy;
