pub mod dto;
pub mod error;
pub mod paths;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
