pub mod batch_number;
pub mod database;
pub mod error;
pub mod pagination;
pub mod response;
pub mod validation;
