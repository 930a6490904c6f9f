pub mod category;
pub mod errors;
pub mod pagination;
pub mod types;
pub mod validation;
