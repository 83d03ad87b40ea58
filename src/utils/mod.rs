pub mod errors;
pub mod jwt;
pub mod serde_helpers;
pub mod validation;
