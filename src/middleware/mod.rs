pub mod auth;
pub mod cors;

pub use auth::AuthenticatedUser;
pub use cors::{cors_middleware, cors_middleware_with_origins};
