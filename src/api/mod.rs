pub mod handlers;
pub mod routes;

pub use routes::{create_cafe_routes, create_health_routes};
