pub mod error;
pub mod routes;
pub mod sushi;

pub use routes::create_router;
pub use sushi::AppState;
