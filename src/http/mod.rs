mod error;
mod handlers;
mod routes;
mod types;

pub use error::{ApiError, ApiResult};
pub use routes::build_router;
pub use types::AppState;
