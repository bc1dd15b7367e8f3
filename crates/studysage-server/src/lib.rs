//! StudySage server — HTTP surface over document extraction and study aids.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
