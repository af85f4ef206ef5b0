mod clients;
pub mod dto;
mod history;
pub mod response;
mod router;

pub use router::{AppState, api_router, create_router};
