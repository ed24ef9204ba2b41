pub mod router;
pub mod types;
pub mod validation;
pub mod handlers {
    pub mod clients;
    pub mod common;
    pub mod contacts;
    pub mod dashboard;
    pub mod health;
    pub mod machines;
    pub mod reminders;
    pub mod resource;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
