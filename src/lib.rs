pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::entity_store::{DashboardStats, EntityStore, Stored};
pub use domain::model::{
    Client, ClientPatch, ClientWithDetails, Contact, ContactPatch, EntityId, Machine,
    MachinePatch, NewClient, NewContact, NewMachine, NewReminder, Record, Reminder,
    ReminderPatch,
};
pub use infra::config::AppConfig;
