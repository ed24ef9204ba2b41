use crate::app::entity_store::DashboardStats;
use crate::domain::model::{
    Client, ClientPatch, ClientWithDetails, Contact, ContactPatch, Machine, MachinePatch,
    NewClient, NewContact, NewMachine, NewReminder, Reminder, ReminderPatch,
};
use crate::transport::http::handlers::common::handle_panic;
use crate::transport::http::handlers::{
    clients, contacts, dashboard, health, machines, reminders,
};
use crate::transport::http::types::{AppState, ErrorResponse, FieldError, HealthResponse};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        clients::list_clients_handler,
        clients::get_client_handler,
        clients::create_client_handler,
        clients::update_client_handler,
        clients::delete_client_handler,
        contacts::list_contacts_handler,
        contacts::list_client_contacts_handler,
        contacts::get_contact_handler,
        contacts::create_contact_handler,
        contacts::update_contact_handler,
        contacts::delete_contact_handler,
        machines::list_machines_handler,
        machines::list_client_machines_handler,
        machines::get_machine_handler,
        machines::create_machine_handler,
        machines::update_machine_handler,
        machines::delete_machine_handler,
        reminders::list_reminders_handler,
        reminders::overdue_reminders_handler,
        reminders::upcoming_reminders_handler,
        reminders::get_reminder_handler,
        reminders::create_reminder_handler,
        reminders::update_reminder_handler,
        reminders::delete_reminder_handler,
        dashboard::dashboard_stats_handler
    ),
    components(schemas(
        Client,
        NewClient,
        ClientPatch,
        ClientWithDetails,
        Contact,
        NewContact,
        ContactPatch,
        Machine,
        NewMachine,
        MachinePatch,
        Reminder,
        NewReminder,
        ReminderPatch,
        DashboardStats,
        HealthResponse,
        ErrorResponse,
        FieldError
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/clients",
            get(clients::list_clients_handler).post(clients::create_client_handler),
        )
        .route(
            "/api/clients/:id",
            get(clients::get_client_handler)
                .put(clients::update_client_handler)
                .delete(clients::delete_client_handler),
        )
        .route(
            "/api/clients/:id/contacts",
            get(contacts::list_client_contacts_handler),
        )
        .route(
            "/api/clients/:id/machines",
            get(machines::list_client_machines_handler),
        )
        .route(
            "/api/contacts",
            get(contacts::list_contacts_handler).post(contacts::create_contact_handler),
        )
        .route(
            "/api/contacts/:id",
            get(contacts::get_contact_handler)
                .put(contacts::update_contact_handler)
                .delete(contacts::delete_contact_handler),
        )
        .route(
            "/api/machines",
            get(machines::list_machines_handler).post(machines::create_machine_handler),
        )
        .route(
            "/api/machines/:id",
            get(machines::get_machine_handler)
                .put(machines::update_machine_handler)
                .delete(machines::delete_machine_handler),
        )
        .route(
            "/api/reminders",
            get(reminders::list_reminders_handler).post(reminders::create_reminder_handler),
        )
        .route(
            "/api/reminders/overdue",
            get(reminders::overdue_reminders_handler),
        )
        .route(
            "/api/reminders/upcoming-monthly",
            get(reminders::upcoming_reminders_handler),
        )
        .route(
            "/api/reminders/:id",
            get(reminders::get_reminder_handler)
                .put(reminders::update_reminder_handler)
                .delete(reminders::delete_reminder_handler),
        )
        .route(
            "/api/dashboard/stats",
            get(dashboard::dashboard_stats_handler),
        )
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/clients",
            "/api/clients/{id}",
            "/api/clients/{id}/contacts",
            "/api/contacts/{id}",
            "/api/machines",
            "/api/reminders/overdue",
            "/api/reminders/upcoming-monthly",
            "/api/dashboard/stats",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
