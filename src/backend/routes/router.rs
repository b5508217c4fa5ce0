/**
 * Router Configuration
 *
 * Assembles the full HTTP surface. The auth middleware is attached as
 * a route layer per protected method router, so protection is visible
 * route-by-route and a rejected request never reaches a handler.
 *
 * # Routes
 *
 * Public:
 * - `GET  /` - health text
 * - `POST /jwt` - session issuance (token set as cookie)
 * - `GET  /projects-links` - public project list
 * - `POST /send` - contact form submission
 * - `POST /users` - user registration
 *
 * Protected (session cookie required):
 * - `GET    /users` - list users
 * - `GET    /messages` - list contact messages
 * - `GET    /super-shohag/edit/{id}` - fetch one project link
 * - `PATCH  /super-shohag/edit/{id}` - overwrite one project link
 * - `POST   /super-shohag/add` - insert a project link
 * - `PATCH  /users/admin/{id}` - promote a user to admin
 * - `DELETE /users/{id}` - delete a user
 * - `DELETE /projects-links/{id}` - delete a project link
 */

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::auth;
use crate::backend::contact;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::projects;
use crate::backend::server::state::AppState;
use crate::backend::users;

/// Create the router with all routes and layers configured
pub fn create_router(state: AppState) -> Result<Router, BackendError> {
    // Exactly one allowed origin with credentials enabled; tower-http
    // rejects a wildcard origin once credentials are on.
    let origin = state
        .config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|_| {
            BackendError::config(format!("invalid CORS origin: {}", state.config.cors_origin))
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let gate = from_fn_with_state(state.clone(), auth_middleware);

    let router = Router::new()
        .route("/", get(health))
        .route("/jwt", post(auth::handlers::issue_session))
        .route("/projects-links", get(projects::handlers::list_project_links))
        .route("/send", post(contact::handlers::send_message))
        .route(
            "/users",
            post(users::handlers::add_user)
                .merge(get(users::handlers::list_users).route_layer(gate.clone())),
        )
        .route(
            "/messages",
            get(contact::handlers::list_messages).route_layer(gate.clone()),
        )
        .route(
            "/super-shohag/edit/{id}",
            get(projects::handlers::get_project_link)
                .patch(projects::handlers::edit_project_link)
                .route_layer(gate.clone()),
        )
        .route(
            "/super-shohag/add",
            post(projects::handlers::add_project_link).route_layer(gate.clone()),
        )
        .route(
            "/users/admin/{id}",
            patch(users::handlers::promote_user).route_layer(gate.clone()),
        )
        .route(
            "/users/{id}",
            delete(users::handlers::delete_user).route_layer(gate.clone()),
        )
        .route(
            "/projects-links/{id}",
            delete(projects::handlers::delete_project_link).route_layer(gate),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

async fn health() -> &'static str {
    "Portfolio server is running"
}
