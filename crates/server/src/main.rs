// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use draft_league::{LeagueCreated, LeagueRequest, PoolSelection, WizardSession};
use draft_league_api::{
    ApiError, CatalogQuery, CatalogResponse, CommandRequest, ProfilesResponse, RawSettingsInput,
    ServiceConfig, SessionSnapshot, SimulatedLeagueService, SubmitResponse, apply_command,
    apply_raw_setting, begin_submission, create_league, finish_submission, list_profiles,
    query_catalog, snapshot,
};
use draft_league_domain::{Catalog, ProfileStore};
use serde::{Deserialize, Serialize};
use session::SessionStore;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Draft League Server - HTTP server for the draft league configuration wizard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,
}

/// Application state shared across handlers.
///
/// The catalog, profiles and configuration are read-only. Sessions sit behind a
/// mutex that is never held across a league-service call.
#[derive(Clone)]
struct AppState {
    catalog: Arc<Catalog>,
    profiles: Arc<ProfileStore>,
    sessions: Arc<Mutex<SessionStore>>,
    service: Arc<SimulatedLeagueService>,
    config: Arc<ServiceConfig>,
}

impl AppState {
    fn new(config: ServiceConfig, service: SimulatedLeagueService) -> Self {
        Self {
            catalog: Arc::new(Catalog::standard()),
            profiles: Arc::new(ProfileStore::builtin()),
            sessions: Arc::new(Mutex::new(SessionStore::default())),
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::SubmissionFailed { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

fn submission_in_progress() -> HttpError {
    HttpError {
        status: StatusCode::CONFLICT,
        message: String::from("A submission for this session is already in progress"),
    }
}

fn session_not_found(session_id: &str) -> HttpError {
    HttpError::from(ApiError::ResourceNotFound {
        resource_type: String::from("Session"),
        message: format!("Session '{session_id}' does not exist"),
    })
}

/// Handler for GET `/catalog` endpoint.
///
/// Filters the catalog. With a `session_id` the status filter and summary use that
/// session's pool; otherwise the default pool.
async fn handle_get_catalog(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>, HttpError> {
    info!(session_id = ?query.session_id, "Handling catalog request");

    let selection: PoolSelection = match query.session_id.as_deref() {
        Some(session_id) => {
            let store = app_state.sessions.lock().await;
            store
                .get(session_id)
                .map(|s| s.pool.clone())
                .ok_or_else(|| session_not_found(session_id))?
        }
        None => PoolSelection::from_defaults(&app_state.catalog),
    };

    let response: CatalogResponse = query_catalog(&app_state.catalog, &selection, &query)?;
    Ok(Json(response))
}

/// Handler for GET `/profiles` endpoint.
async fn handle_list_profiles(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ProfilesResponse> {
    info!("Handling list_profiles request");
    Json(list_profiles(&app_state.profiles))
}

/// Handler for POST `/sessions` endpoint.
///
/// Opens a new wizard session on the first step.
async fn handle_create_session(
    AxumState(app_state): AxumState<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let session: WizardSession = WizardSession::new(&app_state.catalog);
    let session_id: String = app_state.sessions.lock().await.insert(session.clone());

    info!(session_id = %session_id, "Created wizard session");
    (
        StatusCode::CREATED,
        Json(snapshot(&session_id, &session, &app_state.catalog)),
    )
}

/// Handler for GET `/sessions/{session_id}` endpoint.
async fn handle_get_session(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionSnapshot>, HttpError> {
    info!(session_id = %session_id, "Handling get_session request");

    let store = app_state.sessions.lock().await;
    let session: &WizardSession = store
        .get(&session_id)
        .ok_or_else(|| session_not_found(&session_id))?;
    let view: SessionSnapshot = snapshot(&session_id, session, &app_state.catalog);
    drop(store);
    Ok(Json(view))
}

/// Handler for DELETE `/sessions/{session_id}` endpoint.
///
/// Abandons a session. Refused while a submission for it is in flight.
async fn handle_delete_session(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(session_id = %session_id, "Handling delete_session request");

    let mut store = app_state.sessions.lock().await;
    if store.is_submitting(&session_id) {
        return Err(submission_in_progress());
    }
    store
        .remove(&session_id)
        .ok_or_else(|| session_not_found(&session_id))?;
    drop(store);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/sessions/{session_id}/commands` endpoint.
///
/// Applies one wizard command. Commands the wizard rejects leave the session
/// unchanged and still answer with the current snapshot. Edits are refused while a
/// submission for the session is in flight.
async fn handle_apply_command(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<SessionSnapshot>, HttpError> {
    info!(session_id = %session_id, command = ?request, "Handling command request");

    let mut store = app_state.sessions.lock().await;
    let session: &WizardSession = store
        .get(&session_id)
        .ok_or_else(|| session_not_found(&session_id))?;
    if store.is_submitting(&session_id) {
        debug!(session_id = %session_id, "Edit refused during submission");
        return Err(submission_in_progress());
    }
    let next: WizardSession =
        apply_command(session, request, &app_state.catalog, &app_state.profiles)?;
    let view: SessionSnapshot = snapshot(&session_id, &next, &app_state.catalog);
    store.replace(&session_id, next);
    drop(store);

    Ok(Json(view))
}

/// Handler for POST `/sessions/{session_id}/settings` endpoint.
///
/// Coerces raw text typed into a numeric settings field and applies it. Refused
/// while a submission for the session is in flight.
async fn handle_apply_setting(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<String>,
    Json(input): Json<RawSettingsInput>,
) -> Result<Json<SessionSnapshot>, HttpError> {
    info!(session_id = %session_id, "Handling settings input request");

    let mut store = app_state.sessions.lock().await;
    let session: &WizardSession = store
        .get(&session_id)
        .ok_or_else(|| session_not_found(&session_id))?;
    if store.is_submitting(&session_id) {
        debug!(session_id = %session_id, "Edit refused during submission");
        return Err(submission_in_progress());
    }
    let next: WizardSession =
        apply_raw_setting(session, &input, &app_state.catalog, &app_state.profiles);
    let view: SessionSnapshot = snapshot(&session_id, &next, &app_state.catalog);
    store.replace(&session_id, next);
    drop(store);

    Ok(Json(view))
}

/// Handler for POST `/sessions/{session_id}/submit` endpoint.
///
/// Creates the league. The session lock is released while the league service is
/// called; a second submission for the same session is refused until the first
/// one finishes.
async fn handle_submit(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SubmitResponse>, HttpError> {
    info!(session_id = %session_id, "Handling submit request");

    let request: LeagueRequest = {
        let mut store = app_state.sessions.lock().await;
        let session: &WizardSession = store
            .get(&session_id)
            .ok_or_else(|| session_not_found(&session_id))?;
        let request: LeagueRequest = begin_submission(session, &app_state.catalog)?;
        if !store.begin_submit(&session_id) {
            warn!(session_id = %session_id, "Submission already in progress");
            return Err(submission_in_progress());
        }
        request
    };

    let outcome: Result<LeagueCreated, ApiError> =
        create_league(app_state.service.as_ref(), &request).await;

    let mut store = app_state.sessions.lock().await;
    store.end_submit(&session_id);
    let created: LeagueCreated = outcome?;
    let session: &WizardSession = store
        .get(&session_id)
        .ok_or_else(|| session_not_found(&session_id))?;
    let (next, response): (WizardSession, SubmitResponse) =
        finish_submission(session, created, &app_state.config)?;
    store.replace(&session_id, next);
    drop(store);

    info!(
        session_id = %session_id,
        invite_code = %response.invite_code,
        "Successfully created league"
    );
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/catalog", get(handle_get_catalog))
        .route("/profiles", get(handle_list_profiles))
        .route("/sessions", post(handle_create_session))
        .route(
            "/sessions/{session_id}",
            get(handle_get_session).delete(handle_delete_session),
        )
        .route("/sessions/{session_id}/commands", post(handle_apply_command))
        .route("/sessions/{session_id}/settings", post(handle_apply_setting))
        .route("/sessions/{session_id}/submit", post(handle_submit))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // The debug flag only picks the default level; RUST_LOG still wins.
    let default_level: &str = if ServiceConfig::from_env().is_ok_and(|c| c.enable_debug) {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config: ServiceConfig = ServiceConfig::from_env()?;
    info!(
        app_name = %config.app_name,
        api_url = %config.api_url,
        api_timeout_ms = config.api_timeout.as_millis(),
        analytics = config.enable_analytics,
        "Initializing Draft League Server"
    );

    let service: SimulatedLeagueService = SimulatedLeagueService::new(&config);
    let app: Router = build_router(AppState::new(config, service));

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
