// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary functions.
//!
//! Each function takes DTOs, converts them into domain and core types, and converts
//! results and errors back into the API contract.

use crate::config::ServiceConfig;
use crate::error::{ApiError, translate_core_error, translate_domain_error, translate_service_error};
use crate::request_response::{
    CatalogEntryView, CatalogQuery, CatalogResponse, CommandRequest, GateView, ProfilesResponse,
    RawSettingsInput, ScheduleDerived, SessionSnapshot, SubmitResponse,
};
use draft_league::{
    Command, LeagueCreated, LeagueRequest, LeagueService, PoolFilter, PoolSelection, PoolSummary,
    StatusFilter, Step, WizardSession, apply, can_advance, complete_submission, gate_passes,
    prepare_submission,
};
use draft_league_domain::{
    Catalog, Category, Generation, PokemonType, ProfileStore, Schedule, SettingsUpdate, Tier,
    validate_schedule, validate_settings,
};
use tracing::{debug, info, warn};

/// Lists every profile in display order.
#[must_use]
pub fn list_profiles(profiles: &ProfileStore) -> ProfilesResponse {
    ProfilesResponse {
        profiles: profiles.list().to_vec(),
    }
}

/// Parses catalog query parameters into a filter.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the generation, type, category or status is
/// not recognized.
pub fn parse_pool_filter(query: &CatalogQuery) -> Result<PoolFilter, ApiError> {
    let generation: Option<Generation> = query
        .generation
        .map(Generation::new)
        .transpose()
        .map_err(translate_domain_error)?;
    let pokemon_type: Option<PokemonType> = query
        .pokemon_type
        .as_deref()
        .map(str::parse::<PokemonType>)
        .transpose()
        .map_err(translate_domain_error)?;
    let category: Option<Category> = query
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(translate_domain_error)?;
    let status: StatusFilter = match query.status.as_deref() {
        None | Some("all") => StatusFilter::All,
        Some("enabled") => StatusFilter::Enabled,
        Some("disabled") => StatusFilter::Disabled,
        Some(other) => {
            return Err(ApiError::InvalidInput {
                field: String::from("status"),
                message: format!("Unknown status filter: {other}"),
            });
        }
    };

    Ok(PoolFilter {
        search: query.search.clone(),
        generation,
        pokemon_type,
        tier: query.tier.as_deref().map(Tier::new),
        category,
        status,
    })
}

/// Runs a catalog query against a pool selection.
///
/// # Errors
///
/// Returns an error if the query parameters are invalid.
pub fn query_catalog(
    catalog: &Catalog,
    selection: &PoolSelection,
    query: &CatalogQuery,
) -> Result<CatalogResponse, ApiError> {
    let filter: PoolFilter = parse_pool_filter(query)?;
    let entries: Vec<CatalogEntryView> = filter
        .apply(catalog, selection)
        .into_iter()
        .map(|entry| CatalogEntryView {
            entry: entry.clone(),
            enabled: selection.is_enabled(&entry.id),
        })
        .collect();
    debug!(matches = entries.len(), "Catalog query");

    Ok(CatalogResponse {
        entries,
        summary: PoolSummary::compute(catalog, selection, &filter),
    })
}

/// Converts a command request into a core command.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the category or generation is not
/// recognized.
pub fn parse_command(request: CommandRequest) -> Result<Command, ApiError> {
    let command: Command = match request {
        CommandRequest::SelectProfile { profile_id } => Command::SelectProfile { profile_id },
        CommandRequest::UpdateSettings { update } => Command::UpdateSettings(update),
        CommandRequest::TogglePokemon { id } => Command::TogglePokemon { id },
        CommandRequest::BulkToggle { ids, enabled } => Command::BulkToggle { ids, enabled },
        CommandRequest::ToggleCategory { category, enabled } => Command::ToggleCategory {
            category: category.parse().map_err(translate_domain_error)?,
            enabled,
        },
        CommandRequest::ToggleGeneration {
            generation,
            enabled,
        } => Command::ToggleGeneration {
            generation: Generation::new(generation).map_err(translate_domain_error)?,
            enabled,
        },
        CommandRequest::ResetPool => Command::ResetPool,
        CommandRequest::UpdateSchedule { update } => Command::UpdateSchedule(update),
        CommandRequest::SetLeagueName { name } => Command::SetLeagueName { name },
        CommandRequest::SetDescription { description } => {
            Command::SetDescription { description }
        }
        CommandRequest::GoToStep { step } => Command::GoToStep { step },
        CommandRequest::Advance => Command::Advance,
        CommandRequest::Back => Command::Back,
    };
    Ok(command)
}

/// Applies one command request to a session.
///
/// Commands the wizard rejects (failed gates, unknown ids) are not errors; the
/// returned session is simply unchanged.
///
/// # Errors
///
/// Returns an error if the request cannot be converted into a command.
pub fn apply_command(
    session: &WizardSession,
    request: CommandRequest,
    catalog: &Catalog,
    profiles: &ProfileStore,
) -> Result<WizardSession, ApiError> {
    let command: Command = parse_command(request)?;
    let before: Step = session.step;
    let next: WizardSession = apply(session, command, catalog, profiles);
    if next.step != before {
        info!(from = before.number(), to = next.step.number(), "Step changed");
    }
    Ok(next)
}

/// Coerces raw text typed into a numeric settings field and applies it.
#[must_use]
pub fn apply_raw_setting(
    session: &WizardSession,
    input: &RawSettingsInput,
    catalog: &Catalog,
    profiles: &ProfileStore,
) -> WizardSession {
    let update: SettingsUpdate = input.target.coerce(&input.value);
    debug!(raw = %input.value, update = ?update, "Coerced settings input");
    apply(session, Command::UpdateSettings(update), catalog, profiles)
}

/// Advisory rule violations for the current session.
#[must_use]
pub fn advisories(session: &WizardSession) -> Vec<String> {
    let mut messages: Vec<String> = Vec::new();
    if let Some(Err(err)) = session.settings.as_ref().map(validate_settings) {
        messages.push(err.to_string());
    }
    if let Err(err) = validate_schedule(&session.schedule) {
        messages.push(err.to_string());
    }
    messages
}

fn derive_schedule(schedule: &Schedule, week_count: Option<u32>) -> ScheduleDerived {
    ScheduleDerived {
        min_season_start: schedule.min_season_start().ok().flatten(),
        season_end_date: week_count
            .and_then(|weeks| schedule.season_end_date(weeks).ok().flatten()),
    }
}

/// Builds the full view of a session.
#[must_use]
pub fn snapshot(session_id: &str, session: &WizardSession, catalog: &Catalog) -> SessionSnapshot {
    let gates: Vec<GateView> = Step::ALL
        .into_iter()
        .map(|step| GateView {
            step: step.number(),
            title: String::from(step.title()),
            passes: gate_passes(session, step),
        })
        .collect();
    let week_count: Option<u32> = session.settings.as_ref().map(|s| s.week_count);

    SessionSnapshot {
        session_id: session_id.to_string(),
        step: session.step.number(),
        step_title: String::from(session.step.title()),
        status: session.status.clone(),
        profile_id: session.profile.as_ref().map(|p| p.id.clone()),
        league_name: session.league_name.clone(),
        description: session.description.clone(),
        settings: session.settings.clone(),
        schedule: session.schedule,
        schedule_derived: derive_schedule(&session.schedule, week_count),
        enabled_ids: session
            .pool
            .enabled_ids(catalog)
            .into_iter()
            .map(String::from)
            .collect(),
        pool: PoolSummary::compute(catalog, &session.pool, &PoolFilter::default()),
        gates,
        can_advance: can_advance(session),
        advisories: advisories(session),
    }
}

/// Validates a session for submission and builds the service request.
///
/// # Errors
///
/// Returns an error if the session is not ready to submit.
pub fn begin_submission(
    session: &WizardSession,
    catalog: &Catalog,
) -> Result<LeagueRequest, ApiError> {
    prepare_submission(session, catalog).map_err(|e| {
        debug!(error = %e, "Submission refused");
        translate_core_error(e)
    })
}

/// Calls the league service.
///
/// # Errors
///
/// Returns `ApiError::SubmissionFailed` if the service fails.
pub async fn create_league<S>(
    service: &S,
    request: &LeagueRequest,
) -> Result<LeagueCreated, ApiError>
where
    S: LeagueService + Sync,
{
    info!(league_name = %request.league_name, "Creating league");
    service.create(request).await.map_err(|e| {
        warn!(error = %e, league_name = %request.league_name, "League creation failed");
        translate_service_error(&e)
    })
}

/// Records the created league on the session and builds the response.
///
/// # Errors
///
/// Returns an error if the session was created in the meantime.
pub fn finish_submission(
    session: &WizardSession,
    created: LeagueCreated,
    config: &ServiceConfig,
) -> Result<(WizardSession, SubmitResponse), ApiError> {
    let invite_code: String = created.invite_code.to_string();
    let next: WizardSession =
        complete_submission(session, created).map_err(translate_core_error)?;

    let response: SubmitResponse = SubmitResponse {
        invite_url: format!("{}/join/{invite_code}", config.app_url.trim_end_matches('/')),
        message: format!("League '{}' created", next.league_name),
        league_name: next.league_name.clone(),
        invite_code,
    };
    Ok((next, response))
}
