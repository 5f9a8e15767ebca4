// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::gates::gate_passes;
use crate::state::{Step, WizardSession};
use draft_league_domain::{Catalog, Profile, ProfileStore};
use tracing::debug;

/// Applies a command to a session, producing the next session.
///
/// This function is pure: the input session is never modified. Commands that cannot
/// take effect return an unchanged copy and are logged at debug level. Once the
/// league has been created every command is ignored.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
/// * `catalog` - The catalog pool operations resolve ids against
/// * `profiles` - The presets `SelectProfile` chooses from
#[must_use]
pub fn apply(
    session: &WizardSession,
    command: Command,
    catalog: &Catalog,
    profiles: &ProfileStore,
) -> WizardSession {
    if session.is_created() {
        debug!(command = command.name(), "Ignoring command on created league");
        return session.clone();
    }

    let mut next: WizardSession = session.clone();
    match command {
        Command::SelectProfile { profile_id } => match profiles.select(&profile_id) {
            Some(profile) => select_profile(&mut next, profile),
            None => debug!(profile_id = %profile_id, "Ignoring unknown profile"),
        },
        Command::UpdateSettings(update) => match next.settings.as_ref() {
            Some(settings) => next.settings = Some(settings.apply(update)),
            None => debug!("Ignoring settings update before a profile is selected"),
        },
        Command::TogglePokemon { id } => {
            if !next.pool.toggle(catalog, &id) {
                debug!(id = %id, "Ignoring toggle of unknown catalog id");
            }
        }
        Command::BulkToggle { ids, enabled } => next.pool.bulk_set(catalog, &ids, enabled),
        Command::ToggleCategory { category, enabled } => {
            next.pool.set_category(catalog, category, enabled);
        }
        Command::ToggleGeneration {
            generation,
            enabled,
        } => next.pool.set_generation(catalog, generation, enabled),
        Command::ResetPool => next.pool.reset_to_default(catalog),
        Command::UpdateSchedule(update) => next.schedule = next.schedule.apply(update),
        Command::SetLeagueName { name } => next.league_name = name,
        Command::SetDescription { description } => next.description = description,
        Command::GoToStep { step } => go_to_step(&mut next, step),
        Command::Advance => advance(&mut next),
        Command::Back => match next.step.previous() {
            Some(previous) => next.step = previous,
            None => debug!("Ignoring back on the first step"),
        },
    }
    next
}

fn select_profile(session: &mut WizardSession, profile: Profile) {
    debug!(profile_id = %profile.id, "Selected profile");
    session.settings = Some(profile.settings.clone());
    session.profile = Some(profile);
}

fn go_to_step(session: &mut WizardSession, target: u8) {
    match Step::from_number(target) {
        Some(step) if step < session.step => session.step = step,
        _ => debug!(
            step = session.step.number(),
            target, "Ignoring jump that is not to an earlier step"
        ),
    }
}

fn advance(session: &mut WizardSession) {
    let current: Step = session.step;
    match current.next() {
        Some(next) if gate_passes(session, current) => session.step = next,
        _ => debug!(step = current.number(), "Step gate blocked advance"),
    }
}
