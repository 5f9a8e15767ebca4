// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League rules and the field-level update contract.
//!
//! `Settings` is treated as an immutable snapshot: [`Settings::apply`] returns a new
//! value with exactly one field path replaced. Raw text input from the rules screen
//! goes through [`SettingsField::coerce`], which never fails. Malformed or
//! out-of-domain numbers fall back to a fixed per-field default, not to the previous
//! value.
//!
//! No cross-field rule is enforced here (a roster minimum above its maximum is
//! representable). See [`crate::validate_settings`] for the advisory checks.

use crate::error::DomainError;
use crate::types::{DraftOrder, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Maximum number of entries of one tier a roster may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TierCap {
    /// No cap. Encoded as `-1` on the wire.
    Unlimited,
    /// At most this many.
    Max(u32),
}

impl TierCap {
    /// Wire sentinel for [`TierCap::Unlimited`].
    pub const UNLIMITED: i64 = -1;

    /// Returns whether `count` entries are within this cap.
    #[must_use]
    pub const fn allows(&self, count: u32) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Max(max) => count <= *max,
        }
    }
}

impl TryFrom<i64> for TierCap {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == Self::UNLIMITED {
            return Ok(Self::Unlimited);
        }
        u32::try_from(value)
            .map(Self::Max)
            .map_err(|_| DomainError::InvalidTierCap(value))
    }
}

impl From<TierCap> for i64 {
    fn from(cap: TierCap) -> Self {
        match cap {
            TierCap::Unlimited => TierCap::UNLIMITED,
            TierCap::Max(max) => Self::from(max),
        }
    }
}

impl std::fmt::Display for TierCap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlimited => f.write_str("No limit"),
            Self::Max(max) => write!(f, "Max {max}"),
        }
    }
}

/// One row of a [`TierTable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierValue<V> {
    /// The tier this row applies to.
    pub tier: Tier,
    /// The value for the tier.
    pub value: V,
}

/// A tier-keyed table that preserves the order tiers were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable<V> {
    rows: Vec<TierValue<V>>,
}

impl<V> TierTable<V> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Looks up the value for `tier`.
    #[must_use]
    pub fn get(&self, tier: &Tier) -> Option<&V> {
        self.rows
            .iter()
            .find(|row| &row.tier == tier)
            .map(|row| &row.value)
    }

    /// Replaces the value for `tier`, appending a new row if the tier is not present.
    pub fn set(&mut self, tier: Tier, value: V) {
        match self.rows.iter_mut().find(|row| row.tier == tier) {
            Some(row) => row.value = value,
            None => self.rows.push(TierValue { tier, value }),
        }
    }

    /// Tiers in declaration order.
    pub fn tiers(&self) -> impl Iterator<Item = &Tier> {
        self.rows.iter().map(|row| &row.tier)
    }

    /// Rows in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tier, &V)> {
        self.rows.iter().map(|row| (&row.tier, &row.value))
    }

    /// Number of tiers in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<V> Default for TierTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(Tier, V)> for TierTable<V> {
    fn from_iter<I: IntoIterator<Item = (Tier, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (tier, value) in iter {
            table.set(tier, value);
        }
        table
    }
}

/// Per-roster size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterSize {
    /// Minimum roster size.
    pub min: u32,
    /// Maximum roster size.
    pub max: u32,
}

/// A declared conditional cap.
///
/// Carried through unchanged; nothing in this workspace evaluates `condition`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionalTierCap {
    /// Free-form condition text.
    pub condition: String,
    /// The tier the cap would apply to.
    pub tier: Tier,
    /// The cap that would replace the tier's normal cap.
    pub new_cap: TierCap,
}

/// Trade allowances for a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TradeLimits {
    /// Free agent pickups.
    pub free_agent: u32,
    /// Trades between coaches.
    pub coach_to_coach: u32,
    /// Trades allowed during the grace period.
    pub grace_period: u32,
    /// Mega trades per season.
    pub mega_trades_per_season: u32,
}

impl TradeLimits {
    /// Returns the limit named by `kind`.
    #[must_use]
    pub const fn get(&self, kind: TradeLimitKind) -> u32 {
        match kind {
            TradeLimitKind::FreeAgent => self.free_agent,
            TradeLimitKind::CoachToCoach => self.coach_to_coach,
            TradeLimitKind::GracePeriod => self.grace_period,
            TradeLimitKind::MegaTradesPerSeason => self.mega_trades_per_season,
        }
    }

    const fn with(mut self, kind: TradeLimitKind, value: u32) -> Self {
        match kind {
            TradeLimitKind::FreeAgent => self.free_agent = value,
            TradeLimitKind::CoachToCoach => self.coach_to_coach = value,
            TradeLimitKind::GracePeriod => self.grace_period = value,
            TradeLimitKind::MegaTradesPerSeason => self.mega_trades_per_season = value,
        }
        self
    }
}

/// Names one of the [`TradeLimits`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeLimitKind {
    /// Pickups from the unclaimed pool.
    FreeAgent,
    /// Trades between two coaches.
    CoachToCoach,
    /// Free drops right after the draft.
    GracePeriod,
    /// Trades involving a mega form.
    MegaTradesPerSeason,
}

impl FromStr for TradeLimitKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free_agent" => Ok(Self::FreeAgent),
            "coach_to_coach" => Ok(Self::CoachToCoach),
            "grace_period" => Ok(Self::GracePeriod),
            "mega_trades_per_season" => Ok(Self::MegaTradesPerSeason),
            _ => Err(DomainError::UnknownTradeLimit(s.to_string())),
        }
    }
}

/// A banned ability on a specific species.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BannedAbilityCombo {
    /// The species name.
    pub pokemon: String,
    /// The ability it may not run.
    pub ability: String,
}

/// The complete rules object for a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Points each coach may spend during the draft.
    pub budget: u32,
    /// Roster size bounds.
    pub roster_size: RosterSize,
    /// Per-tier roster caps.
    pub tier_caps: TierTable<TierCap>,
    /// Per-tier point costs.
    pub tier_points: TierTable<u32>,
    /// Declared conditional caps (opaque).
    pub conditional_tier_caps: Vec<ConditionalTierCap>,
    /// Draft turn order.
    pub draft_order: DraftOrder,
    /// Regular season length in weeks.
    pub week_count: u32,
    /// Trade allowances.
    pub trade_limits: TradeLimits,
    /// Last week in which trades are accepted.
    pub trade_cutoff_week: u32,
    /// Hours after the draft during which grace-period trades are allowed.
    pub grace_period_hours: u32,
    /// Seconds each coach has to make a pick.
    pub pick_timer_seconds: u32,
    /// Banned moves.
    pub banned_moves: BTreeSet<String>,
    /// Banned abilities.
    pub banned_abilities: BTreeSet<String>,
    /// Banned species/ability pairs.
    pub banned_ability_combos: BTreeSet<BannedAbilityCombo>,
    /// Banned held items.
    pub banned_items: BTreeSet<String>,
    /// At most one form of each base species per roster.
    pub species_clause: bool,
}

/// A replacement for exactly one field path of [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SettingsUpdate {
    /// Points each coach may spend.
    Budget(u32),
    /// Fewest entries a roster may hold.
    RosterMin(u32),
    /// Most entries a roster may hold.
    RosterMax(u32),
    /// Cap for one tier.
    TierCap {
        /// Tier whose cap changes.
        tier: Tier,
        /// The new cap.
        cap: TierCap,
    },
    /// Point cost for one tier.
    TierPoints {
        /// Tier whose cost changes.
        tier: Tier,
        /// The new cost.
        points: u32,
    },
    /// The whole conditional cap list.
    ConditionalTierCaps(Vec<ConditionalTierCap>),
    /// Turn order of the draft.
    DraftOrder(DraftOrder),
    /// Regular season length in weeks.
    WeekCount(u32),
    /// One of the trade limits.
    TradeLimit {
        /// Which limit changes.
        kind: TradeLimitKind,
        /// The new limit.
        limit: u32,
    },
    /// Last week trades are allowed.
    TradeCutoffWeek(u32),
    /// Length of the post-draft grace period.
    GracePeriodHours(u32),
    /// Seconds each coach has per pick.
    PickTimerSeconds(u32),
    /// The banned move list.
    BannedMoves(BTreeSet<String>),
    /// The banned ability list.
    BannedAbilities(BTreeSet<String>),
    /// The banned ability combinations.
    BannedAbilityCombos(BTreeSet<BannedAbilityCombo>),
    /// The banned item list.
    BannedItems(BTreeSet<String>),
    /// Whether the species clause applies.
    SpeciesClause(bool),
}

impl Settings {
    /// Produces new settings with the single field named by `update` replaced.
    ///
    /// Every other field is copied unchanged. No validation is performed.
    #[must_use]
    pub fn apply(&self, update: SettingsUpdate) -> Self {
        let mut next: Self = self.clone();
        match update {
            SettingsUpdate::Budget(budget) => next.budget = budget,
            SettingsUpdate::RosterMin(min) => next.roster_size.min = min,
            SettingsUpdate::RosterMax(max) => next.roster_size.max = max,
            SettingsUpdate::TierCap { tier, cap } => next.tier_caps.set(tier, cap),
            SettingsUpdate::TierPoints { tier, points } => next.tier_points.set(tier, points),
            SettingsUpdate::ConditionalTierCaps(caps) => next.conditional_tier_caps = caps,
            SettingsUpdate::DraftOrder(order) => next.draft_order = order,
            SettingsUpdate::WeekCount(weeks) => next.week_count = weeks,
            SettingsUpdate::TradeLimit { kind, limit } => {
                next.trade_limits = next.trade_limits.with(kind, limit);
            }
            SettingsUpdate::TradeCutoffWeek(week) => next.trade_cutoff_week = week,
            SettingsUpdate::GracePeriodHours(hours) => next.grace_period_hours = hours,
            SettingsUpdate::PickTimerSeconds(seconds) => next.pick_timer_seconds = seconds,
            SettingsUpdate::BannedMoves(moves) => next.banned_moves = moves,
            SettingsUpdate::BannedAbilities(abilities) => next.banned_abilities = abilities,
            SettingsUpdate::BannedAbilityCombos(combos) => next.banned_ability_combos = combos,
            SettingsUpdate::BannedItems(items) => next.banned_items = items,
            SettingsUpdate::SpeciesClause(enabled) => next.species_clause = enabled,
        }
        next
    }
}

/// A numeric settings field edited through free-text input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum SettingsField {
    /// Budget.
    Budget,
    /// Roster minimum.
    RosterMin,
    /// Roster maximum.
    RosterMax,
    /// Pick timer, in seconds.
    PickTimerSeconds,
    /// Season length, in weeks.
    WeekCount,
    /// Trade cutoff week.
    TradeCutoffWeek,
    /// Grace period, in hours.
    GracePeriodHours,
    /// One trade limit.
    TradeLimit {
        /// Which limit.
        kind: TradeLimitKind,
    },
    /// Cap of one tier.
    TierCap {
        /// Which tier.
        tier: Tier,
    },
    /// Point cost of one tier.
    TierPoints {
        /// Which tier.
        tier: Tier,
    },
}

impl SettingsField {
    /// The value used when input is empty, malformed or outside the field's domain.
    ///
    /// | Field | Fallback |
    /// |---|---|
    /// | budget | 0 |
    /// | roster min / max | 6 / 12 |
    /// | pick timer | 120 |
    /// | week count | 10 |
    /// | trade cutoff week | 8 |
    /// | grace period hours | 24 |
    /// | trade limits, tier caps, tier points | 0 |
    #[must_use]
    pub const fn fallback(&self) -> u32 {
        match self {
            Self::Budget | Self::TradeLimit { .. } | Self::TierCap { .. } | Self::TierPoints { .. } => 0,
            Self::RosterMin => 6,
            Self::RosterMax => 12,
            Self::PickTimerSeconds => 120,
            Self::WeekCount => 10,
            Self::TradeCutoffWeek => 8,
            Self::GracePeriodHours => 24,
        }
    }

    /// Whether zero is accepted as typed, rather than replaced by the fallback.
    const fn accepts_zero(&self) -> bool {
        matches!(
            self,
            Self::Budget | Self::TradeLimit { .. } | Self::TierCap { .. } | Self::TierPoints { .. }
        )
    }

    /// Coerces raw text input into an update for this field.
    ///
    /// Parsing reads an optional sign followed by leading digits and ignores any
    /// trailing characters (`"12abc"` reads as 12). Negative values fall back,
    /// except `-1` for a tier cap, which means unlimited.
    #[must_use]
    pub fn coerce(&self, raw: &str) -> SettingsUpdate {
        let parsed: Option<i64> = parse_leading_int(raw);

        if let (Self::TierCap { tier }, Some(TierCap::UNLIMITED)) = (self, parsed) {
            return SettingsUpdate::TierCap {
                tier: tier.clone(),
                cap: TierCap::Unlimited,
            };
        }

        let value: u32 = parsed
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v > 0 || self.accepts_zero())
            .unwrap_or_else(|| self.fallback());

        self.update_with(value)
    }

    fn update_with(&self, value: u32) -> SettingsUpdate {
        match self {
            Self::Budget => SettingsUpdate::Budget(value),
            Self::RosterMin => SettingsUpdate::RosterMin(value),
            Self::RosterMax => SettingsUpdate::RosterMax(value),
            Self::PickTimerSeconds => SettingsUpdate::PickTimerSeconds(value),
            Self::WeekCount => SettingsUpdate::WeekCount(value),
            Self::TradeCutoffWeek => SettingsUpdate::TradeCutoffWeek(value),
            Self::GracePeriodHours => SettingsUpdate::GracePeriodHours(value),
            Self::TradeLimit { kind } => SettingsUpdate::TradeLimit {
                kind: *kind,
                limit: value,
            },
            Self::TierCap { tier } => SettingsUpdate::TierCap {
                tier: tier.clone(),
                cap: TierCap::Max(value),
            },
            Self::TierPoints { tier } => SettingsUpdate::TierPoints {
                tier: tier.clone(),
                points: value,
            },
        }
    }
}

/// Reads an optionally signed run of leading ASCII digits, skipping leading whitespace.
///
/// Returns `None` when no digit is present or the value overflows `i64`.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed: &str = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end: usize = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
