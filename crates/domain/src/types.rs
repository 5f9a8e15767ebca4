// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical display order for the tiers used by the standard catalog.
pub const TIER_ORDER: [&str; 11] = [
    "Mega-1", "Mega-2", "Mega-3", "A", "B", "C", "D", "E", "F", "Mythical", "UB",
];

/// A discrete draft-cost bracket (e.g. `"A"`, `"Mega-1"`).
///
/// Tiers are free-form labels; profiles may declare tiers the catalog does not use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(String);

impl Tier {
    /// Creates a new `Tier` label.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self(label.to_string())
    }

    /// Returns the tier label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Position of this tier in [`TIER_ORDER`], or `None` for non-canonical tiers.
    #[must_use]
    pub fn canonical_rank(&self) -> Option<usize> {
        TIER_ORDER.iter().position(|t| *t == self.0)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tier {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Rarity category of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Regular species.
    Standard,
    /// Legendary species.
    Legendary,
    /// Mythical species.
    Mythical,
    /// Ultra beasts.
    UltraBeast,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [
        Self::Standard,
        Self::Legendary,
        Self::Mythical,
        Self::UltraBeast,
    ];

    /// Converts this category to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legendary => "legendary",
            Self::Mythical => "mythical",
            Self::UltraBeast => "ultra_beast",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Legendary => "Legendary",
            Self::Mythical => "Mythical",
            Self::UltraBeast => "Ultra Beast",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which form of its base species an entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    /// The base form.
    Base,
    /// A mega evolution.
    Mega,
    /// A regional variant.
    Regional,
    /// Any other alternate form.
    Other,
}

impl FormType {
    /// Converts this form type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Mega => "mega",
            Self::Regional => "regional",
            Self::Other => "other",
        }
    }
}

impl FromStr for FormType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Self::Base),
            "mega" => Ok(Self::Mega),
            "regional" => Ok(Self::Regional),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::UnknownFormType(s.to_string())),
        }
    }
}

/// A game generation, `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Generation(u8);

impl Generation {
    /// Lowest valid generation.
    pub const FIRST: u8 = 1;
    /// Highest valid generation.
    pub const LAST: u8 = 9;

    /// Creates a new `Generation`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGeneration` if `value` is outside `1..=9`.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value < Self::FIRST || value > Self::LAST {
            return Err(DomainError::InvalidGeneration(value));
        }
        Ok(Self(value))
    }

    /// Builds a generation from a seed value already known to be in range.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }

    /// Returns the generation number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Iterates over every valid generation in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::FIRST..=Self::LAST).map(Self)
    }
}

impl TryFrom<u8> for Generation {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Generation> for u8 {
    fn from(generation: Generation) -> Self {
        generation.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Elemental type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonType {
    /// Normal type.
    Normal,
    /// Fire type.
    Fire,
    /// Water type.
    Water,
    /// Electric type.
    Electric,
    /// Grass type.
    Grass,
    /// Ice type.
    Ice,
    /// Fighting type.
    Fighting,
    /// Poison type.
    Poison,
    /// Ground type.
    Ground,
    /// Flying type.
    Flying,
    /// Psychic type.
    Psychic,
    /// Bug type.
    Bug,
    /// Rock type.
    Rock,
    /// Ghost type.
    Ghost,
    /// Dragon type.
    Dragon,
    /// Dark type.
    Dark,
    /// Steel type.
    Steel,
    /// Fairy type.
    Fairy,
}

impl PokemonType {
    /// All type tags in display order.
    pub const ALL: [Self; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Electric => "Electric",
            Self::Grass => "Grass",
            Self::Ice => "Ice",
            Self::Fighting => "Fighting",
            Self::Poison => "Poison",
            Self::Ground => "Ground",
            Self::Flying => "Flying",
            Self::Psychic => "Psychic",
            Self::Bug => "Bug",
            Self::Rock => "Rock",
            Self::Ghost => "Ghost",
            Self::Dragon => "Dragon",
            Self::Dark => "Dark",
            Self::Steel => "Steel",
            Self::Fairy => "Fairy",
        }
    }
}

impl FromStr for PokemonType {
    type Err = DomainError;

    /// Parses a type name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownPokemonType(s.to_string()))
    }
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One or two elemental types. Construction makes more than two unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Types {
    primary: PokemonType,
    secondary: Option<PokemonType>,
}

impl Types {
    /// A single-typed entry.
    #[must_use]
    pub const fn single(primary: PokemonType) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// A dual-typed entry.
    #[must_use]
    pub const fn dual(primary: PokemonType, secondary: PokemonType) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Returns the primary type.
    #[must_use]
    pub const fn primary(&self) -> PokemonType {
        self.primary
    }

    /// Returns the secondary type, if any.
    #[must_use]
    pub const fn secondary(&self) -> Option<PokemonType> {
        self.secondary
    }

    /// Returns whether either slot holds `pokemon_type`.
    #[must_use]
    pub fn contains(&self, pokemon_type: PokemonType) -> bool {
        self.primary == pokemon_type || self.secondary == Some(pokemon_type)
    }

    /// Iterates over the one or two types.
    pub fn iter(&self) -> impl Iterator<Item = PokemonType> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

/// Turn sequence used during the acquisition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DraftOrder {
    /// 1..N then N..1, alternating.
    #[default]
    Snake,
    /// 1..N every round.
    Linear,
    /// Open bidding against the budget.
    Auction,
}

impl DraftOrder {
    /// Converts this draft order to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Linear => "linear",
            Self::Auction => "auction",
        }
    }
}

impl FromStr for DraftOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snake" => Ok(Self::Snake),
            "linear" => Ok(Self::Linear),
            "auction" => Ok(Self::Auction),
            _ => Err(DomainError::UnknownDraftOrder(s.to_string())),
        }
    }
}

impl std::fmt::Display for DraftOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day of the week on which weekly lineups lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineDay {
    /// Sunday.
    #[default]
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl DeadlineDay {
    /// Converts this weekday to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// The matching `time::Weekday`.
    #[must_use]
    pub const fn weekday(&self) -> time::Weekday {
        match self {
            Self::Sunday => time::Weekday::Sunday,
            Self::Monday => time::Weekday::Monday,
            Self::Tuesday => time::Weekday::Tuesday,
            Self::Wednesday => time::Weekday::Wednesday,
            Self::Thursday => time::Weekday::Thursday,
            Self::Friday => time::Weekday::Friday,
            Self::Saturday => time::Weekday::Saturday,
        }
    }
}

impl FromStr for DeadlineDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            _ => Err(DomainError::UnknownDeadlineDay(s.to_string())),
        }
    }
}

/// Playoff bracket size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayoffTeams {
    /// Four-team bracket.
    Four,
    /// Six-team bracket.
    #[default]
    Six,
    /// Eight-team bracket.
    Eight,
}

impl PlayoffTeams {
    /// Number of teams in the bracket.
    #[must_use]
    pub const fn count(&self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }
}

impl TryFrom<u8> for PlayoffTeams {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            _ => Err(DomainError::InvalidPlayoffTeams(value)),
        }
    }
}

impl From<PlayoffTeams> for u8 {
    fn from(teams: PlayoffTeams) -> Self {
        teams.count()
    }
}
