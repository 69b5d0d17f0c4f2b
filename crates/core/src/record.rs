//! Inventory record types
//!
//! A [`Record`] is one vehicle in the inventory. Rental state is embedded in
//! the free-form `status` field: either the literal [`AVAILABLE`] or a
//! "rented by" marker produced by [`rented_status`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status literal for a vehicle that can be rented
pub const AVAILABLE: &str = "Available";

/// Status string recorded when a vehicle is rented by `user_id`
pub fn rented_status(user_id: &str) -> String {
    format!("Rented by the user ID: {}", user_id)
}

/// The enumerated vehicle conditions
///
/// The canonical on-disk tokens are `excellent`, `good`, `fair`,
/// `minordamages` and `majordamages`. The hyphenated spellings
/// `minor-damage` and `major-damage` are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Like new
    Excellent,
    /// Normal wear
    Good,
    /// Visible wear
    Fair,
    /// Small dents or scratches
    #[serde(rename = "minordamages", alias = "minor-damage")]
    MinorDamage,
    /// Significant body or mechanical damage
    #[serde(rename = "majordamages", alias = "major-damage")]
    MajorDamage,
}

impl Condition {
    /// Every condition, best first
    pub const ALL: [Condition; 5] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::MinorDamage,
        Condition::MajorDamage,
    ];

    /// Canonical on-disk token
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::MinorDamage => "minordamages",
            Condition::MajorDamage => "majordamages",
        }
    }

    /// Resolve a token (canonical or alias) to a condition
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "excellent" => Some(Condition::Excellent),
            "good" => Some(Condition::Good),
            "fair" => Some(Condition::Fair),
            "minordamages" | "minor-damage" => Some(Condition::MinorDamage),
            "majordamages" | "major-damage" => Some(Condition::MajorDamage),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::from_token(s).ok_or_else(|| format!("unknown condition: {}", s))
    }
}

/// One vehicle in the inventory
///
/// The condition is kept as the token it was read or constructed with, so a
/// record written back to disk is byte-for-byte what was parsed. Use
/// [`Record::condition_kind`] for the typed view.
///
/// Invariants (checked by [`RecordValidator`](crate::RecordValidator), not
/// by construction):
/// - `id` and `model` are non-empty
/// - `condition` resolves to a [`Condition`]
/// - `price_per_day` is finite and greater than zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, the repository key
    pub id: String,
    /// Display name of the model
    pub model: String,
    /// Condition token
    pub condition: String,
    /// Daily rental price
    pub price_per_day: f64,
    /// [`AVAILABLE`] or a rented-by marker
    pub status: String,
}

impl Record {
    /// Create an available record
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        condition: Condition,
        price_per_day: f64,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            condition: condition.as_str().to_string(),
            price_per_day,
            status: AVAILABLE.to_string(),
        }
    }

    /// Replace the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Typed condition, `None` if the token is not an enumerated condition
    pub fn condition_kind(&self) -> Option<Condition> {
        Condition::from_token(&self.condition)
    }

    /// Whether the status is exactly [`AVAILABLE`]
    pub fn is_available(&self) -> bool {
        self.status == AVAILABLE
    }
}
