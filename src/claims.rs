//! Claims ("siniestros")

use std::fmt;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    listing::Searchable,
    routes::ClaimId,
    validation::{ValidationError, require},
};

/// Claim types offered by the creation form.
pub const CLAIM_TYPES: [&str; 6] = ["Automóvil", "Hogar", "Vida", "Salud", "Negocio", "Otro"];

/// Colour family a status or priority is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Informational.
    Info,

    /// Needs attention.
    Warning,

    /// Done or low risk.
    Success,

    /// Urgent.
    Error,

    /// No particular meaning.
    Neutral,
}

/// Processing status of a claim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ClaimStatus {
    /// `Nuevo`
    #[default]
    New,

    /// `En Proceso`
    InProgress,

    /// `Resuelto`
    Resolved,

    /// `Cerrado`
    Closed,

    /// Any status the server knows and this client does not.
    Other(String),
}

impl ClaimStatus {
    /// Every status the creation form offers.
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Resolved, Self::Closed];

    /// Label used on the wire and in views.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "Nuevo",
            Self::InProgress => "En Proceso",
            Self::Resolved => "Resuelto",
            Self::Closed => "Cerrado",
            Self::Other(other) => other,
        }
    }

    /// Rendering tone.
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::New => Tone::Info,
            Self::InProgress => Tone::Warning,
            Self::Resolved => Tone::Success,
            Self::Closed | Self::Other(_) => Tone::Neutral,
        }
    }
}

impl From<&str> for ClaimStatus {
    fn from(value: &str) -> Self {
        match value {
            "Nuevo" => Self::New,
            "En Proceso" => Self::InProgress,
            "Resuelto" => Self::Resolved,
            "Cerrado" => Self::Closed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<Option<String>> for ClaimStatus {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from).unwrap_or_default()
    }
}

impl From<ClaimStatus> for String {
    fn from(value: ClaimStatus) -> Self {
        match value {
            ClaimStatus::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling priority of a claim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ClaimPriority {
    /// `Alta`
    High,

    /// `Media`
    #[default]
    Medium,

    /// `Baja`
    Low,

    /// Any priority the server knows and this client does not.
    Other(String),
}

impl ClaimPriority {
    /// Every priority the creation form offers.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Label used on the wire and in views.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
            Self::Other(other) => other,
        }
    }

    /// Rendering tone.
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Error,
            Self::Medium => Tone::Warning,
            Self::Low => Tone::Success,
            Self::Other(_) => Tone::Neutral,
        }
    }
}

impl From<&str> for ClaimPriority {
    fn from(value: &str) -> Self {
        match value {
            "Alta" => Self::High,
            "Media" => Self::Medium,
            "Baja" => Self::Low,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<Option<String>> for ClaimPriority {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from).unwrap_or_default()
    }
}

impl From<ClaimPriority> for String {
    fn from(value: ClaimPriority) -> Self {
        match value {
            ClaimPriority::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ClaimPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim as returned by the API server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Server-side identifier.
    pub id: ClaimId,

    /// User who reported the claim.
    pub owner_id: i64,

    /// Policy number.
    #[serde(rename = "numero_poliza", default)]
    pub policy_number: String,

    /// Insured party.
    #[serde(rename = "asegurado", default)]
    pub insured: String,

    /// Claim type, e.g. `Hogar`.
    #[serde(rename = "tipo_siniestro", default)]
    pub claim_type: String,

    /// Free-form description.
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    /// Processing status.
    #[serde(rename = "estado", default)]
    pub status: ClaimStatus,

    /// Handling priority.
    #[serde(rename = "prioridad", default)]
    pub priority: ClaimPriority,

    /// When the incident happened.
    #[serde(rename = "fecha_siniestro")]
    pub incident_date: DateTime,

    /// When the claim was reported.
    #[serde(rename = "fecha_reporte")]
    pub reported_at: DateTime,
}

impl Searchable for Claim {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.policy_number.as_str(),
            self.insured.as_str(),
            self.claim_type.as_str(),
        ]
        .into_iter()
    }
}

/// Payload for creating a claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewClaim {
    /// Policy number.
    #[serde(rename = "numero_poliza")]
    pub policy_number: String,

    /// Insured party.
    #[serde(rename = "asegurado")]
    pub insured: String,

    /// Claim type, usually one of [`CLAIM_TYPES`].
    #[serde(rename = "tipo_siniestro")]
    pub claim_type: String,

    /// Free-form description.
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Initial status, `Nuevo` unless set.
    #[serde(rename = "estado")]
    pub status: ClaimStatus,

    /// Initial priority, `Media` unless set.
    #[serde(rename = "prioridad")]
    pub priority: ClaimPriority,
}

impl NewClaim {
    /// Check the fields the creation form requires.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] for the first blank required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("policy number", &self.policy_number)?;
        require("insured party", &self.insured)?;
        require("claim type", &self.claim_type)?;
        require("description", &self.description)?;

        Ok(())
    }
}

/// Partial claim update. Unset fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimUpdate {
    /// New policy number.
    #[serde(rename = "numero_poliza", skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,

    /// New insured party.
    #[serde(rename = "asegurado", skip_serializing_if = "Option::is_none")]
    pub insured: Option<String>,

    /// New claim type.
    #[serde(rename = "tipo_siniestro", skip_serializing_if = "Option::is_none")]
    pub claim_type: Option<String>,

    /// New description.
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New status.
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<ClaimStatus>,

    /// New priority.
    #[serde(rename = "prioridad", skip_serializing_if = "Option::is_none")]
    pub priority: Option<ClaimPriority>,
}

impl ClaimUpdate {
    /// `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Dashboard counters over a set of claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClaimStats {
    /// Number of claims.
    pub total: usize,

    /// Claims with status `Nuevo`.
    pub new: usize,

    /// Claims with status `En Proceso`.
    pub in_progress: usize,

    /// Claims with status `Resuelto`.
    pub resolved: usize,

    /// Claims with priority `Alta`.
    pub high: usize,

    /// Claims with priority `Media`.
    pub medium: usize,

    /// Claims with priority `Baja`.
    pub low: usize,
}

impl ClaimStats {
    /// Count claims by status and priority.
    #[must_use]
    pub fn from_claims(claims: &[Claim]) -> Self {
        claims.iter().fold(
            Self {
                total: claims.len(),
                ..Self::default()
            },
            |mut stats, claim| {
                match claim.status {
                    ClaimStatus::New => stats.new += 1,
                    ClaimStatus::InProgress => stats.in_progress += 1,
                    ClaimStatus::Resolved => stats.resolved += 1,
                    ClaimStatus::Closed | ClaimStatus::Other(_) => {}
                }

                match claim.priority {
                    ClaimPriority::High => stats.high += 1,
                    ClaimPriority::Medium => stats.medium += 1,
                    ClaimPriority::Low => stats.low += 1,
                    ClaimPriority::Other(_) => {}
                }

                stats
            },
        )
    }
}
