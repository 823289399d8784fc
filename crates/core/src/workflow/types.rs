//! Engagement workflow domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Engagement review status.
///
/// The forward order of an engagement's life is:
/// Draft → Pending Review → Under Review → Approved → Completed.
/// Transitions are gated by role permission, not by adjacency; see
/// [`super::WorkflowService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementStatus {
    /// Being drafted by a junior auditor; editable.
    Draft,
    /// Submitted and waiting for a reviewer.
    #[serde(rename = "Pending Review")]
    PendingReview,
    /// A manager or partner is reviewing the file.
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Review sign-off given.
    Approved,
    /// Archived; terminal in the forward order.
    Completed,
}

impl EngagementStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingReview => "Pending Review",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Completed => "Completed",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending review" => Some(Self::PendingReview),
            "under review" => Some(Self::UnderReview),
            "approved" => Some(Self::Approved),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Returns true for the final status of the forward order.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for EngagementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actor role on an engagement team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementRole {
    /// Prepares engagements and submits them for review.
    Junior,
    /// Reviews and approves engagements.
    Manager,
    /// Signs engagements off, including final completion.
    Partner,
}

impl EngagementRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Manager => "Manager",
            Self::Partner => "Partner",
        }
    }

    /// Parses a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "junior" => Some(Self::Junior),
            "manager" => Some(Self::Manager),
            "partner" => Some(Self::Partner),
            _ => None,
        }
    }

    /// The statuses this role may set an engagement to, regardless of the
    /// engagement's current status.
    ///
    /// A junior may only submit (set Pending Review); managers review and
    /// approve; only partners complete. No role re-opens a draft.
    #[must_use]
    pub fn allowed_targets(&self) -> &'static [EngagementStatus] {
        match self {
            Self::Junior => &[EngagementStatus::PendingReview],
            Self::Manager => &[
                EngagementStatus::PendingReview,
                EngagementStatus::UnderReview,
                EngagementStatus::Approved,
            ],
            Self::Partner => &[
                EngagementStatus::PendingReview,
                EngagementStatus::UnderReview,
                EngagementStatus::Approved,
                EngagementStatus::Completed,
            ],
        }
    }
}

impl fmt::Display for EngagementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of audit engagement offered to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementType {
    /// Statutory audit.
    #[serde(rename = "Statutory Audit")]
    Statutory,
    /// NGO audit.
    #[serde(rename = "NGO Audit")]
    Ngo,
    /// Government audit.
    #[serde(rename = "Government Audit")]
    Government,
    /// Internal audit.
    #[serde(rename = "Internal Audit")]
    Internal,
}

impl EngagementType {
    /// Returns the string representation of the engagement type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statutory => "Statutory Audit",
            Self::Ngo => "NGO Audit",
            Self::Government => "Government Audit",
            Self::Internal => "Internal Audit",
        }
    }

    /// Parses an engagement type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "statutory audit" => Some(Self::Statutory),
            "ngo audit" => Some(Self::Ngo),
            "government audit" => Some(Self::Government),
            "internal audit" => Some(Self::Internal),
            _ => None,
        }
    }
}

impl fmt::Display for EngagementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An audit engagement for a client year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    /// Unique identifier.
    pub id: Uuid,
    /// The client this engagement belongs to.
    pub client_id: Uuid,
    /// Financial year under audit.
    pub year: String,
    /// Kind of engagement.
    pub engagement_type: EngagementType,
    /// Current review status.
    pub status: EngagementStatus,
    /// When the engagement was created.
    pub created_at: DateTime<Utc>,
    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

impl Engagement {
    /// Creates a new engagement in `Draft`.
    #[must_use]
    pub fn draft(client_id: Uuid, year: String, engagement_type: EngagementType) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_id,
            year,
            engagement_type,
            status: EngagementStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }
}
