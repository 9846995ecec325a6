//! Audit log entities: immutable records of state-changing actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use chamahub_core::types::DateWindow;

/// The enumerated audit action vocabulary.
///
/// Filter tokens outside this vocabulary are silently dropped rather than
/// failing the whole filter; see [`AuditAction::parse_set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    UserLogin,
    MemberJoined,
    MemberRemoved,
    RoleChanged,
    ContributionRecorded,
    ContributionCorrected,
    LoanRequested,
    LoanApproved,
    LoanRejected,
    LoanDisbursed,
    LoanRepaymentRecorded,
    LoanDefaulted,
    MeetingScheduled,
    NotificationSent,
    ReportExported,
}

impl AuditAction {
    /// Canonical token stored in the `audit_logs.action` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserLogin => "USER_LOGIN",
            Self::MemberJoined => "MEMBER_JOINED",
            Self::MemberRemoved => "MEMBER_REMOVED",
            Self::RoleChanged => "ROLE_CHANGED",
            Self::ContributionRecorded => "CONTRIBUTION_RECORDED",
            Self::ContributionCorrected => "CONTRIBUTION_CORRECTED",
            Self::LoanRequested => "LOAN_REQUESTED",
            Self::LoanApproved => "LOAN_APPROVED",
            Self::LoanRejected => "LOAN_REJECTED",
            Self::LoanDisbursed => "LOAN_DISBURSED",
            Self::LoanRepaymentRecorded => "LOAN_REPAYMENT_RECORDED",
            Self::LoanDefaulted => "LOAN_DEFAULTED",
            Self::MeetingScheduled => "MEETING_SCHEDULED",
            Self::NotificationSent => "NOTIFICATION_SENT",
            Self::ReportExported => "REPORT_EXPORTED",
        }
    }

    /// Parse a set of action tokens, dropping unrecognized ones.
    ///
    /// An unknown token never fails the filter; it simply does not
    /// constrain it.
    pub fn parse_set<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<AuditAction> {
        tokens
            .into_iter()
            .filter_map(|t| t.trim().parse().ok())
            .collect()
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = chamahub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER_LOGIN" => Ok(Self::UserLogin),
            "MEMBER_JOINED" => Ok(Self::MemberJoined),
            "MEMBER_REMOVED" => Ok(Self::MemberRemoved),
            "ROLE_CHANGED" => Ok(Self::RoleChanged),
            "CONTRIBUTION_RECORDED" => Ok(Self::ContributionRecorded),
            "CONTRIBUTION_CORRECTED" => Ok(Self::ContributionCorrected),
            "LOAN_REQUESTED" => Ok(Self::LoanRequested),
            "LOAN_APPROVED" => Ok(Self::LoanApproved),
            "LOAN_REJECTED" => Ok(Self::LoanRejected),
            "LOAN_DISBURSED" => Ok(Self::LoanDisbursed),
            "LOAN_REPAYMENT_RECORDED" => Ok(Self::LoanRepaymentRecorded),
            "LOAN_DEFAULTED" => Ok(Self::LoanDefaulted),
            "MEETING_SCHEDULED" => Ok(Self::MeetingScheduled),
            "NOTIFICATION_SENT" => Ok(Self::NotificationSent),
            "REPORT_EXPORTED" => Ok(Self::ReportExported),
            _ => Err(chamahub_core::AppError::validation(format!(
                "Unknown audit action: '{s}'"
            ))),
        }
    }
}

/// An immutable audit log entry. Never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The action that was performed, as its canonical token.
    pub action: String,
    /// The user who performed the action.
    pub user_id: Uuid,
    /// The affected resource, if any.
    pub target_id: Option<Uuid>,
    /// The chama the action is scoped to, if any.
    pub chama_id: Option<Uuid>,
    /// Additional details about the action (JSON).
    pub payload: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a new audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditLogEntry {
    /// The action performed.
    pub action: AuditAction,
    /// The acting user.
    pub user_id: Uuid,
    /// The affected resource.
    pub target_id: Option<Uuid>,
    /// Chama scope.
    pub chama_id: Option<Uuid>,
    /// Additional details.
    pub payload: Option<serde_json::Value>,
}

/// Conjunctive filter over audit log entries. Every field is optional; an
/// empty filter matches all entries.
#[derive(Debug, Clone, Default)]
pub struct AuditLogFilter {
    /// Restrict to one chama.
    pub chama_id: Option<Uuid>,
    /// Restrict to one actor.
    pub user_id: Option<Uuid>,
    /// Restrict to one target resource.
    pub target_id: Option<Uuid>,
    /// Restrict to a set of actions; empty means no action constraint.
    pub actions: Vec<AuditAction>,
    /// Restrict to a created_at window.
    pub window: DateWindow,
}

impl AuditLogFilter {
    /// Filter scoped to a single chama, used by the per-chama audit trail.
    pub fn for_chama(chama_id: Uuid) -> Self {
        Self {
            chama_id: Some(chama_id),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_drops_unknown_tokens() {
        let actions = AuditAction::parse_set(["LOAN_APPROVED", "bogus", " user_login "]);
        assert_eq!(actions, vec![AuditAction::LoanApproved, AuditAction::UserLogin]);
    }

    #[test]
    fn test_parse_set_all_unknown_is_empty() {
        assert!(AuditAction::parse_set(["x", "y"]).is_empty());
    }

    #[test]
    fn test_token_round_trip() {
        for action in [
            AuditAction::UserLogin,
            AuditAction::ContributionRecorded,
            AuditAction::LoanRepaymentRecorded,
            AuditAction::ReportExported,
        ] {
            assert_eq!(action.as_str().parse::<AuditAction>().unwrap(), action);
        }
    }
}
