//! Membership entity: a user's role-scoped participation in one chama.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Roles available within a chama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberRole {
    /// Full group administrator.
    Admin,
    /// Manages the fund: contributions, loans, reports.
    Treasurer,
    /// Keeps minutes and schedules meetings.
    Secretary,
    /// Regular member.
    Member,
}

impl MemberRole {
    /// Return the role as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Treasurer => "TREASURER",
            Self::Secretary => "SECRETARY",
            Self::Member => "MEMBER",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = chamahub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "TREASURER" => Ok(Self::Treasurer),
            "SECRETARY" => Ok(Self::Secretary),
            "MEMBER" => Ok(Self::Member),
            _ => Err(chamahub_core::AppError::validation(format!(
                "Invalid member role: '{s}'. Expected one of: ADMIN, TREASURER, SECRETARY, MEMBER"
            ))),
        }
    }
}

/// Links a user to a chama with a role.
///
/// `is_active` gates inclusion in aggregate reports: inactive memberships
/// keep their history but drop out of the member performance rollup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// Unique membership identifier.
    pub id: Uuid,
    /// The participating user.
    pub user_id: Uuid,
    /// The chama the user belongs to.
    pub chama_id: Uuid,
    /// Role within the chama.
    pub role: MemberRole,
    /// Whether the membership is currently active.
    pub is_active: bool,
    /// When the user joined.
    pub joined_at: DateTime<Utc>,
}

/// Per-membership rollup for the member performance report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MemberPerformanceRow {
    /// Membership identifier.
    pub membership_id: Uuid,
    /// Display name of the member.
    pub member_name: String,
    /// Role within the chama.
    pub role: MemberRole,
    /// Number of PAID contributions.
    pub contribution_count: i64,
    /// Summed PAID contribution amount.
    pub contribution_total: Decimal,
    /// Number of loans ever taken.
    pub loan_count: i64,
    /// Summed loan principal.
    pub loan_principal_total: Decimal,
    /// Number of currently ACTIVE loans.
    pub active_loan_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!("treasurer".parse::<MemberRole>().unwrap(), MemberRole::Treasurer);
        assert_eq!("MEMBER".parse::<MemberRole>().unwrap(), MemberRole::Member);
        assert!("chairman".parse::<MemberRole>().is_err());
    }
}
