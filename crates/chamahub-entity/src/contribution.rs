//! Contribution entity: a recorded periodic payment into the chama fund.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contribution_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ContributionStatus {
    /// Expected but not yet received.
    Pending,
    /// Received and counted in every financial aggregate.
    Paid,
    /// Past due; excluded from totals until paid.
    Overdue,
}

/// A member's contribution for one month.
///
/// Immutable once `Paid`, except through privileged correction outside
/// this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contribution {
    /// Unique contribution identifier.
    pub id: Uuid,
    /// Membership this contribution belongs to.
    pub membership_id: Uuid,
    /// Contribution amount.
    pub amount: Decimal,
    /// Current status.
    pub status: ContributionStatus,
    /// Contribution month (1-12).
    pub month: i32,
    /// Contribution year.
    pub year: i32,
    /// How the payment was made (e.g. `"MPESA"`, `"BANK"`, `"CASH"`).
    pub payment_method: Option<String>,
    /// When the payment was recorded.
    pub paid_at: Option<DateTime<Utc>>,
    /// Late penalty applied on top of the amount.
    pub penalty_applied: Decimal,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

/// Flattened contribution row used by the contributions report and exports.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContributionReportRow {
    /// Display name of the contributing member.
    pub member_name: String,
    /// Contribution amount.
    pub amount: Decimal,
    /// Penalty applied.
    pub penalty_applied: Decimal,
    /// Contribution month (1-12).
    pub month: i32,
    /// Contribution year.
    pub year: i32,
    /// Payment method.
    pub payment_method: Option<String>,
    /// When the payment was recorded.
    pub paid_at: Option<DateTime<Utc>>,
}
