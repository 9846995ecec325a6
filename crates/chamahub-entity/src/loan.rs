//! Loan and loan payment entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a loan. Transitions are monotonic:
/// `Pending → Approved|Rejected`, `Approved → Active`,
/// `Active → Paid|Defaulted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "loan_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum LoanStatus {
    /// Requested, awaiting a decision. Excluded from disbursement totals.
    Pending,
    /// Approved but not yet disbursed.
    Approved,
    /// Rejected.
    Rejected,
    /// Disbursed with an outstanding balance.
    Active,
    /// Fully repaid.
    Paid,
    /// Written off.
    Defaulted,
}

/// Principal borrowed by a member against the chama fund.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    /// Unique loan identifier.
    pub id: Uuid,
    /// Membership the loan belongs to.
    pub membership_id: Uuid,
    /// Principal amount.
    pub amount: Decimal,
    /// Current status.
    pub status: LoanStatus,
    /// Free-form purpose.
    pub purpose: Option<String>,
    /// When the principal was paid out.
    pub disbursed_at: Option<DateTime<Utc>>,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

/// A repayment against a loan. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LoanPayment {
    /// Unique payment identifier.
    pub id: Uuid,
    /// Loan this payment belongs to.
    pub loan_id: Uuid,
    /// Payment amount.
    pub amount: Decimal,
    /// When the payment was made.
    pub paid_at: DateTime<Utc>,
}

/// One row of the loan portfolio status breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LoanStatusBreakdown {
    /// Loan status of this group.
    pub status: LoanStatus,
    /// Number of loans in the group.
    pub count: i64,
    /// Summed principal of the group.
    pub total_amount: Decimal,
}
