//! Repository implementations over the PostgreSQL pool.
//!
//! Aggregate queries use `COALESCE(SUM(...), 0)` throughout: an empty match
//! set yields a zero total, never NULL. Scoping always goes through the
//! membership join so every financial row resolves to exactly one chama.

pub mod audit;
pub mod contribution;
pub mod loan;
pub mod membership;

pub use audit::AuditLogRepository;
pub use contribution::ContributionRepository;
pub use loan::LoanRepository;
pub use membership::MembershipRepository;
