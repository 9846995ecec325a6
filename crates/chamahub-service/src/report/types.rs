//! Report result types.
//!
//! All derived figures are computed in pure constructors over already-fetched
//! aggregates, so the arithmetic is testable without a database and missing
//! aggregates enter as explicit zeros, never as nulls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chamahub_entity::loan::LoanStatusBreakdown;

/// Raw aggregates fetched for one chama before derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancialAggregates {
    /// Summed PAID contribution amounts.
    pub contributions: Decimal,
    /// Summed penalties on PAID contributions.
    pub penalties: Decimal,
    /// Summed principal of loans past PENDING.
    pub loans_disbursed: Decimal,
    /// Summed loan repayments.
    pub loan_repayments: Decimal,
    /// Summed principal of ACTIVE loans.
    pub outstanding_principal: Decimal,
}

/// Overall financial position of a chama.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinancialSummary {
    /// Summed PAID contributions.
    pub total_contributions: Decimal,
    /// Summed penalties on PAID contributions.
    pub total_penalties: Decimal,
    /// Summed principal of loans past PENDING.
    pub total_loans_disbursed: Decimal,
    /// Summed loan repayments.
    pub total_loan_repayments: Decimal,
    /// Summed principal of ACTIVE loans.
    pub outstanding_loan_principal: Decimal,
    /// `(total_contributions + total_loan_repayments) − total_loans_disbursed`.
    pub net_position: Decimal,
}

impl FinancialSummary {
    /// Derive the summary from raw aggregates.
    pub fn from_aggregates(agg: FinancialAggregates) -> Self {
        Self {
            total_contributions: agg.contributions,
            total_penalties: agg.penalties,
            total_loans_disbursed: agg.loans_disbursed,
            total_loan_repayments: agg.loan_repayments,
            outstanding_loan_principal: agg.outstanding_principal,
            net_position: agg.contributions + agg.loan_repayments - agg.loans_disbursed,
        }
    }
}

/// Money moved in and out of the fund over a date window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CashflowReport {
    /// Human-readable window label.
    pub period: String,
    /// PAID contributions + loan repayments in the window.
    pub total_inflows: Decimal,
    /// Loan principal disbursed in the window.
    pub total_outflows: Decimal,
    /// `total_inflows − total_outflows`.
    pub net_cashflow: Decimal,
}

impl CashflowReport {
    /// Derive cashflow from the three windowed aggregates.
    pub fn from_flows(
        period: String,
        contributions: Decimal,
        repayments: Decimal,
        disbursed: Decimal,
    ) -> Self {
        let total_inflows = contributions + repayments;
        Self {
            period,
            total_inflows,
            total_outflows: disbursed,
            net_cashflow: total_inflows - disbursed,
        }
    }
}

/// Loan portfolio grouped by status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPortfolioReport {
    /// Per-status count and principal sum.
    pub status_breakdown: Vec<LoanStatusBreakdown>,
    /// Sum of the grouped sums.
    pub total_principal_disbursed: Decimal,
    /// All loan repayments for the chama, regardless of loan status.
    pub total_repayments: Decimal,
}

impl LoanPortfolioReport {
    /// Assemble the portfolio report from the grouped rows and the
    /// status-unscoped repayment total.
    pub fn from_parts(status_breakdown: Vec<LoanStatusBreakdown>, total_repayments: Decimal) -> Self {
        let total_principal_disbursed = status_breakdown
            .iter()
            .map(|row| row.total_amount)
            .sum();
        Self {
            status_breakdown,
            total_principal_disbursed,
            total_repayments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamahub_entity::loan::LoanStatus;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_aggregates_yield_zero_summary() {
        let summary = FinancialSummary::from_aggregates(FinancialAggregates::default());
        assert_eq!(summary.total_contributions, Decimal::ZERO);
        assert_eq!(summary.total_penalties, Decimal::ZERO);
        assert_eq!(summary.total_loans_disbursed, Decimal::ZERO);
        assert_eq!(summary.total_loan_repayments, Decimal::ZERO);
        assert_eq!(summary.outstanding_loan_principal, Decimal::ZERO);
        assert_eq!(summary.net_position, Decimal::ZERO);
    }

    #[test]
    fn test_concrete_summary_scenario() {
        let summary = FinancialSummary::from_aggregates(FinancialAggregates {
            contributions: dec!(10000),
            penalties: dec!(500),
            loans_disbursed: dec!(5000),
            loan_repayments: dec!(2000),
            outstanding_principal: dec!(3000),
        });
        assert_eq!(summary.total_contributions, dec!(10000));
        assert_eq!(summary.total_penalties, dec!(500));
        assert_eq!(summary.total_loans_disbursed, dec!(5000));
        assert_eq!(summary.total_loan_repayments, dec!(2000));
        assert_eq!(summary.outstanding_loan_principal, dec!(3000));
        assert_eq!(summary.net_position, dec!(7000));
    }

    #[test]
    fn test_net_position_identity() {
        // Cheap generator: a fixed multiplicative sequence stands in for
        // arbitrary non-negative aggregate tuples.
        let mut seed: u64 = 0x2545_F491;
        let mut next = || {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            Decimal::from(seed >> 40)
        };
        for _ in 0..200 {
            let agg = FinancialAggregates {
                contributions: next(),
                penalties: next(),
                loans_disbursed: next(),
                loan_repayments: next(),
                outstanding_principal: next(),
            };
            let summary = FinancialSummary::from_aggregates(agg);
            assert_eq!(
                summary.net_position,
                agg.contributions + agg.loan_repayments - agg.loans_disbursed
            );
        }
    }

    #[test]
    fn test_cashflow_from_flows() {
        let report = CashflowReport::from_flows(
            "2024-01-01 to 2024-03-31".to_string(),
            dec!(8000),
            dec!(1500),
            dec!(4000),
        );
        assert_eq!(report.total_inflows, dec!(9500));
        assert_eq!(report.total_outflows, dec!(4000));
        assert_eq!(report.net_cashflow, dec!(5500));
    }

    #[test]
    fn test_portfolio_totals_from_grouped_rows() {
        let report = LoanPortfolioReport::from_parts(
            vec![
                LoanStatusBreakdown {
                    status: LoanStatus::Active,
                    count: 5,
                    total_amount: dec!(10000),
                },
                LoanStatusBreakdown {
                    status: LoanStatus::Paid,
                    count: 3,
                    total_amount: dec!(5000),
                },
            ],
            dec!(3000),
        );
        assert_eq!(report.total_principal_disbursed, dec!(15000));
        assert_eq!(report.total_repayments, dec!(3000));
        assert_eq!(report.status_breakdown.len(), 2);
    }

    #[test]
    fn test_empty_portfolio() {
        let report = LoanPortfolioReport::from_parts(Vec::new(), Decimal::ZERO);
        assert_eq!(report.total_principal_disbursed, Decimal::ZERO);
        assert!(report.status_breakdown.is_empty());
    }
}
