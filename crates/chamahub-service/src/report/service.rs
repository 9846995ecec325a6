//! Financial aggregation engine.

use std::sync::Arc;

use uuid::Uuid;

use chamahub_core::result::AppResult;
use chamahub_core::types::{DateWindow, PageRequest, PageResponse};
use chamahub_database::repositories::{
    ContributionRepository, LoanRepository, MembershipRepository,
};
use chamahub_entity::contribution::ContributionReportRow;
use chamahub_entity::membership::MemberPerformanceRow;

use super::types::{CashflowReport, FinancialAggregates, FinancialSummary, LoanPortfolioReport};

/// Produces scoped financial summaries from persisted records.
///
/// Stateless: every call reads straight through the repositories. A chama
/// with no matching rows produces a zero-valued result, never an error —
/// existence and authorization are the boundary's responsibility.
#[derive(Debug, Clone)]
pub struct ReportService {
    contributions: Arc<ContributionRepository>,
    loans: Arc<LoanRepository>,
    memberships: Arc<MembershipRepository>,
    /// Row cap for a single export file.
    max_export_rows: u64,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        contributions: Arc<ContributionRepository>,
        loans: Arc<LoanRepository>,
        memberships: Arc<MembershipRepository>,
        max_export_rows: u64,
    ) -> Self {
        Self {
            contributions,
            loans,
            memberships,
            max_export_rows,
        }
    }

    pub(crate) fn max_export_rows(&self) -> u64 {
        self.max_export_rows
    }

    pub(crate) fn contribution_repo(&self) -> &ContributionRepository {
        &self.contributions
    }

    /// Overall financial position of a chama.
    pub async fn financial_summary(&self, chama_id: Uuid) -> AppResult<FinancialSummary> {
        let totals = self.contributions.paid_totals(chama_id).await?;
        let loans_disbursed = self.loans.total_disbursed(chama_id).await?;
        let loan_repayments = self.loans.repayment_total(chama_id).await?;
        let outstanding_principal = self.loans.outstanding_principal(chama_id).await?;

        Ok(FinancialSummary::from_aggregates(FinancialAggregates {
            contributions: totals.amount,
            penalties: totals.penalties,
            loans_disbursed,
            loan_repayments,
            outstanding_principal,
        }))
    }

    /// Inflows and outflows over a date window.
    pub async fn cashflow_report(
        &self,
        chama_id: Uuid,
        window: &DateWindow,
    ) -> AppResult<CashflowReport> {
        let contributions = self
            .contributions
            .paid_total_in_window(chama_id, window)
            .await?;
        let repayments = self.loans.repayments_in_window(chama_id, window).await?;
        let disbursed = self.loans.disbursed_in_window(chama_id, window).await?;

        Ok(CashflowReport::from_flows(
            window.label(),
            contributions,
            repayments,
            disbursed,
        ))
    }

    /// Loan portfolio grouped by status.
    pub async fn loan_portfolio_report(&self, chama_id: Uuid) -> AppResult<LoanPortfolioReport> {
        let breakdown = self.loans.status_breakdown(chama_id).await?;
        let repayments = self.loans.repayment_total(chama_id).await?;
        Ok(LoanPortfolioReport::from_parts(breakdown, repayments))
    }

    /// Per-active-member contribution and loan rollup.
    ///
    /// Further derivation (display formatting, ratios) belongs to callers.
    pub async fn member_performance_report(
        &self,
        chama_id: Uuid,
    ) -> AppResult<Vec<MemberPerformanceRow>> {
        self.memberships.member_performance(chama_id).await
    }

    /// Paginated PAID contribution rows inside a window, newest first.
    pub async fn contributions_report(
        &self,
        chama_id: Uuid,
        window: &DateWindow,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ContributionReportRow>> {
        self.contributions.list_paid(chama_id, window, page).await
    }
}
