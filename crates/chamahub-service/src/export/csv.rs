//! CSV rendering for contribution and audit log exports.

use chamahub_core::error::{AppError, ErrorKind};
use chamahub_core::result::AppResult;
use chamahub_entity::audit::AuditLogEntry;
use chamahub_entity::contribution::ContributionReportRow;

/// Render contribution rows as CSV with a fixed column projection.
///
/// Empty input produces a header-only buffer.
pub fn contributions_csv(rows: &[ContributionReportRow]) -> AppResult<Vec<u8>> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "Member",
            "Amount",
            "Penalty",
            "Month",
            "Year",
            "Payment Method",
            "Date Paid",
        ])
        .map_err(csv_error)?;

    for row in rows {
        writer
            .write_record([
                row.member_name.as_str(),
                &row.amount.to_string(),
                &row.penalty_applied.to_string(),
                &row.month.to_string(),
                &row.year.to_string(),
                row.payment_method.as_deref().unwrap_or(""),
                &row
                    .paid_at
                    .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    finish(writer)
}

/// Render audit log entries as CSV, one fully flattened record per row.
pub fn audit_logs_csv(entries: &[AuditLogEntry]) -> AppResult<Vec<u8>> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "ID",
            "Action",
            "User ID",
            "Target ID",
            "Chama ID",
            "Created At",
            "Payload",
        ])
        .map_err(csv_error)?;

    for entry in entries {
        writer
            .write_record([
                entry.id.to_string(),
                entry.action.clone(),
                entry.user_id.to_string(),
                entry.target_id.map(|t| t.to_string()).unwrap_or_default(),
                entry.chama_id.map(|c| c.to_string()).unwrap_or_default(),
                entry.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                entry
                    .payload
                    .as_ref()
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    finish(writer)
}

fn finish(writer: ::csv::Writer<Vec<u8>>) -> AppResult<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| AppError::with_source(ErrorKind::Export, "CSV buffer flush failed", e.into_error()))
}

fn csv_error(e: ::csv::Error) -> AppError {
    AppError::with_source(ErrorKind::Export, "CSV write failed", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn contribution(member: &str, amount: rust_decimal::Decimal) -> ContributionReportRow {
        ContributionReportRow {
            member_name: member.to_string(),
            amount,
            penalty_applied: dec!(50),
            month: 3,
            year: 2024,
            payment_method: Some("MPESA".to_string()),
            paid_at: Some(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let bytes = contributions_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Member,Amount,Penalty"));
    }

    #[test]
    fn test_row_count_preserved() {
        let rows = vec![
            contribution("Amina Odhiambo", dec!(1000)),
            contribution("Brian Mwangi", dec!(1500)),
            contribution("Cynthia Wanjiru", dec!(2000)),
        ];
        let bytes = contributions_csv(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1 + rows.len());
        assert!(text.contains("Brian Mwangi,1500,50,3,2024,MPESA,2024-03-15 09:30:00"));
    }

    #[test]
    fn test_missing_optionals_render_empty() {
        let mut row = contribution("Amina Odhiambo", dec!(1000));
        row.payment_method = None;
        row.paid_at = None;
        let text = String::from_utf8(contributions_csv(&[row]).unwrap()).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",,"));
    }

    #[test]
    fn test_audit_logs_flattened() {
        let entries = vec![AuditLogEntry {
            id: Uuid::nil(),
            action: "LOAN_APPROVED".to_string(),
            user_id: Uuid::nil(),
            target_id: None,
            chama_id: None,
            payload: Some(serde_json::json!({"amount": "5000"})),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }];
        let text = String::from_utf8(audit_logs_csv(&entries).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("LOAN_APPROVED"));
        // JSON payload contains commas and quotes; it must arrive quoted.
        assert!(text.contains("\"{\"\"amount\"\":\"\"5000\"\"}\""));
    }

    #[test]
    fn test_audit_empty_is_header_only() {
        let text = String::from_utf8(audit_logs_csv(&[]).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
