//! PDF rendering for contribution exports.
//!
//! The contract is a human-readable tabular summary, not precise layout:
//! a title, a monospaced header, and one pipe-delimited line per record,
//! flowing onto extra pages as needed.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use chamahub_core::error::AppError;
use chamahub_core::result::AppResult;
use chamahub_entity::contribution::ContributionReportRow;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const LINE_HEIGHT_MM: f32 = 5.0;
const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 8.0;

/// Render contribution rows as a titled PDF table.
pub fn contributions_pdf(title: &str, rows: &[ContributionReportRow]) -> AppResult<Vec<u8>> {
    render_lines(title, &table_lines(rows))
}

/// Display lines for the table body: a header and one line per record, or a
/// single placeholder line when there are no records.
fn table_lines(rows: &[ContributionReportRow]) -> Vec<String> {
    if rows.is_empty() {
        return vec!["No contributions recorded for this period.".to_string()];
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{:<24} | {:>12} | {:>8} | {:>7} | {:<10} | {}",
        "Member", "Amount", "Penalty", "Period", "Method", "Date Paid"
    ));
    lines.push("-".repeat(90));
    for row in rows {
        lines.push(format!(
            "{:<24} | {:>12} | {:>8} | {:>2}/{:<4} | {:<10} | {}",
            truncate(&row.member_name, 24),
            row.amount,
            row.penalty_applied,
            row.month,
            row.year,
            row.payment_method.as_deref().unwrap_or("-"),
            row.paid_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        ));
    }
    lines
}

/// Lay the lines out on A4 pages in Courier, adding pages on overflow.
fn render_lines(title: &str, lines: &[String]) -> AppResult<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| AppError::export(format!("PDF font setup failed: {e}")))?;
    let title_font = doc
        .add_builtin_font(BuiltinFont::CourierBold)
        .map_err(|e| AppError::export(format!("PDF font setup failed: {e}")))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    layer.use_text(title, TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &title_font);
    y -= 2.0 * LINE_HEIGHT_MM;

    for line in lines {
        if y < MARGIN_MM {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        layer.use_text(line, BODY_SIZE, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::export(format!("PDF serialization failed: {e}")))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max.saturating_sub(1)).chain(['…']).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn contribution(member: &str) -> ContributionReportRow {
        ContributionReportRow {
            member_name: member.to_string(),
            amount: dec!(1000),
            penalty_applied: dec!(0),
            month: 1,
            year: 2024,
            payment_method: Some("CASH".to_string()),
            paid_at: Some(Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_empty_input_produces_placeholder() {
        let lines = table_lines(&[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No contributions"));
    }

    #[test]
    fn test_one_line_per_record_plus_header() {
        let rows = vec![contribution("Amina"), contribution("Brian"), contribution("Cynthia")];
        let lines = table_lines(&rows);
        // header + rule + one line per record
        assert_eq!(lines.len(), 2 + rows.len());
        assert!(lines[2].contains("Amina"));
        assert!(lines[2].contains('|'));
    }

    #[test]
    fn test_long_names_truncated() {
        let rows = vec![contribution(&"x".repeat(60))];
        let lines = table_lines(&rows);
        assert!(lines[2].split('|').next().unwrap().trim().chars().count() <= 24);
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = contributions_pdf("Contributions Report", &[contribution("Amina")]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_still_succeeds() {
        let bytes = contributions_pdf("Contributions Report", &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_many_rows_overflow_pages() {
        let rows: Vec<_> = (0..200).map(|i| contribution(&format!("Member {i}"))).collect();
        let bytes = contributions_pdf("Contributions Report", &rows).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
