use crate::models::EntryRecord;
use chrono::NaiveDate;

pub const CSV_HEADER: &str =
    "ID,Time,Name,Age,Gender,Is Student,Card Verified,Ticket Type,Price,Payment";

/// Renders the ledger as the CSV report handed to organizers: one row per
/// entry, header first. Fields are comma-joined without quoting, matching
/// the export format the report consumers already ingest.
pub fn render_csv(entries: &[EntryRecord]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for entry in entries {
        lines.push(csv_row(entry));
    }
    lines.join("\n")
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("hoopentry-export-{}.csv", date.format("%Y-%m-%d"))
}

fn csv_row(entry: &EntryRecord) -> String {
    [
        entry.id.to_string(),
        entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        entry.name.clone().unwrap_or_else(|| "N/A".to_string()),
        entry.age.to_string(),
        entry.gender.as_str().to_string(),
        yes_no(entry.is_student).to_string(),
        yes_no(entry.student_card_verified).to_string(),
        entry.ticket_type.as_str().to_string(),
        entry.ticket_price.to_string(),
        entry.payment_method.as_str().to_string(),
    ]
    .join(",")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
