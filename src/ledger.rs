use crate::models::{EntryRecord, EntrySubmission};
use crate::ticket::classify;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The ordered, append-only collection of check-ins for one event session.
/// Records are classified and priced once on append and never mutated or
/// removed individually; only the whole ledger can be cleared.
///
/// Serializes transparently as the plain entry sequence, which is also the
/// on-disk layout of the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLedger {
    entries: Vec<EntryRecord>,
}

impl EntryLedger {
    /// Appends a check-in stamped with the current local time.
    pub fn append(&mut self, submission: EntrySubmission) -> EntryRecord {
        self.append_at(submission, Local::now())
    }

    /// Appends a check-in with an explicit timestamp. The ticket type and
    /// price are computed here and frozen on the record.
    pub fn append_at(
        &mut self,
        submission: EntrySubmission,
        timestamp: DateTime<Local>,
    ) -> EntryRecord {
        let ticket = classify(
            submission.age,
            submission.is_student,
            submission.student_card_verified,
        );
        let record = EntryRecord {
            id: Uuid::new_v4(),
            timestamp,
            name: normalize_name(submission.name),
            age: submission.age,
            gender: submission.gender,
            is_student: submission.is_student,
            student_card_verified: submission.student_card_verified,
            ticket_type: ticket.ticket_type,
            ticket_price: ticket.price,
            payment_method: submission.payment_method,
        };
        self.entries.push(record.clone());
        record
    }

    /// Empties the ledger. Irreversible; exists for the reset action only.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[EntryRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_name(name: Option<String>) -> Option<String> {
    name.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
