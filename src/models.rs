use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketType {
    Child,
    Student,
    Adult,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Child, TicketType::Student, TicketType::Adult];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Child => "Child",
            TicketType::Student => "Student",
            TicketType::Adult => "Adult",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    Voucher,
    #[serde(rename = "Free Entry")]
    FreeEntry,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Voucher,
        PaymentMethod::FreeEntry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Voucher => "Voucher",
            PaymentMethod::FreeEntry => "Free Entry",
        }
    }
}

/// One attendee's check-in, with the ticket classification computed at
/// creation time. Ticket type and price are frozen on the record and never
/// recomputed, even if the pricing rule later changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Local>,
    #[serde(default)]
    pub name: Option<String>,
    pub age: u8,
    pub gender: Gender,
    pub is_student: bool,
    pub student_card_verified: bool,
    pub ticket_type: TicketType,
    pub ticket_price: u32,
    pub payment_method: PaymentMethod,
}

/// What the check-in form submits. Id, timestamp, ticket type and price are
/// all assigned by the ledger on append.
#[derive(Debug, Clone, Deserialize)]
pub struct EntrySubmission {
    #[serde(default)]
    pub name: Option<String>,
    pub age: u8,
    pub gender: Gender,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub student_card_verified: bool,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Serialize)]
pub struct TicketTypePoint {
    pub ticket_type: TicketType,
    pub count: u64,
    pub revenue: u64,
}

#[derive(Debug, Serialize)]
pub struct GenderPoint {
    pub gender: Gender,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct PaymentPoint {
    pub payment_method: PaymentMethod,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct HourlyPoint {
    pub hour: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct Aggregates {
    pub total_entries: u64,
    pub total_revenue: u64,
    pub average_ticket_value: f64,
    pub ticket_types: Vec<TicketTypePoint>,
    pub genders: Vec<GenderPoint>,
    pub payment_methods: Vec<PaymentPoint>,
    pub by_hour: Vec<HourlyPoint>,
}

impl Aggregates {
    pub fn ticket_count(&self, ticket_type: TicketType) -> u64 {
        self.ticket_types
            .iter()
            .find(|point| point.ticket_type == ticket_type)
            .map(|point| point.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_free_entry_uses_spaced_name() {
        let json = serde_json::to_string(&PaymentMethod::FreeEntry).unwrap();
        assert_eq!(json, "\"Free Entry\"");

        let parsed: PaymentMethod = serde_json::from_str("\"Free Entry\"").unwrap();
        assert_eq!(parsed, PaymentMethod::FreeEntry);
    }

    #[test]
    fn submission_defaults_optional_fields() {
        let submission: EntrySubmission = serde_json::from_str(
            r#"{"age": 25, "gender": "Female", "payment_method": "Card"}"#,
        )
        .unwrap();
        assert_eq!(submission.name, None);
        assert!(!submission.is_student);
        assert!(!submission.student_card_verified);
    }

    #[test]
    fn submission_rejects_unknown_gender() {
        let result: Result<EntrySubmission, _> = serde_json::from_str(
            r#"{"age": 25, "gender": "Unknown", "payment_method": "Card"}"#,
        );
        assert!(result.is_err());
    }
}
