use crate::models::TicketType;

pub const CHILD_PRICE: u32 = 10;
pub const STUDENT_PRICE: u32 = 15;
pub const ADULT_PRICE: u32 = 20;

/// Ages below this always pay the child price, student or not.
pub const CHILD_AGE_LIMIT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub ticket_type: TicketType,
    pub price: u32,
}

/// Determines the ticket type and price for an attendee, by strict priority:
/// under-10s are children, verified students get the student rate, everyone
/// else pays the adult rate. Age validity is the caller's contract.
pub fn classify(age: u8, is_student: bool, student_card_verified: bool) -> Ticket {
    if age < CHILD_AGE_LIMIT {
        Ticket {
            ticket_type: TicketType::Child,
            price: CHILD_PRICE,
        }
    } else if is_student && student_card_verified {
        Ticket {
            ticket_type: TicketType::Student,
            price: STUDENT_PRICE,
        }
    } else {
        Ticket {
            ticket_type: TicketType::Adult,
            price: ADULT_PRICE,
        }
    }
}
