use crate::models::{
    Aggregates, EntryRecord, Gender, GenderPoint, HourlyPoint, PaymentMethod, PaymentPoint,
    TicketType, TicketTypePoint,
};
use chrono::Timelike;
use std::collections::BTreeMap;

/// Recomputes every derived statistic from scratch in a single pass over the
/// ledger. Cheap at the expected scale of a few hundred records per event,
/// so there is no incremental maintenance or caching.
///
/// Revenue sums the prices stored on the records, not what the current
/// pricing rule would produce.
pub fn derive_aggregates(entries: &[EntryRecord]) -> Aggregates {
    let mut total_revenue = 0u64;
    let mut type_counts: BTreeMap<&'static str, (u64, u64)> = BTreeMap::new();
    let mut gender_counts: BTreeMap<&'static str, u64> = BTreeMap::new();
    let mut payment_counts: BTreeMap<&'static str, u64> = BTreeMap::new();
    let mut hour_counts: BTreeMap<u32, u64> = BTreeMap::new();

    for entry in entries {
        let price = u64::from(entry.ticket_price);
        total_revenue += price;

        let slot = type_counts.entry(entry.ticket_type.as_str()).or_default();
        slot.0 += 1;
        slot.1 += price;

        *gender_counts.entry(entry.gender.as_str()).or_default() += 1;
        *payment_counts
            .entry(entry.payment_method.as_str())
            .or_default() += 1;
        *hour_counts.entry(entry.timestamp.hour()).or_default() += 1;
    }

    let total_entries = entries.len() as u64;
    let average_ticket_value = if total_entries == 0 {
        0.0
    } else {
        total_revenue as f64 / total_entries as f64
    };

    let ticket_types = TicketType::ALL
        .into_iter()
        .map(|ticket_type| {
            let (count, revenue) = type_counts
                .get(ticket_type.as_str())
                .copied()
                .unwrap_or_default();
            TicketTypePoint {
                ticket_type,
                count,
                revenue,
            }
        })
        .collect();

    let genders = Gender::ALL
        .into_iter()
        .map(|gender| GenderPoint {
            gender,
            count: gender_counts.get(gender.as_str()).copied().unwrap_or(0),
        })
        .collect();

    let payment_methods = PaymentMethod::ALL
        .into_iter()
        .map(|payment_method| PaymentPoint {
            payment_method,
            count: payment_counts
                .get(payment_method.as_str())
                .copied()
                .unwrap_or(0),
        })
        .collect();

    let by_hour = hour_counts
        .into_iter()
        .map(|(hour, count)| HourlyPoint {
            hour: hour_label(hour),
            count,
        })
        .collect();

    Aggregates {
        total_entries,
        total_revenue,
        average_ticket_value,
        ticket_types,
        genders,
        payment_methods,
        by_hour,
    }
}

fn hour_label(hour: u32) -> String {
    format!("{hour}:00")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryLedger;
    use crate::models::EntrySubmission;
    use chrono::{DateTime, Local, TimeZone};
    use uuid::Uuid;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, hour, 15, 0)
            .unwrap()
    }

    fn submission(age: u8, gender: Gender) -> EntrySubmission {
        EntrySubmission {
            name: None,
            age,
            gender,
            is_student: false,
            student_card_verified: false,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn empty_ledger_yields_all_zero_aggregates() {
        let aggregates = derive_aggregates(&[]);

        assert_eq!(aggregates.total_entries, 0);
        assert_eq!(aggregates.total_revenue, 0);
        assert_eq!(aggregates.average_ticket_value, 0.0);
        assert!(aggregates.ticket_types.iter().all(|p| p.count == 0));
        assert!(aggregates.genders.iter().all(|p| p.count == 0));
        assert!(aggregates.payment_methods.iter().all(|p| p.count == 0));
        assert!(aggregates.by_hour.is_empty());
    }

    #[test]
    fn append_shows_up_in_matching_buckets() {
        let mut ledger = EntryLedger::default();
        ledger.append_at(submission(30, Gender::Female), at(2026, 8, 7, 14));
        let before = derive_aggregates(ledger.entries());

        ledger.append_at(submission(8, Gender::Female), at(2026, 8, 7, 14));
        let after = derive_aggregates(ledger.entries());

        assert_eq!(after.total_entries, before.total_entries + 1);
        assert_eq!(after.total_revenue, before.total_revenue + 10);
        assert_eq!(
            after.ticket_count(TicketType::Child),
            before.ticket_count(TicketType::Child) + 1
        );
        let female = |a: &Aggregates| {
            a.genders
                .iter()
                .find(|p| p.gender == Gender::Female)
                .map(|p| p.count)
                .unwrap_or(0)
        };
        assert_eq!(female(&after), female(&before) + 1);
        let fourteen = |a: &Aggregates| {
            a.by_hour
                .iter()
                .find(|p| p.hour == "14:00")
                .map(|p| p.count)
                .unwrap_or(0)
        };
        assert_eq!(fourteen(&after), fourteen(&before) + 1);
    }

    #[test]
    fn revenue_sums_stored_prices_not_current_rule() {
        // A record whose stored price predates a (hypothetical) rule change.
        let stale = EntryRecord {
            id: Uuid::new_v4(),
            timestamp: at(2026, 8, 7, 9),
            name: None,
            age: 30,
            gender: Gender::Other,
            is_student: false,
            student_card_verified: false,
            ticket_type: TicketType::Adult,
            ticket_price: 25,
            payment_method: PaymentMethod::Card,
        };

        let aggregates = derive_aggregates(&[stale]);
        assert_eq!(aggregates.total_revenue, 25);
        assert_eq!(aggregates.ticket_types[2].revenue, 25);
    }

    #[test]
    fn hour_buckets_ignore_the_date_and_ordering() {
        let mut ledger = EntryLedger::default();
        ledger.append_at(submission(30, Gender::Male), at(2026, 8, 7, 9));
        ledger.append_at(submission(30, Gender::Male), at(2026, 8, 1, 9));
        ledger.append_at(submission(30, Gender::Male), at(2026, 8, 7, 18));

        let aggregates = derive_aggregates(ledger.entries());
        assert_eq!(aggregates.by_hour.len(), 2);
        assert_eq!(aggregates.by_hour[0].hour, "9:00");
        assert_eq!(aggregates.by_hour[0].count, 2);
        assert_eq!(aggregates.by_hour[1].hour, "18:00");
        assert_eq!(aggregates.by_hour[1].count, 1);

        let mut reversed: Vec<_> = ledger.entries().to_vec();
        reversed.reverse();
        let reordered = derive_aggregates(&reversed);
        assert_eq!(reordered.by_hour[0].count, 2);
        assert_eq!(reordered.by_hour[1].count, 1);
    }

    #[test]
    fn clear_then_derive_is_all_zero() {
        let mut ledger = EntryLedger::default();
        ledger.append_at(submission(30, Gender::Male), at(2026, 8, 7, 12));
        ledger.clear();

        let aggregates = derive_aggregates(ledger.entries());
        assert_eq!(aggregates.total_entries, 0);
        assert_eq!(aggregates.total_revenue, 0);
        assert!(aggregates.by_hour.is_empty());
    }

    #[test]
    fn average_ticket_value_over_mixed_tickets() {
        let mut ledger = EntryLedger::default();
        ledger.append_at(submission(8, Gender::Male), at(2026, 8, 7, 10));
        ledger.append_at(submission(40, Gender::Female), at(2026, 8, 7, 11));

        let aggregates = derive_aggregates(ledger.entries());
        assert_eq!(aggregates.total_revenue, 30);
        assert_eq!(aggregates.average_ticket_value, 15.0);
    }
}
