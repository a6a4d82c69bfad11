use serde::Serialize;

use crate::record::{ApartmentRecord, CustomerStatus};

/// Counts of the filtered view by customer status. Records with a missing or
/// unrecognized label count toward none of the three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    pub watched_list: usize,
    pub not_customer: usize,
    pub safe_zone: usize,
}

impl SummaryMetrics {
    pub fn compute(records: &[ApartmentRecord]) -> Self {
        let mut metrics = Self::default();
        for record in records {
            match record.customer_status() {
                Some(CustomerStatus::WatchedList) => metrics.watched_list += 1,
                Some(CustomerStatus::NotCustomer) => metrics.not_customer += 1,
                Some(CustomerStatus::SafeZone) => metrics.safe_zone += 1,
                None => {}
            }
        }
        metrics
    }
}

/// Formats a count with thousands separators, e.g. 1234567 -> "1,234,567".
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
