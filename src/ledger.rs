// Append-only history of confirmed bookings
use crate::booking::BookingRecord;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    records: Vec<BookingRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, booking: BookingRecord) {
        tracing::debug!(reference = %booking.reference, "recording booking");
        self.records.push(booking);
    }

    // Bookings in the order they were made; call again to start over
    pub fn all(&self) -> std::slice::Iter<'_, BookingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
