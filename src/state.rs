// Application state owned by the front desk for the lifetime of a session
use crate::booking::{self, BookingRecord};
use crate::catalog::RoomCatalog;
use crate::error::HotelError;
use crate::ledger::HistoryLedger;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct HotelState {
    pub catalog: RoomCatalog,
    pub ledger: HistoryLedger,
    customers: BTreeSet<String>,
}

impl HotelState {
    pub fn new(catalog: RoomCatalog) -> Self {
        Self {
            catalog,
            ledger: HistoryLedger::new(),
            customers: BTreeSet::new(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(RoomCatalog::seeded())
    }

    // Returns false if the name was already known
    pub fn register_customer(&mut self, name: &str) -> bool {
        self.customers.insert(name.trim().to_string())
    }

    pub fn customers(&self) -> impl Iterator<Item = &str> {
        self.customers.iter().map(String::as_str)
    }

    // Books through the engine and appends successful bookings to the ledger
    pub fn book(&mut self, room_type: &str, quantity: u32) -> Result<BookingRecord, HotelError> {
        let record = booking::book(&mut self.catalog, room_type, quantity)?;
        self.ledger.record(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_grows_only_on_success() {
        let mut state = HotelState::seeded();

        state.book("single", 2).unwrap();
        assert_eq!(state.ledger.len(), 1);

        assert!(state.book("single", 5).is_err());
        assert!(state.book("suite", 1).is_err());
        assert!(state.book("double", 0).is_err());
        assert_eq!(state.ledger.len(), 1);

        state.book("double", 2).unwrap();
        assert_eq!(state.ledger.len(), 2);
    }

    #[test]
    fn test_customers_are_distinct() {
        let mut state = HotelState::seeded();
        assert!(state.register_customer("Alice"));
        assert!(state.register_customer("Bob "));
        assert!(!state.register_customer("Alice"));

        let names: Vec<&str> = state.customers().collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }
}
