// Room catalog: the table of room categories the desk can sell
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub available: u32,
    pub price: u32,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "available={}, price={}", self.available, self.price)
    }
}

// Room names are keyed in lowercase so "Single" and "single" are the same room
pub fn normalize_room_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCatalog {
    rooms: BTreeMap<String, RoomType>,
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    // The three room types every desk opens with
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        catalog.insert("single", 200, 3);
        catalog.insert("double", 350, 2);
        catalog.insert("family", 500, 1);
        catalog
    }

    pub fn lookup(&self, name: &str) -> Option<&RoomType> {
        self.rooms.get(&normalize_room_name(name))
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut RoomType> {
        self.rooms.get_mut(&normalize_room_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    // Inserts or overwrites, returning the previous entry if there was one
    pub fn insert(&mut self, name: &str, price: u32, available: u32) -> Option<RoomType> {
        self.rooms
            .insert(normalize_room_name(name), RoomType { available, price })
    }

    pub fn remove(&mut self, name: &str) -> Option<RoomType> {
        self.rooms.remove(&normalize_room_name(name))
    }

    // Returns false when the room does not exist
    pub fn set_available(&mut self, name: &str, available: u32) -> bool {
        match self.lookup_mut(name) {
            Some(room) => {
                room.available = available;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoomType)> {
        self.rooms.iter().map(|(name, room)| (name.as_str(), room))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = RoomCatalog::seeded();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.lookup("single"),
            Some(&RoomType {
                available: 3,
                price: 200
            })
        );
        assert_eq!(catalog.lookup("double").map(|r| r.price), Some(350));
        assert_eq!(catalog.lookup("family").map(|r| r.available), Some(1));
    }

    #[test]
    fn test_names_are_case_normalized() {
        let mut catalog = RoomCatalog::new();
        catalog.insert("  Penthouse ", 900, 1);

        assert!(catalog.contains("penthouse"));
        assert!(catalog.contains("PENTHOUSE"));
        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["penthouse"]);
    }

    #[test]
    fn test_insert_overwrites_existing_entry() {
        let mut catalog = RoomCatalog::seeded();
        let previous = catalog.insert("Single", 250, 7);

        assert_eq!(previous.map(|r| r.price), Some(200));
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.lookup("single"),
            Some(&RoomType {
                available: 7,
                price: 250
            })
        );
    }

    #[test]
    fn test_remove_missing_room_is_noop() {
        let mut catalog = RoomCatalog::seeded();
        assert!(catalog.remove("suite").is_none());
        assert_eq!(catalog, RoomCatalog::seeded());
    }

    #[test]
    fn test_set_available() {
        let mut catalog = RoomCatalog::seeded();
        assert!(catalog.set_available("double", 10));
        assert_eq!(catalog.lookup("double").map(|r| r.available), Some(10));

        assert!(!catalog.set_available("suite", 4));
        assert!(!catalog.contains("suite"));
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let catalog = RoomCatalog::seeded();
        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["double", "family", "single"]);
    }
}
