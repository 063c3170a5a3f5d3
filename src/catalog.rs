use crate::model::{Room, RoomType};

/// Fixed set of bookable rooms, seeded at construction. Answers lookups by
/// id; a miss means the booking target is invalid.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// The demo inventory the application ships with.
    pub fn seeded() -> Self {
        Self::new(seed_rooms())
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "1".into(),
            name: "Deluxe Ocean View".into(),
            room_type: RoomType::Deluxe,
            price_per_night: 150,
            max_guests: 2,
            available: true,
            description: "Luxurious room with stunning ocean views and premium amenities.".into(),
            amenities: vec![
                "Ocean View".into(),
                "King Bed".into(),
                "WiFi".into(),
                "Mini Bar".into(),
                "Balcony".into(),
            ],
            rating: 4.8,
            reviews: 124,
        },
        Room {
            id: "2".into(),
            name: "Executive Suite".into(),
            room_type: RoomType::Suite,
            price_per_night: 250,
            max_guests: 3,
            available: true,
            description: "Spacious suite perfect for business travelers with separate living area."
                .into(),
            amenities: vec![
                "City View".into(),
                "King Bed".into(),
                "WiFi".into(),
                "Mini Bar".into(),
                "Living Area".into(),
                "Work Desk".into(),
            ],
            rating: 4.9,
            reviews: 89,
        },
        Room {
            id: "3".into(),
            name: "Standard Room".into(),
            room_type: RoomType::Standard,
            price_per_night: 80,
            max_guests: 2,
            available: true,
            description: "Comfortable standard room with all essential amenities.".into(),
            amenities: vec![
                "Garden View".into(),
                "Queen Bed".into(),
                "WiFi".into(),
                "Air Conditioning".into(),
            ],
            rating: 4.5,
            reviews: 203,
        },
        Room {
            id: "4".into(),
            name: "Family Room".into(),
            room_type: RoomType::Family,
            price_per_night: 180,
            max_guests: 4,
            available: true,
            description: "Perfect for families with children, featuring two queen beds.".into(),
            amenities: vec![
                "Garden View".into(),
                "2 Queen Beds".into(),
                "WiFi".into(),
                "Mini Fridge".into(),
                "Extra Space".into(),
            ],
            rating: 4.7,
            reviews: 156,
        },
    ]
}
