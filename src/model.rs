use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Half-open stay `[check_in, check_out)` — the checkout day itself is free
/// for a new check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        debug_assert!(check_in < check_out, "Stay check_in must be before check_out");
        Self { check_in, check_out }
    }

    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    pub fn overlaps(&self, other: &Stay) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day < self.check_out
    }

    /// Every occupied night, check-in day first. The checkout day is not yielded.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.check_in;
        (0..u64::from(self.nights())).map(move |n| start + Days::new(n))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Family,
    Business,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Family => "family",
            RoomType::Business => "business",
        }
    }
}

/// A bookable room. Catalog entries are load-time constants; date-based
/// occupancy lives in the booking store, `available` is an independent
/// on/off flag (maintenance, closed wing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub room_type: RoomType,
    pub price_per_night: u32,
    pub max_guests: u32,
    pub available: bool,
    pub description: String,
    pub amenities: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

/// A reservation. Never physically deleted — cancellation is a status
/// transition, and cancelled bookings stop counting toward occupancy.
///
/// `nights` and `total_amount` are derived from the stay and the room price
/// at write time and frozen thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Ulid,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub guest_phone: Option<String>,
    pub room_id: String,
    #[serde(flatten)]
    pub stay: Stay,
    pub guests: u32,
    pub nights: u32,
    pub total_amount: u32,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied half of a new booking. The store derives the rest:
/// id, timestamps, nights and total amount.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub guest_phone: Option<String>,
    pub room_id: String,
    pub stay: Stay,
    pub guests: u32,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
}

/// Partial update merged by `update_booking`. A patched stay is re-validated
/// against the no-overlap invariant and the derived fields are recomputed.
///
/// `special_requests` and `guest_phone` can be set or replaced but not
/// cleared: `None` here means "leave as is", not "remove".
#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub stay: Option<Stay>,
    pub guests: Option<u32>,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub special_requests: Option<String>,
    pub guest_phone: Option<String>,
}
