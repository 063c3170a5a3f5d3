use chrono::NaiveDate;
use ulid::Ulid;

use crate::model::{Booking, BookingStatus, Stay};

use super::BookingStore;

impl BookingStore {
    pub fn booking(&self, id: Ulid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// A user's bookings in insertion order (not sorted).
    pub fn bookings_by_user(&self, user_id: &str) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.user_id == user_id).collect()
    }

    /// All bookings, most recently created first.
    pub fn all_bookings(&self) -> Vec<Booking> {
        let mut all = self.bookings.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// Bookings whose check-in falls within `[from, to]` inclusive. Feeds
    /// the monthly revenue and occupancy aggregation.
    pub fn bookings_by_check_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| from <= b.stay.check_in && b.stay.check_in <= to)
            .collect()
    }

    /// Whether any non-cancelled booking occupies the room on `date`
    /// (`check_in <= date < check_out`). The atomic primitive under the
    /// day-by-day availability scans.
    pub fn room_occupancy(&self, room_id: &str, date: NaiveDate) -> bool {
        self.bookings.iter().any(|b| {
            b.room_id == room_id
                && b.status != BookingStatus::Cancelled
                && b.stay.contains_day(date)
        })
    }

    /// True iff the room exists, is open for booking, and no non-cancelled
    /// booking overlaps the requested stay.
    pub fn check_room_availability(&self, room_id: &str, stay: &Stay) -> bool {
        let Some(room) = self.catalog.room(room_id) else {
            return false;
        };
        if !room.available {
            return false;
        }
        !self.bookings.iter().any(|b| {
            b.room_id == room_id
                && b.status != BookingStatus::Cancelled
                && b.stay.overlaps(stay)
        })
    }

    /// The occupied nights within a candidate stay, one entry per calendar
    /// day. O(nights × bookings) — fine at this inventory size; an interval
    /// index per room would be the next step if that ever changes.
    pub fn occupied_days(&self, room_id: &str, stay: &Stay) -> Vec<NaiveDate> {
        stay.days()
            .filter(|day| self.room_occupancy(room_id, *day))
            .collect()
    }
}
