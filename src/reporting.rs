//! Derived dashboard and admin aggregates. Pure functions over the store's
//! query results — no state of their own, recomputed on demand.

use chrono::{Datelike, Days, NaiveDate};

use crate::model::{BookingStatus, Room, RoomType, Stay};
use crate::store::BookingStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_rooms: usize,
    /// Rooms with a confirmed booking covering `today`.
    pub occupied_rooms: usize,
    /// `occupied_rooms` as a rounded percentage of the inventory.
    pub occupancy_rate_pct: u32,
    /// Bookings checking in during `today`'s month.
    pub monthly_bookings: usize,
    pub monthly_revenue: u64,
    /// Rounded mean of `total_amount / nights` over the month's bookings.
    pub avg_room_rate: Option<u32>,
}

pub fn dashboard_stats(store: &BookingStore, today: NaiveDate) -> DashboardStats {
    let total_rooms = store.catalog().len();
    let occupied_rooms = store
        .bookings()
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed && b.stay.contains_day(today))
        .count();
    let occupancy_rate_pct = if total_rooms == 0 {
        0
    } else {
        ((occupied_rooms as f64 / total_rooms as f64) * 100.0).round() as u32
    };

    DashboardStats {
        total_rooms,
        occupied_rooms,
        occupancy_rate_pct,
        monthly_bookings: monthly_booking_count(store, today.year(), today.month()),
        monthly_revenue: monthly_revenue(store, today.year(), today.month()),
        avg_room_rate: average_room_rate(store, today.year(), today.month()),
    }
}

/// First and last calendar day of a month. `None` for a month outside 1–12.
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first - Days::new(1)))
}

/// Sum of `total_amount` over bookings checking in during the month.
/// An out-of-range month holds no bookings and sums to zero.
pub fn monthly_revenue(store: &BookingStore, year: i32, month: u32) -> u64 {
    let Some((from, to)) = month_bounds(year, month) else {
        return 0;
    };
    store
        .bookings_by_check_in_range(from, to)
        .iter()
        .map(|b| u64::from(b.total_amount))
        .sum()
}

pub fn monthly_booking_count(store: &BookingStore, year: i32, month: u32) -> usize {
    let Some((from, to)) = month_bounds(year, month) else {
        return 0;
    };
    store.bookings_by_check_in_range(from, to).len()
}

/// Mean nightly rate across the month's bookings, rounded. `None` when no
/// booking checks in that month (or the month is out of range).
pub fn average_room_rate(store: &BookingStore, year: i32, month: u32) -> Option<u32> {
    let (from, to) = month_bounds(year, month)?;
    let bookings = store.bookings_by_check_in_range(from, to);
    if bookings.is_empty() {
        return None;
    }
    let sum: f64 = bookings
        .iter()
        .map(|b| f64::from(b.total_amount) / f64::from(b.nights.max(1)))
        .sum();
    Some((sum / bookings.len() as f64).round() as u32)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub revenue: u64,
    pub bookings: usize,
}

/// Per-month revenue rows for the admin chart, in the order requested.
pub fn revenue_series(store: &BookingStore, months: &[(i32, u32)]) -> Vec<MonthlyRevenue> {
    months
        .iter()
        .map(|&(year, month)| MonthlyRevenue {
            year,
            month,
            revenue: monthly_revenue(store, year, month),
            bookings: monthly_booking_count(store, year, month),
        })
        .collect()
}

// ── Room search ──────────────────────────────────────────────────

/// Filter criteria from the room-browsing view. All fields optional;
/// `Default` matches everything.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    /// Case-insensitive match against name, description, and amenities.
    pub term: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub room_type: Option<RoomType>,
    pub min_guests: Option<u32>,
    /// Only rooms bookable for this stay (open flag + no conflicts).
    pub available_for: Option<Stay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSort {
    PriceLow,
    PriceHigh,
    Rating,
    Capacity,
}

fn matches_term(room: &Room, term: &str) -> bool {
    let term = term.to_lowercase();
    room.name.to_lowercase().contains(&term)
        || room.description.to_lowercase().contains(&term)
        || room.amenities.iter().any(|a| a.to_lowercase().contains(&term))
}

pub fn search_rooms<'a>(
    store: &'a BookingStore,
    filter: &RoomFilter,
    sort: RoomSort,
) -> Vec<&'a Room> {
    let mut rooms: Vec<&Room> = store
        .catalog()
        .rooms()
        .iter()
        .filter(|room| {
            if let Some(ref term) = filter.term
                && !matches_term(room, term) {
                    return false;
                }
            if filter.min_price.is_some_and(|min| room.price_per_night < min) {
                return false;
            }
            if filter.max_price.is_some_and(|max| room.price_per_night > max) {
                return false;
            }
            if filter.room_type.is_some_and(|t| room.room_type != t) {
                return false;
            }
            if filter.min_guests.is_some_and(|n| room.max_guests < n) {
                return false;
            }
            if let Some(ref stay) = filter.available_for
                && !store.check_room_availability(&room.id, stay) {
                    return false;
                }
            true
        })
        .collect();

    match sort {
        RoomSort::PriceLow => rooms.sort_by_key(|r| r.price_per_night),
        RoomSort::PriceHigh => rooms.sort_by_key(|r| std::cmp::Reverse(r.price_per_night)),
        RoomSort::Rating => rooms.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        RoomSort::Capacity => rooms.sort_by_key(|r| std::cmp::Reverse(r.max_guests)),
    }
    rooms
}
