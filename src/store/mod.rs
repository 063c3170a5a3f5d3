mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::StoreError;

use std::path::PathBuf;

use chrono::{NaiveDate, TimeZone, Utc};
use tracing::info;
use ulid::Ulid;

use crate::catalog::RoomCatalog;
use crate::model::{Booking, BookingStatus, PaymentStatus, Stay};
use crate::snapshot;

/// Single source of truth for all bookings.
///
/// Owns the collection exclusively; every mutation re-validates the
/// no-overlap invariant and rewrites the snapshot before reporting success.
/// There is exactly one writer, so a plain check-then-insert is sufficient —
/// promoting this to concurrent callers would require the availability check
/// and the insert to become one atomic operation.
pub struct BookingStore {
    catalog: RoomCatalog,
    bookings: Vec<Booking>,
    snapshot_path: Option<PathBuf>,
}

impl BookingStore {
    /// Open a store backed by a snapshot file. Loads the saved collection if
    /// one exists and parses; otherwise starts from the demo seed bookings.
    pub fn open(catalog: RoomCatalog, snapshot_path: Option<PathBuf>) -> Self {
        let bookings = match snapshot_path.as_deref().and_then(snapshot::load) {
            Some(saved) => {
                info!("loaded {} bookings from snapshot", saved.len());
                saved
            }
            None => {
                let seeded = seed_bookings();
                info!("no snapshot, seeded {} demo bookings", seeded.len());
                seeded
            }
        };
        Self { catalog, bookings, snapshot_path }
    }

    /// Empty store with no snapshot backing. For tests and embedding.
    pub fn in_memory(catalog: RoomCatalog) -> Self {
        Self { catalog, bookings: Vec::new(), snapshot_path: None }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    /// The raw collection, insertion order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub(super) fn persist(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.snapshot_path {
            snapshot::save(path, &self.bookings)
                .map_err(|e| StoreError::Snapshot(e.to_string()))?;
        }
        Ok(())
    }
}

fn seed_date(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("seed date is valid")
}

/// Demo bookings used when no snapshot exists yet.
pub fn seed_bookings() -> Vec<Booking> {
    let phone = Some("+252 61 987 6543".to_string());
    vec![
        Booking {
            id: Ulid::new(),
            user_id: "guest-1".into(),
            user_name: "Fatima Ahmed".into(),
            user_email: "fatima@example.com".into(),
            guest_phone: phone.clone(),
            room_id: "1".into(),
            stay: Stay::new(seed_date(2024, 2, 15), seed_date(2024, 2, 18)),
            guests: 2,
            nights: 3,
            total_amount: 450,
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            special_requests: Some("Late check-in requested".into()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap(),
        },
        Booking {
            id: Ulid::new(),
            user_id: "guest-1".into(),
            user_name: "Fatima Ahmed".into(),
            user_email: "fatima@example.com".into(),
            guest_phone: phone.clone(),
            room_id: "3".into(),
            stay: Stay::new(seed_date(2024, 3, 20), seed_date(2024, 3, 22)),
            guests: 1,
            nights: 2,
            total_amount: 160,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            special_requests: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 22, 14, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 22, 14, 30, 0).unwrap(),
        },
        Booking {
            id: Ulid::new(),
            user_id: "guest-1".into(),
            user_name: "Fatima Ahmed".into(),
            user_email: "fatima@example.com".into(),
            guest_phone: phone,
            room_id: "2".into(),
            stay: Stay::new(seed_date(2024, 1, 10), seed_date(2024, 1, 13)),
            guests: 2,
            nights: 3,
            total_amount: 750,
            status: BookingStatus::Completed,
            payment_status: PaymentStatus::Paid,
            special_requests: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 13, 12, 0, 0).unwrap(),
        },
    ]
}
