//! Booking core for a small hotel: a fixed room catalog, a booking store
//! that owns the reservation collection and enforces the no-double-booking
//! invariant, and derived reporting over both.
//!
//! The store is the single writer. Callers (UI views, admin panels) interact
//! synchronously through [`BookingStore`] and render what comes back; the
//! collection is snapshotted to disk as JSON after every mutation.

pub mod catalog;
pub mod limits;
pub mod model;
pub mod reporting;
pub mod snapshot;
pub mod store;

pub use catalog::RoomCatalog;
pub use model::{
    Booking, BookingDraft, BookingPatch, BookingStatus, PaymentStatus, Room, RoomType, Stay,
};
pub use store::{BookingStore, StoreError};
