use chrono::NaiveDate;
use ulid::Ulid;

#[derive(Debug)]
pub enum StoreError {
    /// Room id does not resolve in the catalog.
    RoomNotFound(String),
    /// Booking id unknown.
    BookingNotFound(Ulid),
    /// Room is flagged off-inventory (maintenance, closed wing).
    RoomClosed(String),
    /// Requested dates overlap an existing non-cancelled booking.
    RoomUnavailable { room_id: String, conflict: Ulid },
    /// check_out is not strictly after check_in.
    InvalidStay { check_in: NaiveDate, check_out: NaiveDate },
    /// Party size exceeds the room's capacity.
    GuestLimitExceeded { requested: u32, max: u32 },
    LimitExceeded(&'static str),
    Snapshot(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::RoomNotFound(id) => write!(f, "room not found: {id}"),
            StoreError::BookingNotFound(id) => write!(f, "booking not found: {id}"),
            StoreError::RoomClosed(id) => write!(f, "room not open for booking: {id}"),
            StoreError::RoomUnavailable { room_id, conflict } => {
                write!(f, "room {room_id} unavailable: conflicts with booking {conflict}")
            }
            StoreError::InvalidStay { check_in, check_out } => {
                write!(f, "invalid stay: check-out {check_out} must be after check-in {check_in}")
            }
            StoreError::GuestLimitExceeded { requested, max } => {
                write!(f, "{requested} guests exceed room capacity of {max}")
            }
            StoreError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
            StoreError::Snapshot(e) => write!(f, "snapshot error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}
