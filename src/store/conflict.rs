use ulid::Ulid;

use crate::limits::MAX_STAY_NIGHTS;
use crate::model::{Booking, BookingStatus, Stay};

use super::StoreError;

pub(crate) fn validate_stay(stay: &Stay) -> Result<(), StoreError> {
    if stay.check_in >= stay.check_out {
        return Err(StoreError::InvalidStay {
            check_in: stay.check_in,
            check_out: stay.check_out,
        });
    }
    if stay.nights() > MAX_STAY_NIGHTS {
        return Err(StoreError::LimitExceeded("stay too long"));
    }
    Ok(())
}

/// The no-double-booking invariant: no non-cancelled booking on `room_id`
/// may overlap `stay` under half-open semantics. `exclude` skips the booking
/// being updated so it does not conflict with itself.
pub(crate) fn check_no_conflict(
    bookings: &[Booking],
    room_id: &str,
    stay: &Stay,
    exclude: Option<Ulid>,
) -> Result<(), StoreError> {
    for booking in bookings {
        if booking.room_id != room_id || booking.status == BookingStatus::Cancelled {
            continue;
        }
        if exclude.is_some_and(|id| id == booking.id) {
            continue;
        }
        if booking.stay.overlaps(stay) {
            return Err(StoreError::RoomUnavailable {
                room_id: room_id.to_string(),
                conflict: booking.id,
            });
        }
    }
    Ok(())
}
