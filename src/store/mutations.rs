use chrono::Utc;
use tracing::debug;
use ulid::Ulid;

use crate::limits::{MAX_NAME_LEN, MAX_TEXT_LEN};
use crate::model::{Booking, BookingDraft, BookingPatch, BookingStatus};

use super::conflict::{check_no_conflict, validate_stay};
use super::{BookingStore, StoreError};

impl BookingStore {
    /// Create a booking from a validated draft.
    ///
    /// The overlap check happens here, not at the call site: a conflicting
    /// non-cancelled booking on the same room yields `RoomUnavailable` even
    /// if the caller skipped `check_room_availability`. `nights` and
    /// `total_amount` are always recomputed from the stay and the catalog
    /// price, never taken from the caller.
    pub fn create_booking(&mut self, draft: BookingDraft) -> Result<Booking, StoreError> {
        validate_stay(&draft.stay)?;
        if draft.user_name.len() > MAX_NAME_LEN || draft.user_email.len() > MAX_NAME_LEN {
            return Err(StoreError::LimitExceeded("guest name or email too long"));
        }
        if let Some(ref requests) = draft.special_requests
            && requests.len() > MAX_TEXT_LEN {
                return Err(StoreError::LimitExceeded("special requests too long"));
            }

        let room = self
            .catalog
            .room(&draft.room_id)
            .ok_or_else(|| StoreError::RoomNotFound(draft.room_id.clone()))?;
        if !room.available {
            return Err(StoreError::RoomClosed(room.id.clone()));
        }
        if draft.guests == 0 {
            return Err(StoreError::LimitExceeded("guests must be positive"));
        }
        if draft.guests > room.max_guests {
            return Err(StoreError::GuestLimitExceeded {
                requested: draft.guests,
                max: room.max_guests,
            });
        }

        check_no_conflict(&self.bookings, &draft.room_id, &draft.stay, None)?;

        let nights = draft.stay.nights();
        let now = Utc::now();
        let booking = Booking {
            id: Ulid::new(),
            user_id: draft.user_id,
            user_name: draft.user_name,
            user_email: draft.user_email,
            guest_phone: draft.guest_phone,
            room_id: draft.room_id,
            stay: draft.stay,
            guests: draft.guests,
            nights,
            total_amount: nights * room.price_per_night,
            status: draft.status,
            payment_status: draft.payment_status,
            special_requests: draft.special_requests,
            created_at: now,
            updated_at: now,
        };

        self.bookings.push(booking.clone());
        if let Err(e) = self.persist() {
            self.bookings.pop();
            return Err(e);
        }
        debug!("created booking {} for room {}", booking.id, booking.room_id);
        Ok(booking)
    }

    /// Merge `patch` into the booking and bump `updated_at`.
    ///
    /// A patched stay is validated and conflict-checked against every other
    /// non-cancelled booking on the room, and the derived fields are
    /// recomputed at the room's catalog price. Patching a cancelled booking
    /// back to a live status re-runs the same conflict check, so a revival
    /// cannot collide with dates that were rebooked after the cancellation.
    pub fn update_booking(&mut self, id: Ulid, patch: BookingPatch) -> Result<(), StoreError> {
        let idx = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::BookingNotFound(id))?;

        let was_cancelled = self.bookings[idx].status == BookingStatus::Cancelled;
        let mut updated = self.bookings[idx].clone();

        if let Some(stay) = patch.stay {
            validate_stay(&stay)?;
            let room = self
                .catalog
                .room(&updated.room_id)
                .ok_or_else(|| StoreError::RoomNotFound(updated.room_id.clone()))?;
            updated.stay = stay;
            updated.nights = stay.nights();
            updated.total_amount = stay.nights() * room.price_per_night;
        }
        if let Some(guests) = patch.guests {
            let room = self
                .catalog
                .room(&updated.room_id)
                .ok_or_else(|| StoreError::RoomNotFound(updated.room_id.clone()))?;
            if guests == 0 {
                return Err(StoreError::LimitExceeded("guests must be positive"));
            }
            if guests > room.max_guests {
                return Err(StoreError::GuestLimitExceeded { requested: guests, max: room.max_guests });
            }
            updated.guests = guests;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(payment_status) = patch.payment_status {
            updated.payment_status = payment_status;
        }
        if let Some(requests) = patch.special_requests {
            if requests.len() > MAX_TEXT_LEN {
                return Err(StoreError::LimitExceeded("special requests too long"));
            }
            updated.special_requests = Some(requests);
        }
        if let Some(phone) = patch.guest_phone {
            updated.guest_phone = Some(phone);
        }

        // A changed stay, or a booking revived out of Cancelled, must re-pass
        // the overlap check while it will count as non-cancelled. The dates of
        // a booking that stays cancelled block nothing and need no check.
        let revived = was_cancelled && updated.status != BookingStatus::Cancelled;
        if updated.status != BookingStatus::Cancelled && (patch.stay.is_some() || revived) {
            check_no_conflict(&self.bookings, &updated.room_id, &updated.stay, Some(id))?;
        }

        updated.updated_at = Utc::now();

        let previous = std::mem::replace(&mut self.bookings[idx], updated);
        if let Err(e) = self.persist() {
            self.bookings[idx] = previous;
            return Err(e);
        }
        debug!("updated booking {id}");
        Ok(())
    }

    /// Status transition to Cancelled — bookings are never physically
    /// removed. Cancelling an already-cancelled booking is a no-op.
    pub fn cancel_booking(&mut self, id: Ulid) -> Result<(), StoreError> {
        let booking = self
            .bookings
            .iter()
            .find(|b| b.id == id)
            .ok_or(StoreError::BookingNotFound(id))?;
        if booking.status == BookingStatus::Cancelled {
            return Ok(());
        }
        self.update_booking(
            id,
            BookingPatch { status: Some(BookingStatus::Cancelled), ..Default::default() },
        )
    }
}
