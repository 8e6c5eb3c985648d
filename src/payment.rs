// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Payment adapter.
//!
//! The hotel only knows how to [`book_room`](HotelBookingSystem::book_room);
//! the payment provider only knows how to
//! [`make_payment`](ThirdPartyPaymentSystem::make_payment). [`PaymentAdapter`]
//! bridges the two: it charges the guest first and books the room only once
//! the charge went through.

use crate::base::RoomNumber;
use crate::error::BookingError;
use crate::receipt::{BookingEvent, BookingReceipt};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Capability to book a room for a given amount.
///
/// Implemented by the plain hotel system, by [`PaymentAdapter`] and by every
/// room decorator, so implementations compose by wrapping.
pub trait HotelBookingSystem {
    fn book_room(&self, room: RoomNumber, amount: Decimal) -> Result<BookingReceipt, BookingError>;
}

impl<T: HotelBookingSystem + ?Sized> HotelBookingSystem for &T {
    fn book_room(&self, room: RoomNumber, amount: Decimal) -> Result<BookingReceipt, BookingError> {
        (**self).book_room(room, amount)
    }
}

impl<T: HotelBookingSystem + ?Sized> HotelBookingSystem for Box<T> {
    fn book_room(&self, room: RoomNumber, amount: Decimal) -> Result<BookingReceipt, BookingError> {
        (**self).book_room(room, amount)
    }
}

/// Confirmation returned by a successful charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub amount: Decimal,
}

/// Capability exposed by the external payment provider.
pub trait ThirdPartyPaymentSystem {
    /// Charges `amount`.
    ///
    /// # Errors
    ///
    /// [`BookingError::PaymentFailure`] when the provider declines the charge.
    fn make_payment(&self, amount: Decimal) -> Result<PaymentConfirmation, BookingError>;
}

impl<T: ThirdPartyPaymentSystem + ?Sized> ThirdPartyPaymentSystem for &T {
    fn make_payment(&self, amount: Decimal) -> Result<PaymentConfirmation, BookingError> {
        (**self).make_payment(amount)
    }
}

/// Stub payment provider.
///
/// Approves every charge unless an approval limit is configured, in which
/// case charges above the limit are declined.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentSystem {
    approval_limit: Option<Decimal>,
}

impl PaymentSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_approval_limit(limit: Decimal) -> Self {
        Self {
            approval_limit: Some(limit),
        }
    }
}

impl ThirdPartyPaymentSystem for PaymentSystem {
    fn make_payment(&self, amount: Decimal) -> Result<PaymentConfirmation, BookingError> {
        if let Some(limit) = self.approval_limit.filter(|limit| amount > *limit) {
            warn!(%amount, %limit, "payment declined");
            return Err(BookingError::PaymentFailure {
                amount,
                reason: format!("amount exceeds approval limit of ${limit}"),
            });
        }
        info!(%amount, "payment processed");
        Ok(PaymentConfirmation { amount })
    }
}

/// The hotel's own booking system.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotelBooking;

impl HotelBookingSystem for HotelBooking {
    fn book_room(&self, room: RoomNumber, amount: Decimal) -> Result<BookingReceipt, BookingError> {
        info!(%room, %amount, "room booked");
        let mut receipt = BookingReceipt::new();
        receipt.push(BookingEvent::RoomBooked { room, amount });
        Ok(receipt)
    }
}

/// Adapts a [`ThirdPartyPaymentSystem`] to the [`HotelBookingSystem`] capability.
#[derive(Debug, Clone)]
pub struct PaymentAdapter<P, H = HotelBooking> {
    payments: P,
    hotel: H,
}

impl<P: ThirdPartyPaymentSystem> PaymentAdapter<P> {
    pub fn new(payments: P) -> Self {
        Self::with_hotel(payments, HotelBooking)
    }
}

impl<P: ThirdPartyPaymentSystem, H: HotelBookingSystem> PaymentAdapter<P, H> {
    pub fn with_hotel(payments: P, hotel: H) -> Self {
        Self { payments, hotel }
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }
}

impl<P: ThirdPartyPaymentSystem, H: HotelBookingSystem> HotelBookingSystem for PaymentAdapter<P, H> {
    /// Charges `amount`, then books the room.
    ///
    /// A declined payment is returned as-is and the hotel system is never
    /// called.
    fn book_room(&self, room: RoomNumber, amount: Decimal) -> Result<BookingReceipt, BookingError> {
        let confirmation = self.payments.make_payment(amount)?;

        let mut receipt = BookingReceipt::new();
        receipt.push(BookingEvent::PaymentProcessed {
            amount: confirmation.amount,
        });
        receipt.extend(self.hotel.book_room(room, amount)?);
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::cell::Cell;

    /// Hotel system that only counts how often it was asked to book.
    #[derive(Default)]
    struct CountingHotel {
        calls: Cell<u32>,
    }

    impl HotelBookingSystem for CountingHotel {
        fn book_room(
            &self,
            room: RoomNumber,
            amount: Decimal,
        ) -> Result<BookingReceipt, BookingError> {
            self.calls.set(self.calls.get() + 1);
            HotelBooking.book_room(room, amount)
        }
    }

    #[test]
    fn adapter_pays_before_booking() {
        let adapter = PaymentAdapter::new(PaymentSystem::new());

        let receipt = adapter.book_room(RoomNumber(101), dec!(100.0)).unwrap();

        assert_eq!(
            receipt.events(),
            &[
                BookingEvent::PaymentProcessed { amount: dec!(100.0) },
                BookingEvent::RoomBooked {
                    room: RoomNumber(101),
                    amount: dec!(100.0)
                },
            ]
        );
    }

    #[test]
    fn declined_payment_never_books() {
        let hotel = CountingHotel::default();
        let adapter = PaymentAdapter::with_hotel(
            PaymentSystem::with_approval_limit(dec!(50.0)),
            &hotel,
        );

        let result = adapter.book_room(RoomNumber(102), dec!(120.0));

        assert!(matches!(
            result,
            Err(BookingError::PaymentFailure { amount, .. }) if amount == dec!(120.0)
        ));
        assert_eq!(hotel.calls.get(), 0);
    }

    #[test]
    fn approval_limit_is_inclusive() {
        let payments = PaymentSystem::with_approval_limit(dec!(120.0));
        assert!(payments.make_payment(dec!(120.0)).is_ok());
        assert!(payments.make_payment(dec!(120.01)).is_err());
    }

    #[test]
    fn boxed_and_borrowed_systems_book_through() {
        let boxed: Box<dyn HotelBookingSystem> = Box::new(HotelBooking);
        let borrowed = &HotelBooking;

        assert_eq!(
            boxed.book_room(RoomNumber(103), dec!(1)).unwrap().events().len(),
            1
        );
        assert_eq!(
            borrowed
                .book_room(RoomNumber(103), dec!(1))
                .unwrap()
                .events()
                .len(),
            1
        );
    }
}
