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

//! Hotel composition root.
//!
//! The [`Hotel`] owns everything a booking needs: the room catalog, the
//! payment adapter and the one [`HotelManager`] of the run.
//!
//! # Booking
//!
//! 1. **Quote**: look the room up and price it with a [`PricingStrategy`].
//! 2. **Afford check**: the guest's cash must cover the final price.
//! 3. **Book**: wrap the payment adapter in the requested extras and book.
//! 4. **Manager**: after a successful booking the manager runs the hotel
//!    and welcomes the guest.
//!
//! # Example
//!
//! ```
//! use hotel_booking_rs::{BookingRequest, Hotel, PaymentSystem, RoomNumber, StandardPricing};
//! use rust_decimal_macros::dec;
//!
//! let hotel = Hotel::new(PaymentSystem::new());
//! let request = BookingRequest::new(RoomNumber(101), dec!(100.0));
//!
//! let outcome = hotel.reserve(&request, &StandardPricing).unwrap();
//! assert_eq!(outcome.receipt.amount_charged(), Some(dec!(100.0)));
//! ```

use crate::base::{Room, RoomNumber};
use crate::catalog::RoomCatalog;
use crate::decorator::{Extra, decorate_all};
use crate::error::BookingError;
use crate::manager::HotelManager;
use crate::payment::{HotelBookingSystem, PaymentAdapter, PaymentSystem, ThirdPartyPaymentSystem};
use crate::pricing::{PriceQuote, PricingStrategy};
use crate::receipt::BookingReceipt;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// What the guest asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub room: RoomNumber,
    pub cash: Decimal,
    /// Extras to decorate the booking with, innermost first.
    pub extras: Vec<Extra>,
}

impl BookingRequest {
    pub fn new(room: RoomNumber, cash: Decimal) -> Self {
        Self {
            room,
            cash,
            extras: Vec::new(),
        }
    }

    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extras.push(extra);
        self
    }
}

/// A completed booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub room: Room,
    pub quote: PriceQuote,
    pub receipt: BookingReceipt,
    /// Lines from the manager, in the order they were produced.
    pub manager_notes: Vec<&'static str>,
}

#[derive(Debug)]
pub struct Hotel<P = PaymentSystem> {
    catalog: RoomCatalog,
    adapter: PaymentAdapter<P>,
    manager: HotelManager,
}

impl<P: ThirdPartyPaymentSystem> Hotel<P> {
    /// Creates a hotel with the standard three-room catalog.
    pub fn new(payments: P) -> Self {
        Self::with_catalog(RoomCatalog::default(), payments)
    }

    pub fn with_catalog(catalog: RoomCatalog, payments: P) -> Self {
        Self {
            catalog,
            adapter: PaymentAdapter::new(payments),
            manager: HotelManager::new(),
        }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    /// The hotel's manager. Every call returns the same instance.
    pub fn manager(&self) -> &HotelManager {
        &self.manager
    }

    pub fn payments(&self) -> &P {
        self.adapter.payments()
    }

    /// Prices a room.
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidRoomSelection`] if the room is not in the catalog.
    pub fn quote(
        &self,
        room: RoomNumber,
        strategy: &dyn PricingStrategy,
    ) -> Result<(Room, PriceQuote), BookingError> {
        let room = self.catalog.room(room)?;
        let quote = strategy.calculate_price(room.nightly_rate);
        debug!(room = %room.number, final_price = %quote.final_price, "room quoted");
        Ok((room, quote))
    }

    /// Books a quoted room if the guest can afford it.
    ///
    /// # Errors
    ///
    /// - [`BookingError::InsufficientFunds`] - `cash` is below the final price.
    ///   Nothing is charged or booked.
    /// - [`BookingError::PaymentFailure`] - the payment system declined.
    ///   The room is not booked and the manager is not involved.
    pub fn book(
        &self,
        room: &Room,
        quote: &PriceQuote,
        cash: Decimal,
        extras: &[Extra],
    ) -> Result<BookingOutcome, BookingError> {
        if cash < quote.final_price {
            return Err(BookingError::InsufficientFunds {
                cash,
                price: quote.final_price,
            });
        }

        let system = decorate_all(Box::new(&self.adapter), extras);
        let receipt = system.book_room(room.number, quote.final_price)?;
        info!(
            room = %room.number,
            amount = %quote.final_price,
            extras = extras.len(),
            "booking complete"
        );

        let manager_notes = vec![self.manager.manage_hotel(), self.manager.welcome_guest()];

        Ok(BookingOutcome {
            room: *room,
            quote: *quote,
            receipt,
            manager_notes,
        })
    }

    /// Quotes and books in one step.
    ///
    /// # Errors
    ///
    /// Any error of [`Hotel::quote`] or [`Hotel::book`].
    pub fn reserve(
        &self,
        request: &BookingRequest,
        strategy: &dyn PricingStrategy,
    ) -> Result<BookingOutcome, BookingError> {
        let (room, quote) = self.quote(request.room, strategy)?;
        self.book(&room, &quote, request.cash, &request.extras)
    }
}

impl Default for Hotel<PaymentSystem> {
    fn default() -> Self {
        Self::new(PaymentSystem::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::StandardPricing;
    use rust_decimal_macros::dec;

    #[test]
    fn manager_is_shared() {
        let hotel = Hotel::default();
        assert!(std::ptr::eq(hotel.manager(), hotel.manager()));
    }

    #[test]
    fn quote_unknown_room() {
        let hotel = Hotel::default();
        assert_eq!(
            hotel.quote(RoomNumber(999), &StandardPricing).unwrap_err(),
            BookingError::InvalidRoomSelection("999".to_string())
        );
    }

    #[test]
    fn exact_cash_is_enough() {
        let hotel = Hotel::default();
        let (room, quote) = hotel.quote(RoomNumber(102), &StandardPricing).unwrap();
        assert!(hotel.book(&room, &quote, dec!(120.0), &[]).is_ok());
        assert!(hotel.book(&room, &quote, dec!(119.99), &[]).is_err());
    }

    #[test]
    fn manager_notes_follow_booking() {
        let hotel = Hotel::default();
        let outcome = hotel
            .reserve(&BookingRequest::new(RoomNumber(101), dec!(500)), &StandardPricing)
            .unwrap();
        assert_eq!(
            outcome.manager_notes,
            vec![
                "Performing hotel management operations...",
                "Welcome! Enjoy your stay at our hotel.",
            ]
        );
    }
}
