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

//! Room decorators.
//!
//! A decorator wraps any [`HotelBookingSystem`], lets it book the room, and
//! then adds its extra. Decorators are booking systems themselves, so they
//! stack:
//!
//! ```
//! use hotel_booking_rs::{
//!     BookingEvent, BreakfastDecorator, Extra, HotelBookingSystem, PaymentAdapter,
//!     PaymentSystem, RoomNumber, WifiDecorator,
//! };
//! use rust_decimal_macros::dec;
//!
//! let adapter = PaymentAdapter::new(PaymentSystem::new());
//! let system = WifiDecorator::new(BreakfastDecorator::new(adapter));
//!
//! let receipt = system.book_room(RoomNumber(101), dec!(100.0)).unwrap();
//! assert_eq!(receipt.extras().collect::<Vec<_>>(), vec![Extra::Breakfast, Extra::Wifi]);
//! assert!(matches!(receipt.events()[0], BookingEvent::PaymentProcessed { .. }));
//! ```

use crate::base::RoomNumber;
use crate::error::BookingError;
use crate::payment::HotelBookingSystem;
use crate::receipt::{BookingEvent, BookingReceipt};
use rust_decimal::Decimal;
use tracing::debug;

/// Optional room extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extra {
    Breakfast,
    Wifi,
}

impl Extra {
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Wifi => "Wi-Fi",
        }
    }

    /// Parses an extras menu answer: `B` or `W`, in either case.
    ///
    /// Any other answer (including `N`) means no extra.
    pub fn from_choice(choice: &str) -> Option<Self> {
        if choice.eq_ignore_ascii_case("b") {
            Some(Self::Breakfast)
        } else if choice.eq_ignore_ascii_case("w") {
            Some(Self::Wifi)
        } else {
            None
        }
    }

    /// Wraps `inner` in the decorator for this extra.
    pub fn decorate<'a>(
        self,
        inner: Box<dyn HotelBookingSystem + 'a>,
    ) -> Box<dyn HotelBookingSystem + 'a> {
        match self {
            Self::Breakfast => Box::new(BreakfastDecorator::new(inner)),
            Self::Wifi => Box::new(WifiDecorator::new(inner)),
        }
    }
}

/// Wraps `inner` with every extra in turn; the first extra is innermost.
pub fn decorate_all<'a>(
    inner: Box<dyn HotelBookingSystem + 'a>,
    extras: &[Extra],
) -> Box<dyn HotelBookingSystem + 'a> {
    extras
        .iter()
        .fold(inner, |system, extra| extra.decorate(system))
}

/// A booking system that adds something to the room after booking it.
pub trait RoomDecorator: HotelBookingSystem {
    fn add_extras(&self) -> BookingEvent;
}

/// Books through `inner`, then records `decorator`'s extra.
fn book_then_add<D: RoomDecorator + ?Sized>(
    decorator: &D,
    inner: &dyn HotelBookingSystem,
    room: RoomNumber,
    amount: Decimal,
) -> Result<BookingReceipt, BookingError> {
    let mut receipt = inner.book_room(room, amount)?;
    let extra = decorator.add_extras();
    debug!(%room, %extra, "extra added");
    receipt.push(extra);
    Ok(receipt)
}

/// Adds breakfast to the booked room.
#[derive(Debug, Clone)]
pub struct BreakfastDecorator<B> {
    inner: B,
}

impl<B: HotelBookingSystem> BreakfastDecorator<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: HotelBookingSystem> HotelBookingSystem for BreakfastDecorator<B> {
    fn book_room(&self, room: RoomNumber, amount: Decimal) -> Result<BookingReceipt, BookingError> {
        book_then_add(self, &self.inner, room, amount)
    }
}

impl<B: HotelBookingSystem> RoomDecorator for BreakfastDecorator<B> {
    fn add_extras(&self) -> BookingEvent {
        BookingEvent::ExtraAdded(Extra::Breakfast)
    }
}

/// Adds Wi-Fi to the booked room.
#[derive(Debug, Clone)]
pub struct WifiDecorator<B> {
    inner: B,
}

impl<B: HotelBookingSystem> WifiDecorator<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: HotelBookingSystem> HotelBookingSystem for WifiDecorator<B> {
    fn book_room(&self, room: RoomNumber, amount: Decimal) -> Result<BookingReceipt, BookingError> {
        book_then_add(self, &self.inner, room, amount)
    }
}

impl<B: HotelBookingSystem> RoomDecorator for WifiDecorator<B> {
    fn add_extras(&self) -> BookingEvent {
        BookingEvent::ExtraAdded(Extra::Wifi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::HotelBooking;
    use rust_decimal_macros::dec;

    #[test]
    fn extras_menu_choices() {
        assert_eq!(Extra::from_choice("B"), Some(Extra::Breakfast));
        assert_eq!(Extra::from_choice("b"), Some(Extra::Breakfast));
        assert_eq!(Extra::from_choice("W"), Some(Extra::Wifi));
        assert_eq!(Extra::from_choice("w"), Some(Extra::Wifi));
        assert_eq!(Extra::from_choice("N"), None);
        assert_eq!(Extra::from_choice("breakfast"), None);
        assert_eq!(Extra::from_choice(""), None);
    }

    #[test]
    fn decorator_books_then_adds_extra() {
        let system = BreakfastDecorator::new(HotelBooking);

        let receipt = system.book_room(RoomNumber(102), dec!(120.0)).unwrap();

        assert_eq!(
            receipt.events(),
            &[
                BookingEvent::RoomBooked {
                    room: RoomNumber(102),
                    amount: dec!(120.0)
                },
                BookingEvent::ExtraAdded(Extra::Breakfast),
            ]
        );
    }

    #[test]
    fn decorate_all_with_no_extras_is_identity() {
        let system = decorate_all(Box::new(HotelBooking), &[]);
        let receipt = system.book_room(RoomNumber(101), dec!(1)).unwrap();
        assert_eq!(receipt.extras().count(), 0);
    }

    #[test]
    fn decorate_all_stacks_innermost_first() {
        let system = decorate_all(Box::new(HotelBooking), &[Extra::Wifi, Extra::Breakfast]);
        let receipt = system.book_room(RoomNumber(101), dec!(1)).unwrap();
        assert_eq!(
            receipt.extras().collect::<Vec<_>>(),
            vec![Extra::Wifi, Extra::Breakfast]
        );
    }
}
