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

//! Booking events and receipts.
//!
//! Every link in a booking chain (payment adapter, hotel system, decorators)
//! records what it did as a [`BookingEvent`]. The resulting [`BookingReceipt`]
//! keeps those events in the order they happened, which is what the console
//! prints and what tests assert on.

use crate::base::{RoomNumber, display_amount};
use crate::decorator::Extra;
use rust_decimal::Decimal;
use std::fmt;

/// A single side effect performed while booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEvent {
    PaymentProcessed { amount: Decimal },
    RoomBooked { room: RoomNumber, amount: Decimal },
    ExtraAdded(Extra),
}

impl fmt::Display for BookingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaymentProcessed { amount } => write!(
                f,
                "Payment of ${} processed in the third-party payment system.",
                display_amount(*amount)
            ),
            Self::RoomBooked { room, amount } => write!(
                f,
                "Room {room} booked in the hotel's system for ${}",
                display_amount(*amount)
            ),
            Self::ExtraAdded(extra) => write!(f, "Added {} to the room.", extra.label()),
        }
    }
}

/// Ordered record of the events produced by one `book_room` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingReceipt {
    events: Vec<BookingEvent>,
}

impl BookingReceipt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: BookingEvent) {
        self.events.push(event);
    }

    /// Appends every event of `other`, preserving its order.
    pub fn extend(&mut self, other: BookingReceipt) {
        self.events.extend(other.events);
    }

    pub fn events(&self) -> &[BookingEvent] {
        &self.events
    }

    /// Extras applied during the booking, innermost decorator first.
    pub fn extras(&self) -> impl Iterator<Item = Extra> + '_ {
        self.events.iter().filter_map(|event| match event {
            BookingEvent::ExtraAdded(extra) => Some(*extra),
            _ => None,
        })
    }

    /// Amount charged by the payment system, if a payment went through.
    pub fn amount_charged(&self) -> Option<Decimal> {
        self.events.iter().find_map(|event| match event {
            BookingEvent::PaymentProcessed { amount } => Some(*amount),
            _ => None,
        })
    }
}
