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

//! Error types for booking and for the console session.

use rust_decimal::Decimal;
use thiserror::Error;

/// Booking failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A menu answer matched none of the offered options
    #[error("invalid {menu} choice: {choice:?}")]
    InvalidMenuChoice { menu: &'static str, choice: String },

    /// Room number is not part of the catalog
    #[error("invalid room number: {0}")]
    InvalidRoomSelection(String),

    /// Cash on hand does not cover the computed price
    #[error("insufficient cash: have ${cash}, need ${price}")]
    InsufficientFunds { cash: Decimal, price: Decimal },

    /// The third-party payment system declined the charge
    #[error("payment of ${amount} declined: {reason}")]
    PaymentFailure { amount: Decimal, reason: String },
}

impl BookingError {
    /// Whether nothing was charged or booked, so the caller may carry on or
    /// try again.
    ///
    /// Invalid menu choices fall back to a default, and a declined payment
    /// leaves the room unbooked. Invalid rooms and insufficient cash end the
    /// booking.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidMenuChoice { .. } | Self::PaymentFailure { .. }
        )
    }
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the prompt was answered
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    /// Answer could not be parsed
    #[error("invalid {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl SessionError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::UnexpectedEof(_) => 1,
            Self::InvalidInput { .. } => 2,
            Self::Booking(BookingError::InvalidMenuChoice { .. })
            | Self::Booking(BookingError::InvalidRoomSelection(_)) => 2,
            Self::Booking(BookingError::InsufficientFunds { .. }) => 3,
            Self::Booking(BookingError::PaymentFailure { .. }) => 4,
        }
    }
}
