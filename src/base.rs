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

//! Core identifier and money types shared by every booking component.

use rust_decimal::Decimal;
use std::fmt;

/// Number of decimal places used when money is rendered.
pub const MONEY_PRECISION: u32 = 2;

/// Rounds an amount for display.
///
/// Computation always happens on the exact [`Decimal`] value; rounding is
/// applied only at the console boundary.
pub fn display_amount(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp(MONEY_PRECISION);
    rounded.rescale(MONEY_PRECISION);
    rounded
}

/// Hotel room number.
///
/// Wraps a `u16`, which comfortably covers any floor/room numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomNumber(pub u16);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable room and its base price per night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub number: RoomNumber,
    pub nightly_rate: Decimal,
}

impl Room {
    pub fn new(number: RoomNumber, nightly_rate: Decimal) -> Self {
        Self {
            number,
            nightly_rate,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${} per night", self.number, self.nightly_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn room_renders_as_menu_line() {
        let room = Room::new(RoomNumber(101), dec!(100.0));
        assert_eq!(room.to_string(), "101: $100.0 per night");
    }

    #[test]
    fn display_amount_rounds_to_cents() {
        assert_eq!(display_amount(dec!(30.000)).to_string(), "30.00");
        assert_eq!(display_amount(dec!(12.345)).to_string(), "12.34");
        assert_eq!(display_amount(dec!(100.0)).to_string(), "100.00");
    }
}
