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

//! Rooms available for booking.

use crate::base::{Room, RoomNumber};
use crate::error::BookingError;
use rust_decimal_macros::dec;

/// Fixed, ordered list of bookable rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    /// Looks up a room by number.
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidRoomSelection`] if the catalog has no such room.
    pub fn room(&self, number: RoomNumber) -> Result<Room, BookingError> {
        self.get(number)
            .copied()
            .ok_or_else(|| BookingError::InvalidRoomSelection(number.to_string()))
    }

    /// Looks up a room from a raw menu answer.
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidRoomSelection`] if the answer is not a number
    /// or names no room in the catalog.
    pub fn select(&self, choice: &str) -> Result<Room, BookingError> {
        choice
            .trim()
            .parse::<u16>()
            .ok()
            .and_then(|number| self.get(RoomNumber(number)))
            .copied()
            .ok_or_else(|| BookingError::InvalidRoomSelection(choice.to_string()))
    }
}

impl Default for RoomCatalog {
    /// Rooms 101 to 103 at 100, 120 and 150 per night.
    fn default() -> Self {
        Self::new(vec![
            Room::new(RoomNumber(101), dec!(100.0)),
            Room::new(RoomNumber(102), dec!(120.0)),
            Room::new(RoomNumber(103), dec!(150.0)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates() {
        let catalog = RoomCatalog::default();
        assert_eq!(catalog.rooms().len(), 3);
        assert_eq!(catalog.room(RoomNumber(101)).unwrap().nightly_rate, dec!(100.0));
        assert_eq!(catalog.room(RoomNumber(102)).unwrap().nightly_rate, dec!(120.0));
        assert_eq!(catalog.room(RoomNumber(103)).unwrap().nightly_rate, dec!(150.0));
    }

    #[test]
    fn select_rejects_rooms_outside_catalog() {
        let catalog = RoomCatalog::default();
        for choice in ["100", "104", "999", "-101", "abc"] {
            assert_eq!(
                catalog.select(choice),
                Err(BookingError::InvalidRoomSelection(choice.to_string()))
            );
        }
        assert_eq!(catalog.select("103").unwrap().number, RoomNumber(103));
    }
}
