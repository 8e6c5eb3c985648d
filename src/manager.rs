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

//! Hotel manager.
//!
//! There is exactly one manager per [`Hotel`](crate::Hotel). Only this crate
//! can construct one, and the hotel hands out shared references to the
//! instance it owns, so every caller sees the same manager.

use tracing::info;

#[derive(Debug)]
pub struct HotelManager {
    _private: (),
}

impl HotelManager {
    pub(crate) fn new() -> Self {
        info!("hotel manager on duty");
        Self { _private: () }
    }

    pub fn manage_hotel(&self) -> &'static str {
        "Performing hotel management operations..."
    }

    pub fn welcome_guest(&self) -> &'static str {
        "Welcome! Enjoy your stay at our hotel."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_messages() {
        let manager = HotelManager::new();
        assert_eq!(
            manager.manage_hotel(),
            "Performing hotel management operations..."
        );
        assert_eq!(
            manager.welcome_guest(),
            "Welcome! Enjoy your stay at our hotel."
        );
    }
}
