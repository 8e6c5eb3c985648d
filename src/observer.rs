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

//! Client greetings.
//!
//! Clients are notified one at a time, picked by number from a menu. Nothing
//! subscribes to bookings; a notification is only ever sent on request.

use crate::base::RoomNumber;
use crate::error::BookingError;
use rust_decimal::Decimal;
use tracing::warn;

/// Receives a notification about a room.
pub trait BookingObserver {
    fn update(&self, room: RoomNumber, amount: Decimal) -> String;
}

/// A named hotel client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: String,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BookingObserver for Client {
    fn update(&self, _room: RoomNumber, _amount: Decimal) -> String {
        format!(
            "Hello {}! Welcome to our hotel, which room you would like to book?",
            self.name
        )
    }
}

/// Clients offered in the notification menu, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRoster {
    clients: Vec<Client>,
}

impl ClientRoster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clients: names.into_iter().map(Client::new).collect(),
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Menu lines, one per client.
    pub fn menu(&self) -> impl Iterator<Item = String> + '_ {
        self.clients
            .iter()
            .enumerate()
            .map(|(i, client)| format!("Press {} to notify {}", i + 1, client.name()))
    }

    /// Notifies the client picked by a 1-based menu answer.
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidMenuChoice`] if the answer picks no client.
    pub fn notify(
        &self,
        choice: &str,
        room: RoomNumber,
        amount: Decimal,
    ) -> Result<String, BookingError> {
        let client = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.clients.get(index))
            .ok_or_else(|| {
                warn!(choice, "no client for menu choice");
                BookingError::InvalidMenuChoice {
                    menu: "client",
                    choice: choice.to_string(),
                }
            })?;
        Ok(client.update(room, amount))
    }
}

impl Default for ClientRoster {
    fn default() -> Self {
        Self::new(["John", "Alice"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_menu() {
        let roster = ClientRoster::default();
        let lines: Vec<_> = roster.menu().collect();
        assert_eq!(lines, vec!["Press 1 to notify John", "Press 2 to notify Alice"]);
    }

    #[test]
    fn notify_greets_selected_client() {
        let roster = ClientRoster::default();
        assert_eq!(
            roster.notify("2", RoomNumber(101), dec!(150.0)).unwrap(),
            "Hello Alice! Welcome to our hotel, which room you would like to book?"
        );
    }

    #[test]
    fn notify_rejects_out_of_range_choices() {
        let roster = ClientRoster::default();
        for choice in ["0", "3", "-1", "abc", ""] {
            assert!(matches!(
                roster.notify(choice, RoomNumber(101), dec!(150.0)),
                Err(BookingError::InvalidMenuChoice { menu: "client", .. })
            ));
        }
    }
}
