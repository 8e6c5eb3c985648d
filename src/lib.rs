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

//! # Hotel Booking
//!
//! This library books hotel rooms through a small set of composable parts:
//! a payment adapter in front of a third-party payment system, pricing
//! strategies, room decorators for extras, a worker factory and a hotel
//! manager.
//!
//! ## Core Components
//!
//! - [`Hotel`]: Composition root owning the catalog, payment adapter and manager
//! - [`PaymentAdapter`]: Pays through a [`ThirdPartyPaymentSystem`], then books
//! - [`PricingStrategy`]: [`StandardPricing`] or [`DiscountedPricing`]
//! - [`BreakfastDecorator`] / [`WifiDecorator`]: Extras layered over any [`HotelBookingSystem`]
//! - [`WorkerFactory`]: Hires hotel staff by job label
//! - [`Session`]: The interactive console dialogue
//! - [`BookingError`]: Error types for booking failures
//!
//! ## Example
//!
//! ```
//! use hotel_booking_rs::{
//!     BookingRequest, DiscountRate, DiscountedPricing, Extra, Hotel, RoomNumber,
//! };
//! use rust_decimal_macros::dec;
//!
//! let hotel = Hotel::default();
//!
//! // Room 103 at 150.0 with a 20% discount and breakfast
//! let request = BookingRequest::new(RoomNumber(103), dec!(120.0)).with_extra(Extra::Breakfast);
//! let strategy = DiscountedPricing::new(DiscountRate::TwentyPercent);
//!
//! let outcome = hotel.reserve(&request, &strategy).unwrap();
//! assert_eq!(outcome.quote.final_price, dec!(120.0));
//! assert_eq!(outcome.receipt.extras().collect::<Vec<_>>(), vec![Extra::Breakfast]);
//! ```

mod base;
mod catalog;
pub mod decorator;
pub mod error;
mod hotel;
mod manager;
mod observer;
pub mod payment;
pub mod pricing;
mod receipt;
mod session;
mod worker;

pub use base::{MONEY_PRECISION, Room, RoomNumber, display_amount};
pub use catalog::RoomCatalog;
pub use decorator::{BreakfastDecorator, Extra, RoomDecorator, WifiDecorator, decorate_all};
pub use error::{BookingError, SessionError};
pub use hotel::{BookingOutcome, BookingRequest, Hotel};
pub use manager::HotelManager;
pub use observer::{BookingObserver, Client, ClientRoster};
pub use payment::{
    HotelBooking, HotelBookingSystem, PaymentAdapter, PaymentConfirmation, PaymentSystem,
    ThirdPartyPaymentSystem,
};
pub use pricing::{
    AppliedDiscount, DiscountRate, DiscountSource, DiscountedPricing, PriceQuote, PricingStrategy,
    StandardPricing, StrategyKind,
};
pub use receipt::{BookingEvent, BookingReceipt};
pub use session::Session;
pub use worker::{Chef, Doorman, HotelWorker, Maid, UnknownWorker, WorkerFactory, WorkerKind};
