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

//! Interactive console session.
//!
//! Drives one booking from a text dialogue. Answers are read as
//! whitespace-separated tokens, so several answers may share a line.
//!
//! # Dialogue
//!
//! | Step | Prompt | Invalid answer |
//! |------|--------|----------------|
//! | 1 | client to notify | "Invalid choice", carry on |
//! | 2 | cash amount | session ends |
//! | 3 | room number | session ends |
//! | 4 | pricing strategy | standard pricing |
//! | 5 | extras (B/W/N) | no extras |
//!
//! The session ends with the booking, or with the reason there is none.

use crate::base::RoomNumber;
use crate::decorator::Extra;
use crate::error::{BookingError, SessionError};
use crate::hotel::{BookingOutcome, Hotel};
use crate::observer::ClientRoster;
use crate::payment::{PaymentSystem, ThirdPartyPaymentSystem};
use crate::pricing::{DiscountSource, StrategyKind};
use crate::worker::{WorkerFactory, WorkerKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{info, warn};

/// Room and price sent along with a client greeting.
const GREETING_ROOM: RoomNumber = RoomNumber(101);
const GREETING_AMOUNT: Decimal = dec!(150.0);

/// Splits input lines into whitespace-separated answers.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_answer(&mut self, prompt: &'static str) -> Result<String, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::UnexpectedEof(prompt));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

pub struct Session<P = PaymentSystem> {
    hotel: Hotel<P>,
    roster: ClientRoster,
    workers: Vec<String>,
    factory: WorkerFactory,
    discounts: DiscountSource,
}

impl<P: ThirdPartyPaymentSystem> Session<P> {
    /// Creates a session with the default roster (John, Alice) and the full
    /// staff roll call.
    pub fn new(hotel: Hotel<P>, discounts: DiscountSource) -> Self {
        Self {
            hotel,
            roster: ClientRoster::default(),
            workers: WorkerKind::ALL
                .into_iter()
                .map(|kind| kind.label().to_string())
                .collect(),
            factory: WorkerFactory::new(),
            discounts,
        }
    }

    pub fn with_roster(mut self, roster: ClientRoster) -> Self {
        self.roster = roster;
        self
    }

    /// Replaces the worker labels called at the start of the session.
    pub fn with_workers<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workers = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Runs the dialogue to completion.
    ///
    /// Every failure is reported to `output` in plain words before it is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`SessionError::UnexpectedEof`] - input ended mid-dialogue.
    /// - [`SessionError::InvalidInput`] - the cash amount is not a number.
    /// - [`SessionError::Booking`] - invalid room, insufficient cash or a
    ///   declined payment.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<BookingOutcome, SessionError> {
        let mut tokens = Tokens::new(input);

        self.roll_call(&mut output)?;

        // Client greeting
        writeln!(output, "Notify Clients about Booking:")?;
        for line in self.roster.menu() {
            writeln!(output, "{line}")?;
        }
        let choice = tokens.next_answer("client choice")?;
        match self.roster.notify(&choice, GREETING_ROOM, GREETING_AMOUNT) {
            Ok(greeting) => writeln!(output, "{greeting}")?,
            Err(err) if err.is_recoverable() => writeln!(output, "Invalid choice")?,
            Err(err) => return Err(err.into()),
        }

        write!(output, "Enter the amount of cash you have: $")?;
        output.flush()?;
        let raw = tokens.next_answer("cash amount")?;
        let cash = Decimal::from_str(&raw).map_err(|_| SessionError::InvalidInput {
            field: "cash amount",
            value: raw.clone(),
        })?;

        // Room
        writeln!(output, "\nAvailable Rooms:")?;
        for room in self.hotel.catalog().rooms() {
            writeln!(output, "{room}")?;
        }
        write!(output, "\nEnter the room number you want to book: ")?;
        output.flush()?;
        let raw = tokens.next_answer("room number")?;
        let room = match self.hotel.catalog().select(&raw) {
            Ok(room) => room,
            Err(err) => {
                writeln!(
                    output,
                    "Invalid room number. Please select from the available rooms."
                )?;
                return Err(err.into());
            }
        };

        // Pricing
        writeln!(output, "\nSelect a pricing strategy:")?;
        writeln!(output, "1. Standard Pricing")?;
        writeln!(output, "2. Discounted Pricing")?;
        let raw = tokens.next_answer("pricing strategy")?;
        let kind = match StrategyKind::from_choice(&raw) {
            Ok(kind) => kind,
            Err(err) if err.is_recoverable() => {
                warn!(%err, "falling back to standard pricing");
                writeln!(output, "Invalid strategy choice. Using standard pricing.")?;
                StrategyKind::Standard
            }
            Err(err) => return Err(err.into()),
        };

        write!(
            output,
            "Do you want to add extras? (B for Breakfast, W for Wi-Fi, N for None): "
        )?;
        output.flush()?;
        let raw = tokens.next_answer("extras choice")?;
        let extras: Vec<Extra> = Extra::from_choice(&raw).into_iter().collect();

        let strategy = kind.build(&mut self.discounts);
        let (room, quote) = self.hotel.quote(room.number, strategy.as_ref())?;
        if let Some(discount) = quote.discount {
            writeln!(output, "{discount}")?;
        }

        match self.hotel.book(&room, &quote, cash, &extras) {
            Ok(outcome) => {
                writeln!(output, "\nBooking room {}...", room.number)?;
                for event in outcome.receipt.events() {
                    writeln!(output, "{event}")?;
                }
                for note in &outcome.manager_notes {
                    writeln!(output, "{note}")?;
                }
                Ok(outcome)
            }
            Err(err) => {
                info!(%err, recoverable = err.is_recoverable(), "booking not completed");
                match &err {
                    BookingError::InsufficientFunds { .. } => {
                        writeln!(output, "Insufficient cash. Cannot book the room.")?;
                    }
                    BookingError::PaymentFailure { reason, .. } => {
                        writeln!(output, "\nBooking room {}...", room.number)?;
                        writeln!(output, "Payment declined: {reason}")?;
                    }
                    _ => {}
                }
                Err(err.into())
            }
        }
    }

    /// Prints what each configured worker is doing.
    fn roll_call<W: Write>(&self, output: &mut W) -> Result<(), SessionError> {
        for label in &self.workers {
            match self.factory.get_worker(Some(label.as_str())) {
                Some(worker) => writeln!(output, "{}", worker.work())?,
                None => warn!(%label, "no worker for label"),
            }
        }
        Ok(())
    }
}
