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

use clap::Parser;
use hotel_booking_rs::{
    ClientRoster, DiscountRate, DiscountSource, Hotel, PaymentSystem, Session, SessionError,
    WorkerKind,
};
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Hotel Booking - Book a room from the console
///
/// Greets a client, asks for cash, a room, a pricing strategy and extras,
/// then books the room if the guest can afford it.
#[derive(Parser, Debug)]
#[command(name = "hotel-booking-rs")]
#[command(about = "An interactive hotel room booking console", long_about = None)]
struct Args {
    /// Seed for the random discount, for reproducible runs
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Always apply this discount rate (10, 20, 30, 40 or 50)
    #[arg(long, value_name = "PERCENT", value_parser = parse_discount)]
    discount: Option<DiscountRate>,

    /// Decline payments above this amount
    #[arg(long, value_name = "AMOUNT")]
    payment_limit: Option<Decimal>,

    /// Worker called at the start of the session (repeatable)
    #[arg(long = "worker", value_name = "LABEL", default_values_t = default_workers())]
    workers: Vec<String>,

    /// Client offered in the notification menu (repeatable)
    #[arg(long = "client", value_name = "NAME", default_values = ["John", "Alice"])]
    clients: Vec<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log: String,
}

fn default_workers() -> Vec<String> {
    WorkerKind::ALL
        .into_iter()
        .map(|kind| kind.label().to_string())
        .collect()
}

fn parse_discount(raw: &str) -> Result<DiscountRate, String> {
    raw.parse::<u8>()
        .ok()
        .and_then(DiscountRate::from_percent)
        .ok_or_else(|| format!("'{raw}' is not one of 10, 20, 30, 40, 50"))
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so the dialogue on stdout stays readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let discounts = match (args.discount, args.seed) {
        (Some(rate), _) => DiscountSource::fixed(rate),
        (None, Some(seed)) => DiscountSource::seeded(seed),
        (None, None) => DiscountSource::from_entropy(),
    };
    let payments = match args.payment_limit {
        Some(limit) => PaymentSystem::with_approval_limit(limit),
        None => PaymentSystem::new(),
    };

    let mut session = Session::new(Hotel::new(payments), discounts)
        .with_roster(ClientRoster::new(args.clients))
        .with_workers(args.workers);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = session.run(stdin.lock(), stdout.lock());
    if let Err(e) = io::stdout().flush() {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }

    if let Err(e) = result {
        tracing::debug!(error = %e, "session ended without a booking");
        // Booking failures were already explained in the dialogue
        if !matches!(e, SessionError::Booking(_)) {
            eprintln!("Error: {}", e);
        }
        process::exit(e.exit_code());
    }
}
