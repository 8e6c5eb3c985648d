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

//! Benchmarks for the booking pipeline.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Pricing with each strategy
//! - Reserving through increasingly deep decorator stacks
//! - A full scripted console session

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hotel_booking_rs::{
    BookingRequest, DiscountRate, DiscountSource, DiscountedPricing, Extra, Hotel,
    PricingStrategy, RoomNumber, Session, StandardPricing,
};
use rust_decimal_macros::dec;
use std::io::{Cursor, sink};

fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing");

    group.bench_function("standard", |b| {
        b.iter(|| StandardPricing.calculate_price(black_box(dec!(150.0))))
    });

    let discounted = DiscountedPricing::new(DiscountRate::ThirtyPercent);
    group.bench_function("discounted", |b| {
        b.iter(|| discounted.calculate_price(black_box(dec!(150.0))))
    });

    group.finish();
}

fn bench_decorator_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("decorator_depth");
    let hotel = Hotel::default();

    for depth in [0usize, 1, 2, 8] {
        let mut request = BookingRequest::new(RoomNumber(103), dec!(1000.0));
        for i in 0..depth {
            let extra = if i % 2 == 0 { Extra::Breakfast } else { Extra::Wifi };
            request = request.with_extra(extra);
        }

        group.bench_with_input(BenchmarkId::from_parameter(depth), &request, |b, request| {
            b.iter(|| hotel.reserve(black_box(request), &StandardPricing).unwrap())
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("scripted_session", |b| {
        b.iter(|| {
            let mut session = Session::new(Hotel::default(), DiscountSource::seeded(7));
            session
                .run(Cursor::new("1 1000 103 2 B"), sink())
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_pricing, bench_decorator_depth, bench_session);
criterion_main!(benches);
