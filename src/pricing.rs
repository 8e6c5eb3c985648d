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

//! Pricing strategies.
//!
//! A [`PricingStrategy`] turns a room's base price into a [`PriceQuote`].
//! Two strategies exist:
//!
//! - [`StandardPricing`]: the base price, unchanged.
//! - [`DiscountedPricing`]: the base price minus one of the fixed
//!   [`DiscountRate`]s, chosen once when the strategy is built.
//!
//! Random discounts come from an injected [`rand::Rng`], so a seeded
//! generator (see [`DiscountSource`]) reproduces the same rates.

use crate::base::display_amount;
use crate::error::BookingError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;

/// Discount rates a discounted strategy can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountRate {
    TenPercent,
    TwentyPercent,
    ThirtyPercent,
    FortyPercent,
    FiftyPercent,
}

impl DiscountRate {
    pub const ALL: [DiscountRate; 5] = [
        Self::TenPercent,
        Self::TwentyPercent,
        Self::ThirtyPercent,
        Self::FortyPercent,
        Self::FiftyPercent,
    ];

    pub fn percent(self) -> u8 {
        match self {
            Self::TenPercent => 10,
            Self::TwentyPercent => 20,
            Self::ThirtyPercent => 30,
            Self::FortyPercent => 40,
            Self::FiftyPercent => 50,
        }
    }

    /// The rate as a fraction, e.g. `0.20` for twenty percent.
    pub fn fraction(self) -> Decimal {
        Decimal::new(i64::from(self.percent()), 2)
    }

    pub fn from_percent(percent: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|rate| rate.percent() == percent)
    }

    /// Draws a rate uniformly at random.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Discount that was subtracted from a base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDiscount {
    pub rate: DiscountRate,
    pub amount: Decimal,
}

impl fmt::Display for AppliedDiscount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Applied {} discount: -${}",
            self.rate,
            display_amount(self.amount)
        )
    }
}

/// Result of pricing a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub base_price: Decimal,
    pub final_price: Decimal,
    pub discount: Option<AppliedDiscount>,
}

/// Interchangeable pricing algorithm.
pub trait PricingStrategy {
    fn calculate_price(&self, base_price: Decimal) -> PriceQuote;
}

/// Charges the base price as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPricing;

impl PricingStrategy for StandardPricing {
    fn calculate_price(&self, base_price: Decimal) -> PriceQuote {
        PriceQuote {
            base_price,
            final_price: base_price,
            discount: None,
        }
    }
}

/// Subtracts a discount rate fixed for the lifetime of the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountedPricing {
    rate: DiscountRate,
}

impl DiscountedPricing {
    pub fn new(rate: DiscountRate) -> Self {
        Self { rate }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(DiscountRate::sample(rng))
    }

    pub fn rate(&self) -> DiscountRate {
        self.rate
    }
}

impl PricingStrategy for DiscountedPricing {
    fn calculate_price(&self, base_price: Decimal) -> PriceQuote {
        let amount = base_price * self.rate.fraction();
        let final_price = base_price - amount;
        debug!(rate = %self.rate, %base_price, %final_price, "discount applied");

        PriceQuote {
            base_price,
            final_price,
            discount: Some(AppliedDiscount {
                rate: self.rate,
                amount,
            }),
        }
    }
}

/// Where discounted strategies get their rate from.
#[derive(Debug)]
pub enum DiscountSource {
    Random(StdRng),
    Fixed(DiscountRate),
}

impl DiscountSource {
    pub fn from_entropy() -> Self {
        Self::Random(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::Random(StdRng::seed_from_u64(seed))
    }

    pub fn fixed(rate: DiscountRate) -> Self {
        Self::Fixed(rate)
    }

    pub fn next_rate(&mut self) -> DiscountRate {
        match self {
            Self::Random(rng) => DiscountRate::sample(rng),
            Self::Fixed(rate) => *rate,
        }
    }
}

/// Pricing strategies offered in the strategy menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Standard,
    Discounted,
}

impl StrategyKind {
    /// Parses a strategy menu answer (`1` or `2`).
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidMenuChoice`] for anything else.
    pub fn from_choice(choice: &str) -> Result<Self, BookingError> {
        match choice.trim().parse::<i64>() {
            Ok(1) => Ok(Self::Standard),
            Ok(2) => Ok(Self::Discounted),
            _ => Err(BookingError::InvalidMenuChoice {
                menu: "strategy",
                choice: choice.to_string(),
            }),
        }
    }

    /// Builds the strategy, drawing a discount rate when needed.
    pub fn build(self, discounts: &mut DiscountSource) -> Box<dyn PricingStrategy> {
        match self {
            Self::Standard => Box::new(StandardPricing),
            Self::Discounted => Box::new(DiscountedPricing::new(discounts.next_rate())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn standard_keeps_base_price() {
        let quote = StandardPricing.calculate_price(dec!(120.0));
        assert_eq!(quote.final_price, dec!(120.0));
        assert_eq!(quote.discount, None);
    }

    #[test]
    fn discounted_subtracts_fraction() {
        let strategy = DiscountedPricing::new(DiscountRate::TwentyPercent);
        let quote = strategy.calculate_price(dec!(150.0));

        assert_eq!(quote.final_price, dec!(120.0));
        assert_eq!(
            quote.discount,
            Some(AppliedDiscount {
                rate: DiscountRate::TwentyPercent,
                amount: dec!(30.0),
            })
        );
        assert_eq!(
            quote.discount.unwrap().to_string(),
            "Applied 20% discount: -$30.00"
        );
    }

    #[test]
    fn rate_fractions() {
        assert_eq!(DiscountRate::TenPercent.fraction(), dec!(0.10));
        assert_eq!(DiscountRate::FiftyPercent.fraction(), dec!(0.50));
        assert_eq!(DiscountRate::from_percent(30), Some(DiscountRate::ThirtyPercent));
        assert_eq!(DiscountRate::from_percent(25), None);
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut first = DiscountSource::seeded(7);
        let mut second = DiscountSource::seeded(7);
        for _ in 0..20 {
            assert_eq!(first.next_rate(), second.next_rate());
        }
    }

    #[test]
    fn fixed_source_always_returns_rate() {
        let mut source = DiscountSource::fixed(DiscountRate::FortyPercent);
        assert_eq!(source.next_rate(), DiscountRate::FortyPercent);
        assert_eq!(source.next_rate(), DiscountRate::FortyPercent);
    }

    #[test]
    fn strategy_menu_choices() {
        assert_eq!(StrategyKind::from_choice("1"), Ok(StrategyKind::Standard));
        assert_eq!(StrategyKind::from_choice("2"), Ok(StrategyKind::Discounted));
        assert!(matches!(
            StrategyKind::from_choice("3"),
            Err(BookingError::InvalidMenuChoice { menu: "strategy", .. })
        ));
        assert!(StrategyKind::from_choice("two").is_err());
    }

    #[test]
    fn build_uses_source_rate() {
        let mut source = DiscountSource::fixed(DiscountRate::TenPercent);
        let strategy = StrategyKind::Discounted.build(&mut source);
        assert_eq!(strategy.calculate_price(dec!(100.0)).final_price, dec!(90.0));
    }
}
