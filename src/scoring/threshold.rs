// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact similarity thresholds.
//!
//! A threshold is kept as a reduced fraction `numerator / denominator` in
//! `[0, 1]`. Decimal literals are parsed digit by digit (`"0.35"` is `7/20`,
//! not the nearest `f64`), and the comparison with a score is a
//! remainder-based fraction comparison that cannot overflow. A score that
//! lands exactly on the threshold therefore always matches.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThresholdError;

/// Longest decimal expansion accepted. `10^30` fits comfortably in `u128`.
pub const MAX_FRACTION_DIGITS: usize = 30;

/// Inclusive lower bound on similarity for a window to count as a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ThresholdLiteral", into = "String")]
pub struct Threshold {
    numerator: u128,
    denominator: u128,
}

impl Threshold {
    /// Everything matches, including degenerate windows.
    pub const ZERO: Threshold = Threshold {
        numerator: 0,
        denominator: 1,
    };

    /// Only identical bigram sets match.
    pub const ONE: Threshold = Threshold {
        numerator: 1,
        denominator: 1,
    };

    /// `0.5`, the value the command-line tool has always used.
    pub const DEFAULT: Threshold = Threshold {
        numerator: 1,
        denominator: 2,
    };

    /// Build from a fraction. Reduced on construction.
    pub fn from_ratio(numerator: u128, denominator: u128) -> Result<Self, ThresholdError> {
        if denominator == 0 || numerator > denominator {
            return Err(ThresholdError::OutOfRange(format!(
                "{}/{}",
                numerator, denominator
            )));
        }
        let divisor = gcd(numerator, denominator);
        Ok(Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        })
    }

    pub fn numerator(&self) -> u128 {
        self.numerator
    }

    pub fn denominator(&self) -> u128 {
        self.denominator
    }

    /// `shared / total >= self`, with `total > 0`.
    #[inline]
    pub fn is_met_by(&self, shared: u64, total: u64) -> bool {
        debug_assert!(total > 0, "score denominator must be positive");
        cmp_ratio(
            u128::from(shared),
            u128::from(total),
            self.numerator,
            self.denominator,
        ) != Ordering::Less
    }

    /// Lossy view for display.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Digits after the point in the exact decimal expansion, if it terminates.
    fn decimal_places(&self) -> Option<usize> {
        let (mut d, mut twos, mut fives) = (self.denominator, 0, 0);
        while d % 2 == 0 {
            d /= 2;
            twos += 1;
        }
        while d % 5 == 0 {
            d /= 5;
            fives += 1;
        }
        (d == 1).then_some(usize::max(twos, fives))
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialOrd for Threshold {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Threshold {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ratio(
            self.numerator,
            self.denominator,
            other.numerator,
            other.denominator,
        )
    }
}

/// Compare `a/b` with `c/d` (`b, d > 0`) without multiplying.
///
/// Compares integer parts, then recurses on the reciprocals of the remainders
/// (with the order flipped). This is the continued-fraction expansion of both
/// values walked in lockstep, so it terminates in `O(log max(b, d))` steps.
pub(crate) fn cmp_ratio(mut a: u128, mut b: u128, mut c: u128, mut d: u128) -> Ordering {
    let mut flipped = false;
    loop {
        let (q1, r1) = (a / b, a % b);
        let (q2, r2) = (c / d, c % d);
        let ordering = match q1.cmp(&q2) {
            Ordering::Equal => match (r1 == 0, r2 == 0) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => {
                    // a/b = q + r1/b, c/d = q + r2/d; compare r1/b vs r2/d
                    // via b/r1 vs d/r2, which reverses the order.
                    (a, b, c, d) = (b, r1, d, r2);
                    flipped = !flipped;
                    continue;
                }
            },
            other => other,
        };
        return if flipped { ordering.reverse() } else { ordering };
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

fn parse_digits(digits: &str, original: &str) -> Result<u128, ThresholdError> {
    digits.bytes().try_fold(0u128, |acc, byte| {
        if !byte.is_ascii_digit() {
            return Err(ThresholdError::Invalid(original.to_string()));
        }
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(byte - b'0')))
            .ok_or_else(|| ThresholdError::OutOfRange(original.to_string()))
    })
}

fn parse_decimal(text: &str, original: &str) -> Result<Threshold, ThresholdError> {
    let invalid = || ThresholdError::Invalid(original.to_string());
    let out_of_range = || ThresholdError::OutOfRange(original.to_string());

    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => {
            let exponent: i32 = text[pos + 1..].parse().map_err(|_| invalid())?;
            (&text[..pos], exponent)
        }
        None => (text, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    // Trailing zeros carry no value; dropping them keeps "0.5000…" in range.
    let fraction = fraction.trim_end_matches('0');

    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // value = digits * 10^scale
    let scale = i64::from(exponent) - fraction.len() as i64;
    let significant = whole.trim_start_matches('0').len() + fraction.len();
    if scale < 0 && significant > 0 && scale.unsigned_abs() as usize > MAX_FRACTION_DIGITS {
        return Err(ThresholdError::TooPrecise(original.to_string()));
    }
    let digits = parse_digits(&format!("{}{}", whole, fraction), original)?;

    if digits == 0 {
        return Ok(Threshold::ZERO);
    }
    if scale >= 0 {
        // Non-zero integer: only exactly 1 is in range.
        let value = u32::try_from(scale)
            .ok()
            .and_then(|s| 10u128.checked_pow(s))
            .and_then(|p| digits.checked_mul(p))
            .ok_or_else(out_of_range)?;
        return Threshold::from_ratio(value, 1).map_err(|_| out_of_range());
    }

    let places = scale.unsigned_abs() as u32;
    Threshold::from_ratio(digits, 10u128.pow(places)).map_err(|_| out_of_range())
}

impl FromStr for Threshold {
    type Err = ThresholdError;

    /// Accepts `0`, `1`, `0.5`, `.75`, `1.0`, `5e-1` and fractions like `2/3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ThresholdError::Empty);
        }
        if text.starts_with('-') {
            return Err(ThresholdError::OutOfRange(text.to_string()));
        }
        let text_unsigned = text.strip_prefix('+').unwrap_or(text);

        if let Some((num, den)) = text_unsigned.split_once('/') {
            let numerator = parse_digits(num.trim(), text)?;
            let denominator = parse_digits(den.trim(), text)?;
            if num.trim().is_empty() || den.trim().is_empty() {
                return Err(ThresholdError::Invalid(text.to_string()));
            }
            return Threshold::from_ratio(numerator, denominator)
                .map_err(|_| ThresholdError::OutOfRange(text.to_string()));
        }

        parse_decimal(text_unsigned, text)
    }
}

impl fmt::Display for Threshold {
    /// Exact decimal when the expansion terminates, `n/d` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self
            .decimal_places()
            .is_some_and(|places| places <= MAX_FRACTION_DIGITS)
        {
            return write!(f, "{}/{}", self.numerator, self.denominator);
        }
        let whole = self.numerator / self.denominator;
        let mut remainder = self.numerator % self.denominator;
        write!(f, "{}", whole)?;
        if remainder == 0 {
            return Ok(());
        }
        f.write_str(".")?;
        while remainder != 0 {
            remainder *= 10;
            write!(f, "{}", remainder / self.denominator)?;
            remainder %= self.denominator;
        }
        Ok(())
    }
}

impl From<Threshold> for String {
    fn from(threshold: Threshold) -> Self {
        threshold.to_string()
    }
}

/// What a config file may contain: `"0.35"` or `0.35`.
///
/// JSON numbers are re-read from their shortest literal form, never used as
/// `f64`, so `0.35` in a config file means exactly `7/20`. Strings keep every
/// digit and are the way to write thresholds finer than `f64` can carry.
#[derive(Deserialize)]
#[serde(untagged)]
enum ThresholdLiteral {
    Text(String),
    Number(serde_json::Number),
}

impl TryFrom<ThresholdLiteral> for Threshold {
    type Error = ThresholdError;

    fn try_from(literal: ThresholdLiteral) -> Result<Self, Self::Error> {
        match literal {
            ThresholdLiteral::Text(text) => text.parse(),
            ThresholdLiteral::Number(number) => number.to_string().parse(),
        }
    }
}
