use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::generators::{GeneratedValue, Generator, GeneratorContext};

const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Bespoke rule expressed as a plain function.
pub struct FnGenerator {
    id: &'static str,
    generate: fn(&GeneratorContext, &mut dyn RngCore) -> GeneratedValue,
}

impl FnGenerator {
    pub fn new(
        id: &'static str,
        generate: fn(&GeneratorContext, &mut dyn RngCore) -> GeneratedValue,
    ) -> Self {
        Self { id, generate }
    }
}

impl Generator for FnGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        (self.generate)(ctx, rng)
    }
}

/// Uniform draw from a fixed literal list.
pub struct PickGenerator {
    id: &'static str,
    values: &'static [&'static str],
}

impl PickGenerator {
    pub fn new(id: &'static str, values: &'static [&'static str]) -> Self {
        Self { id, values }
    }

    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }
}

impl Generator for PickGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Text(pick(self.values, rng).to_string())
    }
}

/// Inclusive integer range, optionally followed by a unit (`"175 cm"`).
pub struct IntRangeGenerator {
    id: &'static str,
    min: i64,
    max: i64,
    suffix: &'static str,
}

impl IntRangeGenerator {
    pub fn new(id: &'static str, min: i64, max: i64) -> Self {
        Self::with_suffix(id, min, max, "")
    }

    pub fn with_suffix(id: &'static str, min: i64, max: i64, suffix: &'static str) -> Self {
        debug_assert!(min <= max, "{id}: min must be <= max");
        Self {
            id,
            min,
            max,
            suffix,
        }
    }
}

impl Generator for IntRangeGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        let value = rng.random_range(self.min..=self.max);
        if self.suffix.is_empty() {
            GeneratedValue::Int(value)
        } else {
            GeneratedValue::Text(format!("{value}{}", self.suffix))
        }
    }
}

/// Integer magnitude with a unit drawn from a list (`"42 km"`).
pub struct MeasureGenerator {
    id: &'static str,
    min: i64,
    max: i64,
    units: &'static [&'static str],
}

impl MeasureGenerator {
    pub fn new(id: &'static str, min: i64, max: i64, units: &'static [&'static str]) -> Self {
        Self {
            id,
            min,
            max,
            units,
        }
    }
}

impl Generator for MeasureGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        let value = rng.random_range(self.min..=self.max);
        let unit = pick(self.units, rng);
        GeneratedValue::Text(format!("{value} {unit}"))
    }
}

/// Inclusive range with 0.1 precision, expressed in tenths (`20..=40` is 2.0-4.0).
pub struct TenthsGenerator {
    id: &'static str,
    min_tenths: i64,
    max_tenths: i64,
}

impl TenthsGenerator {
    pub fn new(id: &'static str, min_tenths: i64, max_tenths: i64) -> Self {
        Self {
            id,
            min_tenths,
            max_tenths,
        }
    }
}

impl Generator for TenthsGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        let tenths = rng.random_range(self.min_tenths..=self.max_tenths);
        GeneratedValue::Float {
            value: tenths as f64 / 10.0,
            scale: 1,
        }
    }
}

/// Dollar amount with two decimals (`"$1234.56"`).
pub struct AmountGenerator {
    id: &'static str,
    min: i64,
    max: i64,
}

impl AmountGenerator {
    pub fn new(id: &'static str, min: i64, max: i64) -> Self {
        Self { id, min, max }
    }
}

impl Generator for AmountGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        let cents = rng.random_range(self.min.saturating_mul(100)..=self.max.saturating_mul(100));
        GeneratedValue::Text(format!("${}.{:02}", cents / 100, cents % 100))
    }
}

/// Fixed-length identifier of uppercase letters and digits.
pub struct AlphanumericGenerator {
    id: &'static str,
    len: usize,
}

impl AlphanumericGenerator {
    pub fn new(id: &'static str, len: usize) -> Self {
        Self { id, len }
    }
}

impl Generator for AlphanumericGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Text(alphanumeric_upper(self.len, rng))
    }
}

/// Fixed-length string of decimal digits; leading zeros are kept.
pub struct DigitsGenerator {
    id: &'static str,
    len: usize,
}

impl DigitsGenerator {
    pub fn new(id: &'static str, len: usize) -> Self {
        Self { id, len }
    }
}

impl Generator for DigitsGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Text(digits(self.len, rng))
    }
}

pub fn pick(values: &[&'static str], rng: &mut dyn RngCore) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

pub fn alphanumeric_upper(len: usize, rng: &mut dyn RngCore) -> String {
    from_charset(UPPER_ALPHANUMERIC, len, rng)
}

pub fn alphanumeric(len: usize, rng: &mut dyn RngCore) -> String {
    from_charset(ALPHANUMERIC, len, rng)
}

pub fn digits(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..=9_u8)))
        .collect()
}

pub fn hex_lower(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| {
            let nibble = rng.random_range(0..16_u32);
            char::from_digit(nibble, 16).unwrap_or('0')
        })
        .collect()
}

pub fn from_charset(charset: &[u8], len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .filter_map(|_| charset.choose(rng).map(|byte| char::from(*byte)))
        .collect()
}

/// Luhn check digit for a run of decimal digits.
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, digit)| {
            let digit = u32::from(*digit);
            if idx % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}
