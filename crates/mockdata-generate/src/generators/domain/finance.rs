use rand::{Rng, RngCore};

use crate::faker_rs::FakerKind;
use crate::generators::faker_rs::FakerGenerator;
use crate::generators::primitives::{
    AmountGenerator, DigitsGenerator, FnGenerator, PickGenerator, digits, from_charset, hex_lower,
    pick,
};
use crate::generators::{GeneratedValue, GeneratorContext, GeneratorRegistry};

const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const UPPER_ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const IBAN_COUNTRY: &str = "GB";

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FakerGenerator::new(
        "Credit Card",
        FakerKind::CreditCardNumber,
    )));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Currency",
        FakerKind::CurrencyCode,
    )));
    registry.register_generator(Box::new(FnGenerator::new(
        "Bitcoin Address",
        bitcoin_address,
    )));
    registry.register_generator(Box::new(FnGenerator::new(
        "Ethereum Address",
        |_ctx, rng| GeneratedValue::Text(format!("0x{}", hex_lower(40, rng))),
    )));
    registry.register_generator(Box::new(DigitsGenerator::new("Bank Account", 8)));
    registry.register_generator(Box::new(FnGenerator::new("IBAN", iban)));
    registry.register_generator(Box::new(AmountGenerator::new(
        "Transaction Amount",
        1,
        10_000,
    )));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Stock Symbol",
        FakerKind::CurrencyCode,
    )));
    registry.register_generator(Box::new(PickGenerator::new(
        "Investment Type",
        TRANSACTION_TYPES,
    )));
}

pub const TRANSACTION_TYPES: &[&str] = &["deposit", "withdrawal", "payment", "invoice"];

fn bitcoin_address(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let prefix = pick(&["1", "3"], rng);
    let len = rng.random_range(25..=33);
    GeneratedValue::Text(format!("{prefix}{}", from_charset(BASE58, len, rng)))
}

fn iban(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let bban = format!("{}{}", from_charset(UPPER_ALPHA, 4, rng), digits(14, rng));
    let check = iban_check_digits(IBAN_COUNTRY, &bban);
    GeneratedValue::Text(format!("{IBAN_COUNTRY}{check:02}{bban}"))
}

/// ISO 13616 check digits for `country` + `bban`.
pub fn iban_check_digits(country: &str, bban: &str) -> u32 {
    98 - iban_mod97(&format!("{bban}{country}00"))
}

/// Remainder of the IBAN numeric expansion (letters map to 10..=35) modulo 97.
pub fn iban_mod97(rearranged: &str) -> u32 {
    rearranged.chars().fold(0_u32, |acc, c| match c.to_digit(36) {
        Some(value) if value >= 10 => (acc * 100 + value) % 97,
        Some(value) => (acc * 10 + value) % 97,
        None => acc,
    })
}
