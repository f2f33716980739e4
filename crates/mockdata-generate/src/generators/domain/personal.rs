use rand::{Rng, RngCore};

use crate::faker_rs::FakerKind;
use crate::generators::domain::time::days_ago;
use crate::generators::faker_rs::FakerGenerator;
use crate::generators::primitives::{DigitsGenerator, FnGenerator, IntRangeGenerator, PickGenerator};
use crate::generators::{GeneratedValue, GeneratorContext, GeneratorRegistry};

const MIN_BIRTH_AGE: i64 = 18;
const MAX_BIRTH_AGE: i64 = 80;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FakerGenerator::new("Name", FakerKind::FullName)));
    registry.register_generator(Box::new(FakerGenerator::new("Email", FakerKind::SafeEmail)));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Phone",
        FakerKind::PhoneNumber,
    )));
    registry.register_generator(Box::new(FnGenerator::new("Address", street_address)));
    registry.register_generator(Box::new(FnGenerator::new("Date of Birth", birthdate)));
    registry.register_generator(Box::new(IntRangeGenerator::new("Age", 18, 100)));
    registry.register_generator(Box::new(PickGenerator::new("Gender", SEXES)));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Nationality",
        FakerKind::CountryName,
    )));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Occupation",
        FakerKind::JobTitle,
    )));
    registry.register_generator(Box::new(DigitsGenerator::new("Social Security Number", 8)));
}

pub const SEXES: &[&str] = &["female", "male"];

fn street_address(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let number = FakerKind::BuildingNumber.fake(rng);
    let street = FakerKind::StreetName.fake(rng);
    GeneratedValue::Text(format!("{number} {street}"))
}

fn birthdate(ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let age = rng.random_range(MIN_BIRTH_AGE..=MAX_BIRTH_AGE);
    let extra_days = rng.random_range(0..365);
    GeneratedValue::Date(days_ago(ctx.today(), age * 365 + extra_days))
}
