use chrono::Datelike;

use crate::faker_rs::FakerKind;
use crate::generators::domain::time::past_years;
use crate::generators::faker_rs::{DecoratedFakerGenerator, FakerGenerator};
use crate::generators::primitives::{
    AlphanumericGenerator, AmountGenerator, FnGenerator, PickGenerator,
};
use crate::generators::{GeneratedValue, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FakerGenerator::new(
        "Company",
        FakerKind::CompanyName,
    )));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Job Title",
        FakerKind::JobTitle,
    )));
    registry.register_generator(Box::new(PickGenerator::new("Department", DEPARTMENTS)));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Industry",
        FakerKind::Industry,
    )));
    registry.register_generator(Box::new(AlphanumericGenerator::new("Employee ID", 8)));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Business Phone",
        FakerKind::PhoneNumber,
    )));
    registry.register_generator(Box::new(DecoratedFakerGenerator::suffixed(
        "Business Email",
        FakerKind::Username,
        "@business.com",
    )));
    registry.register_generator(Box::new(AmountGenerator::new(
        "Revenue",
        10_000,
        1_000_000_000,
    )));
    registry.register_generator(Box::new(FnGenerator::new("Founded Year", |ctx, rng| {
        GeneratedValue::Int(i64::from(past_years(ctx, 100, rng).year()))
    })));
}

pub const DEPARTMENTS: &[&str] = &[
    "Books",
    "Movies",
    "Music",
    "Games",
    "Electronics",
    "Computers",
    "Home",
    "Garden",
    "Tools",
    "Grocery",
    "Health",
    "Beauty",
    "Toys",
    "Kids",
    "Baby",
    "Clothing",
    "Shoes",
    "Jewelery",
    "Sports",
    "Outdoors",
    "Automotive",
    "Industrial",
];
