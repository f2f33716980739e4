use chrono::Datelike;

use crate::faker_rs::FakerKind;
use crate::generators::domain::time::future_years;
use crate::generators::faker_rs::DecoratedFakerGenerator;
use crate::generators::primitives::{
    AlphanumericGenerator, FnGenerator, PickGenerator, TenthsGenerator,
};
use crate::generators::{GeneratedValue, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(PickGenerator::new("Degree", DEGREES)));
    registry.register_generator(Box::new(PickGenerator::new("Major", MAJORS)));
    registry.register_generator(Box::new(TenthsGenerator::new("GPA", 20, 40)));
    registry.register_generator(Box::new(DecoratedFakerGenerator::suffixed(
        "School Name",
        FakerKind::CompanyName,
        " School",
    )));
    registry.register_generator(Box::new(FnGenerator::new("Graduation Year", |ctx, rng| {
        GeneratedValue::Int(i64::from(future_years(ctx, 1, rng).year()))
    })));
    registry.register_generator(Box::new(AlphanumericGenerator::new("Student ID", 8)));
    registry.register_generator(Box::new(PickGenerator::new("Course Name", COURSES)));
}

pub const DEGREES: &[&str] = &[
    "Bachelor of Science",
    "Master of Arts",
    "PhD in Physics",
    "Bachelor of Business Administration",
    "Master of Engineering",
    "Doctor of Medicine",
    "Bachelor of Laws",
    "Master of Fine Arts",
    "Doctor of Philosophy",
    "Bachelor of Education",
];

pub const MAJORS: &[&str] = &[
    "Computer Science",
    "Business Administration",
    "Psychology",
    "Engineering",
    "Biology",
    "Economics",
    "English Literature",
    "Political Science",
    "Mathematics",
    "Chemistry",
];

pub const COURSES: &[&str] = &[
    "Introduction to Psychology",
    "Calculus I",
    "World History",
    "Organic Chemistry",
    "Microeconomics",
    "Introduction to Programming",
    "English Composition",
    "Statistics",
    "Art History",
    "Physics for Engineers",
];
