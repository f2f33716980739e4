use rand::RngCore;

use crate::faker_rs::FakerKind;
use crate::generators::domain::content::{PRODUCT_NOUNS, product_name};
use crate::generators::faker_rs::{DecoratedFakerGenerator, FakerGenerator};
use crate::generators::primitives::{FnGenerator, PickGenerator, pick};
use crate::generators::{GeneratedValue, GeneratorContext, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FnGenerator::new("Vehicle", vehicle)));
    registry.register_generator(Box::new(PickGenerator::new("Animal", ANIMAL_TYPES)));
    registry.register_generator(Box::new(FnGenerator::new("Product", product_name)));
    registry.register_generator(Box::new(PickGenerator::new("Food", PRODUCT_NOUNS)));
    registry.register_generator(Box::new(FnGenerator::new("Drink", product_name)));
    registry.register_generator(Box::new(DecoratedFakerGenerator::suffixed(
        "University",
        FakerKind::CompanyName,
        " University",
    )));
    registry.register_generator(Box::new(PickGenerator::new("Emoji", EMOJIS)));
    registry.register_generator(Box::new(FakerGenerator::new("Barcode", FakerKind::Isbn13)));
}

fn vehicle(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let manufacturer = pick(MANUFACTURERS, rng);
    let model = pick(MODELS, rng);
    GeneratedValue::Text(format!("{manufacturer} {model}"))
}

pub const MANUFACTURERS: &[&str] = &[
    "Aston Martin",
    "Audi",
    "Bentley",
    "BMW",
    "Bugatti",
    "Cadillac",
    "Chevrolet",
    "Chrysler",
    "Dodge",
    "Ferrari",
    "Fiat",
    "Ford",
    "Honda",
    "Hyundai",
    "Jaguar",
    "Jeep",
    "Kia",
    "Lamborghini",
    "Land Rover",
    "Maserati",
    "Mazda",
    "Mercedes Benz",
    "Mini",
    "Nissan",
    "Polestar",
    "Porsche",
    "Rolls Royce",
    "Smart",
    "Tesla",
    "Toyota",
    "Volkswagen",
    "Volvo",
];

pub const MODELS: &[&str] = &[
    "Fiesta",
    "Focus",
    "Taurus",
    "Mustang",
    "Explorer",
    "Expedition",
    "F-150",
    "Model T",
    "Ranchero",
    "Volt",
    "Cruze",
    "Malibu",
    "Impala",
    "Camaro",
    "Corvette",
    "Colorado",
    "Silverado",
    "Spark",
    "Beetle",
    "Golf",
    "Jetta",
    "Passat",
    "Civic",
    "Accord",
    "Camry",
    "Corolla",
    "Prius",
    "Model S",
    "Model 3",
    "Model X",
    "Model Y",
    "Wrangler",
    "Grand Cherokee",
    "Charger",
    "Challenger",
    "911",
    "Cayenne",
    "Countach",
    "Aventador",
    "XC90",
];

pub const ANIMAL_TYPES: &[&str] = &[
    "dog",
    "cat",
    "snake",
    "bear",
    "lion",
    "cetacean",
    "insect",
    "crocodilia",
    "cow",
    "bird",
    "fish",
    "rabbit",
    "horse",
];

pub const EMOJIS: &[&str] = &[
    "😀", "😂", "😍", "😎", "🤔", "😴", "😭", "😡", "👍", "👎", "👏", "🙏", "💪", "❤️", "🔥",
    "✨", "🎉", "🎂", "🍕", "🍔", "☕", "🍺", "🐶", "🐱", "🦊", "🐼", "🌈", "🌙", "⭐", "⚡",
    "🚀", "🚗", "⚽", "🎵", "📷", "💡", "📚", "💻", "🔒", "🌍",
];
