use rand::RngCore;

use crate::faker_rs::FakerKind;
use crate::generators::faker_rs::{DecoratedFakerGenerator, FakerGenerator};
use crate::generators::primitives::{FnGenerator, PickGenerator, pick};
use crate::generators::{GeneratedValue, GeneratorContext, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FakerGenerator::new(
        "Sentence",
        FakerKind::Sentence,
    )));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Paragraph",
        FakerKind::Paragraph,
    )));
    registry.register_generator(Box::new(FnGenerator::new("Book Title", product_name)));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Movie Title",
        FakerKind::MovieWords,
    )));
    registry.register_generator(Box::new(PickGenerator::new("Music Genre", GENRES)));
    registry.register_generator(Box::new(PickGenerator::new("Song Title", SONGS)));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Artist Name",
        FakerKind::FullName,
    )));
    registry.register_generator(Box::new(FnGenerator::new("Album Name", product_name)));
    registry.register_generator(Box::new(DecoratedFakerGenerator::prefixed(
        "Hashtag",
        "#",
        FakerKind::Word,
    )));
}

/// `<adjective> <material> <product>`, e.g. "Handcrafted Bronze Chair".
pub fn product_name(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let adjective = pick(PRODUCT_ADJECTIVES, rng);
    let material = pick(PRODUCT_MATERIALS, rng);
    let product = pick(PRODUCT_NOUNS, rng);
    GeneratedValue::Text(format!("{adjective} {material} {product}"))
}

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Awesome",
    "Bespoke",
    "Electronic",
    "Elegant",
    "Ergonomic",
    "Fantastic",
    "Generic",
    "Gorgeous",
    "Handcrafted",
    "Handmade",
    "Incredible",
    "Intelligent",
    "Licensed",
    "Luxurious",
    "Modern",
    "Oriental",
    "Practical",
    "Recycled",
    "Refined",
    "Rustic",
    "Sleek",
    "Small",
    "Tasty",
    "Unbranded",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Bamboo",
    "Bronze",
    "Ceramic",
    "Concrete",
    "Cotton",
    "Fresh",
    "Frozen",
    "Granite",
    "Metal",
    "Plastic",
    "Rubber",
    "Silk",
    "Soft",
    "Steel",
    "Wooden",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Bacon",
    "Ball",
    "Bike",
    "Car",
    "Chair",
    "Cheese",
    "Chicken",
    "Chips",
    "Computer",
    "Fish",
    "Gloves",
    "Hat",
    "Keyboard",
    "Mouse",
    "Pants",
    "Pizza",
    "Salad",
    "Sausages",
    "Shirt",
    "Shoes",
    "Soap",
    "Table",
    "Towels",
    "Tuna",
];

pub const GENRES: &[&str] = &[
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Hip Hop",
    "Jazz",
    "Latin",
    "Metal",
    "Non Music",
    "Pop",
    "Rap",
    "Reggae",
    "Rock",
    "Soul",
    "Stage And Screen",
    "World",
];

pub const SONGS: &[&str] = &[
    "A Whiter Shade of Pale",
    "Bohemian Rhapsody",
    "Born to Run",
    "Bridge Over Troubled Water",
    "Good Vibrations",
    "Hey Jude",
    "Hotel California",
    "Imagine",
    "Johnny B Goode",
    "Like a Rolling Stone",
    "My Girl",
    "Respect",
    "Smells Like Teen Spirit",
    "Stairway to Heaven",
    "Superstition",
    "Sweet Child O' Mine",
    "What's Going On",
    "Yesterday",
];
