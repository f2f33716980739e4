//! Rules reachable by name but absent from the browsable catalog.

use crate::faker_rs::FakerKind;
use crate::generators::faker_rs::FakerGenerator;
use crate::generators::primitives::{FnGenerator, IntRangeGenerator, alphanumeric};
use crate::generators::{GeneratedValue, GeneratorRegistry};

pub const EXTRA_FIELD_TYPES: &[&str] = &["Image URL", "MIME Type", "File Size"];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FnGenerator::new("Image URL", |_ctx, rng| {
        let seed = alphanumeric(8, rng);
        GeneratedValue::Text(format!("https://picsum.photos/seed/{seed}/640/480"))
    })));
    registry.register_generator(Box::new(FakerGenerator::new(
        "MIME Type",
        FakerKind::MimeType,
    )));
    registry.register_generator(Box::new(IntRangeGenerator::with_suffix(
        "File Size", 1, 1000, " MB",
    )));
}
