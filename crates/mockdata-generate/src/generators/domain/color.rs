use rand::{Rng, RngCore};

use crate::generators::primitives::{FnGenerator, PickGenerator, pick};
use crate::generators::{GeneratedValue, GeneratorContext, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(PickGenerator::new("Color", HUMAN_COLORS)));
    registry.register_generator(Box::new(FnGenerator::new("Hex Color", hex_color)));
    registry.register_generator(Box::new(FnGenerator::new("RGB Color", hex_color)));
    registry.register_generator(Box::new(FnGenerator::new("CMYK Color", |_ctx, rng| {
        let parts: Vec<String> = (0..4).map(|_| fraction(rng)).collect();
        GeneratedValue::Text(parts.join(","))
    })));
    registry.register_generator(Box::new(FnGenerator::new("HSL Color", |_ctx, rng| {
        let hue = rng.random_range(0..=360_u32);
        let saturation = fraction(rng);
        let lightness = fraction(rng);
        GeneratedValue::Text(format!("{hue},{saturation},{lightness}"))
    })));
    registry.register_generator(Box::new(FnGenerator::new("HSV Color", |_ctx, rng| {
        let hue = rng.random_range(0..=360_u32);
        let saturation = rng.random_range(0..=100_u32);
        let value = rng.random_range(0..=100_u32);
        GeneratedValue::Text(format!("hsv({hue}, {saturation}%, {value}%)"))
    })));
    registry.register_generator(Box::new(FnGenerator::new("Pantone Color", |_ctx, rng| {
        let color = pick(HUMAN_COLORS, rng);
        let number = rng.random_range(100..=999_u32);
        GeneratedValue::Text(format!("{color} {number}"))
    })));
}

pub const HUMAN_COLORS: &[&str] = &[
    "red",
    "green",
    "blue",
    "yellow",
    "purple",
    "mint green",
    "teal",
    "white",
    "black",
    "orange",
    "pink",
    "grey",
    "maroon",
    "violet",
    "turquoise",
    "tan",
    "sky blue",
    "salmon",
    "plum",
    "orchid",
    "olive",
    "magenta",
    "lime",
    "ivory",
    "indigo",
    "gold",
    "fuchsia",
    "cyan",
    "azure",
    "lavender",
    "silver",
];

fn hex_color(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let rgb = rng.random_range(0..=0xff_ffff_u32);
    GeneratedValue::Text(format!("#{rgb:06x}"))
}

/// Value in `0..=1` with at most two decimals, shortest form (`0.5`, `1`).
fn fraction(rng: &mut dyn RngCore) -> String {
    let hundredths = rng.random_range(0..=100_u32);
    (f64::from(hundredths) / 100.0).to_string()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn fractions_use_shortest_form() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let value = fraction(&mut rng);
            let parsed: f64 = value.parse().expect("numeric fraction");
            assert!((0.0..=1.0).contains(&parsed));
            assert!(value.split_once('.').is_none_or(|(_, d)| d.len() <= 2), "{value}");
        }
    }

    #[test]
    fn hex_color_is_lowercase_six_digits() {
        let ctx = GeneratorContext::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..50 {
            let value = hex_color(&ctx, &mut rng).render();
            assert_eq!(value.len(), 7);
            assert!(value.starts_with('#'));
            assert!(value[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }
}
