use rand::{Rng, RngCore};
use uuid::Builder;

use crate::faker_rs::FakerKind;
use crate::generators::faker_rs::FakerGenerator;
use crate::generators::primitives::{AlphanumericGenerator, FnGenerator, from_charset, luhn_check_digit};
use crate::generators::{GeneratedValue, GeneratorContext, GeneratorRegistry};

const PLATE_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPRSTUVWXYZ";
const IMEI_PAYLOAD_LEN: usize = 14;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FnGenerator::new("UUID", uuid_v4)));
    registry.register_generator(Box::new(FakerGenerator::new("ISBN", FakerKind::Isbn13)));
    registry.register_generator(Box::new(FakerGenerator::new(
        "File Name",
        FakerKind::FileName,
    )));
    registry.register_generator(Box::new(FakerGenerator::new(
        "File Extension",
        FakerKind::FileExtension,
    )));
    registry.register_generator(Box::new(FnGenerator::new("IMEI", imei)));
    registry.register_generator(Box::new(AlphanumericGenerator::new("Product Key", 25)));
    registry.register_generator(Box::new(AlphanumericGenerator::new("Serial Number", 12)));
    registry.register_generator(Box::new(FnGenerator::new("License Plate", license_plate)));
    registry.register_generator(Box::new(AlphanumericGenerator::new("Passport Number", 9)));
}

fn uuid_v4(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    GeneratedValue::Text(Builder::from_random_bytes(bytes).into_uuid().to_string())
}

/// `##-######-######-#`, last digit is the Luhn check digit.
fn imei(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let payload: Vec<u8> = (0..IMEI_PAYLOAD_LEN)
        .map(|_| rng.random_range(0..=9_u8))
        .collect();
    let check = luhn_check_digit(&payload);
    let digits: String = payload
        .iter()
        .chain(std::iter::once(&check))
        .map(|digit| char::from(b'0' + digit))
        .collect();
    GeneratedValue::Text(format!(
        "{}-{}-{}-{}",
        &digits[..2],
        &digits[2..8],
        &digits[8..14],
        &digits[14..]
    ))
}

/// UK registration mark, `AA00AAA`.
fn license_plate(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let area = from_charset(PLATE_LETTERS, 2, rng);
    let age = rng.random_range(0..=99_u8);
    let serial = from_charset(PLATE_LETTERS, 3, rng);
    GeneratedValue::Text(format!("{area}{age:02}{serial}"))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn ctx() -> GeneratorContext {
        GeneratorContext::default()
    }

    #[test]
    fn imei_check_digit_is_luhn_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        for _ in 0..50 {
            let value = imei(&ctx(), &mut rng).render();
            let groups: Vec<&str> = value.split('-').collect();
            assert_eq!(
                groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
                vec![2, 6, 6, 1]
            );

            let digits: Vec<u8> = value
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect();
            let (payload, check) = digits.split_at(IMEI_PAYLOAD_LEN);
            assert_eq!(luhn_check_digit(payload), check[0]);
        }
    }

    #[test]
    fn uuid_is_version_four() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let value = uuid_v4(&ctx(), &mut rng).render();
        let parsed = uuid::Uuid::parse_str(&value).expect("valid uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn license_plate_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let value = license_plate(&ctx(), &mut rng).render();
        let bytes = value.as_bytes();
        assert_eq!(bytes.len(), 7);
        assert!(bytes[..2].iter().all(u8::is_ascii_uppercase));
        assert!(bytes[2..4].iter().all(u8::is_ascii_digit));
        assert!(bytes[4..].iter().all(u8::is_ascii_uppercase));
    }
}
