use rand::{Rng, RngCore};

use crate::faker_rs::FakerKind;
use crate::generators::faker_rs::{DecoratedFakerGenerator, FakerGenerator};
use crate::generators::primitives::FnGenerator;
use crate::generators::{GeneratedValue, GeneratorContext, GeneratorRegistry};

const AVATAR_BASE: &str = "https://avatars.githubusercontent.com/u/";
const MAX_AVATAR_ID: u32 = 100_000_000;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FnGenerator::new("IP Address", |_ctx, rng| {
        let kind = if rng.random_bool(0.5) {
            FakerKind::Ipv4
        } else {
            FakerKind::Ipv6
        };
        GeneratedValue::Text(kind.fake(rng))
    })));
    registry.register_generator(Box::new(FakerGenerator::new(
        "MAC Address",
        FakerKind::MacAddress,
    )));
    registry.register_generator(Box::new(FnGenerator::new("URL", |ctx, rng| {
        GeneratedValue::Text(format!("https://{}", domain_name(ctx, rng)))
    })));
    registry.register_generator(Box::new(FakerGenerator::new(
        "User Agent",
        FakerKind::UserAgent,
    )));
    registry.register_generator(Box::new(FnGenerator::new("Domain Name", domain_name)));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Username",
        FakerKind::Username,
    )));
    registry.register_generator(Box::new(FakerGenerator::new(
        "Password",
        FakerKind::Password,
    )));
    registry.register_generator(Box::new(FnGenerator::new("Avatar URL", |_ctx, rng| {
        let id = rng.random_range(1..=MAX_AVATAR_ID);
        GeneratedValue::Text(format!("{AVATAR_BASE}{id}"))
    })));
    registry.register_generator(Box::new(DecoratedFakerGenerator::prefixed(
        "Social Media Handle",
        "@",
        FakerKind::Username,
    )));
}

fn domain_name(_ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
    let word = FakerKind::Word.fake(rng).to_lowercase();
    let suffix = FakerKind::DomainSuffix.fake(rng);
    GeneratedValue::Text(format!("{word}.{suffix}"))
}
