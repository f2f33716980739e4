use rand::RngCore;

use crate::faker_rs::FakerKind;
use crate::generators::{GeneratedValue, Generator, GeneratorContext};

/// Direct passthrough to a provider primitive.
pub struct FakerGenerator {
    id: &'static str,
    kind: FakerKind,
}

impl FakerGenerator {
    pub fn new(id: &'static str, kind: FakerKind) -> Self {
        Self { id, kind }
    }

    pub fn kind(&self) -> FakerKind {
        self.kind
    }
}

impl Generator for FakerGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Text(self.kind.fake(rng))
    }
}

/// Provider primitive wrapped with a fixed prefix and suffix, e.g. `#<word>`.
pub struct DecoratedFakerGenerator {
    id: &'static str,
    kind: FakerKind,
    prefix: &'static str,
    suffix: &'static str,
}

impl DecoratedFakerGenerator {
    pub fn prefixed(id: &'static str, prefix: &'static str, kind: FakerKind) -> Self {
        Self {
            id,
            kind,
            prefix,
            suffix: "",
        }
    }

    pub fn suffixed(id: &'static str, kind: FakerKind, suffix: &'static str) -> Self {
        Self {
            id,
            kind,
            prefix: "",
            suffix,
        }
    }
}

impl Generator for DecoratedFakerGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue {
        let value = self.kind.fake(rng);
        GeneratedValue::Text(format!("{}{value}{}", self.prefix, self.suffix))
    }
}
