use crate::generators::GeneratorRegistry;

pub mod business;
pub mod color;
pub mod content;
pub mod education;
pub mod extras;
pub mod finance;
pub mod health;
pub mod identifiers;
pub mod internet;
pub mod location;
pub mod measurement;
pub mod misc;
pub mod personal;
pub mod tech;
pub mod time;

pub fn register(registry: &mut GeneratorRegistry) {
    personal::register(registry);
    business::register(registry);
    finance::register(registry);
    internet::register(registry);
    location::register(registry);
    color::register(registry);
    content::register(registry);
    identifiers::register(registry);
    misc::register(registry);
    tech::register(registry);
    health::register(registry);
    education::register(registry);
    time::register(registry);
    measurement::register(registry);
    extras::register(registry);
}
