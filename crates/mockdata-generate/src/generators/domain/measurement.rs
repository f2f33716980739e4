use crate::generators::GeneratorRegistry;
use crate::generators::primitives::{IntRangeGenerator, MeasureGenerator};

pub const LENGTH_UNITS: &[&str] = &["mm", "cm", "m", "km"];
pub const VOLUME_UNITS: &[&str] = &["ml", "L", "m³"];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(MeasureGenerator::new(
        "Length",
        1,
        1000,
        LENGTH_UNITS,
    )));
    registry.register_generator(Box::new(MeasureGenerator::new(
        "Volume",
        1,
        1000,
        VOLUME_UNITS,
    )));
    registry.register_generator(Box::new(IntRangeGenerator::with_suffix(
        "Temperature",
        -50,
        50,
        "°C",
    )));
    registry.register_generator(Box::new(IntRangeGenerator::with_suffix(
        "Speed", 1, 300, " km/h",
    )));
    registry.register_generator(Box::new(IntRangeGenerator::with_suffix(
        "Pressure", 900, 1100, " hPa",
    )));
    registry.register_generator(Box::new(IntRangeGenerator::with_suffix(
        "Energy", 1, 1000, " kWh",
    )));
}
