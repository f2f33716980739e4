use crate::generators::GeneratorRegistry;
use crate::generators::primitives::{IntRangeGenerator, PickGenerator, TenthsGenerator};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(PickGenerator::new("Blood Type", BLOOD_TYPES)));
    registry.register_generator(Box::new(IntRangeGenerator::with_suffix(
        "Height", 150, 200, " cm",
    )));
    registry.register_generator(Box::new(TenthsGenerator::new("BMI", 185, 300)));
    registry.register_generator(Box::new(PickGenerator::new("Disease", DISEASES)));
    registry.register_generator(Box::new(PickGenerator::new("Medication", MEDICATIONS)));
    registry.register_generator(Box::new(PickGenerator::new("Allergy", ALLERGIES)));
    registry.register_generator(Box::new(PickGenerator::new(
        "Medical Procedure",
        MEDICAL_PROCEDURES,
    )));
}

pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const DISEASES: &[&str] = &[
    "Influenza",
    "Diabetes",
    "Hypertension",
    "Asthma",
    "Arthritis",
    "Depression",
    "Alzheimer's",
    "Cancer",
    "Osteoporosis",
    "Parkinson's",
];

pub const MEDICATIONS: &[&str] = &[
    "Aspirin",
    "Ibuprofen",
    "Paracetamol",
    "Amoxicillin",
    "Lisinopril",
    "Levothyroxine",
    "Metformin",
    "Amlodipine",
    "Omeprazole",
    "Gabapentin",
];

pub const ALLERGIES: &[&str] = &[
    "Pollen",
    "Dust",
    "Peanuts",
    "Milk",
    "Eggs",
    "Soy",
    "Wheat",
    "Fish",
    "Shellfish",
    "Penicillin",
];

pub const MEDICAL_PROCEDURES: &[&str] = &[
    "Appendectomy",
    "Colonoscopy",
    "Cataract Surgery",
    "Hip Replacement",
    "Knee Replacement",
    "Coronary Bypass",
    "Cesarean Section",
    "Tonsillectomy",
    "Gallbladder Removal",
    "Hernia Repair",
];
