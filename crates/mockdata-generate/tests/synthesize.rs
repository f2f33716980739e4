use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;

use mockdata_core::{FieldType, list_all_field_types};
use mockdata_generate::generators::FALLBACK_ID;
use mockdata_generate::generators::domain::extras::EXTRA_FIELD_TYPES;
use mockdata_generate::{
    CsvQuoting, GeneratorRegistry, RandomSource, SynthesisOptions, ValueSynthesizer, export_csv,
};

fn fixed_now() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0)
        .single()
        .expect("unambiguous instant")
        .fixed_offset()
}

fn synthesizer() -> ValueSynthesizer {
    ValueSynthesizer::with_options(SynthesisOptions {
        now: Some(fixed_now()),
    })
}

fn selection(labels: &[&str]) -> Vec<FieldType> {
    labels.iter().map(|&label| FieldType::from(label)).collect()
}

#[test]
fn every_catalog_type_yields_exact_count() {
    let synthesizer = synthesizer();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for field_type in list_all_field_types() {
        for count in [0_usize, 1, 7] {
            let values = synthesizer.synthesize(field_type.as_str(), count, &mut rng);
            assert_eq!(values.len(), count, "{field_type}");
            assert!(
                values.iter().all(|value| !value.is_empty()),
                "{field_type} produced an empty value"
            );
        }
    }
}

#[test]
fn no_catalog_value_spans_lines() {
    let synthesizer = synthesizer();
    let mut rng = ChaCha8Rng::seed_from_u64(404);
    for field_type in list_all_field_types() {
        for value in synthesizer.synthesize(field_type.as_str(), 50, &mut rng) {
            assert!(
                !value.contains('\n') && !value.contains('\r'),
                "{field_type}: {value:?}"
            );
        }
    }
}

#[test]
fn timestamp_is_within_the_last_day_of_the_clock() {
    let synthesizer = ValueSynthesizer::new();
    let mut rng = ChaCha8Rng::seed_from_u64(86_400);
    let before_ms = Utc::now().timestamp_millis();
    let values = synthesizer.synthesize("Timestamp", 200, &mut rng);
    let after_ms = Utc::now().timestamp_millis();

    for value in values {
        let ts: i64 = value.parse().expect("epoch millis");
        assert!(ts <= after_ms, "{ts} is in the future of {after_ms}");
        assert!(ts >= before_ms - 86_400_000, "{ts} is older than a day");
    }
}

#[test]
fn date_follows_the_utc_calendar() {
    // 2024-06-15 08:00 in Tokyo is still 2024-06-14 in UTC.
    let tokyo = FixedOffset::east_opt(9 * 3600).expect("offset");
    let now = tokyo
        .with_ymd_and_hms(2024, 6, 15, 8, 0, 0)
        .single()
        .expect("unambiguous instant");
    let synthesizer = ValueSynthesizer::with_options(SynthesisOptions { now: Some(now) });
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    for value in synthesizer.synthesize("Date", 100, &mut rng) {
        assert!(value.as_str() <= "2024-06-14", "{value}");
    }
}

#[test]
fn every_catalog_type_has_a_dedicated_generator() {
    let registry = GeneratorRegistry::new();
    for field_type in list_all_field_types() {
        assert!(registry.is_known(field_type.as_str()), "{field_type}");
        assert_ne!(registry.resolve(field_type.as_str()).id(), FALLBACK_ID);
    }
    for label in EXTRA_FIELD_TYPES {
        assert!(registry.is_known(label), "{label}");
    }
}

#[test]
fn generator_ids_are_sorted_and_unique() {
    let registry = GeneratorRegistry::new();
    let ids = registry.generator_ids();
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), list_all_field_types().len() + EXTRA_FIELD_TYPES.len());
}

#[test]
fn unknown_type_falls_back_to_words() {
    let synthesizer = synthesizer();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let values = synthesizer.synthesize("Favourite Spaceship", 12, &mut rng);
    assert_eq!(values.len(), 12);
    assert!(values.iter().all(|value| !value.is_empty()));
}

#[test]
fn lookup_is_case_insensitive() {
    let synthesizer = synthesizer();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let values = synthesizer.synthesize("bLoOd TyPe", 10, &mut rng);
    assert!(
        values
            .iter()
            .all(|value| ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"].contains(&value.as_str()))
    );
}

#[test]
fn name_and_email_table() {
    let dataset = synthesizer()
        .generate_dataset(&selection(&["Name", "Email"]), 3, RandomSource::Seeded(1))
        .expect("dataset");

    assert_eq!(dataset.len(), 2);
    for column in dataset.columns() {
        assert_eq!(column.values.len(), 3);
        assert!(column.values.iter().all(|value| !value.is_empty()));
    }

    let csv = export_csv(&dataset, 3, CsvQuoting::None).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Name,Email");
}

#[test]
fn hex_colors_are_lowercase_six_digit() {
    let pattern = Regex::new(r"^#[0-9a-f]{6}$").expect("regex");
    let dataset = synthesizer()
        .generate_dataset(&selection(&["Hex Color"]), 5, RandomSource::Entropy)
        .expect("dataset");
    let values = dataset.get("Hex Color").expect("column");
    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|value| pattern.is_match(value)), "{values:?}");
}

#[test]
fn blood_types_come_from_fixed_set() {
    let allowed = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
    let dataset = synthesizer()
        .generate_dataset(&selection(&["Blood Type"]), 20, RandomSource::Seeded(3))
        .expect("dataset");
    let values = dataset.get("Blood Type").expect("column");
    assert_eq!(values.len(), 20);
    assert!(values.iter().all(|value| allowed.contains(&value.as_str())));
}

#[test]
fn ages_are_integers_in_range() {
    let dataset = synthesizer()
        .generate_dataset(&selection(&["Age"]), 10, RandomSource::Seeded(4))
        .expect("dataset");
    for value in dataset.get("Age").expect("column") {
        let age: i64 = value.parse().expect("integer age");
        assert!((18..=100).contains(&age));
    }
}

#[test]
fn formats_follow_their_rules() {
    let synthesizer = synthesizer();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let cases: &[(&str, &str)] = &[
        ("Phone", r"^\d{3}-\d{3}-\d{4}$"),
        ("Date of Birth", r"^\d{4}-\d{2}-\d{2}$"),
        ("Social Security Number", r"^\d{8}$"),
        ("Employee ID", r"^[A-Z0-9]{8}$"),
        ("Business Email", r"^.+@business\.com$"),
        ("Revenue", r"^\$\d+\.\d{2}$"),
        ("Ethereum Address", r"^0x[0-9a-f]{40}$"),
        ("IBAN", r"^GB\d{2}[A-Z]{4}\d{14}$"),
        ("Avatar URL", r"^https://avatars\.githubusercontent\.com/u/\d+$"),
        ("Social Media Handle", r"^@.+$"),
        ("URL", r"^https://[a-z]+\.\S+$"),
        ("RGB Color", r"^#[0-9a-f]{6}$"),
        ("HSV Color", r"^hsv\(\d{1,3}, \d{1,3}%, \d{1,3}%\)$"),
        ("Pantone Color", r"^[a-z ]+ \d{3}$"),
        ("Hashtag", r"^#\S+$"),
        ("UUID", r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"),
        ("IMEI", r"^\d{2}-\d{6}-\d{6}-\d$"),
        ("Product Key", r"^[A-Z0-9]{25}$"),
        ("Serial Number", r"^[A-Z0-9]{12}$"),
        ("Passport Number", r"^[A-Z0-9]{9}$"),
        ("License Plate", r"^[A-Z]{2}\d{2}[A-Z]{3}$"),
        ("University", r" University$"),
        ("School Name", r" School$"),
        ("App Name", r" App$"),
        ("Height", r"^\d{3} cm$"),
        ("BMI", r"^\d{2}\.\d$"),
        ("GPA", r"^[234]\.\d$"),
        ("Time", r"^\d{1,2}:\d{2}:\d{2} (AM|PM)$"),
        ("Date", r"^\d{4}-\d{2}-\d{2}$"),
        ("Timestamp", r"^\d{13}$"),
        ("Length", r"^\d{1,4} (mm|cm|m|km)$"),
        ("Volume", r"^\d{1,4} (ml|L|m³)$"),
        ("Temperature", r"^-?\d{1,2}°C$"),
        ("Speed", r"^\d{1,3} km/h$"),
        ("Pressure", r"^\d{3,4} hPa$"),
        ("Energy", r"^\d{1,4} kWh$"),
        ("Image URL", r"^https://picsum\.photos/seed/[A-Za-z0-9]{8}/640/480$"),
        ("File Size", r"^\d{1,4} MB$"),
    ];

    for (field_type, pattern) in cases {
        let regex = Regex::new(pattern).expect("regex");
        for value in synthesizer.synthesize(field_type, 25, &mut rng) {
            assert!(regex.is_match(&value), "{field_type}: {value:?}");
        }
    }
}

#[test]
fn bounded_ranges_hold() {
    let synthesizer = synthesizer();
    let mut rng = ChaCha8Rng::seed_from_u64(88);

    for value in synthesizer.synthesize("BMI", 100, &mut rng) {
        let bmi: f64 = value.parse().expect("bmi");
        assert!((18.5..=30.0).contains(&bmi), "{value}");
    }
    for value in synthesizer.synthesize("Temperature", 100, &mut rng) {
        let degrees: i64 = value.trim_end_matches("°C").parse().expect("temperature");
        assert!((-50..=50).contains(&degrees), "{value}");
    }
    for value in synthesizer.synthesize("Founded Year", 50, &mut rng) {
        let year: i32 = value.parse().expect("year");
        assert!((1924..=2024).contains(&year), "{value}");
    }
    for value in synthesizer.synthesize("Graduation Year", 50, &mut rng) {
        let year: i32 = value.parse().expect("year");
        assert!((2024..=2025).contains(&year), "{value}");
    }
    for value in synthesizer.synthesize("Date of Birth", 50, &mut rng) {
        let year: i32 = value[..4].parse().expect("year");
        assert!((1943..=2006).contains(&year), "{value}");
    }
}

#[test]
fn seeded_columns_do_not_depend_on_neighbours() {
    let synthesizer = synthesizer();
    let alone = synthesizer
        .generate_dataset(&selection(&["Name"]), 6, RandomSource::Seeded(99))
        .expect("dataset");
    let together = synthesizer
        .generate_dataset(
            &selection(&["UUID", "Name", "Hex Color"]),
            6,
            RandomSource::Seeded(99),
        )
        .expect("dataset");

    assert_eq!(alone.get("Name"), together.get("Name"));
}

#[test]
fn seeded_output_fingerprint_is_stable() {
    let synthesizer = synthesizer();
    let fields = selection(&["Name", "Email", "Avatar URL", "Hex Color"]);
    let first = synthesizer
        .generate_dataset(&fields, 7, RandomSource::Seeded(7))
        .expect("dataset");
    let second = synthesizer
        .generate_dataset(&fields, 7, RandomSource::Seeded(7))
        .expect("dataset");
    let other = synthesizer
        .generate_dataset(&fields, 7, RandomSource::Seeded(8))
        .expect("dataset");

    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_ne!(first.fingerprint(), other.fingerprint());
}
