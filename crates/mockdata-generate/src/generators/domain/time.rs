use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate};
use rand::{Rng, RngCore};

use crate::generators::primitives::{FnGenerator, PickGenerator};
use crate::generators::{GeneratedValue, GeneratorContext, GeneratorRegistry};

const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_YEAR: i64 = 365;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FnGenerator::new("Time", |ctx, rng| {
        GeneratedValue::Time(recent(ctx, rng).naive_local().time())
    })));
    registry.register_generator(Box::new(FnGenerator::new("Date", |ctx, rng| {
        GeneratedValue::Date(recent(ctx, rng).naive_utc().date())
    })));
    registry.register_generator(Box::new(PickGenerator::new("Day of Week", WEEKDAYS)));
    registry.register_generator(Box::new(PickGenerator::new("Month", MONTHS)));
    registry.register_generator(Box::new(FnGenerator::new("Year", |ctx, rng| {
        GeneratedValue::Int(i64::from(past_years(ctx, 1, rng).year()))
    })));
    registry.register_generator(Box::new(PickGenerator::new("Century", CENTURIES)));
    registry.register_generator(Box::new(FnGenerator::new("Timestamp", |ctx, rng| {
        GeneratedValue::Int(recent(ctx, rng).timestamp_millis())
    })));
}

pub const WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const CENTURIES: &[&str] = &["18th", "19th", "20th", "21st"];

/// Instant within the day before `ctx.now`.
pub fn recent(ctx: &GeneratorContext, rng: &mut dyn RngCore) -> DateTime<FixedOffset> {
    let seconds = rng.random_range(0..=SECONDS_PER_DAY);
    shift(ctx.now, -seconds)
}

/// Instant within `years` before `ctx.now`.
pub fn past_years(ctx: &GeneratorContext, years: i64, rng: &mut dyn RngCore) -> DateTime<FixedOffset> {
    let seconds = rng.random_range(1..=years * DAYS_PER_YEAR * SECONDS_PER_DAY);
    shift(ctx.now, -seconds)
}

/// Instant within `years` after `ctx.now`.
pub fn future_years(ctx: &GeneratorContext, years: i64, rng: &mut dyn RngCore) -> DateTime<FixedOffset> {
    let seconds = rng.random_range(1..=years * DAYS_PER_YEAR * SECONDS_PER_DAY);
    shift(ctx.now, seconds)
}

pub fn days_ago(today: NaiveDate, days: i64) -> NaiveDate {
    today
        .checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}

fn shift(at: DateTime<FixedOffset>, seconds: i64) -> DateTime<FixedOffset> {
    at.checked_add_signed(Duration::seconds(seconds))
        .unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn ctx_in(offset_hours: i32, hour: u32) -> GeneratorContext {
        let offset = FixedOffset::east_opt(offset_hours * 3600).expect("offset");
        let now = offset
            .with_ymd_and_hms(2024, 6, 15, hour, 0, 0)
            .single()
            .expect("unambiguous instant");
        GeneratorContext::new(now)
    }

    fn ctx() -> GeneratorContext {
        ctx_in(0, 12)
    }

    #[test]
    fn recent_stays_within_one_day() {
        let ctx = ctx();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..100 {
            let at = recent(&ctx, &mut rng);
            assert!(at <= ctx.now);
            assert!(ctx.now - at <= Duration::days(1));
        }
    }

    #[test]
    fn future_is_after_now() {
        let ctx = ctx();
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        for _ in 0..100 {
            let at = future_years(&ctx, 1, &mut rng);
            assert!(at > ctx.now);
            assert!(at.year() <= 2025);
        }
    }

    #[test]
    fn timestamp_is_epoch_millis_regardless_of_offset() {
        let registry = GeneratorRegistry::new();
        let generator = registry.resolve("Timestamp");
        // 2024-06-15 08:00 +09:00 is 2024-06-14 23:00 UTC.
        let ctx = ctx_in(9, 8);
        let now_ms = ctx.now.timestamp_millis();
        assert_eq!(now_ms, 1_718_406_000_000);
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for _ in 0..200 {
            let ts = generator.generate(&ctx, &mut rng).as_i64().expect("integer");
            assert!(ts <= now_ms, "{ts} is after {now_ms}");
            assert!(ts >= now_ms - SECONDS_PER_DAY * 1000, "{ts} is older than a day");
        }
    }

    #[test]
    fn date_is_utc_and_time_is_wall_clock() {
        let registry = GeneratorRegistry::new();
        let ctx = ctx_in(9, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        for _ in 0..200 {
            let date = registry.resolve("Date").generate(&ctx, &mut rng).render();
            assert!(date == "2024-06-13" || date == "2024-06-14", "{date}");
        }

        let at = shift(ctx.now, 0);
        assert_eq!(at.naive_local().time().format("%H:%M").to_string(), "08:00");
        assert_eq!(at.naive_utc().date().to_string(), "2024-06-14");
    }
}
