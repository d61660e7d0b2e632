use vana_calendar::{
    EARTH_MS_PER_VANA_DAY, EPOCH_MS, EarthInstant, VanaDateTime, Weekday, earth_to_vana,
};

fn at(offset_ms: i64) -> VanaDateTime {
    earth_to_vana(EarthInstant::from_millis(EPOCH_MS + offset_ms))
}

#[test]
fn epoch_from_rfc3339() {
    let instant: EarthInstant = "2001-12-31T15:00:00Z".parse().unwrap();
    let v = earth_to_vana(instant);
    assert_eq!(v.year(), 886);
    assert_eq!(v.month(), 1);
    assert_eq!(v.day(), 1);
    assert_eq!(v.hour(), 0);
    assert_eq!(v.minute(), 0);
    assert_eq!(v.second(), 0);
    assert_eq!(v.weekday(), Weekday::Firesday);
}

#[test]
fn rate_law_keeps_larger_fields() {
    let v = at(1000);
    assert_eq!(v.second(), 25);
    assert_eq!(
        (v.year(), v.month(), v.day(), v.hour(), v.minute()),
        (886, 1, 1, 0, 0)
    );
}

#[test]
fn weekday_advances_once_per_vana_day() {
    let day = EARTH_MS_PER_VANA_DAY;
    for n in -20..20_i64 {
        let today = at(n * day).weekday();
        let tomorrow = at((n + 1) * day).weekday();
        assert_eq!(
            tomorrow,
            today.next(),
            "weekday did not advance between vana day {n} and {}",
            n + 1
        );
        assert_eq!(today, Weekday::from_index(n));
    }
}

#[test]
fn weekday_ignores_month_boundaries() {
    // Day 30 is the first of month 2; 30 mod 8 = 6.
    let v = at(30 * EARTH_MS_PER_VANA_DAY);
    assert_eq!((v.month(), v.day()), (2, 1));
    assert_eq!(v.weekday(), Weekday::Lightsday);
}

#[test]
fn every_vana_second_of_first_day_decomposes() {
    // One Earth second (25 Vana'diel seconds) per step.
    let mut expected = 0u32;
    for step in 0..(86_400_u32 / 25) {
        let ms = i64::from(step) * 1000;
        let v = at(ms);
        let seconds = u32::from(v.hour()) * 3600 + u32::from(v.minute()) * 60 + u32::from(v.second());
        assert_eq!(seconds, expected);
        assert_eq!(v.day(), 1);
        expected += 25;
    }
}

#[test]
fn pre_epoch_fields_stay_in_range() {
    for k in 1..2_000_i64 {
        let v = at(-k * 7_919_777);
        assert!(v.year() <= 886);
        assert!((1..=12).contains(&v.month()));
        assert!((1..=30).contains(&v.day()));
        assert!(v.hour() < 24);
        assert!(v.minute() < 60);
        assert!(v.second() < 60);
    }
}

#[test]
fn known_modern_instant() {
    // 2024-01-01T00:00:00Z is 8035.375 Earth days after the epoch:
    // 200884.375 Vana'diel days = 558 years, 0 months, 4 days, 9 hours.
    let instant: EarthInstant = "2024-01-01T00:00:00Z".parse().unwrap();
    let v = earth_to_vana(instant);
    assert_eq!(v.year(), 886 + 558);
    assert_eq!(v.month(), 1);
    assert_eq!(v.day(), 5);
    assert_eq!(v.hour(), 9);
    assert_eq!(v.minute(), 0);
    assert_eq!(v.second(), 0);
    assert_eq!(v.weekday(), Weekday::from_index(200_884));
}

#[test]
fn idempotent() {
    for ms in [i64::MIN, -1, 0, EPOCH_MS, EPOCH_MS + 123_456_789, i64::MAX] {
        let instant = EarthInstant::from_millis(ms);
        assert_eq!(earth_to_vana(instant), earth_to_vana(instant));
    }
}
