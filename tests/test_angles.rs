use chrono::{TimeZone, Utc};
use daylight::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── DayOfYear ──

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of_year(2026, 1, 1), 1);
    assert_eq!(day_of_year(2026, 3, 21), 80);
    assert_eq!(day_of_year(2026, 12, 31), 365);
}

#[test]
fn test_day_of_year_leap_year() {
    assert_eq!(day_of_year(2024, 2, 29), 60);
    assert_eq!(day_of_year(2024, 3, 1), 61);
    assert_eq!(day_of_year(2024, 12, 31), 366);
}

#[test]
fn test_day_of_year_century_leap_rules() {
    assert_eq!(day_of_year(2000, 2, 29), 60);
    assert_eq!(day_of_year(1900, 2, 28), 59);
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 0.1);
    }
}

// ── SolarDeclination ──

#[test]
fn test_solar_declination_solstices_equinoxes() {
    assert_approx!(solar_declination(172), 23.45, 0.5);
    assert_approx!(solar_declination(355), -23.45, 0.5);
    assert_approx!(solar_declination(80), 0.0, 1.0);
    assert_approx!(solar_declination(264), 0.0, 1.0);
}

#[test]
fn test_solar_declination_bounded_all_days() {
    for n in 1..=365 {
        let decl = solar_declination(n);
        assert!(
            decl >= -23.45 && decl <= 23.45,
            "Day {}: {}",
            n, decl
        );
    }
}

// ── SunAltitudeFast ──

#[test]
fn test_fast_altitude_springfield_equinox_noon() {
    // 12:00 local solar time near Springfield IL is about 18:00 UTC
    let dt = Utc.with_ymd_and_hms(2026, 3, 21, 18, 0, 0).unwrap();
    assert_approx!(sun_altitude_fast(39.8, -89.6, dt), 50.0, 2.0);
}

#[test]
fn test_fast_altitude_summer_above_winter() {
    let summer = Utc.with_ymd_and_hms(2026, 6, 21, 18, 0, 0).unwrap();
    let winter = Utc.with_ymd_and_hms(2026, 12, 21, 18, 0, 0).unwrap();
    let summer_alt = sun_altitude_fast(39.8, -89.6, summer);
    let winter_alt = sun_altitude_fast(39.8, -89.6, winter);
    assert!(summer_alt > 50.0, "summer altitude={}", summer_alt);
    assert!(winter_alt < 50.0, "winter altitude={}", winter_alt);
    assert_approx!(summer_alt - winter_alt, 46.9, 3.0);
}

#[test]
fn test_fast_altitude_negative_at_night() {
    let dt = Utc.with_ymd_and_hms(2026, 3, 21, 6, 0, 0).unwrap();
    assert!(sun_altitude_fast(39.8, -89.6, dt) < 0.0);
}

// ── ZenithAngle / Azimuth ──

#[test]
fn test_zenith_plus_altitude_is_ninety() {
    let z = solar_zenith_angle(39.8, 10.0, 30.0);
    assert_approx!(z + solar_altitude(z), 90.0, 1e-12);
}

#[test]
fn test_azimuth_range() {
    for ha in [-90.0, -45.0, 0.0, 45.0, 90.0] {
        let az = solar_azimuth(39.8, 10.0, ha);
        assert!((0.0..=360.0).contains(&az), "azimuth={}", az);
    }
}
