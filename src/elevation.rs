// Low-order solar position from the NOAA solar calculator equations
// (Meeus, "Astronomical Algorithms"), driven by Julian centuries since
// J2000.0. Angles are degrees at every public boundary.

use chrono::{DateTime, Timelike, Utc};

use crate::angles::{deg_to_rad, rad_to_deg};
use crate::time::{julian_centuries, julian_date};
use crate::types::SolarAngles;

fn geometric_mean_longitude(t: f64) -> f64 {
    (280.46646 + t * (36000.76983 + t * 0.0003032)).rem_euclid(360.0)
}

fn geometric_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - t * 0.0001537)
}

fn orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + t * 0.0000001267)
}

fn equation_of_center(t: f64) -> f64 {
    let m = deg_to_rad(geometric_mean_anomaly(t));
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

fn true_longitude(t: f64) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

fn apparent_longitude(t: f64) -> f64 {
    true_longitude(t) - 0.00569 - 0.00478 * deg_to_rad(125.04 - 1934.136 * t).sin()
}

fn mean_obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

fn obliquity_correction(t: f64) -> f64 {
    mean_obliquity(t) + 0.00256 * deg_to_rad(125.04 - 1934.136 * t).cos()
}

pub fn right_ascension(t: f64) -> f64 {
    let epsilon = deg_to_rad(obliquity_correction(t));
    let lambda = deg_to_rad(apparent_longitude(t));
    rad_to_deg((epsilon.cos() * lambda.sin()).atan2(lambda.cos()))
}

pub fn declination(t: f64) -> f64 {
    let epsilon = deg_to_rad(obliquity_correction(t));
    let lambda = deg_to_rad(apparent_longitude(t));
    rad_to_deg((epsilon.sin() * lambda.sin()).asin())
}

/// Sun-Earth distance in astronomical units.
pub fn radius_vector(t: f64) -> f64 {
    let e = orbit_eccentricity(t);
    let nu = deg_to_rad(geometric_mean_anomaly(t) + equation_of_center(t));
    1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos())
}

/// Difference between apparent and mean solar time, in minutes.
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = deg_to_rad(obliquity_correction(t));
    let l0 = deg_to_rad(geometric_mean_longitude(t));
    let e = orbit_eccentricity(t);
    let m = deg_to_rad(geometric_mean_anomaly(t));
    let y = (epsilon / 2.0).tan().powi(2);

    let eq_time = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    4.0 * rad_to_deg(eq_time)
}

/// Solar elevation and azimuth at a point and instant. Azimuth is degrees
/// clockwise from north; at the exact poles it is undefined and a
/// conventional value (180 north, 0 south) is returned.
pub fn sun_angles(latitude: f64, longitude: f64, instant: DateTime<Utc>) -> SolarAngles {
    let t = julian_centuries(julian_date(instant));
    let decl = declination(t);
    let eq_time = equation_of_time(t);

    let utc_minutes = f64::from(instant.num_seconds_from_midnight()) / 60.0;
    let true_solar_time = (utc_minutes + eq_time + 4.0 * longitude).rem_euclid(1440.0);
    let ha = true_solar_time / 4.0 - 180.0;

    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(decl);
    let cos_zenith = lat_rad.sin() * dec_rad.sin()
        + lat_rad.cos() * dec_rad.cos() * deg_to_rad(ha).cos();
    let zenith = rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos());
    let elevation = 90.0 - zenith;

    let az_denom = lat_rad.cos() * deg_to_rad(zenith).sin();
    let azimuth = if az_denom.abs() > 1e-9 {
        let az_cos = ((lat_rad.sin() * deg_to_rad(zenith).cos()) - dec_rad.sin()) / az_denom;
        let mut az = 180.0 - rad_to_deg(az_cos.clamp(-1.0, 1.0).acos());
        if ha > 0.0 {
            az = -az;
        }
        az.rem_euclid(360.0)
    } else if latitude > 0.0 {
        180.0
    } else {
        0.0
    };

    SolarAngles { elevation, azimuth }
}
