use chrono::{DateTime, Utc};
use log::info;

use crate::angles::{deg_to_rad, linspace, rad_to_deg, DEGREES_PER_HOUR};
use crate::elevation::sun_angles;
use crate::error::{DaylightError, DaylightResult};
use crate::types::{DayFraction, GeoPoint, SolarPosition, TerminatorPath};

/// Harmonic subsolar position for a day fraction: mean anomaly advanced at
/// 0.9856°/day from the December 31 anchor, a single-term equation of
/// center, and declination from the ecliptic-longitude sine and its cube.
pub fn subsolar_position(fraction: &DayFraction) -> SolarPosition {
    let mean_anomaly = -3.6 + 0.9856 * fraction.days as f64;
    let true_anomaly = mean_anomaly + 1.9 * deg_to_rad(mean_anomaly).sin();
    let ecliptic_longitude = true_anomaly + 282.9;
    let s = deg_to_rad(ecliptic_longitude).sin();
    let declination = 22.8 * s + 0.6 * s.powi(3);
    SolarPosition {
        declination,
        hour_angle_offset: -DEGREES_PER_HOUR * fraction.hours,
    }
}

/// Closed-form day/night boundary: `resolution` points on the great circle
/// whose pole is the subsolar point, parameterised over [0°, 360°). Points
/// are not sorted by longitude; the caller may close the curve.
pub fn terminator_path(
    position: &SolarPosition,
    resolution: usize,
) -> DaylightResult<TerminatorPath> {
    if resolution < 2 {
        return Err(DaylightError::invalid_argument(
            "terminator_path",
            format!("resolution must be at least 2, got {resolution}"),
        ));
    }

    let decl = deg_to_rad(position.declination);
    let sigma = deg_to_rad(position.hour_angle_offset);
    let mut path = Vec::with_capacity(resolution);
    for i in 0..resolution {
        let theta = deg_to_rad(360.0 * i as f64 / resolution as f64);
        let decl_sin = decl.sin() * theta.sin();
        let x = sigma.cos() * decl_sin - sigma.sin() * theta.cos();
        let y = sigma.sin() * decl_sin + sigma.cos() * theta.cos();
        path.push(GeoPoint {
            longitude: rad_to_deg(y.atan2(x)),
            latitude: rad_to_deg((decl.cos() * theta.sin()).asin()),
        });
    }
    Ok(path)
}

/// Terminator extraction by zero-elevation crossing detection on a
/// `resolution` x `resolution` grid, using the Julian-century elevation
/// model. Rows run north to south, so output latitudes descend; a row that
/// is entirely day or entirely night contributes no point. Costs
/// `resolution²` elevation evaluations.
pub fn grid_terminator(
    instant: DateTime<Utc>,
    resolution: usize,
) -> DaylightResult<TerminatorPath> {
    if resolution < 2 {
        return Err(DaylightError::invalid_argument(
            "grid_terminator",
            format!("resolution must be at least 2, got {resolution}"),
        ));
    }

    info!("extracting terminator from a {resolution}x{resolution} elevation grid");

    let lats = linspace(-90.0, 90.0, resolution);
    let lons = linspace(-180.0, 180.0, resolution);
    let mut path = Vec::new();
    let mut row = vec![0.0; resolution];

    for &lat in lats.iter().rev() {
        for (col, &lon) in lons.iter().enumerate() {
            row[col] = sun_angles(lat, lon, instant).elevation;
        }

        let mut descending = None;
        let mut ascending = None;
        for col in 1..resolution {
            let (before, after) = (row[col - 1], row[col]);
            if before * after > 0.0 {
                continue;
            }
            let crossing = lons[col - 1] - before * (lons[col] - lons[col - 1]) / (after - before);
            if after < before && descending.is_none() {
                descending = Some(crossing);
            } else if after > before && ascending.is_none() {
                ascending = Some(crossing);
            }
        }

        for longitude in descending.into_iter().chain(ascending) {
            path.push(GeoPoint {
                longitude,
                latitude: lat,
            });
        }
    }
    Ok(path)
}
