use chrono::{DateTime, Datelike, Utc};
use log::info;

use crate::angles::{day_of_year, deg_to_rad, linspace, rad_to_deg, sun_altitude_fast};
use crate::elevation::sun_angles;
use crate::error::{DaylightError, DaylightResult};
use crate::types::{IrradianceGrid, MapExtent, MeshConfig, IRRADIANCE_CHANNEL};

/// Solar altitude lookup, injectable so the mesh sampler can run against a
/// stub in tests or a higher-precision library in production.
pub trait AltitudeModel {
    /// Degrees above the horizon at the given point and instant; `fast`
    /// selects a lower-accuracy, higher-speed estimate.
    fn altitude(
        &self,
        latitude: f64,
        longitude: f64,
        instant: DateTime<Utc>,
        fast: bool,
    ) -> DaylightResult<f64>;
}

/// Direct-beam irradiation from a solar altitude, non-negative and zero at
/// or below the horizon.
pub trait RadiationModel {
    fn radiation(&self, instant: DateTime<Utc>, altitude: f64) -> DaylightResult<f64>;
}

/// Built-in altitude collaborator: the day-of-year estimator when `fast`,
/// the Julian-century elevation model otherwise.
pub struct StandardAltitude;

impl AltitudeModel for StandardAltitude {
    fn altitude(
        &self,
        latitude: f64,
        longitude: f64,
        instant: DateTime<Utc>,
        fast: bool,
    ) -> DaylightResult<f64> {
        if fast {
            Ok(sun_altitude_fast(latitude, longitude, instant))
        } else {
            Ok(sun_angles(latitude, longitude, instant).elevation)
        }
    }
}

/// Clear-sky direct-beam model: seasonal apparent extraterrestrial flux
/// attenuated by the optical depth along the air-mass path.
pub struct DirectRadiation;

impl RadiationModel for DirectRadiation {
    fn radiation(&self, instant: DateTime<Utc>, altitude: f64) -> DaylightResult<f64> {
        if altitude <= 0.0 {
            return Ok(0.0);
        }
        let n = day_of_year(instant.year(), instant.month(), instant.day()) as f64;
        let flux = 1160.0 + 75.0 * deg_to_rad(360.0 / 365.0 * (n - 275.0)).sin();
        let optical_depth = 0.174 + 0.035 * deg_to_rad(360.0 / 365.0 * (n - 100.0)).sin();
        let air_mass = 1.0 / deg_to_rad(altitude).sin();
        Ok(flux * (-optical_depth * air_mass).exp())
    }
}

/// Latitude sample points under an inverse-Mercator spacing, so equal mesh
/// steps land on equal pixel rows of a Mercator-projected map. Filtered to
/// [-90, 90] and monotonically increasing.
pub fn mercator_latitudes(span: f64, interval: f64, offset: f64) -> DaylightResult<Vec<f64>> {
    check_axis("mercator_latitudes", span, interval)?;
    let first = (offset / interval) as i64;
    let last = ((span + offset) / interval) as i64;
    Ok((first..=last)
        .map(|x| rad_to_deg((-span / 2.0 + x as f64 * interval).sinh().atan()))
        .filter(|lat| (-90.0..=90.0).contains(lat))
        .collect())
}

/// Evenly spaced longitude sample points, filtered to [-180, 180].
pub fn linear_longitudes(span: f64, interval: f64, offset: f64) -> DaylightResult<Vec<f64>> {
    check_axis("linear_longitudes", span, interval)?;
    let first = (offset / interval) as i64;
    let last = ((span + offset) / interval) as i64;
    Ok((first..=last)
        .map(|x| -span / 2.0 + x as f64 * interval)
        .filter(|lon| (-180.0..=180.0).contains(lon))
        .collect())
}

fn check_axis(context: &'static str, span: f64, interval: f64) -> DaylightResult<()> {
    if !(span > 0.0) {
        return Err(DaylightError::invalid_argument(
            context,
            format!("span must be positive, got {span}"),
        ));
    }
    if !(interval > 0.0) {
        return Err(DaylightError::invalid_argument(
            context,
            format!("interval must be positive, got {interval}"),
        ));
    }
    Ok(())
}

/// Irradiation at a single point: altitude collaborator, then radiation
/// collaborator. Non-finite collaborator output is a failure, not a value.
pub fn irradiance_at_point<A, R>(
    latitude: f64,
    longitude: f64,
    instant: DateTime<Utc>,
    fast: bool,
    altitude_model: &A,
    radiation_model: &R,
) -> DaylightResult<f64>
where
    A: AltitudeModel + ?Sized,
    R: RadiationModel + ?Sized,
{
    let altitude = altitude_model.altitude(latitude, longitude, instant, fast)?;
    if !altitude.is_finite() {
        return Err(DaylightError::collaborator_failure(
            "altitude",
            format!("non-finite altitude {altitude} at ({latitude}, {longitude})"),
        ));
    }
    let irradiation = radiation_model.radiation(instant, altitude)?;
    if !irradiation.is_finite() {
        return Err(DaylightError::collaborator_failure(
            "radiation",
            format!("non-finite irradiation {irradiation} at ({latitude}, {longitude})"),
        ));
    }
    Ok(irradiation)
}

/// Mercator-spaced irradiation mesh. One altitude and one radiation call
/// per node; the first failure aborts the remaining nodes.
pub fn irradiance_mesh<A, R>(
    config: &MeshConfig,
    instant: DateTime<Utc>,
    altitude_model: &A,
    radiation_model: &R,
) -> DaylightResult<IrradianceGrid>
where
    A: AltitudeModel + ?Sized,
    R: RadiationModel + ?Sized,
{
    let lats = mercator_latitudes(config.lat_span, config.lat_interval, config.lat_offset)?;
    let lons = linear_longitudes(config.lon_span, config.lon_interval, config.lon_offset)?;
    fill_grid(lats, lons, instant, config.fast, altitude_model, radiation_model)
}

/// Evenly spaced irradiation mesh over a map extent, `resolution` given as
/// `(lon_count, lat_count)`.
pub fn irradiance_mesh_extent<A, R>(
    resolution: (usize, usize),
    extent: &MapExtent,
    instant: DateTime<Utc>,
    fast: bool,
    altitude_model: &A,
    radiation_model: &R,
) -> DaylightResult<IrradianceGrid>
where
    A: AltitudeModel + ?Sized,
    R: RadiationModel + ?Sized,
{
    if resolution.0 < 2 || resolution.1 < 2 {
        return Err(DaylightError::invalid_argument(
            "irradiance_mesh_extent",
            format!("resolution must be at least 2 on both axes, got {resolution:?}"),
        ));
    }
    if extent.min_lon > extent.max_lon || extent.min_lat > extent.max_lat {
        return Err(DaylightError::invalid_argument(
            "irradiance_mesh_extent",
            format!("extent minima exceed maxima: {extent:?}"),
        ));
    }
    let lats = linspace(extent.min_lat, extent.max_lat, resolution.1);
    let lons = linspace(extent.min_lon, extent.max_lon, resolution.0);
    fill_grid(lats, lons, instant, fast, altitude_model, radiation_model)
}

fn fill_grid<A, R>(
    lats: Vec<f64>,
    lons: Vec<f64>,
    instant: DateTime<Utc>,
    fast: bool,
    altitude_model: &A,
    radiation_model: &R,
) -> DaylightResult<IrradianceGrid>
where
    A: AltitudeModel + ?Sized,
    R: RadiationModel + ?Sized,
{
    info!("sampling irradiance over a {}x{} mesh", lats.len(), lons.len());

    let mut values = vec![vec![[0.0; 4]; lons.len()]; lats.len()];
    for (row, &lat) in lats.iter().enumerate() {
        for (col, &lon) in lons.iter().enumerate() {
            values[row][col][IRRADIANCE_CHANNEL] =
                irradiance_at_point(lat, lon, instant, fast, altitude_model, radiation_model)?;
        }
    }
    Ok(IrradianceGrid { lats, lons, values })
}
