#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayFraction {
    pub days: i64,
    pub hours: f64,
}

/// Harmonic subsolar position: true declination plus the mean-sun hour-angle
/// offset from the 00:00 UTC noon meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub declination: f64,
    pub hour_angle_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    pub elevation: f64,
    pub azimuth: f64,
}

pub type TerminatorPath = Vec<GeoPoint>;

/// Channel of [`IrradianceGrid`] values carrying irradiation; the lower
/// channels are left for caller-assigned colour data.
pub const IRRADIANCE_CHANNEL: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct IrradianceGrid {
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    pub values: Vec<Vec<[f64; 4]>>,
}

impl IrradianceGrid {
    pub fn irradiance(&self, lat_row: usize, lon_col: usize) -> f64 {
        self.values[lat_row][lon_col][IRRADIANCE_CHANNEL]
    }
}

/// Mercator-spaced mesh parameters: Mercator y-units on the latitude axis,
/// plain degrees on the longitude axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    pub lon_interval: f64,
    pub lon_span: f64,
    pub lat_interval: f64,
    pub lat_span: f64,
    pub lon_offset: f64,
    pub lat_offset: f64,
    pub fast: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            lon_interval: 10.0,
            lon_span: 360.0,
            lat_interval: 10.0,
            lat_span: 160.0,
            lon_offset: 0.0,
            lat_offset: 0.0,
            fast: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapExtent {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}
