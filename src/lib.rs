pub mod angles;
pub mod elevation;
pub mod error;
pub mod irradiance;
pub mod terminator;
pub mod time;
pub mod types;

pub use angles::{
    day_of_year, days_in_months, deg_to_rad, equation_of_time, hour_angle, intermediate_angle_b,
    leap_year, normalize_angle, rad_to_deg, solar_altitude, solar_azimuth, solar_declination,
    solar_zenith_angle, sun_altitude_fast, utc_lst_correction, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use elevation::{declination, radius_vector, right_ascension, sun_angles};

pub use error::{DaylightError, DaylightResult};

pub use irradiance::{
    irradiance_at_point, irradiance_mesh, irradiance_mesh_extent, linear_longitudes,
    mercator_latitudes, AltitudeModel, DirectRadiation, RadiationModel, StandardAltitude,
};

pub use terminator::{grid_terminator, subsolar_position, terminator_path};

pub use time::{day_fraction, julian_centuries, julian_date};

pub use types::{
    DayFraction, GeoPoint, IrradianceGrid, MapExtent, MeshConfig, SolarAngles, SolarPosition,
    TerminatorPath, IRRADIANCE_CHANNEL,
};
