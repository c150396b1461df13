use chrono::Utc;
use daylight::{
    day_fraction, grid_terminator, irradiance_mesh, subsolar_position, terminator_path,
    DirectRadiation, MeshConfig, StandardAltitude, IRRADIANCE_CHANNEL,
};

fn main() {
    let now = Utc::now();
    println!("=== Daylight Shading Example ===");
    println!("Instant: {}", now);
    println!();

    let fraction = day_fraction(now);
    let position = subsolar_position(&fraction);
    println!("--- Subsolar Position ---");
    println!("Days since anchor: {}", fraction.days);
    println!("Hours since midnight: {:.3}", fraction.hours);
    println!("Declination: {:.2}°", position.declination);
    println!("Hour angle offset: {:.2}°", position.hour_angle_offset);
    println!();

    let path = terminator_path(&position, 8).expect("resolution is valid");
    println!("--- Closed-Form Terminator (8 points) ---");
    for point in &path {
        println!("  lon {:8.2}°  lat {:7.2}°", point.longitude, point.latitude);
    }
    println!();

    let grid_path = grid_terminator(now, 19).expect("resolution is valid");
    println!("--- Grid-Extracted Terminator ({} points) ---", grid_path.len());
    for point in grid_path.iter().take(8) {
        println!("  lon {:8.2}°  lat {:7.2}°", point.longitude, point.latitude);
    }
    println!();

    let config = MeshConfig {
        lon_interval: 30.0,
        lat_interval: 0.5,
        lat_span: 6.0,
        ..MeshConfig::default()
    };
    let grid = irradiance_mesh(&config, now, &StandardAltitude, &DirectRadiation)
        .expect("mesh parameters are valid");
    let peak = grid
        .values
        .iter()
        .flatten()
        .map(|node| node[IRRADIANCE_CHANNEL])
        .fold(0.0_f64, f64::max);
    println!("--- Irradiance Mesh ---");
    println!("Mesh: {} x {} nodes", grid.lats.len(), grid.lons.len());
    println!("Peak direct irradiation: {:.1} W/m²", peak);
}
