#![allow(missing_docs)]
use chrono::TimeZone;
use spa_engine::{
    output::local_hours_to_time, Atmosphere, FunctionCode, Horizon, Location, SolarEvent, SpaCalculator, Surface,
    TimeInstant,
};

fn describe(event: SolarEvent) -> String {
    match event {
        SolarEvent::Occurs(hours) => match local_hours_to_time(hours) {
            Some(time) => time.to_string(),
            None => format!("{hours:.4} h"),
        },
        SolarEvent::AllDay => "sun stays up".to_string(),
        SolarEvent::AllNight => "sun stays down".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Lakewood, NJ
    let latitude = 40.070591415768035;
    let longitude: f64 = -74.20516698767808;
    let elevation = 23.0;

    let local_noon = chrono_tz::America::New_York
        .with_ymd_and_hms(2024, 6, 21, 12, 0, 0)
        .single()
        .ok_or("ambiguous local time")?;

    let time = TimeInstant::from_datetime(&local_noon, 0.0, 0.0).with_estimated_delta_t();
    let location = Location::new(latitude, longitude, elevation);
    let atmosphere = Atmosphere::new(1021.3, 24.0, Atmosphere::STANDARD_REFRACTION);
    // South-facing roof at 25°
    let surface = Surface::new(25.0, 0.0);

    let calculator = SpaCalculator::new(time, location, atmosphere, surface)?;
    let output = calculator.calculate(FunctionCode::All);

    println!("Solar Position - Lakewood, NJ");
    println!("Location: {:.5}°N, {:.5}°W, {:.1} m", latitude, longitude.abs(), elevation);
    println!("Date: {} (UTC{:+})", local_noon.date_naive(), time.timezone);
    println!("ΔT: {:.1} s (estimated)", time.delta_t);
    println!("{:=<60}", "");

    println!("At {}:", local_noon.time());
    println!("  Zenith angle:    {:.4}°", output.zenith);
    println!("  Elevation angle: {:.4}°", 90.0 - output.zenith);
    println!("  Azimuth:         {:.4}°", output.azimuth);
    if let Some(incidence) = output.incidence {
        println!("  Roof incidence:  {:.4}°", incidence);
    }
    println!("  Equation of time: {:.2} min", output.equation_of_time);
    println!();

    if let Some(rts) = output.rise_transit_set {
        println!("Sunrise:    {}", describe(rts.sunrise));
        println!("Solar noon: {}", describe(SolarEvent::Occurs(rts.transit)));
        println!("Sunset:     {}", describe(rts.sunset));
        println!("Noon altitude: {:.2}°", rts.transit_altitude);
    }
    println!();

    println!("Twilight:");
    for (name, horizon) in [
        ("Civil", Horizon::CivilTwilight),
        ("Nautical", Horizon::NauticalTwilight),
        ("Astronomical", Horizon::AstronomicalTwilight),
    ] {
        let rts = calculator.rise_transit_set(horizon);
        println!("  {name:<13} dawn {}  dusk {}", describe(rts.sunrise), describe(rts.sunset));
    }
    Ok(())
}
