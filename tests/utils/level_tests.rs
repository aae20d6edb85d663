use approx::assert_abs_diff_eq;
use metfor::{Celsius, HectoPascal, Meters, Quantity};
use sounding_params::{interpolation, level_of_temperature, Profile};
use std::collections::HashMap;

const TOL: f64 = 1.0e-6;

fn expected<'a>(fvals: &'a HashMap<String, Vec<f64>>, key: &str) -> Option<&'a [f64]> {
    fvals.get(key).map(|vals| vals.as_slice())
}

#[allow(dead_code)]
pub fn test_surface_pressure(prof: &Profile, fvals: &HashMap<String, Vec<f64>>) {
    if let Some(vals) = expected(fvals, "surface pressure") {
        let p = prof.surface_pressure().into_option().unwrap();
        assert_abs_diff_eq!(p.unpack(), vals[0], epsilon = TOL);
    }
}

#[allow(dead_code)]
pub fn test_interpolated_values(prof: &Profile, fvals: &HashMap<String, Vec<f64>>) {
    if let Some(vals) = expected(fvals, "height at 900") {
        let h = interpolation::height_at_pressure(HectoPascal(900.0), prof)
            .into_option()
            .unwrap();
        assert_abs_diff_eq!(h.unpack(), vals[0], epsilon = TOL);
    }

    if let Some(vals) = expected(fvals, "pressure at 1000m") {
        let p = interpolation::pressure_at_height(Meters(1000.0), prof)
            .into_option()
            .unwrap();
        assert_abs_diff_eq!(p.unpack(), vals[0], epsilon = TOL);
    }

    if let Some(vals) = expected(fvals, "temperature at 600") {
        let t = interpolation::temperature_at_pressure(HectoPascal(600.0), prof)
            .into_option()
            .unwrap();
        assert_abs_diff_eq!(t.unpack(), vals[0], epsilon = TOL);
    }

    if let Some(vals) = expected(fvals, "dew point at 600") {
        let td = interpolation::dew_point_at_pressure(HectoPascal(600.0), prof)
            .into_option()
            .unwrap();
        assert_abs_diff_eq!(td.unpack(), vals[0], epsilon = TOL);
    }
}

#[allow(dead_code)]
pub fn test_freezing_level(prof: &Profile, fvals: &HashMap<String, Vec<f64>>) {
    if let Some(vals) = expected(fvals, "freezing level") {
        let p = level_of_temperature(prof, Celsius(0.0))
            .into_option()
            .unwrap();
        assert_abs_diff_eq!(p.unpack(), vals[0], epsilon = TOL);
    }
}
