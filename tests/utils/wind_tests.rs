use approx::assert_abs_diff_eq;
use metfor::{Quantity, WindUV};
use sounding_params::{mean_wind, mean_wind_npw, MeanWindOptions, Profile};
use std::collections::HashMap;

const TOL: f64 = 1.0e-6;

#[allow(dead_code)]
pub fn test_mean_wind(prof: &Profile, fvals: &HashMap<String, Vec<f64>>) {
    let opts = MeanWindOptions::default();

    if let Some(vals) = fvals.get("mean wind") {
        let WindUV { u, v } = mean_wind(prof, &opts).unwrap();
        assert_abs_diff_eq!(u.unpack(), vals[0], epsilon = TOL);
        assert_abs_diff_eq!(v.unpack(), vals[1], epsilon = TOL);
    }

    if let Some(vals) = fvals.get("mean wind npw") {
        let WindUV { u, v } = mean_wind_npw(prof, &opts).unwrap();
        assert_abs_diff_eq!(u.unpack(), vals[0], epsilon = TOL);
        assert_abs_diff_eq!(v.unpack(), vals[1], epsilon = TOL);
    }
}
