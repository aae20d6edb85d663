use approx::assert_abs_diff_eq;
use metfor::{HectoPascal, Meters, Quantity};
use sounding_params::{
    lapse_rate, mean_mixing_ratio, precipitable_water, LapseRateBounds, MeanMethod, Profile,
};
use std::collections::HashMap;

const TOL: f64 = 1.0e-6;

#[allow(dead_code)]
pub fn test_lapse_rates(prof: &Profile, fvals: &HashMap<String, Vec<f64>>) {
    let cases = [
        (
            "lapse rate sfc-3km",
            LapseRateBounds::HeightAgl {
                lower: Meters(0.0),
                upper: Meters(3000.0),
            },
        ),
        (
            "lapse rate 3-6km",
            LapseRateBounds::HeightAgl {
                lower: Meters(3000.0),
                upper: Meters(6000.0),
            },
        ),
        (
            "lapse rate 850-500",
            LapseRateBounds::Pressure {
                lower: HectoPascal(850.0),
                upper: HectoPascal(500.0),
            },
        ),
        (
            "lapse rate 700-500",
            LapseRateBounds::Pressure {
                lower: HectoPascal(700.0),
                upper: HectoPascal(500.0),
            },
        ),
    ];

    for &(key, bounds) in cases.iter() {
        if let Some(vals) = fvals.get(key) {
            let lr = lapse_rate(prof, bounds).unwrap();
            assert_abs_diff_eq!(lr, vals[0], epsilon = TOL);
        }
    }
}

#[allow(dead_code)]
pub fn test_fast_and_exact_means_agree(prof: &Profile) {
    let fine = MeanMethod::Fast {
        step: HectoPascal(0.1),
    };

    let exact = precipitable_water(prof, None, MeanMethod::Exact).unwrap();
    let fast = precipitable_water(prof, None, fine).unwrap();
    assert_abs_diff_eq!(exact.unpack(), fast.unpack(), epsilon = 0.1);

    let exact = mean_mixing_ratio(prof, None, MeanMethod::Exact).unwrap();
    let fast = mean_mixing_ratio(prof, None, fine).unwrap();
    assert_abs_diff_eq!(exact, fast, epsilon = 0.1);
}
