use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use sounding_params::{Profile, MISSING};

pub mod layer_tests;
pub mod level_tests;
pub mod parcel_tests;
pub mod wind_tests;

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {
            use std::collections::HashMap;

            use sounding_params::Profile;

            fn load_data() -> (Profile, HashMap<String, Vec<f64>>) {
                crate::utils::load_test_file($fname)
            }

            mod levels {
                use super::load_data;
                use crate::utils::level_tests;

                #[test]
                fn surface() {
                    let (prof, fvals) = load_data();
                    level_tests::test_surface_pressure(&prof, &fvals);
                }

                #[test]
                fn interpolated_values() {
                    let (prof, fvals) = load_data();
                    level_tests::test_interpolated_values(&prof, &fvals);
                }

                #[test]
                fn freezing_level() {
                    let (prof, fvals) = load_data();
                    level_tests::test_freezing_level(&prof, &fvals);
                }
            }

            mod layers {
                use super::load_data;
                use crate::utils::layer_tests;

                #[test]
                fn lapse_rates() {
                    let (prof, fvals) = load_data();
                    layer_tests::test_lapse_rates(&prof, &fvals);
                }

                #[test]
                fn fast_and_exact_means_agree() {
                    let (prof, _) = load_data();
                    layer_tests::test_fast_and_exact_means_agree(&prof);
                }
            }

            mod indexes {
                use super::load_data;
                use crate::utils::index_tests;

                #[test]
                fn k_index() {
                    let (prof, fvals) = load_data();
                    index_tests::test_index(&prof, &fvals, sounding_params::k_index, "k index");
                }

                #[test]
                fn cross_totals() {
                    let (prof, fvals) = load_data();
                    index_tests::test_index(
                        &prof,
                        &fvals,
                        sounding_params::cross_totals,
                        "cross totals",
                    );
                }

                #[test]
                fn vertical_totals() {
                    let (prof, fvals) = load_data();
                    index_tests::test_index(
                        &prof,
                        &fvals,
                        sounding_params::vertical_totals,
                        "vertical totals",
                    );
                }

                #[test]
                fn total_totals() {
                    let (prof, fvals) = load_data();
                    index_tests::test_index(
                        &prof,
                        &fvals,
                        sounding_params::total_totals,
                        "total totals",
                    );
                }

                #[test]
                fn max_temperature() {
                    let (prof, fvals) = load_data();
                    index_tests::test_max_temperature(&prof, &fvals);
                }

                #[test]
                fn precipitable_water() {
                    let (prof, fvals) = load_data();
                    index_tests::test_precipitable_water(&prof, &fvals);
                }
            }

            mod wind {
                use super::load_data;
                use crate::utils::wind_tests;

                #[test]
                fn mean_wind() {
                    let (prof, fvals) = load_data();
                    wind_tests::test_mean_wind(&prof, &fvals);
                }
            }

            mod parcels {
                use super::load_data;
                use crate::utils::parcel_tests;

                #[test]
                fn surface_parcel() {
                    let (prof, fvals) = load_data();
                    parcel_tests::test_surface_parcel(&prof, &fvals);
                }

                #[test]
                fn analysis() {
                    let (prof, fvals) = load_data();
                    parcel_tests::test_analysis(prof, &fvals);
                }
            }
        }
    };
}

pub fn load_test_file(fname: &str) -> (Profile, HashMap<String, Vec<f64>>) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_profile(&test_path)
}

fn load_test_csv_profile(location: &PathBuf) -> (Profile, HashMap<String, Vec<f64>>) {
    let mut f = File::open(location).unwrap_or_else(|_| panic!("Error opening {:?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .unwrap_or_else(|_| panic!("Error reading {:?}", location));

    let lines: Vec<&str> = contents.lines().collect();
    let mut line_iter = lines.iter();

    //
    // Parse profile data
    //
    let mut press: Vec<f64> = Vec::with_capacity(lines.len());
    let mut height: Vec<f64> = Vec::with_capacity(lines.len());
    let mut temp: Vec<f64> = Vec::with_capacity(lines.len());
    let mut dp: Vec<f64> = Vec::with_capacity(lines.len());
    let mut wdir: Vec<f64> = Vec::with_capacity(lines.len());
    let mut wspd: Vec<f64> = Vec::with_capacity(lines.len());

    for line in line_iter.by_ref() {
        if line.starts_with("### Expected Values ###") {
            break;
        }
        if line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 6 {
            continue;
        }
        let parse = |i: usize| f64::from_str(tokens[i].trim()).unwrap_or(MISSING);

        press.push(parse(0));
        height.push(parse(1));
        temp.push(parse(2));
        dp.push(parse(3));
        wdir.push(parse(4));
        wspd.push(parse(5));
    }

    let prof = Profile::builder()
        .with_pressure(press)
        .with_height(height)
        .with_temperature(temp)
        .with_dew_point(dp)
        .with_wind_spd_dir(wdir, wspd)
        .with_source_description(format!("{:?}", location))
        .build()
        .unwrap();

    //
    // Parse expected values
    //
    let mut fvals: HashMap<String, Vec<f64>> = HashMap::new();

    for line in line_iter {
        let mut tokens = line.split(',');
        let key = match tokens.next() {
            Some(key) if !key.trim().is_empty() => key.trim().to_owned(),
            _ => continue,
        };

        let vals: Vec<f64> = tokens
            .map(|tok| f64::from_str(tok.trim()).unwrap())
            .collect();
        fvals.insert(key, vals);
    }

    (prof, fvals)
}
