//! Profiles used in the unit tests.
use crate::profile::{Profile, MISSING};

/// A profile with a missing lowest level.
pub(crate) fn interpolation_profile() -> Profile {
    Profile::builder()
        .with_pressure(vec![
            1000.0, 925.0, 850.0, 700.0, 500.0, 300.0, 250.0, 200.0, 150.0, 100.0,
        ])
        .with_height(vec![
            161.0, 798.0, 1496.0, 3086.0, 5720.0, 9370.0, 10570.0, 11970.0, 13700.0, 16230.0,
        ])
        .with_temperature(vec![
            MISSING, 1.2, 9.2, 1.6, -15.5, -43.7, -54.5, -64.1, -64.7, -58.7,
        ])
        .with_dew_point(vec![
            MISSING, 1.0, 9.2, -1.2, -21.5, -50.7, -62.5, -71.1, -71.7, -73.7,
        ])
        .with_wind_spd_dir(
            vec![
                MISSING, 70.0, 175.0, 230.0, 255.0, 265.0, 255.0, 260.0, 280.0, 295.0,
            ],
            vec![
                MISSING, 31.99, 27.99, 25.99, 25.99, 48.0, 52.99, 75.0, 77.0, 39.01,
            ],
        )
        .with_source_description("interpolation test profile".to_owned())
        .build()
        .unwrap()
}

fn standard_builder() -> crate::profile::ProfileBuilder {
    Profile::builder()
        .with_pressure(vec![
            1000.0, 925.0, 850.0, 700.0, 500.0, 400.0, 300.0, 250.0, 200.0, 150.0, 100.0, 50.0,
            30.0, 10.0,
        ])
        .with_height(vec![
            105.0, 769.0, 1487.0, 3099.0, 5750.0, 7400.0, 9430.0, 10660.0, 12090.0, 13850.0,
            16330.0, 20510.0, 23640.0, MISSING,
        ])
        .with_wind_spd_dir(
            vec![
                95.0, 155.0, 175.0, 225.0, 235.0, 240.0, 235.0, 240.0, 235.0, 250.0, 235.0, 225.0,
                235.0, MISSING,
            ],
            vec![
                13.0, 27.0, 24.01, 31.99, 44.0, 62.01, 85.01, 86.0, 94.0, 86.0, 42.0, 17.0, 42.01,
                MISSING,
            ],
        )
}

/// A complete warm season profile, the top level is missing.
pub(crate) fn standard_profile() -> Profile {
    standard_builder()
        .with_temperature(vec![
            14.2, 15.6, 13.6, 4.8, -14.7, -25.1, -38.1, -49.1, -59.1, -67.7, -64.9, -67.3, -60.7,
            MISSING,
        ])
        .with_dew_point(vec![
            14.0, 15.5, 11.5, 2.2, -17.8, -30.1, -46.1, -58.1, -67.1, -74.7, -73.9, -76.3, -72.7,
            MISSING,
        ])
        .with_source_description("standard test profile".to_owned())
        .build()
        .unwrap()
}

/// The standard profile without a temperature at the lowest level.
pub(crate) fn standard_profile_missing_surface() -> Profile {
    standard_builder()
        .with_temperature(vec![
            MISSING, 15.6, 13.6, 4.8, -14.7, -25.1, -38.1, -49.1, -59.1, -67.7, -64.9, -67.3,
            -60.7, MISSING,
        ])
        .with_dew_point(vec![
            MISSING, 15.5, 11.5, 2.2, -17.8, -30.1, -46.1, -58.1, -67.1, -74.7, -73.9, -76.3,
            -72.7, MISSING,
        ])
        .build()
        .unwrap()
}
