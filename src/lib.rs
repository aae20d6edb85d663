#![warn(missing_docs)]
//! Interpolation, thermodynamic, and parcel routines for vertical weather soundings.
//!
//! A [`Profile`] is built once from raw level data with a [`ProfileBuilder`]. Everything else in
//! the crate is a pure function over a `&Profile`:
//!
//!  - [`interpolation`] samples any field at arbitrary pressures or heights, using log-pressure
//!    as the vertical coordinate.
//!  - [`thermo`] holds the stateless formulas, including dry and moist adiabatic lifting.
//!  - [`levels`], [`layers`], [`indexes`], [`wind`] and [`parcel`] chain the two together to
//!    produce derived quantities.
//!
//! Missing data is carried explicitly with the `Optioned` type from the `optional` crate. A
//! numeric missing value sentinel only exists at the [`ProfileBuilder`] boundary.
//!
//! ```rust
//! use metfor::{Celsius, HectoPascal, Quantity};
//! use sounding_params::{interpolation, thermo, Profile};
//!
//! let prof = Profile::builder()
//!     .with_pressure(vec![1000.0, 925.0, 850.0, 700.0, 500.0])
//!     .with_height(vec![161.0, 798.0, 1496.0, 3086.0, 5720.0])
//!     .with_temperature(vec![-9999.0, 1.2, 9.2, 1.6, -15.5])
//!     .with_dew_point(vec![-9999.0, 1.0, 9.2, -1.2, -21.5])
//!     .build()
//!     .unwrap();
//!
//! let h = interpolation::height_at_pressure(HectoPascal(900.0), &prof)
//!     .into_option()
//!     .unwrap();
//! assert!((h.unpack() - 1024.17165016).abs() < 1.0e-6);
//!
//! let pcl_t = thermo::lifted(HectoPascal(950.0), Celsius(30.0), Celsius(25.0), HectoPascal(100.0));
//! assert!(pcl_t.converged);
//! ```

//
// API
//
pub use crate::{
    analysis::Analysis,
    error::{AnalysisError, Result},
    indexes::{
        cross_totals, k_index, max_temperature, mean_mixing_ratio, mean_potential_temperature,
        precipitable_water, total_totals, vertical_totals,
    },
    keys::ProfileIndex,
    layers::{
        lapse_rate, layer_integral, layer_mean, LapseRateBounds, Layer, MeanMethod, MAX_FAST_SAMPLES,
    },
    levels::level_of_temperature,
    parcel::{define_parcel, lift_parcel, Parcel, ParcelKind},
    profile::{Profile, ProfileBuilder, MISSING},
    thermo::MoistLift,
    wind::{components_to_vector, mean_wind, mean_wind_npw, vector_to_components, MeanWindOptions},
};

pub mod interpolation;
pub mod thermo;
pub mod units;

mod analysis;
mod error;
mod indexes;
mod keys;
mod layers;
mod levels;
mod parcel;
mod profile;
mod wind;

#[cfg(test)]
mod test_data;
