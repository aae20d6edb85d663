//! Data type and methods for building and describing an analysis.
//!
//! Not every possible analysis is in this data.
use crate::{
    error::Result,
    indexes::{
        cross_totals, k_index, max_temperature, precipitable_water, total_totals, vertical_totals,
    },
    keys::ProfileIndex,
    layers::{lapse_rate, LapseRateBounds, MeanMethod},
    parcel::{define_parcel, lift_parcel, Parcel, ParcelKind},
    profile::Profile,
    wind::{mean_wind, MeanWindOptions},
};
use metfor::{HectoPascal, Knots, Meters, Quantity, WindUV};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Convenient package for commonly requested analysis values.
#[derive(Debug, Clone)]
pub struct Analysis {
    // Profile used to make the analysis
    profile: Profile,

    // Profile specific indexes
    profile_indexes: HashMap<ProfileIndex, f64>,

    // Parcel analysis
    surface: Option<Parcel>,

    // Pressure weighted 850-250 hPa mean wind
    mean_wind: Option<WindUV<Knots>>,
}

impl Analysis {
    /// Create a new `Analysis`.
    pub fn new(profile: Profile) -> Self {
        Analysis {
            profile,
            profile_indexes: HashMap::new(),
            surface: None,
            mean_wind: None,
        }
    }

    /// Set a value in the analysis
    pub fn with_profile_index<T>(mut self, var: ProfileIndex, value: T) -> Self
    where
        Option<f64>: From<T>,
    {
        let opt: Option<f64> = Option::from(value);

        match opt {
            Some(val) => self.profile_indexes.insert(var, val),
            None => self.profile_indexes.remove(&var),
        };

        self
    }

    /// Method to retrieve value from analysis.
    pub fn get_profile_index(&self, var: ProfileIndex) -> Option<f64> {
        self.profile_indexes.get(&var).copied()
    }

    /// Set the surface parcel analysis.
    pub fn with_surface_parcel_analysis<T>(self, anal: T) -> Self
    where
        Option<Parcel>: From<T>,
    {
        let surface = Option::from(anal);
        Analysis { surface, ..self }
    }

    /// Get the surface parcel analysis
    pub fn get_surface_parcel_analysis(&self) -> Option<&Parcel> {
        self.surface.as_ref()
    }

    /// Set the mean wind.
    pub fn with_mean_wind<T>(self, wind: T) -> Self
    where
        Option<WindUV<Knots>>: From<T>,
    {
        let mean_wind = Option::from(wind);
        Analysis { mean_wind, ..self }
    }

    /// Get the pressure weighted 850 to 250 hPa mean wind.
    pub fn get_mean_wind(&self) -> Option<WindUV<Knots>> {
        self.mean_wind
    }

    /// Get a reference to the profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Analyze the profile to get as much information as you can.
    ///
    /// Values that were already set are kept, anything that cannot be computed is left missing.
    pub fn fill_in_missing_analysis(mut self) -> Self {
        for var in ProfileIndex::iter() {
            if self.profile_indexes.contains_key(&var) {
                continue;
            }

            if let Ok(val) = compute_profile_index(&self.profile, var) {
                self.profile_indexes.insert(var, val);
            }
        }

        if self.surface.is_none() {
            self.surface = define_parcel(&self.profile, ParcelKind::Surface)
                .ok()
                .map(|pcl| lift_parcel(&self.profile, pcl));
        }

        if self.mean_wind.is_none() {
            self.mean_wind = mean_wind(&self.profile, &MeanWindOptions::default()).ok();
        }

        self
    }
}

fn compute_profile_index(prof: &Profile, var: ProfileIndex) -> Result<f64> {
    use self::ProfileIndex::*;

    match var {
        PrecipitableWater => {
            precipitable_water(prof, None, MeanMethod::default()).map(Quantity::unpack)
        }
        K => k_index(prof),
        CrossTotals => cross_totals(prof),
        VerticalTotals => vertical_totals(prof),
        TotalTotals => total_totals(prof),
        MaxTemperature => max_temperature(prof, None).map(Quantity::unpack),
        LapseRate850To500 => lapse_rate(
            prof,
            LapseRateBounds::Pressure {
                lower: HectoPascal(850.0),
                upper: HectoPascal(500.0),
            },
        ),
        LapseRate700To500 => lapse_rate(
            prof,
            LapseRateBounds::Pressure {
                lower: HectoPascal(700.0),
                upper: HectoPascal(500.0),
            },
        ),
        LapseRateSfcTo3km => lapse_rate(
            prof,
            LapseRateBounds::HeightAgl {
                lower: Meters(0.0),
                upper: Meters(3000.0),
            },
        ),
    }
}
