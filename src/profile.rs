//! Data type and builder to store a single vertical sounding.

use crate::{
    error::{AnalysisError, Result},
    wind::{components_to_vector, vector_to_components},
};
use chrono::NaiveDateTime;
use itertools::{izip, Itertools};
use metfor::{Celsius, HectoPascal, Knots, Meters, Quantity, WindSpdDir, WindUV};
use optional::{none, some, Optioned};
use tracing::debug;

/// Default value used to flag missing data in the raw arrays handed to a [`ProfileBuilder`].
pub const MISSING: f64 = -9999.0;

/// One vertical sounding.
///
/// The per level variables are stored in parallel vectors of equal length, ordered from the
/// lowest level (highest pressure) to the top. Missing values are `none()`. The log of pressure
/// and the index of the surface are computed once when the profile is built, and none of the
/// data can be changed afterwards.
#[derive(Clone, Debug)]
pub struct Profile {
    // Description of the source of the sounding.
    source: Option<String>,

    // Valid time of sounding
    valid_time: Option<NaiveDateTime>,

    // Profiles
    pressure: Vec<Optioned<HectoPascal>>,
    height: Vec<Optioned<Meters>>,
    temperature: Vec<Optioned<Celsius>>,
    dew_point: Vec<Optioned<Celsius>>,
    wind_direction: Vec<Optioned<f64>>,
    wind_speed: Vec<Optioned<Knots>>,
    u_wind: Vec<Optioned<Knots>>,
    v_wind: Vec<Optioned<Knots>>,

    // Derived
    logp: Vec<Optioned<f64>>,
    sfc: usize,
}

impl Profile {
    /// Start building a new profile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_params::Profile;
    ///
    /// let prof = Profile::builder()
    ///     .with_pressure(vec![1000.0, 850.0, 700.0])
    ///     .with_height(vec![100.0, 1500.0, 3100.0])
    ///     .with_temperature(vec![20.0, 12.0, 2.0])
    ///     .with_dew_point(vec![15.0, 8.0, -5.0])
    ///     .with_wind_spd_dir(vec![180.0, 225.0, 270.0], vec![10.0, 20.0, 30.0])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(prof.len(), 3);
    /// assert_eq!(prof.surface_index(), 0);
    /// ```
    #[inline]
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Retrieve a source description for this profile.
    #[inline]
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Get the valid time of the profile, if it is known.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    /// The number of levels in the profile.
    #[inline]
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// Whether the profile has no levels. This is `false` for any profile that `build` returned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    /// Get the pressure profile.
    #[inline]
    pub fn pressure_profile(&self) -> &[Optioned<HectoPascal>] {
        &self.pressure
    }

    /// Get the geopotential height profile.
    #[inline]
    pub fn height_profile(&self) -> &[Optioned<Meters>] {
        &self.height
    }

    /// Get the temperature profile.
    #[inline]
    pub fn temperature_profile(&self) -> &[Optioned<Celsius>] {
        &self.temperature
    }

    /// Get the dew point profile.
    #[inline]
    pub fn dew_point_profile(&self) -> &[Optioned<Celsius>] {
        &self.dew_point
    }

    /// Get the wind direction profile, in degrees the wind is blowing from.
    #[inline]
    pub fn wind_direction_profile(&self) -> &[Optioned<f64>] {
        &self.wind_direction
    }

    /// Get the wind speed profile.
    #[inline]
    pub fn wind_speed_profile(&self) -> &[Optioned<Knots>] {
        &self.wind_speed
    }

    /// Get the u component of the wind.
    #[inline]
    pub fn u_wind_profile(&self) -> &[Optioned<Knots>] {
        &self.u_wind
    }

    /// Get the v component of the wind.
    #[inline]
    pub fn v_wind_profile(&self) -> &[Optioned<Knots>] {
        &self.v_wind
    }

    /// Get the base 10 logarithm of the pressure profile.
    #[inline]
    pub fn log_pressure_profile(&self) -> &[Optioned<f64>] {
        &self.logp
    }

    /// Index of the lowest level with a temperature.
    #[inline]
    pub fn surface_index(&self) -> usize {
        self.sfc
    }

    /// Pressure at the surface level.
    #[inline]
    pub fn surface_pressure(&self) -> Optioned<HectoPascal> {
        self.pressure[self.sfc]
    }

    /// Height of the surface level above mean sea level.
    #[inline]
    pub fn surface_height(&self) -> Optioned<Meters> {
        self.height[self.sfc]
    }
}

#[derive(Clone, Debug)]
enum WindInput {
    SpeedDirection { direction: Vec<f64>, speed: Vec<f64> },
    Components { u: Vec<f64>, v: Vec<f64> },
}

/// Collects the raw arrays for a [`Profile`].
///
/// Pressure (hPa), height (m MSL), temperature (C) and dew point (C) are required. Wind is
/// optional and may be given either as direction (degrees) and speed (knots) or as u and v
/// components (knots). Giving one form of the wind replaces any earlier wind.
#[derive(Clone, Debug, Default)]
pub struct ProfileBuilder {
    missing: Option<f64>,
    source: Option<String>,
    valid_time: Option<NaiveDateTime>,
    pressure: Option<Vec<f64>>,
    height: Option<Vec<f64>>,
    temperature: Option<Vec<f64>>,
    dew_point: Option<Vec<f64>>,
    wind: Option<WindInput>,
}

impl ProfileBuilder {
    /// Set the value that flags missing data in the raw arrays. Defaults to [`MISSING`].
    #[inline]
    pub fn with_missing_value(self, missing: f64) -> Self {
        Self {
            missing: Some(missing),
            ..self
        }
    }

    /// Add a source description.
    #[inline]
    pub fn with_source_description<S>(self, desc: S) -> Self
    where
        Option<String>: From<S>,
    {
        Self {
            source: Option::from(desc),
            ..self
        }
    }

    /// Set the valid time.
    #[inline]
    pub fn with_valid_time<T>(self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        Self {
            valid_time: Option::from(valid_time),
            ..self
        }
    }

    /// Builder method for the pressure profile in hPa.
    #[inline]
    pub fn with_pressure(self, pressure: Vec<f64>) -> Self {
        Self {
            pressure: Some(pressure),
            ..self
        }
    }

    /// Builder method for the geopotential height profile in meters.
    #[inline]
    pub fn with_height(self, height: Vec<f64>) -> Self {
        Self {
            height: Some(height),
            ..self
        }
    }

    /// Builder method for the temperature profile in Celsius.
    #[inline]
    pub fn with_temperature(self, temperature: Vec<f64>) -> Self {
        Self {
            temperature: Some(temperature),
            ..self
        }
    }

    /// Builder method for the dew point profile in Celsius.
    #[inline]
    pub fn with_dew_point(self, dew_point: Vec<f64>) -> Self {
        Self {
            dew_point: Some(dew_point),
            ..self
        }
    }

    /// Builder method for the wind as direction (degrees) and speed (knots).
    #[inline]
    pub fn with_wind_spd_dir(self, direction: Vec<f64>, speed: Vec<f64>) -> Self {
        Self {
            wind: Some(WindInput::SpeedDirection { direction, speed }),
            ..self
        }
    }

    /// Builder method for the wind as u and v components (knots).
    #[inline]
    pub fn with_wind_components(self, u: Vec<f64>, v: Vec<f64>) -> Self {
        Self {
            wind: Some(WindInput::Components { u, v }),
            ..self
        }
    }

    /// Validate the data and build the profile.
    ///
    /// # Errors
    ///
    /// * `MissingProfile` if pressure, height, temperature, or dew point was not supplied.
    /// * `MismatchedLengths` if the arrays are not all the same length as the pressure.
    /// * `InvalidInput` for a non-positive pressure.
    /// * `PressureNotDecreasing` if the pressure ever increases going up the profile.
    /// * `NoDataProfile` if there is no temperature anywhere, so there is no surface.
    pub fn build(self) -> Result<Profile> {
        let missing = self.missing.unwrap_or(MISSING);
        let to_opt = |val: f64| -> Optioned<f64> {
            if !val.is_finite() || val == missing {
                none()
            } else {
                some(val)
            }
        };

        let pressure = self.pressure.ok_or(AnalysisError::MissingProfile)?;
        let height = self.height.ok_or(AnalysisError::MissingProfile)?;
        let temperature = self.temperature.ok_or(AnalysisError::MissingProfile)?;
        let dew_point = self.dew_point.ok_or(AnalysisError::MissingProfile)?;

        let num_levels = pressure.len();
        if num_levels == 0 {
            return Err(AnalysisError::MissingProfile);
        }

        let check_len = |field: &'static str, vals: &[f64]| -> Result<()> {
            if vals.len() == num_levels {
                Ok(())
            } else {
                Err(AnalysisError::MismatchedLengths {
                    field,
                    expected: num_levels,
                    found: vals.len(),
                })
            }
        };
        check_len("height", &height)?;
        check_len("temperature", &temperature)?;
        check_len("dew point", &dew_point)?;

        let pressure: Vec<Optioned<HectoPascal>> = pressure
            .into_iter()
            .map(|p| to_opt(p).map_t(HectoPascal))
            .collect();

        if pressure
            .iter()
            .filter_map(|p| p.into_option())
            .any(|p| p <= HectoPascal(0.0))
        {
            return Err(AnalysisError::InvalidInput);
        }

        // Pressure must strictly decrease with height, skipping over missing values.
        if let Some((_, (i, _))) = pressure
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.into_option().map(|p| (i, p)))
            .tuple_windows::<(_, _)>()
            .find(|((_, p0), (_, p1))| p1 >= p0)
        {
            return Err(AnalysisError::PressureNotDecreasing { index: i });
        }

        let height: Vec<Optioned<Meters>> = height
            .into_iter()
            .map(|h| to_opt(h).map_t(Meters))
            .collect();
        let temperature: Vec<Optioned<Celsius>> = temperature
            .into_iter()
            .map(|t| to_opt(t).map_t(Celsius))
            .collect();
        let dew_point: Vec<Optioned<Celsius>> = dew_point
            .into_iter()
            .map(|dp| to_opt(dp).map_t(Celsius))
            .collect();

        let (wind_direction, wind_speed, u_wind, v_wind) = match self.wind {
            Some(WindInput::SpeedDirection { direction, speed }) => {
                check_len("wind direction", &direction)?;
                check_len("wind speed", &speed)?;
                build_from_spd_dir(&direction, &speed, to_opt)
            }
            Some(WindInput::Components { u, v }) => {
                check_len("u wind", &u)?;
                check_len("v wind", &v)?;
                build_from_components(&u, &v, to_opt)
            }
            None => (
                vec![none(); num_levels],
                vec![none(); num_levels],
                vec![none(); num_levels],
                vec![none(); num_levels],
            ),
        };

        let logp: Vec<Optioned<f64>> = pressure
            .iter()
            .map(|p| p.map_t(|p| p.unpack().log10()))
            .collect();

        let sfc = temperature
            .iter()
            .position(|t| t.is_some())
            .ok_or(AnalysisError::NoDataProfile)?;

        debug!(
            levels = num_levels,
            surface_index = sfc,
            source = self.source.as_deref().unwrap_or("unknown"),
            "built profile"
        );

        Ok(Profile {
            source: self.source,
            valid_time: self.valid_time,
            pressure,
            height,
            temperature,
            dew_point,
            wind_direction,
            wind_speed,
            u_wind,
            v_wind,
            logp,
            sfc,
        })
    }
}

type WindProfiles = (
    Vec<Optioned<f64>>,
    Vec<Optioned<Knots>>,
    Vec<Optioned<Knots>>,
    Vec<Optioned<Knots>>,
);

// A level keeps its wind only if both halves of the pair are present.
fn build_from_spd_dir<F>(direction: &[f64], speed: &[f64], to_opt: F) -> WindProfiles
where
    F: Fn(f64) -> Optioned<f64>,
{
    let mut wdir = Vec::with_capacity(direction.len());
    let mut wspd = Vec::with_capacity(direction.len());
    let mut u = Vec::with_capacity(direction.len());
    let mut v = Vec::with_capacity(direction.len());

    for (&d, &s) in izip!(direction, speed) {
        match (to_opt(d).into_option(), to_opt(s).into_option()) {
            (Some(d), Some(s)) => {
                let WindUV { u: uu, v: vv } = vector_to_components(WindSpdDir {
                    speed: Knots(s),
                    direction: d,
                });
                wdir.push(some(d));
                wspd.push(some(Knots(s)));
                u.push(some(uu));
                v.push(some(vv));
            }
            _ => {
                wdir.push(none());
                wspd.push(none());
                u.push(none());
                v.push(none());
            }
        }
    }

    (wdir, wspd, u, v)
}

fn build_from_components<F>(u_comp: &[f64], v_comp: &[f64], to_opt: F) -> WindProfiles
where
    F: Fn(f64) -> Optioned<f64>,
{
    let mut wdir = Vec::with_capacity(u_comp.len());
    let mut wspd = Vec::with_capacity(u_comp.len());
    let mut u = Vec::with_capacity(u_comp.len());
    let mut v = Vec::with_capacity(u_comp.len());

    for (&uu, &vv) in izip!(u_comp, v_comp) {
        match (to_opt(uu).into_option(), to_opt(vv).into_option()) {
            (Some(uu), Some(vv)) => {
                let WindSpdDir { speed, direction } = components_to_vector(WindUV {
                    u: Knots(uu),
                    v: Knots(vv),
                });
                wdir.push(some(direction));
                wspd.push(some(speed));
                u.push(some(Knots(uu)));
                v.push(some(Knots(vv)));
            }
            _ => {
                wdir.push(none());
                wspd.push(none());
                u.push(none());
                v.push(none());
            }
        }
    }

    (wdir, wspd, u, v)
}
