//! Wind vector conversions and layer mean winds.
use crate::{
    error::{AnalysisError, Result},
    interpolation::wind_components_at_pressure,
    profile::Profile,
};
use metfor::{HectoPascal, Knots, Quantity, WindSpdDir, WindUV};

/// Components smaller than this in magnitude are reported as exactly zero.
const TOL: f64 = 1.0e-10;

/// Convert a wind given as speed and the direction it is blowing from (degrees) into u and v
/// components.
pub fn vector_to_components<T: Quantity>(wind: WindSpdDir<T>) -> WindUV<T> {
    let WindSpdDir { speed, direction } = wind;
    let speed = speed.unpack();
    let rads = direction.to_radians();

    let snap = |x: f64| if x.abs() < TOL { 0.0 } else { x };

    WindUV {
        u: T::pack(snap(-speed * rads.sin())),
        v: T::pack(snap(-speed * rads.cos())),
    }
}

/// Convert u and v components into a speed and the direction the wind is blowing from.
///
/// The direction is always in the range [0, 360).
pub fn components_to_vector<T: Quantity>(wind: WindUV<T>) -> WindSpdDir<T> {
    let (u, v) = (wind.u.unpack(), wind.v.unpack());

    let mut direction = (-u).atan2(-v).to_degrees();
    if direction < 0.0 {
        direction += 360.0;
    }
    if direction.abs() < TOL || direction >= 360.0 {
        direction = 0.0;
    }

    WindSpdDir {
        speed: T::pack(u.hypot(v)),
        direction,
    }
}

/// Layer and sampling options for the mean wind calculations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeanWindOptions {
    /// Bottom of the layer.
    pub bottom: HectoPascal,
    /// Top of the layer.
    pub top: HectoPascal,
    /// Number of steps to divide the layer into.
    pub steps: u32,
    /// Storm motion u component, subtracted from every sample.
    pub storm_u: Knots,
    /// Storm motion v component, subtracted from every sample.
    pub storm_v: Knots,
}

impl Default for MeanWindOptions {
    fn default() -> Self {
        MeanWindOptions {
            bottom: HectoPascal(850.0),
            top: HectoPascal(250.0),
            steps: 20,
            storm_u: Knots(0.0),
            storm_v: Knots(0.0),
        }
    }
}

impl MeanWindOptions {
    /// Same sampling and storm motion, different layer.
    pub fn with_layer(self, bottom: HectoPascal, top: HectoPascal) -> Self {
        MeanWindOptions {
            bottom,
            top,
            ..self
        }
    }

    /// Same layer, with a storm motion to subtract.
    pub fn with_storm_motion(self, storm_motion: WindUV<Knots>) -> Self {
        MeanWindOptions {
            storm_u: storm_motion.u,
            storm_v: storm_motion.v,
            ..self
        }
    }
}

/// Calculate the pressure weighted mean wind through a layer.
///
/// The layer is sampled at whole hPa values from the bottom up, in increments of
/// `(bottom - top) / steps` hPa (truncated). If that increment is less than 1 hPa only the
/// bottom and top of the layer are used.
pub fn mean_wind(prof: &Profile, opts: &MeanWindOptions) -> Result<WindUV<Knots>> {
    let levels = sample_pressures(opts, 1)?;
    average_wind(prof, opts, &levels, true)
}

/// Calculate the mean wind through a layer, without pressure weighting.
///
/// Uses the same sampling as [`mean_wind`], except the sampling continues to the level just
/// above the top of the layer.
pub fn mean_wind_npw(prof: &Profile, opts: &MeanWindOptions) -> Result<WindUV<Knots>> {
    let levels = sample_pressures(opts, 0)?;
    average_wind(prof, opts, &levels, false)
}

fn sample_pressures(opts: &MeanWindOptions, top_offset: i64) -> Result<Vec<f64>> {
    let bottom = opts.bottom.unpack();
    let top = opts.top.unpack();

    if bottom <= top || top <= 0.0 {
        return Err(AnalysisError::InvalidLayer { bottom, top });
    }
    if opts.steps == 0 {
        return Err(AnalysisError::InvalidInput);
    }

    let pinc = ((bottom - top) / f64::from(opts.steps)) as i64;
    if pinc < 1 {
        return Ok(vec![bottom, top]);
    }

    let stop = top as i64 + top_offset;
    let mut p = bottom as i64;
    let mut levels = vec![];
    while p > stop {
        levels.push(p as f64);
        p -= pinc;
    }

    Ok(levels)
}

fn average_wind(
    prof: &Profile,
    opts: &MeanWindOptions,
    levels: &[f64],
    pressure_weighted: bool,
) -> Result<WindUV<Knots>> {
    let (storm_u, storm_v) = (opts.storm_u.unpack(), opts.storm_v.unpack());

    let (usum, vsum, wgt) = levels
        .iter()
        .filter_map(|&p| wind_components_at_pressure(HectoPascal(p), prof).map(|uv| (p, uv)))
        .map(|(p, WindUV { u, v })| {
            let w = if pressure_weighted { p } else { 1.0 };
            (w, u.unpack() - storm_u, v.unpack() - storm_v)
        })
        .fold((0.0, 0.0, 0.0), |(usum, vsum, wgt), (w, u, v)| {
            (usum + u * w, vsum + v * w, wgt + w)
        });

    if wgt == 0.0 {
        return Err(AnalysisError::NotEnoughData);
    }

    Ok(WindUV {
        u: Knots(usum / wgt),
        v: Knots(vsum / wgt),
    })
}
