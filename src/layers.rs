//! Layers of the atmosphere, and integrals, means and lapse rates through them.
use crate::{
    error::{AnalysisError, Result},
    interpolation::{
        dew_point_at_pressure, height_at_pressure, height_msl, pressure_at_height,
        temperature_at_pressure, virtual_temperature_at_pressure,
    },
    profile::Profile,
};
use itertools::{izip, Itertools};
use metfor::{Celsius, HectoPascal, Meters, Quantity};
use optional::Optioned;
use std::iter::once;

/// A layer in the atmosphere bounded by two pressure levels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    /// Pressure at the bottom of the layer.
    pub bottom: HectoPascal,
    /// Pressure at the top of the layer.
    pub top: HectoPascal,
}

impl Layer {
    /// Create a new layer, checking that the bottom is below the top.
    ///
    /// # Errors
    ///
    /// `InvalidLayer` if the layer has no thickness, is upside down, or has a non-positive top.
    pub fn new(bottom: HectoPascal, top: HectoPascal) -> Result<Self> {
        let (b, t) = (bottom.unpack(), top.unpack());

        if !(b > t && t > 0.0) || !b.is_finite() {
            return Err(AnalysisError::InvalidLayer { bottom: b, top: t });
        }

        Ok(Layer { bottom, top })
    }

    /// A layer from the surface of the profile up to `top`.
    pub fn surface_to(prof: &Profile, top: HectoPascal) -> Result<Self> {
        let sfc = prof
            .surface_pressure()
            .into_option()
            .ok_or(AnalysisError::MissingValue)?;
        Layer::new(sfc, top)
    }

    /// A layer `depth` hPa deep starting at the surface of the profile.
    pub fn from_surface(prof: &Profile, depth: HectoPascal) -> Result<Self> {
        let sfc = prof
            .surface_pressure()
            .into_option()
            .ok_or(AnalysisError::MissingValue)?;
        Layer::new(sfc, HectoPascal(sfc.unpack() - depth.unpack()))
    }

    /// The thickness of the layer in pressure.
    pub fn pressure_thickness(&self) -> HectoPascal {
        HectoPascal(self.bottom.unpack() - self.top.unpack())
    }
}

/// Upper limit on the number of samples `MeanMethod::Fast` takes through one layer.
pub const MAX_FAST_SAMPLES: u32 = 100_000;

/// How to sample the profile when integrating through a layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeanMethod {
    /// Use interpolated values at the layer bounds and every profile level between them.
    Exact,
    /// Use interpolated values every `step` hPa from the bottom of the layer, and at the top.
    Fast {
        /// The sampling interval, must be positive.
        step: HectoPascal,
    },
}

impl Default for MeanMethod {
    fn default() -> Self {
        MeanMethod::Fast {
            step: HectoPascal(1.0),
        }
    }
}

/// Integrate a field with respect to pressure through a layer.
///
/// The `field` is evaluated from the pressure, temperature and dew point at each sample, and
/// the samples are combined with the trapezoid rule. The result has the units of the field
/// times hPa.
///
/// # Errors
///
/// * `InvalidLayer` if the layer has no thickness, is upside down, or has a non-positive top.
/// * `MissingValue` if the field cannot be evaluated at the bottom or top of the layer.
/// * `InvalidInput` if a `Fast` step is not positive, or so small the layer would need more
///   than `MAX_FAST_SAMPLES` samples.
pub fn layer_integral<F>(
    prof: &Profile,
    layer: &Layer,
    method: MeanMethod,
    field: F,
) -> Result<f64>
where
    F: Fn(HectoPascal, Optioned<Celsius>, Optioned<Celsius>) -> Optioned<f64>,
{
    // The fields are public, so the layer may not have come through `Layer::new`.
    let layer = &Layer::new(layer.bottom, layer.top)?;

    let eval_at = |p: HectoPascal| {
        field(
            p,
            temperature_at_pressure(p, prof),
            dew_point_at_pressure(p, prof),
        )
    };

    let bottom_val = eval_at(layer.bottom)
        .into_option()
        .ok_or(AnalysisError::MissingValue)?;
    let top_val = eval_at(layer.top)
        .into_option()
        .ok_or(AnalysisError::MissingValue)?;

    let bottom = (layer.bottom.unpack(), bottom_val);
    let top = (layer.top.unpack(), top_val);

    let integral = match method {
        MeanMethod::Exact => {
            let (bottom_p, top_p) = (layer.bottom, layer.top);

            let inner = izip!(
                prof.pressure_profile(),
                prof.temperature_profile(),
                prof.dew_point_profile()
            )
            .filter_map(|(p, t, td)| p.into_option().map(|p| (p, *t, *td)))
            .skip_while(|&(p, _, _)| p >= bottom_p)
            .take_while(|&(p, _, _)| p > top_p)
            .filter_map(|(p, t, td)| field(p, t, td).into_option().map(|v| (p.unpack(), v)));

            trapezoid(once(bottom).chain(inner).chain(once(top)))
        }
        MeanMethod::Fast { step } => {
            let step = step.unpack();
            if !(step > 0.0) {
                return Err(AnalysisError::InvalidInput);
            }

            let (bottom_p, top_p) = (layer.bottom.unpack(), layer.top.unpack());

            let num_samples = ((bottom_p - top_p) / step).ceil();
            if !(num_samples <= f64::from(MAX_FAST_SAMPLES)) {
                return Err(AnalysisError::InvalidInput);
            }

            let inner = (1..MAX_FAST_SAMPLES)
                .map(|k: u32| bottom_p - f64::from(k) * step)
                .take_while(|&p| p > top_p)
                .filter_map(|p| eval_at(HectoPascal(p)).into_option().map(|v| (p, v)));

            trapezoid(once(bottom).chain(inner).chain(once(top)))
        }
    };

    Ok(integral)
}

/// The pressure weighted mean of a field through a layer.
///
/// This is the [`layer_integral`] divided by the pressure thickness of the layer.
pub fn layer_mean<F>(prof: &Profile, layer: &Layer, method: MeanMethod, field: F) -> Result<f64>
where
    F: Fn(HectoPascal, Optioned<Celsius>, Optioned<Celsius>) -> Optioned<f64>,
{
    let integral = layer_integral(prof, layer, method, field)?;
    Ok(integral / layer.pressure_thickness().unpack())
}

// Points are ordered from the bottom of the layer up, so dp is positive.
fn trapezoid<I>(pnts: I) -> f64
where
    I: Iterator<Item = (f64, f64)>,
{
    pnts.tuple_windows::<(_, _)>()
        .map(|((p0, v0), (p1, v1))| (v0 + v1) / 2.0 * (p0 - p1))
        .sum()
}

/// Bounds for a lapse rate calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LapseRateBounds {
    /// A layer between two pressure levels.
    Pressure {
        /// Pressure at the bottom of the layer.
        lower: HectoPascal,
        /// Pressure at the top of the layer.
        upper: HectoPascal,
    },
    /// A layer between two heights above ground level.
    HeightAgl {
        /// Height of the bottom of the layer.
        lower: Meters,
        /// Height of the top of the layer.
        upper: Meters,
    },
}

/// Lapse rate of the virtual temperature through a layer, in C/km.
///
/// Positive when the temperature decreases with height.
pub fn lapse_rate(prof: &Profile, bounds: LapseRateBounds) -> Result<f64> {
    let ((p1, z1), (p2, z2)) = match bounds {
        LapseRateBounds::Pressure { lower, upper } => {
            Layer::new(lower, upper)?;

            let z1 = height_at_pressure(lower, prof)
                .into_option()
                .ok_or(AnalysisError::MissingValue)?;
            let z2 = height_at_pressure(upper, prof)
                .into_option()
                .ok_or(AnalysisError::MissingValue)?;

            ((lower, z1), (upper, z2))
        }
        LapseRateBounds::HeightAgl { lower, upper } => {
            if !(upper > lower) {
                return Err(AnalysisError::InvalidLayer {
                    bottom: lower.unpack(),
                    top: upper.unpack(),
                });
            }

            let level = |h: Meters| -> Result<(HectoPascal, Meters)> {
                let z = height_msl(h, prof)
                    .into_option()
                    .ok_or(AnalysisError::MissingValue)?;
                let p = pressure_at_height(z, prof)
                    .into_option()
                    .ok_or(AnalysisError::MissingValue)?;
                Ok((p, z))
            };

            (level(lower)?, level(upper)?)
        }
    };

    let dz = z2.unpack() - z1.unpack();
    if dz == 0.0 {
        return Err(AnalysisError::InvalidLayer {
            bottom: z1.unpack(),
            top: z2.unpack(),
        });
    }

    let tv1 = virtual_temperature_at_pressure(p1, prof)
        .into_option()
        .ok_or(AnalysisError::MissingValue)?;
    let tv2 = virtual_temperature_at_pressure(p2, prof)
        .into_option()
        .ok_or(AnalysisError::MissingValue)?;

    Ok((tv2.unpack() - tv1.unpack()) / dz * -1000.0)
}
