//! Indexes that are specific to a profile, but not a particular parcel analysis of that profile.
use crate::{
    error::{AnalysisError, Result},
    interpolation::{dew_point_at_pressure, temperature_at_pressure},
    layers::{layer_integral, layer_mean, Layer, MeanMethod},
    profile::Profile,
    thermo::{mixing_ratio, potential_temperature, ROCP, ZEROCNK},
};
use metfor::{Celsius, HectoPascal, Inches, Quantity};

/// Default top of the precipitable water layer.
const PWAT_TOP: HectoPascal = HectoPascal(400.0);
/// Default depth of the layer for the mean mixing ratio and potential temperature.
const MEAN_DEPTH: HectoPascal = HectoPascal(100.0);

/// Precipitable water (inches).
///
/// If `layer` is `None` the layer runs from the surface to 400 hPa.
pub fn precipitable_water(
    prof: &Profile,
    layer: Option<Layer>,
    method: MeanMethod,
) -> Result<Inches> {
    let layer = match layer {
        Some(layer) => layer,
        None => Layer::surface_to(prof, PWAT_TOP)?,
    };

    let integrated_w = layer_integral(prof, &layer, method, |p, _, td| {
        td.map_t(|td| mixing_ratio(p, td))
    })?;

    Ok(Inches(integrated_w * 0.00040173))
}

/// Mean mixing ratio (g/kg) through a layer, weighted by pressure thickness.
///
/// If `layer` is `None` the lowest 100 hPa of the profile is used.
pub fn mean_mixing_ratio(prof: &Profile, layer: Option<Layer>, method: MeanMethod) -> Result<f64> {
    let layer = match layer {
        Some(layer) => layer,
        None => Layer::from_surface(prof, MEAN_DEPTH)?,
    };

    layer_mean(prof, &layer, method, |p, _, td| {
        td.map_t(|td| mixing_ratio(p, td))
    })
}

/// Mean potential temperature through a layer, weighted by pressure thickness.
///
/// If `layer` is `None` the lowest 100 hPa of the profile is used.
pub fn mean_potential_temperature(
    prof: &Profile,
    layer: Option<Layer>,
    method: MeanMethod,
) -> Result<Celsius> {
    let layer = match layer {
        Some(layer) => layer,
        None => Layer::from_surface(prof, MEAN_DEPTH)?,
    };

    layer_mean(prof, &layer, method, |p, t, _| {
        t.map_t(|t| potential_temperature(p, t, HectoPascal(1000.0)).unpack())
    })
    .map(Celsius)
}

fn temperature_at(p: f64, prof: &Profile) -> Result<f64> {
    temperature_at_pressure(HectoPascal(p), prof)
        .into_option()
        .map(Quantity::unpack)
        .ok_or(AnalysisError::MissingValue)
}

fn dew_point_at(p: f64, prof: &Profile) -> Result<f64> {
    dew_point_at_pressure(HectoPascal(p), prof)
        .into_option()
        .map(Quantity::unpack)
        .ok_or(AnalysisError::MissingValue)
}

/// The K-index.
pub fn k_index(prof: &Profile) -> Result<f64> {
    let t850 = temperature_at(850.0, prof)?;
    let t700 = temperature_at(700.0, prof)?;
    let t500 = temperature_at(500.0, prof)?;
    let td850 = dew_point_at(850.0, prof)?;
    let td700 = dew_point_at(700.0, prof)?;

    Ok(t850 - t500 + td850 - (t700 - td700))
}

/// The cross totals index, 850 hPa dew point minus 500 hPa temperature.
pub fn cross_totals(prof: &Profile) -> Result<f64> {
    let td850 = dew_point_at(850.0, prof)?;
    let t500 = temperature_at(500.0, prof)?;

    Ok(td850 - t500)
}

/// The vertical totals index, 850 hPa temperature minus 500 hPa temperature.
pub fn vertical_totals(prof: &Profile) -> Result<f64> {
    let t850 = temperature_at(850.0, prof)?;
    let t500 = temperature_at(500.0, prof)?;

    Ok(t850 - t500)
}

/// The total totals index, the sum of the cross totals and vertical totals.
pub fn total_totals(prof: &Profile) -> Result<f64> {
    Ok(cross_totals(prof)? + vertical_totals(prof)?)
}

/// Forecast maximum temperature.
///
/// The temperature at the top of a mixed layer `mix_depth` hPa deep, brought dry adiabatically to
/// the surface and warmed 2 degrees. If `mix_depth` is `None` a 100 hPa mixed layer is used.
pub fn max_temperature(prof: &Profile, mix_depth: Option<HectoPascal>) -> Result<Celsius> {
    let sfc_p = prof
        .surface_pressure()
        .into_option()
        .ok_or(AnalysisError::MissingValue)?
        .unpack();
    let mix_p = sfc_p - mix_depth.unwrap_or(MEAN_DEPTH).unpack();

    if !(mix_p > 0.0 && mix_p < sfc_p) {
        return Err(AnalysisError::InvalidInput);
    }

    let t = temperature_at(mix_p, prof)? + ZEROCNK + 2.0;

    Ok(Celsius(t * (sfc_p / mix_p).powf(ROCP) - ZEROCNK))
}
