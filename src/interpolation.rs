//! Interpolate profile values at arbitrary pressures or heights.
//!
//! Every routine is linear in the vertical coordinate it is sampled on. Pressure queries use the
//! base 10 logarithm of pressure as that coordinate, height queries use the height. Levels where
//! either the coordinate or the value is missing are skipped, so a gap in one field never blocks
//! interpolation across it. Queries beyond the top or bottom of the profile are clamped to the
//! value at the nearest end, and if there is no valid data at all the result is missing.
//!
//! Each routine comes in a scalar form and a slice form, the slice form returns a `Vec` with one
//! result per requested level.
use crate::{profile::Profile, thermo::virtual_temperature, wind::components_to_vector};
use itertools::izip;
use metfor::{Celsius, HectoPascal, Knots, Meters, Quantity, WindSpdDir, WindUV};
use optional::{none, some, Noned, Optioned};

/// Interpolate the pressure at a height (meters above mean sea level).
pub fn pressure_at_height(tgt_height: Meters, prof: &Profile) -> Optioned<HectoPascal> {
    let pnts = izip!(prof.height_profile(), prof.log_pressure_profile())
        .filter_map(|(h, lp)| Some((h.into_option()?.unpack(), lp.into_option()?)));

    interp_clamped(tgt_height.unpack(), pnts).map_t(|lp| HectoPascal(10.0f64.powf(lp)))
}

/// Interpolate the pressure at several heights.
pub fn pressure_at_heights(tgt_heights: &[Meters], prof: &Profile) -> Vec<Optioned<HectoPascal>> {
    tgt_heights
        .iter()
        .map(|&h| pressure_at_height(h, prof))
        .collect()
}

/// Interpolate the height (meters above mean sea level) at a pressure.
pub fn height_at_pressure(tgt_p: HectoPascal, prof: &Profile) -> Optioned<Meters> {
    interp_on_log_pressure(tgt_p, prof, prof.height_profile())
}

/// Interpolate the height at several pressures.
pub fn height_at_pressures(tgt_ps: &[HectoPascal], prof: &Profile) -> Vec<Optioned<Meters>> {
    tgt_ps
        .iter()
        .map(|&p| height_at_pressure(p, prof))
        .collect()
}

/// Interpolate the temperature at a pressure.
pub fn temperature_at_pressure(tgt_p: HectoPascal, prof: &Profile) -> Optioned<Celsius> {
    interp_on_log_pressure(tgt_p, prof, prof.temperature_profile())
}

/// Interpolate the temperature at several pressures.
pub fn temperature_at_pressures(tgt_ps: &[HectoPascal], prof: &Profile) -> Vec<Optioned<Celsius>> {
    tgt_ps
        .iter()
        .map(|&p| temperature_at_pressure(p, prof))
        .collect()
}

/// Interpolate the dew point at a pressure.
pub fn dew_point_at_pressure(tgt_p: HectoPascal, prof: &Profile) -> Optioned<Celsius> {
    interp_on_log_pressure(tgt_p, prof, prof.dew_point_profile())
}

/// Interpolate the dew point at several pressures.
pub fn dew_point_at_pressures(tgt_ps: &[HectoPascal], prof: &Profile) -> Vec<Optioned<Celsius>> {
    tgt_ps
        .iter()
        .map(|&p| dew_point_at_pressure(p, prof))
        .collect()
}

/// Virtual temperature at a pressure, from the interpolated temperature and dew point.
///
/// Missing if either the temperature or the dew point is missing.
pub fn virtual_temperature_at_pressure(tgt_p: HectoPascal, prof: &Profile) -> Optioned<Celsius> {
    let t = temperature_at_pressure(tgt_p, prof);
    let td = dew_point_at_pressure(tgt_p, prof);

    match (t.into_option(), td.into_option()) {
        (Some(t), Some(td)) => some(virtual_temperature(tgt_p, t, td)),
        _ => none(),
    }
}

/// Virtual temperature at several pressures.
pub fn virtual_temperature_at_pressures(
    tgt_ps: &[HectoPascal],
    prof: &Profile,
) -> Vec<Optioned<Celsius>> {
    tgt_ps
        .iter()
        .map(|&p| virtual_temperature_at_pressure(p, prof))
        .collect()
}

/// Interpolate the u and v components of the wind at a pressure.
///
/// The components are interpolated independently of each other.
pub fn wind_components_at_pressure(tgt_p: HectoPascal, prof: &Profile) -> Option<WindUV<Knots>> {
    let u = interp_on_log_pressure(tgt_p, prof, prof.u_wind_profile()).into_option()?;
    let v = interp_on_log_pressure(tgt_p, prof, prof.v_wind_profile()).into_option()?;

    Some(WindUV { u, v })
}

/// Interpolate the wind components at several pressures.
pub fn wind_components_at_pressures(
    tgt_ps: &[HectoPascal],
    prof: &Profile,
) -> Vec<Option<WindUV<Knots>>> {
    tgt_ps
        .iter()
        .map(|&p| wind_components_at_pressure(p, prof))
        .collect()
}

/// Interpolate the wind speed and direction at a pressure.
///
/// This goes through the components, so a wind veering through north is handled correctly.
pub fn wind_vector_at_pressure(tgt_p: HectoPascal, prof: &Profile) -> Optioned<WindSpdDir<Knots>> {
    Optioned::from(wind_components_at_pressure(tgt_p, prof).map(components_to_vector))
}

/// Interpolate the wind speed and direction at several pressures.
pub fn wind_vector_at_pressures(
    tgt_ps: &[HectoPascal],
    prof: &Profile,
) -> Vec<Optioned<WindSpdDir<Knots>>> {
    tgt_ps
        .iter()
        .map(|&p| wind_vector_at_pressure(p, prof))
        .collect()
}

/// Convert a height above mean sea level to a height above the surface of the profile.
pub fn height_agl(height_msl: Meters, prof: &Profile) -> Optioned<Meters> {
    prof.surface_height()
        .map_t(|sfc| Meters(height_msl.unpack() - sfc.unpack()))
}

/// Convert several heights above mean sea level to heights above ground level.
pub fn heights_agl(heights: &[Meters], prof: &Profile) -> Vec<Optioned<Meters>> {
    heights.iter().map(|&h| height_agl(h, prof)).collect()
}

/// Convert a height above the surface of the profile to a height above mean sea level.
pub fn height_msl(height_agl: Meters, prof: &Profile) -> Optioned<Meters> {
    prof.surface_height()
        .map_t(|sfc| Meters(height_agl.unpack() + sfc.unpack()))
}

/// Convert several heights above ground level to heights above mean sea level.
pub fn heights_msl(heights: &[Meters], prof: &Profile) -> Vec<Optioned<Meters>> {
    heights.iter().map(|&h| height_msl(h, prof)).collect()
}

// Pressure decreases up the profile, so walk the levels top down to keep log(p) ascending.
fn interp_on_log_pressure<Y>(
    tgt_p: HectoPascal,
    prof: &Profile,
    vals: &[Optioned<Y>],
) -> Optioned<Y>
where
    Y: Quantity + Noned,
{
    debug_assert_eq!(prof.log_pressure_profile().len(), vals.len());

    let tgt = tgt_p.unpack();
    if tgt <= 0.0 {
        return none();
    }

    let pnts = izip!(prof.log_pressure_profile(), vals)
        .rev()
        .filter_map(|(lp, y)| Some((lp.into_option()?, y.into_option()?.unpack())));

    interp_clamped(tgt.log10(), pnts).map_t(Y::pack)
}

/// Interpolate in a sequence of `(x, y)` points ordered by ascending `x`.
///
/// Targets at or beyond either end get the value at that end. Returns missing only when there
/// are no points.
pub(crate) fn interp_clamped<I>(tgt_x: f64, pnts: I) -> Optioned<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    if tgt_x.is_nan() {
        return none();
    }

    let mut pnts = pnts.into_iter();
    let (mut x0, mut y0) = match pnts.next() {
        Some(pnt) => pnt,
        None => return none(),
    };

    if tgt_x <= x0 {
        return some(y0);
    }

    for (x1, y1) in pnts {
        if tgt_x == x1 {
            return some(y1);
        } else if tgt_x < x1 {
            return some(linear_interp(tgt_x, x0, x1, y0, y1));
        }

        x0 = x1;
        y0 = y1;
    }

    some(y0)
}

#[inline]
pub(crate) fn linear_interp(x_val: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    debug_assert!(x1 != x2);

    let run = x2 - x1;
    let rise = y2 - y1;
    let dx = x_val - x1;

    y1 + dx * (rise / run)
}
