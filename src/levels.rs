//! Find significant levels in a profile.
use crate::{interpolation::linear_interp, profile::Profile};
use itertools::{izip, Itertools};
use metfor::{Celsius, HectoPascal, Quantity};
use optional::{none, some, Optioned};

/// Find the lowest pressure level where the environmental temperature is `target_t`.
///
/// A level that matches the target exactly wins. Otherwise the first pair of adjacent levels,
/// going up from the bottom, that straddles the target is interpolated linearly in log pressure.
/// Levels with a missing pressure or temperature are skipped. Returns missing if the target is
/// never reached.
pub fn level_of_temperature(prof: &Profile, target_t: Celsius) -> Optioned<HectoPascal> {
    let tgt = target_t.unpack();

    let pnts: Vec<(f64, f64)> = izip!(prof.log_pressure_profile(), prof.temperature_profile())
        .filter_map(|(lp, t)| Some((lp.into_option()?, t.into_option()?.unpack())))
        .collect();

    if let Some(&(lp, _)) = pnts.iter().find(|&&(_, t)| t == tgt) {
        return some(HectoPascal(10.0f64.powf(lp)));
    }

    pnts.iter()
        .tuple_windows::<(_, _)>()
        .find(|((_, t0), (_, t1))| (t0 - tgt) * (t1 - tgt) < 0.0)
        .map(|(&(lp0, t0), &(lp1, t1))| {
            let lp = linear_interp(tgt, t0, t1, lp0, lp1);
            some(HectoPascal(10.0f64.powf(lp)))
        })
        .unwrap_or_else(none)
}
