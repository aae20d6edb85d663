//! Stateless thermodynamic formulas.
//!
//! Moist adiabatic processes use the Wobus function, the same polynomial fit used by the
//! Skew-T/Log-P routines of the National Weather Service. Pressures are in hPa and temperatures
//! in Celsius throughout.
use metfor::{Celsius, CelsiusDiff, HectoPascal, Quantity};
use tracing::warn;

/// Gas constant over the specific heat at constant pressure for dry air.
pub const ROCP: f64 = 0.28571426;
/// Zero Celsius in Kelvin.
pub const ZEROCNK: f64 = 273.15;
/// Ratio of the molecular weight of water vapor to dry air.
pub const EPS: f64 = 0.62197;

const MOIST_TOLERANCE: f64 = 0.1;
const MAX_MOIST_ITERATIONS: usize = 50;

/// The result of following a moist adiabat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoistLift {
    /// The temperature at the end of the lift.
    pub temperature: Celsius,
    /// Number of iterations the solver took.
    pub iterations: usize,
    /// Whether the solver met its tolerance before the iteration cap.
    pub converged: bool,
}

impl MoistLift {
    fn exact(temperature: f64) -> Self {
        MoistLift {
            temperature: Celsius(temperature),
            iterations: 0,
            converged: true,
        }
    }
}

/// Potential temperature of a parcel at `p` and `t` brought dry adiabatically to `p0`.
pub fn potential_temperature(p: HectoPascal, t: Celsius, p0: HectoPascal) -> Celsius {
    Celsius(theta(p.unpack(), t.unpack(), p0.unpack()))
}

/// The pressure where a parcel with potential temperature `theta` has the temperature `t`.
pub fn theta_level_pressure(theta: Celsius, t: Celsius) -> HectoPascal {
    HectoPascal(thalvl(theta.unpack(), t.unpack()))
}

/// The Wobus function.
///
/// The difference between the wet-bulb potential temperatures of saturated and dry air with the
/// same potential temperature `t`.
pub fn wobus(t: Celsius) -> CelsiusDiff {
    CelsiusDiff(wobf(t.unpack()))
}

/// The Wobus function evaluated at each temperature.
pub fn wobus_levels(ts: &[Celsius]) -> Vec<CelsiusDiff> {
    ts.iter().map(|&t| wobus(t)).collect()
}

/// Temperature at the lifting condensation level of a parcel with temperature `t` and dew point
/// `td`.
pub fn lcl_temperature(t: Celsius, td: Celsius) -> Celsius {
    Celsius(lcltemp(t.unpack(), td.unpack()))
}

/// Lift a parcel dry adiabatically to its lifting condensation level.
///
/// Returns the pressure and temperature of the LCL.
pub fn dry_lift(p: HectoPascal, t: Celsius, td: Celsius) -> (HectoPascal, Celsius) {
    let (p2, t2) = drylift(p.unpack(), t.unpack(), td.unpack());
    (HectoPascal(p2), Celsius(t2))
}

/// Temperature at pressure `p` of a saturated parcel with wet-bulb potential temperature
/// `thetam`.
pub fn saturated_lift(p: HectoPascal, thetam: Celsius) -> MoistLift {
    satlift(p.unpack(), thetam.unpack())
}

/// Follow the moist adiabat through a saturated parcel at `p`, `t` to `target_p`.
pub fn wet_lift(p: HectoPascal, t: Celsius, target_p: HectoPascal) -> MoistLift {
    wetlift(p.unpack(), t.unpack(), target_p.unpack())
}

/// Lift a parcel dry adiabatically to its LCL, then moist adiabatically to `target_p`.
pub fn lifted(p: HectoPascal, t: Celsius, td: Celsius, target_p: HectoPascal) -> MoistLift {
    let (p2, t2) = drylift(p.unpack(), t.unpack(), td.unpack());
    wetlift(p2, t2, target_p.unpack())
}

/// Saturation vapor pressure over liquid water.
pub fn vapor_pressure(t: Celsius) -> HectoPascal {
    HectoPascal(vappres(t.unpack()))
}

/// Saturation mixing ratio (g/kg) at pressure `p` and temperature `t`.
///
/// Pass the dew point as `t` to get the actual mixing ratio.
pub fn mixing_ratio(p: HectoPascal, t: Celsius) -> f64 {
    mixratio(p.unpack(), t.unpack())
}

/// Temperature at which air at pressure `p` is saturated with mixing ratio `w` (g/kg).
pub fn temperature_at_mixing_ratio(w: f64, p: HectoPascal) -> Celsius {
    const C1: f64 = 0.0498646455;
    const C2: f64 = 2.4082965;
    const C3: f64 = 7.07475;
    const C4: f64 = 38.9114;
    const C5: f64 = 0.0915;
    const C6: f64 = 1.2035;

    let x = (w * p.unpack() / (622.0 + w)).log10();
    let tk = 10.0f64.powf(C1 * x + C2) - C3 + C4 * (10.0f64.powf(C5 * x) - C6).powi(2);

    Celsius(tk - ZEROCNK)
}

/// Virtual temperature.
pub fn virtual_temperature(p: HectoPascal, t: Celsius, td: Celsius) -> Celsius {
    let tk = t.unpack() + ZEROCNK;
    let w = 0.001 * mixratio(p.unpack(), td.unpack());

    Celsius(tk * (1.0 + w / EPS) / (1.0 + w) - ZEROCNK)
}

/// Relative humidity in percent.
pub fn relative_humidity(p: HectoPascal, t: Celsius, td: Celsius) -> f64 {
    let p = p.unpack();
    100.0 * mixratio(p, td.unpack()) / mixratio(p, t.unpack())
}

/// Equivalent potential temperature.
///
/// The parcel is lifted to its LCL, then moist adiabatically to 100 hPa where nearly all of the
/// water has condensed out, and finally brought dry adiabatically down to 1000 hPa.
pub fn equivalent_potential_temperature(p: HectoPascal, t: Celsius, td: Celsius) -> Celsius {
    let (p2, t2) = drylift(p.unpack(), t.unpack(), td.unpack());
    let t3 = wetlift(p2, t2, 100.0).temperature.unpack();

    Celsius(theta(100.0, t3, 1000.0))
}

/// Wet bulb temperature.
pub fn wet_bulb(p: HectoPascal, t: Celsius, td: Celsius) -> Celsius {
    let p = p.unpack();
    let (p2, t2) = drylift(p, t.unpack(), td.unpack());

    wetlift(p2, t2, p).temperature
}

/*--------------------------------------------------------------------------------------------
 * Implementations on plain floats.
 *------------------------------------------------------------------------------------------*/
fn theta(p: f64, t: f64, p0: f64) -> f64 {
    (t + ZEROCNK) * (p0 / p).powf(ROCP) - ZEROCNK
}

fn thalvl(theta: f64, t: f64) -> f64 {
    1000.0 / ((theta + ZEROCNK) / (t + ZEROCNK)).powf(1.0 / ROCP)
}

fn wobf(t: f64) -> f64 {
    let t = t - 20.0;

    if t <= 0.0 {
        let npol = 1.0
            + t * (-8.841660499999999e-3
                + t * (1.4714143e-4
                    + t * (-9.671989000000001e-7 + t * (-3.2607217e-8 + t * (-3.8598073e-10)))));
        15.13 / npol.powi(4)
    } else {
        let ppol = t
            * (4.9618922e-07
                + t * (-6.1059365e-09
                    + t * (3.9401551e-11 + t * (-1.2588129e-13 + t * (1.6688280e-16)))));
        let ppol = 1.0 + t * (3.6182989e-03 + t * (-1.3603273e-05 + ppol));
        29.93 / ppol.powi(4) + 0.96 * t - 14.8
    }
}

fn lcltemp(t: f64, td: f64) -> f64 {
    let s = t - td;
    let dlt = s * (1.2185 + 0.001278 * t + s * (-0.00219 + 1.173e-5 * s - 0.0000052 * t));
    t - dlt
}

fn drylift(p: f64, t: f64, td: f64) -> (f64, f64) {
    let t2 = lcltemp(t, td);
    let p2 = thalvl(theta(p, t, 1000.0), t2);
    (p2, t2)
}

fn wetlift(p: f64, t: f64, p2: f64) -> MoistLift {
    let th = theta(p, t, 1000.0);
    let thetam = th - wobf(th) + wobf(t);
    satlift(p2, thetam)
}

fn satlift(p: f64, thetam: f64) -> MoistLift {
    satlift_capped(p, thetam, MAX_MOIST_ITERATIONS)
}

// Secant iteration for the temperature on the moist adiabat labeled `thetam` at pressure `p`.
// A NaN correction never meets the tolerance, so it ends up flagged as not converged.
fn satlift_capped(p: f64, thetam: f64, max_iterations: usize) -> MoistLift {
    if (p - 1000.0).abs() - 0.001 <= 0.0 {
        return MoistLift::exact(thetam);
    }

    let pwrp = (p / 1000.0).powf(ROCP);

    let mut t1 = (thetam + ZEROCNK) * pwrp - ZEROCNK;
    let mut e1 = wobf(t1) - wobf(thetam);
    let mut rate = 1.0;

    let mut t2 = t1;
    let mut e2 = e1;
    let mut eor = 999.0f64;
    let mut iterations = 0;

    while !(eor.abs() <= MOIST_TOLERANCE) {
        if iterations > 0 {
            let de = e2 - e1;
            if de == 0.0 || !de.is_finite() || iterations >= max_iterations {
                warn!(
                    pressure = p,
                    thetam,
                    iterations,
                    correction = eor,
                    "moist adiabat did not converge"
                );
                return MoistLift {
                    temperature: Celsius(t2 - eor),
                    iterations,
                    converged: false,
                };
            }

            rate = (t2 - t1) / de;
            t1 = t2;
            e1 = e2;
        }

        t2 = t1 - e1 * rate;
        e2 = (t2 + ZEROCNK) / pwrp - ZEROCNK;
        e2 += wobf(t2) - wobf(e2) - thetam;
        eor = e2 * rate;

        iterations += 1;
    }

    MoistLift {
        temperature: Celsius(t2 - eor),
        iterations,
        converged: true,
    }
}

fn vappres(t: f64) -> f64 {
    let pol = t * (1.1112018e-17 + t * -3.0994571e-20);
    let pol = t * (2.1874425e-13 + t * (-1.789232e-15 + pol));
    let pol = t * (4.3884180e-09 + t * (-2.988388e-11 + pol));
    let pol = t * (7.8736169e-05 + t * (-6.111796e-07 + pol));
    let pol = 0.99999683 + t * (-9.082695e-03 + pol);
    6.1078 / pol.powi(8)
}

fn mixratio(p: f64, t: f64) -> f64 {
    let x = 0.02 * (t - 12.5 + 7500.0 / p);
    let wfw = 1.0 + 0.0000045 * p + 0.0014 * x * x;
    let fwesw = wfw * vappres(t);
    621.97 * fwesw / (p - fwesw)
}
