//! Parcel definitions and lifting a parcel through a profile.
use crate::{
    error::{AnalysisError, Result},
    interpolation::{height_agl, height_at_pressure, temperature_at_pressure},
    levels::level_of_temperature,
    profile::Profile,
    thermo::{dry_lift, lifted, MoistLift},
};
use metfor::{Celsius, CelsiusDiff, HectoPascal, JpKg, Meters, Quantity};
use optional::{none, Optioned};
use tracing::debug;

/// The ways to choose the starting point of a parcel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParcelKind {
    /// The surface level of the profile.
    Surface,
    /// A surface parcel using the forecast maximum temperature.
    ForecastSurface,
    /// The most unstable parcel in the lowest levels.
    MostUnstable,
    /// A parcel with the mean properties of a mixed layer near the surface.
    MixedLayer,
    /// A parcel with the given starting point.
    UserDefined {
        /// Starting pressure.
        pressure: HectoPascal,
        /// Starting temperature.
        temperature: Celsius,
        /// Starting dew point.
        dew_point: Celsius,
    },
    /// The mean parcel of the effective inflow layer.
    EffectiveLayer,
}

impl ParcelKind {
    /// A short, human readable name for this kind of parcel.
    pub fn name(&self) -> &'static str {
        use self::ParcelKind::*;

        match self {
            Surface => "surface",
            ForecastSurface => "forecast surface",
            MostUnstable => "most unstable",
            MixedLayer => "mixed layer",
            UserDefined { .. } => "user defined",
            EffectiveLayer => "effective layer",
        }
    }
}

/// A parcel, its starting point and the results of lifting it.
///
/// Everything that comes from lifting the parcel starts out missing, and [`lift_parcel`] fills
/// in what it can. CAPE style values (buoyancy, LFC, EL, MPL, cap) are never computed here.
#[derive(Clone, Debug, PartialEq)]
pub struct Parcel {
    /// How the parcel was chosen.
    pub kind: ParcelKind,
    /// Description of the parcel.
    pub description: String,

    /// Starting pressure.
    pub pressure: HectoPascal,
    /// Starting temperature.
    pub temperature: Celsius,
    /// Starting dew point.
    pub dew_point: Celsius,

    /// Bottom of the layer the parcel was taken from.
    pub bottom: HectoPascal,
    /// Top of the layer the parcel was taken from.
    pub top: HectoPascal,

    /// Lifting condensation level pressure.
    pub lcl_pressure: Optioned<HectoPascal>,
    /// Lifting condensation level height above ground level.
    pub lcl_height: Optioned<Meters>,
    /// Level of free convection pressure.
    pub lfc_pressure: Optioned<HectoPascal>,
    /// Level of free convection height above ground level.
    pub lfc_height: Optioned<Meters>,
    /// Equilibrium level pressure.
    pub el_pressure: Optioned<HectoPascal>,
    /// Equilibrium level height above ground level.
    pub el_height: Optioned<Meters>,
    /// Maximum parcel level pressure.
    pub mpl_pressure: Optioned<HectoPascal>,
    /// Maximum parcel level height above ground level.
    pub mpl_height: Optioned<Meters>,

    /// Total positive buoyancy.
    pub positive_buoyancy: Optioned<JpKg>,
    /// Total negative buoyancy.
    pub negative_buoyancy: Optioned<JpKg>,
    /// Positive buoyancy below the freezing level.
    pub buoyancy_freezing: Optioned<JpKg>,
    /// Positive buoyancy below 3 km above ground level.
    pub buoyancy_3km: Optioned<JpKg>,
    /// Positive buoyancy below 6 km above ground level.
    pub buoyancy_6km: Optioned<JpKg>,

    /// Pressure of the environmental 0C level.
    pub p0c: Optioned<HectoPascal>,
    /// Height (m MSL) of the environmental 0C level.
    pub hght0c: Optioned<Meters>,
    /// Pressure of the environmental -10C level.
    pub pm10c: Optioned<HectoPascal>,
    /// Height (m MSL) of the environmental -10C level.
    pub hghtm10c: Optioned<Meters>,
    /// Pressure of the environmental -20C level.
    pub pm20c: Optioned<HectoPascal>,
    /// Height (m MSL) of the environmental -20C level.
    pub hghtm20c: Optioned<Meters>,
    /// Pressure of the environmental -30C level.
    pub pm30c: Optioned<HectoPascal>,
    /// Height (m MSL) of the environmental -30C level.
    pub hghtm30c: Optioned<Meters>,

    /// Lifted index at 500 hPa.
    pub li5: Optioned<CelsiusDiff>,
    /// Lifted index at 300 hPa.
    pub li3: Optioned<CelsiusDiff>,
    /// Maximum lifted index.
    pub max_li: Optioned<CelsiusDiff>,
    /// Pressure of the maximum lifted index.
    pub max_li_pressure: Optioned<HectoPascal>,
    /// Cap strength.
    pub cap: Optioned<CelsiusDiff>,
    /// Pressure of the cap.
    pub cap_pressure: Optioned<HectoPascal>,
}

impl Parcel {
    /// A parcel with the given starting point and nothing computed yet.
    pub fn new(
        kind: ParcelKind,
        pressure: HectoPascal,
        temperature: Celsius,
        dew_point: Celsius,
    ) -> Self {
        Parcel {
            kind,
            description: format!("{} parcel", kind.name()),
            pressure,
            temperature,
            dew_point,
            bottom: pressure,
            top: pressure,

            lcl_pressure: none(),
            lcl_height: none(),
            lfc_pressure: none(),
            lfc_height: none(),
            el_pressure: none(),
            el_height: none(),
            mpl_pressure: none(),
            mpl_height: none(),

            positive_buoyancy: none(),
            negative_buoyancy: none(),
            buoyancy_freezing: none(),
            buoyancy_3km: none(),
            buoyancy_6km: none(),

            p0c: none(),
            hght0c: none(),
            pm10c: none(),
            hghtm10c: none(),
            pm20c: none(),
            hghtm20c: none(),
            pm30c: none(),
            hghtm30c: none(),

            li5: none(),
            li3: none(),
            max_li: none(),
            max_li_pressure: none(),
            cap: none(),
            cap_pressure: none(),
        }
    }
}

/// Define the starting point of a parcel.
///
/// # Errors
///
/// `UnspecifiedParcel` for kinds of parcels that are not defined yet, and `MissingValue` if the
/// profile lacks the surface data a surface parcel needs.
pub fn define_parcel(prof: &Profile, kind: ParcelKind) -> Result<Parcel> {
    let parcel = match kind {
        ParcelKind::Surface => surface_parcel(prof)?,
        ParcelKind::UserDefined {
            pressure,
            temperature,
            dew_point,
        } => Parcel::new(kind, pressure, temperature, dew_point),
        ParcelKind::ForecastSurface
        | ParcelKind::MostUnstable
        | ParcelKind::MixedLayer
        | ParcelKind::EffectiveLayer => {
            return Err(AnalysisError::UnspecifiedParcel(kind.name()));
        }
    };

    debug!(
        kind = parcel.kind.name(),
        pressure = parcel.pressure.unpack(),
        temperature = parcel.temperature.unpack(),
        dew_point = parcel.dew_point.unpack(),
        "defined parcel"
    );

    Ok(parcel)
}

fn surface_parcel(prof: &Profile) -> Result<Parcel> {
    let sfc = prof.surface_index();

    let pressure = prof.pressure_profile()[sfc]
        .into_option()
        .ok_or(AnalysisError::MissingValue)?;
    let temperature = prof.temperature_profile()[sfc]
        .into_option()
        .ok_or(AnalysisError::MissingValue)?;
    let dew_point = prof.dew_point_profile()[sfc]
        .into_option()
        .ok_or(AnalysisError::MissingValue)?;

    Ok(Parcel::new(
        ParcelKind::Surface,
        pressure,
        temperature,
        dew_point,
    ))
}

/// Lift a parcel through the profile and fill in what can be computed.
///
/// That is the LCL, the pressure and height of the environmental 0, -10, -20 and -30C levels, and
/// the lifted index at 500 and 300 hPa. A lifted index is missing if the parcel starts above its
/// level, the environment has no temperature there, or the moist lift did not converge.
pub fn lift_parcel(prof: &Profile, parcel: Parcel) -> Parcel {
    let (p, t, td) = (parcel.pressure, parcel.temperature, parcel.dew_point);

    let (lcl_p, _) = dry_lift(p, t, td);
    let lcl_height = height_at_pressure(lcl_p, prof).and_then(|h| height_agl(h, prof));

    let env_level = |target: f64| -> (Optioned<HectoPascal>, Optioned<Meters>) {
        let lvl_p = level_of_temperature(prof, Celsius(target));
        let lvl_h = lvl_p.and_then(|lvl_p| height_at_pressure(lvl_p, prof));
        (lvl_p, lvl_h)
    };
    let (p0c, hght0c) = env_level(0.0);
    let (pm10c, hghtm10c) = env_level(-10.0);
    let (pm20c, hghtm20c) = env_level(-20.0);
    let (pm30c, hghtm30c) = env_level(-30.0);

    let li_at = |tgt_p: HectoPascal| -> Optioned<CelsiusDiff> {
        if tgt_p >= p {
            return none();
        }

        let env_t = temperature_at_pressure(tgt_p, prof);
        if env_t.is_none() {
            return none();
        }

        lifted_index(env_t, lifted(p, t, td, tgt_p))
    };
    let li5 = li_at(HectoPascal(500.0));
    let li3 = li_at(HectoPascal(300.0));

    Parcel {
        lcl_pressure: Optioned::from(lcl_p),
        lcl_height,
        p0c,
        hght0c,
        pm10c,
        hghtm10c,
        pm20c,
        hghtm20c,
        pm30c,
        hghtm30c,
        li5,
        li3,
        ..parcel
    }
}

fn lifted_index(env_t: Optioned<Celsius>, lift: MoistLift) -> Optioned<CelsiusDiff> {
    if !lift.converged {
        return none();
    }

    env_t.and_then(|env_t| {
        Optioned::from(CelsiusDiff(env_t.unpack() - lift.temperature.unpack()))
    })
}
