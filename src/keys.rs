//! Enums used as keys for values in an [`Analysis`](crate::Analysis).
use strum_macros::EnumIter;

/// Indexes calculated from the profile and not any particular parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ProfileIndex {
    /// Precipitable water (inches) from the surface to 400 hPa.
    PrecipitableWater,
    /// K-index
    K,
    /// Cross totals
    CrossTotals,
    /// Vertical totals
    VerticalTotals,
    /// Total-Totals
    TotalTotals,
    /// Forecast maximum temperature (C) from mixing the lowest 100 hPa.
    MaxTemperature,
    /// Lapse rate (C/km) from 850 to 500 hPa.
    LapseRate850To500,
    /// Lapse rate (C/km) from 700 to 500 hPa.
    LapseRate700To500,
    /// Lapse rate (C/km) from the surface to 3 km above ground level.
    LapseRateSfcTo3km,
}
