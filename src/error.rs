//! Error types for the sounding-params crate.

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A profile that is required for this analysis is missing.
    #[error("Missing profile required for the analysis.")]
    MissingProfile,
    /// A value (surface value, index, location, etc) that is required is not available.
    #[error("Missing value required for analysis.")]
    MissingValue,
    /// Not enough data available for analysis.
    #[error("Not enough data available for analysis.")]
    NotEnoughData,
    /// There is no data available that meets the requirements.
    #[error("Profile is full of missing values, cannot do analysis.")]
    NoDataProfile,
    /// Bad or invalid input.
    #[error("Invalid input.")]
    InvalidInput,
    /// The arrays handed to the profile builder are not all the same length.
    #[error("The {field} profile has {found} levels, expected {expected}.")]
    MismatchedLengths {
        /// Name of the offending profile.
        field: &'static str,
        /// Number of levels in the pressure profile.
        expected: usize,
        /// Number of levels in the offending profile.
        found: usize,
    },
    /// Pressure did not decrease with height at the given level index.
    #[error("Pressure does not decrease with height at level {index}.")]
    PressureNotDecreasing {
        /// Index of the first level out of order.
        index: usize,
    },
    /// A layer with zero thickness or with the bottom above the top.
    #[error("Invalid layer, bottom = {bottom}, top = {top}.")]
    InvalidLayer {
        /// The bottom of the requested layer.
        bottom: f64,
        /// The top of the requested layer.
        top: f64,
    },
    /// A parcel type whose initial conditions are not defined yet.
    #[error("The {0} parcel is not yet specified.")]
    UnspecifiedParcel(&'static str),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, AnalysisError>;
