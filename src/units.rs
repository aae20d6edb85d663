//! Unit conversions.
use metfor::{Celsius, Fahrenheit, Feet, Kelvin, Knots, Meters, MetersPSec, MilesPHour};

/// Celsius to Fahrenheit.
pub fn ctof(t: Celsius) -> Fahrenheit {
    Fahrenheit::from(t)
}

/// Fahrenheit to Celsius.
pub fn ftoc(t: Fahrenheit) -> Celsius {
    Celsius::from(t)
}

/// Celsius to Kelvin.
pub fn ctok(t: Celsius) -> Kelvin {
    Kelvin::from(t)
}

/// Kelvin to Celsius.
pub fn ktoc(t: Kelvin) -> Celsius {
    Celsius::from(t)
}

/// Fahrenheit to Kelvin.
///
/// Goes through Celsius, the direct `metfor` conversion between these two is offset.
pub fn ftok(t: Fahrenheit) -> Kelvin {
    ctok(ftoc(t))
}

/// Kelvin to Fahrenheit.
///
/// Goes through Celsius, the direct `metfor` conversion between these two is offset.
pub fn ktof(t: Kelvin) -> Fahrenheit {
    ctof(ktoc(t))
}

/// Meters per second to knots.
pub fn ms2kts(spd: MetersPSec) -> Knots {
    Knots::from(spd)
}

/// Knots to meters per second.
pub fn kts2ms(spd: Knots) -> MetersPSec {
    MetersPSec::from(spd)
}

/// Meters per second to miles per hour.
pub fn ms2mph(spd: MetersPSec) -> MilesPHour {
    MilesPHour::from(spd)
}

/// Miles per hour to meters per second.
pub fn mph2ms(spd: MilesPHour) -> MetersPSec {
    MetersPSec::from(spd)
}

/// Miles per hour to knots.
pub fn mph2kts(spd: MilesPHour) -> Knots {
    Knots::from(spd)
}

/// Knots to miles per hour.
pub fn kts2mph(spd: Knots) -> MilesPHour {
    MilesPHour::from(spd)
}

/// Meters to feet.
pub fn m2ft(z: Meters) -> Feet {
    Feet::from(z)
}

/// Feet to meters.
pub fn ft2m(z: Feet) -> Meters {
    Meters::from(z)
}
