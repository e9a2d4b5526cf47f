//! Strongly typed unit markers and quantity newtypes.
//!
//! Component values are wrapped in [`Quantity`] so a resistance cannot be
//! handed to a constructor expecting a capacitance. The wrappers are erased
//! at the calculation boundary; phasors and derived figures are plain
//! scalars with unit-suffixed names.

use std::marker::PhantomData;

/// Marker trait implemented by unit tags.
pub trait Unit {
    /// Display symbol for the unit (e.g. `Ω`).
    const SYMBOL: &'static str;
}

/// Ohms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ohm;

impl Unit for Ohm {
    const SYMBOL: &'static str = "Ω";
}

/// Henries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Henry;

impl Unit for Henry {
    const SYMBOL: &'static str = "H";
}

/// Farads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Farad;

impl Unit for Farad {
    const SYMBOL: &'static str = "F";
}

/// Volts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volt;

impl Unit for Volt {
    const SYMBOL: &'static str = "V";
}

/// Amperes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ampere;

impl Unit for Ampere {
    const SYMBOL: &'static str = "A";
}

/// Value tagged with a unit marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U: Unit> {
    value: T,
    _unit: PhantomData<U>,
}

impl<T: Copy, U: Unit> Quantity<T, U> {
    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

/// Impedance magnitude in ohms.
pub type Impedance<T> = Quantity<T, Ohm>;
/// Inductance in henries.
pub type Inductance<T> = Quantity<T, Henry>;
/// Capacitance in farads.
pub type Capacitance<T> = Quantity<T, Farad>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_roundtrips_value() {
        let r: Impedance<f64> = Impedance::new(2.849);
        assert_eq!(r.value(), 2.849);
        assert_eq!(Ohm::SYMBOL, "Ω");
    }
}
