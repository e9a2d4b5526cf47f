//! Shared numerical primitives anchored on `num-complex`.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors.
pub type CScalar = num_complex::Complex<Scalar>;

/// Magnitude of a complex phasor.
#[must_use]
pub fn magnitude(value: CScalar) -> Scalar {
    value.norm()
}

/// Phase of a complex phasor in degrees, in (-180, 180].
#[must_use]
pub fn phase_deg(value: CScalar) -> Scalar {
    value.arg().to_degrees()
}

/// Single-phase complex power `S = V · conj(I)` for RMS phasors.
///
/// Passive sign convention: inductive loads absorb positive reactive power
/// (`S.im > 0`), capacitive loads negative.
#[must_use]
pub fn complex_power(voltage: CScalar, current: CScalar) -> CScalar {
    voltage * current.conj()
}
