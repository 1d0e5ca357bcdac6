//! Extraction of inductance and distributed capacitance from a pair of
//! resonance readings.
//!
//! The measurement procedure: resonate the coil against a capacitor of
//! known value and note the dip frequency, then remove the capacitor and
//! note the dip again. The shift between the two readings separates the
//! coil's own distributed capacitance from the known capacitance, which
//! then fixes the inductance.

use std::f64::consts::PI;

/// A pair of resonance readings taken with a known shunt capacitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftMeasurement {
    /// Resonant frequency with the known capacitor connected (Hz).
    pub freq_with_cap: f64,
    /// Resonant frequency with the capacitor removed (Hz). Zero means the
    /// second reading was not taken; distributed capacitance is then
    /// reported as zero.
    pub freq_without_cap: f64,
    /// Value of the known shunt capacitor (F).
    pub known_capacitance: f64,
}

/// Correction offsets for parasitics of the test fixture itself.
///
/// These remain fixed at zero; the fields exist so the correction terms
/// stay named values rather than vanishing into the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrayCorrections {
    /// Stray inductance of the fixture (H), subtracted from the result.
    pub inductance: f64,
    /// Stray capacitance of the fixture (F), subtracted from the result.
    pub capacitance: f64,
}

/// Coil parameters extracted from a [`ShiftMeasurement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilParams {
    /// Coil inductance (H).
    pub inductance: f64,
    /// Distributed (self-) capacitance of the winding (F). Zero when only
    /// one frequency reading was supplied.
    pub distributed_capacitance: f64,
}

impl ShiftMeasurement {
    /// Extract inductance and distributed capacitance.
    ///
    /// With F2 the reading with the capacitor, F1 the reading without,
    /// and CT the known capacitance:
    ///
    /// ```text
    /// CD = CT / ((F1/F2)^2 - 1)        (0 when F1 was not measured)
    /// L  = 1 / ((2*pi*F2)^2 * (CD + CT))
    /// ```
    ///
    /// Equal readings make the CD denominator zero; CD goes to infinity
    /// and L collapses to zero. The division is left unguarded so the
    /// IEEE-754 result is what the caller sees.
    pub fn extract(&self, stray: StrayCorrections) -> CoilParams {
        let f2 = self.freq_with_cap;
        let f1 = self.freq_without_cap;
        let ct = self.known_capacitance;

        let cd = if f1 == 0.0 {
            0.0
        } else {
            ct / ((f1 / f2).powi(2) - 1.0)
        };

        let l = 1.0 / ((2.0 * PI * f2).powi(2) * (cd + ct)) - stray.inductance;

        CoilParams {
            inductance: l,
            distributed_capacitance: if cd == 0.0 {
                0.0
            } else {
                cd - stray.capacitance
            },
        }
    }
}
