//! LC resonance relations and the trial-capacitance table.

use std::f64::consts::PI;

use crate::units::PICO;

/// Resonant frequency in Hz of an LC pair.
///
/// `inductance` in henries, `capacitance` in farads. A negative product
/// NaNs through `sqrt`; a zero product divides to infinity. Neither case
/// is rejected.
pub fn resonant_frequency(inductance: f64, capacitance: f64) -> f64 {
    1.0 / (2.0 * PI * (inductance * capacitance).sqrt())
}

/// One row of the trial-capacitance table: a capacitance and the
/// frequency at which the coil would resonate against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonancePoint {
    /// Trial capacitance (F).
    pub capacitance: f64,
    /// Resonant frequency against that capacitance (Hz).
    pub frequency: f64,
}

/// Trial capacitances used for the resonance table: 2^i pF for i = 1..=9,
/// i.e. 2, 4, 8, ..., 512 pF, in farads.
pub fn trial_capacitances() -> impl Iterator<Item = f64> {
    (1..=9u32).map(|i| f64::from(1u32 << i) * PICO)
}

/// Resonant frequency of `inductance` against each trial capacitance.
pub fn resonance_table(inductance: f64) -> Vec<ResonancePoint> {
    trial_capacitances()
        .map(|c| ResonancePoint {
            capacitance: c,
            frequency: resonant_frequency(inductance, c),
        })
        .collect()
}
