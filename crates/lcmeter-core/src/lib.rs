//! Resonance math for characterizing air-core coils.
//!
//! This crate provides the closed-form relations behind the `lcmeter`
//! tool: given the resonant frequency of a coil measured with and without
//! a known shunt capacitor, it extracts the coil's inductance and
//! distributed (self-) capacitance. The method follows the classic
//! two-reading technique published by Michael A. Covington N4TMI in
//! 73 Magazine, September 1990.
//!
//! All quantities are SI base units (`f64` hertz, henries, farads);
//! conversions to the display units used at the CLI (MHz, µH, pF) live in
//! [`units`]. Inputs are deliberately not validated: out-of-range values
//! (negative inductance, equal frequency readings) propagate through the
//! formulas as NaN or infinity under IEEE-754 semantics.

pub mod extraction;
pub mod resonance;
pub mod units;

pub use extraction::{CoilParams, ShiftMeasurement, StrayCorrections};
pub use resonance::{resonance_table, resonant_frequency, ResonancePoint};
