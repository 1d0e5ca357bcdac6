//! Formatted console reports.
//!
//! Output formats are a compatibility contract with the historical tool:
//! precision and column layout must not change.

use std::io::{self, Write};

use lcmeter_core::units::{farads_to_pf, henries_to_uh, hz_to_mhz};
use lcmeter_core::{CoilParams, ResonancePoint};

/// Write the inverse-mode result: one frequency line in MHz, 3 decimals.
pub fn write_frequency<W: Write>(mut w: W, frequency: f64) -> io::Result<()> {
    writeln!(w, "F = {:.3} MHz", hz_to_mhz(frequency))
}

/// Write extracted coil parameters.
///
/// The distributed-capacitance line is suppressed when the value is zero,
/// i.e. when only a single frequency reading was supplied.
pub fn write_coil_params<W: Write>(mut w: W, params: &CoilParams) -> io::Result<()> {
    writeln!(
        w,
        "Inductance (uH): {:.2}",
        henries_to_uh(params.inductance)
    )?;
    if params.distributed_capacitance != 0.0 {
        writeln!(
            w,
            "Distrib Capacitance (pF): {:.2}",
            farads_to_pf(params.distributed_capacitance)
        )?;
    }
    Ok(())
}

/// Write the table of resonant frequencies against trial capacitances.
pub fn write_resonance_table<W: Write>(mut w: W, table: &[ResonancePoint]) -> io::Result<()> {
    writeln!(w, "Resonant Frequencies with this coil:")?;
    writeln!(w, " C (pF)   F (MHz)")?;
    for row in table {
        writeln!(
            w,
            "{:5.0}     {:.7}",
            farads_to_pf(row.capacitance),
            hz_to_mhz(row.frequency)
        )?;
    }
    Ok(())
}
