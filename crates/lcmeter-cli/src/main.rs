//! lcmeter command-line interface.
//!
//! Extracts the inductance and distributed capacitance of an air-core
//! coil from resonant-frequency readings, following the two-reading
//! method of Covington (73 Magazine, September 1990).

use std::io;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use lcmeter_core::units::{mhz_to_hz, pf_to_farads, uh_to_henries};
use lcmeter_core::{resonance_table, resonant_frequency, ShiftMeasurement, StrayCorrections};

mod report;

/// Coil characterization from resonant-frequency readings.
///
/// Forward mode takes the dip frequency measured with the known capacitor
/// across the coil, and optionally the dip with the capacitor removed,
/// and reports inductance (plus distributed capacitance when both
/// readings are given). With -f, takes an inductance instead and reports
/// the frequency at which it resonates against the known capacitor.
#[derive(Debug, Parser)]
#[command(name = "lcmeter", version)]
struct Cli {
    /// Known capacitor value in pF (Covington's original article assumed 150)
    #[arg(
        short = 'c',
        value_name = "CAP_PF",
        default_value_t = 100.0,
        allow_negative_numbers = true
    )]
    capacitor: f64,

    /// Compute resonant frequency from an inductance in uH instead of
    /// extracting inductance from readings
    #[arg(short = 'f')]
    compute_frequency: bool,

    /// After extraction, print resonant frequencies against standard
    /// trial capacitors (forward mode only)
    #[arg(short = 'r')]
    print_table: bool,

    /// Readings in MHz: freq_with_cap [freq_without_cap]; with -f, a
    /// single inductance in uH
    #[arg(
        value_name = "VALUE",
        num_args = 1..=2,
        required = true,
        allow_negative_numbers = true
    )]
    values: Vec<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.compute_frequency && cli.values.len() != 1 {
        Cli::command()
            .error(
                ErrorKind::WrongNumberOfValues,
                "-f takes exactly one inductance value (uH)",
            )
            .exit();
    }

    let known_capacitance = pf_to_farads(cli.capacitor);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.compute_frequency {
        let inductance = uh_to_henries(cli.values[0]);
        let f = resonant_frequency(inductance, known_capacitance);
        report::write_frequency(&mut out, f)?;
        return Ok(());
    }

    let measurement = ShiftMeasurement {
        freq_with_cap: mhz_to_hz(cli.values[0]),
        freq_without_cap: cli.values.get(1).copied().map_or(0.0, mhz_to_hz),
        known_capacitance,
    };
    let params = measurement.extract(StrayCorrections::default());

    report::write_coil_params(&mut out, &params)?;
    if cli.print_table {
        report::write_resonance_table(&mut out, &resonance_table(params.inductance))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_with_override_capacitor() {
        let cli = Cli::try_parse_from(["lcmeter", "-c", "150", "0.58", "1.77"]).unwrap();
        assert_eq!(cli.capacitor, 150.0);
        assert_eq!(cli.values, vec![0.58, 1.77]);
        assert!(!cli.compute_frequency);
        assert!(!cli.print_table);
    }

    #[test]
    fn test_default_capacitor_is_100() {
        let cli = Cli::try_parse_from(["lcmeter", "0.58"]).unwrap();
        assert_eq!(cli.capacitor, 100.0);
        assert_eq!(cli.values, vec![0.58]);
    }

    #[test]
    fn test_table_flag() {
        let cli = Cli::try_parse_from(["lcmeter", "-r", "0.58", "1.77"]).unwrap();
        assert!(cli.print_table);
    }

    #[test]
    fn test_inverse_mode() {
        let cli = Cli::try_parse_from(["lcmeter", "-f", "448.09"]).unwrap();
        assert!(cli.compute_frequency);
        assert_eq!(cli.values, vec![448.09]);
    }

    #[test]
    fn test_negative_values_parse() {
        let cli = Cli::try_parse_from(["lcmeter", "-f", "-5.0"]).unwrap();
        assert_eq!(cli.values, vec![-5.0]);
    }

    #[test]
    fn test_no_positionals_is_error() {
        assert!(Cli::try_parse_from(["lcmeter"]).is_err());
    }

    #[test]
    fn test_too_many_positionals_is_error() {
        assert!(Cli::try_parse_from(["lcmeter", "0.1", "0.2", "0.3"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_error() {
        assert!(Cli::try_parse_from(["lcmeter", "-z", "0.58"]).is_err());
    }

    #[test]
    fn test_non_numeric_value_is_error() {
        assert!(Cli::try_parse_from(["lcmeter", "abc"]).is_err());
    }
}
