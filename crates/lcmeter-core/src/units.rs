//! Conversions between SI base units and the display units of the tool.
//!
//! Frequencies are entered and reported in MHz, capacitances in pF, and
//! inductances in µH; all internal math runs in Hz, F, and H.

/// Mega scale factor (1e6).
pub const MEGA: f64 = 1e6;
/// Micro scale factor (1e-6).
pub const MICRO: f64 = 1e-6;
/// Pico scale factor (1e-12).
pub const PICO: f64 = 1e-12;

/// Convert megahertz to hertz.
pub fn mhz_to_hz(f: f64) -> f64 {
    f * MEGA
}

/// Convert hertz to megahertz.
pub fn hz_to_mhz(f: f64) -> f64 {
    f / MEGA
}

/// Convert picofarads to farads.
pub fn pf_to_farads(c: f64) -> f64 {
    c * PICO
}

/// Convert farads to picofarads.
pub fn farads_to_pf(c: f64) -> f64 {
    c / PICO
}

/// Convert microhenries to henries.
pub fn uh_to_henries(l: f64) -> f64 {
    l * MICRO
}

/// Convert henries to microhenries.
pub fn henries_to_uh(l: f64) -> f64 {
    l / MICRO
}
