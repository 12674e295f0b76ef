//! Physics formula calculators.
//!
//! Isolated pure functions with no shared state. These back the shell's
//! formula commands but are usable on their own; inputs are plain numbers in
//! the units named by each function.

/// Stefan–Boltzmann constant, in W·m⁻²·K⁻⁴.
pub const STEFAN_BOLTZMANN_CONSTANT: f64 = 5.670374419e-8;

/// Radiated power per unit area (W/m²) of a body at `temp_k` kelvin with the
/// given emissivity (1.0 = perfect blackbody).
pub fn stefan_boltzmann(temp_k: f64, emissivity: f64) -> f64 {
    emissivity * STEFAN_BOLTZMANN_CONSTANT * temp_k.powi(4)
}

// Distance-modulus relations: m - M = 5·log10(d) - 5, with d in parsecs.
// One solver per unknown.

/// Distance in parsecs from apparent magnitude `m` and absolute magnitude `m_abs`.
pub fn distance_from_modulus(m: f64, m_abs: f64) -> f64 {
    10f64.powf((m - m_abs + 5.0) / 5.0)
}

/// Absolute magnitude from apparent magnitude `m` and distance `d_pc` in parsecs.
pub fn absolute_magnitude(m: f64, d_pc: f64) -> f64 {
    m - 5.0 * d_pc.log10() + 5.0
}

/// Apparent magnitude from absolute magnitude `m_abs` and distance `d_pc` in parsecs.
pub fn apparent_magnitude(m_abs: f64, d_pc: f64) -> f64 {
    m_abs + 5.0 * d_pc.log10() - 5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blackbody_at_solar_surface_temperature() {
        // T = 5778 K gives the familiar ~6.3e7 W/m² solar surface flux.
        let power = stefan_boltzmann(5778.0, 1.0);
        assert!((power / 6.32e7 - 1.0).abs() < 1e-2, "got {power}");
    }

    #[test]
    fn emissivity_scales_linearly() {
        let black = stefan_boltzmann(300.0, 1.0);
        let gray = stefan_boltzmann(300.0, 0.5);
        assert!((gray / black - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ten_parsecs_means_equal_magnitudes() {
        assert!((distance_from_modulus(4.83, 4.83) - 10.0).abs() < 1e-9);
        assert!((absolute_magnitude(4.83, 10.0) - 4.83).abs() < 1e-12);
        assert!((apparent_magnitude(4.83, 10.0) - 4.83).abs() < 1e-12);
    }

    #[test]
    fn solvers_are_mutually_consistent() {
        let (m, d) = (11.2, 1850.0);
        let m_abs = absolute_magnitude(m, d);

        assert!((distance_from_modulus(m, m_abs) / d - 1.0).abs() < 1e-9);
        assert!((apparent_magnitude(m_abs, d) - m).abs() < 1e-9);
    }
}
