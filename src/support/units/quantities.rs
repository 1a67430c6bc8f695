use uom::{
    si::{
        ISQ, Quantity, SI,
        capacitance::picofarad,
        energy::picojoule,
        f64::{Capacitance, Energy, Length},
        length::millimeter,
        ratio::ratio,
    },
    typenum::{N1, N2, N3, P1, P2, P4, Z0},
};

/// Capacitance per unit length, F/m in SI.
pub type LinearCapacitance = Quantity<ISQ<N3, N1, P4, P2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Energy per unit length, J/m in SI.
pub type LinearEnergy = Quantity<ISQ<P1, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`LinearCapacitance`] from a value in picofarads per millimeter.
///
/// This is the convention of the wire capacitance tables in this crate.
#[must_use]
pub fn picofarads_per_millimeter(value: f64) -> LinearCapacitance {
    Capacitance::new::<picofarad>(value) / Length::new::<millimeter>(1.0)
}

/// Returns the value of a [`LinearEnergy`] in picojoules per millimeter.
///
/// This is the unit system expected by consuming estimation frameworks and
/// must match the pF/mm convention of the capacitance tables.
#[must_use]
pub fn picojoules_per_millimeter(energy: LinearEnergy) -> f64 {
    let unit = Energy::new::<picojoule>(1.0) / Length::new::<millimeter>(1.0);
    (energy / unit).get::<ratio>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linear_capacitance_si_value() {
        // 1 pF/mm is 1e-9 F/m.
        let cap = picofarads_per_millimeter(0.440);
        assert_relative_eq!(cap.value, 0.440e-9);
    }

    #[test]
    fn linear_energy_round_trip() {
        let energy: LinearEnergy = Energy::new::<picojoule>(0.026) / Length::new::<millimeter>(1.0);
        assert_relative_eq!(picojoules_per_millimeter(energy), 0.026);
    }
}
