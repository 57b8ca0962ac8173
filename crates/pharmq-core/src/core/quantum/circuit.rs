use super::gates;
use nalgebra::Vector4;
use num_complex::Complex64;

/// Width of the measurement register.
pub const ANSATZ_QUBITS: usize = 2;

/// Number of tunable rotation angles in the ansatz.
pub const ANSATZ_ANGLES: usize = 2;

/// The fixed two-stage entangling ansatz used for ground-state estimation.
///
/// Gate sequence, applied to |00>:
/// H on both qubits, CX(q0 -> q1), RY(θ0) on q0 and RY(θ1) on q1 for the
/// variational angles, then a second CX(q0 -> q1) before measurement of both
/// qubits. Deeper variants are not modeled; the layer count carried by the
/// run configuration does not change this sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnsatzCircuit {
    angles: [f64; ANSATZ_ANGLES],
}

impl AnsatzCircuit {
    /// Builds the circuit from a candidate parameter vector. Missing angles
    /// default to zero; parameters beyond the ansatz width are ignored.
    pub fn from_parameters(params: &[f64]) -> Self {
        let mut angles = [0.0; ANSATZ_ANGLES];
        for (slot, &value) in angles.iter_mut().zip(params) {
            *slot = value;
        }
        Self { angles }
    }

    pub fn angles(&self) -> &[f64; ANSATZ_ANGLES] {
        &self.angles
    }

    /// Evolves |00> through the gate sequence.
    pub fn statevector(&self) -> Vector4<Complex64> {
        let mut state = Vector4::zeros();
        state[0] = Complex64::new(1.0, 0.0);

        let steps = [
            gates::on_qubit_0(&gates::hadamard()),
            gates::on_qubit_1(&gates::hadamard()),
            gates::controlled_not(),
            gates::on_qubit_0(&gates::rotation_y(self.angles[0])),
            gates::on_qubit_1(&gates::rotation_y(self.angles[1])),
            gates::controlled_not(),
        ];
        for step in &steps {
            state = step * state;
        }
        state
    }

    /// Measurement probabilities over the four basis states, indexed by
    /// `2*b1 + b0`.
    pub fn outcome_probabilities(&self) -> [f64; 4] {
        let state = self.statevector();
        let mut probabilities = [0.0; 4];
        for (probability, amplitude) in probabilities.iter_mut().zip(state.iter()) {
            *probability = amplitude.norm_sqr();
        }
        probabilities
    }
}
