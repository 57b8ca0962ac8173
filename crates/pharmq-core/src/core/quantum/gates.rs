use nalgebra::{Matrix2, Matrix4};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

#[inline]
fn real(value: f64) -> Complex64 {
    Complex64::new(value, 0.0)
}

#[inline]
pub fn hadamard() -> Matrix2<Complex64> {
    Matrix2::new(
        real(FRAC_1_SQRT_2),
        real(FRAC_1_SQRT_2),
        real(FRAC_1_SQRT_2),
        real(-FRAC_1_SQRT_2),
    )
}

#[inline]
pub fn rotation_y(theta: f64) -> Matrix2<Complex64> {
    let (sin, cos) = (theta / 2.0).sin_cos();
    Matrix2::new(real(cos), real(-sin), real(sin), real(cos))
}

/// CX with qubit 0 as control and qubit 1 as target. Basis states are ordered
/// by index `2*b1 + b0`, i.e. qubit 0 is the least significant bit.
#[inline]
pub fn controlled_not() -> Matrix4<Complex64> {
    let o = real(1.0);
    let z = real(0.0);
    #[rustfmt::skip]
    let matrix = Matrix4::new(
        o, z, z, z,
        z, z, z, o,
        z, z, o, z,
        z, o, z, z,
    );
    matrix
}

/// Lifts a single-qubit gate onto the qubit-0 wire of the two-qubit space.
#[inline]
pub fn on_qubit_0(gate: &Matrix2<Complex64>) -> Matrix4<Complex64> {
    Matrix2::<Complex64>::identity().kronecker(gate)
}

/// Lifts a single-qubit gate onto the qubit-1 wire of the two-qubit space.
#[inline]
pub fn on_qubit_1(gate: &Matrix2<Complex64>) -> Matrix4<Complex64> {
    gate.kronecker(&Matrix2::<Complex64>::identity())
}
