use nalgebra::{Matrix3, Matrix4};

/// Computes the fractional-to-Cartesian basis for a unit cell.
///
/// Uses the PDB convention: `a` along x, `b` in the xy plane, `c` completing
/// a right-handed frame. Lengths are in Angstroms, angles in degrees. A cell
/// with any zero parameter yields the identity.
pub fn frac_to_real(lengths: &[f64; 3], angles: &[f64; 3]) -> Matrix4<f64> {
    let [a, b, c] = *lengths;
    let [alpha, beta, gamma] = *angles;

    if a == 0.0 || b == 0.0 || c == 0.0 || alpha == 0.0 || beta == 0.0 || gamma == 0.0 {
        return Matrix4::identity();
    }

    let (ca, cb, cg) = (
        alpha.to_radians().cos(),
        beta.to_radians().cos(),
        gamma.to_radians().cos(),
    );
    let (sb, sg) = (beta.to_radians().sin(), gamma.to_radians().sin());

    // cos(alpha*) of the reciprocal cell
    let cos_alpha_star = (cb * cg - ca) / (sb * sg);
    let sin_alpha_star = (1.0 - cos_alpha_star * cos_alpha_star).max(0.0).sqrt();

    #[rustfmt::skip]
    let basis = Matrix3::new(
        a,   cg * b, cb * c,
        0.0, sg * b, -sb * cos_alpha_star * c,
        0.0, 0.0,    sb * sin_alpha_star * c,
    );
    basis.to_homogeneous()
}
