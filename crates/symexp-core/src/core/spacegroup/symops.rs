use super::tables::{ALIASES, OPERATORS, SPACEGROUPS};
use nalgebra::Matrix4;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpacegroupError {
    #[error("Unknown space group: '{name}'")]
    Unknown { name: String },

    #[error("Malformed symmetry operator row '{expr}'")]
    MalformedOperator { expr: String },

    #[error("Cell transform for space group '{name}' is not invertible")]
    SingularCell { name: String },
}

/// Canonicalizes a space group name: normalizes whitespace, uppercases and
/// resolves aliases such as `"P212121"` or `"H 3"`.
pub fn canonicalize(name: &str) -> String {
    let normalized = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    if SPACEGROUPS.contains_key(normalized.as_str()) {
        return normalized;
    }
    if let Some(canonical) = ALIASES.get(normalized.as_str()) {
        return canonical.to_string();
    }

    let compact: String = normalized.chars().filter(|c| *c != ' ').collect();
    match ALIASES.get(compact.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => normalized,
    }
}

/// Returns the indices into the operator table for a space group.
pub fn operator_indices(name: &str) -> Result<&'static [u16], SpacegroupError> {
    SPACEGROUPS
        .get(canonicalize(name).as_str())
        .copied()
        .ok_or_else(|| SpacegroupError::Unknown {
            name: name.to_string(),
        })
}

/// Resolves a space group name to its symmetry operators as fractional-space
/// affine matrices. The first operator is always the identity.
pub fn resolve(name: &str) -> Result<Vec<Matrix4<f64>>, SpacegroupError> {
    operator_indices(name)?
        .iter()
        .map(|&index| operator_matrix(&OPERATORS[index as usize]))
        .collect()
}

/// Number of operators in the named space group.
pub fn operator_count(name: &str) -> Result<usize, SpacegroupError> {
    operator_indices(name).map(<[u16]>::len)
}

/// Assembles a 4×4 affine matrix from three row expressions like
/// `["-x+1/2", "y", "z+1/4"]`.
pub fn operator_matrix(rows: &[&str; 3]) -> Result<Matrix4<f64>, SpacegroupError> {
    let mut matrix = Matrix4::identity();
    for (r, expr) in rows.iter().enumerate() {
        let (coeffs, translation) = parse_row(expr)?;
        for (c, coeff) in coeffs.iter().enumerate() {
            matrix[(r, c)] = *coeff;
        }
        matrix[(r, 3)] = translation;
    }
    Ok(matrix)
}

/// Parses one row expression into axis coefficients and a translation.
fn parse_row(expr: &str) -> Result<([f64; 3], f64), SpacegroupError> {
    let malformed = || SpacegroupError::MalformedOperator {
        expr: expr.to_string(),
    };

    let mut coeffs = [0.0; 3];
    let mut translation = 0.0;
    let mut chars = expr.chars().filter(|c| !c.is_whitespace()).peekable();

    if chars.peek().is_none() {
        return Err(malformed());
    }

    while let Some(c) = chars.next() {
        let (sign, term) = match c {
            '+' => (1.0, chars.next().ok_or_else(malformed)?),
            '-' => (-1.0, chars.next().ok_or_else(malformed)?),
            other => (1.0, other),
        };

        match term.to_ascii_lowercase() {
            'x' => coeffs[0] += sign,
            'y' => coeffs[1] += sign,
            'z' => coeffs[2] += sign,
            d if d.is_ascii_digit() => {
                let mut numerator = d.to_digit(10).ok_or_else(malformed)? as f64;
                while let Some(next) = chars.peek().and_then(|n| n.to_digit(10)) {
                    numerator = numerator * 10.0 + next as f64;
                    chars.next();
                }
                let mut value = numerator;
                if chars.peek() == Some(&'/') {
                    chars.next();
                    let mut denominator = 0.0;
                    let mut digits = 0;
                    while let Some(next) = chars.peek().and_then(|n| n.to_digit(10)) {
                        denominator = denominator * 10.0 + next as f64;
                        digits += 1;
                        chars.next();
                    }
                    if digits == 0 || denominator == 0.0 {
                        return Err(malformed());
                    }
                    value /= denominator;
                }
                translation += sign * value;
            }
            _ => return Err(malformed()),
        }
    }

    Ok((coeffs, translation))
}
