// src/demos/binary.rs
use rand::Rng;

use super::DemoError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryDraw {
    pub bits: String,
    pub value: u32,
}

/// Draw `digits` random bits and read them as a base-2 number.
pub fn random_binary<R: Rng + ?Sized>(rng: &mut R, digits: u32) -> Result<BinaryDraw, DemoError> {
    if digits == 0 || digits > u32::BITS {
        return Err(DemoError::Digits(digits));
    }
    let bits: String = (0..digits)
        .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
        .collect();
    let value = u32::from_str_radix(&bits, 2).map_err(|_| DemoError::Digits(digits))?;
    Ok(BinaryDraw { bits, value })
}
