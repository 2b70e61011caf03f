// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Uniform random values over closed ranges, used to populate demo data.

use rand::{distr::uniform::SampleUniform, Rng};
use std::{cmp::Ordering, fmt};

/// Errors from the range-based generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// `min > max`, or a bound was NaN.
    InvalidRange,
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange => f.write_str("invalid range: min must not exceed max"),
        }
    }
}

impl std::error::Error for RandomError {}

mod sealed {
    pub trait Sealed {}
}

/// Integer types accepted by [`random_integer`].
pub trait Integer: sealed::Sealed + SampleUniform + PartialOrd + Copy {}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Integer for $t {}
        )*
    };
}
impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

fn closed_range<T, R>(rng: &mut R, min: T, max: T) -> Result<T, RandomError>
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng,
{
    match min.partial_cmp(&max) {
        Some(Ordering::Less) => Ok(rng.random_range(min..=max)),
        Some(Ordering::Equal) => Ok(min),
        // Inverted, or NaN on either side.
        Some(Ordering::Greater) | None => Err(RandomError::InvalidRange),
    }
}

/// Uniform integer in `[min, max]`.
pub fn random_integer<T: Integer, R: Rng>(
    rng: &mut R,
    min: T,
    max: T,
) -> Result<T, RandomError> {
    closed_range(rng, min, max)
}

/// Uniform real in `[min, max]`.
#[cfg(test)]
pub fn random_real<R: Rng>(rng: &mut R, min: f64, max: f64) -> Result<f64, RandomError> {
    closed_range(rng, min, max)
}

/// `len` lowercase letters `a..=z`.
pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.random_range(b'a'..=b'z'))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_integer_stays_in_closed_range() {
        let mut rng = rng();
        for _ in 0..1000 {
            let x = random_integer(&mut rng, -3i32, 3).unwrap();
            assert!((-3..=3).contains(&x));
        }
    }

    #[test]
    fn test_integer_hits_both_bounds() {
        let mut rng = rng();
        let draws: Vec<u8> = (0..500).map(|_| random_integer(&mut rng, 0u8, 2).unwrap()).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&2));
    }

    #[test]
    fn test_equal_bounds_return_min() {
        let mut rng = rng();
        assert_eq!(random_integer(&mut rng, 5i64, 5), Ok(5));
        assert_eq!(random_real(&mut rng, 1.5, 1.5), Ok(1.5));
    }

    #[test]
    fn test_inverted_bounds_fail() {
        let mut rng = rng();
        assert_eq!(random_integer(&mut rng, 1i32, 0), Err(RandomError::InvalidRange));
        assert_eq!(random_real(&mut rng, 1.0, 0.5), Err(RandomError::InvalidRange));
        assert_eq!(random_real(&mut rng, f64::NAN, 1.0), Err(RandomError::InvalidRange));
        assert_eq!(
            RandomError::InvalidRange.to_string(),
            "invalid range: min must not exceed max"
        );
    }

    #[test]
    fn test_real_stays_in_closed_range() {
        let mut rng = rng();
        for _ in 0..1000 {
            let x = random_real(&mut rng, -1.0, 1.0).unwrap();
            assert!((-1.0..=1.0).contains(&x));
        }
    }

    #[test]
    fn test_every_integer_type_samples() {
        let mut rng = rng();
        assert!((1..=9).contains(&random_integer(&mut rng, 1i8, 9).unwrap()));
        assert!((1..=9).contains(&random_integer(&mut rng, 1i16, 9).unwrap()));
        assert!((1..=9).contains(&random_integer(&mut rng, 1i32, 9).unwrap()));
        assert!((1..=9).contains(&random_integer(&mut rng, 1i64, 9).unwrap()));
        assert!((1..=9).contains(&random_integer(&mut rng, 1u8, 9).unwrap()));
        assert!((1..=9).contains(&random_integer(&mut rng, 1u16, 9).unwrap()));
        assert!((1..=9).contains(&random_integer(&mut rng, 1u32, 9).unwrap()));
        assert!((1..=9).contains(&random_integer(&mut rng, 1u64, 9).unwrap()));
        assert!((1..=9).contains(&random_integer(&mut rng, 1usize, 9).unwrap()));
    }

    #[test]
    fn test_string_is_lowercase_of_requested_length() {
        let mut rng = rng();
        for len in [0, 1, 9, 64] {
            let s = random_string(&mut rng, len);
            assert_eq!(s.len(), len);
            assert!(s.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }
}
