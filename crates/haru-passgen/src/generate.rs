//! Password assembly from the character pool.

use rand::Rng;
use rand::rngs::StdRng;

use crate::charset::CharsetOptions;
use crate::error::PassgenResult;

/// Generate a password of `length` characters drawn uniformly from the
/// enabled classes.
pub fn generate(
    length: usize,
    options: CharsetOptions,
    rng: &mut StdRng,
) -> PassgenResult<String> {
    let pool = options.pool()?;
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        password.push(pool[rng.random_range(0..pool.len())]);
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PassgenError;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let pw = generate(16, CharsetOptions::default(), &mut rng).unwrap();
        assert_eq!(pw.chars().count(), 16);
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let pw = generate(0, CharsetOptions::default(), &mut rng).unwrap();
        assert!(pw.is_empty());
    }

    #[test]
    fn respects_single_class() {
        let opts = CharsetOptions {
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: false,
        };
        let mut rng = StdRng::seed_from_u64(2);
        let pw = generate(64, opts, &mut rng).unwrap();
        assert!(pw.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_charset_propagates() {
        let opts = CharsetOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate(8, opts, &mut rng), Err(PassgenError::EmptyCharset));
    }

    #[test]
    fn same_seed_same_password() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate(20, CharsetOptions::default(), &mut a).unwrap(),
            generate(20, CharsetOptions::default(), &mut b).unwrap()
        );
    }

    proptest! {
        #[test]
        fn every_character_comes_from_the_pool(
            seed in any::<u64>(),
            length in 0usize..64,
            uppercase in any::<bool>(),
            lowercase in any::<bool>(),
            digits in any::<bool>(),
        ) {
            let options = CharsetOptions {
                uppercase,
                lowercase,
                digits,
                symbols: true,
            };
            let pool = options.pool().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let pw = generate(length, options, &mut rng).unwrap();
            prop_assert_eq!(pw.chars().count(), length);
            prop_assert!(pw.chars().all(|c| pool.contains(&c)));
        }
    }
}
