pub mod count;
pub mod fortune;
pub mod lotto;
pub mod mbti;
pub mod password;
pub mod profit;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded RNG when the user asked for one, OS entropy otherwise.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
