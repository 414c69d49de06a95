//! Choice of the player who opens the first game of a session.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::common::Player;

/// Strategy for picking the opening player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarterSeed {
    /// Parity of the current wall-clock second: even opens with Red.
    #[cfg(feature = "std")]
    ClockParity,
    Fixed(Player),
    /// Reproducible coin flip from a seeded RNG.
    Seeded(u64),
}

impl StarterSeed {
    pub fn choose(&self) -> Player {
        match *self {
            #[cfg(feature = "std")]
            StarterSeed::ClockParity => {
                let secs = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                from_parity(secs)
            }
            StarterSeed::Fixed(player) => player,
            StarterSeed::Seeded(seed) => {
                let mut rng = SmallRng::seed_from_u64(seed);
                if rng.random() {
                    Player::Red
                } else {
                    Player::Black
                }
            }
        }
    }
}

/// Even values open with Red, odd values with Black.
pub fn from_parity(value: u64) -> Player {
    if value % 2 == 0 {
        Player::Red
    } else {
        Player::Black
    }
}
