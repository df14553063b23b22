use rand::Rng;

pub static MESSAGE_POOL: [&str; 10] = [
    "This page is taking its sweet time. Like me deciding what to watch on Netflix after scrolling for 45 minutes.",
    "Code compiling slower than my grandma's dial-up connection. And she still uses AOL.",
    "Loading... or as we call it in developer terms: 'unexpected meditation time'.",
    "The server hamsters need new running wheels. Budget cuts, you know how it is.",
    "Plot twist: The page is ready but practicing its dramatic entrance. Jazz hands incoming.",
    "If this loading time were currency, you'd be broke waiting for it.",
    "The database is currently in therapy working through its commitment issues.",
    "Loading pixels one by one. Manually. With tweezers. Please hold.",
    "If patience is a virtue, congratulations! You're practically a saint by now.",
    "Remember those '90s dial-up sounds? I'm making them right now, you just can't hear me.",
];

/// Maps a draw in `[0, 1)` onto the pool.
pub fn message_at(draw: f64) -> &'static str {
    let i = (draw * MESSAGE_POOL.len() as f64) as usize;
    MESSAGE_POOL[i.min(MESSAGE_POOL.len() - 1)]
}

pub fn pick_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    message_at(rng.random::<f64>())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, RngCore, SeedableRng};

    use super::*;

    /// Always yields the same word, so `random::<f64>()` is predictable.
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (i, b) in dst.iter_mut().enumerate() {
                *b = self.0.to_le_bytes()[i % 8];
            }
        }
    }

    #[test]
    fn selection_follows_the_draw() {
        assert_eq!(pick_message(&mut FixedRng(0)), MESSAGE_POOL[0]);
        assert_eq!(pick_message(&mut FixedRng(u64::MAX)), MESSAGE_POOL[9]);
        assert_eq!(message_at(0.45), MESSAGE_POOL[4]);
        assert_eq!(message_at(1.0), MESSAGE_POOL[9]);
    }

    #[test]
    fn seeded_source_is_repeatable() {
        let a = pick_message(&mut SmallRng::seed_from_u64(42));
        let b = pick_message(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(MESSAGE_POOL.contains(&a));
    }
}
