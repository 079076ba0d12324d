use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;

use bytes::{base64_to_bytes, bytes_to_base64, word_from_le_bytes, word_to_le_bytes};
use errors::Result;
use prng::mt19937::MT19937;
use prng::Prng;
use recovery;

/// Time source for token issuance.
///
/// `now` is whole seconds since the unix epoch, truncated to the generator's
/// 32-bit seed width.
pub trait Clock {
    fn now(&self) -> u32;
    fn wait(&mut self, secs: u32);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u32 {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the unix epoch");

        since_epoch.as_secs() as u32
    }

    fn wait(&mut self, secs: u32) {
        thread::sleep(Duration::from_secs(u64::from(secs)));
    }
}

/// Issues tokens by seeding a fresh generator from the current time after a
/// random delay.
///
/// Both the clock and the delay entropy are injected, so drivers can run
/// against doubles under test.
pub struct TokenOracle<C: Clock, R: Rng> {
    clock: C,
    rng: R,
}

impl<C: Clock, R: Rng> TokenOracle<C, R> {
    pub fn new(clock: C, rng: R) -> TokenOracle<C, R> {
        TokenOracle { clock, rng }
    }

    /// Wait 5-60 seconds, seed from the clock, wait again, and emit the first
    /// output as a base64 token of its 4 little-endian bytes.
    pub fn issue_token(&mut self) -> String {
        let wait = self.rng.gen_range(5, 61);
        self.clock.wait(wait);

        let mut rng = MT19937::new(self.clock.now());

        let wait = self.rng.gen_range(5, 61);
        self.clock.wait(wait);

        bytes_to_base64(&word_to_le_bytes(rng.gen_rand()))
    }
}

/// Recover the timestamp seed behind a token issued not more than `max_age`
/// seconds before `now`.
pub fn recover_token_seed(token: &str, now: u32, max_age: u32) -> Result<u32> {
    let bytes = base64_to_bytes(token)?;
    let first_output = word_from_le_bytes(&bytes)?;

    recovery::crack_time_seed(first_output, now, max_age)
}
