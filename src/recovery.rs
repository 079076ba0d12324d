use errors::{Error, Result};
use prng::mt19937::{MT19937, B, C, L, N, S, T, U};
use prng::Prng;

/// Invert the four tempering steps, recovering the raw state word that
/// produced an observed output.
pub fn untemper(value: u32) -> u32 {
    // the u-stage mask is all ones, so the plain right-shift inverse applies
    let mut y = undo_right_xor(value, L);
    y = undo_left_mask_xor(y, T, C);
    y = undo_left_mask_xor(y, S, B);

    undo_right_xor(y, U)
}

/// Rebuild a generator from 624 consecutive outputs.
///
/// The capture must start at a twist boundary: the first output is the first
/// draw of a block (a freshly seeded generator qualifies).
pub fn clone_from_output(outputs: &[u32; N]) -> MT19937 {
    let mut state = [0_u32; N];
    for (i, output) in outputs.iter().enumerate() {
        state[i] = untemper(*output);
    }

    MT19937::from_state(state, N)
}

/// Search recent epoch seconds for the seed whose first output matches.
pub fn crack_time_seed(first_output: u32, now: u32, max_age: u32) -> Result<u32> {
    let earliest = now.saturating_sub(max_age);

    for candidate in earliest..=now {
        let mut rng = MT19937::new(candidate);
        if rng.gen_rand() == first_output {
            return Ok(candidate);
        }
    }

    Err(Error::SeedNotFound)
}

// Invert y = x ^ (x >> shift) by recovering `shift` bits per round, top down.
fn undo_right_xor(value: u32, shift: u32) -> u32 {
    let mut result = value;
    for _ in 0..32 / shift {
        result = value ^ (result >> shift);
    }

    result
}

// Invert y = x ^ ((x << shift) & mask), bottom up.
fn undo_left_mask_xor(value: u32, shift: u32, mask: u32) -> u32 {
    let mut result = value;
    for _ in 0..32 / shift {
        result = value ^ ((result << shift) & mask);
    }

    result
}
