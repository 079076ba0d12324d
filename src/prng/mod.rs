pub mod mt19937;

pub trait Prng {
    fn new(seed: u32) -> Self;
    /// Re-initialize every state word from `seed`, discarding all history.
    fn seed(&mut self, seed: u32);
    fn gen_rand(&mut self) -> u32;
    fn gen_rand_byte(&mut self) -> u8;
}

/// XOR a buffer against the byte stream of a freshly seeded PRNG.
///
/// Symmetric, so the same call encrypts and decrypts.
pub fn prng_cipher<T: Prng>(seed: u16, input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut prng: T = T::new(seed.into());

    for byte in input {
        let keystream_byte = prng.gen_rand_byte();
        output.push(byte ^ keystream_byte);
    }

    output
}
