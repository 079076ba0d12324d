use base64::{decode, encode};
use byteorder::{ByteOrder, LittleEndian};

use errors::{Error, Result};

pub fn word_to_le_bytes(word: u32) -> [u8; 4] {
    let mut bytes = [0; 4];
    LittleEndian::write_u32(&mut bytes, word);

    bytes
}

pub fn word_from_le_bytes(bytes: &[u8]) -> Result<u32> {
    if bytes.len() < 4 {
        return Err(Error::TokenTooShort);
    }

    Ok(LittleEndian::read_u32(bytes))
}

pub fn bytes_to_base64(bytes: &[u8]) -> String {
    encode(&bytes)
}

pub fn base64_to_bytes(string: &str) -> Result<Vec<u8>> {
    Ok(decode(string)?)
}
