#![allow(clippy::unreadable_literal)]

extern crate base64;
extern crate byteorder;
extern crate rand;

pub mod bytes;
pub mod errors;
pub mod oracle;
pub mod prng;
pub mod recovery;
