use std::error;
use std::fmt::{self, Display, Formatter};
use std::result;

use base64;

#[derive(Debug)]
pub enum Error {
    SeedNotFound,
    TokenTooShort,
    Base64(base64::DecodeError),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::SeedNotFound => {
                write!(formatter, "no candidate seed reproduces the observed output")
            }
            Error::TokenTooShort => write!(formatter, "token holds fewer than 4 bytes"),
            Error::Base64(ref error) => error.fmt(formatter),
        }
    }
}

impl error::Error for Error {}

impl From<base64::DecodeError> for Error {
    fn from(error: base64::DecodeError) -> Self {
        Error::Base64(error)
    }
}

pub type Result<T> = result::Result<T, Error>;
