mod encoder;
mod galois;

pub use encoder::{ecc, generator_polynomial};
pub use galois::{GaloisField, GF256};
