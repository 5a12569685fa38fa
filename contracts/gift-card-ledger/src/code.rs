//! Redeem code derivation.

use soroban_sdk::{Bytes, BytesN, Env};

use crate::errors::LedgerError;

/// Number of bytes in a redeem code.
pub const CODE_LEN: usize = 8;

/// Largest alphabet a code position can index into.
pub const MAX_ALPHABET_LEN: u32 = 256;

/// Derive a redeem code from `seed` over `alphabet`.
///
/// Position `i` takes `sha256(seed || i)`, read as a big-endian integer, modulo
/// the alphabet length. The same seed and alphabet always give the same code.
///
/// # Errors
///
/// * [`LedgerError::InvalidAlphabet`] - When the alphabet is empty or longer
///   than [`MAX_ALPHABET_LEN`].
pub fn generate(e: &Env, seed: &BytesN<32>, alphabet: &Bytes) -> Result<BytesN<8>, LedgerError> {
    let radix = alphabet.len();
    if radix == 0 || radix > MAX_ALPHABET_LEN {
        return Err(LedgerError::InvalidAlphabet);
    }

    let mut code = [0u8; CODE_LEN];
    for (position, slot) in code.iter_mut().enumerate() {
        let mut input = Bytes::from(seed.clone());
        input.extend_from_array(&(position as u32).to_be_bytes());
        let digest: BytesN<32> = e.crypto().sha256(&input).into();

        let index = reduce(&digest.to_array(), radix);
        *slot = alphabet.get(index).ok_or(LedgerError::InvalidAlphabet)?;
    }

    Ok(BytesN::from_array(e, &code))
}

/// Fresh seed for one generation attempt.
///
/// Mixes the invocation prng with ledger context so two attempts, or two cards
/// in the same ledger, never share a seed.
pub fn derive_seed(e: &Env, nonce: u64, attempt: u32) -> BytesN<32> {
    let ledger = e.ledger();

    let mut material = Bytes::new(e);
    material.extend_from_array(&e.prng().gen_range::<u64>(..).to_be_bytes());
    material.extend_from_array(&ledger.timestamp().to_be_bytes());
    material.extend_from_array(&ledger.sequence().to_be_bytes());
    material.append(&Bytes::from(ledger.network_id()));
    material.extend_from_array(&nonce.to_be_bytes());
    material.extend_from_array(&attempt.to_be_bytes());

    e.crypto().sha256(&material).into()
}

/// `digest mod modulus`, with `digest` read as a big-endian integer.
fn reduce(digest: &[u8; 32], modulus: u32) -> u32 {
    digest
        .iter()
        .fold(0u32, |acc, byte| ((acc << 8) | u32::from(*byte)) % modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(e: &Env, fill: u8) -> BytesN<32> {
        BytesN::from_array(e, &[fill; 32])
    }

    #[test]
    fn generate_is_deterministic() {
        let e = Env::default();
        let alphabet = Bytes::from_slice(&e, b"0123456789ABCDEF");

        let first = generate(&e, &seed(&e, 7), &alphabet).unwrap();
        let second = generate(&e, &seed(&e, 7), &alphabet).unwrap();
        assert_eq!(first, second);

        let other = generate(&e, &seed(&e, 8), &alphabet).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn generate_draws_from_alphabet() {
        let e = Env::default();
        let letters = b"XYZ";
        let alphabet = Bytes::from_slice(&e, letters);

        for fill in 0..16u8 {
            let code = generate(&e, &seed(&e, fill), &alphabet).unwrap();
            assert!(code.to_array().iter().all(|b| letters.contains(b)));
        }
    }

    #[test]
    fn generate_single_letter_alphabet() {
        let e = Env::default();
        let alphabet = Bytes::from_slice(&e, b"Q");

        let code = generate(&e, &seed(&e, 42), &alphabet).unwrap();
        assert_eq!(code.to_array(), *b"QQQQQQQQ");
    }

    #[test]
    fn generate_full_byte_alphabet() {
        let e = Env::default();
        let mut every_byte = [0u8; 256];
        for (i, b) in every_byte.iter_mut().enumerate() {
            *b = i as u8;
        }
        let alphabet = Bytes::from_slice(&e, &every_byte);

        // With the identity alphabet each byte is the low byte of its digest.
        let code = generate(&e, &seed(&e, 3), &alphabet).unwrap();
        for (position, byte) in code.to_array().iter().enumerate() {
            let mut input = Bytes::from(seed(&e, 3));
            input.extend_from_array(&(position as u32).to_be_bytes());
            let digest: BytesN<32> = e.crypto().sha256(&input).into();
            assert_eq!(*byte, digest.to_array()[31]);
        }
    }

    #[test]
    fn generate_rejects_bad_alphabets() {
        let e = Env::default();

        let empty = Bytes::new(&e);
        assert_eq!(generate(&e, &seed(&e, 1), &empty), Err(LedgerError::InvalidAlphabet));

        let too_long = Bytes::from_slice(&e, &[b'a'; 257]);
        assert_eq!(generate(&e, &seed(&e, 1), &too_long), Err(LedgerError::InvalidAlphabet));
    }

    #[test]
    fn reduce_matches_small_values() {
        let mut digest = [0u8; 32];
        digest[31] = 200;
        assert_eq!(reduce(&digest, 7), 200 % 7);

        digest[30] = 1;
        assert_eq!(reduce(&digest, 7), 456 % 7);
        assert_eq!(reduce(&digest, 256), 200);
        assert_eq!(reduce(&digest, 1), 0);
    }

    #[test]
    fn reduce_full_width() {
        // 2^256 - 1 is divisible by 255 and 3.
        let digest = [0xffu8; 32];
        assert_eq!(reduce(&digest, 255), 0);
        assert_eq!(reduce(&digest, 3), 0);
        assert_eq!(reduce(&digest, 256), 255);
    }
}
