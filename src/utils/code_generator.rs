//! Short code generation.
//!
//! Codes are drawn from a fixed 62-character alphabet using the operating
//! system CSPRNG. Predictable codes would allow enumeration of unlisted
//! links, so a seedable PRNG is not an option here.

/// Alphabet for generated short codes: upper/lowercase ASCII letters and digits.
pub const CODE_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Largest byte value usable without biasing the 62-symbol alphabet.
/// 256 / 62 rounds down to 4, so bytes in `[0, 248)` map uniformly.
const UNBIASED_LIMIT: u8 = (CODE_CHARSET.len() * (256 / CODE_CHARSET.len())) as u8;

/// Generates a random short code of the given length.
///
/// Every character is drawn uniformly and independently from
/// [`CODE_CHARSET`]. Bytes outside the unbiased range are discarded
/// (rejection sampling) rather than folded, so no symbol is favored.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code(length: usize) -> String {
    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while code.len() < length {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if code.len() == length {
                break;
            }
            if byte < UNBIASED_LIMIT {
                code.push(CODE_CHARSET[(byte % CODE_CHARSET.len() as u8) as usize] as char);
            }
        }
    }

    code
}
