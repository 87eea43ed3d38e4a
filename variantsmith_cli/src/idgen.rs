//! ** idgen module **
//! Random numeric id strings for resolver order keys and spawn pool ids.
//! Ids are digit strings rather than numbers so leading zeros survive.

use rand::Rng;

/// Length of the order key prefixed onto resolver filenames.
pub const RESOLVER_ORDER_LEN: usize = 8;

/// Length of the suffix appended to spawn pool entry ids.
pub const SPAWN_ID_LEN: usize = 6;

/// Generate a random id of `len` decimal digits.
pub fn random_numeric_id(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len).map(|_| char::from(b'0' + rng.random_range(0..10u8))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_have_requested_length_and_digits_only() {
        for len in [RESOLVER_ORDER_LEN, SPAWN_ID_LEN, 1, 20] {
            let id = random_numeric_id(len);
            assert_eq!(id.len(), len);
            assert!(id.chars().all(|ch| ch.is_ascii_digit()));
        }
    }

    #[test]
    fn zero_length_id_is_empty() {
        assert_eq!(random_numeric_id(0), "");
    }
}
