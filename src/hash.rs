//! Polynomial rolling hash used to place keys in the bucket table

/// Multiplier of the polynomial rolling hash
pub const HASH_BASE: u32 = 31;

/// Maps `key` to a bucket index in `[0, capacity)`.
///
/// The key is folded one UTF-16 code unit at a time (`acc = 31 * acc + unit`) and the
/// accumulator is reduced modulo `capacity` after every unit, not only at the end. The
/// resulting index therefore depends on `capacity` and has to be recomputed for every key
/// whenever the table is resized.
///
/// The accumulator is a `u128`: it stays below `capacity <= usize::MAX` between steps, so
/// `31 * acc + unit` never overflows and no wraparound ever alters the result.
///
/// An empty key hashes to 0. A `capacity` of 0 also yields 0.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    let modulus = capacity as u128;
    let base = u128::from(HASH_BASE);
    let folded =
        key.encode_utf16().fold(0_u128, |acc, unit| (base * acc + u128::from(unit)) % modulus);

    // folded < capacity, so the conversion cannot fail
    usize::try_from(folded).unwrap_or(0)
}
