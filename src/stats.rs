//! Occupancy statistics for the bucket table of a `ChainedHashMap`

/// Snapshot of how entries are spread over the buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets in the table
    pub capacity: usize,
    /// Number of live entries
    pub len: usize,
    /// Number of buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// `len / capacity`
    pub load_factor: f64,
}

impl ChainStats {
    /// Builds the statistics from per-bucket chain lengths, in bucket order
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn from_chain_lengths(lengths: &[usize]) -> Self {
        let capacity = lengths.len();
        let len = lengths.iter().sum();
        let occupied_buckets = lengths.iter().filter(|&&n| n > 0).count();
        let longest_chain = lengths.iter().copied().max().unwrap_or(0);
        let load_factor = if capacity == 0 { 0.0 } else { len as f64 / capacity as f64 };

        Self { capacity, len, occupied_buckets, longest_chain, load_factor }
    }

    /// Mean chain length over the occupied buckets, 0.0 for an empty table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn average_chain_len(&self) -> f64 {
        if self.occupied_buckets == 0 {
            return 0.0;
        }
        self.len as f64 / self.occupied_buckets as f64
    }
}
