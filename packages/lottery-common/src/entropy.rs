use sha2::{Digest, Sha256};

/// Domain tag prepended to every block seed so the digest cannot collide with
/// hashes computed elsewhere from the same block data.
pub const SEED_DOMAIN: &[u8] = b"lottery-ledger/v1";

/// Prefix used when folding external randomness into a block seed.
const MIX_PREFIX: u8 = 0x01;

/// Environment values available to a draw at execution time.
///
/// None of these are secret. A block producer picks the time and the
/// transaction order, and the manager picks when to call the draw, so the
/// resulting seed is weak and can be steered by either of them.
#[derive(Debug, Clone, Copy)]
pub struct EntropyInputs<'a> {
    pub chain_id: &'a str,
    pub height: u64,
    pub time_nanos: u64,
    /// Position of the transaction inside the block (0 when unknown)
    pub tx_index: u32,
    pub sender: &'a str,
    pub round: u64,
    pub entries: u64,
}

/// Derive the block seed for a draw.
///
/// `seed = sha256( SEED_DOMAIN || chain_id || height_be || time_nanos_be || tx_index_be || sender || round_be || entries_be )`
///
/// Variable-length fields are length-prefixed (u32 big-endian) so that
/// adjacent fields cannot be shifted into one another.
pub fn block_seed(inputs: &EntropyInputs) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SEED_DOMAIN);
    hasher.update((inputs.chain_id.len() as u32).to_be_bytes());
    hasher.update(inputs.chain_id.as_bytes());
    hasher.update(inputs.height.to_be_bytes());
    hasher.update(inputs.time_nanos.to_be_bytes());
    hasher.update(inputs.tx_index.to_be_bytes());
    hasher.update((inputs.sender.len() as u32).to_be_bytes());
    hasher.update(inputs.sender.as_bytes());
    hasher.update(inputs.round.to_be_bytes());
    hasher.update(inputs.entries.to_be_bytes());
    hasher.finalize().into()
}

/// Fold external randomness (e.g. a drand beacon) into a block seed.
///
/// `mixed = sha256( 0x01 || seed || external )`
pub fn mix_seed(seed: &[u8; 32], external: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([MIX_PREFIX]);
    hasher.update(seed);
    hasher.update(external);
    hasher.finalize().into()
}

/// Map a seed onto `[0, len)`.
///
/// The first 16 bytes are read as a big-endian u128 and reduced modulo `len`.
/// Returns `None` for an empty range instead of dividing by zero.
pub fn select_index(seed: &[u8; 32], len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut head = [0u8; 16];
    head.copy_from_slice(&seed[0..16]);
    let value = u128::from_be_bytes(head);
    Some((value % len as u128) as usize)
}
