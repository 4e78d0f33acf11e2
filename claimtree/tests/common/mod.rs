/// Deterministically expand an id into a 32-byte identity. A splitmix-style
/// mix keeps neighboring ids from producing near-identical leaves.
pub fn identity(id: u64) -> Vec<u8> {
    let mut state = id.wrapping_mul(0x9e37_79b9_7f4a_7c15).wrapping_add(1);
    let mut bytes = Vec::with_capacity(32);
    for _ in 0..4 {
        state ^= state >> 30;
        state = state.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        state ^= state >> 27;
        bytes.extend_from_slice(&state.to_le_bytes());
    }
    bytes
}

pub fn identities(n: usize) -> Vec<Vec<u8>> {
    (0..n as u64).map(identity).collect()
}
