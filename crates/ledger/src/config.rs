/// Spacing of child-chain block numbers. Deposit blocks minted by the parent
/// chain take the numbers in between two child blocks.
pub const CHILD_BLOCK_INTERVAL: u64 = 1000;

/// Chain-level constants consumed by block-number arithmetic. Not part of
/// transaction semantics.
#[derive(Clone, Copy, Debug)]
pub struct ChainCfg {
    pub child_block_interval: u64,
}

impl Default for ChainCfg {
    fn default() -> Self {
        Self {
            child_block_interval: CHILD_BLOCK_INTERVAL,
        }
    }
}
