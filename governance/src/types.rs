multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — the single question put to the whitelist
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// Governance name, e.g. "Vote".
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    /// Only the administrator may move either bound. No ordering
    /// between the two is enforced.
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub administrator: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// Inclusive on both ends. Always false when start > end.
    pub fn is_open_at(&self, timestamp: u64) -> bool {
        self.start_timestamp <= timestamp && timestamp <= self.end_timestamp
    }
}
