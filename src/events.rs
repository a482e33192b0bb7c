multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Staking ──

    #[event("staked")]
    fn staked_event(&self, #[indexed] staker: &ManagedAddress, amount: &BigUint);

    #[event("withdrawn")]
    fn withdrawn_event(&self, #[indexed] staker: &ManagedAddress, amount: &BigUint);

    // ── Proposals ──

    #[event("proposalAdded")]
    fn proposal_added_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        deadline: u64,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalFinished")]
    fn proposal_finished_event(&self, #[indexed] proposal_id: u64, #[indexed] passed: bool);

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64, #[indexed] success: bool);

    // ── Parameters ──

    #[event("minimumQuorumChanged")]
    fn minimum_quorum_changed_event(&self, #[indexed] percent: u64);

    #[event("debatingPeriodChanged")]
    fn debating_period_changed_event(&self, #[indexed] duration: u64);
}
