multiversx_sc::imports!();

use crate::errors::{ACTIVE_VOTES_PENDING, INVALID_AMOUNT, TRANSFER_FAILED};

/// Stake ledger backing voting power. Stake stays locked while the account
/// has votes on unfinished proposals.
#[multiversx_sc::module]
pub trait StakingModule: crate::config::ConfigModule + crate::events::EventsModule {
    #[endpoint(stake)]
    #[payable("*")]
    fn stake(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        require!(payment.amount > 0u64, INVALID_AMOUNT);
        require!(
            payment.token_identifier == self.stake_token().get() && payment.token_nonce == 0,
            TRANSFER_FAILED
        );

        self.staked_amount(&caller)
            .update(|staked| *staked += &payment.amount);
        self.total_staked().update(|total| *total += &payment.amount);

        self.staked_event(&caller, &payment.amount);
    }

    /// Withdraws the whole stake. Fails while any vote is still active.
    #[endpoint(withdraw)]
    fn withdraw(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(
            self.active_vote_count(&caller).get() == 0,
            ACTIVE_VOTES_PENDING
        );

        let amount = self.staked_amount(&caller).get();
        require!(amount > 0u64, INVALID_AMOUNT);

        self.staked_amount(&caller).set(BigUint::zero());
        self.total_staked().update(|total| *total -= &amount);

        let token = self.stake_token().get();
        self.send().direct(&caller, &token, 0, &amount);
        self.withdrawn_event(&caller, &amount);

        amount
    }

    /// Weight a vote cast now would carry.
    #[view(votingPower)]
    fn voting_power(&self, account: &ManagedAddress) -> BigUint {
        self.staked_amount(account).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(balanceOf)]
    #[storage_mapper("stakedAmount")]
    fn staked_amount(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Votes on proposals that are not finished yet.
    #[view(activeVoteCount)]
    #[storage_mapper("activeVoteCount")]
    fn active_vote_count(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(totalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;
}
