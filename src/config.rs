multiversx_sc::imports!();

use crate::errors::{INCORRECT_PERIOD, INCORRECT_QUORUM, NOT_CHAIRPERSON};

pub const MAX_QUORUM_PERCENT: u64 = 100;
const PERCENT_DENOMINATOR: u64 = 100;

/// Governance parameters. Only the chairperson may change them, and a
/// change only applies to proposals created afterwards.
#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    #[endpoint(setMinimumQuorum)]
    fn set_minimum_quorum(&self, percent: u64) {
        self.require_chairperson();
        require!(percent <= MAX_QUORUM_PERCENT, INCORRECT_QUORUM);

        self.minimum_quorum_percent().set(percent);
        self.minimum_quorum_changed_event(percent);
    }

    #[endpoint(setDebatingPeriod)]
    fn set_debating_period(&self, duration: u64) {
        self.require_chairperson();
        require!(duration > 0, INCORRECT_PERIOD);

        self.debating_period_duration().set(duration);
        self.debating_period_changed_event(duration);
    }

    /// Quorum in tokens for the current percent.
    #[view(minimumQuorum)]
    fn minimum_quorum(&self) -> BigUint {
        self.quorum_threshold(self.minimum_quorum_percent().get())
    }

    fn quorum_threshold(&self, percent: u64) -> BigUint {
        // floor(total_supply * percent / 100)
        let total_supply = self.total_supply().get();
        (&total_supply * percent) / PERCENT_DENOMINATOR
    }

    fn require_chairperson(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.chairperson().get(), NOT_CHAIRPERSON);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(chairperson)]
    #[storage_mapper("chairperson")]
    fn chairperson(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(minimumQuorumPercent)]
    #[storage_mapper("minimumQuorumPercent")]
    fn minimum_quorum_percent(&self) -> SingleValueMapper<u64>;

    #[view(debatingPeriodDuration)]
    #[storage_mapper("debatingPeriodDuration")]
    fn debating_period_duration(&self) -> SingleValueMapper<u64>;

    /// Quorum denominator, fixed at deploy time.
    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(stakeToken)]
    #[storage_mapper("stakeToken")]
    fn stake_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;
}
