#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod proposals;
pub mod stake_dao_proxy;
pub mod staking;
pub mod types;

use config::MAX_QUORUM_PERCENT;
use errors::{
    ALREADY_FINISHED, INCORRECT_PERIOD, INCORRECT_QUORUM, INVALID_AMOUNT, VOTING_PROCESS,
};
use types::{ExecutionStatus, ProposalAction, ProposalOutcome};

// ============================================================
// Contract
// ============================================================

/// Stake-weighted DAO. The chairperson proposes calls, stakers vote with
/// their locked stake, and anyone finalizes once the debate is over.
#[multiversx_sc::contract]
pub trait StakeDao:
    config::ConfigModule
    + staking::StakingModule
    + proposals::ProposalsModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        quorum_percent: u64,
        debating_period: u64,
        total_supply: BigUint,
        stake_token: EgldOrEsdtTokenIdentifier,
    ) {
        require!(quorum_percent <= MAX_QUORUM_PERCENT, INCORRECT_QUORUM);
        require!(debating_period > 0, INCORRECT_PERIOD);
        require!(total_supply > 0u64, INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.chairperson().set(&caller);
        self.minimum_quorum_percent().set(quorum_percent);
        self.debating_period_duration().set(debating_period);
        self.total_supply().set(&total_supply);
        self.stake_token().set(&stake_token);
        self.total_staked().set(BigUint::zero());
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: finishProposal
    // Anyone, once the deadline is reached. All bookkeeping is
    // committed before the action leaves the contract.
    // ========================================================

    #[endpoint(finishProposal)]
    fn finish_proposal(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.deadline, VOTING_PROCESS);
        require!(!proposal.finished, ALREADY_FINISHED);

        let quorum = self.quorum_threshold(proposal.quorum_percent);
        let outcome = if proposal.total_votes() < quorum {
            ProposalOutcome::QuorumNotReached
        } else if proposal.votes_for > proposal.votes_against {
            ProposalOutcome::Passed
        } else {
            ProposalOutcome::Rejected
        };
        let passed = outcome.is_passed();

        proposal.finished = true;
        proposal.outcome = outcome;
        proposal.execution = if passed {
            ExecutionStatus::Pending
        } else {
            ExecutionStatus::NotExecuted
        };
        self.proposals(proposal_id).set(&proposal);

        self.release_votes(proposal_id);
        self.proposal_finished_event(proposal_id, passed);

        if passed {
            self.execute_action(proposal_id, proposal.recipient, proposal.action);
        }
    }

    #[view(getExecutionStatus)]
    fn get_execution_status(&self, proposal_id: u64) -> ExecutionStatus {
        self.require_proposal(proposal_id).execution
    }

    // ========================================================
    // INTERNAL: unlock every voter of a finished proposal
    // ========================================================

    fn release_votes(&self, proposal_id: u64) {
        for record in self.vote_records(proposal_id).iter() {
            self.active_vote_count(&record.voter)
                .update(|count| *count -= 1);
        }
    }

    // ========================================================
    // ACTION EXECUTOR
    // Must stay the last step of finishProposal: the async call
    // ends execution, and its outcome only reaches the callback.
    // ========================================================

    fn execute_action(
        &self,
        proposal_id: u64,
        recipient: ManagedAddress,
        action: ProposalAction<Self::Api>,
    ) -> ! {
        let mut arguments = ManagedArgBuffer::new();
        for argument in action.arguments.iter() {
            arguments.push_arg_raw(argument.clone_value());
        }

        self.tx()
            .to(&recipient)
            .raw_call(action.function)
            .arguments_raw(arguments)
            .callback(self.callbacks().execution_callback(proposal_id))
            .async_call_and_exit()
    }

    #[callback]
    fn execution_callback(
        &self,
        proposal_id: u64,
        #[call_result] result: ManagedAsyncCallResult<MultiValueEncoded<ManagedBuffer>>,
    ) {
        let success = matches!(result, ManagedAsyncCallResult::Ok(_));
        let status = if success {
            ExecutionStatus::Succeeded
        } else {
            ExecutionStatus::Failed
        };

        self.proposals(proposal_id)
            .update(|proposal| proposal.execution = status);
        self.proposal_executed_event(proposal_id, success);
    }
}
