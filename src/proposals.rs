multiversx_sc::imports!();

use crate::errors::{ALREADY_VOTED, NO_VOTING_POWER, PROPOSAL_NOT_EXIST, VOTING_FINISHED};
use crate::types::{
    ExecutionStatus, Proposal, ProposalAction, ProposalOutcome, ProposalState, VoteDirection,
    VoteRecord,
};

#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::config::ConfigModule + crate::staking::StakingModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: addProposal
    // Chairperson only. Snapshots deadline and quorum.
    // ========================================================

    #[endpoint(addProposal)]
    fn add_proposal(
        &self,
        recipient: ManagedAddress,
        description: ManagedBuffer,
        function: ManagedBuffer,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> u64 {
        self.require_chairperson();

        let proposal_id = self.proposal_count().get();
        let created_at = self.blockchain().get_block_timestamp();
        let deadline = created_at + self.debating_period_duration().get();

        let proposal = Proposal {
            id: proposal_id,
            recipient,
            action: ProposalAction {
                function,
                arguments: arguments.to_vec(),
            },
            description,
            created_at,
            deadline,
            quorum_percent: self.minimum_quorum_percent().get(),
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            finished: false,
            outcome: ProposalOutcome::Pending,
            execution: ExecutionStatus::NotExecuted,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_added_event(proposal_id, &proposal.recipient, deadline);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weighted by the caller's stake at the time of voting.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now < proposal.deadline, VOTING_FINISHED);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ALREADY_VOTED
        );

        let weight = self.staked_amount(&caller).get();
        require!(weight > 0u64, NO_VOTING_POWER);

        let direction = VoteDirection::from_support(support);
        match direction {
            VoteDirection::For => proposal.votes_for += &weight,
            VoteDirection::Against => proposal.votes_against += &weight,
        }

        self.vote_records(proposal_id).push(&VoteRecord {
            voter: caller.clone(),
            direction,
            weight: weight.clone(),
        });
        self.has_voted(proposal_id, &caller).set(true);
        self.active_vote_count(&caller).update(|count| *count += 1);
        self.proposals(proposal_id).set(&proposal);

        self.voted_event(proposal_id, &caller, support, &weight);
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), PROPOSAL_NOT_EXIST);
        mapper.get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(from.saturating_add(count), self.proposal_count().get());
        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        let now = self.blockchain().get_block_timestamp();
        self.require_proposal(proposal_id).state(now)
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(proposal_id).iter() {
            result.push(record);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Next proposal id; ids start at 0.
    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;

    #[view(hasVoted)]
    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
