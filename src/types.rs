multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal lifecycle
// ============================================================

/// Derived from the block timestamp and the `finished` flag; never stored.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    /// Debate is running, votes are accepted.
    Open,
    /// Deadline reached, waiting for someone to call finishProposal.
    Ready,
    /// Terminal.
    Finished,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalOutcome {
    Pending,
    /// Turnout stayed below the quorum snapshotted at creation.
    QuorumNotReached,
    /// Quorum met but `votes_for <= votes_against`.
    Rejected,
    Passed,
}

impl ProposalOutcome {
    pub fn is_passed(&self) -> bool {
        *self == ProposalOutcome::Passed
    }
}

/// Result of running the action of a passed proposal. A failure is
/// recorded here and does not undo the finalization.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ExecutionStatus {
    NotExecuted,
    Pending,
    Succeeded,
    Failed,
}

// ============================================================
// Proposal — the governance record
// ============================================================

/// Opaque call the proposal performs on its recipient when it passes.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ProposalAction<M: ManagedTypeApi> {
    pub function: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub recipient: ManagedAddress<M>,
    pub action: ProposalAction<M>,
    pub description: ManagedBuffer<M>,
    pub created_at: u64,
    /// `created_at` plus the debating period in force at creation.
    pub deadline: u64,
    /// Minimum quorum percent in force at creation.
    pub quorum_percent: u64,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub finished: bool,
    pub outcome: ProposalOutcome,
    pub execution: ExecutionStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn state(&self, now: u64) -> ProposalState {
        if self.finished {
            ProposalState::Finished
        } else if now < self.deadline {
            ProposalState::Open
        } else {
            ProposalState::Ready
        }
    }

    pub fn total_votes(&self) -> BigUint<M> {
        &self.votes_for + &self.votes_against
    }
}

// ============================================================
// Vote Record — one per voter per proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    For,
    Against,
}

impl VoteDirection {
    pub fn from_support(support: bool) -> Self {
        if support {
            VoteDirection::For
        } else {
            VoteDirection::Against
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub direction: VoteDirection,
    pub weight: BigUint<M>,
}
