//! Error messages surfaced as user errors. Clients match on the exact text.

pub const NOT_CHAIRPERSON: &str = "NotChairperson";
pub const INCORRECT_QUORUM: &str = "IncorrectQuorum";
pub const INCORRECT_PERIOD: &str = "IncorrectPeriod";

pub const INVALID_AMOUNT: &str = "InvalidAmount";
pub const TRANSFER_FAILED: &str = "TransferFailed";
pub const ACTIVE_VOTES_PENDING: &str = "ActiveVotesPending";

pub const PROPOSAL_NOT_EXIST: &str = "ProposalNotExist";
pub const ALREADY_VOTED: &str = "AlreadyVoted";
pub const NO_VOTING_POWER: &str = "NoVotingPower";
pub const VOTING_FINISHED: &str = "VotingFinished";
pub const VOTING_PROCESS: &str = "VotingProcess";
pub const ALREADY_FINISHED: &str = "AlreadyFinished";
