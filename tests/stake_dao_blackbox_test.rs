// Blackbox tests: everything goes through the typed proxy, the way an
// operator would drive the contract.

use multiversx_sc_scenario::imports::*;

use recipient_mock::RecipientMock;
use stake_dao::stake_dao_proxy::{self, ExecutionStatus, ProposalOutcome, ProposalState};

const CHAIRPERSON: TestAddress = TestAddress::new("chairperson");
const USER1: TestAddress = TestAddress::new("user1");
const USER2: TestAddress = TestAddress::new("user2");
const RECIPIENT: TestAddress = TestAddress::new("recipient");
const DAO_ADDRESS: TestSCAddress = TestSCAddress::new("stake-dao");
const CODE_PATH: MxscPath = MxscPath::new("output/stake-dao.mxsc.json");
const RECIPIENT_SC: TestSCAddress = TestSCAddress::new("recipient-mock");
const RECIPIENT_CODE_PATH: MxscPath =
    MxscPath::new("recipient-mock/output/recipient-mock.mxsc.json");
const DAO_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("DAO-123456");

const TOTAL_SUPPLY: u64 = 10_000;
const QUORUM_PERCENT: u64 = 60;
const PERIOD: u64 = 43_200;
const START: u64 = 1_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, stake_dao::ContractBuilder);
    blockchain.register_contract(RECIPIENT_CODE_PATH, recipient_mock::ContractBuilder);
    blockchain
}

struct StakeDaoTestState {
    world: ScenarioWorld,
}

impl StakeDaoTestState {
    fn new() -> Self {
        let mut world = world();

        world.account(CHAIRPERSON).nonce(1);
        world
            .account(USER1)
            .nonce(1)
            .esdt_balance(DAO_TOKEN, TOTAL_SUPPLY);
        world
            .account(USER2)
            .nonce(1)
            .esdt_balance(DAO_TOKEN, TOTAL_SUPPLY);
        world.account(RECIPIENT).nonce(1);
        world.current_block().block_timestamp(START);

        Self { world }
    }

    fn deploy(&mut self) -> &mut Self {
        self.world
            .tx()
            .from(CHAIRPERSON)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .init(
                QUORUM_PERCENT,
                PERIOD,
                BigUint::<StaticApi>::from(TOTAL_SUPPLY),
                EgldOrEsdtTokenIdentifier::<StaticApi>::esdt(DAO_TOKEN),
            )
            .code(CODE_PATH)
            .new_address(DAO_ADDRESS)
            .run();

        self
    }

    fn stake(&mut self, staker: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(staker)
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .stake()
            .egld_or_single_esdt(
                &EgldOrEsdtTokenIdentifier::esdt(DAO_TOKEN),
                0u64,
                &BigUint::from(amount),
            )
            .run();
    }

    fn add_proposal(&mut self) -> u64 {
        let mut arguments = MultiValueEncoded::<StaticApi, ManagedBuffer<StaticApi>>::new();
        arguments.push(ManagedBuffer::from("2a"));

        self.world
            .tx()
            .from(CHAIRPERSON)
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .add_proposal(RECIPIENT, "Dao description", "setValue", arguments)
            .returns(ReturnsResult)
            .run()
    }

    fn deploy_recipient(&mut self) -> &mut Self {
        self.world
            .tx()
            .from(CHAIRPERSON)
            .raw_deploy()
            .code(RECIPIENT_CODE_PATH)
            .new_address(RECIPIENT_SC)
            .run();

        self
    }

    fn add_recipient_proposal(
        &mut self,
        function: &str,
        arguments: MultiValueEncoded<StaticApi, ManagedBuffer<StaticApi>>,
    ) -> u64 {
        self.world
            .tx()
            .from(CHAIRPERSON)
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .add_proposal(RECIPIENT_SC, "Call the recipient", function, arguments)
            .returns(ReturnsResult)
            .run()
    }

    fn execution_status(&mut self, proposal_id: u64) -> ExecutionStatus {
        self.world
            .query()
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .get_execution_status(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    fn vote(&mut self, voter: TestAddress, proposal_id: u64, support: bool) {
        self.world
            .tx()
            .from(voter)
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .vote(proposal_id, support)
            .run();
    }

    fn finish(&mut self, proposal_id: u64) {
        self.world
            .tx()
            .from(USER1)
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .finish_proposal(proposal_id)
            .run();
    }

    fn withdraw(&mut self, staker: TestAddress) {
        self.world
            .tx()
            .from(staker)
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .withdraw()
            .run();
    }

    fn proposal_state(&mut self, proposal_id: u64) -> ProposalState {
        self.world
            .query()
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .get_proposal_state(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    fn proposal_outcome(&mut self, proposal_id: u64) -> ProposalOutcome {
        self.world
            .query()
            .to(DAO_ADDRESS)
            .typed(stake_dao_proxy::StakeDaoProxy)
            .get_proposal(proposal_id)
            .returns(ReturnsResult)
            .run()
            .outcome
    }

    fn advance_past_deadline(&mut self) {
        self.world.current_block().block_timestamp(START + PERIOD);
    }
}

#[test]
fn deploy_exposes_parameters() {
    let mut state = StakeDaoTestState::new();
    state.deploy();

    let chairperson = state
        .world
        .query()
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .chairperson()
        .returns(ReturnsResult)
        .run();
    assert_eq!(chairperson, CHAIRPERSON.to_managed_address());

    let period = state
        .world
        .query()
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .debating_period_duration()
        .returns(ReturnsResult)
        .run();
    assert_eq!(period, PERIOD);

    let quorum = state
        .world
        .query()
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .minimum_quorum()
        .returns(ReturnsResult)
        .run();
    assert_eq!(quorum, BigUint::from(6_000u64));
}

#[test]
fn non_chairperson_cannot_configure() {
    let mut state = StakeDaoTestState::new();
    state.deploy();

    state
        .world
        .tx()
        .from(USER1)
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .set_minimum_quorum(0u64)
        .returns(ExpectError(4, "NotChairperson"))
        .run();

    state
        .world
        .tx()
        .from(CHAIRPERSON)
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .set_minimum_quorum(101u64)
        .returns(ExpectError(4, "IncorrectQuorum"))
        .run();

    state
        .world
        .tx()
        .from(USER1)
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .set_debating_period(50_000u64)
        .returns(ExpectError(4, "NotChairperson"))
        .run();
}

#[test]
fn lone_staker_misses_quorum() {
    let mut state = StakeDaoTestState::new();
    state.deploy();

    state.stake(USER1, 1_000);
    let proposal_id = state.add_proposal();
    assert_eq!(proposal_id, 0);
    state.vote(USER1, proposal_id, true);

    state
        .world
        .tx()
        .from(USER1)
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .finish_proposal(proposal_id)
        .returns(ExpectError(4, "VotingProcess"))
        .run();

    state.advance_past_deadline();
    assert_eq!(state.proposal_state(proposal_id), ProposalState::Ready);

    state.finish(proposal_id);
    assert_eq!(state.proposal_state(proposal_id), ProposalState::Finished);
    assert_eq!(
        state.proposal_outcome(proposal_id),
        ProposalOutcome::QuorumNotReached
    );
}

#[test]
fn two_stakers_reach_quorum_and_recover_stake() {
    let mut state = StakeDaoTestState::new();
    state.deploy();

    state.stake(USER1, 1_000);
    state.stake(USER2, 5_000);
    state
        .world
        .check_account(USER2)
        .esdt_balance(DAO_TOKEN, TOTAL_SUPPLY - 5_000);

    let proposal_id = state.add_proposal();
    state.vote(USER1, proposal_id, true);
    state.vote(USER2, proposal_id, true);

    state
        .world
        .tx()
        .from(USER2)
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .withdraw()
        .returns(ExpectError(4, "ActiveVotesPending"))
        .run();

    state.advance_past_deadline();
    state.finish(proposal_id);
    assert_eq!(state.proposal_outcome(proposal_id), ProposalOutcome::Passed);

    state.withdraw(USER1);
    state.withdraw(USER2);
    state
        .world
        .check_account(USER1)
        .esdt_balance(DAO_TOKEN, TOTAL_SUPPLY);
    state
        .world
        .check_account(USER2)
        .esdt_balance(DAO_TOKEN, TOTAL_SUPPLY);

    let total_staked = state
        .world
        .query()
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .total_staked()
        .returns(ReturnsResult)
        .run();
    assert_eq!(total_staked, BigUint::zero());
}

#[test]
fn passed_proposal_runs_its_action() {
    let mut state = StakeDaoTestState::new();
    state.deploy().deploy_recipient();

    let mut arguments = MultiValueEncoded::<StaticApi, ManagedBuffer<StaticApi>>::new();
    arguments.push(ManagedBuffer::new_from_bytes(&[42u8]));

    state.stake(USER1, 6_000);
    let proposal_id = state.add_recipient_proposal("setValue", arguments);
    state.vote(USER1, proposal_id, true);
    assert_eq!(state.execution_status(proposal_id), ExecutionStatus::NotExecuted);

    state.advance_past_deadline();
    state.finish(proposal_id);

    assert_eq!(state.proposal_outcome(proposal_id), ProposalOutcome::Passed);
    assert_eq!(state.execution_status(proposal_id), ExecutionStatus::Succeeded);

    state
        .world
        .query()
        .to(RECIPIENT_SC)
        .whitebox(recipient_mock::contract_obj, |sc| {
            assert_eq!(sc.value().get(), BigUint::from(42u64));
            assert_eq!(sc.calls().get(), 1);
        });
}

#[test]
fn failed_action_keeps_proposal_passed() {
    let mut state = StakeDaoTestState::new();
    state.deploy().deploy_recipient();

    state.stake(USER1, 6_000);
    let proposal_id = state.add_recipient_proposal("rejectAction", MultiValueEncoded::new());
    state.vote(USER1, proposal_id, true);

    state.advance_past_deadline();
    state.finish(proposal_id);

    assert_eq!(state.proposal_state(proposal_id), ProposalState::Finished);
    assert_eq!(state.proposal_outcome(proposal_id), ProposalOutcome::Passed);
    assert_eq!(state.execution_status(proposal_id), ExecutionStatus::Failed);

    // voters were released before the action ran
    state.withdraw(USER1);
    state
        .world
        .check_account(USER1)
        .esdt_balance(DAO_TOKEN, TOTAL_SUPPLY);

    state
        .world
        .tx()
        .from(USER2)
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .finish_proposal(proposal_id)
        .returns(ExpectError(4, "AlreadyFinished"))
        .run();
}

fn finished_topics(all_topics: impl IntoIterator<Item = Vec<Vec<u8>>>) -> Vec<Vec<u8>> {
    all_topics
        .into_iter()
        .find(|topics| topics.first().map(Vec::as_slice) == Some(b"proposalFinished".as_slice()))
        .unwrap_or_default()
}

#[test]
fn finish_emits_proposal_finished_topics() {
    let mut state = StakeDaoTestState::new();
    state.deploy().deploy_recipient();

    state.stake(USER1, 1_000);
    let rejected = state.add_proposal();
    state.vote(USER1, rejected, true);

    let mut arguments = MultiValueEncoded::<StaticApi, ManagedBuffer<StaticApi>>::new();
    arguments.push(ManagedBuffer::new_from_bytes(&[7u8]));
    state.stake(USER2, 5_000);
    let passed = state.add_recipient_proposal("setValue", arguments);
    state.vote(USER1, passed, true);
    state.vote(USER2, passed, true);

    state.advance_past_deadline();

    let logs = state
        .world
        .tx()
        .from(USER2)
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .finish_proposal(rejected)
        .returns(ReturnsLogs)
        .run();
    // id 0 and `false` both top-encode to empty topics
    assert_eq!(
        finished_topics(logs.iter().map(|log| log.topics.clone())),
        vec![b"proposalFinished".to_vec(), Vec::new(), Vec::new()]
    );

    let logs = state
        .world
        .tx()
        .from(USER2)
        .to(DAO_ADDRESS)
        .typed(stake_dao_proxy::StakeDaoProxy)
        .finish_proposal(passed)
        .returns(ReturnsLogs)
        .run();
    assert_eq!(
        finished_topics(logs.iter().map(|log| log.topics.clone())),
        vec![b"proposalFinished".to_vec(), vec![1u8], vec![1u8]]
    );
}
