#![no_std]

multiversx_sc::imports!();

/// Stand-in target for proposal actions in tests.
#[multiversx_sc::contract]
pub trait RecipientMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setValue)]
    fn set_value(&self, value: BigUint) {
        self.value().set(&value);
        self.calls().update(|calls| *calls += 1);
    }

    #[endpoint(rejectAction)]
    fn reject_action(&self) {
        sc_panic!("action rejected");
    }

    #[view(getValue)]
    fn get_value(&self) -> BigUint {
        self.value().get()
    }

    #[storage_mapper("value")]
    fn value(&self) -> SingleValueMapper<BigUint>;

    #[view(getCalls)]
    #[storage_mapper("calls")]
    fn calls(&self) -> SingleValueMapper<u64>;
}
