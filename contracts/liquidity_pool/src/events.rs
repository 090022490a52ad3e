use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    #[topic]
    pub from: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdraw {
    #[topic]
    pub recipient: Address,
    pub amount: i128,
}

pub(crate) fn deposit(e: &Env, from: Address, amount: i128) {
    Deposit { from, amount }.publish(e);
}

pub(crate) fn withdraw(e: &Env, recipient: Address, amount: i128) {
    Withdraw { recipient, amount }.publish(e);
}
