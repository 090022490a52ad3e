use soroban_sdk::{contracttype, token, Address, Env};

// Storage TTL constants
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Asset,
    Balance(Address),
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Owner (immutable after construction)
pub fn put_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Owner).unwrap()
}

// Native asset contract (immutable after construction)
pub fn put_asset(e: &Env, asset: &Address) {
    e.storage().instance().set(&DataKey::Asset, asset);
}

pub fn get_asset(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Asset).unwrap()
}

/// Amount of the native asset currently held by this contract.
pub fn get_pool_balance(e: &Env) -> i128 {
    token::Client::new(e, &get_asset(e)).balance(&e.current_contract_address())
}

// Lifetime contribution per depositor. Only deposits write this.
pub fn get_contribution(e: &Env, depositor: &Address) -> i128 {
    let key = DataKey::Balance(depositor.clone());
    if let Some(amount) = e.storage().persistent().get::<DataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        amount
    } else {
        0
    }
}

pub fn put_contribution(e: &Env, depositor: &Address, amount: i128) {
    let key = DataKey::Balance(depositor.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
