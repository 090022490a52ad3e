#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, MuxedAddress};

/// Mock Asset Contract
///
/// Minimal fungible asset standing in for the native asset in tests.
/// Any address can be marked as blocked, after which every transfer to it
/// panics, the way a recipient that refuses a payment would.
#[contract]
pub struct MockAsset;

/// Storage keys
const ADMIN: &str = "admin";

#[contractimpl]
impl MockAsset {
    pub fn __constructor(e: Env, admin: Address) {
        e.storage().instance().set(&ADMIN, &admin);
    }

    /// Mint new units to an account (admin only)
    pub fn mint(e: Env, to: Address, amount: i128) {
        Self::get_admin(&e).require_auth();

        if amount < 0 {
            panic!("negative amount");
        }

        let balance = Self::get_balance(&e, &to);
        let new_balance = balance.checked_add(amount).expect("balance overflow");
        Self::set_balance(&e, &to, new_balance);
    }

    /// Get balance for an address
    pub fn balance(e: Env, id: Address) -> i128 {
        Self::get_balance(&e, &id)
    }

    /// Transfer units from one account to another
    pub fn transfer(e: Env, from: Address, to: MuxedAddress, amount: i128) {
        from.require_auth();

        if amount < 0 {
            panic!("negative amount");
        }

        let to = to.address();
        if Self::is_blocked(&e, &to) {
            panic!("recipient rejects transfers");
        }

        let from_balance = Self::get_balance(&e, &from);
        if from_balance < amount {
            panic!("insufficient balance");
        }

        Self::set_balance(&e, &from, from_balance - amount);
        let to_balance = Self::get_balance(&e, &to);
        Self::set_balance(&e, &to, to_balance + amount);
    }

    /// Block or unblock incoming transfers to an address (admin only)
    pub fn set_blocked(e: Env, id: Address, blocked: bool) {
        Self::get_admin(&e).require_auth();

        let key = ("blocked", &id);
        e.storage().instance().set(&key, &blocked);
    }

    // ========== Internal Helper Functions ==========

    fn get_admin(e: &Env) -> Address {
        e.storage()
            .instance()
            .get(&ADMIN)
            .expect("admin not initialized")
    }

    fn is_blocked(e: &Env, id: &Address) -> bool {
        let key = ("blocked", id);
        e.storage().instance().get(&key).unwrap_or(false)
    }

    fn get_balance(e: &Env, id: &Address) -> i128 {
        let key = ("balance", id);
        e.storage().instance().get(&key).unwrap_or(0)
    }

    fn set_balance(e: &Env, id: &Address, amount: i128) {
        let key = ("balance", id);
        e.storage().instance().set(&key, &amount);
    }
}
