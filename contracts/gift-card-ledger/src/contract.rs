//! Contract entry points

use soroban_sdk::{contractimpl, panic_with_error, Address, Bytes, BytesN, Env, Vec};

use crate::code::MAX_ALPHABET_LEN;
use crate::errors::LedgerError;
use crate::storage::{self, Card};
use crate::treasury::{TokenTreasury, Treasury};
use crate::{
    ledger, GiftCardLedger, GiftCardLedgerArgs, GiftCardLedgerClient, GiftCardLedgerContract,
};

fn treasury(e: &Env) -> TokenTreasury {
    TokenTreasury::new(storage::token(e))
}

#[contractimpl]
impl GiftCardLedgerContract for GiftCardLedger {

    fn __constructor(e: &Env, admin: Address, token: Address, alphabet: Bytes, max_code_attempts: u32) {
        if alphabet.is_empty() || alphabet.len() > MAX_ALPHABET_LEN {
            panic_with_error!(e, LedgerError::InvalidAlphabet);
        }

        storage::set_admin(e, &admin);
        storage::set_token(e, &token);
        storage::set_alphabet(e, &alphabet);
        storage::set_max_code_attempts(e, max_code_attempts.max(1));
        storage::set_next_id(e, 0);
        storage::extend_instance(e);
    }

    fn create_card(e: &Env, depositor: Address, amount: i128) -> Result<(u64, BytesN<8>), LedgerError> {
        depositor.require_auth();
        ledger::create_card(e, &treasury(e), &depositor, amount)
    }

    fn redeem(e: &Env, claimant: Address, code: BytesN<8>) -> Result<i128, LedgerError> {
        claimant.require_auth();
        ledger::redeem(e, &treasury(e), &claimant, &code)
    }

    fn get_status(e: &Env, id: u64) -> Result<(i128, bool), LedgerError> {
        ledger::get_status(e, id)
    }

    fn withdraw_residual(e: &Env, caller: Address) -> Result<i128, LedgerError> {
        caller.require_auth();
        ledger::withdraw_residual(e, &treasury(e), &caller)
    }

    fn set_admin(e: &Env, caller: Address, new_admin: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        ledger::set_admin(e, &caller, &new_admin)
    }

    fn card(e: &Env, id: u64) -> Result<Card, LedgerError> {
        storage::card(e, id)
    }

    fn cards(e: &Env, start: u64, limit: u32) -> Result<Vec<Card>, LedgerError> {
        ledger::cards(e, start, limit)
    }

    fn card_count(e: &Env) -> u64 {
        storage::next_id(e)
    }

    fn balance(e: &Env) -> i128 {
        treasury(e).balance(e)
    }

    fn admin(e: &Env) -> Address {
        storage::admin(e)
    }

    fn token(e: &Env) -> Address {
        storage::token(e)
    }

    fn alphabet(e: &Env) -> Bytes {
        storage::alphabet(e)
    }
}
