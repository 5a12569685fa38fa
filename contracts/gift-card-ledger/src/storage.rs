use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env};

use crate::errors::LedgerError;

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const CARD_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const CARD_LIFETIME_THRESHOLD: u32 = CARD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Most cards returned by one enumeration call.
pub(crate) const MAX_CARDS_PAGE: u32 = 50;

#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Alphabet,
    MaxCodeAttempts,
    NextId,
    Locked,
}

#[contracttype]
pub enum CardStorageKey {
    Card(u64),
    CodeIndex(BytesN<8>),
    Redeemed(BytesN<8>),
}

/// One deposit and its redeem code.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Card {
    pub id: u64,
    pub redeem_code: BytesN<8>,
    pub creator: Address,
    pub deposit_amount: i128,
    pub redeemed: bool,
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin is set at construction")
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("token is set at construction")
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

pub fn alphabet(e: &Env) -> Bytes {
    e.storage()
        .instance()
        .get(&DataKey::Alphabet)
        .expect("alphabet is set at construction")
}

pub fn set_alphabet(e: &Env, alphabet: &Bytes) {
    e.storage().instance().set(&DataKey::Alphabet, alphabet);
}

pub fn max_code_attempts(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::MaxCodeAttempts)
        .unwrap_or(1)
}

pub fn set_max_code_attempts(e: &Env, attempts: u32) {
    e.storage().instance().set(&DataKey::MaxCodeAttempts, &attempts);
}

pub fn next_id(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::NextId).unwrap_or(0)
}

pub fn set_next_id(e: &Env, next_id: u64) {
    e.storage().instance().set(&DataKey::NextId, &next_id);
}

pub fn is_locked(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Locked)
}

pub fn lock(e: &Env) {
    e.storage().instance().set(&DataKey::Locked, &true);
}

pub fn unlock(e: &Env) {
    e.storage().instance().remove(&DataKey::Locked);
}

pub fn card(e: &Env, id: u64) -> Result<Card, LedgerError> {
    if id >= next_id(e) {
        return Err(LedgerError::InvalidId);
    }
    e.storage()
        .persistent()
        .get(&CardStorageKey::Card(id))
        .ok_or(LedgerError::InvalidId)
}

pub fn write_card(e: &Env, card: &Card) {
    let key = CardStorageKey::Card(card.id);
    e.storage().persistent().set(&key, card);
    e.storage()
        .persistent()
        .extend_ttl(&key, CARD_LIFETIME_THRESHOLD, CARD_BUMP_AMOUNT);
}

/// Card id holding `code`, if any card was ever issued with it.
pub fn card_for_code(e: &Env, code: &BytesN<8>) -> Option<u64> {
    e.storage()
        .persistent()
        .get(&CardStorageKey::CodeIndex(code.clone()))
}

pub fn index_code(e: &Env, code: &BytesN<8>, id: u64) {
    let key = CardStorageKey::CodeIndex(code.clone());
    e.storage().persistent().set(&key, &id);
    e.storage()
        .persistent()
        .extend_ttl(&key, CARD_LIFETIME_THRESHOLD, CARD_BUMP_AMOUNT);
}

pub fn is_redeemed(e: &Env, code: &BytesN<8>) -> bool {
    e.storage()
        .persistent()
        .has(&CardStorageKey::Redeemed(code.clone()))
}

pub fn mark_redeemed(e: &Env, code: &BytesN<8>) {
    let key = CardStorageKey::Redeemed(code.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, CARD_LIFETIME_THRESHOLD, CARD_BUMP_AMOUNT);
}
