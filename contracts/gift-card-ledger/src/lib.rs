#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Bytes, BytesN, Env, Vec};

contractmeta!(key = "Description", val = "Gift Card Ledger");

mod code;
mod contract;
mod errors;
mod events;
mod ledger;
mod storage;
mod treasury;


pub use errors::LedgerError;
pub use storage::Card;

#[contract]
pub struct GiftCardLedger;

pub trait GiftCardLedgerContract {

    /// Configure the ledger.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `admin` - Identity allowed to sweep the pooled balance.
    /// * `token` - The single asset cards are denominated in.
    /// * `alphabet` - Bytes redeem codes are drawn from (1 to 256 entries).
    /// * `max_code_attempts` - Codes tried per card before giving up. Zero is
    ///   treated as one.
    ///
    /// # Notes
    ///
    /// Panics with `InvalidAlphabet` if the alphabet is empty or too long.
    fn __constructor(e: &Env, admin: Address, token: Address, alphabet: Bytes, max_code_attempts: u32);

    /// Deposit `amount` of the ledger token and issue a card for it.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `depositor` - Account paying the deposit. Must authorize.
    /// * `amount` - Deposit, strictly positive.
    ///
    /// # Returns
    ///
    /// The new card id and its 8-byte redeem code.
    ///
    /// # Events
    ///
    /// * topics - `["card_created", id: u64]`
    /// * data - `[code: BytesN<8>, creator: Address, amount: i128]`
    fn create_card(e: &Env, depositor: Address, amount: i128) -> Result<(u64, BytesN<8>), LedgerError>;

    /// Redeem `code`, paying the card's deposit to `claimant`.
    ///
    /// Succeeds at most once per code.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `claimant` - Account receiving the value. Must authorize.
    /// * `code` - The redeem code returned by `create_card`.
    ///
    /// # Events
    ///
    /// * topics - `["redeemed", id: u64, claimant: Address]`
    /// * data - `[code: BytesN<8>, amount: i128]`
    fn redeem(e: &Env, claimant: Address, code: BytesN<8>) -> Result<i128, LedgerError>;

    /// Returns `(deposit_amount, redeemed)` for card `id`.
    fn get_status(e: &Env, id: u64) -> Result<(i128, bool), LedgerError>;

    /// Sweep the whole pooled balance to the administrator.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Must be the administrator and authorize.
    ///
    /// # Notes
    ///
    /// The sweep is not limited to redeemed cards: it also removes value
    /// backing cards that are still active.
    fn withdraw_residual(e: &Env, caller: Address) -> Result<i128, LedgerError>;

    /// Transfer administration to `new_admin`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Must be the current administrator and authorize.
    /// * `new_admin` - The next administrator.
    ///
    /// # Events
    ///
    /// * topics - `["admin_changed", previous: Address]`
    /// * data - `[admin: Address]`
    fn set_admin(e: &Env, caller: Address, new_admin: Address) -> Result<(), LedgerError>;

    /// Returns card `id`.
    fn card(e: &Env, id: u64) -> Result<Card, LedgerError>;

    /// Returns up to `limit` cards in issue order, starting at id `start`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `start` - First card id of the page.
    /// * `limit` - Page size, capped at 50.
    ///
    /// # Notes
    ///
    /// Page through the whole ledger with `card_count`. A `start` at or past
    /// `card_count` returns an empty page.
    fn cards(e: &Env, start: u64, limit: u32) -> Result<Vec<Card>, LedgerError>;

    /// Returns the number of cards ever issued.
    fn card_count(e: &Env) -> u64;

    /// Returns the pooled balance held by the ledger.
    fn balance(e: &Env) -> i128;

    /// Returns the administrator allowed to sweep the pooled balance.
    fn admin(e: &Env) -> Address;

    /// Returns the token contract cards are denominated in.
    fn token(e: &Env) -> Address;

    /// Returns the bytes redeem codes are drawn from.
    fn alphabet(e: &Env) -> Bytes;
}
