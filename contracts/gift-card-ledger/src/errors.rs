use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Indicates a deposit of zero or negative value.
    ZeroDeposit = 1,
    /// Indicates an alphabet that is empty or longer than 256 bytes.
    InvalidAlphabet = 2,
    /// Indicates no unused code was found within the configured attempts.
    CodeSpaceExhausted = 3,
    /// Indicates the code was already redeemed.
    AlreadyRedeemed = 4,
    /// Indicates no card was ever issued with this code.
    CodeNotFound = 5,
    /// Indicates a card id at or beyond the next id.
    InvalidId = 6,
    /// Indicates the pooled balance is empty.
    NothingToWithdraw = 7,
    /// Indicates the caller is not the ledger administrator.
    Unauthorized = 8,
    /// Indicates a mutating call made while another one is in progress.
    ReentrantCall = 9,
}
