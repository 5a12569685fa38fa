use soroban_sdk::{Address, BytesN, contractevent};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardCreated {
    #[topic]
    pub id: u64,
    pub code: BytesN<8>,
    pub creator: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Redeemed {
    #[topic]
    pub id: u64,
    #[topic]
    pub claimant: Address,
    pub code: BytesN<8>,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResidualWithdrawn {
    #[topic]
    pub admin: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub previous: Address,
    pub admin: Address,
}
