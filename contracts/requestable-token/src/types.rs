use soroban_sdk::contracttype;

/// The chain on which a request is being applied.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChainSide {
    Root,
    Child,
}

/// Capabilities whose membership can be synchronized between chains.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Minter,
    Burner,
}

/// Whether a request moves value out of or into the ledger it is applied to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Outgoing,
    Incoming,
}

impl Flow {
    /// Entering removes value on the root chain and adds it on the child chain.
    /// Exiting is the mirror.
    pub const fn of(side: ChainSide, is_exit: bool) -> Self {
        match (side, is_exit) {
            (ChainSide::Root, false) | (ChainSide::Child, true) => Self::Outgoing,
            (ChainSide::Child, false) | (ChainSide::Root, true) => Self::Incoming,
        }
    }
}
