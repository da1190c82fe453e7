use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidConfiguration = 4,
    /// The sale is not in its active window (pending or ended).
    NotOpen = 5,
    BelowMinimum = 6,
    AboveMaximum = 7,
    CapExceeded = 8,
    /// A precondition for delivery or release has not been met yet.
    NotReady = 9,
    OutOfRange = 10,
    AlreadySet = 11,
    TooLate = 12,
    InvalidBonusTable = 13,
    InvalidAmount = 14,
    Overflow = 15,
    MintingFinished = 16,
    InsufficientBalance = 17,
    TokensLocked = 18,
    TransferRestricted = 19,
    AlreadyReleased = 20,
    LengthMismatch = 21,
}
