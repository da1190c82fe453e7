use crate::errors::Error;

pub fn add(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_add(b).ok_or(Error::Overflow)
}

pub fn sub(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_sub(b).ok_or(Error::Overflow)
}

pub fn mul(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_mul(b).ok_or(Error::Overflow)
}

/// `amount * percent / 100`, rounded down.
pub fn percent_of(amount: u128, percent: u32) -> Result<u128, Error> {
    Ok(mul(amount, u128::from(percent))? / 100)
}

/// Whole token units to base units for a token with `decimals` places.
pub fn scale_by_decimals(amount: u128, decimals: u32) -> Result<u128, Error> {
    let factor = 10u128.checked_pow(decimals).ok_or(Error::Overflow)?;
    mul(amount, factor)
}

/// Payment assets speak i128.
pub fn to_i128(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::Overflow)
}
