use crate::types::{DateBonusTable, SizeBonusTable};
use sale_common::{math, Error};

pub fn validate_size_table(table: &SizeBonusTable) -> Result<(), Error> {
    let len = table.thresholds.len();
    if len == 0 || len != table.percents.len() {
        return Err(Error::InvalidBonusTable);
    }
    for i in 1..len {
        if table.thresholds.get_unchecked(i) >= table.thresholds.get_unchecked(i - 1)
            || table.percents.get_unchecked(i) >= table.percents.get_unchecked(i - 1)
        {
            return Err(Error::InvalidBonusTable);
        }
    }
    Ok(())
}

pub fn validate_date_table(table: &DateBonusTable) -> Result<(), Error> {
    let len = table.cutoffs.len();
    if len == 0 || len != table.percents.len() {
        return Err(Error::InvalidBonusTable);
    }
    for i in 1..len {
        if table.cutoffs.get_unchecked(i) <= table.cutoffs.get_unchecked(i - 1)
            || table.percents.get_unchecked(i) >= table.percents.get_unchecked(i - 1)
        {
            return Err(Error::InvalidBonusTable);
        }
    }
    Ok(())
}

/// Percent of the first (largest) threshold the value reaches, else 0.
pub fn size_percent(table: &SizeBonusTable, value: u128) -> u32 {
    for (threshold, percent) in table.thresholds.iter().zip(table.percents.iter()) {
        if value >= threshold {
            return percent;
        }
    }
    0
}

/// Percent of the first cutoff still ahead of `now`, else 0.
pub fn date_percent(table: &DateBonusTable, now: u64) -> u32 {
    for (cutoff, percent) in table.cutoffs.iter().zip(table.percents.iter()) {
        if now < cutoff {
            return percent;
        }
    }
    0
}

pub fn bonus_tokens(base: u128, percent: u32) -> Result<u128, Error> {
    math::percent_of(base, percent)
}
