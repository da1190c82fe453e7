use crate::bonus;
use crate::storage::*;
use crate::types::*;
use sale_common::{
    interfaces::{LedgerWriterClient, MintableTokenClient},
    math,
    roles::{self, Role},
    Error,
};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, token, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Capped timed crowdsale with bonus tiers and deferred delivery"
);

#[contract]
pub struct CrowdsaleContract;

fn validate_config(env: &Env, config: &SaleConfig) -> Result<(), Error> {
    let now = get_ledger_timestamp(env);
    if config.opening_time < now || config.closing_time <= config.opening_time {
        return Err(Error::InvalidConfiguration);
    }
    if config.rate == 0 || config.token_cap == 0 {
        return Err(Error::InvalidConfiguration);
    }
    if let Some(maximum) = config.maximum_contribution {
        if maximum == 0 || maximum < config.minimum_contribution {
            return Err(Error::InvalidConfiguration);
        }
    }

    let this = env.current_contract_address();
    if config.wallet == this
        || config.token == this
        || config.ledger == this
        || config.token == config.ledger
    {
        return Err(Error::InvalidConfiguration);
    }
    Ok(())
}

fn state_at(env: &Env, config: &SaleConfig, now: u64) -> SaleState {
    if now < config.opening_time {
        SaleState::Pending
    } else if now >= config.closing_time || get_sold_tokens(env) >= config.token_cap {
        SaleState::Ended
    } else {
        SaleState::Active
    }
}

fn bonus_percent(env: &Env, config: &SaleConfig, value: u128, now: u64) -> u32 {
    match config.bonus {
        BonusKind::Flat => 0,
        BonusKind::ContributionSize => get_size_bonus(env)
            .map(|table| bonus::size_percent(&table, value))
            .unwrap_or(0),
        BonusKind::PurchaseDate => get_date_bonus(env)
            .map(|table| bonus::date_percent(&table, now))
            .unwrap_or(0),
    }
}

/// Base tokens plus bonus for a purchase of `value` at `now`.
fn token_amount(env: &Env, config: &SaleConfig, value: u128, now: u64) -> Result<u128, Error> {
    let base = math::mul(value, config.rate)?;
    let bonus = bonus::bonus_tokens(base, bonus_percent(env, config, value, now))?;
    math::add(base, bonus)
}

fn check_bonus_window(
    env: &Env,
    caller: &Address,
    config: &SaleConfig,
    kind: BonusKind,
    already_set: bool,
) -> Result<(), Error> {
    roles::require_owner(env, caller)?;
    if config.bonus != kind {
        return Err(Error::InvalidBonusTable);
    }
    if already_set {
        return Err(Error::AlreadySet);
    }
    if get_ledger_timestamp(env) >= config.opening_time {
        return Err(Error::TooLate);
    }
    Ok(())
}

fn deliver(
    env: &Env,
    config: &SaleConfig,
    beneficiary: &Address,
    amount: u128,
) -> Result<(), Error> {
    let this = env.current_contract_address();
    let token = MintableTokenClient::new(env, &config.token);
    match config.delivery {
        DeliveryMode::Direct => token.mint(&this, beneficiary, &amount),
        DeliveryMode::Pool => token.mint(&this, &config.ledger, &amount),
        DeliveryMode::Deferred => {
            let owed = math::add(get_future_balance(env, beneficiary), amount)?;
            token.mint(&this, &this, &amount);
            set_future_balance(env, beneficiary, owed);
            list_beneficiary(env, beneficiary);
        }
    }
    Ok(())
}

#[contractimpl]
impl CrowdsaleContract {
    /// Initialize the crowdsale. Every parameter is fixed from here on; the
    /// token and ledger are queried so a wrong address fails now rather than
    /// at the first purchase.
    pub fn initialize(env: Env, owner: Address, config: SaleConfig) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        validate_config(&env, &config)?;

        MintableTokenClient::new(&env, &config.token).decimals();
        LedgerWriterClient::new(&env, &config.ledger).contributors_len();

        set_config(&env, &config);
        set_sold_tokens(&env, 0);
        set_wei_raised(&env, 0);
        set_transaction_count(&env, 0);
        roles::set_owner(&env, &owner);
        roles::grant(&env, Role::Operator, &owner);

        env.events().publish(
            (symbol_short!("sale_init"),),
            (config.token, config.ledger, config.wallet, config.token_cap),
        );
        Ok(())
    }

    pub fn set_size_bonus(
        env: Env,
        caller: Address,
        thresholds: Vec<u128>,
        percents: Vec<u32>,
    ) -> Result<(), Error> {
        let config = get_config(&env)?;
        check_bonus_window(
            &env,
            &caller,
            &config,
            BonusKind::ContributionSize,
            get_size_bonus(&env).is_some(),
        )?;
        let table = SizeBonusTable {
            thresholds,
            percents,
        };
        bonus::validate_size_table(&table)?;
        set_size_bonus(&env, &table);

        env.events()
            .publish((symbol_short!("bonus_set"),), table.thresholds.len());
        Ok(())
    }

    pub fn set_date_bonus(
        env: Env,
        caller: Address,
        cutoffs: Vec<u64>,
        percents: Vec<u32>,
    ) -> Result<(), Error> {
        let config = get_config(&env)?;
        check_bonus_window(
            &env,
            &caller,
            &config,
            BonusKind::PurchaseDate,
            get_date_bonus(&env).is_some(),
        )?;
        let table = DateBonusTable { cutoffs, percents };
        bonus::validate_date_table(&table)?;
        set_date_bonus(&env, &table);

        env.events()
            .publish((symbol_short!("bonus_set"),), table.cutoffs.len());
        Ok(())
    }

    /// Buy tokens for `beneficiary`, paid by `purchaser` in the payment asset.
    /// Returns the number of tokens issued, bonus included.
    pub fn buy_tokens(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        value: u128,
    ) -> Result<u128, Error> {
        purchaser.require_auth();
        let config = get_config(&env)?;
        let now = get_ledger_timestamp(&env);

        if value == 0 {
            return Err(Error::InvalidAmount);
        }
        if state_at(&env, &config, now) != SaleState::Active {
            return Err(Error::NotOpen);
        }
        if value < config.minimum_contribution {
            return Err(Error::BelowMinimum);
        }
        if let Some(maximum) = config.maximum_contribution {
            if value > maximum {
                return Err(Error::AboveMaximum);
            }
        }

        let tokens = token_amount(&env, &config, value, now)?;
        let sold = math::add(get_sold_tokens(&env), tokens)?;
        if sold > config.token_cap {
            return Err(Error::CapExceeded);
        }
        let raised = math::add(get_wei_raised(&env), value)?;
        let payment = math::to_i128(value)?;

        set_sold_tokens(&env, sold);
        set_wei_raised(&env, raised);
        deliver(&env, &config, &beneficiary, tokens)?;
        LedgerWriterClient::new(&env, &config.ledger).add_balance(
            &env.current_contract_address(),
            &beneficiary,
            &value,
            &tokens,
        );
        set_transaction_count(&env, get_transaction_count(&env) + 1);

        token::Client::new(&env, &config.payment_token).transfer(
            &purchaser,
            &config.wallet,
            &payment,
        );

        env.events().publish(
            (symbol_short!("purchase"), purchaser, beneficiary),
            (value, tokens),
        );
        Ok(tokens)
    }

    /// Buy tokens for oneself.
    pub fn contribute(env: Env, contributor: Address, value: u128) -> Result<u128, Error> {
        Self::buy_tokens(env, contributor.clone(), contributor, value)
    }

    /// Hand out deferred balances for beneficiaries `[start, start + count)`.
    /// Entries already delivered are skipped, so a batch can be re-run.
    /// Returns the amount delivered by this call.
    pub fn multi_send(env: Env, caller: Address, start: u32, count: u32) -> Result<u128, Error> {
        roles::require_role(&env, &caller, Role::Operator)?;
        let config = get_config(&env)?;
        if state_at(&env, &config, get_ledger_timestamp(&env)) != SaleState::Ended {
            return Err(Error::NotReady);
        }
        let token = MintableTokenClient::new(&env, &config.token);
        if !token.minting_finished() {
            return Err(Error::NotReady);
        }
        let end = start.checked_add(count).ok_or(Error::OutOfRange)?;
        if end > get_beneficiary_count(&env) {
            return Err(Error::OutOfRange);
        }

        let this = env.current_contract_address();
        let mut sent = 0u128;
        for index in start..end {
            let beneficiary = get_beneficiary_at(&env, index).ok_or(Error::OutOfRange)?;
            let amount = get_future_balance(&env, &beneficiary);
            if amount == 0 {
                continue;
            }
            let delivered = math::add(get_delivered(&env, &beneficiary), amount)?;
            sent = math::add(sent, amount)?;

            set_future_balance(&env, &beneficiary, 0);
            set_delivered(&env, &beneficiary, delivered);
            token.transfer(&this, &beneficiary, &amount);

            env.events()
                .publish((symbol_short!("delivered"), beneficiary), amount);
        }
        Ok(sent)
    }

    // Operators run deferred delivery.

    pub fn add_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        roles::add_role(&env, &caller, Role::Operator, &operator)
    }

    pub fn remove_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        roles::remove_role(&env, &caller, Role::Operator, &operator)
    }

    pub fn is_operator(env: Env, operator: Address) -> bool {
        roles::has_role(&env, &operator, Role::Operator)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        roles::get_owner(&env)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn state(env: Env) -> Result<SaleState, Error> {
        let config = get_config(&env)?;
        Ok(state_at(&env, &config, get_ledger_timestamp(&env)))
    }

    pub fn started(env: Env) -> Result<bool, Error> {
        Ok(get_ledger_timestamp(&env) >= get_config(&env)?.opening_time)
    }

    pub fn has_closed(env: Env) -> Result<bool, Error> {
        Ok(get_ledger_timestamp(&env) >= get_config(&env)?.closing_time)
    }

    pub fn token_cap_reached(env: Env) -> Result<bool, Error> {
        Ok(get_sold_tokens(&env) >= get_config(&env)?.token_cap)
    }

    pub fn ended(env: Env) -> Result<bool, Error> {
        Ok(Self::state(env)? == SaleState::Ended)
    }

    pub fn is_open(env: Env) -> Result<bool, Error> {
        Ok(Self::state(env)? == SaleState::Active)
    }

    pub fn remaining_token_capacity(env: Env) -> Result<u128, Error> {
        let config = get_config(&env)?;
        Ok(config.token_cap.saturating_sub(get_sold_tokens(&env)))
    }

    pub fn would_exceed_cap(env: Env, tokens: u128) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(match get_sold_tokens(&env).checked_add(tokens) {
            Some(total) => total > config.token_cap,
            None => true,
        })
    }

    /// Token cap expressed in the payment asset.
    pub fn cap(env: Env) -> Result<u128, Error> {
        let config = get_config(&env)?;
        Ok(config.token_cap / config.rate)
    }

    /// Whether the payment raised has reached `cap`.
    pub fn cap_reached(env: Env) -> Result<bool, Error> {
        Ok(get_wei_raised(&env) >= Self::cap(env)?)
    }

    pub fn token_cap(env: Env) -> Result<u128, Error> {
        Ok(get_config(&env)?.token_cap)
    }

    pub fn rate(env: Env) -> Result<u128, Error> {
        Ok(get_config(&env)?.rate)
    }

    pub fn sold_tokens(env: Env) -> u128 {
        get_sold_tokens(&env)
    }

    pub fn wei_raised(env: Env) -> u128 {
        get_wei_raised(&env)
    }

    pub fn transaction_count(env: Env) -> u64 {
        get_transaction_count(&env)
    }

    /// Tokens a purchase of `value` would get right now, ignoring every gate.
    pub fn quote(env: Env, value: u128) -> Result<u128, Error> {
        let config = get_config(&env)?;
        token_amount(&env, &config, value, get_ledger_timestamp(&env))
    }

    pub fn size_bonus(env: Env) -> Option<SizeBonusTable> {
        get_size_bonus(&env)
    }

    pub fn date_bonus(env: Env) -> Option<DateBonusTable> {
        get_date_bonus(&env)
    }

    pub fn future_balance(env: Env, beneficiary: Address) -> u128 {
        get_future_balance(&env, &beneficiary)
    }

    pub fn delivered_tokens(env: Env, beneficiary: Address) -> u128 {
        get_delivered(&env, &beneficiary)
    }

    pub fn beneficiaries_len(env: Env) -> u32 {
        get_beneficiary_count(&env)
    }

    pub fn beneficiary_at(env: Env, index: u32) -> Result<Address, Error> {
        get_beneficiary_at(&env, index).ok_or(Error::OutOfRange)
    }
}
