//! Deployment fixtures: one token, one shared ledger, one payment asset,
//! and any number of sales and distributors wired to them.

use super::constants::*;
use capped_delivery::{CappedDelivery, CappedDeliveryClient, DistributionSource};
use contribution_ledger::{ContributionLedger, ContributionLedgerClient};
use crowdsale::{BonusKind, CrowdsaleContract, CrowdsaleContractClient, DeliveryMode, SaleConfig};
use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String, Vec,
};
use timelock::{Timelock, TimelockClient};

pub struct SuiteEnv<'a> {
    pub env: Env,
    pub owner: Address,
    pub wallet: Address,
    pub token: SaleTokenClient<'a>,
    pub ledger: ContributionLedgerClient<'a>,
    pub payment: token::Client<'a>,
    payment_admin: token::StellarAssetClient<'a>,
}

impl<'a> SuiteEnv<'a> {
    /// Fresh environment at `START` with the token locked until `locked_until`.
    pub fn new(locked_until: u64) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|l| l.timestamp = START);

        let owner = Address::generate(&env);
        let wallet = Address::generate(&env);

        let payment_id = env
            .register_stellar_asset_contract_v2(owner.clone())
            .address();

        let token = SaleTokenClient::new(&env, &env.register_contract(None, SaleToken));
        token.initialize(
            &owner,
            &String::from_str(&env, "Gastro Advisor Token"),
            &String::from_str(&env, "FORK"),
            &DECIMALS,
            &SUPPLY_CAP,
            &locked_until,
        );

        let ledger =
            ContributionLedgerClient::new(&env, &env.register_contract(None, ContributionLedger));
        ledger.initialize(&owner);

        Self {
            payment: token::Client::new(&env, &payment_id),
            payment_admin: token::StellarAssetClient::new(&env, &payment_id),
            env,
            owner,
            wallet,
            token,
            ledger,
        }
    }

    pub fn advance_to(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }

    /// A new account holding `INITIAL_FUNDS` of the payment asset.
    pub fn funded_account(&self) -> Address {
        let account = Address::generate(&self.env);
        self.payment_admin.mint(&account, &INITIAL_FUNDS);
        account
    }

    pub fn sale(&self) -> SaleBuilder<'_, 'a> {
        SaleBuilder {
            suite: self,
            delivery: DeliveryMode::Direct,
            bonus: BonusKind::Flat,
            opening_time: START + DAY,
            closing_time: START + DAY + 4 * WEEK,
            rate: 10,
            token_cap: 1_000 * ONE,
            minimum_contribution: ONE / 10,
            maximum_contribution: None,
            grant_ledger: true,
        }
    }

    pub fn bounty_distributor(
        &self,
        cap: u128,
        source: DistributionSource,
        allow_multiple_send: bool,
    ) -> CappedDeliveryClient<'a> {
        let distributor =
            CappedDeliveryClient::new(&self.env, &self.env.register_contract(None, CappedDelivery));
        distributor.initialize(
            &self.owner,
            &self.token.address,
            &cap,
            &source,
            &allow_multiple_send,
        );
        distributor
    }

    pub fn timelock(
        &self,
        beneficiaries: Vec<Address>,
        amounts: Vec<u128>,
        release_time: u64,
    ) -> TimelockClient<'a> {
        let vault = TimelockClient::new(&self.env, &self.env.register_contract(None, Timelock));
        vault.initialize(
            &self.owner,
            &self.token.address,
            &beneficiaries,
            &amounts,
            &release_time,
        );
        vault
    }
}

pub struct SaleBuilder<'s, 'a> {
    suite: &'s SuiteEnv<'a>,
    pub delivery: DeliveryMode,
    pub bonus: BonusKind,
    pub opening_time: u64,
    pub closing_time: u64,
    pub rate: u128,
    pub token_cap: u128,
    pub minimum_contribution: u128,
    pub maximum_contribution: Option<u128>,
    /// Whether the sale may write to the shared ledger.
    pub grant_ledger: bool,
}

impl<'s, 'a> SaleBuilder<'s, 'a> {
    pub fn delivery(mut self, delivery: DeliveryMode) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn rate(mut self, rate: u128) -> Self {
        self.rate = rate;
        self
    }

    pub fn token_cap(mut self, token_cap: u128) -> Self {
        self.token_cap = token_cap;
        self
    }

    pub fn window(mut self, opening_time: u64, closing_time: u64) -> Self {
        self.opening_time = opening_time;
        self.closing_time = closing_time;
        self
    }

    pub fn without_ledger_access(mut self) -> Self {
        self.grant_ledger = false;
        self
    }

    /// Registers the sale, grants it minting and ledger rights, and
    /// initializes it.
    pub fn deploy(self) -> CrowdsaleContractClient<'a> {
        let suite = self.suite;
        let sale_id = suite.env.register_contract(None, CrowdsaleContract);
        suite.token.add_minter(&suite.owner, &sale_id);
        if self.grant_ledger {
            suite.ledger.add_operator(&suite.owner, &sale_id);
        }

        let sale = CrowdsaleContractClient::new(&suite.env, &sale_id);
        sale.initialize(
            &suite.owner,
            &SaleConfig {
                token: suite.token.address.clone(),
                ledger: suite.ledger.address.clone(),
                payment_token: suite.payment.address.clone(),
                wallet: suite.wallet.clone(),
                opening_time: self.opening_time,
                closing_time: self.closing_time,
                rate: self.rate,
                token_cap: self.token_cap,
                minimum_contribution: self.minimum_contribution,
                maximum_contribution: self.maximum_contribution,
                delivery: self.delivery,
                bonus: self.bonus,
            },
        );
        sale
    }
}
