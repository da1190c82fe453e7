use crowdsale::CrowdsaleContractClient;
use contribution_ledger::ContributionLedgerClient;
use sale_token::SaleTokenClient;
use soroban_sdk::Address;

/// Assert a `try_*` call failed with the given contract error
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected_error:expr) => {
        assert_eq!($result, Err(Ok($expected_error)), "Contract error mismatch")
    };
}

/// Assert a `try_*` call failed, whatever the cause (host or nested contract)
#[macro_export]
macro_rules! assert_rejected {
    ($result:expr) => {
        assert!($result.is_err(), "Expected the call to be rejected")
    };
}

/// The ledger's totals must equal the sum over every sale writing to it.
pub fn assert_ledger_matches_sales(
    ledger: &ContributionLedgerClient,
    sales: &[&CrowdsaleContractClient],
) {
    let sold: u128 = sales.iter().map(|sale| sale.sold_tokens()).sum();
    let raised: u128 = sales.iter().map(|sale| sale.wei_raised()).sum();
    assert_eq!(ledger.total_tokens(), sold, "Ledger tokens out of sync");
    assert_eq!(ledger.total_wei(), raised, "Ledger wei out of sync");
}

/// Every unit ever minted must sit in one of `holders`.
pub fn assert_supply_accounted(token: &SaleTokenClient, holders: &[&Address]) {
    let held: u128 = holders.iter().map(|holder| token.balance(holder)).sum();
    assert_eq!(held, token.total_supply(), "Supply not fully accounted for");
}
