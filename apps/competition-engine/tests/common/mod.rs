#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

// Suites observe effects across calls, so commit is the default here.
// Flip per run with `COMPETITION_TXN_POLICY=rollback`.
#[ctor::ctor]
fn init_txn_policy() {
    use competition_engine::db::txn_policy::{set_txn_policy, TxnPolicy};

    let policy = match std::env::var("COMPETITION_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "rollback" => TxnPolicy::RollbackOnOk,
        _ => TxnPolicy::CommitOnOk,
    };

    set_txn_policy(policy);
}
