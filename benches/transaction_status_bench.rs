//! 交易草稿校验性能基准
//!
//! 测试场景:
//! 1. 普通转账校验
//! 2. use_all_amount各mode的金额解析
//! 3. 大投票列表下的revoke查找
//!
//! 性能目标: 单次校验 < 10µs（校验在每次草稿编辑时重算，必须可忽略）

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;

use walletbridge::domain::{
    CeloOperationMode, CeloResources, CeloTransaction, CeloVote, ChainFamily, MainAccount,
};
use walletbridge::family::CeloValidator;

const SOURCE: &str = "0x1111111111111111111111111111111111111111";
const GROUP: &str = "0x3333333333333333333333333333333333333333";

fn account(vote_count: u32) -> MainAccount {
    let votes = (0..vote_count)
        .map(|i| CeloVote {
            validator_group: GROUP.to_string(),
            index: i,
            amount: Decimal::from(100 + i),
        })
        .collect();

    MainAccount {
        id: "js:2:celo:0x011:".to_string(),
        name: "Celo 1".to_string(),
        fresh_address: SOURCE.to_string(),
        fresh_address_path: "44'/52752'/0'/0/0".to_string(),
        derivation_mode: String::new(),
        family: ChainFamily::Celo,
        currency: "celo".to_string(),
        balance: Decimal::from(10_000_000_000_000_000_u64),
        spendable_balance: Decimal::from(10_000_000_000_000_000_u64),
        block_height: 100,
        last_sync_date: Utc.timestamp_opt(0, 0).unwrap(),
        celo_resources: Some(CeloResources {
            locked_balance: Decimal::from(5_000_000),
            nonvoting_locked_balance: Decimal::from(3_000_000),
            votes,
        }),
    }
}

fn send_tx() -> CeloTransaction {
    CeloTransaction {
        mode: CeloOperationMode::Send,
        amount: Decimal::from(1_000),
        recipient: "0x2222222222222222222222222222222222222222".to_string(),
        fees: Some(Decimal::from(10)),
        use_all_amount: false,
        index: None,
    }
}

fn bench_send_validation(c: &mut Criterion) {
    let validator = CeloValidator::default();
    let account = account(0);
    let tx = send_tx();

    c.bench_function("celo_send_validation", |b| {
        b.iter(|| {
            black_box(validator.get_transaction_status(black_box(&account), black_box(&tx)))
        })
    });
}

fn bench_use_all_amount_modes(c: &mut Criterion) {
    let validator = CeloValidator::default();
    let account = account(10);
    let mut group = c.benchmark_group("celo_use_all_amount");

    for mode in [
        CeloOperationMode::Send,
        CeloOperationMode::Vote,
        CeloOperationMode::Unlock,
        CeloOperationMode::Revoke,
    ] {
        let tx = CeloTransaction {
            mode,
            amount: Decimal::ZERO,
            recipient: GROUP.to_string(),
            fees: Some(Decimal::from(10)),
            use_all_amount: true,
            index: Some(5),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", mode)),
            &tx,
            |b, tx| b.iter(|| black_box(validator.get_transaction_status(&account, tx))),
        );
    }
    group.finish();
}

fn bench_revoke_large_vote_list(c: &mut Criterion) {
    let validator = CeloValidator::default();
    let account = account(1_000);
    let tx = CeloTransaction {
        mode: CeloOperationMode::Revoke,
        amount: Decimal::from(50),
        recipient: GROUP.to_string(),
        fees: Some(Decimal::from(10)),
        use_all_amount: false,
        index: Some(999),
    };

    c.bench_function("celo_revoke_1000_votes", |b| {
        b.iter(|| black_box(validator.get_transaction_status(black_box(&account), black_box(&tx))))
    });
}

criterion_group!(
    benches,
    bench_send_validation,
    bench_use_all_amount_modes,
    bench_revoke_large_vote_list
);
criterion_main!(benches);
