//! Replay scenarios over the full engine, driving every event family
//! through `AggregationEngine::replay` the way a decoder feed would.

use substreams::scalar::BigInt;
use superchain_velodrome::{
    identifiers::{launcher_config_key, launcher_pool_key, token_id, user_pool_key},
    models::EntityKind,
    prelude::*,
    testing::{
        fixtures::{address, meta_at, scaled},
        StaticPriceOracle,
    },
};

const CHAIN_ID: u64 = 10;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn event(src: &str, block: u64, log_index: u32, payload: EventType) -> InboundEvent {
    InboundEvent { meta: meta_at(CHAIN_ID, src, block, log_index), payload }
}

fn deposit(pool: &str, user: &str, block: u64, amount: BigInt) -> InboundEvent {
    event(
        pool,
        block,
        0,
        EventType::GaugeDeposit(GaugeDeposit { user: user.to_string(), amount }),
    )
}

fn withdraw(pool: &str, user: &str, block: u64, amount: BigInt) -> InboundEvent {
    event(
        pool,
        block,
        0,
        EventType::GaugeWithdraw(GaugeWithdraw { user: user.to_string(), amount }),
    )
}

fn pool_created(pool: &str, block: u64, is_stable: bool) -> InboundEvent {
    event(
        pool,
        block,
        0,
        EventType::PoolCreated(PoolCreated {
            token0: address(0xA0),
            token1: address(0xA1),
            is_stable,
        }),
    )
}

fn swap(pool: &str, user: &str, block: u64, usd: Option<BigInt>) -> InboundEvent {
    event(
        pool,
        block,
        0,
        EventType::Swap(Swap {
            user: user.to_string(),
            amount0: scaled(10),
            amount1: scaled(10).neg(),
            volume_usd: usd,
        }),
    )
}

#[test]
fn gauge_replay_balances_user_against_pool() {
    init_tracing();
    let pool = address(1);
    let user = address(2);
    let mut engine = AggregationEngine::default();

    let events = vec![
        pool_created(&pool, 99, false),
        deposit(&pool, &user, 100, scaled(100)),
        deposit(&pool, &user, 101, scaled(50)),
        withdraw(&pool, &user, 102, scaled(30)),
        event(
            &pool,
            103,
            0,
            EventType::GaugeRewardClaim(GaugeRewardClaim {
                user: user.clone(),
                amount: scaled(4),
            }),
        ),
    ];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();

    let stats = store
        .user_stats(&user_pool_key(&user, &pool, CHAIN_ID))
        .unwrap();
    let aggregator = store.pool_aggregator(&pool).unwrap();

    assert_eq!(stats.number_of_gauge_deposits, 2);
    assert_eq!(stats.number_of_gauge_withdrawals, 1);
    assert_eq!(stats.number_of_gauge_reward_claims, 1);
    assert_eq!(stats.current_liquidity_staked_usd, scaled(120));
    assert_eq!(stats.total_gauge_rewards_claimed_usd, scaled(4));
    // single actor: the pool mirrors the user exactly
    assert_eq!(aggregator.current_liquidity_staked_usd, stats.current_liquidity_staked_usd);
    assert_eq!(aggregator.number_of_gauge_deposits, 2);
    assert_eq!(aggregator.total_gauge_rewards_claimed_usd, scaled(4));
}

#[test]
fn zero_and_large_amounts_stay_exact() {
    let pool = address(1);
    let user = address(2);
    let mut engine = AggregationEngine::default();
    // 10^24 base units
    let huge = scaled(1_000_000);

    let events = vec![
        pool_created(&pool, 99, false),
        deposit(&pool, &user, 100, huge.clone()),
        deposit(&pool, &user, 101, BigInt::zero()),
        withdraw(&pool, &user, 102, scaled(1)),
    ];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();

    let stats = store
        .user_stats(&user_pool_key(&user, &pool, CHAIN_ID))
        .unwrap();
    assert_eq!(stats.number_of_gauge_deposits, 2);
    assert_eq!(stats.current_liquidity_staked_usd, huge - scaled(1));
}

#[test]
fn engine_applies_in_caller_order_without_repair() {
    init_tracing();
    let pool = address(1);
    let user = address(2);
    let mut engine = AggregationEngine::default();

    // the withdraw arrives before the deposit that would cover it
    let events = vec![
        pool_created(&pool, 99, false),
        withdraw(&pool, &user, 200, scaled(50)),
        deposit(&pool, &user, 100, scaled(50)),
    ];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();

    let stats = store
        .user_stats(&user_pool_key(&user, &pool, CHAIN_ID))
        .unwrap();
    // the early withdraw clamped at zero, the late deposit then landed
    assert_eq!(stats.current_liquidity_staked_usd, scaled(50));
    assert_eq!(stats.number_of_gauge_withdrawals, 1);
}

#[test]
fn launch_then_migrate_creates_exactly_two_lineage_records() {
    let launcher = address(9);
    let old_pool = address(1);
    let new_pool = address(5);
    let creator = "0xCrEaToR".to_string();
    let mut engine = AggregationEngine::default();

    let events = vec![
        event(
            &launcher,
            100,
            0,
            EventType::Launch(Launch {
                pool: old_pool.clone(),
                sender: creator.clone(),
                pool_launcher_token: address(3),
                pair_token: address(4),
            }),
        ),
        event(
            &launcher,
            110,
            0,
            EventType::Migrate(Migrate {
                underlying_pool: old_pool.clone(),
                locker: address(6),
                new_locker: address(7),
                pair_token: address(4),
                pool_launcher_token: address(3),
                new_pool: new_pool.clone(),
            }),
        ),
    ];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();

    assert_eq!(store.ids_of(EntityKind::PoolLauncherPool).len(), 2);
    let source = store
        .launcher_pool(&launcher_pool_key(CHAIN_ID, &old_pool))
        .unwrap();
    let destination = store
        .launcher_pool(&launcher_pool_key(CHAIN_ID, &new_pool))
        .unwrap();
    assert_eq!(source.migrated_to, Some(new_pool));
    assert_eq!(source.creator, creator.to_lowercase());
    assert_eq!(destination.creator, source.creator);
    assert_eq!(destination.migrated_from, Some(old_pool));
}

#[test]
fn migrate_without_launch_changes_nothing() {
    let launcher = address(9);
    let mut engine = AggregationEngine::default();
    let events = vec![event(
        &launcher,
        100,
        0,
        EventType::Migrate(Migrate {
            underlying_pool: address(1),
            locker: address(6),
            new_locker: address(7),
            pair_token: address(4),
            pool_launcher_token: address(3),
            new_pool: address(5),
        }),
    )];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn pairable_token_double_add_is_idempotent() {
    let launcher = address(9);
    let mut engine = AggregationEngine::default();
    let events = vec![
        event(
            &launcher,
            100,
            0,
            EventType::PairableTokenAdded(PairableTokenAdded { token: address(3) }),
        ),
        event(
            &launcher,
            101,
            0,
            EventType::PairableTokenAdded(PairableTokenAdded { token: address(3) }),
        ),
    ];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();
    let config = store
        .launcher_config(&launcher_config_key(CHAIN_ID, &launcher))
        .unwrap();
    assert_eq!(config.pairable_tokens, vec![address(3)]);
}

#[test]
fn launcher_rotation_keeps_the_old_config_readable() {
    let old_launcher = address(9);
    let new_launcher = address(10);
    let mut engine = AggregationEngine::default();
    let events = vec![
        event(
            &old_launcher,
            100,
            0,
            EventType::PairableTokenAdded(PairableTokenAdded { token: address(3) }),
        ),
        event(
            &old_launcher,
            101,
            0,
            EventType::NewPoolLauncherSet(NewPoolLauncherSet {
                new_launcher: new_launcher.clone(),
            }),
        ),
    ];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();

    let old = store
        .launcher_config(&launcher_config_key(CHAIN_ID, &old_launcher))
        .unwrap();
    let new = store
        .launcher_config(&launcher_config_key(CHAIN_ID, &new_launcher))
        .unwrap();
    assert_eq!(old.pairable_tokens, new.pairable_tokens);
}

#[test]
fn pool_creation_is_idempotent_under_replay() {
    let pool = address(1);
    let mut engine = AggregationEngine::default();
    let events = vec![pool_created(&pool, 100, true), pool_created(&pool, 101, false)];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();

    assert_eq!(store.ids_of(EntityKind::LiquidityPoolAggregator).len(), 1);
    assert!(store.pool_aggregator(&pool).unwrap().is_stable);
}

#[test]
fn swap_volume_sums_over_users_matches_the_pool() {
    let pool = address(1);
    let users = [address(2), address(3), address(4)];
    let mut engine = AggregationEngine::default();

    let mut events = vec![pool_created(&pool, 99, false)];
    for (index, user) in users.iter().enumerate() {
        events.push(swap(&pool, user, 100 + index as u64, Some(scaled(10 * (index as u64 + 1)))));
    }
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();

    let total: BigInt = users
        .iter()
        .map(|user| {
            store
                .user_stats(&user_pool_key(user, &pool, CHAIN_ID))
                .unwrap()
                .total_swap_volume_usd
                .clone()
        })
        .fold(BigInt::zero(), |acc, usd| acc + usd);
    let aggregator = store.pool_aggregator(&pool).unwrap();
    assert_eq!(total, aggregator.total_volume_usd);
    assert_eq!(aggregator.number_of_swaps, users.len() as u64);
}

#[test]
fn swap_usd_volume_comes_from_the_oracle_when_absent_from_the_event() {
    let pool = address(1);
    let user = address(2);
    let mut oracle = StaticPriceOracle::default();
    oracle.set_price(&token_id(&address(0xA0), CHAIN_ID), scaled(3));
    let mut engine = AggregationEngine::new(EngineSettings::default(), Box::new(oracle));

    let events = vec![pool_created(&pool, 99, false), swap(&pool, &user, 100, None)];
    let store = engine.replay(&events, StoreSnapshot::new()).unwrap();

    // 10 token0 at 3 USD
    assert_eq!(store.pool_aggregator(&pool).unwrap().total_volume_usd, scaled(30));
}

#[test]
fn vote_mirrors_stay_consistent_and_clamp_or_fault_on_overdraft() -> anyhow::Result<()> {
    let pool = address(1);
    let user = address(2);

    let voted = |settings: EngineSettings| -> Result<StoreSnapshot, AggregationError> {
        let mut engine = AggregationEngine::new(settings, Box::new(NoopOracle));
        engine.replay(
            &[
                pool_created(&pool, 99, false),
                event(
                    &pool,
                    100,
                    0,
                    EventType::VoteDeposited(VoteDeposited {
                        user: user.clone(),
                        votes: scaled(10),
                        votes_usd: scaled(20),
                    }),
                ),
                event(
                    &pool,
                    101,
                    0,
                    EventType::VoteWithdrawn(VoteWithdrawn {
                        user: user.clone(),
                        votes: scaled(25),
                    }),
                ),
            ],
            StoreSnapshot::new(),
        )
    };

    let store = voted(EngineSettings::from_json("{}")?)?;
    let stats = store
        .user_stats(&user_pool_key(&user, &pool, CHAIN_ID))
        .unwrap();
    let aggregator = store.pool_aggregator(&pool).unwrap();
    assert_eq!(stats.current_voting_power, BigInt::zero());
    assert_eq!(aggregator.current_voting_power, stats.current_voting_power);
    assert_eq!(aggregator.total_votes_deposited, scaled(10));

    let faulted = voted(EngineSettings::from_json(r#"{"invariant_policy":"fault"}"#)?);
    assert!(matches!(faulted, Err(AggregationError::NegativeBalance { .. })));
    Ok(())
}
