//! Entity snapshots held by the store.
//!
//! Every entity is an immutable value snapshot; transitions clone the
//! current snapshot, adjust the copy and hand it back to the store. All
//! USD and token amounts are non-negative `BigInt` scaled to 18
//! decimals.

use substreams::scalar::BigInt;

use crate::identifiers;

/// Block coordinates attached to every inbound event. `timestamp` is
/// epoch seconds and is the canonical clock for every `*_at` and `*_ts`
/// field written by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMeta {
    pub number: u64,
    pub timestamp: u64,
    pub hash: String,
}

/// Envelope metadata of a decoded on-chain event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMeta {
    pub chain_id: u64,
    pub src_address: String,
    pub block: BlockMeta,
    pub log_index: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: String,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub chain_id: u64,
    pub decimals: u32,
    pub price_per_usd: BigInt,
    pub last_updated_ts: u64,
    pub is_whitelisted: bool,
}

impl Token {
    /// A token as first observed on-chain: no metadata, no price.
    pub fn new(address: &str, chain_id: u64, observed_at: u64) -> Self {
        Self {
            id: identifiers::token_id(address, chain_id),
            address: address.to_lowercase(),
            symbol: String::new(),
            name: String::new(),
            chain_id,
            decimals: 18,
            price_per_usd: BigInt::zero(),
            last_updated_ts: observed_at,
            is_whitelisted: false,
        }
    }
}

/// Running totals for one liquidity pool.
///
/// Counters only ever grow; the `current_*` balances and reserves move
/// both ways but are never stored negative.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityPoolAggregator {
    /// Pool address, byte-exact as supplied upstream.
    pub id: String,
    pub chain_id: u64,
    pub token0: String,
    pub token1: String,
    pub is_stable: bool,
    pub total_volume0: BigInt,
    pub total_volume1: BigInt,
    pub total_volume_usd: BigInt,
    pub total_fees_usd: BigInt,
    pub number_of_swaps: u64,
    pub total_flash_loan_volume_usd: BigInt,
    pub number_of_flash_loans: u64,
    pub number_of_gauge_deposits: u64,
    pub number_of_gauge_withdrawals: u64,
    pub number_of_gauge_reward_claims: u64,
    pub current_liquidity_staked_usd: BigInt,
    pub total_gauge_rewards_claimed_usd: BigInt,
    pub total_votes_deposited: BigInt,
    pub total_votes_deposited_usd: BigInt,
    pub current_voting_power: BigInt,
    pub number_of_votes: u64,
    pub reserve0: BigInt,
    pub reserve1: BigInt,
    pub pool_launcher_pool_id: Option<String>,
    pub last_updated_ts: u64,
}

impl LiquidityPoolAggregator {
    pub fn new(
        pool: &str,
        chain_id: u64,
        token0: String,
        token1: String,
        is_stable: bool,
        created_at: u64,
    ) -> Self {
        Self {
            id: pool.to_string(),
            chain_id,
            token0,
            token1,
            is_stable,
            total_volume0: BigInt::zero(),
            total_volume1: BigInt::zero(),
            total_volume_usd: BigInt::zero(),
            total_fees_usd: BigInt::zero(),
            number_of_swaps: 0,
            total_flash_loan_volume_usd: BigInt::zero(),
            number_of_flash_loans: 0,
            number_of_gauge_deposits: 0,
            number_of_gauge_withdrawals: 0,
            number_of_gauge_reward_claims: 0,
            current_liquidity_staked_usd: BigInt::zero(),
            total_gauge_rewards_claimed_usd: BigInt::zero(),
            total_votes_deposited: BigInt::zero(),
            total_votes_deposited_usd: BigInt::zero(),
            current_voting_power: BigInt::zero(),
            number_of_votes: 0,
            reserve0: BigInt::zero(),
            reserve1: BigInt::zero(),
            pool_launcher_pool_id: None,
            last_updated_ts: created_at,
        }
    }
}

/// Per-user mirror of the delta-contributing pool counters.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStatsPerPool {
    pub id: String,
    pub user: String,
    pub pool: String,
    pub chain_id: u64,
    pub number_of_gauge_deposits: u64,
    pub number_of_gauge_withdrawals: u64,
    pub number_of_gauge_reward_claims: u64,
    pub current_liquidity_staked_usd: BigInt,
    pub total_gauge_rewards_claimed_usd: BigInt,
    pub number_of_swaps: u64,
    pub total_swap_volume_usd: BigInt,
    pub number_of_flash_loans: u64,
    pub total_flash_loan_volume_usd: BigInt,
    pub total_votes_deposited: BigInt,
    pub total_votes_deposited_usd: BigInt,
    pub current_voting_power: BigInt,
    pub number_of_votes: u64,
    pub last_activity_ts: u64,
}

impl UserStatsPerPool {
    pub fn new(user: &str, pool: &str, chain_id: u64) -> Self {
        Self {
            id: identifiers::user_pool_key(user, pool, chain_id),
            user: user.to_lowercase(),
            pool: pool.to_lowercase(),
            chain_id,
            number_of_gauge_deposits: 0,
            number_of_gauge_withdrawals: 0,
            number_of_gauge_reward_claims: 0,
            current_liquidity_staked_usd: BigInt::zero(),
            total_gauge_rewards_claimed_usd: BigInt::zero(),
            number_of_swaps: 0,
            total_swap_volume_usd: BigInt::zero(),
            number_of_flash_loans: 0,
            total_flash_loan_volume_usd: BigInt::zero(),
            total_votes_deposited: BigInt::zero(),
            total_votes_deposited_usd: BigInt::zero(),
            current_voting_power: BigInt::zero(),
            number_of_votes: 0,
            last_activity_ts: 0,
        }
    }
}

/// Lineage record for a pool created through a pool launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolLauncherPool {
    pub id: String,
    pub chain_id: u64,
    /// Underlying pool address, byte-exact as supplied upstream.
    pub pool: String,
    pub launcher: String,
    pub creator: String,
    pub pool_launcher_token: String,
    pub pair_token: String,
    pub is_emerging: bool,
    pub created_at: u64,
    pub last_migrated_at: Option<u64>,
    pub migrated_from: Option<String>,
    pub migrated_to: Option<String>,
    pub old_locker: Option<String>,
    pub new_locker: Option<String>,
    pub last_flag_update_at: Option<u64>,
}

/// Per-launcher configuration: a version tag plus the ordered,
/// duplicate-free list of tokens the launcher may pair against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolLauncherConfig {
    pub id: String,
    pub chain_id: u64,
    pub launcher: String,
    pub version: String,
    pub pairable_tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Token,
    LiquidityPoolAggregator,
    UserStatsPerPool,
    PoolLauncherPool,
    PoolLauncherConfig,
}

/// Tagged union over every entity the store can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Token(Token),
    LiquidityPoolAggregator(LiquidityPoolAggregator),
    UserStatsPerPool(UserStatsPerPool),
    PoolLauncherPool(PoolLauncherPool),
    PoolLauncherConfig(PoolLauncherConfig),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Token(_) => EntityKind::Token,
            Entity::LiquidityPoolAggregator(_) => EntityKind::LiquidityPoolAggregator,
            Entity::UserStatsPerPool(_) => EntityKind::UserStatsPerPool,
            Entity::PoolLauncherPool(_) => EntityKind::PoolLauncherPool,
            Entity::PoolLauncherConfig(_) => EntityKind::PoolLauncherConfig,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entity::Token(e) => &e.id,
            Entity::LiquidityPoolAggregator(e) => &e.id,
            Entity::UserStatsPerPool(e) => &e.id,
            Entity::PoolLauncherPool(e) => &e.id,
            Entity::PoolLauncherConfig(e) => &e.id,
        }
    }
}
