use crate::{
    config::EngineSettings,
    errors::AggregationError,
    identifiers,
    models::{EventMeta, UserStatsPerPool},
    oracle::PriceOracle,
    store::StoreSnapshot,
};

pub mod creation_timestamp_set;
pub mod emerging_flagged;
pub mod emerging_unflagged;
pub mod flash_loan;
pub mod gauge_deposit;
pub mod gauge_reward_claim;
pub mod gauge_withdraw;
pub mod launch;
pub mod migrate;
pub mod new_pool_launcher_set;
pub mod pairable_token_added;
pub mod pairable_token_removed;
pub mod pool_created;
pub mod swap;
pub mod sync;
pub mod token_price_refresh;
pub mod vote_deposited;
pub mod vote_withdrawn;

pub use creation_timestamp_set::CreationTimestampSet;
pub use emerging_flagged::EmergingFlagged;
pub use emerging_unflagged::EmergingUnflagged;
pub use flash_loan::FlashLoan;
pub use gauge_deposit::GaugeDeposit;
pub use gauge_reward_claim::GaugeRewardClaim;
pub use gauge_withdraw::GaugeWithdraw;
pub use launch::Launch;
pub use migrate::Migrate;
pub use new_pool_launcher_set::NewPoolLauncherSet;
pub use pairable_token_added::PairableTokenAdded;
pub use pairable_token_removed::PairableTokenRemoved;
pub use pool_created::PoolCreated;
pub use swap::Swap;
pub use sync::Sync;
pub use token_price_refresh::TokenPriceRefresh;
pub use vote_deposited::VoteDeposited;
pub use vote_withdrawn::VoteWithdrawn;

/// Everything a transition may read besides the event payload itself.
pub struct TransitionContext<'a> {
    pub meta: &'a EventMeta,
    pub settings: &'a EngineSettings,
    pub oracle: &'a dyn PriceOracle,
}

/// A trait for folding one decoded event into the entity store.
pub trait Transition {
    /// Applies the event to `store` and returns the next snapshot.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Event envelope, engine settings and the price oracle.
    /// * `store` - The snapshot to fold the event into. Never mutated;
    ///   a no-op returns an unchanged clone.
    ///
    /// # Returns
    ///
    /// The next store snapshot, or an `AggregationError` when a balance
    /// invariant is violated under the `Fault` policy.
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError>;
}

/// Represents every event the aggregation engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum EventType {
    GaugeDeposit(GaugeDeposit),
    GaugeWithdraw(GaugeWithdraw),
    GaugeRewardClaim(GaugeRewardClaim),
    Launch(Launch),
    Migrate(Migrate),
    EmergingFlagged(EmergingFlagged),
    EmergingUnflagged(EmergingUnflagged),
    CreationTimestampSet(CreationTimestampSet),
    PairableTokenAdded(PairableTokenAdded),
    PairableTokenRemoved(PairableTokenRemoved),
    NewPoolLauncherSet(NewPoolLauncherSet),
    PoolCreated(PoolCreated),
    Sync(Sync),
    Swap(Swap),
    FlashLoan(FlashLoan),
    VoteDeposited(VoteDeposited),
    VoteWithdrawn(VoteWithdrawn),
    TokenPriceRefresh(TokenPriceRefresh),
}

impl EventType {
    fn as_transition(&self) -> &dyn Transition {
        match self {
            EventType::GaugeDeposit(e) => e,
            EventType::GaugeWithdraw(e) => e,
            EventType::GaugeRewardClaim(e) => e,
            EventType::Launch(e) => e,
            EventType::Migrate(e) => e,
            EventType::EmergingFlagged(e) => e,
            EventType::EmergingUnflagged(e) => e,
            EventType::CreationTimestampSet(e) => e,
            EventType::PairableTokenAdded(e) => e,
            EventType::PairableTokenRemoved(e) => e,
            EventType::NewPoolLauncherSet(e) => e,
            EventType::PoolCreated(e) => e,
            EventType::Sync(e) => e,
            EventType::Swap(e) => e,
            EventType::FlashLoan(e) => e,
            EventType::VoteDeposited(e) => e,
            EventType::VoteWithdrawn(e) => e,
            EventType::TokenPriceRefresh(e) => e,
        }
    }

    /// Applies the event through its transition handler.
    pub fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        self.as_transition().apply(ctx, store)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventType::GaugeDeposit(_) => "GaugeDeposit",
            EventType::GaugeWithdraw(_) => "GaugeWithdraw",
            EventType::GaugeRewardClaim(_) => "GaugeRewardClaim",
            EventType::Launch(_) => "Launch",
            EventType::Migrate(_) => "Migrate",
            EventType::EmergingFlagged(_) => "EmergingFlagged",
            EventType::EmergingUnflagged(_) => "EmergingUnflagged",
            EventType::CreationTimestampSet(_) => "CreationTimestampSet",
            EventType::PairableTokenAdded(_) => "PairableTokenAdded",
            EventType::PairableTokenRemoved(_) => "PairableTokenRemoved",
            EventType::NewPoolLauncherSet(_) => "NewPoolLauncherSet",
            EventType::PoolCreated(_) => "PoolCreated",
            EventType::Sync(_) => "Sync",
            EventType::Swap(_) => "Swap",
            EventType::FlashLoan(_) => "FlashLoan",
            EventType::VoteDeposited(_) => "VoteDeposited",
            EventType::VoteWithdrawn(_) => "VoteWithdrawn",
            EventType::TokenPriceRefresh(_) => "TokenPriceRefresh",
        }
    }
}

/// Current user stats for the event source pool, created zeroed on
/// first observation of the (user, pool) pair.
pub(crate) fn user_stats_for_event(
    store: &StoreSnapshot,
    ctx: &TransitionContext,
    user: &str,
) -> UserStatsPerPool {
    let key = identifiers::user_pool_key(user, &ctx.meta.src_address, ctx.meta.chain_id);
    store
        .user_stats(&key)
        .cloned()
        .unwrap_or_else(|| UserStatsPerPool::new(user, &ctx.meta.src_address, ctx.meta.chain_id))
}
