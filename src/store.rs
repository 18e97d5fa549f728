//! Copy-on-write keyed entity store.
//!
//! A `StoreSnapshot` is an immutable view of the materialized entities.
//! `set` returns a new snapshot and leaves the receiver untouched, so a
//! caller can branch from any point, compare alternative outcomes, or
//! keep a pre-transition view alive while the engine moves on. There is
//! no delete: entities only ever gain newer snapshots.

use std::collections::HashMap;

use itertools::Itertools;

use crate::models::{
    Entity, EntityKind, LiquidityPoolAggregator, PoolLauncherConfig, PoolLauncherPool, Token,
    UserStatsPerPool,
};

#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    entities: HashMap<(EntityKind, String), Entity>,
}

impl StoreSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absence is a first-observation signal, never an error.
    pub fn get(&self, kind: EntityKind, id: &str) -> Option<&Entity> {
        self.entities.get(&(kind, id.to_string()))
    }

    /// Returns a new snapshot with `entity` written at its id. The
    /// current snapshot stays valid.
    pub fn set(&self, entity: Entity) -> StoreSnapshot {
        self.set_all(vec![entity])
    }

    /// Returns a new snapshot with every entity written. Later entries
    /// win on id collision.
    pub fn set_all(&self, entities: Vec<Entity>) -> StoreSnapshot {
        let mut next = self.entities.clone();
        for entity in entities {
            next.insert((entity.kind(), entity.id().to_string()), entity);
        }
        StoreSnapshot { entities: next }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Sorted ids of every entity of one kind.
    pub fn ids_of(&self, kind: EntityKind) -> Vec<String> {
        self.entities
            .keys()
            .filter(|(k, _)| *k == kind)
            .map(|(_, id)| id.clone())
            .sorted()
            .collect()
    }

    pub fn token(&self, id: &str) -> Option<&Token> {
        match self.get(EntityKind::Token, id) {
            Some(Entity::Token(token)) => Some(token),
            _ => None,
        }
    }

    pub fn pool_aggregator(&self, id: &str) -> Option<&LiquidityPoolAggregator> {
        match self.get(EntityKind::LiquidityPoolAggregator, id) {
            Some(Entity::LiquidityPoolAggregator(aggregator)) => Some(aggregator),
            _ => None,
        }
    }

    pub fn user_stats(&self, id: &str) -> Option<&UserStatsPerPool> {
        match self.get(EntityKind::UserStatsPerPool, id) {
            Some(Entity::UserStatsPerPool(stats)) => Some(stats),
            _ => None,
        }
    }

    pub fn launcher_pool(&self, id: &str) -> Option<&PoolLauncherPool> {
        match self.get(EntityKind::PoolLauncherPool, id) {
            Some(Entity::PoolLauncherPool(pool)) => Some(pool),
            _ => None,
        }
    }

    pub fn launcher_config(&self, id: &str) -> Option<&PoolLauncherConfig> {
        match self.get(EntityKind::PoolLauncherConfig, id) {
            Some(Entity::PoolLauncherConfig(config)) => Some(config),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_a_new_snapshot_and_keeps_the_old_one() {
        let empty = StoreSnapshot::new();
        let with_token = empty.set(Entity::Token(Token::new("0xAA", 10, 1_700_000_000)));

        assert!(empty.is_empty());
        assert_eq!(with_token.len(), 1);
        assert!(with_token.token("0xaa-10").is_some());
        assert!(empty.token("0xaa-10").is_none());
    }

    #[test]
    fn set_overwrites_by_kind_and_id() {
        let store = StoreSnapshot::new();
        let mut token = Token::new("0xAA", 10, 1);
        let store = store.set(Entity::Token(token.clone()));
        token.is_whitelisted = true;
        let store = store.set(Entity::Token(token));

        assert_eq!(store.len(), 1);
        assert!(store.token("0xaa-10").unwrap().is_whitelisted);
    }

    #[test]
    fn typed_accessors_do_not_cross_kinds() {
        let store = StoreSnapshot::new().set(Entity::Token(Token::new("0xAA", 10, 1)));
        assert!(store.pool_aggregator("0xaa-10").is_none());
    }

    #[test]
    fn ids_of_returns_sorted_ids_for_one_kind() {
        let store = StoreSnapshot::new()
            .set(Entity::Token(Token::new("0xBB", 10, 1)))
            .set(Entity::Token(Token::new("0xAA", 10, 1)));
        assert_eq!(store.ids_of(EntityKind::Token), vec!["0xaa-10", "0xbb-10"]);
        assert!(store.ids_of(EntityKind::UserStatsPerPool).is_empty());
    }
}
