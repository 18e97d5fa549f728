//! Composite key builders for the keyed entity store.
//!
//! Pool addresses are kept byte-exact as supplied upstream; user, token
//! and launcher addresses are lowercased so that differently-cased
//! observations of the same account collapse onto one record.

pub fn user_pool_key(user: &str, pool: &str, chain_id: u64) -> String {
    format!("{}_{}_{}", user.to_lowercase(), pool.to_lowercase(), chain_id)
}

pub fn launcher_pool_key(chain_id: u64, pool: &str) -> String {
    format!("{chain_id}-{pool}")
}

pub fn launcher_config_key(chain_id: u64, launcher: &str) -> String {
    format!("{}-{}", chain_id, launcher.to_lowercase())
}

pub fn token_id(address: &str, chain_id: u64) -> String {
    format!("{}-{}", address.to_lowercase(), chain_id)
}
