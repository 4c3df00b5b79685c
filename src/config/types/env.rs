//! Environment lookup.
//!
//! The loader never reads `std::env` directly; it goes through [`Env`]
//! so tests and callers can supply a fixed set of variables.

use rustc_hash::FxHashMap;

/// Variable holding the site's base path.
pub const BASE_ENV_VAR: &str = "VUEPRESS_BASE";

/// Read-only view of environment variables.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Env for FxHashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lookup() {
        let mut env = FxHashMap::default();
        env.insert(BASE_ENV_VAR.to_string(), "/docs/".to_string());
        assert_eq!(env.var(BASE_ENV_VAR).as_deref(), Some("/docs/"));
        assert_eq!(env.var("HOME"), None);
        assert_eq!((&env).var(BASE_ENV_VAR).as_deref(), Some("/docs/"));
    }
}
