//! Tag-based invalidation for cached profile data. Mutating endpoint wrappers
//! bump the version after a successful call; readers that track the version
//! refetch on their next access. The cache holds no data itself, only the
//! staleness counter.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProfileCache {
    version: RwSignal<u64>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self {
            version: RwSignal::new(0),
        }
    }

    /// Marks previously fetched profile data as stale.
    pub fn invalidate(self) {
        self.version.update(|version| *version = version.wrapping_add(1));
    }

    /// Reactive read; resources that call this re-run whenever the tag is
    /// invalidated.
    pub fn version(self) -> u64 {
        self.version.get()
    }
}

/// Provides the cache once at the application root.
pub fn provide_profile_cache() {
    provide_context(ProfileCache::new());
}

/// Returns the shared cache or a detached fallback outside the app tree.
pub fn use_profile_cache() -> ProfileCache {
    use_context::<ProfileCache>().unwrap_or_else(ProfileCache::new)
}
