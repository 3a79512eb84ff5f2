use board_logging::{board_error, board_info, board_warn};
use jobboard_client::KeyValueStore;
use jobboard_core::{JobId, UserProfile};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) const BOOKMARKS_KEY: &str = "bookmarkedJobs";
pub(crate) const PROFILE_KEY: &str = "userProfile";

/// Reads `key` as JSON, falling back to `default` when it is missing,
/// unreadable or malformed. Never fails.
fn load_or_default<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default(),
        Err(err) => {
            board_warn!("Failed to read persisted {}: {}", key, err);
            return default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            board_info!("Loaded persisted {}", key);
            value
        }
        Err(err) => {
            board_warn!("Ignoring malformed persisted {}: {}", key, err);
            default()
        }
    }
}

fn save<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let content = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            board_error!("Failed to serialize {}: {}", key, err);
            return;
        }
    };
    if let Err(err) = store.set(key, &content) {
        board_error!("Failed to persist {}: {}", key, err);
    }
}

pub(crate) fn load_bookmarks(store: &dyn KeyValueStore) -> Vec<JobId> {
    load_or_default(store, BOOKMARKS_KEY, Vec::new)
}

pub(crate) fn save_bookmarks(store: &dyn KeyValueStore, bookmarks: &[JobId]) {
    save(store, BOOKMARKS_KEY, bookmarks);
}

pub(crate) fn load_profile(store: &dyn KeyValueStore) -> UserProfile {
    load_or_default(store, PROFILE_KEY, UserProfile::default)
}

pub(crate) fn save_profile(store: &dyn KeyValueStore, profile: &UserProfile) {
    save(store, PROFILE_KEY, profile);
}
