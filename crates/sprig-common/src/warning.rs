//! Compiler warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The scanner and tree builder use this to report text they recovered from
//! best-effort instead of raising errors.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about recovered-from input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Scanner", "dropped attribute token at position 42");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if record_warning(&key) {
        eprintln!("{YELLOW}[Sprig {component}] ⚠ {message}{RESET}");
    }
}

/// Record a warning key, returning `true` the first time it is seen.
fn record_warning(key: &str) -> bool {
    WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key.to_string())
}

/// Clear all recorded warnings (call when starting a new template)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
