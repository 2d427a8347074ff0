/// Origin Index: which tabs belong to which origin, in which window.
///
/// Two maps, kept in lockstep:
/// - buckets: window → origin → tabs, in insertion order
/// - origins: window → tab → the origin it is currently bucketed under
///
/// The reverse map is what makes relocation cheap: when a tab navigates to
/// a different origin we look up where it used to live and evict it from
/// that bucket before re-inserting.
use std::collections::HashMap;

use crate::origin::tab_origin;
use crate::tab_data::{TabId, TabInfo, WindowId};

/// Tabs of one window, bucketed by origin
pub type OriginBuckets = HashMap<String, Vec<TabInfo>>;

#[derive(Debug, Default)]
pub struct OriginIndex {
    buckets: HashMap<WindowId, OriginBuckets>,
    origins: HashMap<WindowId, HashMap<TabId, String>>,
}

impl OriginIndex {
    pub fn new() -> OriginIndex {
        OriginIndex::default()
    }

    /// Insert a tab, or relocate it after a navigation.
    ///
    /// Pinned tabs and tabs without a resolvable URL are never indexed; the
    /// call is a no-op for them. With `is_relocation` the tab is first
    /// evicted from the bucket its reverse-index entry points at; a missing
    /// entry degrades to a plain insertion. Re-inserting a tab into the
    /// bucket it already occupies refreshes the stored snapshot in place
    /// instead of appending a duplicate.
    pub fn upsert(&mut self, window_id: WindowId, tab: &TabInfo, is_relocation: bool) {
        if tab.pinned {
            return;
        }
        let Some(origin) = tab_origin(tab.url.as_deref()) else {
            return;
        };

        let previous = self
            .origins
            .get(&window_id)
            .and_then(|by_tab| by_tab.get(&tab.id))
            .cloned();

        // Evict from the old bucket on relocation. A stale entry under a
        // different origin is evicted even without the flag, so a tab can
        // never occupy two buckets of the same window.
        if let Some(prev_origin) = previous {
            if is_relocation || prev_origin != origin {
                self.evict(window_id, tab.id, &prev_origin);
            }
        }

        let bucket = self
            .buckets
            .entry(window_id)
            .or_default()
            .entry(origin.clone())
            .or_default();
        match bucket.iter_mut().find(|t| t.id == tab.id) {
            Some(existing) => *existing = tab.clone(),
            None => bucket.push(tab.clone()),
        }

        self.origins
            .entry(window_id)
            .or_default()
            .insert(tab.id, origin);
    }

    /// Drop a closed tab from the index. Unknown windows and tabs are
    /// silent no-ops.
    pub fn remove(&mut self, window_id: WindowId, tab_id: TabId) {
        let Some(by_tab) = self.origins.get_mut(&window_id) else {
            return;
        };
        let Some(origin) = by_tab.remove(&tab_id) else {
            return;
        };

        if let Some(bucket) = self
            .buckets
            .get_mut(&window_id)
            .and_then(|buckets| buckets.get_mut(&origin))
        {
            bucket.retain(|tab| tab.id != tab_id);
        }
    }

    /// The origin buckets of a window, or `None` if it was never indexed.
    pub fn buckets_for_window(&self, window_id: WindowId) -> Option<&OriginBuckets> {
        self.buckets.get(&window_id)
    }

    /// The origin a tab is currently bucketed under.
    pub fn origin_of(&self, window_id: WindowId, tab_id: TabId) -> Option<&str> {
        self.origins
            .get(&window_id)
            .and_then(|by_tab| by_tab.get(&tab_id))
            .map(String::as_str)
    }

    fn evict(&mut self, window_id: WindowId, tab_id: TabId, origin: &str) {
        if let Some(bucket) = self
            .buckets
            .get_mut(&window_id)
            .and_then(|buckets| buckets.get_mut(origin))
        {
            bucket.retain(|tab| tab.id != tab_id);
        }
        if let Some(by_tab) = self.origins.get_mut(&window_id) {
            by_tab.remove(&tab_id);
        }
    }
}
