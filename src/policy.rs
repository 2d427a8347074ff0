/// Grouping policy: decide which origin buckets get grouped or re-titled.
use crate::index::OriginIndex;
use crate::origin::tab_origin;
use crate::tab_data::{GroupId, TabId, TabInfo, WindowId};

/// An origin needs this many tabs in one window before it gets a group.
pub const GROUPING_THRESHOLD: usize = 3;

/// One grouping command toward the host: put `tab_ids` into a group
/// (reusing `existing_group_id` when set), then title the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlan {
    pub origin: String,
    pub tab_ids: Vec<TabId>,
    /// Group to reuse, taken from the first member that already carries a
    /// valid group id. Absent means the host creates a fresh group.
    pub existing_group_id: Option<GroupId>,
    /// Title for the group: the first bucket member's tab title, captured
    /// at evaluation time. Re-titling on every qualifying evaluation is
    /// accepted; last write wins.
    pub title: String,
}

/// Evaluate one window's buckets after an index mutation.
///
/// `triggering_tab` is the tab whose navigation caused the evaluation, if
/// any. Its job is damage control: a bucket that is already grouped is left
/// alone when the change happened on some other origin, so one navigation
/// cannot re-touch every grouping in the window. Buckets below the
/// threshold never produce a plan, and nothing here ever ungroups.
pub fn plan_window(
    index: &OriginIndex,
    window_id: WindowId,
    triggering_tab: Option<&TabInfo>,
) -> Vec<GroupPlan> {
    let Some(buckets) = index.buckets_for_window(window_id) else {
        return Vec::new();
    };

    let trigger_origin = match triggering_tab {
        // a triggering tab without a resolvable URL aborts the evaluation
        Some(tab) => match tab_origin(tab.url.as_deref()) {
            Some(origin) => Some(origin),
            None => return Vec::new(),
        },
        None => None,
    };

    let mut plans = Vec::new();
    for (origin, tabs) in buckets {
        let existing_group_id = tabs.iter().find_map(|tab| tab.valid_group_id());

        if existing_group_id.is_some() {
            if let Some(trigger) = &trigger_origin {
                if trigger != origin {
                    continue;
                }
            }
        }

        if tabs.len() < GROUPING_THRESHOLD {
            continue;
        }

        plans.push(GroupPlan {
            origin: origin.clone(),
            tab_ids: tabs.iter().map(|tab| tab.id).collect(),
            existing_group_id,
            title: tabs[0].title.clone(),
        });
    }
    plans
}
