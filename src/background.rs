/// Background engine: feeds tab lifecycle events into the Origin Index and
/// dispatches the resulting grouping plans to the host.
///
/// Events are handled to completion one at a time (the wasm world is
/// single-threaded), so index mutations never interleave. The host commands
/// a plan produces are detached tasks: one per origin bucket, no ordering
/// guarantee between them, and nothing waits for their completion.
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::bridge;
use crate::index::OriginIndex;
use crate::policy::{GroupPlan, plan_window};
use crate::tab_data::{TabId, TabInfo, WindowId};

#[wasm_bindgen]
pub struct Grouper {
    index: Rc<RefCell<OriginIndex>>,
}

#[wasm_bindgen]
impl Grouper {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Grouper {
        Grouper {
            index: Rc::new(RefCell::new(OriginIndex::new())),
        }
    }

    /// Rebuild the index from scratch by enumerating every open window,
    /// then evaluate each of them once. Called once at startup, before the
    /// event listeners start forwarding.
    pub fn init(&self) {
        let index = self.index.clone();
        spawn_local(async move {
            let windows = match bridge::enumerate_windows().await {
                Ok(windows) => windows,
                Err(e) => {
                    log::warn!("Startup enumeration failed: {}", e);
                    return;
                }
            };

            log::info!("Indexing {} window(s) at startup", windows.len());
            for window in windows {
                for tab in &window.tabs {
                    index.borrow_mut().upsert(window.window_id, tab, false);
                }
                let plans = plan_window(&index.borrow(), window.window_id, None);
                dispatch_plans(window.window_id, plans);
            }
        });
    }

    /// A tab was opened.
    #[wasm_bindgen(js_name = onTabCreated)]
    pub fn on_tab_created(&self, tab: JsValue) {
        let Some(tab) = parse_tab(tab) else { return };
        let window_id = tab.window_id;

        self.index.borrow_mut().upsert(window_id, &tab, false);
        let plans = plan_window(&self.index.borrow(), window_id, None);
        dispatch_plans(window_id, plans);
    }

    /// A tab committed a different URL. The JS listener only forwards
    /// updates whose changeInfo carries a url, so every call here is a
    /// relocation candidate.
    #[wasm_bindgen(js_name = onTabUrlChanged)]
    pub fn on_tab_url_changed(&self, tab: JsValue) {
        let Some(tab) = parse_tab(tab) else { return };
        let window_id = tab.window_id;

        self.index.borrow_mut().upsert(window_id, &tab, true);
        let plans = plan_window(&self.index.borrow(), window_id, Some(&tab));
        dispatch_plans(window_id, plans);
    }

    /// A tab was closed. Unknown windows and tabs are no-ops, and removal
    /// never triggers an evaluation.
    #[wasm_bindgen(js_name = onTabRemoved)]
    pub fn on_tab_removed(&self, tab_id: i32, window_id: i32) {
        self.index
            .borrow_mut()
            .remove(WindowId(window_id), TabId(tab_id));
    }
}

impl Default for Grouper {
    fn default() -> Self {
        Grouper::new()
    }
}

fn parse_tab(tab: JsValue) -> Option<TabInfo> {
    match serde_wasm_bindgen::from_value(tab) {
        Ok(tab) => Some(tab),
        Err(e) => {
            log::warn!("Dropping unparseable tab event: {:?}", e);
            None
        }
    }
}

/// Launch one detached assign-then-title task per plan. Failures are
/// logged and swallowed: a rejected grouping only means the title update
/// is skipped, never a retry.
fn dispatch_plans(window_id: WindowId, plans: Vec<GroupPlan>) {
    for plan in plans {
        log::info!(
            "Grouping {} tab(s) for {} in window {} (reuse: {:?})",
            plan.tab_ids.len(),
            plan.origin,
            window_id.0,
            plan.existing_group_id,
        );
        spawn_local(apply_plan(plan));
    }
}

async fn apply_plan(plan: GroupPlan) {
    let group_id = match bridge::group_tabs(&plan.tab_ids, plan.existing_group_id).await {
        Ok(Some(group_id)) => group_id,
        Ok(None) => {
            log::warn!("Host rejected grouping for {}; skipping title", plan.origin);
            return;
        }
        Err(e) => {
            log::warn!("{}", e);
            return;
        }
    };

    if let Err(e) = bridge::set_group_title(group_id, &plan.title).await {
        log::warn!("{}", e);
    } else {
        log::info!("Titled group {} as {:?}", group_id.0, plan.title);
    }
}
