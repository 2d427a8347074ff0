/// JS bridge to the chrome.* APIs used by the background page.
///
/// The extern functions live in background.js next to the event listeners;
/// everything crossing the boundary goes through serde-wasm-bindgen, and
/// every failure comes back as a JsValue we turn into a plain String for
/// logging.
use wasm_bindgen::prelude::*;

use crate::tab_data::{GroupId, TabId, WindowTabs};

#[wasm_bindgen(module = "/background.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getAllWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn groupTabs(tab_ids: JsValue, group_id: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setGroupTitle(group_id: i32, title: &str) -> Result<(), JsValue>;
}

/// Startup enumeration: every window with its current (unfiltered) tabs.
pub async fn enumerate_windows() -> Result<Vec<WindowTabs>, String> {
    let windows_js = getAllWindowTabs()
        .await
        .map_err(|e| format!("Failed to enumerate windows: {:?}", e))?;

    serde_wasm_bindgen::from_value(windows_js)
        .map_err(|e| format!("Failed to parse window listing: {:?}", e))
}

/// Ask the host to put `tab_ids` into a group, reusing `existing_group_id`
/// when set. The host answers with a group id; anything non-positive means
/// the grouping was rejected and is reported as `Ok(None)`, not an error.
pub async fn group_tabs(
    tab_ids: &[TabId],
    existing_group_id: Option<GroupId>,
) -> Result<Option<GroupId>, String> {
    let tab_ids_js = serde_wasm_bindgen::to_value(tab_ids)
        .map_err(|e| format!("Failed to serialize tab ids: {:?}", e))?;
    let group_id_js = match existing_group_id {
        Some(id) => JsValue::from(id.0),
        None => JsValue::UNDEFINED,
    };

    let returned = groupTabs(tab_ids_js, group_id_js)
        .await
        .map_err(|e| format!("Group request failed: {:?}", e))?;

    Ok(returned
        .as_f64()
        .and_then(|raw| GroupId::from_host(raw as i32)))
}

/// Fire-and-forget title update for a confirmed group.
pub async fn set_group_title(group_id: GroupId, title: &str) -> Result<(), String> {
    setGroupTitle(group_id.0, title)
        .await
        .map_err(|e| format!("Title update failed: {:?}", e))
}
