/// Data structures for Tab Grouper
use serde::{Deserialize, Serialize};

/// Identifier of a browser window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub i32);

/// Identifier of a browser tab, unique within the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub i32);

/// Handle for a visual tab group, handed out by the host.
///
/// The host signals failure with zero or a negative number, so only
/// positive values count as a real group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i32);

impl GroupId {
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Filter a host-returned raw value down to a usable group handle.
    pub fn from_host(raw: i32) -> Option<GroupId> {
        let id = GroupId(raw);
        id.is_valid().then_some(id)
    }
}

/// Snapshot of a browser tab as reported by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    #[serde(rename = "windowId")]
    pub window_id: WindowId,
    /// A freshly opened tab may not have committed a URL yet.
    pub url: Option<String>,
    pub title: String,
    pub pinned: bool,
    /// Positive when the tab already sits in a group, absent or -1 otherwise.
    #[serde(rename = "groupId")]
    pub group_id: Option<GroupId>,
}

impl TabInfo {
    pub fn new(
        id: TabId,
        window_id: WindowId,
        url: Option<String>,
        title: String,
        pinned: bool,
    ) -> TabInfo {
        TabInfo {
            id,
            window_id,
            url,
            title,
            pinned,
            group_id: None,
        }
    }

    /// The group this tab belongs to, if the host reports a usable one.
    pub fn valid_group_id(&self) -> Option<GroupId> {
        self.group_id.filter(|id| id.is_valid())
    }
}

/// Tab listing for one window, as delivered by the startup enumeration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowTabs {
    #[serde(rename = "windowId")]
    pub window_id: WindowId,
    pub tabs: Vec<TabInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_info_creation() {
        let tab = TabInfo::new(
            TabId(1),
            WindowId(7),
            Some("https://google.com".to_string()),
            "Google".to_string(),
            false,
        );

        assert_eq!(tab.id, TabId(1));
        assert_eq!(tab.window_id, WindowId(7));
        assert_eq!(tab.url.as_deref(), Some("https://google.com"));
        assert_eq!(tab.title, "Google");
        assert_eq!(tab.pinned, false);
        assert_eq!(tab.group_id, None);
    }

    #[test]
    fn test_group_id_validity() {
        assert!(GroupId(1).is_valid());
        assert!(GroupId(42).is_valid());
        assert!(!GroupId(0).is_valid());
        assert!(!GroupId(-1).is_valid());

        assert_eq!(GroupId::from_host(5), Some(GroupId(5)));
        assert_eq!(GroupId::from_host(0), None);
        assert_eq!(GroupId::from_host(-1), None);
    }

    #[test]
    fn test_valid_group_id_filters_sentinel() {
        let mut tab = TabInfo::new(TabId(1), WindowId(1), None, "New Tab".to_string(), false);
        assert_eq!(tab.valid_group_id(), None);

        // Chrome reports -1 for ungrouped tabs
        tab.group_id = Some(GroupId(-1));
        assert_eq!(tab.valid_group_id(), None);

        tab.group_id = Some(GroupId(12));
        assert_eq!(tab.valid_group_id(), Some(GroupId(12)));
    }

    #[test]
    fn test_serialization() {
        let listing = WindowTabs {
            window_id: WindowId(3),
            tabs: vec![TabInfo {
                id: TabId(10),
                window_id: WindowId(3),
                url: Some("https://github.com/rust-lang".to_string()),
                title: "GitHub".to_string(),
                pinned: false,
                group_id: Some(GroupId(2)),
            }],
        };

        let json = serde_json::to_string(&listing).unwrap();
        let deserialized: WindowTabs = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.window_id, WindowId(3));
        assert_eq!(deserialized.tabs.len(), 1);
        assert_eq!(deserialized.tabs[0].group_id, Some(GroupId(2)));
    }

    #[test]
    fn test_deserialize_host_shape() {
        // Field names as the chrome tabs API reports them
        let json = r#"{"id":5,"windowId":2,"url":"https://x.com/a","title":"X","pinned":false,"groupId":-1}"#;
        let tab: TabInfo = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, TabId(5));
        assert_eq!(tab.window_id, WindowId(2));
        assert_eq!(tab.valid_group_id(), None);
    }
}
