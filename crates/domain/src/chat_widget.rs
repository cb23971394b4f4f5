//! Display options for the third-party chat widget.

use serde::{Deserialize, Serialize};

/// Options handed verbatim to the widget's `init` call.
///
/// Field names serialize in the camelCase form the widget script expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatWidgetOptions {
    /// Id of the container element the widget mounts into.
    pub selector: String,
    /// Phone number the chat channel routes to.
    pub number: String,
    /// Pre-filled greeting.
    pub message: String,
    pub color: String,
    pub channel: String,
    pub box_shadow: String,
    pub text: String,
    pub theme: String,
    /// Screen side the launcher sits on (`left` or `right`).
    pub position: String,
    /// Bottom margin (CSS length).
    pub mb: String,
    /// Horizontal margin (CSS length).
    pub mx: String,
    pub radius: String,
}

impl Default for ChatWidgetOptions {
    fn default() -> Self {
        Self {
            selector: "myAliceWebChat".to_string(),
            number: "50687798110".to_string(),
            message: String::new(),
            color: "#25D366".to_string(),
            channel: "wa".to_string(),
            box_shadow: "medium".to_string(),
            text: String::new(),
            theme: "light".to_string(),
            position: "left".to_string(),
            mb: "110px".to_string(),
            mx: "20px".to_string(),
            radius: "20px".to_string(),
        }
    }
}
