use serde::{Deserialize, Serialize};

/// JSON envelope returned by every row action endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionResult {
    pub success: bool,
    pub message: Option<String>,
    pub new_status: Option<NewStatus>,
    pub is_active: Option<bool>,
    pub is_approved: Option<bool>,
    pub status_corrected: Option<bool>,
    pub default_password: Option<String>,
}

/// Badge contents the server considers authoritative after a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStatus {
    pub class: String,
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ActionResult {
    /// Server message, ignoring empty strings.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }

    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message().unwrap_or(fallback)
    }

    pub fn was_corrected(&self) -> bool {
        self.status_corrected.unwrap_or(false)
    }
}

impl NewStatus {
    /// Badge for an approval state when the server did not send one.
    pub fn approval(approved: bool) -> Self {
        if approved {
            Self {
                class: "bg-success".to_string(),
                text: "Approved".to_string(),
                icon: Some("fa-check".to_string()),
            }
        } else {
            Self {
                class: "bg-warning text-dark".to_string(),
                text: "Pending".to_string(),
                icon: Some("fa-clock".to_string()),
            }
        }
    }
}
