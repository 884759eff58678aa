use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Normal,
    Elevated,
    High,
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Normal => "normal",
            AlertLevel::Elevated => "elevated",
            AlertLevel::High => "high",
            AlertLevel::Critical => "critical",
        }
    }
}

/// One burn-rate alert for the window bucket that was evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnRateAlert {
    pub level: AlertLevel,
    pub burn_rate: f64,
    /// Nominal window label, e.g. "1h", "6h", "24h".
    pub window: String,
    /// The burn-rate threshold that was crossed.
    pub threshold: f64,
    pub message: String,
    pub should_page: bool,
    pub runbook_url: Option<String>,
}

impl BurnRateAlert {
    pub fn with_runbook(mut self, url: impl Into<String>) -> Self {
        self.runbook_url = Some(url.into());
        self
    }

    /// JSON body for a generic webhook notification channel.
    pub fn webhook_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "level": self.level.as_str(),
            "burn_rate": self.burn_rate,
            "window": self.window,
            "threshold": self.threshold,
            "should_page": self.should_page,
            "runbook_url": self.runbook_url,
            "message": self.message,
        })
    }

    /// JSON body for a Slack notification channel.
    pub fn slack_payload(&self) -> serde_json::Value {
        serde_json::json!({ "text": self.message })
    }
}
