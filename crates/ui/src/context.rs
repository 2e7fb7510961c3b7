use std::sync::Arc;

use quiz_core::model::GameRules;

pub trait UiApp: Send + Sync {
    fn rules(&self) -> GameRules;
    fn sigil_labels(&self) -> Vec<String>;
    fn autoplay_audio(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    rules: GameRules,
    sigil_labels: Vec<String>,
    autoplay_audio: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            rules: app.rules(),
            sigil_labels: app.sigil_labels(),
            autoplay_audio: app.autoplay_audio(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// The configured answer pool, validated at game start.
    #[must_use]
    pub fn sigil_labels(&self) -> Vec<String> {
        self.sigil_labels.clone()
    }

    #[must_use]
    pub fn autoplay_audio(&self) -> bool {
        self.autoplay_audio
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
