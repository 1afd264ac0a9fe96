//! Document lifecycle as seen by a late-starting module.
//!
//! The WASM module is instantiated asynchronously, so the window `load` event
//! has often fired before [`crate::start`] runs. Work tied to `load` must
//! check `document.readyState` and run at once when loading is complete.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse the DOM string; unknown values are treated as still loading.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "complete" => Self::Complete,
            "interactive" => Self::Interactive,
            _ => Self::Loading,
        }
    }

    /// Whether the window `load` event has already been dispatched.
    #[must_use]
    pub fn load_fired(self) -> bool {
        self == Self::Complete
    }
}

/// How to run work that belongs to the window `load` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadHook {
    /// `load` already fired; run now.
    RunNow,
    /// Wait for the `load` listener.
    OnLoad,
}

impl From<ReadyState> for LoadHook {
    fn from(state: ReadyState) -> Self {
        if state.load_fired() { Self::RunNow } else { Self::OnLoad }
    }
}
