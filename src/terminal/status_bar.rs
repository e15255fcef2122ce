//! Status bar showing the recording state at the bottom of the screen.

use crate::router::{RecordingState, StreamId, STREAM_COUNT};

const KEY_HELP: &str = "1-4 record | s stop | q quit";

/// Status bar for the bottom row.
///
/// Shows: recording state | per-stream frame counts | camera state | keys
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// Whether the status bar is visible
    pub visible: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::with_visibility(true)
    }
}

impl StatusBar {
    /// Create a status bar with the specified visibility.
    pub fn with_visibility(visible: bool) -> Self {
        Self { visible }
    }

    /// Format the status text.
    ///
    /// Format: " REC 2 | 1:0 2:37 3:0 4:0 | cam:on | keys "
    pub fn format(
        &self,
        state: RecordingState,
        lens: [usize; STREAM_COUNT],
        camera_running: bool,
    ) -> String {
        let mode = match state {
            RecordingState::Armed(id) => format!("REC {}", id),
            RecordingState::Idle => "PLAY".to_string(),
        };
        let counts = StreamId::ALL
            .iter()
            .map(|id| format!("{}:{}", id, lens[id.index()]))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            " {} | {} | {} | {} ",
            mode,
            counts,
            if camera_running { "cam:on" } else { "cam:stopped" },
            KEY_HELP,
        )
    }
}
