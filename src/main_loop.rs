use piston_window::{CloseEvent, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Quit,
}

impl Signal {
    pub fn from_event(event: &Event) -> Option<Signal> {
        event.close_args().map(|_| Signal::Quit)
    }
}

/// Tracks the run state and how many frames have been presented.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        FrameLoop {
            state: LoopState::Running,
            frames: 0,
        }
    }
}

impl FrameLoop {
    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// `Quit` is terminal.
    pub fn observe(&mut self, signal: Signal) -> LoopState {
        match (self.state, signal) {
            (LoopState::Running, Signal::Quit) => {
                tracing::info!(frames = self.frames, "quit requested");
                self.state = LoopState::Quit;
            }
            (LoopState::Quit, _) => {}
        }
        self.state
    }

    pub fn frame_presented(&mut self) {
        if self.is_running() {
            self.frames += 1;
        }
    }
}
