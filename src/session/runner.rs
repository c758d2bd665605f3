/// Run/stop switches for the step and render loops
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Runner {
    stepping: bool,
    rendering: bool,
}

impl Runner {
    /// Returns false if both loops were already running
    pub fn start(&mut self) -> bool {
        let was_running = self.stepping && self.rendering;
        self.stepping = true;
        self.rendering = true;
        !was_running
    }

    pub fn stop(&mut self) {
        self.stepping = false;
        self.rendering = false;
    }

    pub fn is_stepping(&self) -> bool {
        self.stepping
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    pub fn is_running(&self) -> bool {
        self.stepping || self.rendering
    }
}
