use super::{Timing, World};

/// Callback run around each engine step
pub type UpdateHook = Box<dyn FnMut(&mut World, &Timing)>;

/// Subscribers to the step lifecycle, called in registration order
#[derive(Default)]
pub struct Events {
    pub(super) before_update: Vec<UpdateHook>,
    pub(super) after_update: Vec<UpdateHook>,
}

impl Events {
    pub fn on_before_update(&mut self, hook: UpdateHook) {
        self.before_update.push(hook);
    }

    pub fn on_after_update(&mut self, hook: UpdateHook) {
        self.after_update.push(hook);
    }

    pub fn hook_count(&self) -> usize {
        self.before_update.len() + self.after_update.len()
    }
}
