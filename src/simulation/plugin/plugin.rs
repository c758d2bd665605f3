use super::Engine;

/// Named behaviour installed into an engine through its event hooks
pub trait Plugin {
    fn name(&self) -> &'static str;
    fn install(&self, engine: &mut Engine);
}
