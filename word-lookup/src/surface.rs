use crate::render::{Renderer, Screen};

/// The panel a lookup writes its result into. Every call replaces what was shown before.
pub trait OutputSurface: Send + Sync {
    fn replace(&self, screen: Screen);
}

pub struct TerminalSurface {
    renderer: Box<dyn Renderer>,
}

impl TerminalSurface {
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self { renderer }
    }
}

impl OutputSurface for TerminalSurface {
    fn replace(&self, screen: Screen) {
        println!("{}", self.renderer.render(&screen));
    }
}
