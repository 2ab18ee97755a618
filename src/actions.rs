//! One-shot host actions outside the dialogue flow.
//!
//! Menu buttons and similar widgets forward straight to the host with no
//! engine state involved. A missing optional target degrades to a logged
//! warning rather than an error; these run inside a live session.

use crate::host::PresentationHost;

/// Thin forwarding layer for one-shot UI actions.
pub struct HostActions<'a> {
    host: &'a mut dyn PresentationHost,
}

impl<'a> HostActions<'a> {
    pub fn new(host: &'a mut dyn PresentationHost) -> Self {
        Self { host }
    }

    pub fn open_link(&mut self, url: &str) {
        self.host.open_url(url);
    }

    pub fn change_scene(&mut self, name: &str) {
        self.host.load_scene(name);
    }

    pub fn quit_game(&mut self) {
        self.host.quit_application();
    }

    /// Flip the host's toggle target, if one is assigned.
    pub fn toggle_object(&mut self) {
        if !self.host.toggle_target_visibility() {
            log::warn!("toggle target is not assigned, skipping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;

    #[test]
    fn toggle_without_target_does_not_panic() {
        let mut host = NullHost;
        let mut actions = HostActions::new(&mut host);
        actions.toggle_object();
        actions.open_link("https://example.com");
        actions.change_scene("Menu");
        actions.quit_game();
    }
}
