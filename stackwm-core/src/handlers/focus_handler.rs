#![allow(clippy::wildcard_imports)]

use super::*;

impl<H: Handle> StackingEngine<H> {
    /// Send every fullscreen and brought-to-front window that does not hold
    /// the newly focused window back to its home band.
    ///
    /// A window whose home is the focused window's band is put directly below
    /// the focused window. Layer order still wins over focus: a window whose
    /// home band is above the focused window's band ends up on top of that
    /// home band, so it stays above the focused window.
    ///
    /// Each demotion is queued as soon as it is done, so every request is
    /// anchored on the order the backend has at the time it is applied.
    /// Returns true if anything was demoted.
    pub fn on_focus_change(&mut self, handle: &WindowHandle<H>) -> bool {
        if !self.demote_on_focus {
            return false;
        }
        let Some(focused) = self.tree.get(handle) else {
            tracing::debug!("Focused window {} is not stacked", handle);
            return false;
        };

        let demoted: Vec<NodeId> = [LayerGroup::Fullscreen, LayerGroup::BringToFront]
            .into_iter()
            .flat_map(|layer| self.tree.children(self.tree.root(layer)).to_vec())
            .filter(|&family| !self.tree.is_in_subtree(family, focused))
            .collect();
        if demoted.is_empty() {
            return false;
        }
        for &family in &demoted {
            match demote_work(self, family, focused) {
                Some(()) => self.queue_sync(&[family]),
                None => tracing::error!("Unable to demote node {:?}", family),
            }
        }
        tracing::debug!("Demoted {} window(s) on focus of {}", demoted.len(), handle);
        true
    }
}

fn demote_work<H: Handle>(
    engine: &mut StackingEngine<H>,
    family: NodeId,
    focused: NodeId,
) -> Option<()> {
    let home = engine.tree.home(family).unwrap_or(engine.default_layer);
    engine.tree.detach(family)?;
    let position = match engine.tree.top_level(focused) {
        Some(anchor) if engine.tree.layer_of(anchor) == Some(home) => {
            StackPosition::Index(engine.tree.position(anchor)?)
        }
        _ => StackPosition::Top,
    };
    let root = engine.tree.root(home);
    engine.tree.add_child(root, family, position)?;
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::display_servers::MockDisplayServer;
    use crate::models::MockHandle;
    use crate::Anchor;

    fn handles(ids: &[MockHandle]) -> Vec<WindowHandle<MockHandle>> {
        ids.iter().map(|&h| WindowHandle(h)).collect()
    }

    #[test]
    fn a_fullscreen_window_should_drop_below_the_focused_window() {
        let server = MockDisplayServer::default();
        let mut engine = StackingEngine::new_test();
        // F=1, G=2, H=3
        for h in [1, 2, 3] {
            engine.add_window(&server, WindowHandle(h));
        }
        engine.set_fullscreen(&WindowHandle(1), true);
        assert_eq!(engine.get_z_order(), handles(&[2, 3, 1]));
        engine.actions.clear();

        assert!(engine.on_focus_change(&WindowHandle(2)));
        assert_eq!(engine.layer_of(&WindowHandle(1)), Some(LayerGroup::Layout));
        assert_eq!(engine.get_z_order(), handles(&[1, 2, 3]));
        assert_eq!(engine.sibling_above(&WindowHandle(1)), Some(WindowHandle(2)));
        assert_eq!(engine.actions.len(), 1);
    }

    #[test]
    fn focusing_inside_the_elevated_family_should_keep_it() {
        let server = MockDisplayServer::default().transient(2, 1);
        let mut engine = StackingEngine::new_test();
        engine.add_window(&server, WindowHandle(1));
        engine.add_window(&server, WindowHandle(2));
        engine.add_window(&server, WindowHandle(3));
        engine.set_fullscreen(&WindowHandle(1), true);

        assert!(!engine.on_focus_change(&WindowHandle(1)));
        assert!(!engine.on_focus_change(&WindowHandle(2)));
        assert_eq!(engine.layer_of(&WindowHandle(1)), Some(LayerGroup::Fullscreen));
    }

    #[test]
    fn every_temporary_band_should_be_demoted() {
        let server = MockDisplayServer::default();
        let mut engine = StackingEngine::new_test();
        for h in [1, 2, 3, 4] {
            engine.add_window(&server, WindowHandle(h));
        }
        engine.set_fullscreen(&WindowHandle(1), true);
        engine.bring_to_front(&WindowHandle(2));
        engine.move_window_to_layer(&WindowHandle(4), LayerGroup::Top, StackPosition::Top);
        engine.actions.clear();

        assert!(engine.on_focus_change(&WindowHandle(4)));
        assert_eq!(engine.layer_of(&WindowHandle(1)), Some(LayerGroup::Layout));
        assert_eq!(engine.layer_of(&WindowHandle(2)), Some(LayerGroup::Layout));
        // The focused window sits in another band, so both go on top of home.
        assert_eq!(engine.get_z_order(), handles(&[3, 1, 2, 4]));
        assert_eq!(engine.actions.len(), 2);
    }

    #[test]
    fn each_demotion_should_be_anchored_on_the_order_before_the_next() {
        let server = MockDisplayServer::default();
        let mut engine = StackingEngine::new_test();
        for h in [1, 2, 3] {
            engine.add_window(&server, WindowHandle(h));
        }
        engine.set_fullscreen(&WindowHandle(1), true);
        engine.bring_to_front(&WindowHandle(2));
        engine.actions.clear();

        assert!(engine.on_focus_change(&WindowHandle(3)));
        assert_eq!(engine.get_z_order(), handles(&[1, 2, 3]));
        let requests: Vec<_> = engine.actions.drain(..).collect();
        assert_eq!(requests.len(), 2);
        // 2 is still brought to front when 1 comes down.
        assert_eq!(requests[0].windows, handles(&[1]));
        assert_eq!(requests[0].anchor, Anchor::Below(WindowHandle(3)));
        assert_eq!(requests[1].windows, handles(&[2]));
        assert_eq!(requests[1].anchor, Anchor::Above(WindowHandle(1)));
    }

    #[test]
    fn a_window_from_a_higher_home_should_stay_in_that_band() {
        let server = MockDisplayServer::default();
        let mut engine = StackingEngine::new_test();
        engine.add_window_at(&server, WindowHandle(1), LayerGroup::KeepAbove, StackPosition::Top);
        engine.add_window(&server, WindowHandle(2));
        engine.set_fullscreen(&WindowHandle(1), true);

        assert!(engine.on_focus_change(&WindowHandle(2)));
        assert_eq!(engine.layer_of(&WindowHandle(1)), Some(LayerGroup::KeepAbove));
        assert_eq!(engine.get_z_order(), handles(&[2, 1]));
    }

    #[test]
    fn demotion_should_be_skipped_when_disabled() {
        let config = Config {
            demote_on_focus: false,
            ..Config::default()
        };
        let server = MockDisplayServer::default();
        let mut engine = StackingEngine::<MockHandle>::new(&config);
        engine.add_window(&server, WindowHandle(1));
        engine.add_window(&server, WindowHandle(2));
        engine.set_fullscreen(&WindowHandle(1), true);
        assert!(!engine.on_focus_change(&WindowHandle(2)));
        assert_eq!(engine.layer_of(&WindowHandle(1)), Some(LayerGroup::Fullscreen));
    }

    #[test]
    fn focus_on_an_unknown_window_should_be_a_noop() {
        let server = MockDisplayServer::default();
        let mut engine = StackingEngine::new_test();
        engine.add_window(&server, WindowHandle(1));
        engine.set_fullscreen(&WindowHandle(1), true);
        engine.actions.clear();
        assert!(!engine.on_focus_change(&WindowHandle(8)));
        assert!(engine.actions.is_empty());
    }
}
