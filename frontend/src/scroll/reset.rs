use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use super::smooth::{ScrollHandle, ScrollOptions};

/// What a location change does to the scroll position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteScroll {
    Top,
    /// Same-page anchor, kept with its leading `#`.
    Anchor(String),
}

/// Decides the scroll action for a location given its hash (`""` or `"#id"`).
pub fn route_scroll(hash: &str) -> RouteScroll {
    match hash.trim_start_matches('#') {
        "" => RouteScroll::Top,
        id => RouteScroll::Anchor(format!("#{id}")),
    }
}

pub fn apply_route_scroll(handle: &ScrollHandle, scroll: &RouteScroll) {
    match scroll {
        RouteScroll::Top => handle.scroll_to_top(),
        RouteScroll::Anchor(selector) => {
            debug!("route change to anchor {selector}");
            handle.scroll_to(selector.as_str(), ScrollOptions::SMOOTH);
        }
    }
}

/// Resets the scroll position whenever the router location changes, so one
/// page's offset never leaks into the next.
#[function_component(ScrollReset)]
pub fn scroll_reset() -> Html {
    let handle = use_context::<ScrollHandle>();
    let location = use_location();
    let (path, hash) = location
        .map(|l| (l.path().to_string(), l.hash().to_string()))
        .unwrap_or_default();

    use_effect_with_deps(
        move |(_, hash)| {
            let scroll = route_scroll(hash);
            match handle {
                Some(handle) => apply_route_scroll(&handle, &scroll),
                None => {
                    if let (RouteScroll::Top, Some(window)) = (&scroll, web_sys::window()) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
            }
            || ()
        },
        (path, hash),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::scroll::navigation::{Handoff, NavigationEvent, NavigationState};
    use crate::scroll::smooth::fake::FakePage;
    use crate::scroll::smooth::SmoothScrollConfig;

    #[test]
    fn hash_decides_the_scroll() {
        assert_eq!(route_scroll(""), RouteScroll::Top);
        assert_eq!(route_scroll("#"), RouteScroll::Top);
        assert_eq!(route_scroll("#faq"), RouteScroll::Anchor("#faq".into()));
    }

    #[test]
    fn moving_between_items_resets_scroll_and_handoff() {
        let page = Rc::new(FakePage::new(4000.0));
        let handle = ScrollHandle::new(page.clone());
        handle.initialize(SmoothScrollConfig::default());

        page.position.set(3500.0);
        let mut handoff = Handoff::new(true);
        assert_eq!(handoff.update(100.0), Some(NavigationEvent::Dispatch));
        handoff.schedule(());

        // `/project/a` -> `/project/b`, no hash
        apply_route_scroll(&handle, &route_scroll(""));
        handoff.enter(true);

        assert_eq!(page.position.get(), 0.0);
        assert!(!handoff.is_pending());
        assert_eq!(handoff.controller().state(), NavigationState::Rearmed);
        assert_eq!(handoff.controller().progress(), 0.0);
    }

    #[test]
    fn anchor_links_keep_their_target() {
        let page = Rc::new(FakePage::new(4000.0));
        page.anchors.borrow_mut().insert("#contact".into(), 3000.0);
        let handle = ScrollHandle::new(page.clone());
        handle.initialize(SmoothScrollConfig::default());
        page.position.set(1200.0);

        apply_route_scroll(&handle, &route_scroll("#contact"));
        // Not snapped to the top; the eased scroll heads for the anchor.
        assert_eq!(page.position.get(), 1200.0);
        for _ in 0..120 {
            handle.tick(1.0 / 60.0);
        }
        assert_eq!(page.position.get(), 3000.0);
    }
}
