use log::info;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::listener::Attached;
use crate::dom::page::{Page, PageElement};
use crate::observe::intersection::observe_once;
use crate::observe::one_shot::OnVisible;

pub const PENDING_CLASS: &str = "animate-on-scroll";
pub const ANIMATE_CLASS: &str = "animate";

pub const REVEAL_RULES: &str = r#"
.animate-on-scroll {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.animate-on-scroll.animate {
    opacity: 1;
    transform: translateY(0);
}
"#;

pub struct Reveal;

impl<E: PageElement> OnVisible<E> for Reveal {
    fn on_visible(&self, element: &E) {
        element.add_class(ANIMATE_CLASS);
    }
}

/// Installs the reveal rules and parks every card in its hidden state.
pub fn prepare<P: Page>(page: &P, selector: &str) -> Vec<P::Element> {
    page.install_global_style(REVEAL_RULES);

    let cards = page.query_all(selector);
    for card in &cards {
        card.add_class(PENDING_CLASS);
    }
    cards
}

pub fn attach<P>(
    page: &P,
    selector: &str,
    threshold: f64,
    root_margin: &str,
) -> Result<Attached, JsValue>
where
    P: Page<Element = Element>,
{
    let cards = prepare(page, selector);
    info!("Revealing {} cards on scroll", cards.len());

    let mut attached = Attached::default();
    attached.observe(observe_once(cards, threshold, root_margin, Reveal)?);
    Ok(attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::dom::fake::FakePage;
    use crate::observe::one_shot::OneShotWatcher;

    #[test]
    fn prepare_marks_every_card_pending() {
        let page = FakePage::new();
        let process = page.element("div").with_class("process-card");
        let cert = page.element("div").with_class("cert-card");
        let other = page.element("div").with_class("testimonial");

        let cards = prepare(&page, &SiteConfig::default().selectors.reveal_cards);

        assert_eq!(cards, vec![process.clone(), cert.clone()]);
        assert!(process.has_class(PENDING_CLASS) && cert.has_class(PENDING_CLASS));
        assert!(!other.has_class(PENDING_CLASS));
    }

    #[test]
    fn rules_are_installed_once_across_repeated_setup() {
        let page = FakePage::new();
        prepare(&page, ".process-card");
        prepare(&page, ".process-card");

        assert_eq!(page.stylesheets(), vec![REVEAL_RULES.to_string()]);
    }

    #[test]
    fn animate_marker_added_once_despite_flapping_visibility() {
        let page = FakePage::new();
        let card = page.element("div").with_class("exp-item");
        let mut watcher = OneShotWatcher::new(Reveal);
        for card in prepare(&page, ".exp-item") {
            watcher.watch(card);
        }

        let fired: Vec<bool> = [true, false, true, false, true]
            .into_iter()
            .map(|visible| watcher.notify(&card, visible))
            .collect();

        assert_eq!(fired, vec![true, false, false, false, false]);
        assert_eq!(card.classes(), vec!["exp-item", PENDING_CLASS, ANIMATE_CLASS]);
    }
}
