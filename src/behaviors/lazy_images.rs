use log::info;
use wasm_bindgen::JsValue;

use crate::dom::browser::BrowserPage;
use crate::dom::listener::Attached;
use crate::dom::page::{Page, PageElement};
use crate::observe::intersection::observe_once;
use crate::observe::one_shot::OnVisible;

pub const DEFERRED_SOURCE: &str = "data-src";
pub const LOADED_CLASS: &str = "loaded";

/// Swaps the deferred source into `src`. Images without one are left alone.
pub struct LazyLoad;

impl<E: PageElement> OnVisible<E> for LazyLoad {
    fn on_visible(&self, image: &E) {
        let Some(src) = image.attribute(DEFERRED_SOURCE).filter(|src| !src.is_empty()) else {
            return;
        };
        image.set_attribute("src", &src);
        image.add_class(LOADED_CLASS);
    }
}

/// Resolves every deferred source straight away.
pub fn load_all<E: PageElement>(images: &[E]) {
    for image in images {
        LazyLoad.on_visible(image);
    }
}

/// Without intersection observation every image is loaded eagerly. Returns
/// true when that fallback was taken.
pub fn eager_fallback<P: Page>(page: &P, images: &[P::Element]) -> bool {
    if page.supports_intersection_observer() {
        return false;
    }
    load_all(images);
    true
}

pub fn attach(
    page: &BrowserPage,
    selector: &str,
    threshold: f64,
    root_margin: &str,
) -> Result<Attached, JsValue> {
    let images = page.query_all(selector);
    let mut attached = Attached::default();

    if eager_fallback(page, &images) {
        info!("IntersectionObserver unavailable, loaded {} images eagerly", images.len());
        return Ok(attached);
    }

    info!("Deferring {} images until visible", images.len());
    attached.observe(observe_once(images, threshold, root_margin, LazyLoad)?);
    Ok(attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeElement, FakePage};
    use crate::observe::one_shot::OneShotWatcher;

    fn lazy_image(page: &FakePage, src: &str) -> FakeElement {
        page.element("img")
            .with_class("lazy-image")
            .with_attribute(DEFERRED_SOURCE, src)
    }

    #[test]
    fn visible_image_gets_source_once() {
        let page = FakePage::new();
        let image = lazy_image(&page, "images/hull.jpeg");
        let mut watcher = OneShotWatcher::new(LazyLoad);
        watcher.watch(image.clone());

        assert!(watcher.notify(&image, true));
        image.set_attribute("src", "replaced-by-page");
        assert!(!watcher.notify(&image, false));
        assert!(!watcher.notify(&image, true));

        assert_eq!(image.attribute("src").as_deref(), Some("replaced-by-page"));
        assert!(image.has_class(LOADED_CLASS));
    }

    #[test]
    fn image_without_deferred_source_is_untouched() {
        let page = FakePage::new();
        let image = page.element("img").with_class("lazy-image");
        let empty = lazy_image(&page, "");

        load_all(&[image.clone(), empty.clone()]);

        assert_eq!(image.attribute("src"), None);
        assert_eq!(empty.attribute("src"), None);
        assert!(!image.has_class(LOADED_CLASS) && !empty.has_class(LOADED_CLASS));
    }

    #[test]
    fn fallback_loads_everything_immediately() {
        let page = FakePage::new().without_intersection_observer();
        let first = lazy_image(&page, "images/deck.jpeg");
        let second = lazy_image(&page, "images/engine.jpeg");

        let images = page.query_all(".lazy-image");
        assert!(eager_fallback(&page, &images));

        assert_eq!(first.attribute("src").as_deref(), Some("images/deck.jpeg"));
        assert_eq!(second.attribute("src").as_deref(), Some("images/engine.jpeg"));
        assert!(first.has_class(LOADED_CLASS) && second.has_class(LOADED_CLASS));
    }

    #[test]
    fn observer_support_defers_loading() {
        let page = FakePage::new();
        let image = lazy_image(&page, "images/deck.jpeg");

        assert!(!eager_fallback(&page, &[image.clone()]));
        assert_eq!(image.attribute("src"), None);
    }
}
