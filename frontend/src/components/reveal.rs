use std::cell::Cell;

use log::warn;
use stylist::Style;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Content starts revealing once its top edge is this far inside the viewport.
const VIEWPORT_MARGIN: f64 = 100.0;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub children: Children,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

fn reveal_class(delay_ms: u32) -> String {
    let css = format!(
        r#"
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.5s ease-out {delay}ms, transform 0.5s ease-out {delay}ms;
        &.visible {{
            opacity: 1;
            transform: translateY(0);
        }}
        "#,
        delay = delay_ms
    );
    match Style::new(css.as_str()) {
        Ok(style) => style.get_class_name().to_string(),
        Err(e) => {
            warn!("Reveal style rejected: {}", e);
            String::new()
        }
    }
}

/// Flips once, the first time the element's top edge is far enough inside the viewport.
/// Later observations are ignored.
#[derive(Default)]
struct RevealLatch {
    revealed: Cell<bool>,
}

impl RevealLatch {
    /// True only for the observation that reveals.
    fn observe(&self, top: f64, viewport_height: f64) -> bool {
        if self.revealed.get() || top >= viewport_height - VIEWPORT_MARGIN {
            return false;
        }
        self.revealed.set(true);
        true
    }
}

/// Fades its children in the first time they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let class_name = use_memo(|delay_ms| reveal_class(*delay_ms), props.delay_ms);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let latch = RevealLatch::default();
                    let check = {
                        let window = window.clone();
                        move || {
                            if latch.revealed.get() {
                                return;
                            }
                            let Some(element) = node.cast::<Element>() else {
                                return;
                            };
                            let viewport = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            if latch.observe(element.get_bounding_client_rect().top(), viewport) {
                                visible.set(true);
                            }
                        }
                    };
                    check();

                    let callback = Closure::<dyn Fn()>::new(check);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!((*class_name).clone(), (*visible).then(|| "visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_reveals_once_past_the_margin() {
        let latch = RevealLatch::default();
        assert!(!latch.observe(700.0, 800.0));
        assert!(!latch.observe(650.0, 700.0));
        assert!(latch.observe(699.0, 800.0));
        assert!(!latch.observe(10.0, 800.0));
        assert!(!latch.observe(900.0, 800.0));
        assert!(latch.revealed.get());
    }
}
