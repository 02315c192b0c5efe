use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::dom::ViewportObserver;
use crate::reveal::{Reveal, RevealController};

/// Tracks whether `node` has scrolled into view at least once.
///
/// The observer is dropped as soon as the latch fires, and in any case when
/// the owning component unmounts.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> Reveal {
    let reveal = use_state_eq(|| Reveal::Hidden);

    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |(node, threshold)| {
                let controller = Rc::new(RefCell::new(RevealController::new(*threshold)));

                match node.cast::<Element>() {
                    Some(element) => {
                        let weak = Rc::downgrade(&controller);
                        let setter = reveal.clone();
                        let subscription = ViewportObserver::observe(&element, *threshold, move |intersecting, ratio| {
                            let Some(controller) = weak.upgrade() else { return };
                            let revealed = controller.borrow_mut().on_intersection(intersecting, ratio);
                            if revealed {
                                setter.set(Reveal::Shown);
                            }
                        });
                        match subscription {
                            Ok(subscription) => controller.borrow_mut().attach(subscription),
                            Err(err) => {
                                warn!("IntersectionObserver unavailable, showing content unanimated: {:?}", err);
                                controller.borrow_mut().mark_unsupported();
                                reveal.set(Reveal::Static);
                            }
                        }
                    }
                    None => debug!("Reveal target not mounted yet, skipping observation"),
                }

                move || controller.borrow_mut().detach()
            },
            (node, threshold),
        );
    }

    *reveal
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds to wait before the entrance transition starts.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let reveal = use_in_view(node.clone(), props.threshold);

    html! {
        <div ref={node} class={props.class.clone()} style={fade_style(reveal, props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

pub fn fade_style(reveal: Reveal, delay: f64) -> String {
    let transition = format!(
        "transition: opacity 0.7s ease {:.2}s, transform 0.7s ease {:.2}s;",
        delay, delay
    );
    match reveal {
        Reveal::Hidden => format!("opacity: 0; transform: translateY(28px); {}", transition),
        Reveal::Shown => format!("opacity: 1; transform: translateY(0); {}", transition),
        Reveal::Static => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_blocks_sit_below_and_transparent() {
        let style = fade_style(Reveal::Hidden, 0.0);
        assert!(style.starts_with("opacity: 0; transform: translateY(28px);"));
    }

    #[test]
    fn shown_blocks_keep_their_stagger_delay() {
        let style = fade_style(Reveal::Shown, 0.15 + 2.0 * 0.1);
        assert!(style.contains("opacity: 1; transform: translateY(0);"));
        assert!(style.contains("opacity 0.7s ease 0.35s"));
    }

    #[test]
    fn static_blocks_get_no_inline_style() {
        assert!(fade_style(Reveal::Static, 0.3).is_empty());
    }
}
