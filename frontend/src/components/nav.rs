use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::BRAND;
use crate::dom::WindowListener;
use crate::Route;

pub fn scrolled_past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let reader = window.clone();
                    let listener = WindowListener::new(&window, "scroll", move || {
                        let scroll_y = reader.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scrolled_past_threshold(scroll_y));
                    });
                    match listener {
                        Ok(listener) => {
                            // Page may load already scrolled (anchor links, restored position)
                            listener.trigger();
                            Some(listener)
                        }
                        Err(err) => {
                            warn!("Failed to attach scroll listener: {:?}", err);
                            None
                        }
                    }
                });

                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-mark">{"E"}</span>
                    <span class="nav-brand">{BRAND}</span>
                </Link<Route>>
                <a href="#contact" class="nav-cta">{"Get in Touch"}</a>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_solid_only_past_threshold() {
        assert!(!scrolled_past_threshold(0.0));
        assert!(!scrolled_past_threshold(config::NAV_SCROLL_THRESHOLD));
        assert!(scrolled_past_threshold(config::NAV_SCROLL_THRESHOLD + 1.0));
    }
}
