use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::carousel::{Action, Carousel, CarouselTiming, CarouselView, Effect, Timer};
use crate::content::Testimonial;

/// Pending timer handles, one slot per [`Timer`] kind.
///
/// Handles cancel themselves on drop (`gloo_timers::callback::Timeout`
/// clears its timeout), so replacing or emptying a slot is the cancel.
struct TimerSlots<H> {
    autoplay: Option<H>,
    fade: Option<H>,
}

impl<H> Default for TimerSlots<H> {
    fn default() -> Self {
        Self {
            autoplay: None,
            fade: None,
        }
    }
}

impl<H> TimerSlots<H> {
    fn slot(&mut self, timer: Timer) -> &mut Option<H> {
        match timer {
            Timer::Autoplay => &mut self.autoplay,
            Timer::Fade => &mut self.fade,
        }
    }

    fn arm(&mut self, timer: Timer, handle: H) {
        *self.slot(timer) = Some(handle);
    }

    fn cancel(&mut self, timer: Timer) {
        self.slot(timer).take();
    }

    /// Hand a firing timer its own handle back. The caller drops it once its
    /// callback is done, which frees the closure.
    fn release(&mut self, timer: Timer) -> Option<H> {
        self.slot(timer).take()
    }

    fn clear(&mut self) {
        self.autoplay = None;
        self.fade = None;
    }

    fn live(&self) -> usize {
        usize::from(self.autoplay.is_some()) + usize::from(self.fade.is_some())
    }
}

/// Carousel state plus the browser timers backing its effects.
struct Driver {
    carousel: Carousel<Testimonial>,
    timers: TimerSlots<Timeout>,
}

fn millis(after: std::time::Duration) -> u32 {
    u32::try_from(after.as_millis()).unwrap_or(u32::MAX)
}

fn dispatch(driver: &Rc<RefCell<Driver>>, view: &UseStateHandle<CarouselView>, action: Action) {
    debug!("Carousel action: {:?}", action);
    let effects = driver.borrow_mut().carousel.handle(action);

    for effect in effects {
        match effect {
            Effect::Arm { timer, after } => {
                let weak = Rc::downgrade(driver);
                let view = view.clone();
                let timeout = Timeout::new(millis(after), move || {
                    let Some(driver) = weak.upgrade() else { return };
                    // Out of the slot before the dispatch below can re-arm it; dropped on return.
                    let _fired = driver.borrow_mut().timers.release(timer);
                    dispatch(&driver, &view, Action::Elapsed(timer));
                });
                driver.borrow_mut().timers.arm(timer, timeout);
            }
            Effect::Cancel(timer) => driver.borrow_mut().timers.cancel(timer),
        }
    }

    let live = driver.borrow().timers.live();
    debug!("Carousel timers pending: {}", live);
    view.set(driver.borrow().carousel.view());
}

fn teardown(driver: &Rc<RefCell<Driver>>) {
    let mut driver = driver.borrow_mut();
    for effect in driver.carousel.handle(Action::Teardown) {
        if let Effect::Cancel(timer) = effect {
            driver.timers.cancel(timer);
        }
    }
    driver.timers.clear();
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: &'static [Testimonial],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let items = props.items;
    let driver = use_mut_ref(|| Driver {
        carousel: Carousel::new(items.to_vec(), CarouselTiming::default()),
        timers: TimerSlots::default(),
    });
    let view = use_state_eq(|| driver.borrow().carousel.view());
    let region = use_node_ref();

    {
        let driver = driver.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                dispatch(&driver, &view, Action::Start);
                move || teardown(&driver)
            },
            (),
        );
    }

    let send = {
        let driver = driver.clone();
        let view = view.clone();
        move |action: Action| dispatch(&driver, &view, action)
    };
    let send = Rc::new(send);

    let on_prev = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send(Action::Prev))
    };
    let on_next = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send(Action::Next))
    };
    let on_mouse_enter = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send(Action::PointerInside(true)))
    };
    let on_mouse_leave = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send(Action::PointerInside(false)))
    };
    let on_focus_in = {
        let send = send.clone();
        Callback::from(move |_: FocusEvent| send(Action::FocusInside(true)))
    };
    let on_focus_out = {
        let send = send.clone();
        let region = region.clone();
        Callback::from(move |e: FocusEvent| {
            // Moving focus between the carousel's own buttons is not leaving it.
            let staying = match (region.cast::<Node>(), e.related_target()) {
                (Some(region), Some(target)) => target
                    .dyn_into::<Node>()
                    .map(|node| region.contains(Some(&node)))
                    .unwrap_or(false),
                _ => false,
            };
            if !staying {
                send(Action::FocusInside(false));
            }
        })
    };

    let state = *view;
    let current = driver.borrow().carousel.current().copied();

    html! {
        <div
            ref={region}
            class={classes!("carousel", state.paused.then(|| "paused"))}
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            onfocusin={on_focus_in}
            onfocusout={on_focus_out}
        >
            {
                match current {
                    None => html! {
                        <div class="carousel-empty">{"Testimonials coming soon."}</div>
                    },
                    Some(testimonial) => html! {
                        <>
                            <div class={classes!("carousel-slide", state.is_visible().then(|| "visible"))}>
                                <div class="carousel-quote-mark">{"\u{201C}"}</div>
                                <p class="carousel-quote">{testimonial.quote}</p>
                                <div class="carousel-attribution">{format!("— {}", testimonial.attribution)}</div>
                            </div>
                            <div class="carousel-controls">
                                <button class="carousel-arrow" aria-label="Previous testimonial" onclick={on_prev}>
                                    {"‹"}
                                </button>
                                <div class="carousel-dots">
                                    {
                                        for (0..state.len).map(|index| {
                                            let send = send.clone();
                                            let onclick = Callback::from(move |_: MouseEvent| send(Action::GoTo(index)));
                                            html! {
                                                <button
                                                    key={index}
                                                    class={classes!("carousel-dot", (index == state.index).then(|| "active"))}
                                                    aria-label={format!("Show testimonial {}", index + 1)}
                                                    {onclick}
                                                />
                                            }
                                        })
                                    }
                                </div>
                                <button class="carousel-arrow" aria-label="Next testimonial" onclick={on_next}>
                                    {"›"}
                                </button>
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    /// Stand-in for `Timeout`: counts how many handles were freed.
    struct FakeTimeout {
        timer: Timer,
        freed: Rc<Cell<u32>>,
    }

    impl Drop for FakeTimeout {
        fn drop(&mut self) {
            self.freed.set(self.freed.get() + 1);
        }
    }

    /// Applies carousel effects to a slot table the way `dispatch` does.
    struct Host {
        carousel: Carousel<u32>,
        timers: TimerSlots<FakeTimeout>,
        armed: u32,
        freed: Rc<Cell<u32>>,
    }

    impl Host {
        fn new(len: u32) -> Self {
            Self {
                carousel: Carousel::new((0..len).collect(), CarouselTiming::default()),
                timers: TimerSlots::default(),
                armed: 0,
                freed: Rc::new(Cell::new(0)),
            }
        }

        fn send(&mut self, action: Action) {
            for effect in self.carousel.handle(action) {
                match effect {
                    Effect::Arm { timer, .. } => {
                        self.armed += 1;
                        let handle = FakeTimeout {
                            timer,
                            freed: self.freed.clone(),
                        };
                        self.timers.arm(timer, handle);
                    }
                    Effect::Cancel(timer) => self.timers.cancel(timer),
                }
            }
        }

        /// Fire whatever sits in `timer`'s slot, as the browser would.
        fn fire(&mut self, timer: Timer) {
            let fired = self.timers.release(timer);
            assert!(fired.as_ref().map_or(false, |h| h.timer == timer));
            self.send(Action::Elapsed(timer));
            drop(fired);
        }

        fn leaked(&self) -> u32 {
            self.armed - self.freed.get() - self.timers.live() as u32
        }
    }

    #[test]
    fn millis_converts_and_saturates() {
        assert_eq!(millis(Duration::from_millis(250)), 250);
        assert_eq!(millis(Duration::from_secs(6)), 6_000);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }

    #[test]
    fn fired_timers_are_freed_every_cycle() {
        let mut host = Host::new(3);
        host.send(Action::Start);
        for _ in 0..50 {
            host.fire(Timer::Autoplay);
            host.fire(Timer::Fade);
            host.fire(Timer::Fade);
            assert_eq!(host.leaked(), 0);
            assert!(host.timers.live() <= 2);
        }
        assert_eq!(host.carousel.current_index(), 50 % 3);
        // Three arms per cycle plus the first autoplay; only the next autoplay is pending.
        assert_eq!(host.armed, 151);
        assert_eq!(host.timers.live(), 1);
    }

    #[test]
    fn rearming_a_slot_frees_the_previous_handle() {
        let mut host = Host::new(4);
        host.send(Action::Start);
        host.send(Action::Next);
        host.send(Action::Next);
        assert_eq!(host.leaked(), 0);
        assert_eq!(host.timers.live(), 1);
        assert!(host.timers.fade.is_some());
        assert!(host.timers.autoplay.is_none());
    }

    #[test]
    fn teardown_frees_pending_handles() {
        let mut host = Host::new(3);
        host.send(Action::Start);
        host.send(Action::Next);
        host.send(Action::Teardown);
        host.timers.clear();
        assert_eq!(host.timers.live(), 0);
        assert_eq!(host.freed.get(), host.armed);
    }
}
