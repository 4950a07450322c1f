use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;

use super::observer::{reveal_id, tagged_descendants, VisibilityObserver};
use super::viewport_size;
use crate::motion::{
    Bounds, IntersectionReport, MoveOutcome, NavSection, NonEmptyPhrases, Offset, Point,
    PointerParallax, RevealSet, RevealThreshold, ScrollHeader, ScrollMetrics, TypingConfig,
    TypingMarquee,
};
use crate::telemetry::{log_event, LogLevel};

#[derive(Clone, Default, PartialEq)]
pub struct RevealState {
    revealed: RevealSet<String>,
}

impl RevealState {
    pub fn contains(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

pub struct RevealBatch {
    reports: Vec<IntersectionReport<String>>,
    threshold: f64,
}

impl Reducible for RevealState {
    type Action = RevealBatch;

    fn reduce(self: Rc<Self>, batch: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.revealed.absorb(batch.reports, batch.threshold) == 0 {
            return self;
        }
        Rc::new(next)
    }
}

#[hook]
pub fn use_reveal(container: NodeRef, threshold: RevealThreshold) -> UseReducerHandle<RevealState> {
    let state = use_reducer(RevealState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(container, move |container| {
            let observer = container.cast::<Element>().and_then(|root| {
                let (width, _) = viewport_size();
                let resolved = threshold.resolve(width);
                log_event(
                    LogLevel::Debug,
                    "reveal_threshold_selected",
                    json!({ "viewportWidth": width, "threshold": resolved }),
                );

                let observer = VisibilityObserver::new(resolved, reveal_id, move |reports| {
                    dispatcher.dispatch(RevealBatch {
                        reports,
                        threshold: resolved,
                    });
                })?;

                for element in tagged_descendants(&root) {
                    observer.observe(&element);
                }
                Some(observer)
            });

            move || drop(observer)
        });
    }

    state
}

impl Reducible for TypingMarquee {
    type Action = ();

    fn reduce(self: Rc<Self>, _tick: ()) -> Rc<Self> {
        let mut next = (*self).clone();
        next.tick();
        Rc::new(next)
    }
}

// With `animate` off the first phrase is shown in full and no timer runs.
#[hook]
pub fn use_typing_marquee(phrases: NonEmptyPhrases, config: TypingConfig, animate: bool) -> String {
    let still = phrases.first().to_string();
    let marquee = use_reducer(move || TypingMarquee::new(phrases, config));

    {
        let dispatcher = marquee.dispatcher();
        let delay = marquee.delay_ms();
        let step = (
            marquee.phrase_index(),
            marquee.displayed_len(),
            marquee.is_deleting(),
        );

        use_effect_with((step, animate), move |(_, animate)| {
            let timeout = match (*animate, delay) {
                (false, _) => None,
                (true, 0) => {
                    dispatcher.dispatch(());
                    None
                }
                (true, delay) => Some(Timeout::new(delay, move || dispatcher.dispatch(()))),
            };

            move || drop(timeout)
        });
    }

    if animate {
        marquee.displayed().to_string()
    } else {
        still
    }
}

pub enum ScrollAction {
    Scrolled(ScrollMetrics),
    SectionsObserved(Vec<IntersectionReport<NavSection>>),
}

impl Reducible for ScrollHeader {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ScrollAction::Scrolled(metrics) => next.on_scroll(metrics),
            ScrollAction::SectionsObserved(reports) => match next.on_section_reports(reports) {
                Some(section) => log_event(
                    LogLevel::Debug,
                    "active_section_changed",
                    json!({ "section": section.id() }),
                ),
                None => return self,
            },
        }

        Rc::new(next)
    }
}

fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let win = window()?;
    let root = win.document()?.document_element()?;

    Some(ScrollMetrics {
        scroll_y: win.scroll_y().unwrap_or(0.0),
        document_height: f64::from(root.scroll_height()),
        viewport_height: f64::from(root.client_height()),
    })
}

fn observe_nav_sections(
    threshold: f64,
    dispatcher: UseReducerDispatcher<ScrollHeader>,
) -> Option<VisibilityObserver> {
    let document = window()?.document()?;
    let observer = VisibilityObserver::new(
        threshold,
        |element: &Element| NavSection::from_id(&element.id()),
        move |reports| dispatcher.dispatch(ScrollAction::SectionsObserved(reports)),
    )?;

    for section in NavSection::ALL {
        match document.get_element_by_id(section.id()) {
            Some(element) => observer.observe(&element),
            None => log_event(
                LogLevel::Warn,
                "section_missing",
                json!({ "section": section.id() }),
            ),
        }
    }

    Some(observer)
}

#[hook]
pub fn use_scroll_header(hide_threshold_px: f64, section_threshold: f64) -> UseReducerHandle<ScrollHeader> {
    let header = use_reducer(move || ScrollHeader::new(hide_threshold_px));

    {
        let dispatcher = header.dispatcher();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let dispatcher = dispatcher.clone();
                EventListener::new(&win, "scroll", move |_event: &Event| {
                    if let Some(metrics) = read_scroll_metrics() {
                        dispatcher.dispatch(ScrollAction::Scrolled(metrics));
                    }
                })
            });
            let observer = observe_nav_sections(section_threshold, dispatcher);

            move || {
                drop(listener);
                drop(observer);
            }
        });
    }

    header
}

#[derive(Clone, Copy, PartialEq)]
pub struct ParallaxOptions {
    pub threshold: f64,
    pub divisor: f64,
    pub enabled: bool,
}

pub struct ParallaxBinding {
    pub offset: Offset,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn publish_parallax(
    machine: &RefCell<PointerParallax>,
    frame: &FrameSlot,
    offset: &UseStateHandle<Offset>,
    active: &UseStateHandle<bool>,
) {
    let machine = machine.borrow();
    if !machine.has_pending_frame() {
        frame.borrow_mut().take();
    }
    offset.set(machine.offset());
    active.set(machine.is_active());
}

fn element_bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

#[hook]
pub fn use_pointer_parallax(node: NodeRef, options: ParallaxOptions) -> ParallaxBinding {
    let machine = use_mut_ref(move || PointerParallax::new(options.divisor));
    let frame: FrameSlot = use_mut_ref(|| None);
    let offset = use_state_eq(|| Offset::ORIGIN);
    let active = use_state_eq(|| false);

    {
        let machine = machine.clone();
        let frame = frame.clone();
        let offset = offset.clone();
        let active = active.clone();
        use_effect_with(node.clone(), move |node| {
            let observer = node.cast::<Element>().and_then(|element| {
                let observer = VisibilityObserver::new(
                    options.threshold,
                    |_: &Element| Some(()),
                    move |reports: Vec<IntersectionReport<()>>| {
                        machine.borrow_mut().on_visibility_reports(reports);
                        publish_parallax(&machine, &frame, &offset, &active);
                    },
                )?;
                observer.observe(&element);
                Some(observer)
            });

            move || drop(observer)
        });
    }

    {
        let machine = machine.clone();
        let frame = frame.clone();
        let offset = offset.clone();
        use_effect_with(*active, move |active| {
            let listener = window().filter(|_| *active).map(|win| {
                let frame = frame.clone();
                EventListener::new(&win, "mousemove", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };

                    let pointer = Point {
                        x: f64::from(event.client_x()),
                        y: f64::from(event.client_y()),
                    };
                    let outcome = machine.borrow_mut().pointer_moved(pointer, element_bounds(&element));

                    match outcome {
                        MoveOutcome::Inactive | MoveOutcome::Queued { request_frame: false } => {}
                        MoveOutcome::Snapped => {
                            frame.borrow_mut().take();
                            offset.set(Offset::ORIGIN);
                        }
                        MoveOutcome::Queued { request_frame: true } => {
                            let machine = machine.clone();
                            let slot = frame.clone();
                            let offset = offset.clone();
                            let handle = request_animation_frame(move |_timestamp| {
                                slot.borrow_mut().take();
                                let mut machine = machine.borrow_mut();
                                if machine.frame() {
                                    offset.set(machine.offset());
                                }
                            });
                            *frame.borrow_mut() = Some(handle);
                        }
                    }
                })
            });

            move || {
                drop(listener);
                frame.borrow_mut().take();
            }
        });
    }

    let onmouseenter = {
        let machine = machine.clone();
        let frame = frame.clone();
        let offset = offset.clone();
        let active = active.clone();
        Callback::from(move |_event: MouseEvent| {
            if !options.enabled {
                return;
            }
            machine.borrow_mut().pointer_enter();
            publish_parallax(&machine, &frame, &offset, &active);
        })
    };

    let onmouseleave = {
        let machine = machine.clone();
        let frame = frame.clone();
        let offset = offset.clone();
        let active = active.clone();
        Callback::from(move |_event: MouseEvent| {
            machine.borrow_mut().pointer_leave();
            publish_parallax(&machine, &frame, &offset, &active);
        })
    };

    ParallaxBinding {
        offset: *offset,
        onmouseenter,
        onmouseleave,
    }
}
