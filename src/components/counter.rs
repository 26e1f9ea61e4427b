use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::reveal::{RevealController, RevealOptions};

const TICK_MS: u32 = 16;

/// Linear ramp from 0 to `target` over `duration_ms`, clamped at the target.
pub fn value_at(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    ((u64::from(target) * u64::from(elapsed_ms)) / u64::from(duration_ms)) as u32
}

pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
    #[prop_or(2_000)]
    pub duration_ms: u32,
    #[prop_or(0.5)]
    pub threshold: f64,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state(|| 0u32);
    let card_ref = use_node_ref();

    // Start counting the first time half the card scrolls into view.
    {
        let shown = shown.setter();
        let card_ref = card_ref.clone();
        let target = props.target;
        let duration_ms = props.duration_ms;
        let threshold = props.threshold;
        use_effect_with_deps(
            move |_| {
                let interval_handle = Rc::new(RefCell::new(None::<Interval>));
                let unmount_handle = interval_handle.clone();
                let on_visible = Callback::from(move |_: Element| {
                    let shown = shown.clone();
                    let elapsed = Rc::new(Cell::new(0u32));
                    let handle = interval_handle.clone();
                    let interval = Interval::new(TICK_MS, move || {
                        elapsed.set(elapsed.get() + TICK_MS);
                        shown.set(value_at(target, elapsed.get(), duration_ms));
                        if elapsed.get() >= duration_ms {
                            if let Some(running) = handle.borrow_mut().take() {
                                drop(running);
                            }
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                });

                let controller = RevealController::with_on_visible(
                    RevealOptions {
                        threshold,
                        ..RevealOptions::default()
                    },
                    on_visible,
                );
                if let Some(card) = card_ref.cast::<Element>() {
                    controller.register([card]);
                }
                move || {
                    // A mid-count unmount must stop the ticks, not just the
                    // observer.
                    if let Some(running) = unmount_handle.borrow_mut().take() {
                        drop(running);
                    }
                    drop(controller);
                }
            },
            (),
        );
    }

    html! {
        <div class="stat-card fade-in" ref={card_ref}>
            <div class="stat-number">{ group_thousands(*shown) }{ props.suffix.clone() }</div>
            <div class="stat-label">{ props.label.clone() }</div>
            <style>
                {r#"
                .stat-card {
                    background: white;
                    border-radius: 12px;
                    padding: 40px 30px;
                    text-align: center;
                    box-shadow: 0 5px 20px rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .stat-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.12);
                }

                .stat-number {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #1e3a8a;
                    line-height: 1.2;
                }

                .stat-label {
                    margin-top: 10px;
                    font-size: 1rem;
                    color: #64748b;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        assert_eq!(value_at(500, 0, 2_000), 0);
    }

    #[test]
    fn counter_hits_midpoint_halfway_through() {
        assert_eq!(value_at(500, 1_000, 2_000), 250);
    }

    #[test]
    fn counter_lands_exactly_on_target_at_duration() {
        assert_eq!(value_at(500, 2_000, 2_000), 500);
    }

    #[test]
    fn counter_clamps_past_duration() {
        assert_eq!(value_at(500, 2_016, 2_000), 500);
        assert_eq!(value_at(150, u32::MAX, 2_000), 150);
    }

    #[test]
    fn counter_never_overshoots_on_tick_grid() {
        let mut elapsed = 0;
        let mut last = 0;
        while elapsed < 2_000 {
            elapsed += TICK_MS;
            let value = value_at(150, elapsed, 2_000);
            assert!(value >= last);
            assert!(value <= 150);
            last = value;
        }
        assert_eq!(last, 150);
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        assert_eq!(value_at(42, 0, 0), 42);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(25_000), "25,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
