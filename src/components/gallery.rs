use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryFilter {
    All,
    Category(String),
}

impl GalleryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted.as_str() == category,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct GalleryItem {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub blurb: &'static str,
}

fn set_body_overflow(value: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct GallerySectionProps {
    pub items: Vec<GalleryItem>,
    /// (filter value, button label) pairs; "all" is the catch-all value.
    pub filters: Vec<(&'static str, &'static str)>,
}

#[function_component(GallerySection)]
pub fn gallery_section(props: &GallerySectionProps) -> Html {
    let filter = use_state(|| GalleryFilter::All);
    let selected = use_state(|| None::<GalleryItem>);

    // While the lightbox is up, freeze body scroll and close on Escape.
    {
        let selected_state = selected.clone();
        let is_open = selected.is_some();
        use_effect_with_deps(
            move |open| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;
                if *open {
                    set_body_overflow("hidden");
                    let on_key = {
                        let selected = selected_state.clone();
                        Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                selected.set(None);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>)
                    };
                    let document = web_sys::window().unwrap().document().unwrap();
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    cleanup = Some(Box::new(move || {
                        let document = web_sys::window().unwrap().document().unwrap();
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                        set_body_overflow("auto");
                    }));
                }
                move || {
                    if let Some(run) = cleanup {
                        run();
                    }
                }
            },
            is_open,
        );
    }

    let filter_buttons = props.filters.iter().map(|(value, label)| {
        let target = GalleryFilter::from_value(value);
        let active = *filter == target;
        let onclick = {
            let filter = filter.clone();
            let target = target.clone();
            Callback::from(move |_: MouseEvent| filter.set(target.clone()))
        };
        html! {
            <button
                class={classes!("filter-btn", active.then(|| "active"))}
                aria-pressed={if active { "true" } else { "false" }}
                {onclick}
            >
                { *label }
            </button>
        }
    });

    let cards = props.items.iter().map(|item| {
        let visible = filter.matches(item.category);
        let onclick = {
            let selected = selected.clone();
            let item = item.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(item.clone())))
        };
        html! {
            <div
                key={item.title}
                class={classes!("gallery-item", (!visible).then(|| "hidden"))}
                {onclick}
            >
                <img src={item.image} alt={item.title} loading="lazy" />
                <div class="gallery-item-info">
                    <span class="gallery-tag">{ item.category }</span>
                    <h3>{ item.title }</h3>
                </div>
            </div>
        }
    });

    html! {
        <section class="gallery-section section" id="gallery">
            <div class="container">
                <h2 class="section-title fade-in">{"Project Gallery"}</h2>
                <div class="gallery-filters fade-in" role="group" aria-label="Filter projects">
                    { for filter_buttons }
                </div>
                <div class="gallery-grid fade-in">
                    { for cards }
                </div>
            </div>
            {
                if let Some(item) = &*selected {
                    let close = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(None))
                    };
                    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
                    html! {
                        <div class="lightbox" onclick={close.clone()}>
                            <div class="lightbox-content" onclick={keep_open}>
                                <button class="lightbox-close" onclick={close} aria-label="Close">
                                    {"\u{00d7}"}
                                </button>
                                <img src={item.image} alt={item.title} />
                                <div class="lightbox-info">
                                    <span class="gallery-tag">{ item.category }</span>
                                    <h3>{ item.title }</h3>
                                    <p>{ item.blurb }</p>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .gallery-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 10px;
                    margin-bottom: 40px;
                }

                .filter-btn {
                    padding: 10px 22px;
                    border: 2px solid #1e3a8a;
                    border-radius: 25px;
                    background: transparent;
                    color: #1e3a8a;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .filter-btn:hover,
                .filter-btn.active {
                    background: #1e3a8a;
                    color: white;
                }

                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 25px;
                }

                .gallery-item {
                    position: relative;
                    border-radius: 12px;
                    overflow: hidden;
                    cursor: pointer;
                    box-shadow: 0 5px 20px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease;
                }

                .gallery-item:hover {
                    transform: scale(1.03);
                }

                .gallery-item.hidden {
                    display: none;
                }

                .gallery-item img {
                    width: 100%;
                    height: 220px;
                    object-fit: cover;
                    display: block;
                }

                .gallery-item-info {
                    padding: 18px;
                    background: white;
                }

                .gallery-tag {
                    display: inline-block;
                    padding: 3px 12px;
                    border-radius: 12px;
                    background: #dbeafe;
                    color: #1e3a8a;
                    font-size: 0.8rem;
                    font-weight: 600;
                    text-transform: capitalize;
                }

                .gallery-item-info h3 {
                    margin-top: 10px;
                    font-size: 1.1rem;
                    color: #1e293b;
                }

                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 10000;
                    background: rgba(15, 23, 42, 0.85);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 20px;
                }

                .lightbox-content {
                    position: relative;
                    max-width: 700px;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: white;
                    border-radius: 12px;
                }

                .lightbox-content img {
                    width: 100%;
                    max-height: 400px;
                    object-fit: cover;
                    display: block;
                }

                .lightbox-info {
                    padding: 25px;
                }

                .lightbox-info p {
                    margin-top: 12px;
                    color: #475569;
                    line-height: 1.6;
                }

                .lightbox-close {
                    position: absolute;
                    top: 12px;
                    right: 12px;
                    width: 36px;
                    height: 36px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(15, 23, 42, 0.6);
                    color: white;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_categories() -> Vec<&'static str> {
        vec!["robotics", "ai", "iot", "drones", "robotics"]
    }

    #[test]
    fn all_filter_matches_every_category() {
        let filter = GalleryFilter::from_value("all");
        assert!(sample_categories().iter().all(|c| filter.matches(c)));
    }

    #[test]
    fn category_filter_matches_exactly() {
        let filter = GalleryFilter::from_value("robotics");
        let visible: Vec<_> = sample_categories()
            .into_iter()
            .filter(|c| filter.matches(c))
            .collect();
        assert_eq!(visible, vec!["robotics", "robotics"]);
    }

    #[test]
    fn unknown_category_hides_everything() {
        let filter = GalleryFilter::from_value("underwater");
        assert!(!sample_categories().iter().any(|c| filter.matches(c)));
    }

    #[test]
    fn reapplying_a_filter_keeps_the_same_partition() {
        let filter = GalleryFilter::from_value("ai");
        let first: Vec<_> = sample_categories()
            .into_iter()
            .map(|c| filter.matches(c))
            .collect();
        let second: Vec<_> = sample_categories()
            .into_iter()
            .map(|c| filter.matches(c))
            .collect();
        assert_eq!(first, second);
    }
}
