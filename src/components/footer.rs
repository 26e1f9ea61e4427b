use chrono::{Datelike, Local};
use gloo_console::error;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::reveal::{RevealController, RevealOptions};

#[derive(Clone, PartialEq)]
enum FragmentState {
    Loading,
    Loaded(AttrValue),
    Failed,
}

fn page_tail(path: &str) -> &str {
    let tail = path.rsplit('/').next().unwrap_or(path);
    if tail.is_empty() {
        "index.html"
    } else {
        tail
    }
}

/// Compares href and pathname by their final segment so both relative
/// ("work.html") and absolute ("/work") link forms mark the current page.
pub fn is_current_link(href: &str, pathname: &str) -> bool {
    page_tail(href) == page_tail(pathname)
}

fn stamp_current_year(document: &Document) {
    if let Some(year_slot) = document.get_element_by_id("current-year") {
        year_slot.set_text_content(Some(&Local::now().year().to_string()));
    }
}

fn mark_current_links(document: &Document, pathname: &str) {
    if let Ok(links) = document.query_selector_all("#footer-placeholder .footer-nav a") {
        for i in 0..links.length() {
            if let Some(node) = links.item(i) {
                let link: Element = node.unchecked_into();
                if let Some(href) = link.get_attribute("href") {
                    if is_current_link(&href, pathname) {
                        let _ = link.set_attribute("aria-current", "page");
                    } else {
                        let _ = link.remove_attribute("aria-current");
                    }
                }
            }
        }
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let fragment = use_state(|| FragmentState::Loading);
    // The footer lives outside the route switch, so it sticks around across
    // navigations; the current-page marker has to track the route itself.
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .unwrap()
                .location()
                .pathname()
                .unwrap_or_default()
        });

    {
        let fragment = fragment.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let url = format!("{}/footer.html", config::get_asset_base_url());
                    match Request::get(&url).send().await {
                        Ok(response) if response.ok() => match response.text().await {
                            Ok(body) => fragment.set(FragmentState::Loaded(AttrValue::from(body))),
                            Err(e) => {
                                error!(format!("Failed to read footer fragment: {:?}", e));
                                fragment.set(FragmentState::Failed);
                            }
                        },
                        Ok(response) => {
                            error!(format!(
                                "Footer fragment request failed with status {}",
                                response.status()
                            ));
                            fragment.set(FragmentState::Failed);
                        }
                        Err(e) => {
                            error!(format!("Failed to fetch footer fragment: {:?}", e));
                            fragment.set(FragmentState::Failed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    // The year stamp and reveal hookup can only run once the fetched markup
    // is actually in the document.
    {
        let state = (*fragment).clone();
        use_effect_with_deps(
            move |state| {
                let mut controller = None;
                if matches!(state, FragmentState::Loaded(_)) {
                    let document = web_sys::window().unwrap().document().unwrap();
                    stamp_current_year(&document);
                    let reveal = RevealController::new(RevealOptions::default());
                    reveal.register_selector("#footer-placeholder .fade-in");
                    controller = Some(reveal);
                }
                move || drop(controller)
            },
            state,
        );
    }

    {
        let state = (*fragment).clone();
        use_effect_with_deps(
            move |(state, pathname)| {
                if matches!(state, FragmentState::Loaded(_)) {
                    let document = web_sys::window().unwrap().document().unwrap();
                    mark_current_links(&document, pathname);
                }
                || ()
            },
            (state, pathname),
        );
    }

    html! {
        <footer id="footer-placeholder">
            {
                match &*fragment {
                    FragmentState::Loading => html! {},
                    FragmentState::Loaded(body) => Html::from_html_unchecked(body.clone()),
                    FragmentState::Failed => html! {
                        <p class="footer-error">{"Error loading footer content."}</p>
                    },
                }
            }
            <style>
                {r#"
                #footer-placeholder {
                    background: #0f172a;
                    color: #cbd5e1;
                }

                .site-footer {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 60px 20px 30px;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 40px;
                }

                .footer-brand h3 {
                    color: white;
                    font-size: 1.4rem;
                    margin-bottom: 12px;
                }

                .footer-nav h4,
                .footer-contact h4 {
                    color: white;
                    margin-bottom: 15px;
                }

                .footer-nav ul {
                    list-style: none;
                    padding: 0;
                }

                .footer-nav li {
                    margin-bottom: 10px;
                }

                .footer-nav a {
                    color: #cbd5e1;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-nav a:hover {
                    color: white;
                }

                .footer-nav a[aria-current="page"] {
                    color: white;
                    font-weight: 600;
                }

                .footer-bottom {
                    margin-top: 40px;
                    padding-top: 20px;
                    border-top: 1px solid #1e293b;
                    text-align: center;
                    font-size: 0.9rem;
                    color: #94a3b8;
                }

                .footer-error {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 30px 20px;
                    text-align: center;
                    color: #94a3b8;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_matches_home_link() {
        assert!(is_current_link("/", "/"));
        assert!(is_current_link("index.html", "/"));
    }

    #[test]
    fn work_path_matches_work_link() {
        assert!(is_current_link("/work", "/work"));
        assert!(is_current_link("work.html", "/work.html"));
    }

    #[test]
    fn links_to_other_pages_are_not_marked() {
        assert!(!is_current_link("/", "/work"));
        assert!(!is_current_link("/work", "/"));
    }

    #[test]
    fn empty_tail_defaults_to_index() {
        assert_eq!(page_tail("/"), "index.html");
        assert_eq!(page_tail(""), "index.html");
        assert_eq!(page_tail("/work"), "work");
    }
}
