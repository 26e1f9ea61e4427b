use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod reveal;
mod validation;
mod components {
    pub mod alert;
    pub mod counter;
    pub mod faq;
    pub mod footer;
    pub mod gallery;
}
mod pages {
    pub mod home;
    pub mod work;
}

use components::footer::SiteFooter;
use pages::{home::Home, work::Work};

const STICKY_HEADER_AT: i32 = 50;
const BACK_TO_TOP_AT: i32 = 300;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > STICKY_HEADER_AT);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // The open menu locks body scroll; the class has to come off again no
    // matter how the menu closes.
    {
        let open = *menu_open;
        use_effect_with_deps(
            move |open| {
                let body = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body());
                if let Some(body) = body {
                    let _ = if *open {
                        body.class_list().add_1("nav-open")
                    } else {
                        body.class_list().remove_1("nav-open")
                    };
                }
                || ()
            },
            open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"eSkillLab"}
                </Link<Route>>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    aria-label="Toggle navigation"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Work} classes="nav-link">
                            {"Our Work"}
                        </Link<Route>>
                    </div>
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.98);
                    box-shadow: 0 2px 25px rgba(0, 0, 0, 0.15);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 20px;
                    height: 70px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1e3a8a;
                    text-decoration: none;
                }

                .nav-menu {
                    display: flex;
                    gap: 25px;
                    align-items: center;
                }

                .nav-link {
                    color: #1e293b;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #1e3a8a;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 8px;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1e293b;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .burger-menu.active span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .burger-menu.active span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.active span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-menu {
                        position: fixed;
                        top: 70px;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        background: white;
                        flex-direction: column;
                        justify-content: flex-start;
                        padding-top: 40px;
                        gap: 30px;
                        transform: translateX(100%);
                        transition: transform 0.3s ease;
                    }

                    .nav-menu.active {
                        transform: translateX(0);
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    visible.set(scroll_top > BACK_TO_TOP_AT);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let scroll_up = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        let window = web_sys::window().unwrap();
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });

    html! {
        <>
            <button
                class={classes!("back-to-top", (*visible).then(|| "visible"))}
                onclick={scroll_up}
                aria-label="Back to top"
            >
                {"\u{2191}"}
            </button>
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    bottom: 25px;
                    right: 25px;
                    z-index: 900;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: #1e3a8a;
                    color: white;
                    font-size: 1.3rem;
                    cursor: pointer;
                    opacity: 0;
                    transform: translateY(10px);
                    pointer-events: none;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                    box-shadow: 0 5px 15px rgba(30, 58, 138, 0.4);
                }

                .back-to-top.visible {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }

                .back-to-top:hover {
                    background: #1e40af;
                }
                "#}
            </style>
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <SiteFooter />
            <BackToTop />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
