use gloo_console::log;
use web_sys::{
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent, ScrollBehavior,
    ScrollToOptions,
};
use yew::prelude::*;

use crate::components::alert::{Alert, FormAlert};
use crate::reveal::{RevealController, RevealOptions};
use crate::validation::{validate, ContactForm};

/// Height of the fixed header that smooth scrolling has to clear.
pub const HEADER_OFFSET: f64 = 70.0;

const CARD_STAGGER_MS: u32 = 100;
const HERO_THRESHOLD: f64 = 0.3;

/// Smooth-scrolls so the section lands just below the fixed header.
/// Unknown ids are a no-op.
pub fn scroll_to_section(id: &str, header_offset: f64) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    if let Some(section) = document.get_element_by_id(id) {
        let top = section.get_bounding_client_rect().top()
            + window.page_y_offset().unwrap_or(0.0)
            - header_offset;
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

const LABS: [(&str, &str, &str); 4] = [
    (
        "\u{1F916}",
        "Robotics Lab",
        "Students design, build and program robots that sense and react to the world around \
         them, from first line-followers to competition-grade machines.",
    ),
    (
        "\u{1F4BB}",
        "AI & Coding Lab",
        "From block-based logic to Python and machine learning, learners train models on data \
         they collect themselves.",
    ),
    (
        "\u{1F4E1}",
        "IoT Lab",
        "Sensors, microcontrollers and the cloud come together in smart-home and \
         smart-agriculture builds students can take further at home.",
    ),
    (
        "\u{1F681}",
        "Drone Lab",
        "Flight principles, aerial programming and safe piloting, capped with automated \
         mission challenges.",
    ),
];

const PROCESS_STEPS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Discover",
        "Hands-on taster sessions where students explore each lab and find what excites them.",
    ),
    (
        "02",
        "Design",
        "Mentors help each team scope a project, sketch the build and plan the milestones.",
    ),
    (
        "03",
        "Build",
        "Weekly lab time to construct, program, test and iterate until the project works.",
    ),
    (
        "04",
        "Showcase",
        "Finished projects are demonstrated to parents, schools and the wider community.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    // One staggered controller for the page-wide fade-ins, one for the hero
    // slide-ins. The hero uses its own threshold so the entrance animation
    // does not fire on a sliver of the section.
    use_effect_with_deps(
        move |_| {
            let sections = RevealController::new(RevealOptions {
                stagger_ms: CARD_STAGGER_MS,
                ..RevealOptions::default()
            });
            sections.register_selector(".page-home .fade-in");

            let hero = RevealController::new(RevealOptions {
                threshold: HERO_THRESHOLD,
                root_margin: "0px",
                ..RevealOptions::default()
            });
            hero.register_selector(".page-home .slide-in-left, .page-home .slide-in-right");

            let controllers = vec![sections, hero];
            move || drop(controllers)
        },
        (),
    );

    let scroll_to_labs = Callback::from(|_: MouseEvent| scroll_to_section("labs", HEADER_OFFSET));
    let scroll_to_contact =
        Callback::from(|_: MouseEvent| scroll_to_section("contact", HEADER_OFFSET));

    html! {
        <div class="page-home">
            <section class="hero" id="home">
                <div class="hero-container">
                    <div class="hero-content slide-in-left">
                        <h1>{"Building Tomorrow's Innovators"}</h1>
                        <p>
                            {"eSkillLab gives students hands-on labs in robotics, AI, IoT and \
                              drone technology, turning curiosity into real engineering skills."}
                        </p>
                        <div class="hero-cta">
                            <button class="btn btn-primary" onclick={scroll_to_labs}>
                                {"Explore Our Labs"}
                            </button>
                            <button class="btn btn-outline" onclick={scroll_to_contact.clone()}>
                                {"Get In Touch"}
                            </button>
                        </div>
                    </div>
                    <div class="hero-visual slide-in-right" aria-hidden="true">
                        <span class="hero-emblem">{"\u{1F916}"}</span>
                    </div>
                </div>
            </section>

            <section class="labs-section section" id="labs">
                <div class="container">
                    <h2 class="section-title fade-in">{"Our Labs"}</h2>
                    <div class="lab-grid">
                        {
                            for LABS.iter().map(|(icon, title, blurb)| html! {
                                <div class="lab-card fade-in" key={*title}>
                                    <span class="lab-icon" aria-hidden="true">{*icon}</span>
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="process-section section" id="process">
                <div class="container">
                    <h2 class="section-title fade-in">{"How It Works"}</h2>
                    <div class="process-steps">
                        {
                            for PROCESS_STEPS.iter().map(|(number, title, blurb)| html! {
                                <div class="process-step fade-in" key={*number}>
                                    <span class="step-number">{*number}</span>
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="about-section section" id="about">
                <div class="container">
                    <h2 class="section-title fade-in">{"About eSkillLab"}</h2>
                    <div class="about-content fade-in">
                        <p>
                            {"We started eSkillLab because the gap between classroom theory and \
                              working technology keeps widening. Our labs close it with \
                              mentor-led, project-first programs where every student ships \
                              something real."}
                        </p>
                        <p>
                            {"Today we run labs in partner schools and our own innovation \
                              center, train teachers to keep programs going year-round, and \
                              coach teams for national robotics competitions."}
                        </p>
                    </div>
                </div>
            </section>

            <ContactSection />

            <style>
                {r#"
                .page-home .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    background: linear-gradient(135deg, #eff6ff 0%, #e0e7ff 100%);
                    padding: 120px 20px 60px;
                }

                .hero-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 40px;
                    align-items: center;
                }

                .hero-content h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    color: #1e293b;
                }

                .hero-content p {
                    margin-top: 20px;
                    font-size: 1.15rem;
                    color: #475569;
                    line-height: 1.7;
                }

                .hero-cta {
                    margin-top: 30px;
                    display: flex;
                    gap: 15px;
                    flex-wrap: wrap;
                }

                .btn {
                    padding: 14px 30px;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .btn-primary {
                    background: #1e3a8a;
                    color: white;
                    border: 2px solid #1e3a8a;
                }

                .btn-primary:hover {
                    background: #1e40af;
                    transform: translateY(-2px);
                }

                .btn-outline {
                    background: transparent;
                    color: #1e3a8a;
                    border: 2px solid #1e3a8a;
                }

                .btn-outline:hover {
                    background: #1e3a8a;
                    color: white;
                }

                .hero-visual {
                    display: flex;
                    justify-content: center;
                }

                .hero-emblem {
                    font-size: 10rem;
                    filter: drop-shadow(0 20px 30px rgba(30, 58, 138, 0.25));
                }

                .lab-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 25px;
                }

                .lab-card {
                    background: white;
                    border-radius: 12px;
                    padding: 35px 28px;
                    box-shadow: 0 5px 20px rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .lab-card:hover {
                    transform: translateY(-6px);
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.12);
                }

                .lab-icon {
                    font-size: 2.5rem;
                }

                .lab-card h3 {
                    margin: 15px 0 10px;
                    color: #1e293b;
                }

                .lab-card p {
                    color: #64748b;
                    line-height: 1.6;
                }

                .process-section {
                    background: #f8fafc;
                }

                .process-steps {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 25px;
                }

                .process-step {
                    text-align: center;
                    padding: 30px 20px;
                }

                .step-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: #1e3a8a;
                    color: white;
                    font-weight: 700;
                    font-size: 1.2rem;
                }

                .process-step h3 {
                    margin: 18px 0 10px;
                    color: #1e293b;
                }

                .process-step p {
                    color: #64748b;
                    line-height: 1.6;
                }

                .about-content {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .about-content p {
                    color: #475569;
                    line-height: 1.8;
                    margin-bottom: 18px;
                    font-size: 1.05rem;
                }

                @media (max-width: 768px) {
                    .hero-container {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }

                    .hero-content h1 {
                        font-size: 2.2rem;
                    }

                    .hero-cta {
                        justify-content: center;
                    }

                    .hero-emblem {
                        font-size: 6rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let interest = use_state(String::new);
    let message = use_state(String::new);
    let alert = use_state(|| None::<FormAlert>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let interest = interest.clone();
        let message = message.clone();
        let alert = alert.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ContactForm {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                interest: (*interest).clone(),
                message: (*message).clone(),
            };
            let outcome = validate(&form);
            if outcome.is_valid() {
                match serde_json::to_string(&form) {
                    Ok(payload) => log!("Contact form submitted:", payload),
                    Err(_) => log!("Contact form submitted"),
                }
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                interest.set(String::new());
                message.set(String::new());
                alert.set(Some(FormAlert::Success));
            } else {
                alert.set(Some(FormAlert::Errors(outcome.errors)));
            }
        })
    };

    let on_dismiss = {
        let alert = alert.clone();
        Callback::from(move |_: ()| alert.set(None))
    };

    html! {
        <section class="contact-section section" id="contact">
            <div class="container">
                <h2 class="section-title fade-in">{"Get In Touch"}</h2>
                <div class="contact-content fade-in">
                    <p class="contact-intro">
                        {"Tell us about your school, your team or your student, and we'll \
                          find the right program together."}
                    </p>
                    <form class="contact-form" {onsubmit} novalidate=true>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="contact-name">{"Name"}</label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    placeholder="Your name"
                                    value={(*name).clone()}
                                    oninput={let name = name.clone(); move |e: InputEvent| {
                                        name.set(e.target_unchecked_into::<HtmlInputElement>().value());
                                    }}
                                />
                            </div>
                            <div class="form-group">
                                <label for="contact-email">{"Email"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    placeholder="you@example.com"
                                    value={(*email).clone()}
                                    oninput={let email = email.clone(); move |e: InputEvent| {
                                        email.set(e.target_unchecked_into::<HtmlInputElement>().value());
                                    }}
                                />
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="contact-phone">{"Phone"}</label>
                                <input
                                    id="contact-phone"
                                    type="tel"
                                    placeholder="+94 77 123 4567"
                                    value={(*phone).clone()}
                                    oninput={let phone = phone.clone(); move |e: InputEvent| {
                                        phone.set(e.target_unchecked_into::<HtmlInputElement>().value());
                                    }}
                                />
                            </div>
                            <div class="form-group">
                                <label for="contact-interest">{"Area of Interest"}</label>
                                <select
                                    id="contact-interest"
                                    value={(*interest).clone()}
                                    onchange={let interest = interest.clone(); move |e: Event| {
                                        interest.set(e.target_unchecked_into::<HtmlSelectElement>().value());
                                    }}
                                >
                                    <option value="" selected={interest.is_empty()} disabled=true>
                                        {"Select an area of interest"}
                                    </option>
                                    <option value="robotics" selected={*interest == "robotics"}>{"Robotics Programs"}</option>
                                    <option value="ai-coding" selected={*interest == "ai-coding"}>{"AI & Coding"}</option>
                                    <option value="iot" selected={*interest == "iot"}>{"IoT Projects"}</option>
                                    <option value="drones" selected={*interest == "drones"}>{"Drone Technology"}</option>
                                    <option value="partnership" selected={*interest == "partnership"}>{"School Partnership"}</option>
                                    <option value="other" selected={*interest == "other"}>{"Other"}</option>
                                </select>
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="contact-message">{"Message"}</label>
                            <textarea
                                id="contact-message"
                                rows="5"
                                placeholder="What would you like to build?"
                                value={(*message).clone()}
                                oninput={let message = message.clone(); move |e: InputEvent| {
                                    message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
                                }}
                            />
                        </div>
                        <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                    </form>
                </div>
            </div>
            {
                if let Some(current) = &*alert {
                    html! { <Alert alert={current.clone()} on_dismiss={on_dismiss} /> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .contact-section {
                    background: #f8fafc;
                }

                .contact-content {
                    max-width: 700px;
                    margin: 0 auto;
                }

                .contact-intro {
                    text-align: center;
                    color: #475569;
                    margin-bottom: 30px;
                    line-height: 1.7;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 20px;
                }

                .form-group {
                    margin-bottom: 20px;
                    display: flex;
                    flex-direction: column;
                }

                .form-group label {
                    font-weight: 600;
                    color: #1e293b;
                    margin-bottom: 8px;
                }

                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 12px 15px;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    font-size: 1rem;
                    background: white;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }

                .form-group input:focus,
                .form-group select:focus,
                .form-group textarea:focus {
                    outline: none;
                    border-color: #1e3a8a;
                    box-shadow: 0 0 0 3px rgba(30, 58, 138, 0.15);
                }

                .contact-form .btn {
                    width: 100%;
                }

                @media (max-width: 768px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
