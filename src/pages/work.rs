use yew::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::faq::FaqSection;
use crate::components::gallery::{GalleryItem, GallerySection};
use crate::reveal::{RevealController, RevealOptions};

const CARD_STAGGER_MS: u32 = 100;

fn gallery_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            title: "Line-Follower League",
            category: "robotics",
            image: "/assets/gallery/line-follower.jpg",
            blurb: "A grade 7 cohort built and tuned line-following robots, then raced them in \
                    an inter-school league final.",
        },
        GalleryItem {
            title: "Robotic Arm Sorter",
            category: "robotics",
            image: "/assets/gallery/robotic-arm.jpg",
            blurb: "A 4-axis arm that sorts colored blocks, designed and 3D-printed entirely in \
                    the lab.",
        },
        GalleryItem {
            title: "Sign Language Translator",
            category: "ai",
            image: "/assets/gallery/sign-language.jpg",
            blurb: "A vision model trained by students to translate common sign-language \
                    gestures into on-screen text.",
        },
        GalleryItem {
            title: "Crop Disease Classifier",
            category: "ai",
            image: "/assets/gallery/crop-classifier.jpg",
            blurb: "Students photographed local crops and trained a classifier that flags early \
                    signs of leaf disease.",
        },
        GalleryItem {
            title: "Smart Greenhouse",
            category: "iot",
            image: "/assets/gallery/greenhouse.jpg",
            blurb: "Soil, light and humidity sensors drive automated watering in the school \
                    demo greenhouse.",
        },
        GalleryItem {
            title: "Campus Energy Monitor",
            category: "iot",
            image: "/assets/gallery/energy-monitor.jpg",
            blurb: "A dashboard of classroom energy use, streamed from student-installed meters.",
        },
        GalleryItem {
            title: "Aerial Mapping Challenge",
            category: "drones",
            image: "/assets/gallery/aerial-mapping.jpg",
            blurb: "Teams programmed survey flights and stitched the photos into a map of the \
                    school grounds.",
        },
        GalleryItem {
            title: "Precision Drop Rig",
            category: "drones",
            image: "/assets/gallery/drop-rig.jpg",
            blurb: "A payload-release mechanism the drone team designed for a national rescue \
                    challenge.",
        },
    ]
}

#[function_component(Work)]
pub fn work() -> Html {
    use_effect_with_deps(
        move |_| {
            let sections = RevealController::new(RevealOptions {
                stagger_ms: CARD_STAGGER_MS,
                ..RevealOptions::default()
            });
            sections.register_selector(".page-work .fade-in");
            move || drop(sections)
        },
        (),
    );

    let filters = vec![
        ("all", "All Projects"),
        ("robotics", "Robotics"),
        ("ai", "AI"),
        ("iot", "IoT"),
        ("drones", "Drones"),
    ];

    html! {
        <div class="page-work">
            <section class="work-hero">
                <div class="container">
                    <h1 class="fade-in">{"Our Work"}</h1>
                    <p class="fade-in">
                        {"Every project here was designed, built and debugged by students in \
                          our labs. Filter by track to see what each program produces."}
                    </p>
                </div>
            </section>

            <section class="stats-section section" id="stats">
                <div class="container">
                    <div class="stats-grid">
                        <StatCounter target={150} suffix={"+"} label={"Projects Completed"} />
                        <StatCounter target={2500} suffix={"+"} label={"Students Trained"} />
                        <StatCounter target={35} suffix={"+"} label={"Partner Schools"} />
                        <StatCounter target={98} suffix={"%"} label={"Parent Satisfaction"} />
                    </div>
                </div>
            </section>

            <GallerySection items={gallery_items()} {filters} />

            <FaqSection />

            <style>
                {r#"
                .work-hero {
                    background: linear-gradient(135deg, #1e3a8a 0%, #312e81 100%);
                    color: white;
                    padding: 150px 20px 80px;
                    text-align: center;
                }

                .work-hero h1 {
                    font-size: 2.8rem;
                }

                .work-hero p {
                    max-width: 650px;
                    margin: 20px auto 0;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    color: #c7d2fe;
                }

                .stats-section {
                    background: #f8fafc;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 25px;
                }
                "#}
            </style>
        </div>
    }
}
