use web_sys::MouseEvent;
use yew::prelude::*;

/// One item open at a time; clicking the open item closes it.
pub fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={if props.open { "true" } else { "false" }}
            >
                { props.question.clone() }
                <span class="faq-icon">{ if props.open { "\u{2212}" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

const FAQ_ENTRIES: [(&str, &str); 5] = [
    (
        "What age groups are your programs designed for?",
        "Our labs run programs for students from grade 5 upward. Sessions are grouped by age \
         band, and every track starts with the fundamentals before moving on to project work.",
    ),
    (
        "Do students need prior coding or electronics experience?",
        "No prior experience is needed. Each program begins with guided builds, and mentors \
         adjust the pace to the group.",
    ),
    (
        "How long does a typical project take?",
        "Most classroom projects run over four to six weekly sessions. Larger showcase builds, \
         like the ones in our gallery, are term-long efforts.",
    ),
    (
        "Can schools partner with eSkillLab for their own labs?",
        "Yes. We design, equip and staff in-school innovation labs, and train teachers to run \
         the day-to-day sessions.",
    ),
    (
        "What equipment do you provide?",
        "All kits, components and tools are provided in the lab, including robotics platforms, \
         3D printers and drone hardware.",
    ),
];

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="faq-section section" id="faq">
            <div class="container">
                <h2 class="section-title fade-in">{"Frequently Asked Questions"}</h2>
                <div class="faq-list fade-in">
                    {
                        for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                            let on_toggle = {
                                let open = open.clone();
                                Callback::from(move |_: ()| {
                                    open.set(next_open(*open, index));
                                })
                            };
                            html! {
                                <FaqItem
                                    question={*question}
                                    open={*open == Some(index)}
                                    {on_toggle}
                                >
                                    <p>{*answer}</p>
                                </FaqItem>
                            }
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .faq-section {
                    background: #f8fafc;
                }

                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: white;
                    border-radius: 10px;
                    margin-bottom: 15px;
                    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.06);
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 15px;
                    padding: 20px 25px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #1e293b;
                }

                .faq-icon {
                    font-size: 1.4rem;
                    color: #1e3a8a;
                    transition: transform 0.3s ease;
                }

                .faq-item.active .faq-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                    padding: 0 25px;
                    color: #475569;
                    line-height: 1.6;
                }

                .faq-item.active .faq-answer {
                    max-height: 300px;
                    padding: 0 25px 20px;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_closed_item_opens_it() {
        assert_eq!(next_open(None, 2), Some(2));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(next_open(Some(2), 2), None);
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        assert_eq!(next_open(Some(0), 3), Some(3));
    }
}
