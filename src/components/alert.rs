use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

const SUCCESS_DISMISS_MS: u32 = 5_000;
const ERROR_DISMISS_MS: u32 = 8_000;

#[derive(Clone, PartialEq)]
pub enum FormAlert {
    Success,
    Errors(Vec<String>),
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub alert: FormAlert,
    pub on_dismiss: Callback<()>,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    // Auto-dismiss; errors stay up longer so the list can be read.
    {
        let on_dismiss = props.on_dismiss.clone();
        let alert = props.alert.clone();
        use_effect_with_deps(
            move |current| {
                let delay = match current {
                    FormAlert::Success => SUCCESS_DISMISS_MS,
                    FormAlert::Errors(_) => ERROR_DISMISS_MS,
                };
                let timeout = Timeout::new(delay, move || {
                    on_dismiss.emit(());
                });
                move || drop(timeout)
            },
            alert,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(());
        })
    };

    let kind_class = match &props.alert {
        FormAlert::Success => "custom-alert-success",
        FormAlert::Errors(_) => "custom-alert-error",
    };

    html! {
        <div class={classes!("custom-alert", kind_class)} role="alert">
            <div class="alert-content">
                {
                    match &props.alert {
                        FormAlert::Success => html! {
                            <p>{"Thank you for your message! We'll get back to you soon."}</p>
                        },
                        FormAlert::Errors(messages) => html! {
                            <div>
                                <strong>{"Please fix the following errors:"}</strong>
                                <ul>
                                    { for messages.iter().map(|message| html! { <li>{message}</li> }) }
                                </ul>
                            </div>
                        },
                    }
                }
                <button class="alert-close" onclick={close} aria-label="Dismiss">{"\u{00d7}"}</button>
            </div>
            <style>
                {r#"
                .custom-alert {
                    position: fixed;
                    top: 90px;
                    right: 20px;
                    z-index: 10000;
                    max-width: 400px;
                    border-radius: 8px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
                    animation: alert-slide-in 0.3s ease;
                }

                .custom-alert-success {
                    background: #d4edda;
                    border: 1px solid #c3e6cb;
                    color: #155724;
                }

                .custom-alert-error {
                    background: #f8d7da;
                    border: 1px solid #f5c6cb;
                    color: #721c24;
                }

                .alert-content {
                    padding: 15px 20px;
                    display: flex;
                    align-items: flex-start;
                    gap: 10px;
                }

                .alert-content ul {
                    margin: 10px 0;
                    padding-left: 20px;
                }

                .alert-close {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: inherit;
                    font-size: 1.1rem;
                    padding: 5px;
                    margin-left: auto;
                    opacity: 0.7;
                    transition: opacity 0.3s ease;
                }

                .alert-close:hover {
                    opacity: 1;
                }

                @keyframes alert-slide-in {
                    from {
                        transform: translateX(100%);
                        opacity: 0;
                    }
                    to {
                        transform: translateX(0);
                        opacity: 1;
                    }
                }

                @media (max-width: 768px) {
                    .custom-alert {
                        left: 20px;
                        right: 20px;
                        max-width: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
