use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::FAQS;
use crate::state::ui::Section;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    index: usize,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}
             style={format!("animation-delay: {:.1}s", props.index as f32 * 0.1)}>
            <button class="faq-question" onclick={toggle}>
                <h3 class="question-text">{props.question}</h3>
                <span class="toggle-icon">{if props.open { "⌃" } else { "⌄" }}</span>
            </button>
            {
                if props.open {
                    html! {
                        <div class="faq-answer">
                            <p>{props.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub open: Option<usize>,
    pub on_toggle: Callback<usize>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    html! {
        <section id={Section::Faq.id()} class="faq section-padding">
            <div class="container">
                <div class="section-heading">
                    <h2>
                        <span class="gradient-text">{"Frequently Asked"}</span>
                        {" "}
                        <span class="gradient-text warm">{"Questions"}</span>
                    </h2>
                    <p>
                        {"Common questions about "}
                        <span class="gradient-text cool">{"therapy sessions"}</span>
                        {", insurance, and what to expect"}
                    </p>
                </div>

                <div class="faq-list">
                    {
                        FAQS.iter().enumerate().map(|(index, faq)| html! {
                            <FaqItem
                                key={index}
                                question={faq.question}
                                answer={faq.answer}
                                index={index}
                                open={props.open == Some(index)}
                                on_toggle={props.on_toggle.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .faq {
                    background: #ffffff;
                }
                .faq-list {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                    animation: fadeIn 0.6s ease-out both;
                }
                .faq-item:last-child {
                    border-bottom: none;
                }
                .faq-question {
                    width: 100%;
                    padding: 2rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    border-radius: 1rem;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .faq-question:hover {
                    background: #f9fafb;
                }
                .question-text {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    padding-right: 1rem;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #9ca3af;
                }
                .faq-item.open .toggle-icon {
                    color: #2563eb;
                }
                .faq-answer {
                    padding: 0 1.5rem 2rem;
                    animation: slideDown 0.3s ease-out;
                }
                .faq-answer p {
                    color: #4b5563;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                "#}
            </style>
        </section>
    }
}
