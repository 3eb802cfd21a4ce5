use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::log;
use log::{info, warn};
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::browser;
use crate::components::{
    about::About, contact::ContactSection, faq::FaqAccordion, footer::Footer, hero::Hero, nav::Nav,
    services::Services,
};
use crate::config;
use crate::scheduler::{DelayedTask, HighlightTimers};
use crate::state::form::FieldInput;
use crate::state::page::{Effect, PageAction, PageState};
use crate::state::ui::{Highlight, Section};

fn run_effect(
    effect: &Effect,
    dispatcher: &UseReducerDispatcher<PageState>,
    timers: &Rc<RefCell<HighlightTimers>>,
) {
    match effect {
        Effect::ScrollTo(section) => {
            browser::scroll_to_section(*section);
        }
        Effect::ScheduleRevert { highlight, ticket, delay_ms } => {
            let dispatcher = dispatcher.clone();
            let (highlight, ticket) = (*highlight, *ticket);
            timers.borrow_mut().arm(highlight, *delay_ms, move || {
                dispatcher.dispatch(PageAction::HighlightExpired { highlight, ticket });
            });
        }
        Effect::AnnounceSubmission(form) => {
            match serde_json::to_string_pretty(form) {
                Ok(json) => log!("Form submitted:", json),
                Err(e) => warn!("Could not serialize submission: {}", e),
            }
            browser::alert(config::SUBMISSION_ACK);
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let page = use_reducer(PageState::default);
    let tickets = use_mut_ref(|| 0u64);
    let timers = use_mut_ref(|| HighlightTimers::<DelayedTask>::new(config::REVERT_POLICY));

    {
        let dispatcher = page.dispatcher();
        use_mount(move || {
            info!("Practice page mounted");
            browser::set_document_title(config::SITE_TITLE);
            dispatcher.dispatch(PageAction::Mounted);
        });
    }

    // Run every effect queued since the last render.
    {
        let outbox = page.outbox.clone();
        let dispatcher = page.dispatcher();
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                for effect in outbox.drain() {
                    run_effect(&effect, &dispatcher, &timers);
                }
                || ()
            },
            page.revision,
        );
    }

    let spotlight = |highlight: Highlight| {
        let dispatcher = page.dispatcher();
        let tickets = tickets.clone();
        Callback::from(move |_: ()| {
            let ticket = {
                let mut next = tickets.borrow_mut();
                *next += 1;
                *next
            };
            dispatcher.dispatch(PageAction::Spotlight { highlight, ticket });
        })
    };

    let on_toggle_menu = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleMobileMenu))
    };

    let on_navigate = {
        let dispatcher = page.dispatcher();
        Callback::from(move |section: Section| dispatcher.dispatch(PageAction::ScrollTo(section)))
    };

    let on_toggle_faq = {
        let dispatcher = page.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(PageAction::ToggleFaq(index)))
    };

    let on_input = {
        let dispatcher = page.dispatcher();
        Callback::from(move |input: FieldInput| dispatcher.dispatch(PageAction::Edit(input)))
    };

    let on_submit = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::Submit))
    };

    html! {
        <div class={classes!("practice-page", page.loaded.then(|| "loaded"))}>
            <Nav
                menu_open={page.ui.mobile_menu_open}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate.clone()}
            />
            <Hero
                on_book={spotlight(Highlight::Contact)}
                on_learn_more={spotlight(Highlight::About)}
            />
            <About highlighted={page.ui.is_highlighted(Highlight::About)} />
            <Services />
            <FaqAccordion open={page.ui.open_faq} on_toggle={on_toggle_faq} />
            <ContactSection
                form={page.form.clone()}
                errors={page.errors.clone()}
                highlighted={page.ui.is_highlighted(Highlight::Contact)}
                on_input={on_input}
                on_submit={on_submit}
            />
            <Footer on_navigate={on_navigate} />
            <style>
                {r#"
                .practice-page {
                    min-height: 100vh;
                    opacity: 0;
                    transition: opacity 1s ease;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .practice-page.loaded {
                    opacity: 1;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .section-padding {
                    padding: 6rem 0;
                    position: relative;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .section-heading p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #2563eb, #9333ea, #4f46e5);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    font-weight: 600;
                }
                .gradient-text.warm {
                    background: linear-gradient(90deg, #ec4899, #f43f5e, #ef4444);
                    -webkit-background-clip: text;
                }
                .gradient-text.cool {
                    background: linear-gradient(90deg, #10b981, #14b8a6, #06b6d4);
                    -webkit-background-clip: text;
                }
                .text-gradient-primary { color: #2563eb; }
                .text-gradient-secondary { color: #db2777; }
                .text-gradient-accent { color: #7c3aed; }
                .text-gradient-warm { color: #ea580c; }
                .btn-primary, .btn-secondary {
                    font-size: 1.125rem;
                    font-weight: 600;
                    padding: 1.25rem 2.5rem;
                    border-radius: 0.75rem;
                    border: none;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .btn-primary {
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: #ffffff;
                }
                .btn-secondary {
                    background: #ffffff;
                    color: #2563eb;
                    border: 2px solid #2563eb;
                }
                .btn-primary:hover, .btn-secondary:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 25px rgba(37, 99, 235, 0.25);
                }
                @keyframes slideDown {
                    from { transform: translateY(-10px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
