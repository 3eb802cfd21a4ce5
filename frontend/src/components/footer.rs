use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{ADDRESS_CITY, ADDRESS_STREET, COPYRIGHT, PRACTITIONER, PRACTITIONER_TITLE};
use crate::state::ui::Section;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <h3>{PRACTITIONER}</h3>
                <p class="footer-title">{PRACTITIONER_TITLE}</p>

                <div class="footer-links">
                    {
                        Section::ALL.iter().map(|&section| {
                            let on_navigate = props.on_navigate.clone();
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_navigate.emit(section);
                            });
                            html! {
                                <button key={section.id()} class="footer-link" onclick={onclick}>{section.label()}</button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-legal">
                    <p>{COPYRIGHT}</p>
                    <p>{format!("{}, {}", ADDRESS_STREET, ADDRESS_CITY)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: linear-gradient(135deg, #111827, #1f2937, #111827);
                    color: #ffffff;
                    padding: 4rem 0;
                    text-align: center;
                }
                .site-footer h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                    background: linear-gradient(90deg, #ec4899, #f43f5e, #ef4444);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .footer-title {
                    color: #9ca3af;
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    flex-wrap: wrap;
                    margin-bottom: 2rem;
                }
                .footer-link {
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .footer-link:hover {
                    color: #ffffff;
                }
                .footer-legal {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
