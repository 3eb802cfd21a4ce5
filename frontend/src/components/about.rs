use yew::prelude::*;

use crate::content::{BIO, BIO_SETTING, CREDENTIALS, OFFICE_HOURS, PRACTITIONER, SESSION_FEES};
use crate::state::ui::Section;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub highlighted: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id={Section::About.id()} class="about section-padding">
            <div class="container about-grid">
                <div class="about-copy">
                    <h2 class={classes!("about-title", props.highlighted.then(|| "highlighted"))}>
                        {"About "}<span class="gradient-text">{PRACTITIONER}</span>
                    </h2>
                    <p><span class="gradient-text warm">{PRACTITIONER}</span>{" "}{BIO}</p>
                    <p>{BIO_SETTING}</p>

                    <div class="credentials">
                        {
                            CREDENTIALS.iter().map(|c| html! {
                                <div key={c.highlight} class={classes!("credential", c.tone)}>
                                    <span class="check">{"✓"}</span>
                                    <span><strong>{c.highlight}</strong>{c.rest}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="about-cards">
                    <div class="info-card">
                        <h3>{"🕒 Office Hours"}</h3>
                        {
                            OFFICE_HOURS.iter().map(|h| html! {
                                <div key={h.kind} class="hours-row">
                                    <p class="hours-kind"><strong>{h.kind}</strong>{" "}{h.days}</p>
                                    <p>{h.hours}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="info-card fees">
                        <h3>{"Session Fees"}</h3>
                        {
                            SESSION_FEES.iter().map(|f| html! {
                                <div key={f.session} class="fee-row">
                                    <span>{f.session}</span>
                                    <span class="fee-price">{f.price}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    background: linear-gradient(135deg, #f9fafb, #ffffff);
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-title {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 2rem;
                    transition: all 0.5s ease;
                }
                .about-title.highlighted {
                    transform: scale(1.05);
                    color: #2563eb;
                }
                .about-copy p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .credentials {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .credential {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    font-weight: 500;
                    color: #374151;
                }
                .credential.blue { background: linear-gradient(90deg, #eff6ff, #eef2ff); }
                .credential.purple { background: linear-gradient(90deg, #faf5ff, #fdf2f8); }
                .credential.green { background: linear-gradient(90deg, #f0fdf4, #ecfdf5); }
                .credential.orange { background: linear-gradient(90deg, #fff7ed, #fffbeb); }
                .about-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .info-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #eff6ff, #eef2ff);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                }
                .info-card.fees {
                    background: linear-gradient(135deg, #faf5ff, #fdf2f8);
                }
                .hours-row {
                    margin-top: 1.25rem;
                }
                .fee-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem;
                    margin-top: 1rem;
                    background: #ffffff;
                    border-radius: 0.75rem;
                }
                .fee-price {
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                @media (max-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
