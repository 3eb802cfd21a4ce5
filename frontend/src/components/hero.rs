use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{PORTRAIT_URL, PRACTITIONER, STATS};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_book: Callback<()>,
    pub on_learn_more: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_book.emit(());
        })
    };
    let learn_more = {
        let on_learn_more = props.on_learn_more.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_learn_more.emit(());
        })
    };

    html! {
        <section class="hero">
            <div class="floating-dot one"></div>
            <div class="floating-dot two"></div>
            <div class="floating-dot three"></div>

            <div class="hero-content">
                <img src={PORTRAIT_URL} alt={PRACTITIONER} class="hero-portrait" />

                <h1>
                    <span>{"Find Your Path to "}</span>
                    <span class="gradient-text">{"Healing"}</span>
                </h1>
                <h2 class="hero-subtitle">
                    <span class="gradient-text warm">{"Licensed clinical psychologist"}</span>
                    {" helping you overcome anxiety, strengthen relationships, and heal from trauma in a "}
                    <span class="gradient-text cool">{"safe, supportive environment"}</span>
                    {"."}
                </h2>

                <div class="hero-stats">
                    {
                        STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div key={i} class="hero-stat" style={format!("animation-delay: {:.1}s", i as f32 * 0.1)}>
                                <div class={classes!("stat-number", stat.color)}>
                                    <span class="stat-icon">{stat.icon.glyph()}</span>
                                    {stat.number}
                                </div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="hero-actions">
                    <button class="btn-primary" onclick={book}>{"Book a Free Consultation"}</button>
                    <button class="btn-secondary" onclick={learn_more}>{"Learn More About Me"}</button>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    padding-top: 5rem;
                    background: linear-gradient(135deg, #eff6ff, #eef2ff, #faf5ff);
                    text-align: center;
                }
                .hero-content {
                    max-width: 56rem;
                    padding: 0 1rem;
                    position: relative;
                    z-index: 10;
                }
                .hero-portrait {
                    width: 10rem;
                    height: 10rem;
                    border-radius: 50%;
                    object-fit: cover;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                    font-weight: 500;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }
                .hero-stat {
                    animation: fadeIn 0.6s ease-out both;
                }
                .stat-number {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .stat-icon {
                    font-size: 1rem;
                    margin-right: 0.25rem;
                }
                .stat-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .hero-actions {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .floating-dot {
                    position: absolute;
                    border-radius: 50%;
                    opacity: 0.2;
                    animation: floating 6s ease-in-out infinite;
                }
                .floating-dot.one { top: 5rem; left: 2.5rem; width: 5rem; height: 5rem; background: linear-gradient(90deg, #60a5fa, #c084fc); }
                .floating-dot.two { bottom: 5rem; right: 2.5rem; width: 8rem; height: 8rem; background: linear-gradient(90deg, #f472b6, #fb7185); animation-delay: 1s; }
                .floating-dot.three { top: 50%; left: 25%; width: 4rem; height: 4rem; background: linear-gradient(90deg, #22d3ee, #60a5fa); animation-delay: 2s; }
                @keyframes floating {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @media (max-width: 768px) {
                    .hero-stats { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
