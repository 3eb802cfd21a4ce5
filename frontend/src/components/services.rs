use yew::prelude::*;

use crate::content::SERVICES;
use crate::state::ui::Section;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="services section-padding">
            <div class="container">
                <div class="section-heading">
                    <h2>
                        <span class="gradient-text">{"Services"}</span>
                        {" & "}
                        <span class="gradient-text warm">{"Specialties"}</span>
                    </h2>
                    <p>
                        <span class="gradient-text cool">{"Evidence-based therapy approaches"}</span>
                        {" tailored to your unique needs and goals"}
                    </p>
                </div>

                <div class="services-grid">
                    {
                        SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <div key={service.title} class="service-card" style={format!("animation-delay: {:.1}s", i as f32 * 0.2)}>
                                <div class="service-media">
                                    <img src={service.image} alt={service.title} />
                                    <div class="service-icon">{service.icon}</div>
                                    <div class="service-tint" style={format!("background: {}", service.color)}></div>
                                </div>
                                <div class="service-body">
                                    <h3 class={service.text_color}>{service.title}</h3>
                                    <p>{service.description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    background: linear-gradient(135deg, #f9fafb, #ffffff);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    background: #ffffff;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                    animation: fadeIn 0.6s ease-out both;
                    transition: transform 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                }
                .service-media {
                    position: relative;
                }
                .service-media img {
                    width: 100%;
                    height: 14rem;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .service-card:hover .service-media img {
                    transform: scale(1.1);
                }
                .service-icon {
                    position: absolute;
                    top: 1.5rem;
                    left: 1.5rem;
                    width: 4rem;
                    height: 4rem;
                    font-size: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 50%;
                }
                .service-tint {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .service-card:hover .service-tint {
                    opacity: 0.2;
                }
                .service-body {
                    padding: 2rem;
                }
                .service-body h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .service-body p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                "#}
            </style>
        </section>
    }
}
