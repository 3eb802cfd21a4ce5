use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::PRACTITIONER;
use crate::state::ui::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

fn nav_links(on_navigate: &Callback<Section>, class: &'static str) -> Html {
    Section::ALL
        .iter()
        .map(|&section| {
            let on_navigate = on_navigate.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(section);
            });
            html! {
                <button key={section.id()} class={class} onclick={onclick}>{section.label()}</button>
            }
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle_menu, on_navigate } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">{PRACTITIONER}</div>

                <div class="nav-desktop">
                    { nav_links(on_navigate, "nav-link") }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            { nav_links(on_navigate, "nav-link mobile") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #2563eb, #7c3aed);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-desktop {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: #374151;
                    font-weight: 500;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .nav-link:hover {
                    transform: scale(1.05);
                }
                .nav-link.mobile {
                    text-align: left;
                    padding: 0.5rem 0.75rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .nav-mobile {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    animation: slideDown 0.3s ease-out;
                }
                @keyframes slideDown {
                    from { transform: translateY(-10px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 768px) {
                    .nav-desktop { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
        </nav>
    }
}
