use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config;
use crate::content::NAV_LINKS;
use crate::state::{NavAction, NavState};
use crate::pages::landing::Section;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let state = use_reducer_eq(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(offset) = win.scroll_y() {
                                dispatcher.dispatch(NavAction::Scrolled(offset));
                            }
                        }
                    });

                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    {
                        warn!("could not listen for scroll events: {:?}", err);
                    }

                    // A reload halfway down the page should start with the solid bar
                    let _ = scroll_callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&wasm_bindgen::JsValue::NULL);

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    // No prevent_default: the anchor still has to scroll to its section
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(NavAction::SelectLink);
        })
    };

    let enquiry_url = config::whatsapp_enquiry_url();

    html! {
        <nav data-section={Section::Navbar.name()} class={classes!("top-nav", state.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    {"LINGUIST"}<span class="accent">{"PRO"}</span>
                </a>

                <div class="nav-desktop">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link">{link.label}</a>
                    }) }
                    <a
                        href={enquiry_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                    >
                        {"Daftar Sekarang"}
                    </a>
                </div>

                <button
                    class="burger-menu"
                    aria-label={if state.menu_open { "Tutup menu" } else { "Buka menu" }}
                    aria-expanded={state.menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <IconView icon={if state.menu_open { Icon::Close } else { Icon::Menu }} size={28} />
                </button>
            </div>

            <div class={classes!("mobile-menu", state.menu_open.then(|| "open"))}>
                <div class="mobile-menu-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="mobile-link" onclick={close_menu.clone()}>
                            {link.label}
                        </a>
                    }) }
                    <a href={config::whatsapp_url(None)} class="mobile-cta">
                        {"Daftar Sekarang"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.5s ease;
                    }

                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(15, 23, 66, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-logo {
                        color: #fff;
                        font-family: var(--font-serif);
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.05em;
                        text-decoration: none;
                    }

                    .nav-desktop {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .nav-link:hover {
                        color: var(--accent);
                    }

                    .nav-cta {
                        background: var(--accent);
                        color: var(--primary);
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        text-decoration: none;
                        transition: all 0.3s;
                    }

                    .nav-cta:hover {
                        background: #fff;
                        transform: scale(1.05);
                    }

                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                        padding: 0;
                    }

                    .mobile-menu {
                        display: none;
                    }

                    @media (max-width: 768px) {
                        .nav-desktop {
                            display: none;
                        }

                        .burger-menu {
                            display: block;
                        }

                        .mobile-menu {
                            display: block;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            box-sizing: border-box;
                            padding: 1.5rem;
                            background: var(--primary);
                            border-top: 1px solid rgba(255, 255, 255, 0.1);
                            opacity: 0;
                            transform: translateY(-20px);
                            visibility: hidden;
                            pointer-events: none;
                            transition: opacity 0.3s ease, transform 0.3s ease, visibility 0.3s;
                        }

                        .mobile-menu.open {
                            opacity: 1;
                            transform: translateY(0);
                            visibility: visible;
                            pointer-events: auto;
                        }
                    }

                    .mobile-menu-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .mobile-link {
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 500;
                        text-decoration: none;
                    }

                    .mobile-cta {
                        background: var(--accent);
                        color: var(--primary);
                        padding: 1rem;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        text-align: center;
                        text-decoration: none;
                    }
                "#}
            </style>
        </nav>
    }
}
