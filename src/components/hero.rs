use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::{Motion, Reveal};
use crate::config;
use crate::content::{FOUNDING_YEAR, HERO_IMAGE};
use crate::pages::landing::Section;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section data-section={Section::Hero.name()} class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <h1 class="hero-outline">{"ENGLISH COURSE"}</h1>
            </div>

            <div class="hero-grid">
                <Reveal motion={Motion::FromLeft(50.0)}>
                    <span class="eyebrow accent">{"Premium Learning Experience"}</span>
                    <h2 class="hero-title">
                        {"Master English"}<br />
                        <span class="italic accent">{"With Confidence."}</span>
                    </h2>
                    <p class="hero-lead">
                        {"Tingkatkan kemampuan bahasa Inggris Anda dengan metode interaktif dan pengajar profesional. Siap menghadapi tantangan global."}
                    </p>
                    <div class="hero-actions">
                        <a href="#programs" class="button-light">
                            {"Lihat Program"}
                            <IconView icon={Icon::ArrowRight} size={20} class="nudge" />
                        </a>
                        <a href={config::whatsapp_url(None)} class="button-ghost">
                            {"Konsultasi Gratis"}
                        </a>
                    </div>
                </Reveal>

                <Reveal motion={Motion::Zoom(0.8)} duration={1.0} class="hero-visual">
                    <div class="hero-photo">
                        <img
                            src={HERO_IMAGE}
                            alt="Student Learning"
                            referrerpolicy="no-referrer"
                        />
                        <div class="hero-stats">
                            <div class="hero-stats-row">
                                <div class="dot-stack">
                                    { for (0..3).map(|_| html! { <div class="dot"></div> }) }
                                </div>
                                <span>{"500+ Siswa Aktif"}</span>
                            </div>
                            <p class="hero-stats-note">{format!("Terpercaya Sejak {}", FOUNDING_YEAR)}</p>
                        </div>
                    </div>
                    <div class="glow glow-accent"></div>
                    <div class="glow glow-secondary"></div>
                </Reveal>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        background: var(--primary);
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        pointer-events: none;
                        user-select: none;
                        overflow: hidden;
                    }

                    .hero-outline {
                        font-size: 20vw;
                        font-weight: 900;
                        line-height: 1;
                        white-space: nowrap;
                        text-transform: uppercase;
                        color: transparent;
                        -webkit-text-stroke: 1px rgba(255, 255, 255, 0.6);
                        opacity: 0.2;
                        margin: 0;
                    }

                    .hero-grid {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        width: 100%;
                        margin: 0 auto;
                        padding: 5rem 1.5rem 0;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .hero-title {
                        color: #fff;
                        font-family: var(--font-serif);
                        font-size: clamp(3.75rem, 7vw, 6rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }

                    .hero-lead {
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1.25rem;
                        line-height: 1.7;
                        max-width: 32rem;
                        margin-bottom: 2.5rem;
                    }

                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .button-light,
                    .button-ghost {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        text-decoration: none;
                        transition: all 0.3s;
                    }

                    .button-light {
                        background: #fff;
                        color: var(--primary);
                    }

                    .button-light:hover {
                        background: var(--accent);
                        color: #fff;
                    }

                    .button-light:hover .nudge {
                        transform: translateX(4px);
                    }

                    .nudge {
                        transition: transform 0.2s;
                    }

                    .button-ghost {
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                    }

                    .button-ghost:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .hero-visual {
                        position: relative;
                    }

                    .hero-photo {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        background: var(--secondary);
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }

                    .hero-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        mix-blend-mode: overlay;
                        opacity: 0.8;
                    }

                    .hero-stats {
                        position: absolute;
                        bottom: 2rem;
                        left: 2rem;
                        right: 2rem;
                        padding: 1.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 1rem;
                    }

                    .hero-stats-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 0.5rem;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .dot-stack {
                        display: flex;
                    }

                    .dot {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        border: 2px solid var(--primary);
                        background: var(--accent);
                        margin-left: -0.5rem;
                    }

                    .dot:first-child {
                        margin-left: 0;
                    }

                    .hero-stats-note {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0;
                    }

                    .glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                    }

                    .glow-accent {
                        top: -1.5rem;
                        right: -1.5rem;
                        width: 6rem;
                        height: 6rem;
                        background: var(--accent);
                        opacity: 0.5;
                    }

                    .glow-secondary {
                        bottom: -2.5rem;
                        left: -2.5rem;
                        width: 10rem;
                        height: 10rem;
                        background: var(--secondary);
                        opacity: 0.3;
                    }

                    @media (max-width: 768px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }

                        .hero-visual {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
