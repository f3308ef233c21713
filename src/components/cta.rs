use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::{Motion, Reveal};
use crate::config;
use crate::pages::landing::Section;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section id="contact" data-section={Section::CallToAction.name()} class="cta">
            <Reveal motion={Motion::Zoom(0.95)} class="cta-panel">
                <div class="cta-glows" aria-hidden="true">
                    <div class="cta-glow white"></div>
                    <div class="cta-glow gold"></div>
                </div>

                <div class="cta-body">
                    <h2>
                        {"Siap Memulai Perjalanan"}<br />
                        {"Bahasa Inggrismu?"}
                    </h2>
                    <p>
                        {"Dapatkan konsultasi gratis dan penempatan level hari ini. Bergabunglah dengan ratusan siswa sukses lainnya."}
                    </p>
                    <div class="cta-actions">
                        <a href={config::whatsapp_enquiry_url()} class="cta-button">
                            <IconView icon={Icon::PhoneCall} size={24} />
                            {"Hubungi via WhatsApp"}
                        </a>
                        <div class="cta-note">
                            <IconView icon={Icon::CheckCircle} size={20} class="accent" />
                            <span>{"Respon Cepat & Ramah"}</span>
                        </div>
                    </div>
                </div>
            </Reveal>

            <style>
                {r#"
                    .cta {
                        padding: 6rem 1.5rem;
                    }

                    .cta-panel {
                        position: relative;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 6rem;
                        background: var(--secondary);
                        border-radius: 3rem;
                        text-align: center;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }

                    .cta-glows {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        pointer-events: none;
                    }

                    .cta-glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                    }

                    .cta-glow.white {
                        top: 2.5rem;
                        left: 2.5rem;
                        width: 16rem;
                        height: 16rem;
                        background: #fff;
                    }

                    .cta-glow.gold {
                        bottom: 2.5rem;
                        right: 2.5rem;
                        width: 24rem;
                        height: 24rem;
                        background: var(--accent);
                    }

                    .cta-body {
                        position: relative;
                        z-index: 10;
                    }

                    .cta-body h2 {
                        color: #fff;
                        font-family: var(--font-serif);
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        line-height: 1.2;
                        margin: 0 0 2rem;
                    }

                    .cta-body p {
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                    }

                    .cta-actions {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .cta-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1.25rem 2.5rem;
                        border-radius: 9999px;
                        background: var(--accent);
                        color: var(--primary);
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-decoration: none;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                        transition: all 0.3s;
                    }

                    .cta-button:hover {
                        background: #fff;
                        transform: scale(1.05);
                    }

                    .cta-note {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    @media (max-width: 768px) {
                        .cta-panel {
                            padding: 3rem;
                        }

                        .cta-actions {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
