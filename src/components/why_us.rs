use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::{stagger, Motion, Reveal};
use crate::content::{avatar_url, ALUMNI_AVATAR_SEEDS, ALUMNI_RATING, REASONS};
use crate::pages::landing::Section;

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    html! {
        <section id="why-us" data-section={Section::WhyUs.name()} class="why-us">
            <div class="why-us-stripe" aria-hidden="true"></div>

            <div class="why-us-grid">
                <div>
                    <span class="eyebrow accent">{"Why Choose Us"}</span>
                    <h2 class="section-title light">
                        {"Investasi Terbaik"}<br />
                        {"Untuk "}<span class="italic accent">{"Masa Depanmu."}</span>
                    </h2>
                    <p class="why-us-lead">
                        {"Kami tidak hanya mengajarkan bahasa, kami membangun kepercayaan diri Anda untuk melangkah lebih jauh di kancah internasional."}
                    </p>
                    <div class="alumni">
                        <div class="avatar-stack">
                            { for ALUMNI_AVATAR_SEEDS.map(|seed| html! {
                                <div class="avatar">
                                    <img src={avatar_url(seed)} alt="Avatar" loading="lazy" referrerpolicy="no-referrer" />
                                </div>
                            }) }
                        </div>
                        <div>
                            <div class="stars accent">
                                { for (0..5).map(|_| html! { <IconView icon={Icon::Star} size={16} filled={true} /> }) }
                            </div>
                            <p class="rating">{format!("{}/5 Rating dari Alumni", ALUMNI_RATING)}</p>
                        </div>
                    </div>
                </div>

                <div class="reason-grid">
                    { for REASONS.iter().enumerate().map(|(index, reason)| html! {
                        <Reveal motion={Motion::Zoom(0.9)} duration={0.5} delay={stagger(index)}>
                            <div class="reason-card" data-card="reason">
                                <div class="reason-icon">
                                    <IconView icon={reason.icon} size={40} class="accent" />
                                </div>
                                <h4>{reason.title}</h4>
                                <p>{reason.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .why-us {
                        position: relative;
                        padding: 6rem 0;
                        background: var(--primary);
                        color: #fff;
                        overflow: hidden;
                    }

                    .why-us-stripe {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 33.333%;
                        height: 100%;
                        background: rgba(30, 58, 138, 0.2);
                        transform: translateX(50%) skewX(-12deg);
                    }

                    .why-us-grid {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    .why-us-lead {
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1.125rem;
                        max-width: 32rem;
                        margin-bottom: 3rem;
                    }

                    .alumni {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .avatar-stack {
                        display: flex;
                    }

                    .avatar {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        border: 4px solid var(--primary);
                        background: var(--secondary);
                        overflow: hidden;
                        margin-left: -1rem;
                    }

                    .avatar:first-child {
                        margin-left: 0;
                    }

                    .avatar img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .stars {
                        display: flex;
                        margin-bottom: 0.25rem;
                    }

                    .rating {
                        font-size: 0.875rem;
                        font-weight: 700;
                        margin: 0;
                    }

                    .reason-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }

                    .reason-card {
                        height: 100%;
                        box-sizing: border-box;
                        padding: 2rem;
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1.5rem;
                        transition: background 0.3s;
                    }

                    .reason-card:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .reason-icon {
                        margin-bottom: 1.5rem;
                    }

                    .reason-card h4 {
                        font-size: 1.25rem;
                        margin: 0 0 0.75rem;
                    }

                    .reason-card p {
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin: 0;
                    }

                    @media (max-width: 1024px) {
                        .why-us-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    @media (max-width: 640px) {
                        .reason-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
