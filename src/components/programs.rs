use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::{stagger, Motion, Reveal};
use crate::config;
use crate::content::{Program, PROGRAMS};
use crate::pages::landing::Section;

#[derive(Properties, PartialEq)]
pub struct ProgramCardProps {
    pub program: &'static Program,
    pub index: usize,
}

#[function_component(ProgramCard)]
pub fn program_card(props: &ProgramCardProps) -> Html {
    let program = props.program;
    let highlight = program.variant.is_highlight();

    html! {
        <Reveal motion={Motion::FadeUp(30.0)} duration={0.5} delay={stagger(props.index)}>
            <div class={program.variant.card_class()} data-card="program">
                <h3>{program.title}</h3>
                <span class="age-badge">{program.age}</span>
                <p class="program-description">{program.description}</p>
                <ul class="program-features">
                    { for program.features.iter().map(|feature| html! {
                        <li>
                            <IconView
                                icon={Icon::CheckCircle}
                                size={18}
                                class={if highlight { "accent" } else { "secondary" }}
                            />
                            {*feature}
                        </li>
                    }) }
                </ul>
                <a href={config::whatsapp_enquiry_url()} class="program-cta">
                    {"Daftar Kelas"}
                </a>
            </div>
        </Reveal>
    }
}

#[function_component(Programs)]
pub fn programs() -> Html {
    html! {
        <section id="programs" data-section={Section::Programs.name()} class="programs">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="eyebrow secondary">{"Our Programs"}</span>
                    <h2 class="section-title">{"Pilih Program Terbaikmu"}</h2>
                </div>

                <div class="program-grid">
                    { for PROGRAMS.iter().enumerate().map(|(index, program)| html! {
                        <ProgramCard program={program} index={index} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .programs {
                        padding: 6rem 0;
                        background: var(--soft);
                    }

                    .program-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .program-card {
                        height: 100%;
                        box-sizing: border-box;
                        padding: 2.5rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(15, 23, 66, 0.05);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }

                    .program-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 20px 40px rgba(30, 58, 138, 0.1);
                    }

                    .program-card.light {
                        background: #fff;
                    }

                    .program-card.highlight {
                        background: var(--secondary);
                        color: #fff;
                    }

                    .program-card h3 {
                        font-family: var(--font-serif);
                        font-size: 1.875rem;
                        margin: 0 0 0.5rem;
                    }

                    .age-badge {
                        display: inline-block;
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        background: rgba(30, 58, 138, 0.1);
                        color: var(--secondary);
                    }

                    .highlight .age-badge {
                        background: rgba(255, 255, 255, 0.2);
                        color: #fff;
                    }

                    .program-description {
                        margin-bottom: 2rem;
                        color: rgba(15, 23, 66, 0.6);
                    }

                    .highlight .program-description {
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .program-features {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 2.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .program-features li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-weight: 500;
                    }

                    .program-cta {
                        display: block;
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem 0;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        text-align: center;
                        text-decoration: none;
                        transition: all 0.3s;
                        background: var(--primary);
                        color: #fff;
                    }

                    .program-cta:hover {
                        background: var(--secondary);
                    }

                    .highlight .program-cta {
                        background: var(--accent);
                        color: var(--primary);
                    }

                    .highlight .program-cta:hover {
                        background: #fff;
                    }

                    @media (max-width: 768px) {
                        .program-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
