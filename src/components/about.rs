use yew::prelude::*;

use crate::components::icons::IconView;
use crate::components::reveal::{Motion, Reveal};
use crate::content::{Highlight, CLASSROOM_IMAGE, HIGHLIGHTS};
use crate::pages::landing::Section;

#[derive(Properties, PartialEq)]
struct HighlightTileProps {
    highlight: &'static Highlight,
}

#[function_component(HighlightTile)]
fn highlight_tile(props: &HighlightTileProps) -> Html {
    let highlight = props.highlight;
    html! {
        <div class="highlight-tile" data-card="highlight">
            <IconView icon={highlight.icon} size={32} class="secondary" />
            <h4>{highlight.title}</h4>
            <p>{highlight.description}</p>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" data-section={Section::About.name()} class="about">
            <div class="about-grid">
                <Reveal motion={Motion::FadeUp(50.0)}>
                    <h2 class="section-title">
                        {"Lebih Dari Sekadar"}<br />
                        <span class="secondary">{"Tempat Kursus."}</span>
                    </h2>
                    <p class="about-lead">
                        {"LinguistPro hadir untuk mendefinisikan ulang cara Anda belajar bahasa Inggris. Kami percaya bahwa bahasa bukan hanya soal tata bahasa, tapi soal koneksi dan ekspresi diri. Dengan kurikulum yang disesuaikan dengan kebutuhan industri modern, kami membantu Anda mencapai potensi maksimal."}
                    </p>
                    <div class="highlight-grid">
                        { for HIGHLIGHTS.iter().map(|highlight| html! {
                            <HighlightTile highlight={highlight} />
                        }) }
                    </div>
                </Reveal>

                <Reveal motion={Motion::FromRight(50.0)} class="about-visual">
                    <div class="about-photo">
                        <img
                            src={CLASSROOM_IMAGE}
                            alt="Classroom"
                            loading="lazy"
                            referrerpolicy="no-referrer"
                        />
                    </div>
                    <div class="satisfaction-badge">
                        <div class="satisfaction-value">{"98%"}</div>
                        <div class="satisfaction-label">{"Kepuasan Siswa"}</div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                    .about {
                        padding: 6rem 0;
                        background: #fff;
                        overflow: hidden;
                    }

                    .about-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    .about-lead {
                        color: rgba(15, 23, 66, 0.7);
                        font-size: 1.125rem;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }

                    .highlight-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }

                    .highlight-tile {
                        padding: 1.5rem;
                        background: var(--soft);
                        border: 1px solid rgba(15, 23, 66, 0.05);
                        border-radius: 1rem;
                    }

                    .highlight-tile h4 {
                        font-size: 1.25rem;
                        margin: 1rem 0 0.5rem;
                    }

                    .highlight-tile p {
                        font-size: 0.875rem;
                        color: rgba(15, 23, 66, 0.6);
                        margin: 0;
                    }

                    .about-visual {
                        position: relative;
                    }

                    .about-photo {
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        transform: rotate(3deg);
                        transition: transform 0.5s;
                    }

                    .about-photo:hover {
                        transform: rotate(0deg);
                    }

                    .about-photo img {
                        display: block;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .satisfaction-badge {
                        position: absolute;
                        bottom: -2.5rem;
                        left: -2.5rem;
                        padding: 2.5rem;
                        background: var(--primary);
                        border-radius: 1.5rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                    }

                    .satisfaction-value {
                        color: #fff;
                        font-family: var(--font-serif);
                        font-size: 3rem;
                        font-weight: 700;
                    }

                    .satisfaction-label {
                        color: var(--accent);
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    @media (max-width: 1024px) {
                        .satisfaction-badge {
                            display: none;
                        }
                    }

                    @media (max-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }

                        .highlight-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
