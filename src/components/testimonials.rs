use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::{stagger, Motion, Reveal};
use crate::content::TESTIMONIALS;
use crate::pages::landing::Section;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section data-section={Section::Testimonials.name()} class="testimonials">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="eyebrow secondary">{"Testimonial"}</span>
                    <h2 class="section-title">{"Apa Kata Mereka?"}</h2>
                </div>

                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <Reveal motion={Motion::FadeUp(20.0)} duration={0.5} delay={stagger(index)}>
                            <figure class="testimonial-card" data-card="testimonial">
                                <div class="quote-mark">
                                    <IconView icon={Icon::MessageSquare} size={60} filled={true} />
                                </div>
                                <blockquote>{format!("\"{}\"", testimonial.quote)}</blockquote>
                                <figcaption class="author">
                                    <div class="author-initial">{testimonial.initial()}</div>
                                    <div>
                                        <h5>{testimonial.name}</h5>
                                        <p>{testimonial.role}</p>
                                    </div>
                                </figcaption>
                            </figure>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .testimonials {
                        padding: 6rem 0;
                        background: #fff;
                    }

                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .testimonial-card {
                        position: relative;
                        height: 100%;
                        box-sizing: border-box;
                        margin: 0;
                        padding: 2.5rem;
                        background: var(--soft);
                        border: 1px solid rgba(15, 23, 66, 0.05);
                        border-radius: 1.5rem;
                    }

                    .quote-mark {
                        position: absolute;
                        top: 2rem;
                        right: 2.5rem;
                        color: rgba(30, 58, 138, 0.1);
                    }

                    .testimonial-card blockquote {
                        position: relative;
                        z-index: 10;
                        margin: 0 0 2rem;
                        color: rgba(15, 23, 66, 0.7);
                        font-style: italic;
                        line-height: 1.7;
                    }

                    .author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .author-initial {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: var(--secondary);
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }

                    .author h5 {
                        margin: 0;
                        font-size: 1rem;
                        color: var(--primary);
                    }

                    .author p {
                        margin: 0;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: rgba(15, 23, 66, 0.5);
                    }

                    @media (max-width: 768px) {
                        .testimonial-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
