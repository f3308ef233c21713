use yew::prelude::*;

use crate::components::{
    about::About, cta::CallToAction, footer::Footer, hero::Hero, navbar::Navbar,
    programs::Programs, testimonials::Testimonials, why_us::WhyUs,
};
use crate::seo::StructuredData;

/// The blocks the landing page is made of, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Navbar,
    Hero,
    About,
    Programs,
    WhyUs,
    Testimonials,
    CallToAction,
    Footer,
}

pub const PAGE_SECTIONS: [Section; 8] = [
    Section::Navbar,
    Section::Hero,
    Section::About,
    Section::Programs,
    Section::WhyUs,
    Section::Testimonials,
    Section::CallToAction,
    Section::Footer,
];

impl Section {
    /// Value of the `data-section` marker on the section's root element.
    pub fn name(self) -> &'static str {
        match self {
            Section::Navbar => "navbar",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Programs => "programs",
            Section::WhyUs => "why-us",
            Section::Testimonials => "testimonials",
            Section::CallToAction => "call-to-action",
            Section::Footer => "footer",
        }
    }

    fn render(self) -> Html {
        match self {
            Section::Navbar => html! { <Navbar /> },
            Section::Hero => html! { <Hero /> },
            Section::About => html! { <About /> },
            Section::Programs => html! { <Programs /> },
            Section::WhyUs => html! { <WhyUs /> },
            Section::Testimonials => html! { <Testimonials /> },
            Section::CallToAction => html! { <CallToAction /> },
            Section::Footer => html! { <Footer /> },
        }
    }

    fn in_main(self) -> bool {
        !matches!(self, Section::Navbar | Section::Footer)
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <StructuredData />
            { Section::Navbar.render() }
            <main>
                { for PAGE_SECTIONS.iter().copied().filter(|s| s.in_main()).map(Section::render) }
            </main>
            { Section::Footer.render() }

            <style>
                {r#"
                    :root {
                        --primary: #0f1742;
                        --secondary: #1e3a8a;
                        --accent: #fbbf24;
                        --soft: #f5f7fb;
                        --font-serif: "Playfair Display", Georgia, serif;
                        --font-sans: "Inter", system-ui, sans-serif;
                    }

                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        font-family: var(--font-sans);
                        color: var(--primary);
                        background: var(--soft);
                    }

                    .landing-page ::selection {
                        background: var(--accent);
                        color: var(--primary);
                    }

                    .accent {
                        color: var(--accent);
                    }

                    .secondary {
                        color: var(--secondary);
                    }

                    .italic {
                        font-style: italic;
                    }

                    .eyebrow {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin-bottom: 1rem;
                    }

                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .section-title {
                        font-family: var(--font-serif);
                        font-size: clamp(3rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.15;
                        color: var(--primary);
                        margin: 0 0 2rem;
                    }

                    .section-heading .section-title {
                        margin: 0;
                    }

                    .section-title.light {
                        color: #fff;
                    }

                    .reveal {
                        opacity: 0;
                        transform: var(--reveal-from);
                        transition-property: opacity, transform;
                        transition-timing-function: ease-out;
                    }

                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }

                    @media (prefers-reduced-motion: reduce) {
                        html {
                            scroll-behavior: auto;
                        }

                        .reveal {
                            opacity: 1;
                            transform: none;
                            transition: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{NAV_LINKS, PROGRAMS, REASONS, TESTIMONIALS};
    use yew::ServerRenderer;

    async fn render_page() -> String {
        ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await
    }

    fn positions(html: &str, needles: &[String]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| {
                html.find(needle.as_str())
                    .unwrap_or_else(|| panic!("{} missing from page", needle))
            })
            .collect()
    }

    fn assert_ascending(found: &[usize]) {
        assert!(found.windows(2).all(|w| w[0] < w[1]), "out of order: {:?}", found);
    }

    #[test]
    fn eight_sections_in_fixed_order() {
        let names: Vec<_> = PAGE_SECTIONS.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            ["navbar", "hero", "about", "programs", "why-us", "testimonials", "call-to-action", "footer"]
        );
    }

    #[tokio::test]
    async fn page_renders_sections_in_order() {
        let html = render_page().await;
        let markers: Vec<_> = PAGE_SECTIONS
            .iter()
            .map(|s| format!("data-section=\"{}\"", s.name()))
            .collect();
        let found = positions(&html, &markers);
        assert_ascending(&found);

        for marker in &markers {
            assert_eq!(html.matches(marker.as_str()).count(), 1, "{} rendered twice", marker);
        }
    }

    #[tokio::test]
    async fn every_nav_link_targets_a_section() {
        let html = render_page().await;
        for link in NAV_LINKS {
            let id = link.href.trim_start_matches('#');
            assert_eq!(html.matches(&format!("id=\"{}\"", id)).count(), 1, "{} has no section", link.href);
        }
    }

    #[tokio::test]
    async fn navbar_and_footer_sit_outside_main() {
        let html = render_page().await;
        let main_open = html.find("<main>").expect("main element");
        let main_close = html.find("</main>").expect("main element closed");
        let navbar = html.find("data-section=\"navbar\"").unwrap();
        let footer = html.find("data-section=\"footer\"").unwrap();
        assert!(navbar < main_open);
        assert!(footer > main_close);

        for section in ["hero", "about", "programs", "why-us", "testimonials", "call-to-action"] {
            let at = html.find(&format!("data-section=\"{}\"", section)).unwrap();
            assert!(main_open < at && at < main_close, "{} outside main", section);
        }
    }

    #[tokio::test]
    async fn one_card_per_entry_in_source_order() {
        let html = render_page().await;

        assert_eq!(html.matches("data-card=\"program\"").count(), PROGRAMS.len());
        assert_eq!(html.matches("data-card=\"reason\"").count(), REASONS.len());
        assert_eq!(html.matches("data-card=\"testimonial\"").count(), TESTIMONIALS.len());
        assert_eq!(html.matches("class=\"nav-link\"").count(), NAV_LINKS.len());
        assert_eq!(html.matches("class=\"mobile-link\"").count(), NAV_LINKS.len());

        let titles: Vec<_> = PROGRAMS.iter().map(|p| format!("<h3>{}</h3>", p.title)).collect();
        assert_ascending(&positions(&html, &titles));

        let reasons: Vec<_> = REASONS.iter().map(|r| format!("<h4>{}</h4>", r.title)).collect();
        assert_ascending(&positions(&html, &reasons));

        let authors: Vec<_> = TESTIMONIALS.iter().map(|t| format!("<h5>{}</h5>", t.name)).collect();
        assert_ascending(&positions(&html, &authors));

        let labels: Vec<_> = NAV_LINKS.iter().map(|l| format!(">{}</a>", l.label)).collect();
        assert_ascending(&positions(&html, &labels));
    }

    #[tokio::test]
    async fn initial_render_has_closed_menu_and_transparent_bar() {
        let html = render_page().await;
        assert!(html.contains("class=\"mobile-menu\""));
        assert!(!html.contains("mobile-menu open"));
        assert!(html.contains("class=\"top-nav\""));
        assert!(!html.contains("top-nav scrolled"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[tokio::test]
    async fn highlighted_program_gets_its_own_card_style() {
        let html = render_page().await;
        assert_eq!(html.matches("class=\"program-card highlight\"").count(), 1);
        assert_eq!(html.matches("class=\"program-card light\"").count(), 2);
    }
}
