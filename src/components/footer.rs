use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::content::{CITY, DISTRICT, FOOTER_LINKS, LEGAL_LINKS, POSTAL_CODE, STREET_ADDRESS};
use crate::pages::landing::Section;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer data-section={Section::Footer.name()} class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href="#" class="footer-logo">
                            {"LINGUIST"}<span class="accent">{"PRO"}</span>
                        </a>
                        <p>
                            {"Lembaga kursus bahasa Inggris premium yang berfokus pada pengembangan kemampuan komunikasi dan kepercayaan diri siswa untuk menghadapi tantangan global."}
                        </p>
                    </div>

                    <div>
                        <h5 class="footer-heading">{"Navigasi"}</h5>
                        <ul class="footer-links">
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h5 class="footer-heading">{"Alamat"}</h5>
                        <address class="footer-address">
                            {format!("{},", STREET_ADDRESS)}<br />
                            {format!("{},", DISTRICT)}<br />
                            {format!("{}, {}", CITY, POSTAL_CODE)}
                        </address>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} LinguistPro English Course. All rights reserved.", year)}</p>
                    <div class="legal-links">
                        { for LEGAL_LINKS.iter().map(|link| html! {
                            <a href={link.href}>{link.label}</a>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: var(--primary);
                        color: #fff;
                        padding: 5rem 0 2.5rem;
                    }

                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                        margin-bottom: 4rem;
                    }

                    .footer-brand {
                        grid-column: span 2;
                    }

                    .footer-brand p {
                        color: rgba(255, 255, 255, 0.5);
                        max-width: 28rem;
                        line-height: 1.7;
                    }

                    .footer-logo {
                        display: block;
                        color: #fff;
                        font-family: var(--font-serif);
                        font-size: 1.875rem;
                        font-weight: 700;
                        letter-spacing: -0.05em;
                        text-decoration: none;
                        margin-bottom: 1.5rem;
                    }

                    .footer-heading {
                        color: var(--accent);
                        font-size: 1.125rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0 0 1.5rem;
                    }

                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .footer-links a,
                    .footer-address {
                        color: rgba(255, 255, 255, 0.6);
                        font-style: normal;
                        line-height: 1.7;
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .footer-links a:hover,
                    .legal-links a:hover {
                        color: #fff;
                    }

                    .footer-bottom {
                        padding-top: 2.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .legal-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .legal-links a {
                        color: inherit;
                        text-decoration: none;
                    }

                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }

                        .footer-brand {
                            grid-column: auto;
                        }

                        .footer-bottom {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
