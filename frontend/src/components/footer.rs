use chrono::Datelike;
use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, SITE_NAME};
use crate::theme::ThemeProps;

// (label, glyph, href)
const SOCIAL_LINKS: [(&str, &str, &str); 5] = [
    ("LinkedIn", "in", "https://www.linkedin.com/company/zapcom-solutions-pvt-ltd-/posts/?feedView=all"),
    ("X", "𝕏", "https://x.com/ZapcomGroupInc"),
    ("Instagram", "◎", "https://www.instagram.com/zapcomgroup/"),
    ("Facebook", "f", "https://www.facebook.com/ZapcomGroup/"),
    ("YouTube", "▶", "https://www.youtube.com/@Zapcomgroup"),
];

const QUICK_LINKS: [(&str, &str); 4] = [
    ("About Us", "https://zapcom.ai/about-us"),
    ("Services", "https://zapcom.ai/services"),
    ("Careers", "https://zapcom.ai/careers"),
    ("Blog", "https://zapcom.ai/blogs"),
];

const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

/// The footer is dark in both themes; the theme only adjusts the border.
#[function_component(Footer)]
pub fn footer(props: &ThemeProps) -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class={classes!("footer", props.theme.class())}>
            <div class="footer__inner">
                <div class="footer__grid">
                    <div class="footer__brand">
                        <img src="/zapcom.png" alt="Zapcom" />
                        <p>
                            {"Transforming moonshots into market reality. We build extraordinary digital solutions that drive innovation and business growth."}
                        </p>
                        <div class="footer__social">
                            { for SOCIAL_LINKS.iter().map(|(label, glyph, href)| html! {
                                <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label}>
                                    {*glyph}
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for QUICK_LINKS.iter().map(|(label, href)| html! {
                                <li key={*label}>
                                    <a href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact"}</h4>
                        <a class="footer__contact" href={format!("mailto:{}", CONTACT_EMAIL)}>
                            {"✉️ "}{CONTACT_EMAIL}
                        </a>
                        <a class="footer__contact" href="https://zapcom.ai/" target="_blank" rel="noopener noreferrer">
                            {"🌐 www.zapcom.ai"}
                        </a>
                        <p class="footer__newsletter-label">{"Subscribe to our newsletter"}</p>
                        <div class="footer__newsletter">
                            <input type="email" placeholder="Your email" />
                            <button>{"Join"}</button>
                        </div>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p>{format!("© {} {}. All rights reserved.", current_year, SITE_NAME)}</p>
                    <div class="footer__legal">
                        { for LEGAL_LINKS.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    background: #111827;
                    color: #fff;
                    border-top: 1px solid #1f2937;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer.theme-light { border-top-color: #1f2937; }
                .footer__inner { max-width: 80rem; margin: 0 auto; }
                .footer__grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                    margin-bottom: 3rem;
                }
                .footer__brand img { height: 3rem; margin-bottom: 1rem; }
                .footer__brand p { color: #9ca3af; max-width: 28rem; }
                .footer__social { display: flex; gap: 0.75rem; margin-top: 1.5rem; }
                .footer__social a {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #1f2937;
                    color: #fff;
                    text-decoration: none;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .footer__social a:hover { background: #2563eb; transform: translateY(-3px); }
                .footer h4 { margin-bottom: 1rem; }
                .footer ul { list-style: none; padding: 0; }
                .footer li { margin-bottom: 0.5rem; }
                .footer a { color: #9ca3af; text-decoration: none; }
                .footer a:hover { color: #fff; }
                .footer__contact { display: block; margin-bottom: 0.75rem; }
                .footer__newsletter-label { margin-top: 1.5rem; color: #9ca3af; font-size: 0.875rem; }
                .footer__newsletter { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
                .footer__newsletter input {
                    flex: 1;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    border: 1px solid #374151;
                    background: #1f2937;
                    color: #fff;
                }
                .footer__newsletter button {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #2563eb;
                    color: #fff;
                    cursor: pointer;
                }
                .footer__bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .footer__legal { display: flex; gap: 1.5rem; }
                @media (max-width: 768px) {
                    .footer__grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
