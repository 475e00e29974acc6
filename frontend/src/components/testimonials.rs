use yew::prelude::*;

use crate::theme::ThemeProps;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    image: &'static str,
    content: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Sarah Chen",
        role: "CEO, FinanceFirst Corporation",
        company: "FinTech",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop",
        content: "Studio Zapminds transformed our legacy banking system into a modern, scalable platform. Their expertise in fintech and attention to security was exceptional. We saw a 300% increase in user adoption.",
        rating: 5,
    },
    Testimonial {
        name: "Dr. Michael Roberts",
        role: "CTO, MediCare Health Systems",
        company: "Healthcare",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop",
        content: "The telemedicine platform they built has been a game-changer for our organization. Patient satisfaction scores increased dramatically, and we've been able to expand healthcare access to underserved communities.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "VP of Technology, RetailMax International",
        company: "E-Commerce",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop",
        content: "Our e-commerce platform needed to scale for Black Friday, and Zapminds delivered beyond expectations. The platform handled 10M+ concurrent users flawlessly. Their AI-powered recommendations increased our average order value.",
        rating: 5,
    },
    Testimonial {
        name: "James Anderson",
        role: "Director of Innovation, TechCorp Solutions",
        company: "AI & Tech",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
        content: "The AI assistant they developed cut our customer support costs by 60% while improving satisfaction. The team's deep understanding of machine learning and NLP is evident in the quality of the solution.",
        rating: 5,
    },
    Testimonial {
        name: "Maria Santos",
        role: "Chief Digital Officer, Municipal Infrastructure Group",
        company: "Smart Cities",
        image: "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?w=400&h=400&fit=crop",
        content: "Their IoT platform has revolutionized how we manage city infrastructure. We've achieved 35% energy savings and dramatically improved emergency response times. The ROI exceeded all our projections.",
        rating: 5,
    },
    Testimonial {
        name: "David Kim",
        role: "Founder & CEO, StartupXYZ",
        company: "SaaS",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
        content: "From MVP to Series A, Zapminds has been our technology partner. They move fast, think strategically, and build with quality. Their team feels like an extension of ours.",
        rating: 5,
    },
];

const TRUST: [(&str, &str); 4] = [
    ("100+", "Projects Delivered"),
    ("50+", "Happy Clients"),
    ("4.9/5", "Client Rating"),
    ("95%", "Client Retention"),
];

#[function_component(Testimonials)]
pub fn testimonials(props: &ThemeProps) -> Html {
    html! {
        <section id="testimonials" class={classes!("section", "section--tinted", props.theme.class())}>
            <div class="section__inner">
                <div class="section__header">
                    <span class="section-badge section-badge--green">{"Client Success Stories"}</span>
                    <h2 class="section-title">{"What Our Clients Say"}</h2>
                    <p class="section-lead">
                        {"Don't just take our word for it. Hear from the leaders who've partnered with us to transform their businesses."}
                    </p>
                </div>

                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="card testimonial">
                            <div class="testimonial__quote">{"❝"}</div>
                            <div class="testimonial__stars">
                                { for (0..t.rating).map(|_| html! { <span>{"★"}</span> }) }
                            </div>
                            <p class="testimonial__content">{format!("\"{}\"", t.content)}</p>
                            <div class="testimonial__author">
                                <img src={t.image} alt={t.name} />
                                <div>
                                    <div class="testimonial__name">{t.name}</div>
                                    <div class="testimonial__role">{t.role}</div>
                                    <div class="testimonial__company">{t.company}</div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="trust-grid">
                    { for TRUST.iter().map(|(value, label)| html! {
                        <div class="trust">
                            <div class="trust__value">{*value}</div>
                            <div class="trust__label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .testimonial { position: relative; }
                .testimonial__quote {
                    position: absolute;
                    top: 1rem;
                    right: 1.5rem;
                    font-size: 3rem;
                    opacity: 0.2;
                }
                .testimonial__stars { color: #facc15; margin-bottom: 1rem; }
                .testimonial__content { font-style: italic; margin-bottom: 1.5rem; }
                .testimonial__author { display: flex; align-items: center; gap: 1rem; }
                .testimonial__author img {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .testimonial__name { font-weight: 600; }
                .testimonial__role { font-size: 0.875rem; opacity: 0.75; }
                .testimonial__company { font-size: 0.75rem; color: #2563eb; }
                .trust-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 1.5rem;
                    margin-top: 4rem;
                    text-align: center;
                }
                .trust__value {
                    font-size: 2rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                "#}
            </style>
        </section>
    }
}
