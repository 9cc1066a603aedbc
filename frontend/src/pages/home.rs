use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::magnetic::Magnetic;
use crate::components::marquee::Marquee;
use crate::components::reveal::{Parallax, Reveal};
use crate::components::scramble::ScrambleText;
use crate::content::{articles, projects};
use crate::pages::articles::article_card;
use crate::pages::project_details::project_card;
use crate::Route;

struct Service {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        number: "01",
        title: "Brand identity",
        description: "Naming, strategy and visual systems that hold up from the launch deck to the hundredth campaign.",
    },
    Service {
        number: "02",
        title: "Websites",
        description: "Fast, animated marketing sites built in-house and handed over with a CMS your team will actually use.",
    },
    Service {
        number: "03",
        title: "Product design",
        description: "Research-led UX and interface design for apps and dashboards, from first prototype to design system.",
    },
    Service {
        number: "04",
        title: "Motion",
        description: "Interaction and scroll choreography that explains your product instead of decorating it.",
    },
];

struct Plan {
    name: &'static str,
    price: &'static str,
    cadence: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Launch",
        price: "$12k",
        cadence: "per project",
        features: &["Landing page", "Brand starter kit", "Two revision rounds", "Four weeks"],
        featured: false,
    },
    Plan {
        name: "Studio",
        price: "$28k",
        cadence: "per project",
        features: &["Multi-page website", "Full identity", "Motion system", "CMS handover"],
        featured: true,
    },
    Plan {
        name: "Partner",
        price: "$9k",
        cadence: "per month",
        features: &["Dedicated team", "Design and development", "Weekly releases", "Cancel anytime"],
        featured: false,
    },
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "They rebuilt our brand and our storefront in one quarter and conversion is still climbing.",
        "Dana Whitfield",
        "CMO, Northwind Outfitters",
    ),
    (
        "The onboarding redesign halved our drop-off. The team asked better questions than we did.",
        "Samuel Osei",
        "Head of Product, Lumen Health",
    ),
    (
        "Speaker pages went live the same day the line-up changed, every time.",
        "Ines Carvalho",
        "Director, Atlas Foundation",
    ),
];

const TEAM: [(&str, &str, &str); 4] = [
    ("Mira Holt", "Creative Director", "/assets/team/mira.webp"),
    ("Jonas Reyes", "Brand Lead", "/assets/team/jonas.webp"),
    ("Priya Natarajan", "Engineering Lead", "/assets/team/priya.webp"),
    ("Theo Lindqvist", "Motion Designer", "/assets/team/theo.webp"),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let featured = projects::catalog().all().iter().take(3);
    let insights = articles::newest_first(&articles::with_tag(None));
    let marquee_items: Vec<AttrValue> = ["Branding", "Websites", "Product", "Motion", "Campaigns"]
        .into_iter()
        .map(AttrValue::from)
        .collect();

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page section {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 8rem 2rem;
                    }
                    .home-page h2 {
                        font-size: clamp(2.2rem, 5vw, 4rem);
                        margin: 0 0 3rem;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        position: relative;
                    }
                    .hero h1 {
                        font-size: clamp(3.5rem, 12vw, 11rem);
                        line-height: 0.95;
                        margin: 0;
                    }
                    .hero-sub {
                        max-width: 520px;
                        font-size: 1.2rem;
                        color: #bbb;
                        margin: 2rem 0;
                    }
                    .hero-orb {
                        position: absolute;
                        top: 15%;
                        right: 5%;
                        width: 36vw;
                        height: 36vw;
                        border-radius: 50%;
                        background: radial-gradient(circle at 30% 30%, #7b8cff, #0b0b0d 70%);
                        filter: blur(20px);
                        z-index: -1;
                    }
                    .cta-button {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        border-radius: 999px;
                        background: #fff;
                        color: #0b0b0d;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .service-list {
                        display: grid;
                        gap: 0;
                    }
                    .service-row {
                        display: grid;
                        grid-template-columns: 80px 1fr 1.4fr;
                        gap: 2rem;
                        padding: 2.5rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.12);
                    }
                    .service-row h3 {
                        font-size: 1.8rem;
                        margin: 0;
                    }
                    .service-number {
                        color: #7b8cff;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .project-card, .article-card {
                        display: block;
                        color: inherit;
                        text-decoration: none;
                    }
                    .project-card-image, .article-card-image {
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                        border-radius: 12px;
                    }
                    .project-card-image img, .article-card-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .project-card-meta, .article-card-meta {
                        display: flex;
                        gap: 1rem;
                        justify-content: space-between;
                        margin-top: 1rem;
                        color: #999;
                        font-size: 0.85rem;
                    }
                    .section-link {
                        display: inline-block;
                        margin-top: 3rem;
                        color: #7b8cff;
                    }
                    .pricing-card {
                        padding: 2.5rem;
                        border-radius: 16px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                    }
                    .pricing-card.featured {
                        background: #fff;
                        color: #0b0b0d;
                    }
                    .pricing-card .price {
                        font-size: 3rem;
                        font-weight: 700;
                    }
                    .pricing-card ul {
                        padding-left: 1.2rem;
                        line-height: 2;
                    }
                    .testimonial blockquote {
                        font-size: 1.4rem;
                        margin: 0 0 1.5rem;
                    }
                    .testimonial cite {
                        color: #999;
                        font-style: normal;
                    }
                    .team-member img {
                        width: 100%;
                        aspect-ratio: 3 / 4;
                        object-fit: cover;
                        border-radius: 12px;
                    }
                    .faq-item {
                        border-top: 1px solid rgba(255, 255, 255, 0.12);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        padding: 1.5rem 0;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.2rem;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        color: #bbb;
                        transition: max-height 0.4s ease;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 400px;
                        padding-bottom: 1.5rem;
                    }
                    .contact-cta {
                        text-align: center;
                    }
                    .contact-cta h2 {
                        font-size: clamp(3rem, 9vw, 8rem);
                    }
                    @media (max-width: 800px) {
                        .service-row {
                            grid-template-columns: 1fr;
                            gap: 0.75rem;
                        }
                    }
                "#}
            </style>

            <section class="hero">
                <Parallax travel={120.0} class="hero-orb">
                    <div></div>
                </Parallax>
                <h1><ScrambleText text="We design brands that move." /></h1>
                <Reveal>
                    <p class="hero-sub">
                        {"An independent studio for identity, websites and motion. Small team, senior people, no hand-offs."}
                    </p>
                    <Magnetic>
                        <Link<Route> to={Route::Contact} classes="cta-button">{"Start a project"}</Link<Route>>
                    </Magnetic>
                </Reveal>
            </section>

            <Marquee items={marquee_items} />

            <section id="services">
                <Reveal><h2>{"What we do"}</h2></Reveal>
                <div class="service-list">
                    { for SERVICES.iter().map(|service| html! {
                        <Reveal class="service-row">
                            <span class="service-number">{service.number}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="work">
                <Reveal><h2>{"Selected work"}</h2></Reveal>
                <div class="card-grid">
                    { for featured.map(|project| html! {
                        <Reveal key={project.slug}>{ project_card(project) }</Reveal>
                    }) }
                </div>
                <Link<Route> to={Route::Projects} classes="section-link">{"All projects →"}</Link<Route>>
            </section>

            <section id="pricing">
                <Reveal><h2>{"Engagements"}</h2></Reveal>
                <div class="card-grid">
                    { for PLANS.iter().map(|plan| html! {
                        <Reveal class={classes!("pricing-card", plan.featured.then_some("featured"))}>
                            <h3>{plan.name}</h3>
                            <div class="price">{plan.price}</div>
                            <div class="cadence">{plan.cadence}</div>
                            <ul>
                                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="testimonials">
                <Reveal><h2>{"Kind words"}</h2></Reveal>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().map(|(quote, name, role)| html! {
                        <Reveal class="testimonial">
                            <blockquote>{format!("“{quote}”")}</blockquote>
                            <cite>{*name}{", "}{*role}</cite>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="team">
                <Reveal><h2>{"The team"}</h2></Reveal>
                <div class="card-grid">
                    { for TEAM.iter().map(|(name, role, photo)| html! {
                        <Reveal class="team-member">
                            <img src={*photo} alt={*name} loading="lazy" />
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="faq">
                <Reveal><h2>{"Questions"}</h2></Reveal>
                <FaqItem question="How long does a project take?">
                    <p>{"Most identities take six to eight weeks. Websites run eight to twelve weeks depending on content and integrations."}</p>
                </FaqItem>
                <FaqItem question="Do you work with in-house teams?">
                    <p>{"Often. We can own the whole project or slot into your team's sprints and tooling."}</p>
                </FaqItem>
                <FaqItem question="What happens after launch?">
                    <p>{"Every site ships with documentation and a handover session. Partner clients get ongoing design and development each month."}</p>
                </FaqItem>
                <FaqItem question="Can you work to a fixed budget?">
                    <p>{"Yes. Tell us the number up front and we will shape the scope around it."}</p>
                </FaqItem>
            </section>

            <section id="insights">
                <Reveal><h2>{"Insights"}</h2></Reveal>
                <div class="card-grid">
                    { for insights.into_iter().take(3).map(|article| html! {
                        <Reveal key={article.slug}>{ article_card(article) }</Reveal>
                    }) }
                </div>
                <Link<Route> to={Route::Articles} classes="section-link">{"All articles →"}</Link<Route>>
            </section>

            <section class="contact-cta" id="contact">
                <Reveal>
                    <h2>{"Have a project in mind?"}</h2>
                    <Magnetic strength={0.4}>
                        <Link<Route> to={Route::Contact} classes="cta-button">{"Get in touch"}</Link<Route>>
                    </Magnetic>
                </Reveal>
            </section>
        </div>
    }
}
