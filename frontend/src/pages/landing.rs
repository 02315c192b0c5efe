use chrono::Datelike;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::components::fade_in::FadeIn;
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::content::{self, BRAND};

/// Stagger delay (seconds) for the `index`-th item of a revealed list.
fn stagger(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

#[function_component(Hero)]
fn hero() -> Html {
    let loaded = use_state_eq(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::HERO_REVEAL_DELAY_MS, move || loaded.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div class="hero-ring"></div>
            <div class="hero-glow"></div>
            <div class={classes!("hero-content", (*loaded).then(|| "loaded"))}>
                <div class="eyebrow-pill">{"A new category of wellness programming"}</div>
                <h1 class="hero-title">
                    {"There's a gym for "}
                    <span class="accent">{"every"}</span>
                    {" muscle, except the ones that matter most."}
                </h1>
                <p class="hero-lead">
                    {"Emotional fitness classes: facilitated group sessions where people practice real emotional intelligence skills. Not therapy. Not a lecture. A practice."}
                </p>
                <p class="hero-sub">
                    {"Bring a science-backed emotional fitness experience to your venue, studio, or workplace."}
                </p>
                <a href="#contact" class="hero-cta">{"Bring It To Your Space"}</a>
            </div>
        </section>
    }
}

#[function_component(Problem)]
fn problem() -> Html {
    html! {
        <section class="section section-light">
            <div class="section-inner">
                <FadeIn><div class="eyebrow">{"The gap"}</div></FadeIn>
                <FadeIn delay={0.1}>
                    <h2 class="section-title">
                        {"Your members invest in physical fitness. But emotional fitness? There's no class for that."}
                    </h2>
                </FadeIn>
                <div class="card-grid">
                    {
                        for content::AUDIENCES.iter().enumerate().map(|(i, audience)| html! {
                            <FadeIn key={i} delay={stagger(0.15, 0.1, i)}>
                                <div class="card">
                                    <div class="card-label">{audience.label}</div>
                                    <p>{audience.text}</p>
                                </div>
                            </FadeIn>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Format)]
fn format_section() -> Html {
    html! {
        <section class="section section-dark">
            <div class="section-inner">
                <FadeIn><div class="eyebrow">{"The format"}</div></FadeIn>
                <FadeIn delay={0.1}>
                    <h2 class="section-title">{"What is an emotional fitness class?"}</h2>
                </FadeIn>
                <FadeIn delay={0.15}>
                    <p class="section-lead">
                        {"A 2-hour facilitated group session, designed for 6 to 24 participants, where people practice emotional intelligence through guided exercises, structured reflection, and real conversation. Each session focuses on a different theme from a tested, science-backed curriculum."}
                    </p>
                </FadeIn>
                <div class="stat-grid">
                    {
                        for content::STATS.iter().enumerate().map(|(i, stat)| html! {
                            <FadeIn key={i} delay={stagger(0.2, 0.08, i)}>
                                <div class="stat">
                                    <div class="stat-num">{stat.num}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            </FadeIn>
                        })
                    }
                </div>
                <FadeIn delay={0.3}>
                    <div class="topics-heading">{"Sample topics from the catalog"}</div>
                </FadeIn>
                <div class="topics">
                    {
                        for content::TOPICS.iter().enumerate().map(|(i, topic)| html! {
                            <FadeIn key={i} delay={stagger(0.35, 0.05, i)}>
                                <span class="topic">{*topic}</span>
                            </FadeIn>
                        })
                    }
                    <FadeIn delay={0.65}>
                        <span class="topic topic-more">{"+ many more"}</span>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}

#[function_component(Proof)]
fn proof() -> Html {
    html! {
        <section class="section section-light">
            <div class="section-inner">
                <FadeIn><div class="eyebrow">{"Proven demand"}</div></FadeIn>
                <FadeIn delay={0.1}>
                    <h2 class="section-title">{"Built at a sold-out private club. Ready for yours."}</h2>
                </FadeIn>
                <FadeIn delay={0.15}>
                    <p class="section-lead">
                        {"This format was developed and refined over 15 months of live workshops at an exclusive Denver social club. What started as an experiment became the most in-demand class on the calendar, regularly selling out with a growing waitlist."}
                    </p>
                </FadeIn>
                <FadeIn delay={0.2}>
                    <Testimonials items={content::TESTIMONIALS} />
                </FadeIn>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section class="section section-mint">
            <div class="section-inner">
                <FadeIn><div class="eyebrow">{"For partners"}</div></FadeIn>
                <FadeIn delay={0.1}>
                    <h2 class="section-title">{"Bringing emotional fitness to your space is simple."}</h2>
                </FadeIn>
                <div class="steps">
                    {
                        for content::STEPS.iter().enumerate().map(|(i, step)| html! {
                            <FadeIn key={i} delay={stagger(0.15, 0.1, i)}>
                                <div class="step">
                                    <div class="step-num">{step.num}</div>
                                    <div>
                                        <h3>{step.title}</h3>
                                        <p>{step.desc}</p>
                                    </div>
                                </div>
                            </FadeIn>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    html! {
        <section class="section section-light" id="pricing">
            <div class="section-inner">
                <FadeIn><div class="eyebrow">{"Pricing"}</div></FadeIn>
                <FadeIn delay={0.1}>
                    <h2 class="section-title">{"Programs sized to your community."}</h2>
                </FadeIn>
                <div class="pricing-grid">
                    {
                        for content::PRICING_TIERS.iter().enumerate().map(|(i, tier)| html! {
                            <FadeIn key={i} delay={stagger(0.15, 0.1, i)}>
                                <div class={classes!("tier", tier.featured.then(|| "tier-featured"))}>
                                    <h3 class="tier-name">{tier.name}</h3>
                                    <div class="tier-price">
                                        {tier.price}
                                        <span class="tier-cadence">{format!(" / {}", tier.cadence)}</span>
                                    </div>
                                    <p class="tier-summary">{tier.summary}</p>
                                    <ul class="tier-features">
                                        { for tier.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                    </ul>
                                    <a href="#contact" class="tier-cta">{"Ask about this"}</a>
                                </div>
                            </FadeIn>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section class="section section-light">
            <div class="section-inner about">
                <FadeIn>
                    <div class="about-photo">
                        <div class="about-initial">{"M"}</div>
                        <div class="about-caption">{"Photo placeholder"}</div>
                    </div>
                </FadeIn>
                <div>
                    <FadeIn delay={0.1}><div class="eyebrow">{"The facilitator"}</div></FadeIn>
                    <FadeIn delay={0.15}><h2 class="section-title">{"Marina Foerster"}</h2></FadeIn>
                    <FadeIn delay={0.2}>
                        <p>
                            {"Marina is a coach with advanced training in neuroscience-based and experiential methods. Her work integrates Polyvagal Theory, Internal Family Systems, EMDR, Emotionally Focused Therapy, and mindfulness-based approaches, drawing from the most effective elements across disciplines rather than relying on a single model."}
                        </p>
                    </FadeIn>
                    <FadeIn delay={0.25}>
                        <p>
                            {"After years of helping individuals transform through 1:1 coaching, she developed the EQ & You format to make deep emotional intelligence work accessible to groups. What started as an experiment at a private Denver social club became a consistently sold-out class with a waitlist, and the realization that she'd created something entirely new: an emotional fitness practice."}
                        </p>
                    </FadeIn>
                    <FadeIn delay={0.3}>
                        <p class="about-quote">
                            {"\u{201C}I wanted to create the thing that didn't exist: a place where people could practice emotional skills the way they practice physical ones. Regularly. In community. Without needing a diagnosis or a three-month commitment.\u{201D}"}
                        </p>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section class="section section-dark" id="contact">
            <div class="section-inner contact">
                <FadeIn><div class="eyebrow">{"Get started"}</div></FadeIn>
                <FadeIn delay={0.1}>
                    <h2 class="section-title">{"Bring emotional fitness to your space"}</h2>
                </FadeIn>
                <FadeIn delay={0.15}>
                    <p class="section-lead">
                        {"Interested in offering EQ & You at your venue, studio, or workplace? Leave your details and we'll be in touch."}
                    </p>
                </FadeIn>
                <FadeIn delay={0.2}>
                    <ContactFormView />
                </FadeIn>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="footer">
            <p>{format!("© {} {}. All rights reserved.", year, BRAND)}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <Problem />
            <Format />
            <Proof />
            <HowItWorks />
            <Pricing />
            <About />
            <Contact />
            <Footer />
        </div>
    }
}

/// Page-wide styles, rendered once by the app shell.
pub const GLOBAL_CSS: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body { background: #F7F9FA; overflow-x: hidden; font-family: 'DM Sans', system-ui, sans-serif; color: #1C2B33; }
    ::selection { background: #FF7A2F35; }

    .top-nav {
        position: fixed; top: 0; left: 0; right: 0; z-index: 100;
        padding: 22px 32px;
        border-bottom: 1px solid transparent;
        transition: all 0.4s ease;
    }
    .top-nav.scrolled {
        padding: 14px 32px;
        background: rgba(247, 249, 250, 0.95);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #DAE0E3;
    }
    .nav-content { display: flex; justify-content: space-between; align-items: center; }
    .nav-logo { display: flex; align-items: center; gap: 10px; text-decoration: none; color: #1C2B33; }
    .nav-mark {
        width: 32px; height: 32px; border-radius: 50%;
        background: linear-gradient(135deg, #FF7A2F, #0AADA0);
        display: flex; align-items: center; justify-content: center;
        font-size: 14px; font-weight: 700; color: #fff;
    }
    .nav-brand { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 18px; font-weight: 600; }
    .nav-cta {
        font-size: 13px; font-weight: 500; color: #fff; background: #1C2B33;
        padding: 10px 22px; border-radius: 100px; text-decoration: none;
        letter-spacing: 0.03em; text-transform: uppercase; transition: background 0.3s;
    }
    .nav-cta:hover { background: #0AADA0; }

    .hero {
        min-height: 100vh; display: flex; flex-direction: column;
        justify-content: center; align-items: center; text-align: center;
        padding: 140px 24px 80px; position: relative; overflow: hidden;
    }
    .hero-ring {
        position: absolute; top: 10%; right: -5%; width: 400px; height: 400px;
        border-radius: 50%; border: 1px solid #DAE0E3; opacity: 0.5; pointer-events: none;
    }
    .hero-glow {
        position: absolute; bottom: 15%; left: -8%; width: 300px; height: 300px;
        border-radius: 50%; background: #E8F5F3; opacity: 0.4; filter: blur(60px); pointer-events: none;
    }
    .hero-content { opacity: 0; transform: translateY(20px); transition: all 0.8s ease 0.2s; max-width: 860px; }
    .hero-content.loaded { opacity: 1; transform: translateY(0); }
    .eyebrow-pill {
        display: inline-block; font-size: 12px; letter-spacing: 0.14em; text-transform: uppercase;
        color: #089A8E; border: 1px solid #DAE0E3; border-radius: 100px; padding: 8px 18px; margin-bottom: 32px;
    }
    .hero-title {
        font-family: 'Cormorant Garamond', Georgia, serif; font-weight: 500;
        font-size: clamp(40px, 6vw, 72px); line-height: 1.08; margin-bottom: 28px;
    }
    .accent { color: #E86A20; font-style: italic; }
    .hero-lead { font-size: 19px; line-height: 1.7; color: #4A5B65; margin-bottom: 16px; }
    .hero-sub { font-size: 16px; color: #627680; margin-bottom: 44px; }
    .hero-cta {
        display: inline-block; background: #0AADA0; color: #fff; text-decoration: none;
        padding: 18px 40px; border-radius: 100px; font-weight: 600; letter-spacing: 0.04em;
        box-shadow: 0 4px 24px rgba(10, 173, 160, 0.3); transition: all 0.3s;
    }
    .hero-cta:hover { background: #1C2B33; box-shadow: 0 4px 24px rgba(28, 43, 51, 0.3); }

    .section { padding: 120px 24px; position: relative; }
    .section-light { background: #FFFFFF; }
    .section-mint { background: #E8F5F3; }
    .section-dark { background: #1C2B33; color: #F7F9FA; }
    .section-inner { max-width: 1000px; margin: 0 auto; }
    .eyebrow {
        font-size: 12px; letter-spacing: 0.16em; text-transform: uppercase;
        color: #E86A20; font-weight: 600; margin-bottom: 20px;
    }
    .section-dark .eyebrow { color: #FF9A5C; }
    .section-title {
        font-family: 'Cormorant Garamond', Georgia, serif; font-weight: 500;
        font-size: clamp(32px, 4.5vw, 48px); line-height: 1.15; margin-bottom: 28px;
    }
    .section-lead { font-size: 18px; line-height: 1.75; max-width: 720px; margin-bottom: 48px; opacity: 0.85; }

    .card-grid, .pricing-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px; margin-top: 48px; }
    .card { background: #F7F9FA; border: 1px solid #DAE0E3; border-radius: 16px; padding: 32px; height: 100%; }
    .card-label { font-weight: 600; color: #089A8E; margin-bottom: 12px; }
    .card p { line-height: 1.7; color: #4A5B65; }

    .stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 16px; margin-bottom: 64px; }
    .stat { border-top: 1px solid rgba(218, 224, 227, 0.25); padding-top: 20px; }
    .stat-num { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 40px; color: #2CBFB3; }
    .stat-label { font-size: 14px; color: #8A969E; }
    .topics-heading { font-size: 13px; letter-spacing: 0.12em; text-transform: uppercase; color: #8A969E; margin-bottom: 20px; }
    .topics { display: flex; flex-wrap: wrap; gap: 12px; }
    .topic { display: inline-block; padding: 10px 20px; border-radius: 100px; border: 1px solid rgba(218, 224, 227, 0.3); font-size: 15px; }
    .topic-more { color: #FFB580; border-style: dashed; }

    .carousel { max-width: 760px; margin: 24px auto 0; text-align: center; }
    .carousel-slide { opacity: 0; transition: opacity 0.25s ease; min-height: 220px; }
    .carousel-slide.visible { opacity: 1; }
    .carousel-quote-mark { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 72px; line-height: 1; color: #FF7A2F; }
    .carousel-quote { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 26px; line-height: 1.5; font-style: italic; margin-bottom: 20px; }
    .carousel-attribution { font-size: 14px; color: #627680; }
    .carousel-empty { color: #8A969E; font-style: italic; padding: 48px 0; }
    .carousel-controls { display: flex; justify-content: center; align-items: center; gap: 20px; margin-top: 32px; }
    .carousel-arrow {
        width: 40px; height: 40px; border-radius: 50%; border: 1px solid #DAE0E3;
        background: #fff; font-size: 22px; cursor: pointer; color: #1C2B33;
    }
    .carousel-arrow:hover, .carousel-arrow:focus { border-color: #0AADA0; color: #0AADA0; outline: none; }
    .carousel-dots { display: flex; gap: 10px; }
    .carousel-dot { width: 10px; height: 10px; border-radius: 50%; border: none; background: #DAE0E3; cursor: pointer; }
    .carousel-dot.active { background: #0AADA0; }

    .steps { display: flex; flex-direction: column; }
    .step { display: flex; gap: 32px; padding: 36px 0; border-bottom: 1px solid #DAE0E3; }
    .step-num { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 44px; color: #FF7A2F; min-width: 64px; }
    .step h3 { font-size: 22px; margin-bottom: 10px; }
    .step p { line-height: 1.7; color: #4A5B65; }

    .tier { border: 1px solid #DAE0E3; border-radius: 16px; padding: 36px 28px; height: 100%; display: flex; flex-direction: column; }
    .tier-featured { border-color: #0AADA0; box-shadow: 0 8px 32px rgba(10, 173, 160, 0.15); }
    .tier-name { font-size: 20px; margin-bottom: 12px; }
    .tier-price { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 30px; color: #089A8E; margin-bottom: 12px; }
    .tier-cadence { font-family: 'DM Sans', system-ui, sans-serif; font-size: 14px; color: #8A969E; }
    .tier-summary { color: #4A5B65; line-height: 1.6; margin-bottom: 20px; }
    .tier-features { list-style: none; margin-bottom: 28px; flex: 1; }
    .tier-features li { padding: 8px 0; border-top: 1px solid #F7F9FA; color: #4A5B65; }
    .tier-cta { text-align: center; padding: 12px; border-radius: 100px; background: #1C2B33; color: #fff; text-decoration: none; }
    .tier-featured .tier-cta { background: #0AADA0; }

    .about { display: grid; grid-template-columns: minmax(220px, 1fr) 2fr; gap: 64px; align-items: start; }
    .about-photo {
        aspect-ratio: 4 / 5; border-radius: 20px; display: flex; flex-direction: column;
        align-items: center; justify-content: center; background: linear-gradient(160deg, #E8F5F3, #F7F9FA);
    }
    .about-initial { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 96px; color: #0AADA0; }
    .about-caption { font-size: 12px; color: #8A969E; letter-spacing: 0.1em; text-transform: uppercase; }
    .about p { line-height: 1.8; color: #4A5B65; margin-bottom: 20px; }
    .about-quote { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 22px; font-style: italic; color: #1C2B33 !important; }

    .contact { max-width: 560px; }
    .contact-card { display: flex; flex-direction: column; gap: 20px; }
    .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
    .contact-label { display: block; font-size: 13px; font-weight: 600; margin-bottom: 8px; color: #E8F5F3; }
    .contact-required { color: #0AADA0; }
    .contact-optional { color: #FF9A5C; font-weight: 400; }
    .contact-input {
        width: 100%; padding: 14px 16px; border-radius: 10px; font-size: 15px;
        border: 1px solid rgba(218, 224, 227, 0.2); background: rgba(255, 255, 255, 0.06); color: #F7F9FA;
        outline: none; transition: border-color 0.3s;
    }
    .contact-input:focus { border-color: #0AADA0; }
    .contact-input option { color: #1C2B33; }
    .contact-submit {
        margin-top: 8px; padding: 16px; border-radius: 100px; border: none;
        background: #0AADA0; color: #fff; font-size: 15px; font-weight: 600; cursor: pointer; transition: background 0.3s;
    }
    .contact-submit:hover { background: #2CBFB3; }
    .contact-submit.disabled, .contact-submit.disabled:hover { background: #4A5B65; cursor: not-allowed; }
    .contact-thanks { text-align: center; padding: 48px 24px; border: 1px solid rgba(218, 224, 227, 0.2); border-radius: 16px; }
    .contact-check { font-size: 40px; color: #7ACC29; margin-bottom: 16px; }
    .contact-thanks h3 { font-family: 'Cormorant Garamond', Georgia, serif; font-size: 32px; margin-bottom: 12px; }
    .contact-thanks p { line-height: 1.7; opacity: 0.85; }

    .footer { padding: 40px 24px; text-align: center; background: #1C2B33; border-top: 1px solid rgba(218, 224, 227, 0.1); }
    .footer p { font-size: 13px; color: #8A969E; }

    .not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 24px; }

    @media (max-width: 720px) {
        .about { grid-template-columns: 1fr; }
        .contact-row { grid-template-columns: 1fr; }
        .step { gap: 16px; }
    }
"#;
