use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::modal::{Modal, OverlayKind, OverlaySelector};
use crate::components::reveal::Reveal;
use crate::config;

struct Milestone {
    era: &'static str,
    title: &'static str,
    desc: &'static str,
}

const MILESTONES: [Milestone; 4] = [
    Milestone {
        era: "The Struggle",
        title: "Financial Trauma",
        desc: "My family suffered severe bankruptcy during my teenage years. I witnessed the pain of financial instability firsthand.",
    },
    Milestone {
        era: "The Pivot",
        title: "Broken Bond",
        desc: "I walked away from a safe MOE Scholarship and teaching career to save my family, becoming an 'accidental investor' out of necessity.",
    },
    Milestone {
        era: "The Action",
        title: "Risk & Reward",
        desc: "Dove into real estate when others hesitated. Used data, not emotion, to guide my first purchase.",
    },
    Milestone {
        era: "Today",
        title: "8 Properties @ 27",
        desc: "PropNex Millionaire. Director of Investments. My mission is to place a property investor in every household.",
    },
];

struct PortfolioItem {
    id: usize,
    title: &'static str,
    location: &'static str,
    kind: &'static str,
    roi: &'static str,
    rental_yield: &'static str,
    desc: &'static str,
    image: &'static str,
}

const PORTFOLIO: [PortfolioItem; 5] = [
    PortfolioItem {
        id: 1,
        title: "The First Leap",
        location: "District 19",
        kind: "Residential",
        roi: "+28%",
        rental_yield: "3.8%",
        desc: "Upgrading from HDB to Condo using the 'Asset Progression' model.",
        image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2653&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 2,
        title: "Undervalued Gem",
        location: "Core Central Region",
        kind: "Luxury",
        roi: "+15%",
        rental_yield: "4.2%",
        desc: "Spotted a below-market entry price in a prime district using gap analysis.",
        image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=2670&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 3,
        title: "Industrial Cashflow",
        location: "B2 Industrial",
        kind: "Commercial",
        roi: "N/A",
        rental_yield: "6.5%",
        desc: "Diversifying into high-yield industrial assets for consistent passive income.",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2670&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 4,
        title: "The 8th Property",
        location: "District 15",
        kind: "Investment",
        roi: "Pending",
        rental_yield: "3.5%",
        desc: "Capitalizing on the transformation of the East Coast region.",
        image: "https://images.unsplash.com/photo-1515263487990-61b07816b324?q=80&w=2670&auto=format&fit=crop",
    },
    PortfolioItem {
        id: 5,
        title: "The Shophouse",
        location: "Chinatown",
        kind: "Heritage",
        roi: "+45%",
        rental_yield: "2.9%",
        desc: "Preserving heritage while securing a scarce asset class with perpetual value.",
        image: "https://images.unsplash.com/photo-1552566626-52f8b828add9?q=80&w=2670&auto=format&fit=crop",
    },
];

#[derive(Properties, PartialEq)]
struct NavigationProps {
    on_open_contact: Callback<()>,
    is_dark: bool,
    on_toggle_theme: Callback<()>,
}

#[function_component(Navigation)]
fn navigation(props: &NavigationProps) -> Html {
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let listener = Closure::wrap(Box::new({
                    let window = window.clone();
                    move || {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        scrolled.set(offset > 50.0);
                    }
                }) as Box<dyn FnMut()>);

                let _ = window
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let open_contact = {
        let on_open_contact = props.on_open_contact.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_open_contact.emit(());
        })
    };
    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let theme_glyph = if props.is_dark { "☀" } else { "☾" };

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    {config::BRAND_FIRST}{" "}<span class="accent">{config::BRAND_LAST}</span>
                </a>

                <div class="nav-links">
                    <a href="#story" class="nav-link">{"The Origin"}</a>
                    <a href="#methodology" class="nav-link">{"Methodology"}</a>
                    <a href="#portfolio" class="nav-link">{"Portfolio"}</a>
                    <button class="theme-toggle" aria-label="Toggle Theme" onclick={toggle_theme.clone()}>
                        {theme_glyph}
                    </button>
                    <button class="nav-cta" onclick={open_contact.clone()}>
                        {"Book Consultation"}
                    </button>
                </div>

                <div class="nav-mobile-controls">
                    <button class="theme-toggle" aria-label="Toggle Theme" onclick={toggle_theme}>
                        {theme_glyph}
                    </button>
                    <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>

                {
                    if *menu_open {
                        html! {
                            <div class="mobile-menu">
                                <a href="#story" onclick={close_menu.clone()}>{"The Origin"}</a>
                                <a href="#methodology" onclick={close_menu.clone()}>{"Methodology"}</a>
                                <a href="#portfolio" onclick={close_menu}>{"Portfolio"}</a>
                                <button class="mobile-menu-cta" onclick={open_contact}>
                                    {"Book Consultation"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_open_story: Callback<()>,
    on_open_video: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let open_story = {
        let on_open_story = props.on_open_story.clone();
        Callback::from(move |_: MouseEvent| on_open_story.emit(()))
    };
    let open_video = {
        let on_open_video = props.on_open_video.clone();
        Callback::from(move |_: MouseEvent| on_open_video.emit(()))
    };

    html! {
        <section id="top" class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-grid">
                <div class="hero-copy">
                    <Reveal delay_ms={100}>
                        <div class="hero-badge">
                            <span>{"Director of Investments, JNA"}</span>
                        </div>
                    </Reveal>

                    <Reveal delay_ms={200}>
                        <h1 class="hero-title">
                            {"The "}<span class="hero-title-accent">{"Accidental"}</span><br />
                            {"Investor."}
                        </h1>
                    </Reveal>

                    <Reveal delay_ms={300}>
                        <p class="hero-blurb">
                            {"From bankruptcy to owning 8 properties by age 27. I don't just sell real estate; I engineer wealth portfolios."}
                        </p>
                    </Reveal>

                    <Reveal delay_ms={400}>
                        <div class="hero-actions">
                            <button class="hero-primary" onclick={open_story}>
                                {"Read My Story"}<span class="arrow">{"→"}</span>
                            </button>
                            <button class="hero-watch" onclick={open_video}>
                                <span class="play-ring">{"▶"}</span>
                                <span>{"Watch the Journey"}</span>
                            </button>
                        </div>
                    </Reveal>
                </div>

                <div class="hero-visual">
                    <img src="/hero.png" alt="Christian Oh Portrait" />
                    <div class="hero-quote-card">
                        <p class="quote">{"\"Skin in the game.\""}</p>
                        <p class="quote-sub">{"I own what I advise. 6+2 Properties acquired in 1 year."}</p>
                    </div>
                </div>
            </div>
            <div class="scroll-cue">{"⌄"}</div>
        </section>
    }
}

#[function_component(StorySection)]
fn story_section() -> Html {
    html! {
        <section id="story" class="story-section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-heading">
                        <h2>
                            {"From "}<span class="accent">{"Bankruptcy"}</span><br />
                            {"to "}<span class="serif-accent">{"Wealth"}</span>{" Creation."}
                        </h2>
                        <div class="heading-rule"></div>
                    </div>
                </Reveal>

                <div class="story-grid">
                    <div class="timeline">
                        {
                            for MILESTONES.iter().enumerate().map(|(index, item)| html! {
                                <Reveal key={index} delay_ms={(index as u32) * 150}>
                                    <div class="milestone">
                                        <div class="milestone-dot"></div>
                                        <span class="milestone-era">{item.era}</span>
                                        <h3 class="milestone-title">{item.title}</h3>
                                        <p class="milestone-desc">{item.desc}</p>
                                    </div>
                                </Reveal>
                            })
                        }
                    </div>

                    <div class="mission-panel">
                        <img
                            class="mission-image"
                            src="https://images.unsplash.com/photo-1506318164473-2dfd3ede3623?q=80&w=3387&auto=format&fit=crop"
                            alt="Global Vision - Singapore Skyline"
                        />
                        <div class="mission-overlay"></div>
                        <div class="mission-copy">
                            <h3>{"Mission Driven."}<br />{"Global Vision."}</h3>
                            <p>{"I am not a salesperson. I am a Real Estate Practitioner. My advice is rooted in my own survival and success."}</p>
                            <div class="mission-tiles">
                                <div class="mission-tile">
                                    <span class="tile-value">{"2021"}</span>
                                    <span class="tile-label">{"PropNex Millionaire"}</span>
                                </div>
                                <div class="mission-tile">
                                    <span class="tile-value">{"Top 1%"}</span>
                                    <span class="tile-label">{"Sales Volume"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
    subtext: &'static str,
    delay_ms: u32,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <Reveal delay_ms={props.delay_ms}>
            <div class="stat-card">
                <div class="stat-card-top">
                    <span class="stat-icon">{props.icon}</span>
                    <span class="stat-tag">{"Statistic"}</span>
                </div>
                <h3 class="stat-value">{props.value}</h3>
                <p class="stat-label">{props.label}</p>
                <p class="stat-subtext">{props.subtext}</p>
            </div>
        </Reveal>
    }
}

#[function_component(MethodologySection)]
fn methodology_section() -> Html {
    html! {
        <section id="methodology" class="methodology-section">
            <div class="section-inner">
                <div class="section-heading centered">
                    <Reveal>
                        <span class="eyebrow">{"The JNA Methodology"}</span>
                        <h2>
                            {"Data-Driven. Factual. "}<span class="serif-accent">{"Patient."}</span>
                        </h2>
                    </Reveal>
                </div>

                <div class="stat-grid">
                    <StatCard
                        icon="📊"
                        value="Analysis"
                        label="In-Depth & Factual"
                        subtext="Using technical data tools to spot undervalued opportunities invisible to the naked eye."
                        delay_ms={0}
                    />
                    <StatCard
                        icon="🏢"
                        value="8 Props"
                        label="Portfolio Builder"
                        subtext="I don't just sell. I build portfolios. My 8 properties are proof of the system."
                        delay_ms={200}
                    />
                    <StatCard
                        icon="📈"
                        value="Wealth"
                        label="Exit Strategy"
                        subtext="Every purchase has a clear exit plan designed for capital appreciation and legacy."
                        delay_ms={400}
                    />
                </div>

                <Reveal delay_ms={600}>
                    <div class="channel-banner">
                        <div>
                            <h3>{"Detailed Market Analysis"}</h3>
                            <p>{"Watch my latest \"New Launch Reviews\" and market explanations on the JNA Real Estate YouTube channel."}</p>
                        </div>
                        <a href={config::YOUTUBE_CHANNEL_URL} target="_blank" rel="noreferrer" class="channel-link">
                            {"▶ Visit JNA YouTube"}
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(PortfolioSection)]
fn portfolio_section() -> Html {
    // Single active panel, last writer wins on hover or tap.
    let active_id = use_state(|| 1usize);

    html! {
        <section id="portfolio" class="portfolio-section">
            <div class="section-inner portfolio-heading">
                <Reveal>
                    <span class="eyebrow">{"The Track Record"}</span>
                    <h2>{"8 Properties "}<span class="serif-accent">{"@ 27"}</span></h2>
                </Reveal>
                <Reveal delay_ms={200}>
                    <p class="portfolio-note">
                        {"A look into my personal portfolio. These aren't just transactions; they are carefully engineered assets."}
                        <span class="swipe-hint">{"Scroll to view more →"}</span>
                    </p>
                </Reveal>
            </div>

            <div class="gallery-scroller">
                <div class="gallery">
                    {
                        for PORTFOLIO.iter().map(|item| {
                            let is_active = *active_id == item.id;
                            let activate = {
                                let active_id = active_id.clone();
                                let id = item.id;
                                Callback::from(move |_: MouseEvent| active_id.set(id))
                            };
                            html! {
                                <div
                                    key={item.id}
                                    class={classes!("gallery-panel", is_active.then_some("active"))}
                                    onmouseenter={activate.clone()}
                                    onclick={activate}
                                >
                                    <img class="panel-image" src={item.image} alt={item.title} />
                                    <div class="panel-shade"></div>

                                    <div class="panel-detail">
                                        <div class="panel-card">
                                            <div class="panel-card-top">
                                                <div>
                                                    <span class="panel-kind">{item.kind}</span>
                                                    <h3>{item.title}</h3>
                                                    <p class="panel-location">{item.location}</p>
                                                </div>
                                                <span class="panel-arrow">{"↗"}</span>
                                            </div>
                                            <p class="panel-desc">{item.desc}</p>
                                            <div class="panel-stats">
                                                <div>
                                                    <p class="panel-stat-label">{"Est. Appreciation"}</p>
                                                    <p class="panel-stat-value">{item.roi}</p>
                                                </div>
                                                <div>
                                                    <p class="panel-stat-label">{"Rental Yield"}</p>
                                                    <p class="panel-stat-value">{item.rental_yield}</p>
                                                </div>
                                            </div>
                                        </div>
                                    </div>

                                    <div class="panel-spine">
                                        <h3>{item.title}</h3>
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AboutSectionProps {
    on_open_video: Callback<()>,
}

#[function_component(AboutSection)]
fn about_section(props: &AboutSectionProps) -> Html {
    let open_video = {
        let on_open_video = props.on_open_video.clone();
        Callback::from(move |_: MouseEvent| on_open_video.emit(()))
    };

    html! {
        <section class="about-section">
            <div class="section-inner">
                <div class="about-grid">
                    <div class="about-portrait">
                        <img src="/about.jpg" alt="Christian Oh" />
                    </div>

                    <div class="about-video">
                        <button class="video-thumb" onclick={open_video}>
                            <img
                                src={config::youtube_thumbnail_url(config::TESTIMONIAL_VIDEO_ID)}
                                alt="The Monopoly Code"
                            />
                            <span class="play-ring large">{"▶"}</span>
                        </button>
                    </div>

                    <div class="about-bio">
                        <Reveal>
                            <span class="eyebrow">{"My Story"}</span>
                            <h2 class="about-title">{"About Me"}</h2>
                            <div class="about-prose">
                                <p>{"I'm Christian Oh, an investor, advisor, and steward focused on helping people make wiser long-term decisions with capital and life. My journey didn't start with success; it began with watching my family lose everything through poor financial advice. That experience reshaped how I view money, not as status, but as responsibility."}</p>
                                <p>{"Over time, I built and now manage a nine-property portfolio across residential and commercial assets, creating stable, recurring income for my family. More important than the outcome was the discipline behind it: prioritising risk management, clear thinking, and sustainable growth over hype or shortcuts."}</p>
                                <p>{"Today, I work with families, professionals, and investors who want to grow steadily without unnecessary risk. I believe real wealth is built through integrity over speed, process over noise, and stewardship over ego."}</p>
                                <p class="about-close">{"This platform exists to share practical insights on investing, decision-making, and long-term thinking, so others can build with confidence and create a lasting legacy."}</p>
                            </div>
                            <div class="about-sign">
                                <p>{"Christian Oh"}</p>
                                <p class="about-sign-sub">{"JNA Real Estate • PropNex"}</p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CtaSectionProps {
    on_open_contact: Callback<()>,
}

#[function_component(CtaSection)]
fn cta_section(props: &CtaSectionProps) -> Html {
    let open_contact = {
        let on_open_contact = props.on_open_contact.clone();
        Callback::from(move |_: MouseEvent| on_open_contact.emit(()))
    };

    html! {
        <section class="cta-section">
            <div class="cta-inner">
                <Reveal>
                    <h2>
                        {"Ready to build your"}<br />
                        <span class="cta-gradient">{"legacy?"}</span>
                    </h2>
                    <p>{"I help Singaporeans move from uncertainty to owning high-performing asset portfolios. Let's analyze your next move."}</p>
                    <div class="cta-actions">
                        <button class="cta-primary" onclick={open_contact}>
                            {"Book a Consultation"}
                        </button>
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noreferrer" class="cta-secondary">
                            {"Follow Lifestyle"}
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div>
                    <h4 class="footer-brand">
                        {config::BRAND_FIRST}{" "}<span class="accent">{config::BRAND_LAST}</span>
                    </h4>
                    <p class="footer-tag">{"Real Estate Practitioner. Investor. Mentor."}</p>
                </div>
                <div class="footer-social">
                    <a href="#" aria-label="LinkedIn">{"in"}</a>
                    <a href={config::INSTAGRAM_URL} aria-label="Instagram">{"ig"}</a>
                    <a href={config::YOUTUBE_CHANNEL_URL} aria-label="YouTube">{"yt"}</a>
                </div>
                <div class="footer-copy">
                    {format!("© {} Christian Oh. All rights reserved.", year)}
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    on_done: Callback<()>,
}

/// Placeholder lead form. Submission acknowledges and closes the overlay;
/// there is no backend to send anything to.
#[function_component(ContactForm)]
fn contact_form(props: &ContactFormProps) -> Html {
    let sent = use_state(|| false);

    let onsubmit = {
        let sent = sent.clone();
        let on_done = props.on_done.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            info!("Consultation request acknowledged");
            sent.set(true);
            let on_done = on_done.clone();
            Timeout::new(1_400, move || on_done.emit(())).forget();
        })
    };

    if *sent {
        return html! {
            <div class="form-ack">
                <h4>{"Thanks for your interest!"}</h4>
                <p>{"This is a demo form, so nothing was sent anywhere."}</p>
            </div>
        };
    }

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-row">
                <div class="form-field">
                    <label>{"First Name"}</label>
                    <input type="text" placeholder="John" />
                </div>
                <div class="form-field">
                    <label>{"Last Name"}</label>
                    <input type="text" placeholder="Doe" />
                </div>
            </div>
            <div class="form-row">
                <div class="form-field">
                    <label>{"Email Address"}</label>
                    <input type="email" placeholder="john@example.com" />
                </div>
                <div class="form-field">
                    <label>{"Phone Number"}</label>
                    <input type="tel" placeholder="+65" />
                </div>
            </div>
            <div class="form-field">
                <label>{"Investment Goal"}</label>
                <select>
                    <option>{"First Property Purchase"}</option>
                    <option>{"Portfolio Restructuring"}</option>
                    <option>{"Asset Progression"}</option>
                    <option>{"Just Exploring"}</option>
                </select>
            </div>
            <div class="form-field">
                <label>{"Message (Optional)"}</label>
                <textarea rows="3" placeholder="Tell me about your current situation..."></textarea>
            </div>
            <button type="submit" class="form-submit">{"Send Inquiry ✈"}</button>
        </form>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let selector = use_state(OverlaySelector::default);
    let video_id = use_state(|| config::JOURNEY_VIDEO_ID);
    let is_dark = use_state(|| true);

    let open_overlay = {
        let selector = selector.clone();
        Callback::from(move |kind: OverlayKind| {
            info!("Opening {} overlay", kind.label());
            let mut next = *selector;
            next.open(kind);
            selector.set(next);
        })
    };
    let close_overlay = {
        let selector = selector.clone();
        Callback::from(move |_: ()| {
            info!("Closing overlays");
            let mut next = *selector;
            next.close_all();
            selector.set(next);
        })
    };
    let open_video = {
        let video_id = video_id.clone();
        let open_overlay = open_overlay.clone();
        Callback::from(move |id: &'static str| {
            video_id.set(id);
            open_overlay.emit(OverlayKind::Video);
        })
    };
    let toggle_theme = {
        let is_dark = is_dark.clone();
        Callback::from(move |_: ()| is_dark.set(!*is_dark))
    };

    let open_story = open_overlay.reform(|_: ()| OverlayKind::Story);
    let open_contact = open_overlay.reform(|_: ()| OverlayKind::Contact);
    let story_to_contact = {
        let open_overlay = open_overlay.clone();
        Callback::from(move |_: MouseEvent| open_overlay.emit(OverlayKind::Contact))
    };

    let theme_class = if *is_dark { "dark" } else { "light" };

    html! {
        <div class={classes!("site", theme_class)}>
            <Navigation
                on_open_contact={open_contact.clone()}
                is_dark={*is_dark}
                on_toggle_theme={toggle_theme}
            />
            <Hero
                on_open_story={open_story}
                on_open_video={open_video.reform(|_: ()| config::JOURNEY_VIDEO_ID)}
            />
            <StorySection />
            <MethodologySection />
            <PortfolioSection />
            <AboutSection
                on_open_video={open_video.reform(|_: ()| config::TESTIMONIAL_VIDEO_ID)}
            />
            <CtaSection on_open_contact={open_contact} />
            <Footer />

            <Modal
                open={selector.is_open(OverlayKind::Video)}
                on_close={close_overlay.clone()}
                class="modal-video"
            >
                <div class="video-frame">
                    <iframe
                        src={config::youtube_embed_url(*video_id)}
                        title="Christian Oh Journey"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    />
                </div>
            </Modal>

            <Modal
                open={selector.is_open(OverlayKind::Story)}
                on_close={close_overlay.clone()}
                class="modal-story"
            >
                <div class="story-modal">
                    <div class="story-modal-header">
                        <img
                            src="https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=2574&auto=format&fit=crop"
                            alt="Christian Oh"
                        />
                        <div>
                            <h3>{"The Origin Story"}</h3>
                            <p>{"From Bankruptcy to Wealth"}</p>
                        </div>
                    </div>
                    <div class="story-modal-body">
                        <p class="lead">{"\"I am not just an agent. I am an investor first.\""}</p>
                        <p>{"My journey didn't start with wealth; it started with the loss of it. As a teenager, I watched my family suffer through a severe bankruptcy. The trauma of losing our home and stability defined my early years and instilled in me a relentless drive for financial security."}</p>
                        <p>{"I secured a prestigious MOE Scholarship, a safe path to a teaching career. But 'safe' wasn't enough to rebuild what my family had lost. I took the biggest risk of my life: I broke my bond. I pivoted into real estate not to sell, but to understand how wealth is built."}</p>
                        <p>{"I became an \"accidental investor\" out of necessity. I analyzed the market with a teacher's academic rigor and an investor's desperation. It worked. By age 27, I had acquired 8 properties."}</p>
                        <p class="strong">{"Now, as Director of Investments at JNA, my mission is simple: To place a property investor in every household."}</p>
                    </div>
                    <div class="story-modal-footer">
                        <button onclick={story_to_contact}>
                            {"Start Your Journey →"}
                        </button>
                    </div>
                </div>
            </Modal>

            <Modal
                open={selector.is_open(OverlayKind::Contact)}
                on_close={close_overlay.clone()}
                class="modal-contact"
            >
                <div class="contact-layout">
                    <div class="contact-aside">
                        <h3>{"Let's Talk Numbers."}</h3>
                        <div class="contact-lines">
                            <div class="contact-line">
                                <span class="contact-glyph">{"✉"}</span>
                                <div>
                                    <p class="contact-label">{"Email"}</p>
                                    <p>{config::CONTACT_EMAIL}</p>
                                </div>
                            </div>
                            <div class="contact-line">
                                <span class="contact-glyph">{"✆"}</span>
                                <div>
                                    <p class="contact-label">{"WhatsApp"}</p>
                                    <p>{config::CONTACT_WHATSAPP}</p>
                                </div>
                            </div>
                            <div class="contact-line">
                                <span class="contact-glyph">{"🏢"}</span>
                                <div>
                                    <p class="contact-label">{"JNA Real Estate"}</p>
                                    <p>{"PropNex Singapore"}</p>
                                </div>
                            </div>
                        </div>
                        <p class="contact-footnote">
                            {"Prefer a direct link? "}
                            <a href={config::LINKTREE_URL} target="_blank" rel="noreferrer">{"View Linktree"}</a>
                        </p>
                    </div>
                    <div class="contact-main">
                        <h4>{"Request a Portfolio Analysis"}</h4>
                        <ContactForm on_done={close_overlay} />
                    </div>
                </div>
            </Modal>

            { site_styles() }
        </div>
    }
}

fn site_styles() -> Html {
    html! {
        <style>
            {r#"
                .site {
                    --accent: #f59e0b;
                    --accent-strong: #d97706;
                    font-family: 'Inter', -apple-system, sans-serif;
                    transition: background 0.3s ease, color 0.3s ease;
                    background: var(--bg);
                    color: var(--text);
                }
                .site.dark {
                    --bg: #0a0a0a;
                    --bg-alt: #171717;
                    --surface: rgba(23, 23, 23, 0.6);
                    --border: #262626;
                    --text: #e5e5e5;
                    --text-strong: #ffffff;
                    --text-muted: #a3a3a3;
                }
                .site.light {
                    --bg: #fafafa;
                    --bg-alt: #ffffff;
                    --surface: rgba(255, 255, 255, 0.8);
                    --border: #e5e5e5;
                    --text: #171717;
                    --text-strong: #0a0a0a;
                    --text-muted: #525252;
                }
                .site * { box-sizing: border-box; }
                .site h1, .site h2, .site h3, .site h4, .site p { margin: 0; }
                .site button { font: inherit; cursor: pointer; }
                .accent { color: var(--accent); }
                .serif-accent {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-style: italic;
                    color: var(--text-muted);
                }
                .eyebrow {
                    display: block;
                    font-family: ui-monospace, monospace;
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--accent);
                    margin-bottom: 1rem;
                }
                .section-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-heading h2 {
                    font-size: clamp(2.2rem, 5vw, 3.6rem);
                    font-weight: 500;
                    color: var(--text-strong);
                    line-height: 1.1;
                }
                .section-heading.centered { text-align: center; margin-bottom: 5rem; }
                .heading-rule {
                    height: 4px;
                    width: 80px;
                    background: var(--accent);
                    margin-top: 1.5rem;
                }

                /* Reveal-on-view */
                .reveal {
                    opacity: 0;
                    transform: translateY(3rem);
                    transition: opacity 1s ease-out, transform 1s ease-out;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                /* Navigation */
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    transition: all 0.3s ease;
                    background: transparent;
                }
                .top-nav.scrolled {
                    background: var(--surface);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid var(--border);
                    padding: 1rem 0;
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    position: relative;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: var(--text-strong);
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 0.85rem;
                    color: var(--text-muted);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover { color: var(--accent); }
                .theme-toggle {
                    background: none;
                    border: none;
                    color: var(--text-muted);
                    font-size: 1.1rem;
                    padding: 0.4rem;
                    border-radius: 50%;
                }
                .theme-toggle:hover { color: var(--accent); }
                .nav-cta {
                    padding: 0.6rem 1.5rem;
                    background: var(--text-strong);
                    color: var(--bg);
                    border: none;
                    font-size: 0.85rem;
                    font-weight: 500;
                    transition: background 0.3s ease;
                }
                .nav-cta:hover { background: var(--accent); color: #fff; }
                .nav-mobile-controls { display: none; gap: 1rem; align-items: center; }
                .burger-menu {
                    background: none;
                    border: none;
                    color: var(--text-strong);
                    font-size: 1.3rem;
                }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    background: var(--bg-alt);
                    border-bottom: 1px solid var(--border);
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .mobile-menu a { color: var(--text-muted); text-decoration: none; }
                .mobile-menu-cta {
                    background: none;
                    border: none;
                    color: var(--accent);
                    font-weight: 700;
                    text-align: left;
                    padding: 0;
                }

                /* Hero */
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding-top: 5rem;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background:
                        radial-gradient(ellipse at 20% 90%, rgba(245, 158, 11, 0.08), transparent 50%),
                        linear-gradient(260deg, var(--bg-alt), transparent 55%);
                    pointer-events: none;
                }
                .hero-grid {
                    position: relative;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-flex;
                    border: 1px solid rgba(245, 158, 11, 0.3);
                    border-radius: 999px;
                    padding: 0.4rem 1rem;
                    margin-bottom: 2rem;
                    background: rgba(245, 158, 11, 0.05);
                    font-size: 0.7rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: var(--accent);
                }
                .hero-title {
                    font-size: clamp(3rem, 8vw, 5.9rem);
                    font-weight: 500;
                    line-height: 0.95;
                    letter-spacing: -0.04em;
                    color: var(--text-strong);
                    margin-bottom: 2rem;
                }
                .hero-title-accent {
                    font-family: Georgia, serif;
                    font-style: italic;
                    color: var(--text-muted);
                }
                .hero-blurb {
                    font-size: 1.2rem;
                    color: var(--text-muted);
                    max-width: 36rem;
                    line-height: 1.7;
                    border-left: 2px solid var(--accent);
                    padding-left: 1.5rem;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }
                .hero-primary {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: var(--text-strong);
                    color: var(--bg);
                    border: none;
                    font-weight: 500;
                    transition: background 0.3s ease;
                }
                .hero-primary:hover { background: var(--accent); color: #fff; }
                .hero-primary .arrow { transition: transform 0.3s ease; }
                .hero-primary:hover .arrow { transform: translateX(4px); }
                .hero-watch {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: none;
                    border: none;
                    color: var(--text-strong);
                    font-size: 0.9rem;
                    letter-spacing: 0.02em;
                }
                .hero-watch:hover { color: var(--accent); }
                .play-ring {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    transition: border-color 0.3s ease;
                }
                .hero-watch:hover .play-ring { border-color: var(--accent); }
                .play-ring.large {
                    width: 4rem;
                    height: 4rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(8px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                }
                .video-thumb:hover .play-ring.large { background: var(--accent); }
                .hero-visual {
                    position: relative;
                    height: 600px;
                    background: var(--bg-alt);
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .hero-visual img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.85;
                    filter: grayscale(1);
                    transition: filter 0.7s ease;
                }
                .hero-visual:hover img { filter: grayscale(0); }
                .hero-quote-card {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 2.5rem;
                    max-width: 20rem;
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border-left: 4px solid var(--accent);
                }
                .hero-quote-card .quote {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 1.4rem;
                    color: #fff;
                }
                .hero-quote-card .quote-sub {
                    margin-top: 0.5rem;
                    font-size: 0.85rem;
                    color: #d4d4d4;
                }
                .scroll-cue {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: var(--text-muted);
                    font-size: 2rem;
                    animation: bounce 1.5s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 0.6rem); }
                }

                /* Story */
                .story-section { padding: 6rem 0; background: var(--bg-alt); }
                .story-section .section-heading { margin-bottom: 5rem; }
                .story-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .milestone {
                    position: relative;
                    padding: 0 0 3rem 2rem;
                    border-left: 1px solid var(--border);
                    transition: border-color 0.3s ease;
                }
                .milestone:hover { border-color: var(--accent); }
                .milestone-dot {
                    position: absolute;
                    left: -5px;
                    top: 0;
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: var(--border);
                    transition: background 0.3s ease;
                }
                .milestone:hover .milestone-dot { background: var(--accent); }
                .milestone-era {
                    display: block;
                    font-family: ui-monospace, monospace;
                    font-size: 0.7rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: var(--accent);
                    margin-bottom: 0.5rem;
                }
                .milestone-title {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 1.5rem;
                    font-weight: 400;
                    color: var(--text-strong);
                    margin-bottom: 0.5rem;
                }
                .milestone-desc { color: var(--text-muted); line-height: 1.7; }
                .mission-panel {
                    position: relative;
                    min-height: 500px;
                    border: 1px solid var(--border);
                    overflow: hidden;
                    display: flex;
                }
                .mission-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.5;
                    filter: grayscale(1);
                    transition: filter 0.7s ease, transform 0.7s ease;
                }
                .mission-panel:hover .mission-image {
                    filter: grayscale(0);
                    transform: scale(1.05);
                }
                .mission-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #171717 0%, rgba(23, 23, 23, 0.5) 50%, transparent 100%);
                }
                .mission-copy {
                    position: relative;
                    align-self: flex-end;
                    padding: 2rem;
                    width: 100%;
                }
                .mission-copy h3 {
                    font-size: 1.8rem;
                    font-weight: 300;
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .mission-copy > p { color: #e5e5e5; max-width: 24rem; margin-bottom: 2rem; }
                .mission-tiles {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .mission-tile {
                    padding: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .tile-value {
                    display: block;
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #fff;
                }
                .tile-label {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    color: #d4d4d4;
                }

                /* Methodology */
                .methodology-section { padding: 6rem 0; }
                .stat-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .stat-card {
                    height: 100%;
                    padding: 2rem;
                    background: var(--surface);
                    backdrop-filter: blur(12px);
                    border: 1px solid var(--border);
                    transition: border-color 0.5s ease;
                }
                .stat-card:hover { border-color: rgba(245, 158, 11, 0.5); }
                .stat-card-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1rem;
                }
                .stat-icon { font-size: 1.5rem; }
                .stat-tag {
                    font-family: ui-monospace, monospace;
                    font-size: 0.65rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: var(--text-muted);
                }
                .stat-value {
                    font-size: 2.8rem;
                    font-weight: 300;
                    color: var(--text-strong);
                    margin-bottom: 0.5rem;
                }
                .stat-label {
                    font-size: 1.1rem;
                    font-weight: 500;
                    color: var(--accent-strong);
                    margin-bottom: 0.25rem;
                }
                .stat-subtext { font-size: 0.9rem; color: var(--text-muted); }
                .channel-banner {
                    margin-top: 4rem;
                    padding: 3rem;
                    background: var(--bg-alt);
                    border: 1px solid var(--border);
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .channel-banner h3 { font-size: 1.5rem; color: var(--text-strong); margin-bottom: 0.5rem; }
                .channel-banner p { color: var(--text-muted); max-width: 32rem; }
                .channel-link {
                    padding: 0.75rem 1.5rem;
                    border: 1px solid var(--text-strong);
                    color: var(--text-strong);
                    text-decoration: none;
                    transition: all 0.3s ease;
                    white-space: nowrap;
                }
                .channel-link:hover { background: var(--text-strong); color: var(--bg); }

                /* Portfolio */
                .portfolio-section {
                    padding: 6rem 0;
                    background: #171717;
                    color: #fff;
                    overflow: hidden;
                }
                .portfolio-heading {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 3rem;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .portfolio-heading h2 {
                    font-size: clamp(2.2rem, 5vw, 3rem);
                    font-weight: 300;
                    color: #fff;
                    margin-top: 1rem;
                }
                .portfolio-note { color: #a3a3a3; max-width: 28rem; }
                .swipe-hint {
                    display: none;
                    font-family: ui-monospace, monospace;
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--accent);
                    margin-top: 0.5rem;
                }
                .gallery-scroller { width: 100%; overflow-x: auto; padding-bottom: 2rem; }
                .gallery {
                    min-width: 1000px;
                    height: 600px;
                    padding: 0 1.5rem;
                    display: flex;
                    gap: 1rem;
                }
                .gallery-panel {
                    position: relative;
                    flex: 1;
                    min-width: 100px;
                    border-radius: 1rem;
                    overflow: hidden;
                    cursor: pointer;
                    opacity: 0.6;
                    transition: flex 0.5s cubic-bezier(0.25, 0.1, 0.25, 1), opacity 0.5s ease;
                }
                .gallery-panel:hover { opacity: 0.8; }
                .gallery-panel.active {
                    flex: 3;
                    min-width: 350px;
                    opacity: 1;
                    box-shadow: 0 25px 50px rgba(120, 53, 15, 0.2);
                }
                .panel-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 1s ease;
                }
                .gallery-panel.active .panel-image { transform: scale(1.1); }
                .panel-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent, rgba(23, 23, 23, 0.2) 50%, #171717);
                    opacity: 0.6;
                    transition: opacity 0.5s ease;
                }
                .gallery-panel.active .panel-shade { opacity: 0.9; }
                .panel-detail {
                    position: absolute;
                    inset: 0;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 0.5s ease;
                }
                .gallery-panel.active .panel-detail { opacity: 1; transform: translateY(0); }
                .panel-card {
                    background: rgba(23, 23, 23, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid #262626;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }
                .panel-card-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1rem;
                }
                .panel-kind {
                    display: block;
                    font-size: 0.7rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: var(--accent);
                    margin-bottom: 0.5rem;
                }
                .panel-card h3 { font-size: 1.8rem; font-weight: 300; color: #fff; }
                .panel-location { font-size: 0.85rem; color: #a3a3a3; margin-top: 0.25rem; }
                .panel-arrow {
                    background: #fff;
                    color: #000;
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .panel-desc {
                    font-size: 0.9rem;
                    color: #d4d4d4;
                    line-height: 1.6;
                    border-left: 2px solid var(--accent);
                    padding-left: 1rem;
                    margin-bottom: 1.5rem;
                }
                .panel-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    border-top: 1px solid #262626;
                    padding-top: 1rem;
                }
                .panel-stat-label { font-size: 0.7rem; text-transform: uppercase; color: #737373; }
                .panel-stat-value { font-size: 1.3rem; font-weight: 700; color: #fff; }
                .panel-spine {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: opacity 0.3s ease;
                }
                .gallery-panel.active .panel-spine { opacity: 0; }
                .panel-spine h3 {
                    transform: rotate(-90deg);
                    white-space: nowrap;
                    font-size: 1.4rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #fff;
                    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.6);
                    pointer-events: none;
                }

                /* About */
                .about-section { padding: 6rem 0; position: relative; }
                .about-grid {
                    display: grid;
                    grid-template-columns: 3fr 4fr 5fr;
                    gap: 2rem;
                    min-height: 500px;
                }
                .about-portrait {
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid var(--border);
                }
                .about-portrait img { width: 100%; height: 100%; object-fit: cover; }
                .about-video { display: flex; align-items: center; }
                .video-thumb {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 9 / 16;
                    border: 1px solid var(--border);
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #171717;
                    padding: 0;
                    transition: border-color 0.5s ease;
                }
                .video-thumb:hover { border-color: rgba(245, 158, 11, 0.5); }
                .video-thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.8;
                    transition: opacity 0.5s ease;
                }
                .video-thumb:hover img { opacity: 1; }
                .about-bio .about-title {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 2rem;
                    font-weight: 400;
                    color: var(--text-strong);
                    margin-bottom: 1.5rem;
                }
                .about-prose p {
                    font-size: 0.95rem;
                    line-height: 1.8;
                    color: var(--text-muted);
                    margin-bottom: 1rem;
                }
                .about-prose .about-close {
                    font-weight: 500;
                    font-style: italic;
                    color: var(--text-strong);
                }
                .about-sign {
                    margin-top: 1.5rem;
                    padding-top: 1rem;
                    border-top: 1px solid var(--border);
                }
                .about-sign p {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--text-muted);
                }
                .about-sign-sub { font-size: 0.65rem; color: var(--text-muted); }

                /* CTA */
                .cta-section { padding: 8rem 0; background: var(--bg-alt); }
                .cta-inner { max-width: 56rem; margin: 0 auto; padding: 0 1.5rem; text-align: center; }
                .cta-inner h2 {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.03em;
                    color: var(--text-strong);
                    margin-bottom: 2rem;
                }
                .cta-gradient {
                    background: linear-gradient(to right, #d97706, #fbbf24);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .cta-inner p {
                    font-size: 1.25rem;
                    color: var(--text-muted);
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }
                .cta-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .cta-primary {
                    padding: 1.25rem 2.5rem;
                    background: var(--text-strong);
                    color: var(--bg);
                    border: none;
                    font-weight: 500;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    transition: all 0.3s ease;
                }
                .cta-primary:hover { background: var(--accent); color: #fff; transform: scale(1.05); }
                .cta-secondary {
                    padding: 1.25rem 2.5rem;
                    border: 1px solid var(--border);
                    color: var(--text-strong);
                    text-decoration: none;
                    font-weight: 500;
                    transition: background 0.3s ease;
                }
                .cta-secondary:hover { background: var(--surface); }

                /* Footer */
                .site-footer {
                    background: #0a0a0a;
                    border-top: 1px solid #171717;
                    padding: 3rem 0;
                }
                .footer-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .footer-brand {
                    font-size: 1.4rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .footer-tag { color: #737373; font-size: 0.85rem; }
                .footer-social { display: flex; gap: 1.5rem; }
                .footer-social a {
                    color: #737373;
                    text-decoration: none;
                    font-family: ui-monospace, monospace;
                    transition: color 0.2s ease;
                }
                .footer-social a:hover { color: #fff; }
                .footer-copy { color: #525252; font-size: 0.85rem; }

                /* Modal */
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(4px);
                }
                .modal-content {
                    position: relative;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: var(--bg-alt);
                    border: 1px solid var(--border);
                    border-radius: 0.75rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                    animation: modal-in 0.3s ease;
                }
                @keyframes modal-in {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 20;
                    width: 2.25rem;
                    height: 2.25rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.2);
                    color: var(--text-muted);
                    transition: color 0.2s ease;
                }
                .modal-close:hover { color: var(--text-strong); }
                .modal-video { max-width: 64rem; background: #000; }
                .video-frame { aspect-ratio: 16 / 9; width: 100%; }
                .video-frame iframe { width: 100%; height: 100%; border: 0; }
                .modal-story { max-width: 42rem; }
                .story-modal { padding: 3rem; }
                .story-modal-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding-bottom: 1.5rem;
                    margin-bottom: 1.5rem;
                    border-bottom: 1px solid var(--border);
                }
                .story-modal-header img {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid var(--accent);
                }
                .story-modal-header h3 { font-size: 1.5rem; color: var(--text-strong); }
                .story-modal-header p {
                    font-size: 0.8rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: var(--accent);
                }
                .story-modal-body p {
                    color: var(--text-muted);
                    line-height: 1.8;
                    margin-bottom: 1.25rem;
                }
                .story-modal-body .lead {
                    font-size: 1.1rem;
                    font-style: italic;
                    color: var(--text);
                }
                .story-modal-body .strong { font-weight: 700; color: var(--text-strong); }
                .story-modal-footer {
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                    display: flex;
                    justify-content: flex-end;
                }
                .story-modal-footer button {
                    background: none;
                    border: none;
                    color: var(--accent);
                    font-weight: 500;
                }
                .story-modal-footer button:hover { color: var(--accent-strong); }
                .modal-contact { max-width: 56rem; }
                .contact-layout { display: flex; }
                .contact-aside {
                    width: 33%;
                    padding: 2rem;
                    background: var(--bg);
                    border-right: 1px solid var(--border);
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }
                .contact-aside h3 { font-size: 1.5rem; color: var(--text-strong); margin-bottom: 1.5rem; }
                .contact-lines { display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-line { display: flex; gap: 0.75rem; color: var(--text-muted); }
                .contact-glyph { margin-top: 0.1rem; }
                .contact-label { color: var(--text-strong); font-weight: 500; }
                .contact-line p { font-size: 0.85rem; }
                .contact-footnote { margin-top: 3rem; font-size: 0.75rem; color: var(--text-muted); }
                .contact-footnote a { color: var(--accent); }
                .contact-main { width: 67%; padding: 2rem; }
                .contact-main h4 { font-size: 1.1rem; color: var(--text-strong); margin-bottom: 1.5rem; }
                .contact-form { display: flex; flex-direction: column; gap: 1rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .form-field { display: flex; flex-direction: column; gap: 0.25rem; }
                .form-field label {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    font-weight: 500;
                    color: var(--text-muted);
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    background: var(--bg);
                    border: 1px solid var(--border);
                    border-radius: 0.25rem;
                    padding: 0.75rem;
                    color: var(--text-strong);
                    font: inherit;
                    transition: border-color 0.2s ease;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: var(--accent);
                }
                .form-submit {
                    margin-top: 1rem;
                    padding: 1rem;
                    background: var(--accent);
                    color: #fff;
                    border: none;
                    border-radius: 0.25rem;
                    font-weight: 700;
                    letter-spacing: 0.02em;
                    transition: background 0.2s ease;
                }
                .form-submit:hover { background: var(--accent-strong); }
                .form-ack { padding: 3rem 1rem; text-align: center; }
                .form-ack h4 { font-size: 1.3rem; color: var(--text-strong); margin-bottom: 0.5rem; }
                .form-ack p { color: var(--text-muted); }

                @media (max-width: 900px) {
                    .nav-links { display: none; }
                    .nav-mobile-controls { display: flex; }
                    .hero-grid { grid-template-columns: 1fr; }
                    .hero-visual { display: none; }
                    .scroll-cue { display: none; }
                    .story-grid { grid-template-columns: 1fr; }
                    .stat-grid { grid-template-columns: 1fr; }
                    .about-grid { grid-template-columns: 1fr; }
                    .swipe-hint { display: block; }
                    .contact-layout { flex-direction: column; }
                    .contact-aside, .contact-main { width: 100%; border-right: none; }
                    .contact-aside { border-bottom: 1px solid var(--border); }
                }
            "#}
        </style>
    }
}
