use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::service_card::ServiceCard;
use crate::components::typewriter_text::TypewriterText;
use crate::config;
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub theme: Theme,
}

struct Service {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Bot,
        title: "AI Chat Agents",
        description: "Custom AI agents that engage, support, and convert your customers 24/7.",
    },
    Service {
        icon: Icon::Workflow,
        title: "Workflow Automation",
        description: "Streamline your operations with intelligent automation solutions.",
    },
    Service {
        icon: Icon::Database,
        title: "CRM Integration",
        description: "Seamlessly connect your systems with smart CRM solutions.",
    },
];

const GRID_CELLS: usize = 64;

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("hero", props.theme.class())}>
            <div class="hero-background">
                <div class="blobs">
                    <div class="blob blob-blue"></div>
                    <div class="blob blob-purple delay-2"></div>
                    <div class="blob blob-cyan delay-4"></div>
                </div>
            </div>

            <div class="grid-overlay">
                { for (0..GRID_CELLS).map(|i| html! { <div key={i} class="grid-cell"></div> }) }
            </div>

            <div class="hero-content">
                <h1 class="hero-title gradient-text">
                    {"Unlock the Power of Autonomous Intelligence"}
                </h1>
                <div class="hero-badge">
                    <IconView icon={Icon::Zap} class="icon-xs zap" />
                    <TypewriterText text={config::TYPEWRITER_TEXT} />
                </div>
                <p class="hero-subtitle muted">
                    {"Transform your business with cutting-edge AI solutions. We build intelligent systems that automate, innovate, and elevate your operations."}
                </p>
                <button class="cta-button">
                    {"Build with Us"}
                    <IconView icon={Icon::ArrowRight} class="icon-sm cta-arrow" />
                </button>
                <IconView icon={Icon::ChevronDown} class="icon-lg scroll-hint" />
            </div>
        </section>
    }
}

#[function_component(About)]
fn about(props: &SectionProps) -> Html {
    html! {
        <section id="about" class={classes!("about", props.theme.class())}>
            <div class="section-content narrow">
                <h2>{ format!("About {}", config::BRAND) }</h2>
                <p class="lead muted">
                    {"We are pioneers in AI automation, dedicated to transforming businesses through intelligent solutions. Our mission is to bridge the gap between cutting-edge technology and practical business applications, creating seamless, efficient, and powerful automated systems."}
                </p>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services(props: &SectionProps) -> Html {
    html! {
        <section id="services" class={classes!("services", props.theme.class())}>
            <div class="section-content">
                <h2>{"What We Do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard
                            key={service.title}
                            icon={service.icon}
                            title={service.title}
                            description={service.description}
                            theme={props.theme}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact(props: &SectionProps) -> Html {
    html! {
        <section id="contact" class={classes!("contact", props.theme.class())}>
            <div class="section-content narrow">
                <h2>{"Ready to Transform Your Business?"}</h2>
                <p class="lead muted">
                    {"Let's discuss how we can automate and elevate your business operations with cutting-edge AI solutions."}
                </p>
                <button class="cta-button centered">
                    {"Get Started"}
                    <IconView icon={Icon::ArrowRight} class="icon-sm cta-arrow" />
                </button>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing(props: &SectionProps) -> Html {
    let theme = props.theme;

    html! {
        <div class="landing-page">
            <Hero theme={theme} />
            <About theme={theme} />
            <Services theme={theme} />
            <Contact theme={theme} />
            <style>{ LANDING_CSS }</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .theme-dark {
        --fg: #ffffff;
        --muted: #9ca3af;
        --nav-link: #d1d5db;
        --bg: #000000;
        --bg-soft: #111827;
        --accent: #60a5fa;
        --gradient: linear-gradient(to right, #60a5fa, #c084fc, #60a5fa);
        --title-gradient: linear-gradient(to right, #ffffff, #3b82f6, #ffffff);
        --card-bg: linear-gradient(to bottom right, #111827, #000000);
        --card-border: #1f2937;
        --grid-line: #6b7280;
        --grid-opacity: 0.1;
        --nav-scrolled: rgba(0, 0, 0, 0.7);
        --toggle-bg: rgba(255, 255, 255, 0.1);
        --toggle-hover: rgba(255, 255, 255, 0.2);
        --cta-bg: #ffffff;
        --cta-fg: #000000;
        --badge-bg: linear-gradient(to right, rgba(59, 130, 246, 0.1), rgba(59, 130, 246, 0.2), rgba(59, 130, 246, 0.1));
    }

    .theme-light {
        --fg: #000000;
        --muted: #4b5563;
        --nav-link: #374151;
        --bg: #ffffff;
        --bg-soft: #f3f4f6;
        --accent: #2563eb;
        --gradient: linear-gradient(to right, #2563eb, #9333ea, #2563eb);
        --title-gradient: linear-gradient(to right, #000000, #3b82f6, #000000);
        --card-bg: linear-gradient(to bottom right, #f3f4f6, #ffffff);
        --card-border: #e5e7eb;
        --grid-line: #9ca3af;
        --grid-opacity: 0.05;
        --nav-scrolled: rgba(255, 255, 255, 0.7);
        --toggle-bg: rgba(0, 0, 0, 0.1);
        --toggle-hover: rgba(0, 0, 0, 0.2);
        --cta-bg: #000000;
        --cta-fg: #ffffff;
        --badge-bg: linear-gradient(to right, rgba(59, 130, 246, 0.05), rgba(59, 130, 246, 0.1), rgba(59, 130, 246, 0.05));
    }

    .page {
        min-height: 100vh;
        background: var(--bg);
        color: var(--fg);
        transition: background-color 0.3s, color 0.3s;
    }

    .icon { display: inline-block; flex-shrink: 0; }
    .icon-xs { width: 1rem; height: 1rem; }
    .icon-sm { width: 1.25rem; height: 1.25rem; }
    .icon-md { width: 1.5rem; height: 1.5rem; }
    .icon-lg { width: 2rem; height: 2rem; }
    .accent { color: var(--accent); }
    .muted { color: var(--muted); transition: color 0.3s; }

    .gradient-text {
        background-image: var(--gradient);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    /* Navigation */
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 30;
        background: transparent;
        transition: all 0.3s;
    }

    .top-nav.scrolled {
        background: var(--nav-scrolled);
        backdrop-filter: blur(16px);
        -webkit-backdrop-filter: blur(16px);
    }

    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .nav-logo { display: flex; align-items: center; gap: 0.5rem; }
    .brand { font-size: 1.5rem; font-weight: 700; }

    .nav-links { display: none; align-items: center; gap: 2rem; }
    .nav-link {
        color: var(--nav-link);
        text-decoration: none;
        transition: color 0.3s;
    }
    .nav-link:hover { color: #60a5fa; }

    @media (min-width: 768px) {
        .nav-links { display: flex; }
        .services-grid { grid-template-columns: repeat(3, 1fr); }
        .hero-title { font-size: 4.5rem; }
    }

    .theme-toggle {
        padding: 0.75rem;
        border: none;
        border-radius: 9999px;
        background: var(--toggle-bg);
        color: inherit;
        cursor: pointer;
        display: flex;
        transition: all 0.3s;
    }
    .theme-toggle:hover { background: var(--toggle-hover); }

    /* Hero */
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }

    .hero-background {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom right, var(--bg), var(--bg-soft), var(--bg));
        transition: background 0.3s;
    }

    .blobs {
        position: absolute;
        inset: 0;
        opacity: 0.3;
        animation: pulse-slow 6s ease-in-out infinite;
    }

    .blob {
        position: absolute;
        width: 18rem;
        height: 18rem;
        border-radius: 9999px;
        mix-blend-mode: multiply;
        filter: blur(24px);
        opacity: 0.7;
        animation: blob 7s infinite;
    }
    .blob-blue { top: 0; left: -1rem; background: #3b82f6; }
    .blob-purple { top: 0; right: -1rem; background: #a855f7; }
    .blob-cyan { bottom: -2rem; left: 5rem; background: #06b6d4; }
    .delay-2 { animation-delay: 2s; }
    .delay-4 { animation-delay: 4s; }

    .grid-overlay {
        position: absolute;
        inset: 0;
        display: grid;
        grid-template-columns: repeat(8, 1fr);
        gap: 1rem;
        opacity: var(--grid-opacity);
        transition: opacity 0.3s;
    }
    .grid-cell { border: 0.5px solid var(--grid-line); }

    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 1200px;
        padding: 0 1.5rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        gap: 2rem;
    }

    .hero-title {
        font-size: 3rem;
        font-weight: 700;
        background-image: var(--title-gradient);
        background-size: 200% auto;
        animation: gradient 8s linear infinite;
    }

    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-top: -1rem;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        background: var(--badge-bg);
        backdrop-filter: blur(4px);
    }
    .zap { color: #facc15; animation: pulse 2s ease-in-out infinite; }

    .typewriter { display: inline-block; min-width: 20ch; }
    .typewriter-cursor { animation: blink 1s step-end infinite; }

    .hero-subtitle { font-size: 1.25rem; max-width: 42rem; }

    .cta-button {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border: none;
        border-radius: 9999px;
        font-weight: 600;
        font-size: 1rem;
        background: var(--cta-bg);
        color: var(--cta-fg);
        cursor: pointer;
        transition: all 0.3s;
    }
    .cta-button:hover { background: #3b82f6; color: #ffffff; }
    .cta-button.centered { margin: 0 auto; }
    .cta-arrow { transition: transform 0.3s; }
    .cta-button:hover .cta-arrow { transform: translateX(0.25rem); }

    .scroll-hint { margin-top: 4rem; animation: bounce 1s infinite; }

    /* Sections */
    .about, .services, .contact {
        padding: 6rem 0;
        transition: background 0.3s;
    }
    .about { background: linear-gradient(to bottom, var(--bg), var(--bg-soft)); }
    .services { background: var(--bg); }
    .contact { background: linear-gradient(to bottom, var(--bg-soft), var(--bg)); }

    .section-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
        text-align: center;
    }
    .section-content.narrow { max-width: 48rem; }
    .section-content h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 2rem; }
    .services .section-content h2 { margin-bottom: 4rem; }
    .lead { font-size: 1.125rem; line-height: 1.75; margin-bottom: 3rem; }

    .services-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
        text-align: left;
    }

    .service-card {
        padding: 2rem;
        border-radius: 1rem;
        background: var(--card-bg);
        border: 1px solid var(--card-border);
        transition: all 0.3s;
    }
    .service-card:hover { border-color: #3b82f6; }
    .service-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }

    .service-icon {
        width: 4rem;
        height: 4rem;
        margin-bottom: 1.5rem;
        border-radius: 0.75rem;
        background: rgba(59, 130, 246, 0.1);
        display: flex;
        align-items: center;
        justify-content: center;
    }

    @keyframes blink {
        0%, 100% { opacity: 1; }
        50% { opacity: 0; }
    }

    @keyframes blob {
        0% { transform: translate(0, 0) scale(1); }
        33% { transform: translate(30px, -50px) scale(1.1); }
        66% { transform: translate(-20px, 20px) scale(0.9); }
        100% { transform: translate(0, 0) scale(1); }
    }

    @keyframes gradient {
        0% { background-position: 0% center; }
        100% { background-position: 200% center; }
    }

    @keyframes pulse-slow {
        0%, 100% { opacity: 0.3; }
        50% { opacity: 0.5; }
    }

    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }

    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
        50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
    }
"#;
