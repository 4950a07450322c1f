use std::rc::Rc;

use yew::prelude::*;

use super::hooks::{use_pointer_parallax, use_reveal, use_scroll_header, use_typing_marquee, ParallaxOptions};
use crate::content::Content;
use crate::motion::NavSection;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: Rc<Content>,
}

fn reveal_classes(revealed: bool, shift: &'static str) -> Classes {
    classes!("reveal", shift, revealed.then_some("is-revealed"))
}

#[derive(Properties, PartialEq)]
struct NavListProps {
    active: NavSection,
    class: &'static str,
    #[prop_or_default]
    on_navigate: Callback<MouseEvent>,
}

#[function_component(NavList)]
fn nav_list(props: &NavListProps) -> Html {
    html! {
        <ul class={props.class}>
            { for NavSection::ALL.into_iter().map(|section| {
                let is_active = section == props.active;
                html! {
                    <li key={section.id()}>
                        <a
                            href={section.href()}
                            class={classes!("nav-link", is_active.then_some("is-active"))}
                            aria-current={is_active.then_some("location")}
                            onclick={props.on_navigate.clone()}
                        >
                            <span class="nav-glow" aria-hidden="true" />
                            <span class="nav-label">{section.label()}</span>
                        </a>
                    </li>
                }
            }) }
        </ul>
    }
}

#[function_component(Header)]
pub fn header(props: &SectionProps) -> Html {
    let profile = &props.content.site.profile;
    let motion = props.content.motion();
    let scroll = use_scroll_header(motion.header_hide_threshold, motion.section_threshold);
    let menu_open = use_state(|| false);

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let progress_style = format!("width: {:.2}%;", scroll.progress_percent());

    html! {
        <>
            <div class="scroll-progress" style={progress_style} aria-hidden="true" />
            <header class={classes!("site-header", scroll.hidden().then_some("is-hidden"))}>
                <nav class="site-nav" aria-label="Primary">
                    <a href={NavSection::Home.href()} class="site-logo">
                        <img src={profile.logo.clone()} alt={format!("{} Logo", profile.name)} width="140" height="100" />
                    </a>
                    <NavList active={scroll.active_section()} class="nav-links" />
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label="Toggle menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle}
                    >
                        <span /><span /><span />
                    </button>
                </nav>
                if *menu_open {
                    <div class="mobile-menu">
                        <NavList active={scroll.active_section()} class="mobile-links" {on_navigate} />
                    </div>
                }
            </header>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub content: Rc<Content>,
    pub reduced_motion: bool,
}

#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    let site = &props.content.site;
    let motion = props.content.motion();

    let headline_ref = use_node_ref();
    let headline = use_reveal(headline_ref.clone(), motion.headline_reveal());
    let in_view = headline.contains("headline");

    let typed = use_typing_marquee(
        props.content.phrases.clone(),
        motion.typing(),
        !props.reduced_motion,
    );

    let portrait_ref = use_node_ref();
    let parallax = use_pointer_parallax(
        portrait_ref.clone(),
        ParallaxOptions {
            threshold: motion.parallax_threshold,
            divisor: motion.parallax_divisor,
            enabled: !props.reduced_motion,
        },
    );
    let portrait_style = format!(
        "transform: {}; transition: transform 0.2s ease-out;",
        parallax.offset.to_translate()
    );

    html! {
        <section id={NavSection::Home.id()} class="hero">
            <div class="hero-particles" aria-hidden="true">
                <span class="particle particle-a" />
                <span class="particle particle-b" />
                <span class="particle particle-c" />
                <span class="particle particle-d" />
            </div>

            <div class="container hero-grid" ref={headline_ref}>
                <div class="hero-portrait-column">
                    <div
                        ref={portrait_ref}
                        class="hero-portrait"
                        style={portrait_style}
                        onmouseenter={parallax.onmouseenter}
                        onmouseleave={parallax.onmouseleave}
                    >
                        <span class="ring ring-outer" aria-hidden="true" />
                        <span class="ring ring-inner" aria-hidden="true" />
                        <span class="ring-glow" aria-hidden="true" />
                        <div class="portrait-frame">
                            <img src={site.profile.portrait.clone()} alt={site.profile.name.clone()} />
                        </div>
                    </div>
                </div>

                <div class="hero-copy">
                    <p class={reveal_classes(in_view, "shift-sm")}>
                        {"Hello, I'm "}<strong>{site.profile.name.clone()}</strong>
                    </p>
                    <h1 data-reveal-id="headline" class={reveal_classes(in_view, "shift-lg")}>
                        {site.hero.headline.clone()}{" "}
                        <span class="accent">{site.hero.headline_accent.clone()}</span>
                        {"."}
                    </h1>
                    <p class={reveal_classes(in_view, "shift-sm")}>{site.hero.subline.clone()}</p>
                </div>
            </div>

            <div class={classes!("container", "hero-typing", reveal_classes(in_view, "shift-lg"))}>
                <p class="typing-line">
                    {"I'm "}{typed}
                    <span class="caret" aria-hidden="true" />
                </p>
                <p class="muted">{site.hero.focus_line.clone()}</p>
                <a class="button primary" href={site.profile.resume_url.clone()} target="_blank" rel="noopener noreferrer">
                    {"View Resume"}<span class="arrow">{"→"}</span>
                </a>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    let site = &props.content.site;
    let about = &site.about;

    html! {
        <section id={NavSection::About.id()} class="section">
            <div class="container about-grid">
                <div class="about-illustration">
                    <img src={about.illustration.clone()} alt="About illustration" width="420" height="420" />
                </div>
                <div class="about-copy">
                    <h2>{"About Me"}</h2>
                    <p>
                        {"I’m "}<span class="highlight">{site.profile.name.clone()}</span>
                        {format!(", {} ", about.role)}<span class="emphasis">{about.institution.clone()}</span>
                        {format!(", {}", about.focus)}
                    </p>
                    <div class="timeline compact">
                        { for about.education.iter().map(|line| html! {
                            <p key={line.label.clone()}>
                                <span class="emphasis">{line.label.clone()}</span>
                                {format!(" — {} ", line.field)}
                                <span class="muted">{format!("({})", line.score)}</span>
                            </p>
                        }) }
                    </div>
                    <p class="muted">{about.closing.clone()}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills(props: &SectionProps) -> Html {
    let skills = &props.content.site.skills;
    let container_ref = use_node_ref();
    let revealed = use_reveal(container_ref.clone(), props.content.motion().skills_reveal());

    html! {
        <section id={NavSection::Skills.id()} class="section">
            <div class="container" ref={container_ref}>
                <h2>{"Skills"}</h2>

                <div class="tool-marquee">
                    <div class="tool-track">
                        { for skills.tools.iter().chain(skills.tools.iter()).enumerate().map(|(index, tool)| html! {
                            <div key={index} class="tool">
                                <img
                                    src={format!("/tools/{tool}.svg")}
                                    alt={tool.clone()}
                                    width="40"
                                    height="40"
                                    draggable="false"
                                    aria-hidden={(index >= skills.tools.len()).then_some("true")}
                                />
                            </div>
                        }) }
                    </div>
                </div>

                <div class="card-grid three">
                    { for skills.cards.iter().enumerate().map(|(index, card)| {
                        let id = format!("skill-{index}");
                        html! {
                            <div
                                key={card.title.clone()}
                                data-reveal-id={id.clone()}
                                class={classes!("card", "skill-card", reveal_classes(revealed.contains(&id), "shift-lg"))}
                            >
                                <h3>{card.title.clone()}</h3>
                                <div class="chips">
                                    { for card.skills.iter().map(|skill| html! {
                                        <span key={skill.clone()} class="chip">{skill.clone()}</span>
                                    }) }
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Experience)]
pub fn experience(props: &SectionProps) -> Html {
    html! {
        <section id={NavSection::Experience.id()} class="section">
            <div class="container">
                <h2>{"Work Experience"}</h2>
                <div class="timeline">
                    { for props.content.site.experience.iter().map(|card| html! {
                        <div key={card.id} class="timeline-entry">
                            <span class="timeline-dot" aria-hidden="true" />
                            <div class="card experience-card">
                                <img src={card.icon.clone()} alt={card.title.clone()} width="72" height="72" />
                                <div class="experience-body">
                                    <div class="experience-heading">
                                        <h3>{card.title.clone()}</h3>
                                        <span class="date-range">{card.date_range.clone()}</span>
                                    </div>
                                    <ul>
                                        { for card.bullets.iter().map(|bullet| html! { <li>{bullet.clone()}</li> }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects(props: &SectionProps) -> Html {
    let container_ref = use_node_ref();
    let revealed = use_reveal(container_ref.clone(), props.content.motion().card_reveal());

    html! {
        <section id={NavSection::Projects.id()} class="section">
            <div class="container wide" ref={container_ref}>
                { for props.content.site.projects.iter().enumerate().map(|(index, project)| {
                    let id = format!("project-{}", project.id);
                    let flipped = index % 2 == 1;
                    html! {
                        <article
                            key={project.id}
                            data-reveal-id={id.clone()}
                            class={classes!("project", flipped.then_some("is-flipped"), reveal_classes(revealed.contains(&id), "shift-xl"))}
                        >
                            <div class="project-copy">
                                <p class="eyebrow">{"Featured Project"}</p>
                                <h3>{project.title.clone()}</h3>
                                <div class="chips">
                                    { for project.tech.iter().map(|tech| html! {
                                        <span key={tech.clone()} class="chip subtle">{tech.clone()}</span>
                                    }) }
                                </div>
                                <div class="project-description">
                                    <p>{project.description.clone()}</p>
                                </div>
                                <div class="project-links">
                                    if let Some(github) = project.github.clone() {
                                        <a class="button ghost" href={github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                                    }
                                    if let Some(live) = project.live.clone() {
                                        <a class="button primary" href={live} target="_blank" rel="noopener noreferrer">{"Live Demo →"}</a>
                                    }
                                </div>
                            </div>
                            <div class="project-media">
                                <img
                                    src={project.image.clone()}
                                    alt={project.title.clone()}
                                    loading={if index == 0 { "eager" } else { "lazy" }}
                                />
                            </div>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(Leadership)]
pub fn leadership(props: &SectionProps) -> Html {
    let container_ref = use_node_ref();
    let revealed = use_reveal(container_ref.clone(), props.content.motion().card_reveal());

    html! {
        <section id={NavSection::Leadership.id()} class="section">
            <div class="container" ref={container_ref}>
                <h2>{"Leadership & Achievements"}</h2>
                <div class="card-grid two">
                    { for props.content.site.leadership.iter().enumerate().map(|(index, item)| {
                        let id = format!("leadership-{}", item.id);
                        let tilt = if index % 2 == 0 { "tilt-right" } else { "tilt-left" };
                        html! {
                            <div
                                key={item.id}
                                data-reveal-id={id.clone()}
                                class={classes!("card", "leadership-card", tilt, reveal_classes(revealed.contains(&id), "shift-lg"))}
                            >
                                <div class="leadership-heading">
                                    <div class="leadership-title">
                                        <span class="icon" aria-hidden="true">{item.icon.glyph()}</span>
                                        <h3>{item.title.clone()}</h3>
                                    </div>
                                    if let Some(highlight) = item.highlight.clone() {
                                        <span class="badge">{highlight}</span>
                                    }
                                </div>
                                <p>{item.description.clone()}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    let site = &props.content.site;
    let contact = &site.contact;
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer id={NavSection::Contact.id()} class="section footer">
            <div class="container">
                <div class="cta">
                    <h2>{contact.heading.clone()}</h2>
                    <p class="muted">{contact.blurb.clone()}</p>
                    <div class="cta-buttons">
                        <a class="button primary" href={format!("mailto:{}", contact.email)}>
                            {"Get in Touch"}<span class="arrow">{"→"}</span>
                        </a>
                        <a class="button ghost" href={contact.resume_url.clone()} target="_blank" rel="noopener noreferrer">
                            {"View Resume"}
                        </a>
                    </div>
                </div>

                <div class="contact-info">
                    <a href={format!("mailto:{}", contact.email)}>{contact.email.clone()}</a>
                    <p class="muted">{contact.phone.clone()}</p>
                </div>

                <div class="socials">
                    { for contact.socials.iter().map(|social| html! {
                        <a
                            key={social.label.clone()}
                            class="social"
                            href={social.href.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={social.label.clone()}
                        >
                            <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                                <path d={social.icon_path.clone()} />
                            </svg>
                        </a>
                    }) }
                </div>

                <p class="copyright">
                    {format!("© {year} {} • {} •", site.profile.name, contact.motto)}
                </p>
            </div>
        </footer>
    }
}
