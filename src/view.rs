//! Page markup built from [`content`](crate::content)
//!
//! The page shell in `index.html` only holds empty containers. Everything the
//! page says is rendered here with leptos `view!` into HTML strings and
//! injected once per mount, so text and attributes are escaped by the
//! renderer and `content` stays the single source of truth.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::content::{Hero, Portfolio, Project, Side, Skill, Stat, TimelineEntry};
use crate::motion::{OrbitRing, RevealFrom, Starfield};

/// Class the frame loop toggles on `.reveal` elements in view
pub const REVEAL_VISIBLE_CLASS: &str = "in-view";

#[component]
fn NavBar(portfolio: Portfolio) -> impl IntoView {
    view! {
        <h1>{portfolio.brand}<span class="accent">".GALAXY"</span></h1>
        <div class="links mono">
            {portfolio
                .nav
                .iter()
                .map(|link| view! { <a href=link.href>{link.label}</a> })
                .collect_view()}
        </div>
        <div>
            <a
                class="button mono"
                href=portfolio.resume_url
                target="_blank"
                rel="noopener noreferrer"
            >
                <i class="fa-solid fa-file-arrow-down"></i>
                " RESUME_FILE"
            </a>
            <a class="button mono" href="#contact">"CONNECT_UPLINK"</a>
        </div>
    }
}

#[component]
fn HeroText(hero: Hero, portfolio: Portfolio) -> impl IntoView {
    view! {
        <h2 class="mono accent">{hero.explorer_id}</h2>
        <h1>{hero.name}</h1>
        <div class="mono">
            <span id="typewriter">"|"</span>
        </div>
        <p>{hero.blurb}</p>
        <p>
            {portfolio
                .socials
                .iter()
                .map(|social| {
                    view! {
                        <a
                            class="button"
                            href=social.url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <i class=social.icon></i>
                            " "
                            {social.label}
                        </a>
                    }
                })
                .collect_view()}
        </p>
    }
}

#[component]
fn SceneViewer(url: &'static str) -> impl IntoView {
    view! {
        <spline-viewer url=url>
            <div class="scene-loading mono">"INITIALIZING SYSTEMS..."</div>
        </spline-viewer>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat">
            <h4>{stat.value}</h4>
            <p>{stat.label}</p>
        </div>
    }
}

#[component]
fn About(portfolio: Portfolio) -> impl IntoView {
    view! {
        <div class="about-photo reveal" style=RevealFrom::ABOUT_PHOTO.css_style()>
            <img src=portfolio.photo_url alt=portfolio.full_name />
        </div>
        <div class="about-text reveal" style=RevealFrom::ABOUT_TEXT.css_style()>
            <h2>"About Profile"</h2>
            <h3>{portfolio.about_heading}</h3>
            <p>{portfolio.about_text}</p>
            <div class="stats mono">
                {portfolio
                    .stats
                    .iter()
                    .map(|stat| view! { <StatCard stat=*stat /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry, side: Side) -> impl IntoView {
    let (row, card) = match side {
        Side::Left => ("timeline-row reverse", "timeline-card reveal text-right"),
        Side::Right => ("timeline-row", "timeline-card reveal"),
    };
    view! {
        <div class=row>
            <div class="timeline-spacer"></div>
            <div class="timeline-icon">
                <i class=entry.icon></i>
            </div>
            <div class=card style=RevealFrom::TIMELINE.css_style()>
                <h3>{entry.title}</h3>
                <h4>{entry.company}</h4>
                <p>{entry.description}</p>
                <span class="timeline-date">{entry.date}</span>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <div class="project-icon">{project.icon}</div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.desc}</p>
                <div class="project-tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{*tag}</span> })
                        .collect_view()}
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="project-link"
                >
                    "INITIATE MISSION "
                    <i class="fa-solid fa-up-right-from-square"></i>
                </a>
            </div>
        </div>
    }
}

/// One skill icon, placed at its t = 0 position.
/// `data-ring`/`data-slot` let the frame loop move it.
#[component]
fn OrbitSkill(ring_name: &'static str, ring: OrbitRing, slot_index: usize, skill: Skill) -> impl IntoView {
    let slot = slot_index;
    view! {
        <div
            class="orbit-skill"
            data-ring=ring_name
            data-slot=slot.to_string()
            title=skill.name
            style=format!("transform:{}", ring.css_transform(slot, 0.0))
        >
            <i class=skill.icon style=format!("color:{}", skill.color)></i>
        </div>
    }
}

pub fn nav(portfolio: &Portfolio) -> String {
    let portfolio = portfolio.clone();
    view! { <NavBar portfolio=portfolio /> }.to_html()
}

pub fn hero_text(portfolio: &Portfolio) -> String {
    let hero = portfolio.hero;
    let portfolio = portfolio.clone();
    view! { <HeroText hero=hero portfolio=portfolio /> }.to_html()
}

pub fn scene(url: &'static str) -> String {
    view! { <SceneViewer url=url /> }.to_html()
}

pub fn about(portfolio: &Portfolio) -> String {
    let portfolio = portfolio.clone();
    view! { <About portfolio=portfolio /> }.to_html()
}

pub fn timeline(entries: &[TimelineEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| view! { <TimelineItem entry=*entry side=Side::for_index(i) /> })
        .collect_view()
        .to_html()
}

pub fn project_grid(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|project| view! { <ProjectCard project=*project /> })
        .collect_view()
        .to_html()
}

pub fn orbit_ring(ring_name: &'static str, ring: &OrbitRing, skills: &[Skill]) -> String {
    let ring = *ring;
    skills
        .iter()
        .enumerate()
        .map(|(slot, skill)| view! { <OrbitSkill ring_name=ring_name ring=ring slot_index=slot skill=*skill /> })
        .collect_view()
        .to_html()
}

pub fn stars(field: &Starfield) -> String {
    field
        .stars
        .iter()
        .map(|star| view! { <div class="star" style=star.css_style()></div> })
        .collect_view()
        .to_html()
}

pub fn footer(portfolio: &Portfolio) -> String {
    view! { <p>{portfolio.footer}</p> }.to_html()
}

/// Every rendered section keyed by the id of the container it fills
pub fn sections(portfolio: &Portfolio, starfield: &Starfield) -> Vec<(&'static str, String)> {
    let inner = OrbitRing::inner(portfolio.inner_skills.len());
    let outer = OrbitRing::outer(portfolio.outer_skills.len());
    vec![
        ("starfield", stars(starfield)),
        ("nav", nav(portfolio)),
        ("hero-text", hero_text(portfolio)),
        ("hero-scene-viewer", scene(portfolio.hero.scene_url)),
        ("about-body", about(portfolio)),
        ("timeline", timeline(portfolio.timeline)),
        ("orbit-sun", scene(portfolio.sun_scene_url)),
        ("orbit-inner", orbit_ring("inner", &inner, portfolio.inner_skills)),
        ("orbit-outer", orbit_ring("outer", &outer, portfolio.outer_skills)),
        ("group-projects", project_grid(portfolio.group_projects)),
        ("personal-projects", project_grid(portfolio.personal_projects)),
        ("footer", footer(portfolio)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_card_escapes_and_links() {
        let project = Project {
            title: "A <b>bold</b> plan",
            desc: "x & y",
            tags: &["Rust", "Wasm"],
            icon: "🚀",
            link: "https://example.com/?a=1&b=2",
        };
        let html = project_grid(&[project]);
        assert!(html.contains("A &lt;b&gt;bold&lt;/b&gt; plan"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("x &amp; y"));
        assert!(html.contains("https://example.com/?a=1&amp;b=2"));
        assert!(html.contains(r#"target="_blank""#));
        assert_eq!(html.matches(r#"class="tag""#).count(), 2);
        assert!(html.contains("INITIATE MISSION"));
    }

    #[test]
    fn test_timeline_alternates_and_reveals() {
        let portfolio = Portfolio::galaxy();
        let html = timeline(portfolio.timeline);
        assert_eq!(html.matches("timeline-row reverse").count(), 3);
        assert_eq!(html.matches(r#"class="timeline-row""#).count(), 2);
        assert_eq!(html.matches("timeline-card reveal").count(), 5);
        assert_eq!(html.matches("--reveal-y:20px").count(), 5);
        assert!(html.contains("Google Developer Groups"));
        assert!(html.contains("Kumbh Rakshak"));
    }

    #[test]
    fn test_orbit_ring_slots() {
        let portfolio = Portfolio::galaxy();
        let ring = OrbitRing::inner(portfolio.inner_skills.len());
        let html = orbit_ring("inner", &ring, portfolio.inner_skills);
        assert_eq!(html.matches(r#"class="orbit-skill""#).count(), 5);
        assert!(html.contains(r#"data-ring="inner""#));
        assert!(html.contains(r#"data-slot="4""#));
        assert!(html.contains("rotate(72.00deg)"));
        assert!(html.contains("color:#22d3ee"));
    }

    #[test]
    fn test_nav_and_hero_come_from_content() {
        let portfolio = Portfolio::galaxy();
        let nav = nav(&portfolio);
        for link in portfolio.nav {
            assert!(nav.contains(link.href));
            assert!(nav.contains(link.label));
        }
        assert!(nav.contains(portfolio.resume_url));

        let hero = hero_text(&portfolio);
        assert!(hero.contains(portfolio.hero.explorer_id));
        assert!(hero.contains(r#"id="typewriter""#));
        for social in portfolio.socials {
            assert!(hero.contains(social.url));
        }
    }

    #[test]
    fn test_about_escapes_ampersand_and_reveals() {
        let portfolio = Portfolio::galaxy();
        let html = about(&portfolio);
        assert!(html.contains("Code &amp; AI"));
        assert!(html.contains("&lt;1"));
        assert_eq!(html.matches(r#"class="stat""#).count(), 3);
        assert!(html.contains("--reveal-x:-50px"));
        assert!(html.contains("--reveal-x:50px"));
    }

    #[test]
    fn test_scene_viewer() {
        let html = scene("/sun.splinecode");
        assert!(html.contains("<spline-viewer"));
        assert!(html.contains(r#"url="/sun.splinecode""#));
    }

    #[test]
    fn test_sections_cover_every_container() {
        let portfolio = Portfolio::galaxy();
        let field = Starfield::generate(1, 50);
        let sections = sections(&portfolio, &field);
        let ids: Vec<_> = sections.iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec![
                "starfield",
                "nav",
                "hero-text",
                "hero-scene-viewer",
                "about-body",
                "timeline",
                "orbit-sun",
                "orbit-inner",
                "orbit-outer",
                "group-projects",
                "personal-projects",
                "footer",
            ]
        );
        assert_eq!(sections[0].1.matches(r#"class="star""#).count(), 50);
        assert!(sections.iter().all(|(_, html)| !html.is_empty()));
        assert!(sections[11].1.contains(portfolio.footer));
    }
}
