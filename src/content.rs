//! Page content
//!
//! Everything the page says lives here as plain data. Views render it;
//! nothing mutates it.

use serde::Serialize;

/// A navigation anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// An external profile link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

/// Headline number in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Experience or education entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    /// Icon font class
    pub icon: &'static str,
}

/// Which side of the centre line a timeline card sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Cards alternate, starting on the left
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Side::Left } else { Side::Right }
    }
}

/// A skill shown on an orbit ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Icon font class
    pub icon: &'static str,
    /// Icon colour (CSS)
    pub color: &'static str,
}

/// Project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
    pub icon: &'static str,
    pub link: &'static str,
}

/// Hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub explorer_id: &'static str,
    pub name: &'static str,
    /// Phrases cycled by the typewriter
    pub phrases: &'static [&'static str],
    pub blurb: &'static str,
    /// Prebuilt 3D scene shown beside the hero text
    pub scene_url: &'static str,
}

/// Everything on the page
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub brand: &'static str,
    pub full_name: &'static str,
    pub resume_url: &'static str,
    pub nav: &'static [NavLink],
    pub hero: Hero,
    pub socials: &'static [SocialLink],
    pub about_heading: &'static str,
    pub about_text: &'static str,
    pub photo_url: &'static str,
    pub stats: &'static [Stat],
    pub timeline: &'static [TimelineEntry],
    pub inner_skills: &'static [Skill],
    pub outer_skills: &'static [Skill],
    /// Scene rendered at the centre of the orbit rings
    pub sun_scene_url: &'static str,
    pub group_projects: &'static [Project],
    pub personal_projects: &'static [Project],
    pub footer: &'static str,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::galaxy()
    }
}

impl Portfolio {
    pub fn galaxy() -> Self {
        Self {
            brand: "MANGLA",
            full_name: "Mangla Shukla",
            resume_url: "/ManglaShukla_Resume.pdf",
            nav: &[
                NavLink { label: "[BASE]", href: "#home" },
                NavLink { label: "[ABOUT]", href: "#about" },
                NavLink { label: "[LOGS]", href: "#experience" },
                NavLink { label: "[SYSTEMS]", href: "#skills" },
                NavLink { label: "[MISSIONS]", href: "#projects" },
            ],
            hero: Hero {
                explorer_id: "/// EXPLORER ID: 21230510",
                name: "MANGLA",
                phrases: &["SPACE_DEV", "AI_PIONEER", "SYSTEM_ARCHITECT"],
                blurb: "Traversing the digital cosmos. Specialized in MERN Systems and \
                        Artificial Intelligence protocols.",
                scene_url: "/astro.splinecode",
            },
            socials: &[
                SocialLink {
                    label: "LINKEDIN",
                    icon: "fa-brands fa-linkedin",
                    url: "https://linkedin.com/in/mangla-shukla",
                },
                SocialLink {
                    label: "GITHUB",
                    icon: "fa-brands fa-github",
                    url: "https://github.com/Manglashukla",
                },
            ],
            about_heading: "I'm Mangla Shukla, navigating the frontiers of Code & AI.",
            about_text: "My mission is to engineer robust digital systems. I specialize in \
                         building full-stack applications using the MERN Stack and developing \
                         intelligent models with Python & AI.",
            photo_url: "/myphoto.png",
            stats: &[
                Stat { value: "<1", label: "Year Exp." },
                Stat { value: "05+", label: "Projects" },
                Stat { value: "05+", label: "Hackathons" },
            ],
            timeline: &[
                TimelineEntry {
                    date: "Sep 2025 - Present",
                    title: "Campus Ambassador",
                    company: "Unstop",
                    description: "Promoting coding culture and organizing hackathons.",
                    icon: "fa-solid fa-bullhorn",
                },
                TimelineEntry {
                    date: "2025",
                    title: "GDGOC Hackathon Finalist",
                    company: "Google Developer Groups",
                    description: "Secured Top 10 rank with 'Kumbh Rakshak' project.",
                    icon: "fa-solid fa-trophy",
                },
                TimelineEntry {
                    date: "Aug 2025",
                    title: "Web Dev Intern",
                    company: "IBM",
                    description: "Developed a full-stack e-commerce platform using MERN.",
                    icon: "fa-solid fa-building",
                },
                TimelineEntry {
                    date: "Summer 2024",
                    title: "Python Training",
                    company: "UCER",
                    description: "Intensive summer training in Python & Data Science.",
                    icon: "fa-solid fa-laptop-code",
                },
                TimelineEntry {
                    date: "2023 - 2027",
                    title: "B.Tech (CSE - AI/ML)",
                    company: "UCER",
                    description: "Pursuing B.Tech with specialization in AI & ML.",
                    icon: "fa-solid fa-certificate",
                },
            ],
            inner_skills: &[
                Skill { name: "React", icon: "devicon-react-original", color: "#22d3ee" },
                Skill { name: "Node", icon: "devicon-nodejs-plain", color: "#22c55e" },
                Skill { name: "Mongo", icon: "devicon-mongodb-plain", color: "#4ade80" },
                Skill { name: "Next", icon: "devicon-nextjs-plain", color: "#ffffff" },
                Skill { name: "Tailwind", icon: "devicon-tailwindcss-plain", color: "#67e8f9" },
            ],
            outer_skills: &[
                Skill { name: "Python", icon: "devicon-python-plain", color: "#facc15" },
                Skill { name: "Java", icon: "devicon-java-plain", color: "#ef4444" },
                Skill { name: "Cpp", icon: "devicon-cplusplus-plain", color: "#3b82f6" },
                Skill { name: "Flutter", icon: "devicon-flutter-plain", color: "#60a5fa" },
                Skill { name: "OpenCV", icon: "devicon-opencv-plain", color: "#86efac" },
                Skill { name: "Firebase", icon: "devicon-firebase-plain", color: "#eab308" },
            ],
            sun_scene_url: "/sun.splinecode",
            group_projects: &[
                Project {
                    title: "Kumbh Rakshak",
                    desc: "AI crowd safety protocol using DeepFace & CCTV.",
                    tags: &["Python", "AI"],
                    icon: "🛡️",
                    link: "https://github.com/SaumyaPratapSingh-cyber/Kumbh-Rakshak-Surveillance-System",
                },
                Project {
                    title: "Krishi Seva 2.0",
                    desc: "Terraforming & Crop Analysis for farmers.",
                    tags: &["MERN", "ML"],
                    icon: "🌱",
                    link: "https://github.com/SaumyaPratapSingh-cyber/Krishi-Seva-App-for-to-farmers-",
                },
            ],
            personal_projects: &[
                Project {
                    title: "MudraVani",
                    desc: "Universal Sign Language Translator.",
                    tags: &["Python", "OpenCV"],
                    icon: "✋",
                    link: "https://github.com/Manglashukla/MudraVani-AI",
                },
                Project {
                    title: "ShoppingKart",
                    desc: "Galactic E-commerce System.",
                    tags: &["React", "Node"],
                    icon: "🛒",
                    link: "https://github.com/Manglashukla/shoppingkart",
                },
                Project {
                    title: "Expense Tracker",
                    desc: "Resource Logistics & Tracking.",
                    tags: &["Python", "Data"],
                    icon: "📊",
                    link: "https://github.com/Manglashukla/Expense-Tracker",
                },
            ],
            footer: "SYSTEM STATUS: ONLINE // 2027 MANGLA SHUKLA",
        }
    }

    /// Total projects across both galleries
    pub fn project_count(&self) -> usize {
        self.group_projects.len() + self.personal_projects.len()
    }
}
