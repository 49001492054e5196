//! Compile-time content describing the page owner.
//!
//! Every table here is ordered; the page renders entries in exactly this
//! order.

use serde::Serialize;

/// Icon reference, resolved to a CDN icon-font class by [`Icon::class`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Python,
    Java,
    React,
    NodeJs,
    Aws,
    Linux,
    Flutter,
    MongoDb,
    MySql,
    JavaScript,
    Sun,
    Moon,
    PaperPlane,
    Mail,
    Terminal,
    Code,
    Briefcase,
    GraduationCap,
    Award,
    Cpu,
    User,
    Users,
    Trophy,
    HardDrive,
    Wifi,
}

impl Icon {
    /// Brand icons come from devicon, everything else from Font Awesome.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Python => "devicon-python-plain",
            Icon::Java => "devicon-java-plain",
            Icon::React => "devicon-react-original",
            Icon::NodeJs => "devicon-nodejs-plain",
            Icon::Aws => "devicon-amazonwebservices-plain-wordmark",
            Icon::Linux => "devicon-linux-plain",
            Icon::Flutter => "devicon-flutter-plain",
            Icon::MongoDb => "devicon-mongodb-plain",
            Icon::MySql => "devicon-mysql-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::Sun => "fa-solid fa-sun",
            Icon::Moon => "fa-solid fa-moon",
            Icon::PaperPlane => "fa-solid fa-paper-plane",
            Icon::Mail => "fa-solid fa-envelope",
            Icon::Terminal => "fa-solid fa-terminal",
            Icon::Code => "fa-solid fa-code",
            Icon::Briefcase => "fa-solid fa-briefcase",
            Icon::GraduationCap => "fa-solid fa-graduation-cap",
            Icon::Award => "fa-solid fa-award",
            Icon::Cpu => "fa-solid fa-microchip",
            Icon::User => "fa-solid fa-user",
            Icon::Users => "fa-solid fa-users",
            Icon::Trophy => "fa-solid fa-trophy",
            Icon::HardDrive => "fa-solid fa-hard-drive",
            Icon::Wifi => "fa-solid fa-wifi",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

impl Skill {
    /// Spotlight tint for the skill card: the brand color at 25% alpha.
    pub fn spotlight_color(&self) -> String {
        format!("{}40", self.color)
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Strength {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Experience {
    pub role: &'static str,
    pub organisation: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub brand_icon: Icon,
    pub role: &'static str,
    pub focus: &'static [&'static str],
    pub hero_image: &'static str,
    /// About paragraph as `(text, highlighted)` runs.
    pub about: &'static [(&'static str, bool)],
    pub experience: Experience,
    pub education: Education,
}

/// Page sections in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Hero,
    About,
    Experience,
    Education,
    Projects,
    Skills,
    Interpersonal,
    Achievements,
    Contact,
}

impl Section {
    pub const ORDER: [Section; 9] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::Interpersonal,
        Section::Achievements,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Interpersonal => "interpersonal",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    /// Heading text and icon. The hero and contact sections draw their own
    /// headings and return `None`.
    pub fn heading(self) -> Option<(&'static str, Icon)> {
        match self {
            Section::Hero | Section::Contact => None,
            Section::About => Some(("ABOUT ME", Icon::User)),
            Section::Experience => Some(("EXPERIENCE", Icon::Briefcase)),
            Section::Education => Some(("EDUCATION", Icon::GraduationCap)),
            Section::Projects => Some(("PROJECTS", Icon::Code)),
            Section::Skills => Some(("TECHNICAL SKILLS", Icon::Cpu)),
            Section::Interpersonal => Some(("INTERPERSONAL", Icon::Users)),
            Section::Achievements => Some(("ACHIEVEMENTS", Icon::Award)),
        }
    }
}

pub const NAV_LINKS: &[NavEntry] = &[
    NavEntry { label: "HOME", href: "#home" },
    NavEntry { label: "ABOUT", href: "#about" },
    NavEntry { label: "EXPERIENCE", href: "#experience" },
    NavEntry { label: "EDUCATION", href: "#education" },
    NavEntry { label: "PROJECTS", href: "#projects" },
    NavEntry { label: "SKILLS", href: "#skills" },
    NavEntry { label: "AWARDS", href: "#achievements" },
    NavEntry { label: "CONTACT", href: "#contact" },
];

pub const TECHNICAL_SKILLS: &[Skill] = &[
    Skill { name: "Python", icon: Icon::Python, color: "#3776AB" },
    Skill { name: "Java", icon: Icon::Java, color: "#007396" },
    Skill { name: "React", icon: Icon::React, color: "#61DAFB" },
    Skill { name: "Node.js", icon: Icon::NodeJs, color: "#339933" },
    Skill { name: "AWS", icon: Icon::Aws, color: "#FF9900" },
    Skill { name: "Linux", icon: Icon::Linux, color: "#FCC624" },
    Skill { name: "Flutter", icon: Icon::Flutter, color: "#02569B" },
    Skill { name: "MongoDB", icon: Icon::MongoDb, color: "#47A248" },
    Skill { name: "SQL", icon: Icon::MySql, color: "#4479A1" },
    Skill { name: "JS", icon: Icon::JavaScript, color: "#F7DF1E" },
];

pub const INTERPERSONAL_SKILLS: &[Strength] = &[
    Strength { title: "Leadership", description: "Led hackathon teams to finals." },
    Strength { title: "Communication", description: "Presenting technical concepts clearly." },
    Strength { title: "Problem Solving", description: "Troubleshooting complex network issues." },
    Strength { title: "Adaptability", description: "Quickly learning new stacks (Flutter/AWS)." },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Time Table Generator",
        tags: &["Node.js", "MongoDB"],
        description: "Automated scheduling algorithm.",
    },
    Project {
        title: "Smart Tourist Safety",
        tags: &["AI/ML", "Python"],
        description: "Hackathon winning safety solution.",
    },
    Project {
        title: "Faculty Leave System",
        tags: &["React", "SQL"],
        description: "Digital management portal.",
    },
    Project {
        title: "Permissions Manager",
        tags: &["Security", "Admin"],
        description: "Role-based access control.",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Smart India Hackathon 2025",
        description: "Finalist - Smart Tourist Safety Monitoring System",
        icon: Icon::Trophy,
    },
    Achievement {
        title: "Hackathon Finalist",
        description: "Digital Faculty Leave Management System",
        icon: Icon::Award,
    },
];

pub const PROFILE: Profile = Profile {
    name: "VISHNU VARDHAN NAIDU MATLI",
    brand: "VISHNULABS.DEV",
    brand_icon: Icon::Terminal,
    role: "System Administrator",
    focus: &["NETWORKING", "CYBER SECURITY", "FULL STACK"],
    hero_image: "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=2070&auto=format&fit=crop",
    about: &[
        ("I am a digital architect bridging the gap between ", false),
        ("Cyber Security", true),
        (" and ", false),
        ("Software Development", true),
        (". Currently a remote intern at ", false),
        ("GS Co. Ltd", true),
        (".", false),
    ],
    experience: Experience {
        role: "Remote Intern",
        organisation: "GS Co. Ltd, South Korea",
        period: "Present",
        summary: "Spearheading Load Cell projects and Network Administration tasks. Implementing secure communication protocols.",
    },
    education: Education {
        degree: "B.Tech in AI & Data Science",
        institution: "University Name Here",
        years: "2023 - 2027",
    },
};

/// Lines printed by the boot intro, blank lines included.
pub const BOOT_LINES: &[&str] = &[
    "BIOS DATE 01/21/2026 10:15:22 VER 1.0.2",
    "CPU: QUANTUM CORE V.90 @ 4.20 GHz",
    "MEMORY TEST: 64535K OK",
    "",
    "DETECTING PRIMARY MASTER ... VISHNU_DRIVE_01",
    "LOADING VISHNU.SYS ........................ [OK]",
    "INITIALIZING GRAPHICS ADAPTER ............. [OK]",
    "",
    "WELCOME TO VISHNU OS.",
    "STARTING SESSION...",
];

pub const BOOT_CAPTION: &str = "VISHNU'S WORLD";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_targets_existing_sections() {
        let anchors: HashSet<String> = Section::ORDER
            .iter()
            .map(|s| format!("#{}", s.anchor()))
            .collect();
        for link in NAV_LINKS {
            assert!(anchors.contains(link.href), "dangling nav target {}", link.href);
        }
    }

    #[test]
    fn section_order_starts_with_hero_and_ends_with_contact() {
        assert_eq!(Section::ORDER.first(), Some(&Section::Hero));
        assert_eq!(Section::ORDER.last(), Some(&Section::Contact));
        assert_eq!(Section::ORDER[6], Section::Interpersonal);
    }

    #[test]
    fn skill_spotlight_appends_alpha() {
        assert_eq!(TECHNICAL_SKILLS[0].spotlight_color(), "#3776AB40");
    }

    #[test]
    fn about_paragraph_highlights_fields_and_employer() {
        let highlighted: Vec<&str> = PROFILE
            .about
            .iter()
            .filter(|(_, highlighted)| *highlighted)
            .map(|(text, _)| *text)
            .collect();
        assert_eq!(highlighted, ["Cyber Security", "Software Development", "GS Co. Ltd"]);
    }

    #[test]
    fn brand_uses_terminal_glyph() {
        assert_eq!(PROFILE.brand_icon.class(), "fa-solid fa-terminal");
    }

    #[test]
    fn boot_script_keeps_blank_lines() {
        assert_eq!(BOOT_LINES.len(), 10);
        assert_eq!(BOOT_LINES.iter().filter(|l| l.is_empty()).count(), 2);
    }
}
