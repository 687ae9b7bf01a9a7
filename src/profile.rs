//! Hard-coded portfolio content shared by the pages.

pub const NAME: &str = "Mayank Mehra";
pub const TITLE: &str = "UI/UX & Frontend Developer";
pub const EMAIL: &str = "mayankmehra6497678@gmail.com";
pub const PHONE: &str = "9654238353";
pub const LOCATION: &str = "Noida, IN";

pub const GITHUB_URL: &str = "https://github.com/mayank1980";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mayank-mehra-13a678230";

pub const PORTRAIT_SRC: &str = "/man-portrait.png";
pub const ASIDE_SRC: &str = "/aside-image.png";
pub const AVATAR_SRC: &str = "/circle-image.png";
pub const RESUME_SRC: &str = "/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Mayank_Mehra_Resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
}

impl SocialKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::GitHub => "devicon-github-plain",
            Self::LinkedIn => "devicon-linkedin-plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: GITHUB_URL,
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: LINKEDIN_URL,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CORE_SERVICES: [Service; 3] = [
    Service {
        title: "UI/UX Design",
        description: "Crafting intuitive and user-centered interfaces that are both beautiful and functional.",
    },
    Service {
        title: "Frontend Development",
        description: "Bringing designs to life with clean, efficient, and responsive code using modern frameworks.",
    },
    Service {
        title: "Prototyping & Testing",
        description: "Creating interactive prototypes to validate design concepts and gather user feedback early.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillArea {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SKILL_AREAS: [SkillArea; 4] = [
    SkillArea {
        icon: "extra-code",
        title: "Front-End Development",
        summary: "React.js, Redux, JavaScript, TypeScript...",
    },
    SkillArea {
        icon: "extra-mobile",
        title: "Cross-Platform & Mobile",
        summary: "React Native, Flutter, Dart",
    },
    SkillArea {
        icon: "extra-server",
        title: "Backend & APIs",
        summary: "Node.js, Django, RESTful APIs...",
    },
    SkillArea {
        icon: "extra-database",
        title: "Databases",
        summary: "MongoDB, MySQL, PostgreSQL",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proficiency {
    pub icon: &'static str,
    pub name: &'static str,
    pub percent: u8,
}

pub const PROFICIENCIES: [Proficiency; 5] = [
    Proficiency {
        icon: "devicon-react-original",
        name: "React.js",
        percent: 90,
    },
    Proficiency {
        icon: "devicon-flutter-plain",
        name: "Flutter",
        percent: 85,
    },
    Proficiency {
        icon: "devicon-nodejs-plain",
        name: "Node.js",
        percent: 70,
    },
    Proficiency {
        icon: "extra-database",
        name: "Databases (SQL/NoSQL)",
        percent: 75,
    },
    Proficiency {
        icon: "devicon-django-plain",
        name: "Django",
        percent: 80,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub icon: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub url: Option<&'static str>,
}

pub const UNISYS: Project = Project {
    icon: "extra-university",
    name: "Unisys",
    tagline: "University Management System",
    description: "A comprehensive, role-based SaaS platform for universities, providing dedicated dashboards for students, professors, and administrators to streamline academic management.",
    highlights: &[
        "Integrated an AI-powered engine for automated exam and question bank generation.",
        "Implemented secure, multi-institution authentication and deployed on Google Cloud for scalability.",
    ],
    tech: &["React.js", "Tailwind CSS", "Django REST API", "Google Cloud"],
    url: Some("https://betaobafrontend.unisys.online"),
};

pub const TAALIF: Project = Project {
    icon: "extra-book",
    name: "Taalif",
    tagline: "Book Author Management",
    description: "A multi-role publishing system with a SaaS multi-tenant architecture, featuring Stripe payments, real-time chat/notifications, and multi-language support.",
    highlights: &[],
    tech: &["React.js", "Django", "Stripe", "Google Cloud"],
    url: Some("https://taalif.cloud"),
};

pub const PLAY_PULSE: Project = Project {
    icon: "extra-running",
    name: "Play Pulse",
    tagline: "Player Scouting App",
    description: "A cross-platform scouting app built with Flutter and Django, enabling real-time player evaluations. It uses WebSockets and Firebase for instant updates and is deployed on AWS with a full CI/CD pipeline.",
    highlights: &[],
    tech: &["Flutter", "Django", "WebSockets", "Firebase", "AWS", "CI/CD"],
    url: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links_are_fixed_profiles() {
        let hrefs = SOCIAL_LINKS.iter().map(|l| l.href).collect::<Vec<_>>();
        assert_eq!(hrefs, vec![GITHUB_URL, LINKEDIN_URL]);
        assert!(SOCIAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
    }

    #[test]
    fn test_proficiencies_are_percentages() {
        assert!(PROFICIENCIES.iter().all(|p| p.percent <= 100));
    }
}
