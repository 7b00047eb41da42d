//! Static content catalogs: icon sets for the animated background, the
//! project gallery, and the skills grid. Consumers receive these as
//! read-only lookup tables; nothing here is mutated at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSet {
    pub slug: &'static str,
    pub files: &'static [&'static str],
}

pub const ICON_SETS: &[IconSet] = &[
    IconSet {
        slug: "tech",
        files: &[
            "rust.svg",
            "webassembly.svg",
            "typescript.svg",
            "react.svg",
            "nodejs.svg",
            "postgresql.svg",
            "docker.svg",
            "git.svg",
            "tailwind.svg",
            "python.svg",
            "linux.svg",
            "figma.svg",
        ],
    },
    IconSet {
        slug: "space",
        files: &["star.svg", "comet.svg", "planet.svg", "satellite.svg"],
    },
];

pub const DEFAULT_ICON_SET: &str = "tech";

pub fn icon_set_by_slug(slug: &str) -> Option<&'static IconSet> {
    let trimmed = slug.trim();
    ICON_SETS
        .iter()
        .find(|set| set.slug.eq_ignore_ascii_case(trimmed))
}

/// Static asset convention: `/icons/{set}/{file}`.
pub fn icon_url(set: &IconSet, file: &str) -> String {
    format!("/icons/{}/{}", set.slug, file)
}

pub fn icon_urls(set: &IconSet) -> Vec<String> {
    set.files.iter().map(|file| icon_url(set, file)).collect()
}

/// Gallery entry; title and description resolve through the translation
/// tables under `projects.{slug}.*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub slug: &'static str,
    pub image: &'static str,
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub tech: &'static [&'static str],
}

pub const PROJECT_CATALOG: &[ProjectEntry] = &[
    ProjectEntry {
        slug: "stargazer",
        image: "/projects/stargazer.webp",
        github_url: "https://github.com/sugoijan/stargazer",
        live_url: "https://stargazer.example.dev",
        tech: &["Rust", "Yew", "WebAssembly", "Canvas"],
    },
    ProjectEntry {
        slug: "kaidan",
        image: "/projects/kaidan.webp",
        github_url: "https://github.com/sugoijan/kaidan",
        live_url: "https://kaidan.example.dev",
        tech: &["TypeScript", "React", "Node.js"],
    },
    ProjectEntry {
        slug: "tsukimi",
        image: "/projects/tsukimi.webp",
        github_url: "https://github.com/sugoijan/tsukimi",
        live_url: "https://tsukimi.example.dev",
        tech: &["Rust", "Axum", "PostgreSQL"],
    },
    ProjectEntry {
        slug: "hanabi",
        image: "/projects/hanabi.webp",
        github_url: "https://github.com/sugoijan/hanabi",
        live_url: "https://hanabi.example.dev",
        tech: &["Python", "FastAPI", "Docker"],
    },
];

pub fn project_by_slug(slug: &str) -> Option<&'static ProjectEntry> {
    PROJECT_CATALOG.iter().find(|entry| entry.slug == slug)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SKILL_CATALOG: &[SkillEntry] = &[
    SkillEntry { name: "Rust", icon: "rust.svg" },
    SkillEntry { name: "WebAssembly", icon: "webassembly.svg" },
    SkillEntry { name: "TypeScript", icon: "typescript.svg" },
    SkillEntry { name: "React", icon: "react.svg" },
    SkillEntry { name: "Node.js", icon: "nodejs.svg" },
    SkillEntry { name: "PostgreSQL", icon: "postgresql.svg" },
    SkillEntry { name: "Docker", icon: "docker.svg" },
    SkillEntry { name: "Git", icon: "git.svg" },
    SkillEntry { name: "Tailwind", icon: "tailwind.svg" },
    SkillEntry { name: "Python", icon: "python.svg" },
    SkillEntry { name: "Linux", icon: "linux.svg" },
    SkillEntry { name: "Figma", icon: "figma.svg" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lookup() {
        assert!(icon_set_by_slug("tech").is_some());
        assert!(icon_set_by_slug(" TECH ").is_some());
        assert!(icon_set_by_slug("nope").is_none());
        assert!(project_by_slug("stargazer").is_some());
    }

    #[test]
    fn icon_urls_follow_convention() {
        let set = icon_set_by_slug("space").unwrap();
        let urls = icon_urls(set);
        assert_eq!(urls[0], "/icons/space/star.svg");
        assert_eq!(urls.len(), set.files.len());
    }
}
