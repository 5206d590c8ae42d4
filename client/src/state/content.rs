//! Static display records for the portfolio sections.
//!
//! DESIGN
//! ======
//! Everything here is placeholder copy rendered verbatim. Badge and icon colors
//! are expressed as tones and mapped to BEM modifier classes so the stylesheet
//! owns the palette.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar_src: &'static str,
    pub about: &'static str,
    pub copyright: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CareerEntry {
    pub id: u32,
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// Badge color for a technology tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Blue,
    Green,
    Purple,
    Yellow,
    Red,
    Indigo,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "tech-badge--blue",
            Self::Green => "tech-badge--green",
            Self::Purple => "tech-badge--purple",
            Self::Yellow => "tech-badge--yellow",
            Self::Red => "tech-badge--red",
            Self::Indigo => "tech-badge--indigo",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub tone: BadgeTone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [Technology],
    pub repository_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub platform: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// Background of the round icon next to an external link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconTone {
    Slate,
    Blue,
    DeepBlue,
    Green,
}

impl IconTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Slate => "link-icon--slate",
            Self::Blue => "link-icon--blue",
            Self::DeepBlue => "link-icon--deep-blue",
            Self::Green => "link-icon--green",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkEntry {
    pub id: u32,
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub tone: IconTone,
}

pub const PROFILE: Profile = Profile {
    name: "Ebatan",
    role: "フルスタックエンジニア",
    avatar_src: "/portfolio/icon.png",
    about: "Webベースのフルスタックエンジニアとして、フロントエンドからバックエンドまで幅広い技術に携わっています。",
    copyright: "© 2024 Koya Ebata. All rights reserved.",
};

pub const CAREER: &[CareerEntry] = &[
    CareerEntry {
        id: 1,
        company: "会社名",
        position: "職位",
        period: "YYYY年MM月 - 現在",
        description: "職務内容や担当プロジェクトの説明",
    },
    CareerEntry {
        id: 2,
        company: "前職",
        position: "職位",
        period: "YYYY年MM月 - YYYY年MM月",
        description: "職務内容や担当プロジェクトの説明",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "プロジェクト名",
        description: "プロジェクトの説明文",
        technologies: &[
            Technology { name: "React", tone: BadgeTone::Blue },
            Technology { name: "Node.js", tone: BadgeTone::Green },
            Technology { name: "TypeScript", tone: BadgeTone::Purple },
        ],
        repository_url: "#",
    },
    Project {
        id: 2,
        title: "プロジェクト名2",
        description: "プロジェクトの説明文",
        technologies: &[
            Technology { name: "Vue.js", tone: BadgeTone::Yellow },
            Technology { name: "Python", tone: BadgeTone::Red },
            Technology { name: "PostgreSQL", tone: BadgeTone::Indigo },
        ],
        repository_url: "#",
    },
];

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "記事タイトル",
        date: "YYYY年MM月DD日",
        platform: "プラットフォーム名",
        description: "記事の概要や説明",
        url: "#",
    },
    Article {
        id: 2,
        title: "記事タイトル2",
        date: "YYYY年MM月DD日",
        platform: "プラットフォーム名",
        description: "記事の概要や説明",
        url: "#",
    },
];

pub const LINKS: &[LinkEntry] = &[
    LinkEntry { id: 1, name: "GitHub", url: "#", icon: "Git", tone: IconTone::Slate },
    LinkEntry { id: 2, name: "Twitter / X", url: "#", icon: "X", tone: IconTone::Blue },
    LinkEntry { id: 3, name: "LinkedIn", url: "#", icon: "Li", tone: IconTone::DeepBlue },
    LinkEntry { id: 4, name: "Qiita", url: "#", icon: "Q", tone: IconTone::Green },
];
