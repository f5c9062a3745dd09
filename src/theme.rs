use crate::content::{Category, SkillArea};

/// Tailwind class tokens for a themed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub progress: &'static str,
    pub glow: &'static str,
}

const BLUE: Theme = Theme {
    bg: "from-blue-600/20 to-cyan-600/20",
    border: "border-blue-500/30",
    text: "text-blue-400",
    progress: "from-blue-500 to-cyan-500",
    glow: "hover:shadow-blue-500/25",
};

const PINK: Theme = Theme {
    bg: "from-pink-600/20 to-rose-600/20",
    border: "border-pink-500/30",
    text: "text-pink-400",
    progress: "from-pink-500 to-rose-500",
    glow: "hover:shadow-pink-500/25",
};

const GREEN: Theme = Theme {
    bg: "from-green-600/20 to-emerald-600/20",
    border: "border-green-500/30",
    text: "text-green-400",
    progress: "from-green-500 to-emerald-500",
    glow: "hover:shadow-green-500/25",
};

const PURPLE: Theme = Theme {
    bg: "from-purple-600/20 to-violet-600/20",
    border: "border-purple-500/30",
    text: "text-purple-400",
    progress: "from-purple-500 to-violet-500",
    glow: "hover:shadow-purple-500/25",
};

const AMBER: Theme = Theme {
    bg: "from-amber-600/20 to-orange-600/20",
    border: "border-amber-500/30",
    text: "text-amber-400",
    progress: "from-amber-500 to-orange-500",
    glow: "hover:shadow-amber-500/25",
};

const SLATE: Theme = Theme {
    bg: "from-slate-600/20 to-gray-600/20",
    border: "border-slate-500/30",
    text: "text-slate-400",
    progress: "from-slate-500 to-gray-500",
    glow: "hover:shadow-slate-500/25",
};

impl Category {
    pub fn theme(&self) -> Theme {
        match self {
            Category::Development => BLUE,
            Category::Design => PINK,
            Category::Data => GREEN,
            Category::Devops => PURPLE,
            Category::Business => AMBER,
            Category::Other => SLATE,
        }
    }
}

impl SkillArea {
    // skills without a known area keep the default blue look
    pub fn theme(&self) -> Theme {
        match self {
            SkillArea::Frontend | SkillArea::Other => BLUE,
            SkillArea::Backend => GREEN,
            SkillArea::Devops => PURPLE,
            SkillArea::Design => PINK,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SkillArea::Frontend | SkillArea::Other => "</>",
            SkillArea::Backend => "🗄",
            SkillArea::Devops => "☁",
            SkillArea::Design => "🎨",
        }
    }
}
