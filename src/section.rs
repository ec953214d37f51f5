//! Section identifiers and the fixed navigation menu.

/// One of the fixed content views of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Research,
    Experience,
    Volunteering,
    Achievements,
    Blog,
    Contact,
}

/// A row of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub section: Section,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Menu order used by the tab bar, the compact overlay and the number keys.
pub const SECTION_MENU: [MenuEntry; 8] = [
    MenuEntry {
        section: Section::Home,
        label: "Home",
        icon: "⌂",
    },
    MenuEntry {
        section: Section::Projects,
        label: "Projects",
        icon: "</>",
    },
    MenuEntry {
        section: Section::Research,
        label: "Research & Patents",
        icon: "📖",
    },
    MenuEntry {
        section: Section::Experience,
        label: "Experience",
        icon: "🔧",
    },
    MenuEntry {
        section: Section::Volunteering,
        label: "Volunteering",
        icon: "♥",
    },
    MenuEntry {
        section: Section::Achievements,
        label: "Achievements",
        icon: "🏆",
    },
    MenuEntry {
        section: Section::Blog,
        label: "Blog",
        icon: "✎",
    },
    MenuEntry {
        section: Section::Contact,
        label: "Contact",
        icon: "✉",
    },
];

impl Section {
    /// Resolves a section identifier. Unknown identifiers fall back to `Home`.
    pub fn from_id(id: &str) -> Self {
        match id {
            "home" => Section::Home,
            "projects" => Section::Projects,
            "research" => Section::Research,
            "experience" => Section::Experience,
            "volunteering" => Section::Volunteering,
            "achievements" => Section::Achievements,
            "blog" => Section::Blog,
            "contact" => Section::Contact,
            _ => Section::Home,
        }
    }

    /// Resolves a menu row. Out-of-range rows fall back to `Home`.
    pub fn from_index(idx: usize) -> Self {
        SECTION_MENU
            .get(idx)
            .map(|entry| entry.section)
            .unwrap_or_default()
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Research => "research",
            Section::Experience => "experience",
            Section::Volunteering => "volunteering",
            Section::Achievements => "achievements",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    pub fn menu_index(self) -> usize {
        SECTION_MENU
            .iter()
            .position(|entry| entry.section == self)
            .unwrap_or(0)
    }

    pub fn entry(self) -> &'static MenuEntry {
        &SECTION_MENU[self.menu_index()]
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn next(self) -> Self {
        Self::from_index((self.menu_index() + 1) % SECTION_MENU.len())
    }

    pub fn prev(self) -> Self {
        let len = SECTION_MENU.len();
        Self::from_index((self.menu_index() + len - 1) % len)
    }
}
