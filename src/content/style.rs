use serde::Deserialize;

/// Icon identifiers used by content files. Resolved to icon classes here so the
/// view layer never branches on a specific item. Brand marks come from devicon,
/// everything else from the `extra-*` glyphs in `input.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Briefcase,
    Play,
    Mail,
    Globe,
    Youtube,
    Music,
    BookOpen,
    Palette,
    GraduationCap,
    Database,
    Users,
    Trophy,
    Coffee,
    Monitor,
    Sparkles,
    FolderOpen,
    ExternalLink,
    Linkedin,
    Github,
    Instagram,
    Twitter,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Home => "extra-home",
            Icon::Briefcase => "extra-briefcase",
            Icon::Play => "extra-play",
            Icon::Mail => "extra-email",
            Icon::Globe => "extra-globe",
            Icon::Youtube => "extra-youtube",
            Icon::Music => "extra-music",
            Icon::BookOpen => "extra-book",
            Icon::Palette => "extra-palette",
            Icon::GraduationCap => "extra-graduation",
            Icon::Database => "extra-database",
            Icon::Users => "extra-users",
            Icon::Trophy => "extra-trophy",
            Icon::Coffee => "extra-coffee",
            Icon::Monitor => "extra-monitor",
            Icon::Sparkles => "extra-sparkles",
            Icon::FolderOpen => "extra-folder",
            Icon::ExternalLink => "extra-link",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Github => "devicon-github-plain",
            Icon::Instagram => "extra-instagram",
            Icon::Twitter => "extra-x",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Neutral,
    Crimson,
    Midnight,
    Ember,
    Cobalt,
    Orange,
    Blue,
    Purple,
}

/// Tailwind class sets for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    pub surface: &'static str,
    pub overlay: &'static str,
    pub kicker: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
}

const NEUTRAL: ThemeStyle = ThemeStyle {
    surface: "glass-card",
    overlay: "",
    kicker: "text-slate-500",
    badge: "bg-slate-100 text-slate-600",
    title: "text-slate-900",
    body: "text-slate-500",
    cta: "text-blue-600",
};

impl Theme {
    pub fn style(self) -> ThemeStyle {
        match self {
            Theme::Neutral => NEUTRAL,
            Theme::Crimson => ThemeStyle {
                surface: "glass-card",
                overlay: "bg-gradient-to-r from-red-900/90 via-red-800/80 to-slate-900/40",
                kicker: "text-red-200",
                badge: "bg-red-500/20 text-white backdrop-blur-sm",
                title: "text-white",
                body: "text-red-100/80",
                cta: "text-white",
            },
            Theme::Midnight => ThemeStyle {
                surface: "music-card rounded-3xl min-h-[400px]",
                overlay: "bg-gradient-to-t from-slate-900/90 via-slate-800/50 to-transparent",
                kicker: "text-pink-300",
                badge: "bg-white/10 text-white backdrop-blur-sm",
                title: "text-white",
                body: "text-slate-300 font-light",
                cta: "text-white",
            },
            Theme::Ember => ThemeStyle {
                surface: "glass-card",
                overlay: "bg-gradient-to-br from-orange-50 via-white to-orange-50/50",
                kicker: "text-orange-600",
                badge: "bg-orange-100 text-orange-600",
                title: "text-slate-900",
                body: "text-slate-500",
                cta: "text-orange-600",
            },
            Theme::Cobalt => ThemeStyle {
                surface: "glass-card bg-blue-600",
                overlay: "bg-gradient-to-br from-blue-600 to-blue-800",
                kicker: "text-blue-200",
                badge: "bg-white/20 text-white backdrop-blur-sm",
                title: "text-white",
                body: "text-blue-100/80",
                cta: "text-white",
            },
            Theme::Orange => ThemeStyle {
                badge: "bg-orange-100 text-orange-600",
                ..NEUTRAL
            },
            Theme::Blue => ThemeStyle {
                badge: "bg-blue-100 text-blue-600",
                ..NEUTRAL
            },
            Theme::Purple => ThemeStyle {
                badge: "bg-purple-100 text-purple-600",
                ..NEUTRAL
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ICONS: [Icon; 22] = [
        Icon::Home,
        Icon::Briefcase,
        Icon::Play,
        Icon::Mail,
        Icon::Globe,
        Icon::Youtube,
        Icon::Music,
        Icon::BookOpen,
        Icon::Palette,
        Icon::GraduationCap,
        Icon::Database,
        Icon::Users,
        Icon::Trophy,
        Icon::Coffee,
        Icon::Monitor,
        Icon::Sparkles,
        Icon::FolderOpen,
        Icon::ExternalLink,
        Icon::Linkedin,
        Icon::Github,
        Icon::Instagram,
        Icon::Twitter,
    ];

    #[test]
    fn test_brand_icons_use_devicon() {
        assert_eq!(Icon::Github.class(), "devicon-github-plain");
        assert_eq!(Icon::Linkedin.class(), "devicon-linkedin-plain");
        assert!(Icon::Mail.class().starts_with("extra-"));
    }

    #[test]
    fn test_every_icon_class_is_defined() {
        let css = include_str!("../../input.css");
        for icon in ALL_ICONS {
            let class = icon.class();
            if class.starts_with("devicon-") {
                assert!(
                    ["devicon-github-plain", "devicon-linkedin-plain"].contains(&class),
                    "{icon:?} uses unchecked devicon class {class}"
                );
                continue;
            }
            assert!(
                css.contains(&format!(".{class} {{")),
                "{icon:?} maps to {class}, which input.css does not define"
            );
        }
    }

    #[test]
    fn test_fixed_glyphs_are_defined() {
        let css = include_str!("../../input.css");
        for class in ["extra-email", "extra-location"] {
            assert!(css.contains(&format!(".{class} {{")), "{class} missing");
        }
    }

    #[test]
    fn test_image_themes_tint_kicker() {
        let neutral = Theme::Neutral.style().kicker;
        for theme in [Theme::Crimson, Theme::Midnight, Theme::Ember, Theme::Cobalt] {
            assert_ne!(theme.style().kicker, neutral, "{theme:?}");
        }
        assert_eq!(Theme::Blue.style().kicker, neutral);
    }

    #[test]
    fn test_tier_themes_only_change_badge() {
        let blue = Theme::Blue.style();
        assert_eq!(blue.surface, Theme::Neutral.style().surface);
        assert_ne!(blue.badge, Theme::Neutral.style().badge);
    }
}
