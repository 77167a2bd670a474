//! Locale Content Registry
//!
//! Fixed display-string tables per language. Read-only; lookup is exhaustive
//! over [`Locale`], and unknown tags already fold to Arabic at the boundary.

use crate::model::Locale;

/// Display strings for one language.
pub struct LocaleContent {
    pub dashboard_title: &'static str,
    pub dashboard_subtitle: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
}

const AR: LocaleContent = LocaleContent {
    dashboard_title: "لوحة التحكم",
    dashboard_subtitle: "مرحباً بك في منصة DYS-CONNECT",
    hero_title: "DYS-CONNECT",
    hero_subtitle: "منصة متكاملة لربط الأمهات، الأطفال، المعلمين، والمختصين",
};

const FR: LocaleContent = LocaleContent {
    dashboard_title: "Tableau de Bord",
    dashboard_subtitle: "Bienvenue sur DYS-CONNECT",
    hero_title: "DYS-CONNECT",
    hero_subtitle: "Plateforme intégrée pour connecter mères, enfants, enseignants et spécialistes",
};

const EN: LocaleContent = LocaleContent {
    dashboard_title: "Dashboard",
    dashboard_subtitle: "Welcome to DYS-CONNECT",
    hero_title: "DYS-CONNECT",
    hero_subtitle: "Integrated platform connecting mothers, children, teachers, and specialists",
};

/// Get the display strings for a locale.
pub fn content(locale: Locale) -> &'static LocaleContent {
    match locale {
        Locale::Ar => &AR,
        Locale::Fr => &FR,
        Locale::En => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_content() {
        let c = content(Locale::Fr);
        assert_eq!(c.dashboard_title, "Tableau de Bord");
    }

    #[test]
    fn test_unknown_tag_resolves_to_arabic_content() {
        let c = content(Locale::from_tag("xx"));
        assert_eq!(c.dashboard_title, AR.dashboard_title);
        assert_eq!(c.dashboard_subtitle, AR.dashboard_subtitle);
    }

    #[test]
    fn test_stable_across_calls() {
        let a = content(Locale::En);
        let b = content(Locale::En);
        assert_eq!(a.hero_subtitle, b.hero_subtitle);
    }
}
