//! Core Domain Types
//!
//! Closed-set identifiers used throughout the dashboard. Internal dispatch is
//! exhaustive over these enums; parsing from untrusted page input happens at
//! the boundary, with the fallback behavior each call site documents.

/// Stakeholder category selecting a dashboard view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Mother,
    Teacher,
    Specialist,
    Institution,
    Researcher,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 5] = [
        Role::Mother,
        Role::Teacher,
        Role::Specialist,
        Role::Institution,
        Role::Researcher,
    ];

    /// Parse an external role tag. Unknown tags yield `None`; the caller
    /// decides whether that means no-op (role selection) or a default
    /// template (content lookup).
    pub fn parse(tag: &str) -> Option<Role> {
        match tag {
            "mother" => Some(Role::Mother),
            "teacher" => Some(Role::Teacher),
            "specialist" => Some(Role::Specialist),
            "institution" => Some(Role::Institution),
            "researcher" => Some(Role::Researcher),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::Mother => "mother",
            Role::Teacher => "teacher",
            Role::Specialist => "specialist",
            Role::Institution => "institution",
            Role::Researcher => "researcher",
        }
    }
}

/// Selectable display language/direction pairing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ar,
    Fr,
    En,
}

impl Locale {
    /// Resolve a `data-lang` tag. Unknown tags fold to Arabic, so the
    /// effective locale (and document direction) always reflects real content.
    pub fn from_tag(tag: &str) -> Locale {
        match tag {
            "ar" => Locale::Ar,
            "fr" => Locale::Fr,
            "en" => Locale::En,
            _ => Locale::Ar,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Text direction for the document element.
    pub fn dir(&self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::Fr | Locale::En => "ltr",
        }
    }
}

/// Notification severity, as accepted by the page-facing
/// `showNotification(message, severity)` entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parse an external severity tag, falling back to `Info`.
    pub fn from_tag(tag: &str) -> Severity {
        match tag {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_tag()), Some(role));
        }
    }

    #[test]
    fn test_role_parse_unknown_is_none() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Mother"), None);
    }

    #[test]
    fn test_locale_unknown_falls_back_to_arabic() {
        assert_eq!(Locale::from_tag("xx"), Locale::Ar);
        assert_eq!(Locale::from_tag("xx").dir(), "rtl");
    }

    #[test]
    fn test_locale_direction() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::Fr.dir(), "ltr");
        assert_eq!(Locale::En.dir(), "ltr");
    }

    #[test]
    fn test_severity_fallback() {
        assert_eq!(Severity::from_tag("success"), Severity::Success);
        assert_eq!(Severity::from_tag("fatal"), Severity::Info);
    }
}
