//! Content Template Registry
//!
//! Pure mapping from [`Role`] to a structured dashboard description. No
//! markup lives here: panels are data, and `components::dashboard` turns them
//! into DOM. Every lookup is deterministic, so tests can assert exact panel
//! counts and labels per role.

use crate::model::Role;

/// One self-contained content block within a dashboard.
pub struct Panel {
    pub title: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub body: PanelBody,
}

/// What a panel displays.
pub enum PanelBody {
    /// Container for a chart owned by the Visualization Adapter.
    Chart { container: &'static str },
    /// Clickable tool shortcuts.
    Actions(Vec<ActionItem>),
    /// Upcoming or same-day sessions.
    Schedule(Vec<ScheduleItem>),
    /// Student cases awaiting an action.
    Cases(Vec<CaseItem>),
    /// Research requests with an approval badge.
    Requests(Vec<RequestItem>),
    /// Headline figures plus a call-to-action button.
    Stats {
        figures: Vec<Figure>,
        cta: &'static str,
    },
}

pub struct ActionItem {
    pub label: &'static str,
    pub detail: &'static str,
    pub href: Option<&'static str>,
}

pub struct ScheduleItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub note: Option<&'static str>,
    pub accent: Accent,
}

pub struct CaseItem {
    pub name: &'static str,
    pub issue: &'static str,
    pub note: Option<&'static str>,
    pub action: &'static str,
    pub href: Option<&'static str>,
}

pub struct RequestItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub badge: &'static str,
    pub badge_accent: Accent,
}

pub struct Figure {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// A complete dashboard description for one role.
pub struct DashboardContent {
    pub role: Role,
    pub title: &'static str,
    pub panels: Vec<Panel>,
}

/// Brand accent colors used by panels, badges, and schedule markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Cyan,
    Orange,
    Green,
}

impl Accent {
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Blue => "text-dys-blue",
            Accent::Cyan => "text-dys-cyan",
            Accent::Orange => "text-dys-orange",
            Accent::Green => "text-dys-green",
        }
    }

    pub fn bg_class(&self) -> &'static str {
        match self {
            Accent::Blue => "bg-dys-blue",
            Accent::Cyan => "bg-dys-cyan",
            Accent::Orange => "bg-dys-orange",
            Accent::Green => "bg-dys-green",
        }
    }

    pub fn bg_soft_class(&self) -> &'static str {
        match self {
            Accent::Blue => "bg-dys-blue/10",
            Accent::Cyan => "bg-dys-cyan/10",
            Accent::Orange => "bg-dys-orange/10",
            Accent::Green => "bg-dys-green/10",
        }
    }

    pub fn border_class(&self) -> &'static str {
        match self {
            Accent::Blue => "border-dys-blue",
            Accent::Cyan => "border-dys-cyan",
            Accent::Orange => "border-dys-orange",
            Accent::Green => "border-dys-green",
        }
    }
}

/// Panel header icons, rendered as single-path heroicon outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    BarChart,
    Bolt,
    Calendar,
    Warning,
    Users,
    UserAdd,
    Clipboard,
    DocumentText,
    DocumentChart,
    Database,
    Team,
}

impl Icon {
    /// SVG path data (`d` attribute) for a 24x24 outline icon.
    pub fn path(&self) -> &'static str {
        match self {
            Icon::BarChart => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
            Icon::Bolt => "M13 10V3L4 14h7v7l9-11h-7z",
            Icon::Calendar => "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
            Icon::Warning => "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-2.5L13.732 4c-.77-.833-1.964-.833-2.732 0L3.732 16.5c-.77.833.192 2.5 1.732 2.5z",
            Icon::Users => "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197m13.5-9a2.5 2.5 0 11-5 0 2.5 2.5 0 015 0z",
            Icon::UserAdd => "M18 9v3m0 0v3m0-3h3m-3 0h-3m-2-5a4 4 0 11-8 0 4 4 0 018 0zM3 20a6 6 0 0112 0v1H3v-1z",
            Icon::Clipboard => "M9 5H7a2 2 0 00-2 2v10a2 2 0 002 2h8a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-3 7h3m-3 4h3m-6-4h.01M9 16h.01",
            Icon::DocumentText => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            Icon::DocumentChart => "M9 17v-2m3 2v-4m3 4v-6m2 10H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            Icon::Database => "M4 7v10c0 2.21 3.582 4 8 4s8-1.79 8-4V7M4 7c0 2.21 3.582 4 8 4s8-1.79 8-4M4 7c0-2.21 3.582-4 8-4s8 1.79 8 4",
            Icon::Team => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
        }
    }
}

/// Arabic dashboard title per role.
pub fn dashboard_title(role: Role) -> &'static str {
    match role {
        Role::Mother => "لوحة تحكم الأم",
        Role::Teacher => "لوحة تحكم المعلم",
        Role::Specialist => "لوحة تحكم المختص",
        Role::Institution => "لوحة تحكم المؤسسة",
        Role::Researcher => "لوحة تحكم الباحث",
    }
}

/// Build the dashboard description for a role.
pub fn content_for(role: Role) -> DashboardContent {
    let panels = match role {
        Role::Mother => mother_panels(),
        Role::Teacher => teacher_panels(),
        Role::Specialist => specialist_panels(),
        Role::Institution => institution_panels(),
        Role::Researcher => researcher_panels(),
    };

    DashboardContent {
        role,
        title: dashboard_title(role),
        panels,
    }
}

/// External-input form of [`content_for`]: unrecognized tags fall back to the
/// mother template.
pub fn content_for_tag(tag: &str) -> DashboardContent {
    content_for(Role::parse(tag).unwrap_or(Role::Mother))
}

fn mother_panels() -> Vec<Panel> {
    vec![
        Panel {
            title: "تقدم أطفالي",
            icon: Icon::BarChart,
            accent: Accent::Cyan,
            body: PanelBody::Chart {
                container: "children-progress-chart",
            },
        },
        Panel {
            title: "الأدوات الذكية",
            icon: Icon::Bolt,
            accent: Accent::Orange,
            body: PanelBody::Actions(vec![
                ActionItem {
                    label: "ملخص الدروس",
                    detail: "حوّل المواد المعقدة إلى ملاحظات مبسطة",
                    href: Some("smart-tools.html"),
                },
                ActionItem {
                    label: "خريطة ذهنية",
                    detail: "أنشئ خرائط ذهنية تفاعلية",
                    href: Some("smart-tools.html"),
                },
            ]),
        },
        Panel {
            title: "الجلسات القادمة",
            icon: Icon::Calendar,
            accent: Accent::Green,
            body: PanelBody::Schedule(vec![
                ScheduleItem {
                    title: "جلسة تقييم",
                    detail: "الدكتورة فاطمة - غداً الساعة 10:00",
                    note: None,
                    accent: Accent::Cyan,
                },
                ScheduleItem {
                    title: "متابعة تقدم",
                    detail: "المعلمة سارة - بعد غداً الساعة 14:00",
                    note: None,
                    accent: Accent::Orange,
                },
            ]),
        },
    ]
}

fn teacher_panels() -> Vec<Panel> {
    vec![
        Panel {
            title: "الحالات المعلقة",
            icon: Icon::Warning,
            accent: Accent::Orange,
            body: PanelBody::Cases(vec![
                CaseItem {
                    name: "أحمد محمد",
                    issue: "صعوبة في القراءة",
                    note: None,
                    action: "تقييم",
                    href: Some("questionnaire.html"),
                },
                CaseItem {
                    name: "سارة أحمد",
                    issue: "مشكلة تركيز",
                    note: None,
                    action: "تقييم",
                    href: Some("questionnaire.html"),
                },
            ]),
        },
        Panel {
            title: "الطلاب النشطين",
            icon: Icon::Users,
            accent: Accent::Cyan,
            body: PanelBody::Chart {
                container: "students-progress-chart",
            },
        },
        Panel {
            title: "أدوات التقييم",
            icon: Icon::Clipboard,
            accent: Accent::Green,
            body: PanelBody::Actions(vec![
                ActionItem {
                    label: "استبيان الكشف المبكر",
                    detail: "قيم الطلاب في 6 مجالات أساسية",
                    href: Some("questionnaire.html"),
                },
                ActionItem {
                    label: "تقارير التقدم",
                    detail: "راجع تقارير تقدم الطلاب",
                    href: None,
                },
            ]),
        },
    ]
}

fn specialist_panels() -> Vec<Panel> {
    vec![
        Panel {
            title: "الإحالات الجديدة",
            icon: Icon::UserAdd,
            accent: Accent::Cyan,
            body: PanelBody::Cases(vec![
                CaseItem {
                    name: "أحمد محمد",
                    issue: "إحالة من المعلمة سارة",
                    note: Some("صعوبة قراءة متوسطة"),
                    action: "مراجعة",
                    href: None,
                },
                CaseItem {
                    name: "سارة أحمد",
                    issue: "إحالة من المعلم خالد",
                    note: Some("مشكلة تركيز عالية"),
                    action: "مراجعة",
                    href: None,
                },
            ]),
        },
        Panel {
            title: "جلسات اليوم",
            icon: Icon::Calendar,
            accent: Accent::Orange,
            body: PanelBody::Schedule(vec![
                ScheduleItem {
                    title: "جلسة تقييم أولي",
                    detail: "أحمد محمد - الساعة 10:00",
                    note: Some("مقر العيادة"),
                    accent: Accent::Orange,
                },
                ScheduleItem {
                    title: "جلسة متابعة",
                    detail: "فاطمة علي - الساعة 14:00",
                    note: Some("عن بعد"),
                    accent: Accent::Green,
                },
            ]),
        },
        Panel {
            title: "التقارير المهنية",
            icon: Icon::DocumentText,
            accent: Accent::Green,
            body: PanelBody::Actions(vec![
                ActionItem {
                    label: "تقرير شهري",
                    detail: "تقرير تقدم الحالات لشهر نوفمبر",
                    href: None,
                },
                ActionItem {
                    label: "خطة علاجية",
                    detail: "تحديث خطة العلاج لأحمد محمد",
                    href: None,
                },
            ]),
        },
    ]
}

fn institution_panels() -> Vec<Panel> {
    vec![
        Panel {
            title: "فريق العمل",
            icon: Icon::Team,
            accent: Accent::Blue,
            body: PanelBody::Stats {
                figures: vec![
                    Figure {
                        value: "12",
                        label: "معلم",
                        accent: Accent::Cyan,
                    },
                    Figure {
                        value: "5",
                        label: "مختص",
                        accent: Accent::Orange,
                    },
                ],
                cta: "إدارة الفريق",
            },
        },
        Panel {
            title: "الإحصائيات الشهرية",
            icon: Icon::BarChart,
            accent: Accent::Cyan,
            body: PanelBody::Chart {
                container: "institution-stats-chart",
            },
        },
        Panel {
            title: "التقارير والتحليلات",
            icon: Icon::DocumentChart,
            accent: Accent::Green,
            body: PanelBody::Actions(vec![
                ActionItem {
                    label: "تقرير الأداء",
                    detail: "تحليل شامل لأداء المنصة",
                    href: None,
                },
                ActionItem {
                    label: "تقرير الحالات",
                    detail: "إحصائيات الحالات المعالجة",
                    href: None,
                },
            ]),
        },
    ]
}

fn researcher_panels() -> Vec<Panel> {
    vec![
        Panel {
            title: "طلبات البحث",
            icon: Icon::Clipboard,
            accent: Accent::Cyan,
            body: PanelBody::Requests(vec![
                RequestItem {
                    title: "دراسة فعالية التدخل",
                    detail: "بانتظار موافقة الأخلاقيات",
                    badge: "قيد المراجعة",
                    badge_accent: Accent::Orange,
                },
                RequestItem {
                    title: "تحليل أنماط التعلم",
                    detail: "تمت الموافقة",
                    badge: "مقبول",
                    badge_accent: Accent::Green,
                },
            ]),
        },
        Panel {
            title: "قاعدة البيانات",
            icon: Icon::Database,
            accent: Accent::Orange,
            body: PanelBody::Stats {
                figures: vec![
                    Figure {
                        value: "1,247",
                        label: "حالة مسجلة",
                        accent: Accent::Cyan,
                    },
                    Figure {
                        value: "89",
                        label: "متغير قابل للتحليل",
                        accent: Accent::Orange,
                    },
                ],
                cta: "الوصول إلى البيانات",
            },
        },
        Panel {
            title: "التعاون البحثي",
            icon: Icon::Team,
            accent: Accent::Green,
            body: PanelBody::Actions(vec![
                ActionItem {
                    label: "فرق البحث",
                    detail: "تعاون مع باحثين آخرين",
                    href: None,
                },
                ActionItem {
                    label: "نشر النتائج",
                    detail: "شارك نتائج أبحاثك",
                    href: None,
                },
            ]),
        },
    ]
}

/// Per-role headline figures, used only for display.
pub struct RoleSummary {
    pub figures: &'static [(&'static str, u32)],
}

/// Mock summary statistics for a role.
pub fn summary_for(role: Role) -> RoleSummary {
    let figures: &'static [(&'static str, u32)] = match role {
        Role::Mother => &[
            ("أطفال مسجلون", 2),
            ("متوسط التقدم", 78),
            ("جلسات قادمة", 2),
        ],
        Role::Teacher => &[
            ("حالات معلقة", 5),
            ("طلاب نشطون", 25),
            ("تقييمات مكتملة", 18),
        ],
        Role::Specialist => &[
            ("إحالات جديدة", 3),
            ("جلسات اليوم", 4),
            ("تقارير معلقة", 2),
        ],
        Role::Institution => &[
            ("أعضاء الفريق", 17),
            ("حالات نشطة", 45),
            ("نمو شهري", 12),
        ],
        Role::Researcher => &[
            ("طلبات معلقة", 2),
            ("دراسات معتمدة", 3),
            ("حالات متاحة", 1247),
        ],
    };

    RoleSummary { figures }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_panels_and_stable_title() {
        for role in Role::ALL {
            let first = content_for(role);
            let second = content_for(role);
            assert!(!first.panels.is_empty(), "{:?} has no panels", role);
            assert_eq!(first.title, second.title);
            assert_eq!(first.panels.len(), second.panels.len());
        }
    }

    #[test]
    fn test_unrecognized_tag_falls_back_to_mother() {
        let fallback = content_for_tag("astronaut");
        assert_eq!(fallback.role, Role::Mother);
        assert_eq!(fallback.title, dashboard_title(Role::Mother));

        // Idempotent: same result every call
        let again = content_for_tag("astronaut");
        assert_eq!(again.role, Role::Mother);
        assert_eq!(again.panels.len(), fallback.panels.len());
    }

    #[test]
    fn test_teacher_panel_labels() {
        let content = content_for(Role::Teacher);
        assert_eq!(content.panels.len(), 3);
        assert_eq!(content.panels[0].title, "الحالات المعلقة");
        assert_eq!(content.panels[1].title, "الطلاب النشطين");
        assert_eq!(content.panels[2].title, "أدوات التقييم");
        assert_eq!(content.title, "لوحة تحكم المعلم");
    }

    #[test]
    fn test_chart_panels_match_adapter_containers() {
        // Only mother, teacher, and institution dashboards embed a chart panel
        for role in Role::ALL {
            let has_chart = content_for(role)
                .panels
                .iter()
                .any(|p| matches!(p.body, PanelBody::Chart { .. }));
            let expects_chart = matches!(
                role,
                Role::Mother | Role::Teacher | Role::Institution
            );
            assert_eq!(has_chart, expects_chart, "{:?}", role);
        }
    }

    #[test]
    fn test_chart_container_naming_convention() {
        for role in Role::ALL {
            for panel in content_for(role).panels {
                if let PanelBody::Chart { container } = panel.body {
                    assert!(container.ends_with("-chart"), "{}", container);
                }
            }
        }
    }

    #[test]
    fn test_summary_figures_present_for_all_roles() {
        for role in Role::ALL {
            assert_eq!(summary_for(role).figures.len(), 3);
        }
    }
}
