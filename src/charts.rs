//! Visualization Adapter
//!
//! Builds the role-specific chart specifications and hands them to the
//! ECharts collaborator. Spec construction is pure and fully testable; only
//! [`render_for`] and [`resize_mounted`] touch the DOM, and both degrade to a
//! silent no-op when their containers are missing.

use serde_json::{json, Value};

use crate::bindings::echarts;
use crate::model::Role;

/// Brand palette used across all charts.
pub const CYAN: &str = "#00AEEF";
pub const GREEN: &str = "#8BC643";
pub const ORANGE: &str = "#F39200";
pub const RED: &str = "#EF4444";

/// Six skill categories assessed per child.
pub const SKILL_CATEGORIES: [&str; 6] = [
    "قراءة",
    "كتابة",
    "رياضيات",
    "تركيز",
    "ذاكرة",
    "سلوك",
];

/// First half of the year, for the institution case-count bars.
pub const MONTHS: [&str; 6] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
}

/// One named series over the categorical axis (line and bar charts).
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// One slice of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub name: &'static str,
    pub color: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Series(Vec<Series>),
    Slices {
        name: &'static str,
        slices: Vec<Slice>,
    },
}

/// Structured description of one chart, independent of the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub categories: Vec<&'static str>,
    pub data: ChartData,
    pub show_legend: bool,
    pub y_max: Option<f64>,
}

/// A chart bound to its dashboard container element.
pub struct RoleChart {
    pub container: &'static str,
    pub spec: ChartSpec,
}

/// Chart set for a role. Specialist and researcher dashboards show only
/// static panels, so their set is empty.
pub fn charts_for(role: Role) -> Vec<RoleChart> {
    match role {
        Role::Mother => vec![RoleChart {
            container: "children-progress-chart",
            spec: children_progress_spec(),
        }],
        Role::Teacher => vec![RoleChart {
            container: "students-progress-chart",
            spec: students_distribution_spec(),
        }],
        Role::Institution => vec![RoleChart {
            container: "institution-stats-chart",
            spec: institution_cases_spec(),
        }],
        Role::Specialist | Role::Researcher => Vec::new(),
    }
}

/// Line chart comparing two children across the six skill categories.
fn children_progress_spec() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        categories: SKILL_CATEGORIES.to_vec(),
        data: ChartData::Series(vec![
            Series {
                name: "أحمد",
                color: CYAN,
                values: vec![65.0, 72.0, 58.0, 45.0, 68.0, 75.0],
            },
            Series {
                name: "سارة",
                color: GREEN,
                values: vec![78.0, 85.0, 70.0, 60.0, 75.0, 80.0],
            },
        ]),
        show_legend: true,
        y_max: Some(100.0),
    }
}

/// Donut chart of the four-bucket class performance distribution.
fn students_distribution_spec() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        categories: Vec::new(),
        data: ChartData::Slices {
            name: "توزيع الطلاب",
            slices: vec![
                Slice {
                    name: "ممتاز",
                    color: GREEN,
                    value: 15.0,
                },
                Slice {
                    name: "جيد",
                    color: CYAN,
                    value: 8.0,
                },
                Slice {
                    name: "يحتاج دعم",
                    color: ORANGE,
                    value: 5.0,
                },
                Slice {
                    name: "يحتاج تدخل",
                    color: RED,
                    value: 2.0,
                },
            ],
        },
        show_legend: false,
        y_max: None,
    }
}

/// Grouped bars of monthly opened/closed case counts.
fn institution_cases_spec() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        categories: MONTHS.to_vec(),
        data: ChartData::Series(vec![
            Series {
                name: "حالات جديدة",
                color: CYAN,
                values: vec![12.0, 15.0, 8.0, 18.0, 22.0, 16.0],
            },
            Series {
                name: "حالات مغلقة",
                color: GREEN,
                values: vec![8.0, 10.0, 6.0, 12.0, 15.0, 11.0],
            },
        ]),
        show_legend: true,
        y_max: None,
    }
}

impl ChartSpec {
    /// Serialize to an ECharts option object.
    pub fn to_echarts_option(&self) -> Value {
        match (&self.kind, &self.data) {
            (ChartKind::Pie, ChartData::Slices { name, slices }) => {
                let data: Vec<Value> = slices
                    .iter()
                    .map(|s| {
                        json!({
                            "value": s.value,
                            "name": s.name,
                            "itemStyle": { "color": s.color },
                        })
                    })
                    .collect();

                json!({
                    "tooltip": { "trigger": "item" },
                    "series": [{
                        "name": name,
                        "type": "pie",
                        "radius": ["40%", "70%"],
                        "avoidLabelOverlap": false,
                        "label": { "show": false, "position": "center" },
                        "emphasis": {
                            "label": {
                                "show": true,
                                "fontSize": "18",
                                "fontWeight": "bold",
                            },
                        },
                        "labelLine": { "show": false },
                        "data": data,
                    }],
                })
            }
            (kind, ChartData::Series(series)) => {
                let type_name = match kind {
                    ChartKind::Line => "line",
                    ChartKind::Bar => "bar",
                    // Pie charts carry slices, never a series list
                    ChartKind::Pie => "line",
                };

                let series_json: Vec<Value> = series
                    .iter()
                    .map(|s| {
                        let mut entry = json!({
                            "name": s.name,
                            "type": type_name,
                            "data": &s.values,
                            "itemStyle": { "color": s.color },
                        });
                        if matches!(kind, ChartKind::Line) {
                            entry["smooth"] = json!(true);
                            entry["lineStyle"] = json!({ "color": s.color });
                        }
                        entry
                    })
                    .collect();

                let mut option = json!({
                    "tooltip": { "trigger": "axis" },
                    "grid": {
                        "left": "3%",
                        "right": "4%",
                        "bottom": "15%",
                        "containLabel": true,
                    },
                    "xAxis": { "type": "category", "data": &self.categories },
                    "yAxis": { "type": "value" },
                    "series": series_json,
                });

                if let Some(max) = self.y_max {
                    option["yAxis"]["max"] = json!(max);
                }
                if self.show_legend {
                    let names: Vec<&str> = series.iter().map(|s| s.name).collect();
                    option["legend"] = json!({ "data": names, "bottom": 0 });
                }

                option
            }
            // Slices on a non-pie kind are unreachable by construction
            _ => json!({}),
        }
    }
}

/// Render every chart for a role into its container element. Containers that
/// are not mounted yet are skipped.
pub fn render_for(role: Role) {
    for chart in charts_for(role) {
        echarts::render(chart.container, &chart.spec.to_echarts_option());
    }
}

/// Re-layout every mounted chart (debounced resize path). Data is never
/// recomputed here.
pub fn resize_mounted() {
    echarts::resize_all();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mother_chart_two_series_over_six_categories() {
        let charts = charts_for(Role::Mother);
        assert_eq!(charts.len(), 1);

        let spec = &charts[0].spec;
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.categories, SKILL_CATEGORIES.to_vec());
        assert_eq!(spec.categories.len(), 6);

        match &spec.data {
            ChartData::Series(series) => {
                assert_eq!(series.len(), 2);
                for s in series {
                    assert_eq!(s.values.len(), 6);
                }
            }
            other => panic!("expected series data, got {:?}", other),
        }
    }

    #[test]
    fn test_static_dashboards_render_no_charts() {
        assert!(charts_for(Role::Specialist).is_empty());
        assert!(charts_for(Role::Researcher).is_empty());
    }

    #[test]
    fn test_teacher_distribution_buckets() {
        let charts = charts_for(Role::Teacher);
        assert_eq!(charts[0].container, "students-progress-chart");

        match &charts[0].spec.data {
            ChartData::Slices { slices, .. } => {
                assert_eq!(slices.len(), 4);
                let total: f64 = slices.iter().map(|s| s.value).sum();
                assert_eq!(total, 30.0);
            }
            other => panic!("expected slices, got {:?}", other),
        }
    }

    #[test]
    fn test_line_option_shape() {
        let option = charts_for(Role::Mother)[0].spec.to_echarts_option();
        assert_eq!(option["tooltip"]["trigger"], "axis");
        assert_eq!(option["legend"]["bottom"], 0);
        assert_eq!(option["yAxis"]["max"], 100.0);
        assert_eq!(option["series"][0]["type"], "line");
        assert_eq!(option["series"][0]["smooth"], true);
        assert_eq!(option["xAxis"]["data"][0], "قراءة");
    }

    #[test]
    fn test_pie_option_shape() {
        let option = charts_for(Role::Teacher)[0].spec.to_echarts_option();
        assert_eq!(option["tooltip"]["trigger"], "item");
        assert_eq!(option["series"][0]["type"], "pie");
        assert_eq!(option["series"][0]["radius"][0], "40%");
        assert_eq!(option["series"][0]["data"][0]["name"], "ممتاز");
        assert!(option.get("legend").is_none());
    }

    #[test]
    fn test_bar_option_shape() {
        let option = charts_for(Role::Institution)[0].spec.to_echarts_option();
        assert_eq!(option["series"][0]["type"], "bar");
        assert_eq!(option["series"].as_array().map(|s| s.len()), Some(2));
        assert_eq!(option["xAxis"]["data"].as_array().map(|m| m.len()), Some(6));
        // Bars carry no smoothing
        assert!(option["series"][0].get("smooth").is_none());
    }

    #[test]
    fn test_specs_are_deterministic() {
        let a = charts_for(Role::Institution)[0].spec.clone();
        let b = charts_for(Role::Institution)[0].spec.clone();
        assert_eq!(a, b);
    }
}
