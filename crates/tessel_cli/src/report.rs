//! Constraint report for a built layout

use std::fmt::Write as _;

use serde::Serialize;
use tessel_core::{ViewId, ViewTree};

/// One view in the report, listed depth-first from the root
#[derive(Debug, Serialize)]
pub struct ViewReport {
    pub name: String,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superview: Option<String>,
    pub interactive: bool,
    /// Constraints this view owns, in install order
    pub constraints: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub views: Vec<ViewReport>,
    pub constraint_count: usize,
}

impl Report {
    pub fn collect(tree: &ViewTree, root: ViewId) -> Self {
        let mut views = Vec::new();
        visit(tree, root, 0, &mut views);
        Report {
            views,
            constraint_count: tree.constraint_count(),
        }
    }

    /// Indented plain-text rendering
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for view in &self.views {
            let indent = "  ".repeat(view.depth);
            let marker = if view.interactive { "" } else { " (non-interactive)" };
            let _ = writeln!(out, "{indent}{}{marker}", view.name);
            for constraint in &view.constraints {
                let _ = writeln!(out, "{indent}  | {constraint}");
            }
        }
        let _ = writeln!(out, "{} constraints", self.constraint_count);
        out
    }
}

fn visit(tree: &ViewTree, id: ViewId, depth: usize, out: &mut Vec<ViewReport>) {
    out.push(ViewReport {
        name: name_of(tree, id),
        depth,
        superview: tree.superview(id).map(|parent| name_of(tree, parent)),
        interactive: tree.view(id).map_or(true, |view| view.user_interaction()),
        constraints: tree
            .constraints_owned_by(id)
            .map(|(_, constraint)| tree.describe(constraint))
            .collect(),
    });
    for &child in tree.subviews(id) {
        visit(tree, child, depth + 1, out);
    }
}

fn name_of(tree: &ViewTree, id: ViewId) -> String {
    tree.label(id).map_or_else(|| format!("{id:?}"), str::to_string)
}

#[cfg(test)]
mod tests {
    use tessel_layout::LayoutDocument;

    use super::*;

    fn build(source: &str) -> (ViewTree, ViewId) {
        let doc = LayoutDocument::from_toml_str(source).unwrap();
        let mut tree = ViewTree::new();
        let root = doc.build(&mut tree).unwrap().root.view();
        (tree, root)
    }

    #[test]
    fn views_are_listed_depth_first() {
        let (tree, root) = build(
            r#"
            [root]
            name = "content"
            layout = { kind = "vbox" }

            [[root.children]]
            name = "row"
            layout = { kind = "hbox" }

            [[root.children.children]]
            name = "cell"
            width = 40

            [[root.children]]
            name = "footer"
            height = 20
            "#,
        );

        let report = Report::collect(&tree, root);
        let order: Vec<(&str, usize)> = report.views.iter().map(|v| (v.name.as_str(), v.depth)).collect();
        assert_eq!(order, vec![("content", 0), ("row", 1), ("cell", 2), ("footer", 1)]);
        assert_eq!(report.views[2].superview.as_deref(), Some("row"));
        assert_eq!(report.views[2].constraints, vec!["cell.width == 40".to_string()]);
    }

    #[test]
    fn text_marks_spacers_and_counts_constraints() {
        let (tree, root) = build(
            r#"
            [root]
            name = "content"
            layout = { kind = "vbox", pack = "center" }

            [[root.children]]
            name = "only"
            height = 10
            "#,
        );

        let text = Report::collect(&tree, root).to_text();
        assert!(text.contains("spacer (non-interactive)"), "{text}");
        assert!(text.contains("| only.height == 10"), "{text}");
        assert!(text.trim_end().ends_with(&format!("{} constraints", tree.constraint_count())));
    }

    #[test]
    fn json_omits_missing_superview() {
        let (tree, root) = build("[root]\nname = \"content\"\nwidth = 5\n");

        let json = serde_json::to_value(Report::collect(&tree, root)).unwrap();
        assert!(json["views"][0].get("superview").is_none());
        assert_eq!(json["views"][0]["constraints"][0], "content.width == 5");
        assert_eq!(json["constraint_count"], 1);
    }
}
