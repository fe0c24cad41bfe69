//! Absent `Data` keys render as empty.
//!
//! Tera fails a render on any undefined variable, but language files are often
//! partial translations. Every `Data.*` path a template reads is collected once
//! from its AST; before each render, paths missing from the language data are
//! filled with an empty value shaped for how the template uses them.
//!
//! `is defined` tests are not collected, so `{% if Data.key is defined %}`
//! still sees the real data unless the same key is also read elsewhere.

use tera::ast::{Expr, ExprVal, FunctionCall, Node};
use tera::{Map, Value};

use crate::language::LanguageData;

const DATA_PREFIX: &str = "Data.";

/// Value inserted for an absent path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    /// Printed or tested: null renders empty, is falsy and triggers `default`.
    Null,
    /// Piped through filters or concatenated, which expect a string.
    Text,
    /// Iterated by `{% for x in ... %}` or searched with `in`.
    List,
    /// Iterated by `{% for k, v in ... %}`.
    Map,
}

impl Slot {
    fn empty_value(self) -> Value {
        match self {
            Slot::Null => Value::Null,
            Slot::Text => Value::String(String::new()),
            Slot::List => Value::Array(Vec::new()),
            Slot::Map => Value::Object(Map::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DataPath {
    segments: Vec<String>,
    slot: Slot,
}

/// The `Data.*` paths read by one compiled template.
#[derive(Debug, Default)]
pub(crate) struct DataPaths(Vec<DataPath>);

impl DataPaths {
    pub(crate) fn collect(ast: &[Node]) -> Self {
        let mut paths = Self::default();
        paths.visit_nodes(ast);
        // Deepest first, so intermediate keys are created as objects before
        // a shorter path could claim them as null.
        paths
            .0
            .sort_by(|a, b| b.segments.len().cmp(&a.segments.len()));
        paths
    }

    /// Insert an empty value for every collected path absent from `data`.
    ///
    /// Keys that exist are never touched, even when they hold a value the
    /// template can't use.
    pub(crate) fn fill_missing(&self, data: &mut LanguageData) {
        'paths: for path in &self.0 {
            let Some((last, parents)) = path.segments.split_last() else {
                continue;
            };

            let mut current: &mut Map<String, Value> = data;
            for segment in parents {
                current = match current
                    .entry(segment.clone())
                    .or_insert_with(|| Value::Object(Map::new()))
                {
                    Value::Object(map) => map,
                    _ => continue 'paths,
                };
            }
            current
                .entry(last.clone())
                .or_insert_with(|| path.slot.empty_value());
        }
    }

    fn push(&mut self, ident: &str, slot: Slot) {
        let Some(rest) = ident.strip_prefix(DATA_PREFIX) else {
            return;
        };
        // Bracket lookups depend on runtime values
        if rest.contains('[') {
            return;
        }
        let segments: Vec<String> = rest.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return;
        }

        match self.0.iter_mut().find(|p| p.segments == segments) {
            Some(existing) => existing.slot = existing.slot.max(slot),
            None => self.0.push(DataPath { segments, slot }),
        }
    }

    fn visit_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::VariableBlock(_, expr) => self.visit_expr(expr, Slot::Null),
                Node::Set(_, set) => self.visit_expr(&set.value, Slot::Null),
                Node::FilterSection(_, section, _) => {
                    self.visit_call(&section.filter);
                    self.visit_nodes(&section.body);
                }
                Node::Block(_, block, _) => self.visit_nodes(&block.body),
                Node::Forloop(_, forloop, _) => {
                    let slot = if forloop.key.is_some() {
                        Slot::Map
                    } else {
                        Slot::List
                    };
                    self.visit_expr(&forloop.container, slot);
                    self.visit_nodes(&forloop.body);
                    if let Some(empty_body) = &forloop.empty_body {
                        self.visit_nodes(empty_body);
                    }
                }
                Node::If(if_node, _) => {
                    for (_, condition, body) in &if_node.conditions {
                        self.visit_expr(condition, Slot::Null);
                        self.visit_nodes(body);
                    }
                    if let Some((_, body)) = &if_node.otherwise {
                        self.visit_nodes(body);
                    }
                }
                // Macro bodies only see their arguments, never the page context
                _ => {}
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr, slot: Slot) {
        for filter in &expr.filters {
            self.visit_call(filter);
        }
        let slot = if slot == Slot::Null && !expr.filters.is_empty() && !expr.has_default_filter()
        {
            Slot::Text
        } else {
            slot
        };
        self.visit_val(&expr.val, slot);
    }

    fn visit_val(&mut self, val: &ExprVal, slot: Slot) {
        match val {
            ExprVal::Ident(ident) => self.push(ident, slot),
            ExprVal::Math(math) => {
                self.visit_expr(&math.lhs, Slot::Null);
                self.visit_expr(&math.rhs, Slot::Null);
            }
            ExprVal::Logic(logic) => {
                self.visit_expr(&logic.lhs, Slot::Null);
                self.visit_expr(&logic.rhs, Slot::Null);
            }
            ExprVal::Test(test) => {
                for arg in &test.args {
                    self.visit_expr(arg, Slot::Null);
                }
            }
            ExprVal::In(in_expr) => {
                self.visit_expr(&in_expr.lhs, Slot::Null);
                self.visit_expr(&in_expr.rhs, Slot::List);
            }
            ExprVal::StringConcat(concat) => {
                for value in &concat.values {
                    self.visit_val(value, Slot::Text);
                }
            }
            ExprVal::Array(items) => {
                for item in items {
                    self.visit_expr(item, Slot::Null);
                }
            }
            ExprVal::FunctionCall(call) => self.visit_call(call),
            ExprVal::MacroCall(call) => {
                for arg in call.args.values() {
                    self.visit_expr(arg, Slot::Null);
                }
            }
            ExprVal::String(_) | ExprVal::Int(_) | ExprVal::Float(_) | ExprVal::Bool(_) => {}
        }
    }

    fn visit_call(&mut self, call: &FunctionCall) {
        for arg in call.args.values() {
            self.visit_expr(arg, Slot::Null);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tera::Tera;

    fn paths_for(source: &str) -> DataPaths {
        let mut tera = Tera::default();
        tera.add_raw_template("page.html", source).unwrap();
        DataPaths::collect(&tera.get_template("page.html").unwrap().ast)
    }

    fn filled(source: &str, data: serde_json::Value) -> serde_json::Value {
        let mut data = data.as_object().cloned().unwrap();
        paths_for(source).fill_missing(&mut data);
        Value::Object(data)
    }

    #[test]
    fn test_missing_printed_key_becomes_null() {
        let out = filled("{{ Data.title }}{{ Data.subtitle }}", json!({ "title": "Hi" }));
        assert_eq!(out, json!({ "title": "Hi", "subtitle": null }));
    }

    #[test]
    fn test_nested_path_creates_objects() {
        let out = filled("{{ Data.nav.home }} {{ Data.nav }}", json!({}));
        assert_eq!(out, json!({ "nav": { "home": null } }));
    }

    #[test]
    fn test_existing_values_untouched() {
        let out = filled(
            "{{ Data.nav.home }}",
            json!({ "nav": "flat string" }),
        );
        assert_eq!(out, json!({ "nav": "flat string" }));
    }

    #[test]
    fn test_slot_follows_usage() {
        let out = filled(
            r#"{% for item in Data.items %}{{ item }}{% endfor %}
{% for k, v in Data.links %}{{ k }}{% endfor %}
{{ Data.name | upper }}
{{ Data.tagline | default(value="-") }}
{% if "a" in Data.tags %}a{% endif %}"#,
            json!({}),
        );
        assert_eq!(
            out,
            json!({
                "items": [],
                "links": {},
                "name": "",
                "tagline": null,
                "tags": []
            })
        );
    }

    #[test]
    fn test_strongest_usage_wins() {
        let out = filled(
            "{% if Data.items %}{% for i in Data.items %}{{ i }}{% endfor %}{% endif %}",
            json!({}),
        );
        assert_eq!(out, json!({ "items": [] }));
    }

    #[test]
    fn test_defined_test_and_other_roots_ignored() {
        let out = filled(
            "{% if Data.beta is defined %}beta{% endif %}{{ LangName }}{{ Data['x'] | default(value='') }}",
            json!({}),
        );
        assert_eq!(out, json!({}));
    }

    #[test]
    fn test_paths_inside_filter_args_and_blocks() {
        let out = filled(
            r#"{% filter upper %}{{ Data.a }}{% endfilter %}{{ LangName | default(value=Data.b) }}"#,
            json!({}),
        );
        assert_eq!(out, json!({ "a": null, "b": null }));
    }
}
