//! Python class source emission.
//!
//! Walks the analyzed class tree post-order (nested classes before their
//! owners) and renders each class as Python source: typed attributes, an
//! `__init__` that populates fields from a wire-keyed dict, and a `__call__`
//! that serializes the instance back to a dict.

use std::collections::BTreeSet;

use crate::analyze::ClassInfo;
use crate::naming::snake_to_camel_key;

/// Header line naming the container types the generated module uses.
pub const TYPING_IMPORTS: &str = "from typing import List, Dict, Any, Optional";

pub struct Codegen {
    /// Names of classes rendered so far, threaded through the recursion.
    emitted: BTreeSet<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self { emitted: BTreeSet::new() }
    }

    /// Class names rendered so far, in sorted order.
    pub fn emitted_classes(&self) -> impl Iterator<Item = &str> {
        self.emitted.iter().map(String::as_str)
    }

    /// Render `class_info` and every class it owns. Nested class blocks come
    /// first (first-encountered order); textually identical nested blocks are
    /// emitted once.
    pub fn emit(&mut self, class_info: &ClassInfo) -> String {
        self.emitted.insert(class_info.name.clone());

        let mut nested_blocks: Vec<String> = Vec::new();
        for field in class_info.fields.values() {
            if let Some(nested) = &field.info {
                let block = self.emit(nested);
                if !nested_blocks.contains(&block) {
                    nested_blocks.push(block);
                }
            }
        }

        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("class {}:", class_info.name));
        for (field_name, field) in &class_info.fields {
            lines.push(format!("    {field_name}: {}", field.ty));
        }

        lines.push(String::new());
        lines.push("    def __init__(self, data: dict):".to_string());
        for (field_name, field) in &class_info.fields {
            let json_key = snake_to_camel_key(field_name);
            if field.is_custom_class {
                lines.push(format!(
                    "        self.{field_name} = {}(data.get('{json_key}', {{}}))",
                    field.ty
                ));
            } else if field.is_list {
                if field.list_element_is_custom {
                    let element = field.list_element_type.as_deref().unwrap_or("Any");
                    lines.push(format!("        self.{field_name} = ["));
                    lines.push(format!(
                        "            {element}(item) for item in data.get('{json_key}', [])"
                    ));
                    lines.push("        ]".to_string());
                } else {
                    lines.push(format!(
                        "        self.{field_name} = data.get('{json_key}', [])"
                    ));
                }
            } else {
                lines.push(format!("        self.{field_name} = data.get('{json_key}')"));
            }
        }
        lines.push(String::new());

        lines.push("    def __call__(self) -> dict:".to_string());
        lines.push("        result = {}".to_string());
        for (field_name, field) in &class_info.fields {
            let json_key = snake_to_camel_key(field_name);
            if field.is_custom_class {
                lines.push(format!(
                    "        result['{json_key}'] = self.{field_name}() if self.{field_name} else None"
                ));
            } else if field.is_list && field.list_element_is_custom {
                lines.push(format!(
                    "        result['{json_key}'] = [item() for item in self.{field_name}] if self.{field_name} else []"
                ));
            } else {
                lines.push(format!("        result['{json_key}'] = self.{field_name}"));
            }
        }
        lines.push("        return result".to_string());
        lines.push(String::new());

        let mut blocks = nested_blocks;
        blocks.push(lines.join("\n"));
        blocks.join("\n")
    }
}

/// Render the complete generated module: typing imports, a blank line, then
/// every class block.
pub fn render_module(root: &ClassInfo) -> String {
    let mut cg = Codegen::new();
    let body = cg.emit(root);
    format!("{TYPING_IMPORTS}\n\n{body}")
}
