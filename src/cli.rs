//! Minimal CLI: read JSON → analyze → emit Python classes
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use crate::analyze::analyze_structure;
use crate::codegen;
use crate::error::{GenerateError, parse_json_with_path};
use crate::naming::snake_to_pascal;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate Python classes with type hints from a sample JSON document
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// path to the input JSON file (e.g. data.json)
    input: PathBuf,

    /// path for the output Python file (default: input path with a .py extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("py"));

        // 1) read + parse the sample document
        let source = std::fs::read_to_string(&self.input).map_err(|source| {
            GenerateError::ReadInput { path: self.input.clone(), source }
        })?;
        let json_value: serde_json::Value = parse_json_with_path(&self.input, &source)?;

        // 2) analyze structure, rooted at a class named after the file
        let root_name = root_class_name(&self.input);
        let class_info = analyze_structure(&json_value, &root_name);

        // 3) render and write the Python module
        let module_src = codegen::render_module(&class_info);
        std::fs::write(&output_path, &module_src).map_err(|source| {
            GenerateError::WriteOutput { path: output_path.clone(), source }
        })?;

        println!(
            "{} {}",
            "Type declaration file generated:".green(),
            output_path.display()
        );
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Root class name comes from the input file stem, PascalCased.
fn root_class_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = snake_to_pascal(&stem);
    if name.is_empty() { "Root".to_string() } else { name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_class_name_from_stem() {
        assert_eq!(root_class_name(Path::new("data.json")), "Data");
        assert_eq!(root_class_name(Path::new("/tmp/user_list.json")), "UserList");
        assert_eq!(root_class_name(Path::new("apiResponse.json")), "ApiResponse");
    }

    #[test]
    fn root_class_name_falls_back() {
        assert_eq!(root_class_name(Path::new("")), "Root");
        assert_eq!(root_class_name(Path::new("_.json")), "Root");
    }

    #[test]
    fn default_output_replaces_extension() {
        let input = PathBuf::from("/tmp/data.json");
        assert_eq!(input.with_extension("py"), PathBuf::from("/tmp/data.py"));
        // mid-path ".json" is untouched
        let odd = PathBuf::from("/tmp/a.json.d/data.json");
        assert_eq!(odd.with_extension("py"), PathBuf::from("/tmp/a.json.d/data.py"));
    }
}
