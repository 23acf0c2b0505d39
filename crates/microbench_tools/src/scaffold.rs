//! Scaffolding new bench files from the template.
//!
//! A scaffolded bench is self-contained: it depends only on `criterion`, so
//! it can be dropped into any crate's `benches/` directory.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use microbench_core::workloads::Workload;

use crate::error::{Result, ToolError};

/// Words that cannot name a function without a raw identifier.
const RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Items every rendered template defines or imports at top level.
const TEMPLATE_ITEMS: &[&str] = &["benches", "main", "black_box"];

/// Check that `name` works as both a bench target and a function name.
pub fn validate_bench_name(name: &str) -> Result<()> {
    let reject = |reason| {
        Err(ToolError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    let Some(first) = name.chars().next() else {
        return reject("name is empty");
    };
    if name == "_" {
        return reject("a lone underscore is not an identifier");
    }
    if !(first.is_ascii_lowercase() || first == '_') {
        return reject("must start with a lowercase letter or underscore");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return reject("only lowercase letters, digits and underscores are allowed");
    }
    if RESERVED.contains(&name) {
        return reject("is a Rust keyword");
    }
    if TEMPLATE_ITEMS.contains(&name) {
        return reject("clashes with an item the bench template defines");
    }
    Ok(())
}

/// Render the source of a bench file timing `workload`.
pub fn render_template(name: &str, workload: Workload) -> Result<String> {
    validate_bench_name(name)?;
    let snippet = workload.snippet();
    Ok(format!(
        r#"//! Benchmark: {name}
//!
//! Replace the loop body with the code you want to measure.

use criterion::{{black_box, criterion_group, criterion_main, Criterion}};

fn {name}(c: &mut Criterion) {{
    c.bench_function("{name}", |b| {{
        b.iter(|| {{
            // Replace this loop
            black_box({snippet})
        }})
    }});
}}

// Register the function as a benchmark
criterion_group!(benches, {name});
criterion_main!(benches);
"#
    ))
}

/// The `Cargo.toml` stanza registering a bench target.
pub fn bench_manifest_entry(name: &str) -> Result<String> {
    validate_bench_name(name)?;
    Ok(format!("[[bench]]\nname = \"{name}\"\nharness = false\n"))
}

/// Write `<dir>/<name>.rs`, creating `dir` if needed.
///
/// Never overwrites: an existing file is reported as
/// [`ToolError::AlreadyExists`].
pub fn write_template(dir: &Path, name: &str, workload: Workload) -> Result<PathBuf> {
    let source = render_template(name, workload)?;
    std::fs::create_dir_all(dir)?;

    let path = dir.join(format!("{name}.rs"));
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ToolError::AlreadyExists(path));
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(source.as_bytes())?;

    tracing::info!(path = %path.display(), %workload, "Wrote bench template");
    Ok(path)
}
