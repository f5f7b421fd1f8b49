//! Build script: embeds the word lists under `data/` as const slices

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// (source file, generated file, const name, doc line)
const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/solutions.txt",
        "solutions.rs",
        "SOLUTIONS",
        "Words that can be the hidden target of a round",
    ),
    (
        "data/guesses.txt",
        "guesses.rs",
        "GUESSES",
        "Words accepted as guesses",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");

    for (source, generated, const_name, doc) in LISTS {
        println!("cargo:rerun-if-changed={source}");
        let content =
            fs::read_to_string(source).unwrap_or_else(|e| panic!("Failed to read {source}: {e}"));
        let target = Path::new(&out_dir).join(generated);
        fs::write(&target, render(source, const_name, doc, &content))
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));
    }
}

fn render(source: &str, const_name: &str, doc: &str, content: &str) -> String {
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut out = format!("// Generated from {source}\n\n");
    let _ = writeln!(out, "/// {doc} ({} words)", words.len());
    let _ = writeln!(out, "pub const {const_name}: &[&str] = &[");
    for word in &words {
        let _ = writeln!(out, "    {word:?},");
    }
    out.push_str("];\n\n");
    let _ = writeln!(out, "/// Number of words in {const_name}");
    let _ = writeln!(out, "pub const {const_name}_COUNT: usize = {};", words.len());
    out
}
