//! `--build-info` report, printed as a flat JSON object.

/// Compile-time facts about this binary.
const FIELDS: [(&str, &str); 4] = [
    ("version", env!("CARGO_PKG_VERSION")),
    ("git_describe", env!("GIT_DESCRIBE")),
    ("git_hash", env!("GIT_HASH")),
    ("profile", env!("BUILD_PROFILE")),
];

fn render(name: &str) -> String {
    let mut lines = vec![format!("  \"name\": {name:?}")];
    lines.extend(
        FIELDS
            .iter()
            .map(|(key, value)| format!("  \"{key}\": {value:?}")),
    );
    format!("{{\n{}\n}}", lines.join(",\n"))
}

pub fn print_report(name: &str) {
    println!("{}", render(name));
}
