//! Runtime introspection for the diagnostics screen.
//!
//! Every probe is an opaque source returning `Option<String>`; missing
//! values render as `Unknown` rather than failing the report.

use std::env;

pub fn report() -> String {
    let mut out = String::from("=== APP DIAGNOSTICS ===\n\n");

    out.push_str("APP INFORMATION\n");
    out.push_str(&entry("Name", Some(env!("CARGO_PKG_NAME").to_string())));
    out.push_str(&entry("Version", Some(env!("CARGO_PKG_VERSION").to_string())));
    out.push_str(&entry("Executable", executable_path()));
    out.push('\n');

    out.push_str("SYSTEM INFORMATION\n");
    out.push_str(&entry("OS", Some(env::consts::OS.to_string())));
    out.push_str(&entry("Architecture", Some(env::consts::ARCH.to_string())));
    out.push_str(&entry("Family", Some(env::consts::FAMILY.to_string())));
    out.push('\n');

    out.push_str("BUILD\n");
    out.push_str(&entry("Profile", Some(build_profile().to_string())));
    out.push('\n');

    out.push_str("PATHS\n");
    out.push_str(&entry("Working directory", working_directory()));
    out.push_str(&entry(
        "Temp directory",
        Some(env::temp_dir().display().to_string()),
    ));

    out
}

fn entry(label: &str, value: Option<String>) -> String {
    format!("{label}: {}\n", value.unwrap_or_else(|| "Unknown".to_string()))
}

fn executable_path() -> Option<String> {
    env::current_exe().ok().map(|path| path.display().to_string())
}

fn working_directory() -> Option<String> {
    env::current_dir().ok().map(|path| path.display().to_string())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "release" }
}
