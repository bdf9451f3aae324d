use mdlite_core::render;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    markdown: String,
    html: String,
}

fn load_cases() -> Result<Vec<Case>, Box<dyn std::error::Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let cases_path = root.join("tests/fixtures/cases.json");
    let json = fs::read_to_string(&cases_path)?;
    Ok(serde_json::from_str(&json)?)
}

#[test]
fn golden_cases() -> Result<(), Box<dyn std::error::Error>> {
    let cases = load_cases()?;
    assert!(!cases.is_empty(), "no golden cases found");

    let mut failures = Vec::new();
    for case in &cases {
        let actual = render(&case.markdown);
        if actual != case.html {
            failures.push(format!(
                "--- {} ---\nMarkdown: {:?}\nExpected: {:?}\nActual:   {:?}",
                case.name, case.markdown, case.html, actual
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} of {} golden cases failed:\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        );
    }
    Ok(())
}

#[test]
fn golden_case_names_are_unique() -> Result<(), Box<dyn std::error::Error>> {
    let cases = load_cases()?;
    let mut names: Vec<&str> = cases.iter().map(|case| case.name.as_str()).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(before, names.len(), "duplicate golden case names");
    Ok(())
}
