use std::{fs, path::Path};

use ratmat::{Interpreter, run_script};
use walkdir::WalkDir;

fn run(source: &str) -> (String, usize) {
    let mut out = Vec::new();
    let failures = run_script(&mut Interpreter::new(), source, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), failures)
}

#[test]
fn scripts_match_expected_output() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "math"))
    {
        let path = entry.path();
        let expected_path = path.with_extension("out");
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        count += 1;
        let (actual, _) = run(&source);
        assert_eq!(actual, expected, "output of {path:?} differs");
    }

    assert!(count > 0, "No scripts found in {root:?}");
}

#[test]
fn readme_examples_work() {
    let readme = Path::new(env!("CARGO_MANIFEST_DIR")).join("README.md");
    let content = fs::read_to_string(&readme).unwrap_or_else(|e| panic!("Failed to read README: {e}"));

    let blocks = extract_blocks(&content);
    assert!(!blocks.is_empty(), "No ratmat examples found in README.md");

    for (i, code) in blocks.iter().enumerate() {
        let (output, failures) = run(code);
        assert_eq!(failures, 0, "README example {} failed:\n{code}\n{output}", i + 1);
    }
}

#[test]
fn errors_are_reported_per_line() {
    let (output, failures) = run("X = 1\nX +\nY\nX * 3\n");
    assert_eq!(failures, 2);
    assert_eq!(output,
               "Error on line 2: Syntax error at 1:4: Expected an expression, found end of \
                input.\nError on line 3: Undefined variable 'Y'.\n3\n");
}

fn extract_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```ratmat") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
