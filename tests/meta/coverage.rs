//! Structural checks that keep `tests/unit` in step with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module files carry no logic of their own
    fn is_wiring(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn mirrored_paths(root: &str) -> BTreeSet<String> {
        let root = Path::new(root);
        let mut paths = BTreeSet::new();
        if let Err(error) = walk(root, root, &mut paths) {
            assert!(!root.exists(), "Failed to scan {}: {error}", root.display());
        }
        paths.retain(|relative| !is_wiring(relative));
        paths
    }

    fn walk(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_prefix_error| io::Error::other("path escaped its base"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                walk(&path, base, paths)?;
                paths.insert(relative);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn report(title: &str, entries: &[String]) -> String {
        format!("{title}:\n  - {}", entries.join("\n  - "))
    }

    // Tests every source file and directory has a unit test counterpart
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = mirrored_paths(UNIT_DIR);
        let missing: Vec<String> = mirrored_paths(SRC_DIR)
            .into_iter()
            .filter(|path| !tests.contains(path))
            .map(|path| format!("src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source paths without unit tests", &missing)
        );
    }

    // Tests no unit test outlives the source it covered
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = mirrored_paths(SRC_DIR);
        let orphaned: Vec<String> = mirrored_paths(UNIT_DIR)
            .into_iter()
            .filter(|path| !sources.contains(path))
            .map(|path| format!("{UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without source", &orphaned)
        );
    }

    // Tests each unit test file is declared by its directory's mod.rs
    #[test]
    fn test_unit_files_are_wired() {
        let mut unwired = Vec::new();

        for relative in mirrored_paths(UNIT_DIR) {
            let path = Path::new(UNIT_DIR).join(&relative);
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            let Some(parent) = path.parent() else {
                continue;
            };

            let module_file = parent.join("mod.rs");
            let declarations = [format!("mod {stem};"), format!("pub mod {stem};")];
            let declared = fs::read_to_string(&module_file).is_ok_and(|content| {
                content
                    .lines()
                    .map(str::trim)
                    .any(|line| declarations.iter().any(|declaration| declaration == line))
            });

            if !declared {
                let hint = format!("declare in {}", module_file.display());
                unwired.push(format!("{} ({hint})", path.display()));
            }
        }

        assert!(
            unwired.is_empty(),
            "{}",
            report("Unit test modules never compiled", &unwired)
        );
    }

    // Tests every test file actually defines a test
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_root = Path::new("tests");
        let mut files = BTreeSet::new();
        if let Err(error) = walk(tests_root, tests_root, &mut files) {
            assert!(!tests_root.exists(), "Failed to scan tests: {error}");
        }

        let empty: Vec<String> = files
            .into_iter()
            .filter(|relative| relative.ends_with(".rs") && !relative.ends_with("mod.rs"))
            .filter(|relative| {
                let content = fs::read_to_string(tests_root.join(relative));
                !content.is_ok_and(|text| text.contains("#[test]"))
            })
            .map(|relative| format!("tests/{relative}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }
}
