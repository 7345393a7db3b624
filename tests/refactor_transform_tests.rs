use retemplate::errors::RefactorError;
use retemplate::refactor::{refactor_lines, refactor_whole};
use retemplate::rename::rename_files;
use retemplate::transform::{
    title_case, NameSubstitution, ReadmeInjection, TextTransform, INTRODUCTION_FOOTER,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_name_substitution_replaces_three_case_forms() {
    let subst = NameSubstitution::new("evey", "foo").unwrap();

    assert_eq!(
        subst.apply("project(Evey) uses evey and EVEY_API"),
        "project(Foo) uses foo and FOO_API",
        "All three case forms should be replaced"
    );
}

#[test]
fn test_name_substitution_unmatched_text_is_unchanged() {
    let subst = NameSubstitution::new("evey", "foo").unwrap();

    assert_eq!(
        subst.apply("nothing to see here"),
        "nothing to see here",
        "Text without the old name should pass through untouched"
    );
}

#[test]
fn test_name_substitution_is_single_pass_per_form() {
    // The new name contains the old one; each case-form pass must not
    // re-expand its own output.
    let subst = NameSubstitution::new("evey", "super_evey").unwrap();

    assert_eq!(
        subst.apply("call evey now"),
        "call super_evey now",
        "Lowercase replacement should not recurse into its own output"
    );
}

#[test]
fn test_name_substitution_can_double_substitute_across_case_passes() {
    // The uppercase form of the old name appears inside the title-case form
    // of the new name, so the uppercase pass rewrites the title pass's own
    // output. Long-standing behavior, kept as-is.
    let subst = NameSubstitution::new("o", "oo").unwrap();

    assert_eq!(
        subst.apply("O"),
        "OOo",
        "Overlapping case forms substitute twice across the sequential passes"
    );
}

#[test]
fn test_title_case_matches_word_boundaries() {
    assert_eq!(title_case("evey"), "Evey");
    assert_eq!(title_case("evey_main"), "Evey_Main");
    assert_eq!(title_case("EVEY"), "Evey");
}

#[test]
fn test_readme_injection_inserts_between_headings() {
    let inject = ReadmeInjection::new("New desc").unwrap();
    let input = "# Evey\n\nSome text\n\n## Usage\nRun it.\n";

    let expected = format!(
        "# Evey\n\nNew desc\n\n{}\n\n## Usage\nRun it.\n",
        INTRODUCTION_FOOTER
    );
    assert_eq!(
        inject.apply(input),
        expected,
        "Introduction should replace the text between the headings"
    );
}

#[test]
fn test_readme_injection_without_heading_structure_is_noop() {
    let inject = ReadmeInjection::new("New desc").unwrap();

    let no_top_heading = "Just some text\n\n## Usage\n";
    assert_eq!(inject.apply(no_top_heading), no_top_heading);

    let no_second_heading = "# Evey\n\nSome text\n";
    assert_eq!(inject.apply(no_second_heading), no_second_heading);
}

#[test]
fn test_readme_injection_is_idempotent() {
    let inject = ReadmeInjection::new("New desc").unwrap();
    let input = "# Evey\n\nSome text\n\n## Usage\nRun it.\n";

    let once = inject.apply(input);
    let twice = inject.apply(&once);
    assert_eq!(once, twice, "A second injection should change nothing");
}

#[test]
fn test_refactor_lines_rewrites_file_in_place() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("CMakeLists.txt");
    fs::write(&file_path, "project(Evey)\nset(EVEY_VERSION 1)\nevey_init\n").unwrap();

    let subst = NameSubstitution::new("evey", "foo").unwrap();
    refactor_lines(&[file_path.clone()], &subst).unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(
        content, "project(Foo)\nset(FOO_VERSION 1)\nfoo_init\n",
        "File content mismatch after line refactor"
    );

    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1, "No temporary file should be left behind");
}

#[test]
fn test_refactor_lines_preserves_missing_trailing_newline() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("name.txt");
    fs::write(&file_path, "evey").unwrap();

    let subst = NameSubstitution::new("evey", "foo").unwrap();
    refactor_lines(&[file_path.clone()], &subst).unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "foo");
}

#[test]
fn test_refactor_rejects_non_utf8_content() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("blob.bin");
    fs::write(&file_path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

    let subst = NameSubstitution::new("evey", "foo").unwrap();
    let result = refactor_lines(&[file_path], &subst);
    assert!(
        matches!(result, Err(RefactorError::EncodingError(_))),
        "Binary content should abort with an encoding error, got {:?}",
        result
    );
}

#[test]
fn test_refactor_whole_applies_transform_once() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("README.md");
    fs::write(&file_path, "# Evey\n\nSome text\n\n## Usage\n").unwrap();

    let inject = ReadmeInjection::new("New desc").unwrap();
    refactor_whole(&[file_path.clone()], &inject).unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert!(
        content.contains("New desc") && content.contains(INTRODUCTION_FOOTER),
        "README should contain the injected content and footer, got: {}",
        content
    );
}

#[test]
fn test_rename_files_applies_substitution_to_base_name() {
    let dir = tempdir().unwrap();
    let src_dir = dir.path().join("src");
    fs::create_dir_all(&src_dir).unwrap();
    let file_path = src_dir.join("evey_main.c");
    fs::write(&file_path, "int main(void) { return 0; }\n").unwrap();

    let subst = NameSubstitution::new("evey", "foo").unwrap();
    let renamed = rename_files(&[file_path.clone()], &subst).unwrap();

    assert_eq!(renamed, vec![src_dir.join("foo_main.c")]);
    assert!(renamed[0].is_file(), "Renamed file should exist");
    assert!(!file_path.exists(), "Old file name should be gone");
}

#[test]
fn test_rename_files_is_idempotent_for_unmatched_names() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("main.c");
    fs::write(&file_path, "int main(void) { return 0; }\n").unwrap();

    let subst = NameSubstitution::new("evey", "foo").unwrap();
    let renamed = rename_files(&[file_path.clone()], &subst).unwrap();

    assert_eq!(renamed, vec![file_path.clone()]);
    assert!(file_path.is_file(), "Unmatched file should stay in place");
}
