use bundlegen::{Engine, FatalErrorKind, GenerateOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn engine(dir: &Path, default_language: &str) -> Engine {
    Engine::new(
        GenerateOptions::new()
            .with_bundle_dir(dir)
            .with_default_language(default_language)
            .with_output_dir(dir.join("out")),
    )
    .unwrap()
}

#[test]
fn test_scenario_a_two_languages_no_status() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.en.toml", "[hello]\nmsg = \"Hello\"\n");
    write(temp_dir.path(), "a.zh-cn.toml", "[hello]\nmsg = \"你好\"\n");

    let bundle = engine(temp_dir.path(), "zh_cn").run().unwrap();

    assert_eq!(bundle.default_language.as_str(), "zh-cn");
    assert_eq!(bundle.languages.len(), 2);
    assert!(!bundle.has_status);
    assert!(!bundle.has_code);

    let hello = &bundle.records["hello"];
    assert_eq!(hello.msg["en"], "Hello");
    assert_eq!(hello.msg["zh-cn"], "你好");
    assert!(hello.singular.is_empty());
    assert!(hello.plural.is_empty());
}

#[test]
fn test_scenario_b_identifier_missing_in_one_language() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.en.toml", "[bye]\nmsg = \"Bye\"\n");
    write(
        temp_dir.path(),
        "a.zh-cn.toml",
        "[hello]\nmsg = \"你好\"\n[bye]\nmsg = \"再见\"\n",
    );

    let err = engine(temp_dir.path(), "zh_cn").run().unwrap_err();

    assert_eq!(err.kind(), FatalErrorKind::Completeness);
    assert_eq!(err.identifier(), Some("hello"));
    assert_eq!(err.language(), Some("en"));
    let message = err.to_string();
    assert!(message.contains("hello"), "{}", message);
    assert!(message.contains("en"), "{}", message);
}

#[test]
fn test_scenario_c_unpaired_singular() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.en.toml", "[greet]\nsingular = \"hi\"\n");

    let err = engine(temp_dir.path(), "en").run().unwrap_err();

    assert_eq!(err.kind(), FatalErrorKind::Shape);
    assert_eq!(err.identifier(), Some("greet"));
    assert!(err.to_string().contains("`singular` and `plural`"), "{}", err);
}

#[test]
fn test_scenario_d_partial_status_coverage() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "a.en.toml",
        "[notfound]\nmsg = \"Not found\"\n[other]\nmsg = \"Other\"\n",
    );
    write(
        temp_dir.path(),
        "statusCode.toml",
        "[notfound]\nstatus = 404\n[other]\ncode = 0\n",
    );

    let err = engine(temp_dir.path(), "en").run().unwrap_err();

    assert_eq!(err.kind(), FatalErrorKind::Completeness);
    assert_eq!(err.identifier(), Some("other"));
    assert!(err.to_string().contains("`status`"), "{}", err);
}

#[test]
fn test_scenario_d_identifier_absent_from_status_table() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "a.en.toml",
        "[notfound]\nmsg = \"Not found\"\n[other]\nmsg = \"Other\"\n",
    );
    write(temp_dir.path(), "statusCode.toml", "[notfound]\nstatus = 404\n");

    let err = engine(temp_dir.path(), "en").run().unwrap_err();

    assert_eq!(err.kind(), FatalErrorKind::Completeness);
    assert_eq!(err.identifier(), Some("other"));
}

#[test]
fn test_scenario_e_orphan_status_key() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.en.toml", "[hello]\nmsg = \"Hello\"\n");
    write(
        temp_dir.path(),
        "statusCode.toml",
        "[hello]\nstatus = 200\n[ghost]\nstatus = 500\n",
    );

    let err = engine(temp_dir.path(), "en").run().unwrap_err();

    assert_eq!(err.kind(), FatalErrorKind::Completeness);
    assert_eq!(err.identifier(), Some("ghost"));
    assert!(err.to_string().contains("ghost"), "{}", err);
}

#[test]
fn test_missing_default_language_always_aborts() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.en.toml", "[hello]\nmsg = \"Hello\"\n");
    write(temp_dir.path(), "a.fr.toml", "[hello]\nmsg = \"Bonjour\"\n");

    let err = engine(temp_dir.path(), "de").run().unwrap_err();
    assert_eq!(err.kind(), FatalErrorKind::Completeness);
    assert_eq!(err.language(), Some("de"));
}

#[test]
fn test_full_status_and_code_coverage() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "messages.en.toml",
        "[ok]\nmsg = \"OK\"\n[notfound]\nmsg = \"Not found\"\n",
    );
    write(
        temp_dir.path(),
        "messages.fr.toml",
        "[ok]\nmsg = \"D'accord\"\n[notfound]\nmsg = \"Introuvable\"\n",
    );
    write(
        temp_dir.path(),
        "codes.toml",
        "[ok]\nstatus = 200\ncode = 1\n[notfound]\nstatus = 404\ncode = 2\n",
    );

    let bundle = Engine::new(
        GenerateOptions::new()
            .with_bundle_dir(temp_dir.path())
            .with_status_file("codes")
            .with_default_language("en"),
    )
    .unwrap()
    .run()
    .unwrap();

    assert!(bundle.has_status);
    assert!(bundle.has_code);
    assert_eq!(bundle.records["notfound"].status, Some(404));
    assert_eq!(bundle.records["ok"].code, Some(1));
}

#[test]
fn test_status_file_is_not_ingested_as_language() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "en.toml", "[hello]\nmsg = \"Hello\"\n");
    // Named like a language file, but configured as the status table.
    write(temp_dir.path(), "de.toml", "[hello]\nstatus = 200\n");

    let bundle = Engine::new(
        GenerateOptions::new()
            .with_bundle_dir(temp_dir.path())
            .with_status_file("de.toml")
            .with_default_language("en"),
    )
    .unwrap()
    .run()
    .unwrap();

    assert_eq!(bundle.languages.len(), 1);
    assert_eq!(bundle.records["hello"].status, Some(200));
}

#[test]
fn test_mixed_variants_across_languages_abort() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "a.en.toml",
        "[apples]\nsingular = \"one apple\"\nplural = \"many apples\"\n",
    );
    write(temp_dir.path(), "a.fr.toml", "[apples]\nmsg = \"pommes\"\n");

    let err = engine(temp_dir.path(), "en").run().unwrap_err();
    assert_eq!(err.kind(), FatalErrorKind::Completeness);
    assert_eq!(err.identifier(), Some("apples"));
}

#[test]
fn test_decode_failure_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.en.toml", "[hello]\nmsg = \"Hello\"\n");
    write(temp_dir.path(), "a.fr.toml", "[hello\nmsg = \"Bonjour\"\n");

    let engine = engine(temp_dir.path(), "en");
    let err = engine.generate().unwrap_err();

    assert_eq!(err.kind(), FatalErrorKind::Structural);
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_tagged_file_with_other_extension_is_decoded() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.en.toml", "[hello]\nmsg = \"Hello\"\n");
    write(temp_dir.path(), "a.fr.yaml", "hello: bonjour\n");

    let err = engine(temp_dir.path(), "en").run().unwrap_err();

    assert_eq!(err.kind(), FatalErrorKind::Structural);
    assert!(err.file().unwrap().ends_with("a.fr.yaml"), "{}", err);
}

#[test]
fn test_generate_writes_module() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.en.toml", "[hello]\nmsg = \"Hello\"\n");
    write(temp_dir.path(), "a.zh-CN.toml", "[hello]\nmsg = \"你好\"\n");

    let path = engine(temp_dir.path(), "zh_cn").generate().unwrap();

    assert_eq!(path, temp_dir.path().join("out").join("i18n.rs"));
    let source = fs::read_to_string(path).unwrap();
    assert!(source.contains("pub const DEFAULT_LANGUAGE: &str = \"zh-cn\";"));
    assert!(source.contains(r#"msg: &[("en", "Hello"), ("zh-cn", "你好")],"#));
    assert!(source.contains("pub fn message(id: &str) -> Option<&'static Message>"));
}

#[test]
fn test_runs_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "a.en.toml",
        "[hello]\nmsg = \"Hello\"\n[apples]\nsingular = \"apple\"\nplural = \"apples\"\n",
    );
    write(
        temp_dir.path(),
        "a.fr.toml",
        "[hello]\nmsg = \"Bonjour\"\n[apples]\nsingular = \"pomme\"\nplural = \"pommes\"\n",
    );

    let engine = engine(temp_dir.path(), "fr");
    let first = engine.run().unwrap();
    let second = engine.run().unwrap();
    assert_eq!(first, second);

    let first_path = engine.generate().unwrap();
    let first_source = fs::read(&first_path).unwrap();
    let second_path = engine.generate().unwrap();
    assert_eq!(first_source, fs::read(second_path).unwrap());
}
