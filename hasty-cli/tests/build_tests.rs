use hasty_cli::EmitMode;
use std::fs;
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../demos/counter").join(name)
}

fn test_out_dir(tag: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../target/hasty-cli-tests")
        .join(format!("{}-{tag}", std::process::id()))
}

#[test]
fn cli_build_emits_jsx_file() {
    let out_dir = test_out_dir("jsx");
    let written = hasty_cli::build_cmd(&demo("Component.hsty"), Some(out_dir.as_path()), EmitMode::Jsx)
        .expect("build jsx");

    assert_eq!(written, vec![out_dir.join("Component.jsx")]);
    let content = fs::read_to_string(&written[0]).expect("read jsx output");
    assert!(content.starts_with("import {useState} from 'react'"));
    assert!(content.contains("const [count, setCount] = useState(0)"));
    assert!(content.contains("<p>Hello from HastyUI!</p>"));
    assert!(content.contains("<button className='px-2 py-1 border'>+</button>"));
    assert!(content.ends_with("}\n"));
}

#[test]
fn cli_build_emits_stage_dumps() {
    let out_dir = test_out_dir("dumps");
    let input = demo("Greeting.hsty");

    let tokens = hasty_cli::build_cmd(&input, Some(out_dir.as_path()), EmitMode::Tokens).expect("tokens");
    let dump = fs::read_to_string(&tokens[0]).expect("read tokens");
    assert!(tokens[0].ends_with("Greeting.tokens.txt"));
    assert!(dump.contains("Bracket"));

    let ast = hasty_cli::build_cmd(&input, Some(out_dir.as_path()), EmitMode::Ast).expect("ast");
    assert!(fs::read_to_string(&ast[0]).unwrap().contains("CallExpression"));

    let ir = hasty_cli::build_cmd(&input, Some(out_dir.as_path()), EmitMode::Ir).expect("ir");
    assert!(fs::read_to_string(&ir[0]).unwrap().contains("ExpressionStatement"));
}

#[test]
fn cli_build_directory_only_compiles_hsty_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let src = tmp.path().join("src");
    fs::create_dir_all(src.join("nested")).unwrap();
    fs::write(src.join("App.hsty"), r#"Text("app")"#).unwrap();
    fs::write(src.join("nested/Card.hsty"), r#"HStack { Text("card") }"#).unwrap();
    fs::write(src.join("readme.md"), "# not a component").unwrap();

    let out = tmp.path().join("out");
    let written = hasty_cli::build_cmd(&src, Some(out.as_path()), EmitMode::Jsx).expect("build dir");

    assert_eq!(written, vec![out.join("App.jsx"), out.join("nested/Card.jsx")]);
    assert!(fs::read_to_string(out.join("nested/Card.jsx")).unwrap().contains("<p>card</p>"));
    assert!(!out.join("readme.jsx").exists());
}

#[test]
fn cli_build_reports_compile_errors_with_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let bad = tmp.path().join("Bad.hsty");
    fs::write(&bad, r#"Foo("x")"#).unwrap();

    let err = hasty_cli::build_cmd(&bad, Some(tmp.path()), EmitMode::Jsx).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Bad.hsty"));
    assert!(msg.contains("no component defined for Foo"));
    assert!(!tmp.path().join("Bad.jsx").exists());
}

#[test]
fn cli_show_prints_source_and_output() {
    let shown = hasty_cli::show_cmd(&demo("Greeting.hsty")).expect("show");
    let src_at = shown.find("Text(\"Welcome back\")").expect("source present");
    let out_at = shown.find("<p>Welcome back</p>").expect("output present");
    assert!(src_at < out_at);
}
