use std::process::Command;

#[test]
fn test_main_prints_hello_world() {
    let output = Command::new(env!("CARGO_BIN_EXE_my-project"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, b"Hello world\n");
    assert!(output.stderr.is_empty());
}
