use assert_cmd::Command;

pub fn trigwords_cmd() -> Command {
    let mut cmd = Command::cargo_bin("trigwords").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
