//! Snapshot specs
//!
//! `--save` writes the repository on exit and `--load` starts from it.

use crate::prelude::*;

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let path = path.to_str().unwrap();

    cli()
        .args(&["--no-builtin", "--save", path])
        .input(&["git checkout -b saved", "git add notes.md"])
        .passes();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["head"], "saved");
    assert_eq!(json["staged_changes"][0]["filename"], "notes.md");

    cli()
        .args(&["--no-builtin", "--load", path])
        .input(&["git branch", "git commit -m \"Notes\""])
        .passes()
        .stdout_has("  main\n* saved\n")
        .stdout_has("[saved c000002] Notes\n 1 file changed\n");
}
