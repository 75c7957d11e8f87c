use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn labgrade() -> Command {
    cargo_bin_cmd!("labgrade")
}

/// Command running in `dir` with no user or environment config in scope
pub fn labgrade_in(dir: &Path) -> Command {
    let mut cmd = labgrade();
    cmd.current_dir(dir)
        .env("LABGRADE_CONFIG_DIR", dir.join(".user-config"))
        .env_remove("LABGRADE_CONFIG")
        .env_remove("LABGRADE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a rubric with explicit ids and the given percentage weights
#[allow(dead_code)]
pub fn write_rubric(dir: &Path, file: &str, weights: &[(&str, &str, f64)]) -> PathBuf {
    let mut content = String::from(
        "id = \"rb-test\"\nname = \"Test Rubric\"\nlab_type = \"ML\"\n",
    );
    for (id, name, weight) in weights {
        content.push_str(&format!(
            "\n[[criteria]]\nid = \"{}\"\nname = \"{}\"\nweight = {:.1}\n",
            id, name, weight
        ));
    }
    let path = dir.join(file);
    fs::write(&path, content).unwrap();
    path
}
