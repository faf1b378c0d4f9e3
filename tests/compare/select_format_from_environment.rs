use crate::common::command::{run_hashdiff_command, small_versions, stdout_of};
use crate::common::file::HashListSpec;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn select_format_from_environment(
    small_versions: (TempDir, HashListSpec, HashListSpec),
) -> Result<(), Box<dyn std::error::Error>> {
    let (work_dir, old, new) = small_versions;

    let mut cmd = run_hashdiff_command(
        work_dir.path(),
        &["compare", old.path_str(), new.path_str()],
    );
    cmd.env("HASHDIFF_FORMAT", "short");

    assert_eq!(stdout_of(&mut cmd)?, "A h3\nR h2\n".to_string());

    Ok(())
}

#[rstest]
fn command_line_format_overrides_environment(
    small_versions: (TempDir, HashListSpec, HashListSpec),
) -> Result<(), Box<dyn std::error::Error>> {
    let (work_dir, old, new) = small_versions;

    let mut cmd = run_hashdiff_command(
        work_dir.path(),
        &["compare", "--format", "json", old.path_str(), new.path_str()],
    );
    cmd.env("HASHDIFF_FORMAT", "short");

    let records: serde_json::Value = serde_json::from_str(&stdout_of(&mut cmd)?)?;

    assert_eq!(
        records,
        serde_json::json!([
            { "hash": "h3", "change_type": "added" },
            { "hash": "h2", "change_type": "removed" },
        ])
    );

    Ok(())
}
