use crate::common::command::{run_hashdiff_command, stdout_of, work_dir};
use crate::common::file::write_hash_list;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn read_new_list_from_stdin(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_hash_list(work_dir.path(), "old.txt", &["h1", "h2"]);

    let mut cmd = run_hashdiff_command(
        work_dir.path(),
        &["compare", "--format", "short", old.path_str(), "-"],
    );
    cmd.write_stdin("h1\n\n  h3  \n");

    let actual_output = stdout_of(&mut cmd)?;

    assert_eq!(actual_output, "A h3\nR h2\n".to_string());

    Ok(())
}

#[rstest]
fn read_old_list_from_stdin(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let new = write_hash_list(work_dir.path(), "new.txt", &["h1", "h3"]);

    let mut cmd = run_hashdiff_command(
        work_dir.path(),
        &["compare", "--format", "short", "-", new.path_str()],
    );
    cmd.write_stdin("h1\nh2\n");

    let actual_output = stdout_of(&mut cmd)?;

    assert_eq!(actual_output, "A h3\nR h2\n".to_string());

    Ok(())
}
