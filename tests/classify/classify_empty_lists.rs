use crate::common::command::{run_hashdiff_command, stdout_of, work_dir};
use crate::common::file::write_hash_list;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn classify_empty_lists(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_hash_list(work_dir.path(), "old.txt", &[]);
    let new = write_hash_list(work_dir.path(), "new.txt", &[]);

    let actual_output = stdout_of(&mut run_hashdiff_command(
        work_dir.path(),
        &["classify", old.path_str(), new.path_str()],
    ))?;

    assert_eq!(actual_output, "[]\n".to_string());

    Ok(())
}

#[rstest]
fn classify_against_empty_old_list(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_hash_list(work_dir.path(), "old.txt", &[]);
    let new = write_hash_list(work_dir.path(), "new.txt", &["b", "a"]);

    let actual_output = stdout_of(&mut run_hashdiff_command(
        work_dir.path(),
        &["classify", "--lines", old.path_str(), new.path_str()],
    ))?;

    assert_eq!(
        actual_output,
        "{\"hash\":\"a\",\"change_type\":\"added\"}\n{\"hash\":\"b\",\"change_type\":\"added\"}\n"
            .to_string()
    );

    Ok(())
}
