use crate::common::command::{OLD_HASHES, run_hashdiff_command, stdout_of, work_dir};
use crate::common::file::write_hash_list;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_to_report_for_identical_lists(
    work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_hash_list(work_dir.path(), "old.txt", &OLD_HASHES);
    let mut reordered = OLD_HASHES.to_vec();
    reordered.reverse();
    reordered.push(OLD_HASHES[0]);
    let new = write_hash_list(work_dir.path(), "new.txt", &reordered);

    let actual_output = stdout_of(&mut run_hashdiff_command(
        work_dir.path(),
        &["compare", "--stat", old.path_str(), new.path_str()],
    ))?;

    assert_eq!(
        actual_output,
        "nothing to report\n0 added, 0 removed, 3 unchanged\n".to_string()
    );

    Ok(())
}

#[rstest]
fn print_nothing_to_report_for_empty_lists(
    work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_hash_list(work_dir.path(), "old.txt", &[]);
    let new = write_hash_list(work_dir.path(), "new.txt", &[]);

    let actual_output = stdout_of(&mut run_hashdiff_command(
        work_dir.path(),
        &["compare", "--filter", "ARU", old.path_str(), new.path_str()],
    ))?;

    assert_eq!(actual_output, "nothing to report\n".to_string());

    Ok(())
}
