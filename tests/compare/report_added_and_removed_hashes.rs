use crate::common::command::{file_versions, run_hashdiff_command, stdout_of};
use crate::common::file::HashListSpec;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_added_and_removed_hashes(
    file_versions: (TempDir, HashListSpec, HashListSpec),
) -> Result<(), Box<dyn std::error::Error>> {
    let (work_dir, old, new) = file_versions;

    let expected_output = "Added hashes:
        added:      485F9D544C6AF6B3E634022E4FB0132DC89A7EA864E6FE5EF8E6227E84AC670E
        added:      caccfde4071a22b06a5c7897c54cfe2d8812a254714882e80c7ff75aac6fa187

Removed hashes:
        removed:    813c9c630a770b91a829b072ae69b3582092a51d8406d5c3c18da1e3080f3452

"
    .to_string();
    let actual_output = stdout_of(&mut run_hashdiff_command(
        work_dir.path(),
        &["compare", old.path_str(), new.path_str()],
    ))?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
