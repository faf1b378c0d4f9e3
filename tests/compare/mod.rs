mod print_nothing_to_report_for_identical_lists;
mod read_new_list_from_stdin;
mod report_added_and_removed_hashes;
mod select_format_from_environment;
