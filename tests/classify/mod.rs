mod classify_empty_lists;
