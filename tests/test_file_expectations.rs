use std::fs::read_dir;
use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::run_test_for_file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_multiple_files() {
        // Read all files in the directory
        let files = read_dir(TEST_FILES_DIRECTORY)
            .expect("Failed to read test files directory")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect directory entries");

        assert!(!files.is_empty(), "No test files found");

        let total_files = files.len();

        for (file_idx, file) in files.iter().enumerate() {
            let file_path = file.path();

            println!(
                "   -- {:?} ({} of {})",
                file_path,
                file_idx + 1,
                total_files
            );

            if file_path.is_file() {
                run_test_for_file(&file_path);
            }
        }
    }
}
