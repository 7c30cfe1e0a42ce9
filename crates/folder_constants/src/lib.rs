// crates/folder_constants/src/lib.rs

//! Folder lists and default identifier names shared by the snippet
//! generator and its command-line front end.

/// Primary categorisation folders, in the order they are emitted.
pub const TOPIC_FOLDERS_DEFAULT: &[&str] = &[
    "20-Algorithms",
    "30-System-Design",
    "40-Android",
    "50-Backend",
    "60-CompSci",
    "70-Kotlin",
    "80-Tools",
];

/// Supplementary folders, only emitted on request.
pub const AUXILIARY_FOLDERS_DEFAULT: &[&str] = &["10-Concepts", "90-MOCs"];

pub const DEFAULT_TOPIC_VAR: &str = "TOPIC_FOLDERS";
pub const DEFAULT_AUXILIARY_VAR: &str = "AUXILIARY_FOLDERS";
pub const DEFAULT_COMBINED_VAR: &str = "SCAN_FOLDERS";
pub const DEFAULT_QUERY_VAR: &str = "folderQuery";

/// Separator placed between the quoted folder names of the query string.
pub const QUERY_SEPARATOR: &str = " or ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_folders_keep_numeric_order() {
        let mut sorted = TOPIC_FOLDERS_DEFAULT.to_vec();
        sorted.sort();
        assert_eq!(sorted, TOPIC_FOLDERS_DEFAULT);
        assert_eq!(TOPIC_FOLDERS_DEFAULT.len(), 7);
    }

    #[test]
    fn test_folder_lists_do_not_overlap() {
        for aux in AUXILIARY_FOLDERS_DEFAULT {
            assert!(!TOPIC_FOLDERS_DEFAULT.contains(aux), "{} listed twice", aux);
        }
    }
}
