use serde::{Deserialize, Serialize};

/// Difficulty bucket of a problem. Displayed with the site's own names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Low,
    Medium,
    High,
}

impl Category {
    /// Render order of the sections.
    pub const ALL: [Category; 3] = [Category::Low, Category::Medium, Category::High];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Low => "Easy",
            Category::Medium => "Medium",
            Category::High => "Hard",
        }
    }

    /// Category of a section from its summary label, e.g. "Easy (120)".
    /// Only the first token counts; anything not easy or hard is Medium.
    pub fn from_section_label(label: &str) -> Category {
        let token = label
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();

        if token.starts_with("easy") {
            Category::Low
        } else if token.starts_with("hard") {
            Category::High
        } else {
            Category::Medium
        }
    }

    /// Recognise a difficulty line of a scraped row ("Easy", "Med.", "Hard").
    /// Returns None for lines that are not a difficulty at all.
    pub fn from_row_line(line: &str) -> Option<Category> {
        let lower = line.to_lowercase();
        if lower.starts_with("easy") {
            Some(Category::Low)
        } else if lower.starts_with("hard") {
            Some(Category::High)
        } else if lower.starts_with("med") {
            Some(Category::Medium)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn section_labels() {
        assert_eq!(Category::from_section_label("Hard (42)"), Category::High);
        assert_eq!(Category::from_section_label("Med. (10)"), Category::Medium);
        assert_eq!(Category::from_section_label("Easy"), Category::Low);
        assert_eq!(Category::from_section_label("  EASY (3)"), Category::Low);
        assert_eq!(Category::from_section_label("Unknown"), Category::Medium);
        assert_eq!(Category::from_section_label(""), Category::Medium);
    }

    #[test]
    fn only_first_token_counts() {
        assert_eq!(Category::from_section_label("Medium Hard"), Category::Medium);
    }

    #[test]
    fn row_lines() {
        assert_eq!(Category::from_row_line("Med."), Some(Category::Medium));
        assert_eq!(Category::from_row_line("hard"), Some(Category::High));
        assert_eq!(Category::from_row_line("55.2%"), None);
    }
}
