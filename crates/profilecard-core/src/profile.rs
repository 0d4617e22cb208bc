//! Profile Type - The person record displayed in the card
//!
//! Constant for the process lifetime; the viewer never edits it.

use serde::{Deserialize, Serialize};

/// A person profile with the four fields the card renders.
///
/// All fields are expected to be non-empty for the card to look right,
/// but nothing enforces that; an empty field simply renders empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full display name
    pub full_name: String,

    /// Short biography paragraph
    pub bio: String,

    /// Avatar image URI, loaded by the host webview
    pub img_src: String,

    /// Job title shown under the name
    pub profession: String,
}

impl Profile {
    /// The built-in placeholder profile shown by the viewer.
    pub fn placeholder() -> Self {
        Self {
            full_name: "Sarah Chen".to_string(),
            bio: "Passionate software engineer with 5 years of experience in \
                  full-stack development. Loves creating intuitive user \
                  experiences and solving complex problems with elegant code \
                  solutions."
                .to_string(),
            img_src: "https://images.pexels.com/photos/3756679/pexels-photo-3756679.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_string(),
            profession: "Senior Software Engineer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_fields_are_non_empty() {
        let profile = Profile::placeholder();
        assert!(!profile.full_name.is_empty());
        assert!(!profile.bio.is_empty());
        assert!(!profile.img_src.is_empty());
        assert!(!profile.profession.is_empty());
    }

    #[test]
    fn test_placeholder_identity() {
        let profile = Profile::placeholder();
        assert_eq!(profile.full_name, "Sarah Chen");
        assert_eq!(profile.profession, "Senior Software Engineer");
        assert!(profile.img_src.starts_with("https://"));
    }
}
