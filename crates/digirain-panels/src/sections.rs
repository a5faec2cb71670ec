//! Content shown when a menu section is opened.

/// Text typed out when the `enter` section opens.
pub const ACCESS_GRANTED: &str = "ACCESS GRANTED... WELCOME TO THE MATRIX";

/// One content panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
    /// Text revealed character by character below the body, if any.
    pub typed: Option<String>,
}

impl Section {
    fn new(title: &str, lines: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            typed: None,
        }
    }

    fn with_typed(mut self, text: &str) -> Self {
        self.typed = Some(text.to_string());
        self
    }
}

/// Panel content for a menu key, matched case-insensitively.
///
/// Keys without built-in content get a generic panel naming the section.
pub fn section_for(key: &str) -> Section {
    match key.to_ascii_lowercase().as_str() {
        "enter" => Section::new("Welcome to the System", &["Initializing main sequence..."])
            .with_typed(ACCESS_GRANTED),
        "about" => Section::new(
            "System Information",
            &[
                "Matrix Protocol v2.0",
                "",
                "  * Status: Online",
                "  * Security: Maximum",
                "  * Access: Restricted",
            ],
        ),
        "contact" => Section::new(
            "Communication Portal",
            &[
                "Codename: ________________",
                "Message:  ________________",
                "",
                "[ TRANSMIT ]",
            ],
        ),
        other => Section {
            title: other.to_uppercase(),
            lines: vec![format!("Channel {other} online.")],
            typed: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sections() {
        let enter = section_for("Enter");
        assert_eq!(enter.title, "Welcome to the System");
        assert_eq!(enter.typed.as_deref(), Some(ACCESS_GRANTED));

        assert_eq!(section_for("ABOUT").title, "System Information");
        assert!(section_for("contact").typed.is_none());
    }

    #[test]
    fn test_unknown_section_is_generic() {
        let section = section_for("zion");
        assert_eq!(section.title, "ZION");
        assert_eq!(section.lines, ["Channel zion online."]);
    }
}
