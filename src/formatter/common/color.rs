use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Color only when writing to a terminal.
    #[default]
    #[serde(alias = "auto")]
    Automatic,
    Always,
    Never,
}

impl ColorSetting {
    pub fn use_color(self, is_terminal: bool) -> bool {
        match self {
            ColorSetting::Automatic => is_terminal,
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}

pub(crate) mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_names() {
        let setting: ColorSetting = serde_json::from_str(r#""auto""#).unwrap();
        assert_eq!(setting, ColorSetting::Automatic);
        let setting: ColorSetting = serde_json::from_str(r#""never""#).unwrap();
        assert_eq!(setting, ColorSetting::Never);
        assert!(!ColorSetting::Automatic.use_color(false));
        assert!(ColorSetting::Always.use_color(false));
    }
}
