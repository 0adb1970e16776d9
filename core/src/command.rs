use crate::types::TimerId;
use serde::{Deserialize, Serialize};

/// All user-issued commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Input { text: String },
    Start,
    Pause,
    Reset,
    ToggleTheme,
    GetState,
    Quit,
}

impl Command {
    /// Parse one line typed at the interactive prompt.
    ///
    /// Control words are matched case-insensitively. Any other line that
    /// contains a digit is treated as amount input. Returns `None` for
    /// lines that are neither.
    pub fn parse_line(line: &str) -> Option<Self> {
        let word = line.trim().to_ascii_lowercase();
        let cmd = match word.as_str() {
            "s" | "start"             => Command::Start,
            "p" | "pause" | "stop"    => Command::Pause,
            "r" | "reset"             => Command::Reset,
            "t" | "theme"             => Command::ToggleTheme,
            "" | "show" | "state"     => Command::GetState,
            "q" | "quit" | "exit"     => Command::Quit,
            _ if word.chars().any(|c| c.is_ascii_digit()) => Command::Input {
                text: line.trim().to_string(),
            },
            _ => return None,
        };
        Some(cmd)
    }
}

/// Everything the dispatcher accepts: user commands and timer firings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Command(Command),
    Tick(TimerId),
}

impl From<Command> for Message {
    fn from(cmd: Command) -> Self { Message::Command(cmd) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_words_parse() {
        assert_eq!(Command::parse_line("START"), Some(Command::Start));
        assert_eq!(Command::parse_line(" p "), Some(Command::Pause));
        assert_eq!(Command::parse_line("reset"), Some(Command::Reset));
        assert_eq!(Command::parse_line(""), Some(Command::GetState));
        assert_eq!(Command::parse_line("q"), Some(Command::Quit));
    }

    #[test]
    fn digit_lines_become_input() {
        assert_eq!(
            Command::parse_line("12,00,000"),
            Some(Command::Input { text: "12,00,000".into() })
        );
        assert_eq!(Command::parse_line("hello"), None);
    }

    #[test]
    fn ipc_json_uses_cmd_tag() {
        let cmd: Command = serde_json::from_str(r#"{"cmd":"input","text":"1000"}"#).unwrap();
        assert_eq!(cmd, Command::Input { text: "1000".into() });
        let cmd: Command = serde_json::from_str(r#"{"cmd":"toggle_theme"}"#).unwrap();
        assert_eq!(cmd, Command::ToggleTheme);
    }
}
