use std::io::{self, BufRead, Write};

use crate::ops::controller::Prompter;

/// Line-based dialogs for the CLI. Questions go to `output` (stderr in the
/// binary) so `--json` stdout stays parseable.
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
    reply: Option<String>,
}

impl StdioPrompter<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        StdioPrompter::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        StdioPrompter {
            input,
            output,
            assume_yes: false,
            reply: None,
        }
    }

    /// Answer every confirmation with yes (`--yes`)
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Answer the next text prompt with `reply` instead of reading a line
    pub fn with_reply(mut self, reply: Option<String>) -> Self {
        self.reply = reply;
        self
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    /// None on EOF or a read error
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read answer");
                None
            }
        }
    }

    fn ask(&mut self, question: &str) {
        let _ = write!(self.output, "{} ", question);
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        self.ask(&format!("{} [y/N]", message));
        match self.read_line() {
            Some(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }

    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        if let Some(reply) = self.reply.take() {
            return Some(reply);
        }
        self.ask(&format!("{} [{}]", message, default));
        let answer = self.read_line()?;
        if answer.is_empty() {
            Some(default.to_string())
        } else {
            Some(answer)
        }
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> StdioPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        StdioPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: StdioPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn confirm_accepts_y_and_yes() {
        assert!(prompter("y\n").confirm("Sure?"));
        assert!(prompter("YES\n").confirm("Sure?"));
        assert!(!prompter("n\n").confirm("Sure?"));
        assert!(!prompter("\n").confirm("Sure?"));
    }

    #[test]
    fn confirm_on_eof_is_no() {
        let mut p = prompter("");
        assert!(!p.confirm("Sure?"));
        assert_eq!(output(p), "Sure? [y/N] ");
    }

    #[test]
    fn assume_yes_skips_the_question() {
        let mut p = prompter("").assume_yes(true);
        assert!(p.confirm("Sure?"));
        assert_eq!(output(p), "");
    }

    #[test]
    fn prompt_empty_line_keeps_default() {
        let mut p = prompter("\n");
        assert_eq!(p.prompt("Edit task:", "Buy milk"), Some("Buy milk".into()));
        assert_eq!(output(p), "Edit task: [Buy milk] ");
    }

    #[test]
    fn prompt_reads_reply_or_cancels_on_eof() {
        assert_eq!(
            prompter("Buy bread\r\n").prompt("Edit task:", "Buy milk"),
            Some("Buy bread".into())
        );
        assert_eq!(prompter("").prompt("Edit task:", "Buy milk"), None);
    }

    #[test]
    fn preset_reply_is_used_once() {
        let mut p = prompter("typed\n").with_reply(Some("preset".into()));
        assert_eq!(p.prompt("Edit task:", "x"), Some("preset".into()));
        assert_eq!(p.prompt("Edit task:", "x"), Some("typed".into()));
    }

    #[test]
    fn alert_writes_a_line() {
        let mut p = prompter("");
        p.alert("Please enter a task!");
        assert_eq!(output(p), "Please enter a task!\n");
    }
}
