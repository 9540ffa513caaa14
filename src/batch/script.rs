//! Job script templating

use std::path::Path;

/// A job script: header directives followed by the extractor command line
#[derive(Debug, Clone, PartialEq)]
pub struct BatchScript {
    header: Vec<String>,
    command: String,
}

impl BatchScript {
    /// Render the script for one archive
    ///
    /// `{index}`, `{archive}`, `{output_dir}` and `{extractor}` are replaced
    /// in every header line. The command line is
    /// `{extractor} {archive} {output_dir}`.
    pub fn render(header: &[String], extractor: &str, index: usize, archive: &Path, output_dir: &Path) -> Self {
        let archive = archive.display().to_string();
        let output_dir = output_dir.display().to_string();
        let index = index.to_string();

        let substitute = |line: &str| {
            line.replace("{index}", &index)
                .replace("{archive}", &archive)
                .replace("{output_dir}", &output_dir)
                .replace("{extractor}", extractor)
        };

        BatchScript {
            header: header.iter().map(|line| substitute(line.as_str())).collect(),
            command: format!("{} {} {}", extractor, shell_quote(&archive), shell_quote(&output_dir)),
        }
    }

    /// The extractor command line
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Full script text
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.header {
            text.push_str(line);
            text.push('\n');
        }
        text.push('\n');
        text.push_str(&self.command);
        text.push('\n');
        text
    }
}

/// Quote a word for a POSIX shell unless it is plainly safe
fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+:=,@%".contains(c));

    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
