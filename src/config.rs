//! Runner configuration.
//!
//! Resolved once at startup from command-line arguments and environment, then passed into the
//! run. Nothing below `main` reads the environment.

use anyhow::Context;
use clap::ValueEnum;
use hl7::Message;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Input path meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Format requested on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Choose by file extension: `.yaml`/`.yml` is YAML, anything else JSON.
    #[default]
    Auto,
    Json,
    Yaml,
}

/// Concrete format of the message tree being loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageFormat {
    Json,
    Yaml,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Runner configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RunConfig {
    input: InputSource,
    format: MessageFormat,
    output: Option<PathBuf>,
}

impl RunConfig {
    /// Create a new `RunConfig`.
    ///
    /// A missing input, or `-`, reads standard input. `FormatArg::Auto` on standard input
    /// means JSON.
    pub fn new(input: Option<PathBuf>, format: FormatArg, output: Option<PathBuf>) -> Self {
        let input = match input {
            Some(path) if path.as_os_str() != STDIN_MARKER => InputSource::File(path),
            _ => InputSource::Stdin,
        };
        let format = resolve_format(format, &input);

        Self {
            input,
            format,
            output,
        }
    }

    pub fn input(&self) -> &InputSource {
        &self.input
    }

    pub fn format(&self) -> MessageFormat {
        self.format
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Read and parse the configured message tree.
    pub fn load_message(&self) -> anyhow::Result<Message> {
        let text = match &self.input {
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read message from stdin")?;
                text
            }
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read message file {}", path.display()))?,
        };

        parse_message(&text, self.format)
    }
}

pub fn parse_message(text: &str, format: MessageFormat) -> anyhow::Result<Message> {
    let message = match format {
        MessageFormat::Json => Message::from_json_str(text)?,
        MessageFormat::Yaml => Message::from_yaml_str(text)?,
    };
    Ok(message)
}

fn resolve_format(format: FormatArg, input: &InputSource) -> MessageFormat {
    match format {
        FormatArg::Json => MessageFormat::Json,
        FormatArg::Yaml => MessageFormat::Yaml,
        FormatArg::Auto => {
            let is_yaml = match input {
                InputSource::File(path) => path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
                    }),
                InputSource::Stdin => false,
            };
            if is_yaml {
                MessageFormat::Yaml
            } else {
                MessageFormat::Json
            }
        }
    }
}
