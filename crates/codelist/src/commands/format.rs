//! `codelist format` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use codelist_config::{CliSettings, Config};
use codelist_markup::{CodeList, SAMPLE};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the format command.
#[derive(Args)]
pub(crate) struct FormatArgs {
    /// File containing the code ("-" for stdin; default: config, then stdin).
    #[arg(conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// File to write the fragment to (default: config, then stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover codelist.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Format the bundled sample code instead of reading input.
    #[arg(long)]
    sample: bool,

    /// Do not write a newline after the closing `</ul>`.
    #[arg(long)]
    no_trailing_newline: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the code comes from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
    Sample,
    Stdin,
    File(PathBuf),
}

impl FormatArgs {
    /// Execute the format command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input cannot be read
    /// or the fragment cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let explicit_stdin = self.input.as_deref() == Some(Path::new("-"));
        let cli_settings = CliSettings {
            input_path: self.input.filter(|_| !explicit_stdin),
            output_path: self.output,
            trailing_newline: self.no_trailing_newline.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }

        let source = resolve_source(self.sample, explicit_stdin, config.input.path.as_deref());
        let code = read_source(&source, std::io::stdin().lock())?;
        let fragment = render(&code, config.output.trailing_newline);

        match &config.output.path {
            Some(path) => {
                write_file(path, &fragment)?;
                output.success(&format!(
                    "Wrote {} lines to {}",
                    CodeList::new(&code).len(),
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(fragment.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Pick the input source. `--sample` wins, then an explicit `-`, then the
/// configured file, then stdin.
fn resolve_source(sample: bool, explicit_stdin: bool, configured: Option<&Path>) -> Source {
    if sample {
        Source::Sample
    } else if explicit_stdin {
        Source::Stdin
    } else if let Some(path) = configured {
        Source::File(path.to_path_buf())
    } else {
        Source::Stdin
    }
}

/// Read the code to format.
fn read_source(source: &Source, mut stdin: impl Read) -> Result<String, CliError> {
    let code = match source {
        Source::Sample => SAMPLE.to_owned(),
        Source::Stdin => {
            let mut code = String::new();
            stdin.read_to_string(&mut code)?;
            code
        }
        Source::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?,
    };
    tracing::info!(source = ?source, bytes = code.len(), "Read input");
    Ok(code)
}

/// Format `code`, optionally followed by a newline.
fn render(code: &str, trailing_newline: bool) -> String {
    let list = CodeList::new(code);
    let mut fragment = codelist_markup::format(code);
    if trailing_newline {
        fragment.push('\n');
    }
    tracing::info!(
        lines = list.len(),
        bytes = fragment.len(),
        "Formatted fragment"
    );
    fragment
}

/// Write the fragment to `path`, creating parent directories as needed.
fn write_file(path: &Path, fragment: &str) -> Result<(), CliError> {
    let wrap = |source: std::io::Error| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, fragment).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_source_precedence() {
        let configured = Path::new("Main.java");
        assert_eq!(resolve_source(true, true, Some(configured)), Source::Sample);
        assert_eq!(resolve_source(false, true, Some(configured)), Source::Stdin);
        assert_eq!(
            resolve_source(false, false, Some(configured)),
            Source::File(configured.to_path_buf())
        );
        assert_eq!(resolve_source(false, false, None), Source::Stdin);
    }

    #[test]
    fn test_read_source_stdin() {
        let code = read_source(&Source::Stdin, "a < b\n".as_bytes()).unwrap();
        assert_eq!(code, "a < b\n");
    }

    #[test]
    fn test_read_source_sample_ignores_stdin() {
        let code = read_source(&Source::Sample, "ignored".as_bytes()).unwrap();
        assert_eq!(code, SAMPLE);
    }

    #[test]
    fn test_read_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.java");
        std::fs::write(&path, "x > y").unwrap();

        let code = read_source(&Source::File(path), std::io::empty()).unwrap();
        assert_eq!(code, "x > y");
    }

    #[test]
    fn test_read_source_missing_file_names_path() {
        let err = read_source(
            &Source::File(PathBuf::from("/nonexistent/Main.java")),
            std::io::empty(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/Main.java"));
    }

    #[test]
    fn test_render_trailing_newline() {
        assert_eq!(
            render("a&b", true),
            "<ul class='ccode'>\n<li><pre>a&amp;b</pre></li></ul>\n"
        );
        assert_eq!(
            render("a&b", false),
            "<ul class='ccode'>\n<li><pre>a&amp;b</pre></li></ul>"
        );
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site/code/main.html");

        write_file(&path, "<ul></ul>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<ul></ul>");
    }
}
