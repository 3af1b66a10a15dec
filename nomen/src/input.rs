//! Reading raw names from arguments, files or stdin.

use std::{
    fs,
    io::{self, BufRead, IsTerminal},
    path::Path,
};

use eyre::{Context, Result, bail};

/// A raw name and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub name: String,
    /// 1-based line number when read from a file or stdin
    pub line: Option<usize>,
}

impl RawInput {
    pub fn location(&self) -> Option<String> {
        self.line.map(|line| format!("line {}", line))
    }
}

/// Collect names from `names`, then `file`; fall back to stdin when neither
/// is given.
pub fn read_names(names: &[String], file: Option<&Path>) -> Result<Vec<RawInput>> {
    let mut inputs: Vec<RawInput> = names
        .iter()
        .map(|name| RawInput {
            name: name.clone(),
            line: None,
        })
        .collect();

    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read names from {}", path.display()))?;
        inputs.extend(parse_lines(content.lines()));
    }

    if names.is_empty() && file.is_none() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            bail!("no names given; pass names as arguments, use --file, or pipe them on stdin");
        }
        let lines = stdin
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .wrap_err("Failed to read names from stdin")?;
        inputs.extend(parse_lines(lines.iter().map(String::as_str)));
    }

    Ok(inputs)
}

/// One name per line; blank lines and `#` comments are skipped.
fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<RawInput> {
    lines
        .enumerate()
        .filter_map(|(i, line)| {
            let line_trimmed = line.trim();
            if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
                None
            } else {
                Some(RawInput {
                    name: line_trimmed.to_string(),
                    line: Some(i + 1),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let inputs = parse_lines("# attributes\nenterpriseID\n\n  VPort  \n".lines());
        assert_eq!(
            inputs,
            vec![
                RawInput {
                    name: "enterpriseID".to_string(),
                    line: Some(2)
                },
                RawInput {
                    name: "VPort".to_string(),
                    line: Some(4)
                },
            ]
        );
    }

    #[test]
    fn test_read_names_from_args_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "zoneIds\n").unwrap();

        let inputs = read_names(&["VM".to_string()], Some(&path)).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].location(), None);
        assert_eq!(inputs[1].location().as_deref(), Some("line 1"));
    }

    #[test]
    fn test_read_names_missing_file() {
        let err = read_names(&[], Some(Path::new("/nonexistent/names.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read names"));
    }
}
