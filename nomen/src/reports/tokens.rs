//! Tokens command report data structures.

use nomen_core::{InvalidName, TokenSequence};
use serde::{Serialize, Serializer};

use super::{
    format_table,
    output::{Output, Report},
};

/// Token sequence of one raw name.
#[derive(Debug, Serialize)]
pub struct TokensEntry {
    pub name: String,
    #[serde(serialize_with = "serialize_result")]
    pub tokens: Result<TokenSequence, InvalidName>,
}

fn serialize_result<S: Serializer>(
    tokens: &Result<TokenSequence, InvalidName>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match tokens {
        Ok(tokens) => tokens.serialize(serializer),
        Err(e) => serializer.collect_str(e),
    }
}

/// Report data from tokenizing names.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TokensReport {
    pub entries: Vec<TokensEntry>,
}

impl TokensReport {
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.tokens.is_err()).count()
    }
}

impl Report for TokensReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            match &entry.tokens {
                Ok(tokens) => {
                    out.section(&entry.name);
                    let rows: Vec<Vec<String>> = tokens
                        .iter()
                        .map(|token| vec![token.text().to_string(), token.kind().to_string()])
                        .collect();
                    for line in format_table(&rows) {
                        out.preformatted(&format!("  {}", line));
                    }
                }
                Err(e) => out.diagnostic(None, miette::Report::new(e.clone())),
            }
        }
    }
}
