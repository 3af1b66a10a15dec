//! Convert command report data structures.

use clap::ValueEnum;
use indexmap::IndexMap;
use nomen_core::InvalidName;
use nomen_render::{IdiomaticName, Language};
use serde::{Serialize, Serializer};

use super::{
    format_table,
    output::{Output, Report},
};

/// Which kind of identifier to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    /// Attribute, field or variable name
    #[default]
    Attribute,
    /// Type or class name
    Type,
    /// File stem
    File,
}

/// One converted raw name.
#[derive(Debug, Serialize)]
pub struct ConvertRow {
    /// The raw name as given.
    pub name: String,
    /// Line in the input file, when read from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Rendered names, in the requested language order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub names: IndexMap<Language, IdiomaticName>,
    /// Why the name could not be tokenized.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_error"
    )]
    pub error: Option<InvalidName>,
}

fn serialize_error<S: Serializer>(error: &Option<InvalidName>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.collect_str(e),
        None => serializer.serialize_none(),
    }
}

/// Report data from a batch conversion.
#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub kind: NameKind,
    pub languages: Vec<Language>,
    pub rows: Vec<ConvertRow>,
}

impl ConvertReport {
    /// Number of names that failed to convert.
    pub fn failures(&self) -> usize {
        self.rows.iter().filter(|row| row.error.is_some()).count()
    }

    fn table_rows(&self) -> Vec<Vec<String>> {
        let header = std::iter::once("name".to_string())
            .chain(self.languages.iter().map(|l| l.to_string()))
            .collect();

        let body = self
            .rows
            .iter()
            .filter(|row| row.error.is_none())
            .map(|row| {
                std::iter::once(row.name.clone())
                    .chain(row.names.values().map(|name| {
                        if name.escaped {
                            format!("{} (reserved)", name)
                        } else {
                            name.to_string()
                        }
                    }))
                    .collect()
            });

        std::iter::once(header).chain(body).collect()
    }
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        if self.rows.len() > self.failures() {
            for line in format_table(&self.table_rows()) {
                out.preformatted(&line);
            }
        }

        for row in &self.rows {
            if let Some(error) = &row.error {
                let location = row.line.map(|line| format!("line {}", line));
                out.diagnostic(location.as_deref(), miette::Report::new(error.clone()));
            }
        }
    }
}
