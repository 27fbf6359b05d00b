//! CSV import for likert-style question banks.
//!
//! Content teams maintain screening items in spreadsheets; this loader turns
//! an export with `id,prompt,options,scoring` columns (cells pipe-separated)
//! into a validated [`QuestionBank`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{QuestionBank, ScaledQuestion};

#[derive(Debug, thiserror::Error)]
pub enum BankImportError {
    #[error("failed to read question bank export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("question {id} has {options} option(s) but {scoring} score(s)")]
    ScoringMismatch { id: u16, options: usize, scoring: usize },
    #[error("question {id} carries unparsable score '{value}'")]
    InvalidScore { id: u16, value: String },
    #[error("question {id} lists no options")]
    NoOptions { id: u16 },
    #[error("export contains no questions")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct BankRow {
    id: u16,
    prompt: String,
    options: String,
    scoring: String,
}

pub struct ScaledBankImporter;

impl ScaledBankImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<QuestionBank, BankImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionBank, BankImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut questions = Vec::new();
        for record in csv_reader.deserialize::<BankRow>() {
            let row = record?;
            questions.push(parse_row(row)?);
        }

        if questions.is_empty() {
            return Err(BankImportError::Empty);
        }

        Ok(QuestionBank::Scaled(questions))
    }
}

fn parse_row(row: BankRow) -> Result<ScaledQuestion, BankImportError> {
    let options: Vec<String> = row
        .options
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect();

    if options.is_empty() {
        return Err(BankImportError::NoOptions { id: row.id });
    }

    let mut scoring = Vec::new();
    for cell in row.scoring.split('|').map(str::trim) {
        if cell.is_empty() {
            continue;
        }
        let value = cell
            .parse::<u32>()
            .map_err(|_| BankImportError::InvalidScore {
                id: row.id,
                value: cell.to_string(),
            })?;
        scoring.push(value);
    }

    if scoring.len() != options.len() {
        return Err(BankImportError::ScoringMismatch {
            id: row.id,
            options: options.len(),
            scoring: scoring.len(),
        });
    }

    Ok(ScaledQuestion {
        id: row.id,
        prompt: row.prompt,
        options,
        scoring,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "\
id,prompt,options,scoring
1,How often do you lose track of time?,Never|Sometimes|Often,0|1|2
2,How often do you feel restless?,Never|Sometimes|Often,0|2|4
";

    #[test]
    fn imports_a_two_question_bank() {
        let bank = ScaledBankImporter::from_reader(Cursor::new(EXPORT)).expect("bank imports");
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.max_score(), 6);
    }

    #[test]
    fn rejects_mismatched_scoring() {
        let export = "id,prompt,options,scoring\n1,Item,Never|Often,0|1|2\n";
        match ScaledBankImporter::from_reader(Cursor::new(export)) {
            Err(BankImportError::ScoringMismatch {
                id: 1,
                options: 2,
                scoring: 3,
            }) => {}
            other => panic!("expected scoring mismatch, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparsable_scores() {
        let export = "id,prompt,options,scoring\n3,Item,Never|Often,0|high\n";
        match ScaledBankImporter::from_reader(Cursor::new(export)) {
            Err(BankImportError::InvalidScore { id: 3, value }) => assert_eq!(value, "high"),
            other => panic!("expected invalid score, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_exports() {
        let export = "id,prompt,options,scoring\n";
        assert!(matches!(
            ScaledBankImporter::from_reader(Cursor::new(export)),
            Err(BankImportError::Empty)
        ));
    }
}
