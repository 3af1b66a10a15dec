//! Splitting raw API names into word tokens.

use tracing::trace;

use crate::{
    AcronymDictionary, InvalidName, Token, TokenSequence,
    error::InvalidReason,
    rules::{self, TailRule},
};

/// Tokenize `raw` with the built-in acronym dictionary.
pub fn tokenize(raw: &str) -> Result<TokenSequence, InvalidName> {
    Tokenizer::default().tokenize(raw)
}

/// Splits mixed-case identifiers into word tokens.
///
/// The tokenizer borrows its dictionary, so building one is free and any
/// number of tokenizers can share a dictionary across threads.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'d> {
    dictionary: &'d AcronymDictionary,
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new(AcronymDictionary::builtin())
    }
}

impl<'d> Tokenizer<'d> {
    pub fn new(dictionary: &'d AcronymDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &'d AcronymDictionary {
        self.dictionary
    }

    /// Split `raw` into tokens.
    ///
    /// Underscores are explicit word boundaries and do not appear in any
    /// token. One trailing underscore is allowed and dropped. Every other character of `raw` ends up in exactly one token.
    pub fn tokenize(&self, raw: &str) -> Result<TokenSequence, InvalidName> {
        validate(raw)?;

        // A single trailing underscore is an escape suffix (`class_`)
        let words = raw.strip_suffix('_').unwrap_or(raw);
        let mut tokens = Vec::new();
        for word in words.split('_') {
            tokens.extend(self.tokenize_word(word));
        }

        // validate() guarantees at least one non-empty word
        let sequence = TokenSequence::new(tokens).ok_or_else(InvalidName::empty)?;
        trace!(raw, tokens = %sequence, "tokenized name");
        Ok(sequence)
    }

    fn tokenize_word(&self, word: &str) -> Vec<Token> {
        let has_upper = word.bytes().any(|b| b.is_ascii_uppercase());
        let has_lower = word.bytes().any(|b| b.is_ascii_lowercase());
        if !has_upper {
            return vec![Token::plain(word)];
        }
        if !has_lower {
            return vec![Token::acronym(word)];
        }

        let (lead, runs) = split_runs(word);
        let mut tokens = Vec::new();
        let mut digits = "";
        if !lead.is_empty() {
            if lead.bytes().all(|b| b.is_ascii_digit()) {
                digits = lead;
            } else {
                tokens.push(Token::plain(lead));
            }
        }

        for (run, tail) in runs {
            self.resolve_run(run, tail, &mut tokens);
        }

        let mut tokens = merge_single_letters(tokens);
        // Leading digits belong to the first word
        if let Some(first) = tokens.first_mut() {
            first.prepend(digits);
        }
        tokens
    }

    /// Resolve one uppercase run and the lowercase/digit text following it.
    fn resolve_run(&self, run: &str, tail: &str, tokens: &mut Vec<Token>) {
        if tail.is_empty() {
            tokens.extend(self.resolve_terminal(run));
            return;
        }

        if run.len() == 1 {
            tokens.push(Token::plain(format!("{}{}", run, tail)));
            return;
        }

        match rules::match_tail(tail) {
            Some(TailRule { name, .. }) => {
                trace!(run, tail, rule = name, "tail absorbed into acronym");
                let mut resolved = self.resolve_terminal(run);
                if let Some(last) = resolved.last_mut() {
                    last.append(tail);
                }
                tokens.extend(resolved);
            }
            None => {
                // The run's last letter is the capital of the next word, and
                // letters left over after the acronym belong to that word too
                let head = &run[..run.len() - 1];
                let acronym = self.dictionary.longest_prefix(head).unwrap_or(head);
                let (acronym, rest) = run.split_at(acronym.len());
                tokens.push(Token::acronym(acronym));
                tokens.push(Token::plain(format!("{}{}", rest, tail)));
            }
        }
    }

    /// A run with nothing (or only an absorbed suffix) after it.
    ///
    /// The run is split only when dictionary entries cover it entirely
    /// (`IPID` -> `IP` `ID`); otherwise it stays one token.
    fn resolve_terminal(&self, run: &str) -> Vec<Token> {
        if run.len() == 1 {
            return vec![Token::plain(run)];
        }

        let mut tokens = Vec::new();
        let mut rest = run;
        while !rest.is_empty() {
            let Some(acronym) = self.dictionary.longest_prefix(rest) else {
                return vec![Token::acronym(run)];
            };
            let (matched, remainder) = rest.split_at(acronym.len());
            tokens.push(Token::acronym(matched));
            rest = remainder;
        }
        tokens
    }
}

/// Check the raw name against the accepted alphabet.
fn validate(raw: &str) -> Result<(), InvalidName> {
    if raw.is_empty() {
        return Err(InvalidName::empty());
    }

    let mut previous_underscore = true;
    for (offset, c) in raw.char_indices() {
        match c {
            '_' if previous_underscore => {
                return Err(InvalidName::at(raw, offset, 1, InvalidReason::EmptyWord));
            }
            '_' => previous_underscore = true,
            c if c.is_ascii_alphanumeric() => previous_underscore = false,
            c => {
                return Err(InvalidName::at(
                    raw,
                    offset,
                    c.len_utf8(),
                    InvalidReason::IllegalChar(c),
                ));
            }
        }
    }
    Ok(())
}

/// Split a word into its leading non-uppercase text and `(run, tail)` pairs,
/// where `run` is a maximal uppercase run and `tail` the lowercase/digit text
/// up to the next uppercase letter.
fn split_runs(word: &str) -> (&str, Vec<(&str, &str)>) {
    let bytes = word.as_bytes();
    let lead_end = bytes
        .iter()
        .position(u8::is_ascii_uppercase)
        .unwrap_or(bytes.len());

    let mut runs = Vec::new();
    let mut i = lead_end;
    while i < bytes.len() {
        let run_start = i;
        while i < bytes.len() && bytes[i].is_ascii_uppercase() {
            i += 1;
        }
        let tail_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_uppercase() {
            i += 1;
        }
        runs.push((&word[run_start..tail_start], &word[tail_start..i]));
    }

    (&word[..lead_end], runs)
}

/// Merge every single-letter token into the token that follows it.
///
/// A lone capital is not an acronym: `V` + `Port` reads as one word. A
/// single letter at the end of a word has nothing to merge into and stays.
fn merge_single_letters(tokens: Vec<Token>) -> Vec<Token> {
    let count = tokens.len();
    let mut merged: Vec<Token> = Vec::with_capacity(count);
    let mut pending = String::new();

    for (i, mut token) in tokens.into_iter().enumerate() {
        if !pending.is_empty() {
            token.prepend(&pending);
            pending.clear();
        }
        if token.text().len() == 1 && i + 1 < count {
            pending = token.text().to_string();
            continue;
        }
        merged.push(token);
    }

    merged
}
