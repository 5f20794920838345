//! Keyword replies for a finished intake.
//!
//! The table is scanned in order and the first keyword contained anywhere in
//! the input wins, so row order is the tie-break between overlapping
//! keywords ("hello, what offers?" gets the `hello` reply).

use crate::error::ScriptError;
use crate::script::KeywordReply;
use urbanease_core::Result;

/// Ordered, immutable keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: Vec<KeywordReply>,
}

impl ResponseTable {
    /// Builds a table, lowercasing keywords so they can match lowercased input.
    ///
    /// # Errors
    ///
    /// Returns an error if a keyword is blank.
    pub fn new(entries: Vec<KeywordReply>) -> Result<Self, ScriptError> {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                let keyword = entry.keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(ScriptError::EmptyKeyword { position });
                }
                Ok(KeywordReply::new(keyword, entry.reply))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Wraps the built-in table, whose keywords are known to be lowercase
    /// and non-blank.
    pub(crate) fn builtin(entries: Vec<KeywordReply>) -> Self {
        Self { entries }
    }

    /// Returns the first entry whose keyword occurs in `normalized`.
    #[must_use]
    pub fn lookup(&self, normalized: &str) -> Option<&KeywordReply> {
        self.entries
            .iter()
            .find(|entry| normalized.contains(entry.keyword.as_str()))
    }
}

/// Picks the reply for free text once the intake is done.
#[derive(Debug, Clone)]
pub struct Responder {
    table: ResponseTable,
    fallback: String,
}

impl Responder {
    #[must_use]
    pub fn new(table: ResponseTable, fallback: impl Into<String>) -> Self {
        Self {
            table,
            fallback: fallback.into(),
        }
    }

    /// Returns the matching keyword reply, or the fallback.
    ///
    /// `normalized` is expected to be lowercased already.
    #[must_use]
    pub fn respond(&self, normalized: &str) -> &str {
        match self.table.lookup(normalized) {
            Some(entry) => {
                tracing::debug!(keyword = %entry.keyword, "keyword matched");
                &entry.reply
            }
            None => {
                tracing::debug!("no keyword matched");
                &self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Script;

    fn default_responder() -> Responder {
        let script = Script::default();
        let table = ResponseTable::new(script.keywords).expect("default table");
        Responder::new(table, script.no_match)
    }

    #[test]
    fn keyword_anywhere_in_text_matches() {
        let responder = default_responder();
        assert_eq!(
            responder.respond("any offers this week?"),
            "We have seasonal offers coming soon. Stay tuned on the Explore page!"
        );
    }

    #[test]
    fn unmatched_text_gets_fallback() {
        let responder = default_responder();
        assert!(responder.respond("xyz").starts_with("Need to share another request?"));
    }

    #[test]
    fn earlier_rows_win_ties() {
        let responder = default_responder();
        assert!(responder.respond("hello, how do i contact you?").starts_with("Hello!"));
        assert!(responder.respond("contact me about offers").starts_with("We have seasonal"));
    }

    #[test]
    fn keywords_are_lowercased_on_construction() {
        let table = ResponseTable::new(vec![KeywordReply::new(" Help ", "Sure!")])
            .expect("valid table");
        assert_eq!(table.lookup("i need help").map(|e| e.reply.as_str()), Some("Sure!"));
    }

    #[test]
    fn blank_keyword_fails_construction() {
        let result = ResponseTable::new(vec![
            KeywordReply::new("offers", "soon"),
            KeywordReply::new("", "everything"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_table_always_falls_back() {
        let table = ResponseTable::new(Vec::new()).expect("empty table is valid");
        assert_eq!(table.lookup("hello"), None);
        let responder = Responder::new(table, "fallback");
        assert_eq!(responder.respond("hello"), "fallback");
    }
}
