//! Parsing of `NAME`, `NAME=QTY` and `NAME:QTY` selection tokens

use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SelectionParseError;
use crate::models::Selection;

static SELECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Quantity is split off the last separator so recipe names may contain ':' or '='
    Regex::new(r"^(?P<name>[^=:].*?)(?:\s*[=:]\s*(?P<qty>[^=:]*))?$").expect("selection regex is valid")
});

impl FromStr for Selection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let caps = SELECTION_RE
            .captures(s)
            .ok_or(SelectionParseError::Empty)?;

        let name = caps["name"].trim();
        if name.is_empty() {
            return Err(SelectionParseError::Empty);
        }

        let quantity = match caps.name("qty") {
            None => NonZeroU32::MIN,
            Some(raw) => raw.as_str().trim().parse::<NonZeroU32>().map_err(|_| {
                SelectionParseError::InvalidQuantity {
                    recipe: name.to_string(),
                    quantity: raw.as_str().to_string(),
                }
            })?,
        };

        Ok(Selection::new(name, quantity))
    }
}
