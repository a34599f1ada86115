//! # Item Parser
//!
//! Turns shopping list lines into products with a quantity.
//!
//! ## Line Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "1 imported bottle of perfume at 27.99"                                │
//! │   │ └──────────┬──────────────┘    └─┬─┘                                │
//! │   │            │                     └── price: digits "." two digits   │
//! │   │            └── name: free text, may contain "imported" anywhere    │
//! │   └── quantity: digits                                                  │
//! │                                                                         │
//! │  ──► ParsedItem {                                                       │
//! │        quantity: 1,                                                     │
//! │        product: "bottle of perfume", 27.99, imported, general           │
//! │      }                                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Category Keywords
//! Matched case-insensitively as substrings of the cleaned name, first hit wins:
//!
//! | Category | Keywords                              |
//! |----------|---------------------------------------|
//! | book     | book                                  |
//! | food     | chocolate, chocolates, candy, food    |
//! | medical  | pills, headache, medicine, medical    |
//! | general  | anything else                         |

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Category, Product};

static INPUT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+)\s+(.+)\s+at\s+([0-9]+\.[0-9]{2})$")
        .expect("Invalid item line regex pattern")
});

static IMPORTED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bimported\b\s*").expect("Invalid imported regex pattern")
});

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Book, &["book"]),
    (Category::Food, &["chocolate", "chocolates", "candy", "food"]),
    (Category::Medical, &["pills", "headache", "medicine", "medical"]),
];

/// A product read from one line, with the quantity bought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    pub product: Product,
    pub quantity: i64,
}

/// Parser for `<quantity> <name> at <price>` lines.
///
/// ## Example
/// ```rust
/// use salestax_core::parser::ItemParser;
/// use salestax_core::product::Category;
///
/// let parsed = ItemParser::new().parse("1 imported bottle of perfume at 27.99").unwrap();
/// assert_eq!(parsed.quantity, 1);
/// assert_eq!(parsed.product.name(), "bottle of perfume");
/// assert!(parsed.product.is_imported());
/// assert_eq!(parsed.product.category(), Category::General);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemParser;

impl ItemParser {
    pub fn new() -> Self {
        ItemParser
    }

    /// Parses a single line.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidFormat`] when the line does not match the grammar
    /// - [`CoreError::InvalidArgument`] when the name is empty once "imported" is removed
    ///
    /// A quantity of 0 is accepted here; the basket rejects it.
    pub fn parse(&self, line: &str) -> CoreResult<ParsedItem> {
        let invalid = || CoreError::InvalidFormat {
            line: line.to_string(),
        };

        let captures = INPUT_PATTERN.captures(line.trim()).ok_or_else(invalid)?;
        let quantity: i64 = captures[1].parse().map_err(|_| invalid())?;
        let name = captures[2].trim();
        let price = Money::from_amount(&captures[3])?;

        let imported = IMPORTED_PATTERN.is_match(name);
        let clean_name = IMPORTED_PATTERN.replace_all(name, "");
        let clean_name = clean_name.trim();
        let category = detect_category(clean_name);

        debug!(
            quantity,
            name = clean_name,
            imported,
            %category,
            price = %price,
            "Parsed item line"
        );

        let product = Product::new(clean_name, price, imported, category)?;
        Ok(ParsedItem { product, quantity })
    }

    /// Parses multi-line text, skipping blank lines.
    ///
    /// Stops at the first bad line; no partial result is returned.
    pub fn parse_all(&self, text: &str) -> CoreResult<Vec<ParsedItem>> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.parse(line))
            .collect()
    }
}

/// Classifies a cleaned product name by keyword.
pub fn detect_category(name: &str) -> Category {
    let lower = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn parse(line: &str) -> ParsedItem {
        ItemParser::new().parse(line).unwrap()
    }

    #[test]
    fn test_parses_simple_input() {
        let result = parse("1 book at 12.49");

        assert_eq!(result.quantity, 1);
        assert_eq!(result.product.name(), "book");
        assert_eq!(result.product.price().cents(), 1249);
        assert!(!result.product.is_imported());
    }

    #[test]
    fn test_parses_imported_product() {
        let result = parse("1 imported bottle of perfume at 27.99");

        assert!(result.product.is_imported());
        assert_eq!(result.product.name(), "bottle of perfume");
        assert_eq!(result.product.category(), Category::General);
    }

    #[test]
    fn test_imported_anywhere_in_name_and_any_case() {
        let result = parse("3 box of Imported chocolates at 11.25");

        assert!(result.product.is_imported());
        assert_eq!(result.product.name(), "box of chocolates");
        assert_eq!(result.product.category(), Category::Food);
    }

    #[test]
    fn test_parses_quantity() {
        assert_eq!(parse("3 chocolate bars at 0.85").quantity, 3);
        assert_eq!(parse("0 chocolate bars at 0.85").quantity, 0);
    }

    #[test]
    fn test_detects_categories() {
        let category = |line: &str| parse(line).product.category();

        assert_eq!(category("1 book at 12.49"), Category::Book);
        assert_eq!(category("1 chocolate bar at 0.85"), Category::Food);
        assert_eq!(category("1 box of chocolates at 10.00"), Category::Food);
        assert_eq!(category("1 bag of CANDY at 2.00"), Category::Food);
        assert_eq!(category("1 packet of headache pills at 9.75"), Category::Medical);
        assert_eq!(category("1 bottle of perfume at 18.99"), Category::General);
        assert_eq!(category("1 music CD at 14.99"), Category::General);
    }

    #[test]
    fn test_whitespace_around_line() {
        let result = parse("   2 book at 12.49   ");
        assert_eq!(result.quantity, 2);
        assert_eq!(result.product.name(), "book");
    }

    #[test]
    fn test_rejects_invalid_format() {
        for line in [
            "invalid input",
            "book at 12.49",
            "1 book at 12.4",
            "1 book at 12.499",
            "1 book 12.49",
            "-1 book at 12.49",
            "1 at 12.49",
        ] {
            assert_eq!(
                ItemParser::new().parse(line),
                Err(CoreError::InvalidFormat {
                    line: line.to_string()
                }),
                "{line:?} should not parse"
            );
        }
    }

    #[test]
    fn test_rejects_name_that_is_only_imported() {
        let err = ItemParser::new().parse("1 imported at 1.00").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidArgument(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_parse_all() {
        let input = "1 book at 12.49\n1 music CD at 14.99\n1 chocolate bar at 0.85\n";
        let results = ItemParser::new().parse_all(input).unwrap();

        let names: Vec<_> = results.iter().map(|r| r.product.name()).collect();
        assert_eq!(names, ["book", "music CD", "chocolate bar"]);
    }

    #[test]
    fn test_parse_all_ignores_blank_lines() {
        let input = "1 book at 12.49\n\n   \n1 music CD at 14.99\r\n";
        assert_eq!(ItemParser::new().parse_all(input).unwrap().len(), 2);
        assert!(ItemParser::new().parse_all("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_all_fails_on_any_bad_line() {
        let input = "1 book at 12.49\nnot an item\n1 music CD at 14.99";
        assert_eq!(
            ItemParser::new().parse_all(input),
            Err(CoreError::InvalidFormat {
                line: "not an item".to_string()
            })
        );
    }
}
