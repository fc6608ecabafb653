//! Filter Predicate Builder
//!
//! Turns the expanded term set and the structural request parameters into a declarative
//! predicate tree. The catalog store decides how to execute it; [`FilterPredicate::matches`]
//! is the reference evaluation used by the in-memory catalog.

use super::types::{SearchRequest, TermSet};
use crate::catalog::types::{CatalogProduct, STATUS_PUBLISHED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Slug,
    Description,
    CategoryName,
    CategorySlug,
    /// Satisfied when any of the product's tags satisfies the test.
    TagName,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Price,
    Stock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    Active,
    Deleted,
}

/// A node of the filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    /// Case-insensitive substring containment. `needle` is stored lowercased.
    Contains { field: TextField, needle: String },
    Equals { field: TextField, value: String },
    Flag { field: FlagField, expected: bool },
    Range {
        field: NumericField,
        gte: Option<f64>,
        lte: Option<f64>,
    },
    GreaterThan { field: NumericField, value: f64 },
}

/// Top-level predicate handed to the catalog store: a conjunction of clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPredicate {
    pub root: Predicate,
}

/// Fields every search term is tested against.
const TERM_FIELDS: [TextField; 5] = [
    TextField::Name,
    TextField::Slug,
    TextField::Description,
    TextField::CategoryName,
    TextField::TagName,
];

impl FilterPredicate {
    pub fn build(terms: &TermSet, request: &SearchRequest) -> Self {
        let mut clauses = visibility_clauses();

        let term_branches = terms
            .terms
            .iter()
            .flat_map(|term| {
                TERM_FIELDS.into_iter().map(move |field| Predicate::Contains {
                    field,
                    needle: term.clone(),
                })
            })
            .collect();
        clauses.push(Predicate::Any(term_branches));

        if let Some(category) = &request.category {
            let needle = category.to_lowercase();
            clauses.push(Predicate::Any(vec![
                Predicate::Contains {
                    field: TextField::CategoryName,
                    needle: needle.clone(),
                },
                Predicate::Contains {
                    field: TextField::CategorySlug,
                    needle,
                },
            ]));
        }

        if request.min_price.is_some() || request.max_price.is_some() {
            clauses.push(Predicate::Range {
                field: NumericField::Price,
                gte: request.min_price,
                lte: request.max_price,
            });
        }

        if request.in_stock_only {
            clauses.push(Predicate::GreaterThan {
                field: NumericField::Stock,
                value: 0.0,
            });
        }

        Self {
            root: Predicate::All(clauses),
        }
    }

    pub fn matches(&self, product: &CatalogProduct) -> bool {
        self.root.matches(product)
    }
}

fn visibility_clauses() -> Vec<Predicate> {
    vec![
        Predicate::Flag {
            field: FlagField::Active,
            expected: true,
        },
        Predicate::Flag {
            field: FlagField::Deleted,
            expected: false,
        },
        Predicate::Equals {
            field: TextField::Status,
            value: STATUS_PUBLISHED.to_string(),
        },
    ]
}

impl Predicate {
    pub fn matches(&self, product: &CatalogProduct) -> bool {
        match self {
            Predicate::All(clauses) => clauses.iter().all(|c| c.matches(product)),
            Predicate::Any(branches) => branches.iter().any(|b| b.matches(product)),
            Predicate::Contains { field, needle } => text_values(product, *field)
                .any(|value| value.to_lowercase().contains(needle.as_str())),
            Predicate::Equals { field, value } => {
                text_values(product, *field).any(|v| v == value.as_str())
            }
            Predicate::Flag { field, expected } => {
                let actual = match field {
                    FlagField::Active => product.is_active,
                    FlagField::Deleted => product.is_deleted,
                };
                actual == *expected
            }
            Predicate::Range { field, gte, lte } => {
                let actual = numeric_value(product, *field);
                gte.is_none_or(|min| actual >= min) && lte.is_none_or(|max| actual <= max)
            }
            Predicate::GreaterThan { field, value } => numeric_value(product, *field) > *value,
        }
    }
}

fn text_values(product: &CatalogProduct, field: TextField) -> Box<dyn Iterator<Item = &str> + '_> {
    match field {
        TextField::Name => Box::new(std::iter::once(product.name.as_str())),
        TextField::Slug => Box::new(std::iter::once(product.slug.as_str())),
        TextField::Description => Box::new(product.description.as_deref().into_iter()),
        TextField::CategoryName => {
            Box::new(product.category.as_ref().map(|c| c.name.as_str()).into_iter())
        }
        TextField::CategorySlug => {
            Box::new(product.category.as_ref().map(|c| c.slug.as_str()).into_iter())
        }
        TextField::TagName => Box::new(product.tags.iter().map(String::as_str)),
        TextField::Status => Box::new(std::iter::once(product.status.as_str())),
    }
}

fn numeric_value(product: &CatalogProduct, field: NumericField) -> f64 {
    match field {
        NumericField::Price => product.price,
        NumericField::Stock => f64::from(product.stock),
    }
}

/// Parses a price bound from raw request text.
///
/// Absent, unparsable, non-finite and negative values all yield `None`; a bad bound is
/// dropped, never replaced by zero.
pub fn parse_price_bound(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_bound() {
        assert_eq!(parse_price_bound(Some("19.99")), Some(19.99));
        assert_eq!(parse_price_bound(Some(" 5 ")), Some(5.0));
        assert_eq!(parse_price_bound(Some("0")), Some(0.0));
        assert_eq!(parse_price_bound(Some("abc")), None);
        assert_eq!(parse_price_bound(Some("")), None);
        assert_eq!(parse_price_bound(Some("NaN")), None);
        assert_eq!(parse_price_bound(Some("inf")), None);
        assert_eq!(parse_price_bound(Some("-3")), None);
        assert_eq!(parse_price_bound(None), None);
    }
}
