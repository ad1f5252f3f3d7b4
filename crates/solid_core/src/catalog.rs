//! Static catalog of the ten bad/good examples.
//!
//! # Responsibility
//! - Name every principle with a stable string id.
//! - List the examples in a fixed order and walk them for smoke checks.
//!
//! # Invariants
//! - Exactly two entries per principle, bad before good.
//! - Walking the catalog never writes to stdout.

use crate::principles::{
    dependency_inversion, interface_segregation, liskov_substitution, open_closed,
    single_responsibility,
};
use log::{debug, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One of the five SOLID principles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

/// Stable id for [`Principle::SingleResponsibility`].
pub const PRINCIPLE_SINGLE_RESPONSIBILITY: &str = "single_responsibility";
/// Stable id for [`Principle::OpenClosed`].
pub const PRINCIPLE_OPEN_CLOSED: &str = "open_closed";
/// Stable id for [`Principle::LiskovSubstitution`].
pub const PRINCIPLE_LISKOV_SUBSTITUTION: &str = "liskov_substitution";
/// Stable id for [`Principle::InterfaceSegregation`].
pub const PRINCIPLE_INTERFACE_SEGREGATION: &str = "interface_segregation";
/// Stable id for [`Principle::DependencyInversion`].
pub const PRINCIPLE_DEPENDENCY_INVERSION: &str = "dependency_inversion";

impl Principle {
    /// All principles in S-O-L-I-D order.
    pub const ALL: [Principle; 5] = [
        Self::SingleResponsibility,
        Self::OpenClosed,
        Self::LiskovSubstitution,
        Self::InterfaceSegregation,
        Self::DependencyInversion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleResponsibility => PRINCIPLE_SINGLE_RESPONSIBILITY,
            Self::OpenClosed => PRINCIPLE_OPEN_CLOSED,
            Self::LiskovSubstitution => PRINCIPLE_LISKOV_SUBSTITUTION,
            Self::InterfaceSegregation => PRINCIPLE_INTERFACE_SEGREGATION,
            Self::DependencyInversion => PRINCIPLE_DEPENDENCY_INVERSION,
        }
    }

    /// Human-readable principle name.
    pub fn title(self) -> &'static str {
        match self {
            Self::SingleResponsibility => "Single Responsibility",
            Self::OpenClosed => "Open/Closed",
            Self::LiskovSubstitution => "Liskov Substitution",
            Self::InterfaceSegregation => "Interface Segregation",
            Self::DependencyInversion => "Dependency Inversion",
        }
    }
}

/// Parses one principle from its stable id.
///
/// Surrounding whitespace is ignored; matching is case-sensitive.
pub fn parse_principle(value: &str) -> Result<Principle, CatalogError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(CatalogError::EmptyPrincipleId);
    }

    Principle::ALL
        .into_iter()
        .find(|principle| principle.as_str() == normalized)
        .ok_or_else(|| CatalogError::UnknownPrinciple(normalized.to_string()))
}

/// Catalog lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    EmptyPrincipleId,
    UnknownPrinciple(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPrincipleId => write!(f, "principle id must not be empty"),
            Self::UnknownPrinciple(value) => write!(f, "unknown principle: {value}"),
        }
    }
}

impl Error for CatalogError {}

/// Whether an example shows the violation or the fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Bad,
    Good,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bad => "bad",
            Self::Good => "good",
        }
    }
}

/// Catalog entry describing one example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub principle: Principle,
    pub variant: Variant,
    pub title: &'static str,
    pub summary: &'static str,
}

const CATALOG: [Example; 10] = [
    Example {
        principle: Principle::SingleResponsibility,
        variant: Variant::Bad,
        title: "Employee does everything",
        summary: "One type computes pay, produces reports and updates records.",
    },
    Example {
        principle: Principle::SingleResponsibility,
        variant: Variant::Good,
        title: "Employee, Report, HrSystem",
        summary: "Each concern has its own type; report and HR take the employee as input.",
    },
    Example {
        principle: Principle::OpenClosed,
        variant: Variant::Bad,
        title: "Fee switch over account kind",
        summary: "A new account kind requires editing the fee match.",
    },
    Example {
        principle: Principle::OpenClosed,
        variant: Variant::Good,
        title: "Pluggable fee calculator",
        summary: "Each account category implements FeeCalculator; the account delegates.",
    },
    Example {
        principle: Principle::LiskovSubstitution,
        variant: Variant::Bad,
        title: "Square posing as a mutable rectangle",
        summary: "Setting width then height on a square breaks rectangle area expectations.",
    },
    Example {
        principle: Principle::LiskovSubstitution,
        variant: Variant::Good,
        title: "Independent shapes",
        summary: "Rectangle and Square both implement Shape without sharing mutable sides.",
    },
    Example {
        principle: Principle::InterfaceSegregation,
        variant: Variant::Bad,
        title: "Fat document trait",
        summary: "Every document must implement open, save and close.",
    },
    Example {
        principle: Principle::InterfaceSegregation,
        variant: Variant::Good,
        title: "Openable, Savable, Closable",
        summary: "Implementers pick exactly the capabilities they support.",
    },
    Example {
        principle: Principle::DependencyInversion,
        variant: Variant::Bad,
        title: "Generator owns its database",
        summary: "The report generator constructs a concrete Database internally.",
    },
    Example {
        principle: Principle::DependencyInversion,
        variant: Variant::Good,
        title: "Injected data source",
        summary: "The report generator receives any DataSource at construction.",
    },
];

/// Returns every catalog entry in principle order, bad before good.
pub fn catalog() -> &'static [Example] {
    &CATALOG
}

/// Returns the bad/good pair for one principle.
pub fn examples_for(principle: Principle) -> Vec<&'static Example> {
    CATALOG
        .iter()
        .filter(|example| example.principle == principle)
        .collect()
}

/// Instantiates and exercises every example once.
///
/// Returns the number of examples walked.
pub fn walk_catalog() -> usize {
    let mut walked = 0;
    for example in catalog() {
        walk_example(example);
        debug!(
            "event=example_walked module=catalog principle={} variant={}",
            example.principle.as_str(),
            example.variant.as_str()
        );
        walked += 1;
    }
    info!("event=catalog_walked module=catalog status=ok examples={walked}");
    walked
}

fn walk_example(example: &Example) {
    match (example.principle, example.variant) {
        (Principle::SingleResponsibility, Variant::Bad) => {
            let employee = single_responsibility::bad::Employee;
            employee.calculate_salary();
            employee.generate_report();
            employee.update_information();
        }
        (Principle::SingleResponsibility, Variant::Good) => {
            use single_responsibility::good::{Employee, HrSystem, Report};
            let employee = Employee;
            employee.calculate_salary();
            Report.generate(&employee);
            HrSystem.update_information(&employee);
        }
        (Principle::OpenClosed, Variant::Bad) => {
            use open_closed::bad::{AccountKind, BankAccount};
            let fee = BankAccount::new(1000.0, AccountKind::Checking).compute_fee();
            debug!("event=fee_computed module=ocp variant=bad fee={fee}");
        }
        (Principle::OpenClosed, Variant::Good) => {
            use open_closed::good::{BankAccount, SavingsFee};
            let fee = BankAccount::new(1000.0, Box::new(SavingsFee)).compute_fee();
            debug!("event=fee_computed module=ocp variant=good fee={fee}");
        }
        (Principle::LiskovSubstitution, Variant::Bad) => {
            use liskov_substitution::bad::{stretch_to_area, Square};
            let mut square = Square::new(5);
            let holds = stretch_to_area(&mut square, 5, 4);
            debug!("event=substitution_checked module=lsp variant=bad holds={holds}");
        }
        (Principle::LiskovSubstitution, Variant::Good) => {
            use liskov_substitution::good::{total_area, Rectangle, Square};
            let rectangle = Rectangle { height: 4, width: 5 };
            let square = Square { side: 5 };
            let area = total_area(&[&rectangle, &square]);
            debug!("event=area_computed module=lsp variant=good area={area}");
        }
        (Principle::InterfaceSegregation, Variant::Bad) => {
            use interface_segregation::bad::{Document, WordDocument};
            let document = WordDocument;
            document.open();
            document.save();
            document.close();
        }
        (Principle::InterfaceSegregation, Variant::Good) => {
            use interface_segregation::good::{
                open_all, Closable, ReadOnlyDocument, Savable, WordDocument,
            };
            let document = WordDocument;
            open_all(&[&document, &ReadOnlyDocument]);
            document.save();
            document.close();
        }
        (Principle::DependencyInversion, Variant::Bad) => {
            dependency_inversion::bad::ReportGenerator::new().generate_report();
        }
        (Principle::DependencyInversion, Variant::Good) => {
            use dependency_inversion::good::{Database, ReportGenerator};
            ReportGenerator::new(Database).generate_report();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{catalog, parse_principle, CatalogError, Principle, Variant};

    #[test]
    fn parses_all_principle_ids() {
        for principle in Principle::ALL {
            assert_eq!(
                parse_principle(principle.as_str()).expect("known id should parse"),
                principle
            );
        }
        assert_eq!(
            parse_principle("  open_closed ").expect("padded id should parse"),
            Principle::OpenClosed
        );
    }

    #[test]
    fn rejects_empty_principle_id() {
        let err = parse_principle("   ").expect_err("empty id must fail");
        assert_eq!(err, CatalogError::EmptyPrincipleId);
    }

    #[test]
    fn rejects_unknown_and_non_lowercase_ids() {
        let err = parse_principle("yagni").expect_err("unknown id must fail");
        assert_eq!(err, CatalogError::UnknownPrinciple("yagni".to_string()));

        let err = parse_principle("OPEN_CLOSED").expect_err("uppercase id must fail");
        assert_eq!(err, CatalogError::UnknownPrinciple("OPEN_CLOSED".to_string()));
    }

    #[test]
    fn variant_ids_match_serde_names() {
        assert_eq!(Variant::Bad.as_str(), "bad");
        assert_eq!(Variant::Good.as_str(), "good");
    }

    #[test]
    fn catalog_orders_bad_before_good() {
        for pair in catalog().chunks(2) {
            assert_eq!(pair[0].principle, pair[1].principle);
            assert_eq!(pair[0].variant, Variant::Bad);
            assert_eq!(pair[1].variant, Variant::Good);
        }
    }
}
