//! Dependency Inversion: the report generator depends on a data-source
//! abstraction supplied by the caller.
//!
//! # Invariants
//! - `generate_report` always returns [`REPORT_GENERATED`], whatever the
//!   source yields.
//! - `Database` always yields the same three placeholder rows, in order.

/// Fixed output of every report generator.
pub const REPORT_GENERATED: &str = "Report generated";

fn placeholder_rows() -> Vec<String> {
    ["Dado 1", "Dado 2", "Dado 3"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Generator builds and owns its concrete storage.
pub mod bad {
    use super::{placeholder_rows, REPORT_GENERATED};
    use log::debug;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Database;

    impl Database {
        pub fn fetch_data(&self) -> Vec<String> {
            placeholder_rows()
        }
    }

    #[derive(Debug, Default)]
    pub struct ReportGenerator {
        database: Database,
    }

    impl ReportGenerator {
        pub fn new() -> Self {
            Self {
                database: Database,
            }
        }

        pub fn generate_report(&self) -> String {
            let rows = self.database.fetch_data();
            debug!(
                "event=generate_report module=dip variant=bad rows={}",
                rows.len()
            );
            REPORT_GENERATED.to_string()
        }
    }
}

/// Generator receives any [`good::DataSource`] at construction.
pub mod good {
    use super::{placeholder_rows, REPORT_GENERATED};
    use log::debug;

    /// Supplier of ordered report rows.
    pub trait DataSource {
        fn fetch_data(&self) -> Vec<String>;
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Database;

    impl DataSource for Database {
        fn fetch_data(&self) -> Vec<String> {
            placeholder_rows()
        }
    }

    /// Report generator over an injected data source.
    pub struct ReportGenerator<S: DataSource> {
        source: S,
    }

    impl<S: DataSource> ReportGenerator<S> {
        pub fn new(source: S) -> Self {
            Self { source }
        }

        pub fn source(&self) -> &S {
            &self.source
        }

        pub fn generate_report(&self) -> String {
            let rows = self.source.fetch_data();
            debug!(
                "event=generate_report module=dip variant=good rows={}",
                rows.len()
            );
            REPORT_GENERATED.to_string()
        }
    }
}
