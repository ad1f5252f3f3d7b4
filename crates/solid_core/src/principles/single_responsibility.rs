//! Single Responsibility: one reason to change per type.

/// One type that owns pay, reporting and record maintenance at once.
pub mod bad {
    use log::debug;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Employee;

    impl Employee {
        pub fn calculate_salary(&self) {
            debug!("event=calculate_salary module=srp variant=bad status=noop");
        }

        pub fn generate_report(&self) {
            debug!("event=generate_report module=srp variant=bad status=noop");
        }

        pub fn update_information(&self) {
            debug!("event=update_information module=srp variant=bad status=noop");
        }
    }
}

/// Each concern lives in its own type; collaborators take the employee as input.
pub mod good {
    use log::debug;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Employee;

    impl Employee {
        pub fn calculate_salary(&self) {
            debug!("event=calculate_salary module=srp variant=good status=noop");
        }
    }

    /// Produces an employee report.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Report;

    impl Report {
        pub fn generate(&self, _employee: &Employee) {
            debug!("event=generate_report module=srp variant=good status=noop");
        }
    }

    /// Maintains employee records.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct HrSystem;

    impl HrSystem {
        pub fn update_information(&self, _employee: &Employee) {
            debug!("event=update_information module=srp variant=good status=noop");
        }
    }
}
