//! Identity → project → requirement resolution.

use crate::error::{Result, RigcheckError};

use super::identity::IdentityTable;
use super::row::{RequirementRow, RequirementTable};

/// Header rows above the first fetched identity row in the sheet.
pub const HEADER_ROW_OFFSET: usize = 2;

/// Sheet rows are numbered from one.
pub const ONE_BASED_INDEXING: usize = 1;

/// Convert a zero-based identity table position to the sheet's row number.
pub fn sheet_row(position: usize) -> usize {
    position + HEADER_ROW_OFFSET + ONE_BASED_INDEXING
}

/// Resolves which requirement rows apply to an identity.
pub struct RequirementResolver<'a> {
    identities: &'a IdentityTable,
    requirements: &'a RequirementTable,
}

impl<'a> RequirementResolver<'a> {
    pub fn new(identities: &'a IdentityTable, requirements: &'a RequirementTable) -> Self {
        Self {
            identities,
            requirements,
        }
    }

    /// Requirement rows for the identity's projects.
    ///
    /// Fails with [`RigcheckError::IdentityNotFound`] when the identity is
    /// absent or none of its projects has a requirement row.
    pub fn resolve(&self, identity: &str) -> Result<Vec<RequirementRow>> {
        let not_found = || RigcheckError::IdentityNotFound {
            identity: identity.to_string(),
        };

        let record = self.identities.record_for(identity).ok_or_else(not_found)?;
        let rows = self.requirements.for_projects(record.projects());

        if rows.is_empty() {
            tracing::debug!(
                identity,
                projects = ?record.project_memberships,
                "No requirement rows for identity's projects"
            );
            return Err(not_found());
        }

        tracing::debug!(
            identity,
            projects = ?rows.iter().map(|r| r.project_name.as_str()).collect::<Vec<_>>(),
            "Resolved requirements"
        );
        Ok(rows)
    }

    /// Zero-based table position of the identity, or 0 when absent.
    pub fn row_index(&self, identity: &str) -> usize {
        self.identities.position_of(identity).unwrap_or(0)
    }

    /// Sheet row number the verdict for `identity` is written to.
    pub fn sheet_row(&self, identity: &str) -> usize {
        sheet_row(self.row_index(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::identity::IdentityColumns;
    use proptest::prelude::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|c| c.to_string()).collect()
    }

    fn identities() -> IdentityTable {
        IdentityTable::from_rows(
            vec![
                cells(&["Ada", "ada@example.com", "Alpha"]),
                cells(&["Bob", "bob@example.com", "Alpha", "Beta"]),
                cells(&["Cy", "cy@example.com", "Gamma"]),
                cells(&["Di", "di@example.com"]),
            ],
            &IdentityColumns::default(),
        )
    }

    fn requirements() -> RequirementTable {
        RequirementTable::from_lines(&[
            cells(&["Alpha", "Windows10", "6000", "8", "256", "50", "64"]),
            cells(&["Beta", "Windows11", "9000", "16", "512", "100", "64"]),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_single_project() {
        let (ids, reqs) = (identities(), requirements());
        let rows = RequirementResolver::new(&ids, &reqs)
            .resolve("ada@example.com")
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].project_name, "Alpha");
    }

    #[test]
    fn resolves_multiple_projects() {
        let (ids, reqs) = (identities(), requirements());
        let rows = RequirementResolver::new(&ids, &reqs)
            .resolve("bob@example.com")
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn absent_identity_is_not_found() {
        let (ids, reqs) = (identities(), requirements());
        let err = RequirementResolver::new(&ids, &reqs)
            .resolve("eve@example.com")
            .unwrap_err();
        assert!(matches!(err, RigcheckError::IdentityNotFound { ref identity } if identity == "eve@example.com"));
    }

    #[test]
    fn project_without_requirement_row_is_not_found() {
        let (ids, reqs) = (identities(), requirements());
        let resolver = RequirementResolver::new(&ids, &reqs);
        assert!(resolver.resolve("cy@example.com").is_err());
        assert!(resolver.resolve("di@example.com").is_err());
    }

    #[test]
    fn row_index_and_sheet_row() {
        let (ids, reqs) = (identities(), requirements());
        let resolver = RequirementResolver::new(&ids, &reqs);
        assert_eq!(resolver.row_index("bob@example.com"), 1);
        assert_eq!(resolver.sheet_row("bob@example.com"), 4);
        assert_eq!(resolver.row_index("eve@example.com"), 0);
    }

    #[test]
    fn offset_constants_make_three() {
        assert_eq!(HEADER_ROW_OFFSET + ONE_BASED_INDEXING, 3);
    }

    proptest! {
        #[test]
        fn sheet_row_is_position_plus_three(position in 0usize..100_000) {
            prop_assert_eq!(sheet_row(position), position + 3);
        }

        #[test]
        fn found_identity_lands_on_position_plus_three(filler in 0usize..20) {
            let mut rows: Vec<Vec<String>> = (0..filler)
                .map(|i| cells(&["", &format!("user{}@example.com", i), "Alpha"]))
                .collect();
            rows.push(cells(&["", "target@example.com", "Alpha"]));
            let ids = IdentityTable::from_rows(rows, &IdentityColumns::default());
            let reqs = requirements();
            let resolver = RequirementResolver::new(&ids, &reqs);
            prop_assert_eq!(resolver.row_index("target@example.com"), filler);
            prop_assert_eq!(resolver.sheet_row("target@example.com"), filler + 3);
        }

        #[test]
        fn resolve_is_deterministic(which in 0usize..5) {
            let keys = ["ada@example.com", "bob@example.com", "cy@example.com", "di@example.com", "nobody@example.com"];
            let (ids, reqs) = (identities(), requirements());
            let resolver = RequirementResolver::new(&ids, &reqs);
            let key = keys[which];
            let first = resolver.resolve(key).ok();
            let second = resolver.resolve(key).ok();
            prop_assert_eq!(first, second);
            prop_assert_eq!(resolver.row_index(key), resolver.row_index(key));
        }
    }
}
