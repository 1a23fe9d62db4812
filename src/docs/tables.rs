//! Fallback facts about the warehouse tables every page expects to exist.

pub(super) struct KnownTable {
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: TableKind,
    /// Fallback description when the catalog has none.
    pub description: &'static str,
    /// Fallback key column when the catalog lists no columns.
    pub key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TableKind {
    Fact,
    Dim,
}

impl TableKind {
    /// Classify a table by its name prefix.
    pub fn of(name: &str) -> Option<Self> {
        if name.starts_with("fact_") {
            Some(TableKind::Fact)
        } else if name.starts_with("dim_") {
            Some(TableKind::Dim)
        } else {
            None
        }
    }

    /// Type label for tables without a known icon.
    pub fn generic_label(self) -> &'static str {
        match self {
            TableKind::Fact => "⏱️ Fact",
            TableKind::Dim => "📐 Dim",
        }
    }
}

impl KnownTable {
    pub fn label(&self) -> String {
        let kind = match self.kind {
            TableKind::Fact => "Fact",
            TableKind::Dim => "Dim",
        };
        format!("{} {kind}", self.icon)
    }
}

/// Key tables in display order: facts first, then dimensions.
pub(super) const KNOWN_TABLES: &[KnownTable] = &[
    KnownTable {
        name: "fact_daily_worklogs_h",
        icon: "⏱️",
        kind: TableKind::Fact,
        description: "Hours logged per person/issue/day",
        key: "worklog_id",
    },
    KnownTable {
        name: "fact_sla_events",
        icon: "🚨",
        kind: TableKind::Fact,
        description: "SLA breaches and response times",
        key: "event_id",
    },
    KnownTable {
        name: "dim_issue_h",
        icon: "📝",
        kind: TableKind::Dim,
        description: "Jira issues (status, priority, assignee)",
        key: "issue_id",
    },
    KnownTable {
        name: "dim_user_h",
        icon: "👤",
        kind: TableKind::Dim,
        description: "Users from LDAP (hierarchy, manager)",
        key: "user_id",
    },
    KnownTable {
        name: "dim_project_h",
        icon: "📁",
        kind: TableKind::Dim,
        description: "Projects with leads",
        key: "project_key",
    },
    KnownTable {
        name: "dim_calendar",
        icon: "📅",
        kind: TableKind::Dim,
        description: "Date dimension (YYYYMMDD)",
        key: "day_id",
    },
];

pub(super) fn known(name: &str) -> Option<&'static KnownTable> {
    KNOWN_TABLES.iter().find(|t| t.name == name)
}
