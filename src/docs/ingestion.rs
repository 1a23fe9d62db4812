use super::header;
use crate::render::{compose, section, table};
use crate::sources::Sources;

pub(super) fn build(_sources: &Sources) -> String {
    let mut parts = header(
        "📥 Data Ingestion Pipeline",
        "Three source systems → one Star Schema",
    )
    .to_vec();

    parts.push(section(
        "🌐",
        "Data Sources",
        table(
            &["Source", "Protocol", "What we get"],
            &[
                ["🟠 **Oracle DB** (Jira)", "`oracle_fdw`", "Issues, worklogs, custom fields, links"],
                ["🔵 **Active Directory**", "LDAP sync", "Users, org hierarchy, photos, departments"],
                ["🟢 **TER** (Leave System)", "REST API", "Absences, work schedules"],
                ["🟡 **SharePoint**", "`sp-download` (Go)", "Excel exports *(planned)*"],
                ["⚪ **Google Drive**", "CSV loader", "CSV exports, backups"],
            ],
        ),
    ));
    parts.push(section(
        "🔌",
        "How Data Flows",
        [
            "```",
            "Oracle DB ──→ oracle_fdw ──→ ext schema ──┐",
            "LDAP      ──→ ext.ldap_import ───────────→├──→ ETL ──→ dwh schema",
            "TER API   ──→ ext.ter_data ─────────────→┘",
            "```",
        ],
    ));
    parts.push(section(
        "⚙️",
        "ETL Orchestrator",
        [
            "- 📆 **Yearly partitioned** — processes one year at a time",
            "- 🔍 **Pre-flight TCP checks** — validates source availability before running",
            "- 📈 **HWM pattern** — High Water Mark for incremental loading",
            "- 📊 **Observability** — logs timing, row counts, errors to `meta.etl_log`",
            "- 🕔 **Schedule** — nightly cron on butalam server",
        ],
    ));

    compose(&parts)
}
