//! Joins aggregate rows with context metadata and renders the COUNTER
//! TR_J1 document.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};

use crate::config::PlatformConfig;
use crate::report::models::{
    CounterReport, Instance, ItemIdentifier, Performance, Period, ReportFilter, ReportHeader,
    ReportItem, DATA_TYPE, METRIC_TYPE, RELEASE, REPORT_ID, REPORT_NAME,
};
use crate::report::validate::ReportRequest;
use crate::stats::{AggregateRow, ContextResolver};

/// Build the report from one page of aggregate rows.
///
/// Rows arrive ordered descending by total and that order is preserved.
/// Rows whose context no longer exists are dropped without adjusting the
/// page window, so a page may come back with fewer than `limit` items.
pub async fn assemble_tr_j1(
    request: &ReportRequest,
    rows: Vec<AggregateRow>,
    contexts: &dyn ContextResolver,
    platform: &PlatformConfig,
) -> Result<CounterReport> {
    let period = Period {
        begin_date: request.range.start,
        end_date: request.range.end,
    };

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(journal) = contexts.get(row.context_id).await? else {
            tracing::debug!(
                context_id = row.context_id,
                "dropping stats row for deleted context"
            );
            continue;
        };

        items.push(ReportItem {
            title: journal.name,
            item_id: vec![
                ItemIdentifier {
                    id_type: "Print_ISSN".to_string(),
                    value: journal.print_issn,
                },
                ItemIdentifier {
                    id_type: "Online_ISSN".to_string(),
                    value: journal.online_issn,
                },
            ],
            platform: platform.name.clone(),
            publisher: journal.publisher,
            performance: vec![Performance {
                period: period.clone(),
                instance: vec![Instance {
                    metric_type: METRIC_TYPE.to_string(),
                    count: row.total,
                }],
            }],
        });
    }

    Ok(CounterReport {
        header: build_header(request, platform),
        items,
    })
}

fn build_header(request: &ReportRequest, platform: &PlatformConfig) -> ReportHeader {
    ReportHeader {
        created: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        created_by: platform.name.clone(),
        customer_id: request.customer_id.clone(),
        report_id: REPORT_ID.to_string(),
        release: RELEASE,
        report_name: REPORT_NAME.to_string(),
        institution_name: platform.institution.clone(),
        report_filters: vec![
            ReportFilter {
                name: "Platform".to_string(),
                value: platform.name.clone(),
            },
            ReportFilter {
                name: "Begin_Date".to_string(),
                value: request.begin_date.clone(),
            },
            ReportFilter {
                name: "End_Date".to_string(),
                value: request.end_date.clone(),
            },
            ReportFilter {
                name: "Data_Type".to_string(),
                value: DATA_TYPE.to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::validate::RawReportParams;
    use crate::stats::JournalContext;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct MapResolver {
        journals: HashMap<i64, JournalContext>,
    }

    #[async_trait]
    impl ContextResolver for MapResolver {
        async fn resolve_path(&self, path: &str) -> Result<Option<i64>> {
            Ok(self
                .journals
                .values()
                .find(|j| j.path == path)
                .map(|j| j.id))
        }

        async fn get(&self, context_id: i64) -> Result<Option<JournalContext>> {
            Ok(self.journals.get(&context_id).cloned())
        }
    }

    fn journal(id: i64, name: &str) -> JournalContext {
        JournalContext {
            id,
            path: format!("journal-{id}"),
            name: name.to_string(),
            print_issn: None,
            online_issn: None,
            publisher: Some("Test Press".to_string()),
        }
    }

    fn request() -> ReportRequest {
        ReportRequest::validate(RawReportParams {
            customer_id: Some("test".to_string()),
            begin_date: Some("2021".to_string()),
            end_date: Some("2022".to_string()),
            count: None,
            position_token: None,
        })
        .unwrap()
    }

    fn platform() -> PlatformConfig {
        PlatformConfig {
            name: "Test Platform".to_string(),
            institution: "Test Institution".to_string(),
        }
    }

    #[tokio::test]
    async fn preserves_row_order_and_period() {
        let resolver = MapResolver {
            journals: HashMap::from([(1, journal(1, "Alpha")), (2, journal(2, "Beta"))]),
        };
        let rows = vec![
            AggregateRow {
                context_id: 2,
                total: 90,
            },
            AggregateRow {
                context_id: 1,
                total: 10,
            },
        ];

        let report = assemble_tr_j1(&request(), rows, &resolver, &platform())
            .await
            .unwrap();

        assert_eq!(report.items.len(), 2);
        assert_eq!(report.items[0].title, "Beta");
        assert_eq!(report.items[1].title, "Alpha");
        for item in &report.items {
            let period = &item.performance[0].period;
            assert_eq!(period.begin_date.to_string(), "2021-01-01");
            assert_eq!(period.end_date.to_string(), "2022-12-31");
        }
        assert_eq!(report.items[0].performance[0].instance[0].count, 90);
        assert_eq!(
            report.items[0].performance[0].instance[0].metric_type,
            "Unique_Item_Request"
        );
    }

    #[tokio::test]
    async fn drops_rows_for_missing_contexts() {
        let resolver = MapResolver {
            journals: HashMap::from([(1, journal(1, "Alpha"))]),
        };
        let rows = vec![
            AggregateRow {
                context_id: 7,
                total: 42,
            },
            AggregateRow {
                context_id: 1,
                total: 3,
            },
        ];

        let report = assemble_tr_j1(&request(), rows, &resolver, &platform())
            .await
            .unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].title, "Alpha");
    }

    #[tokio::test]
    async fn header_echoes_request_and_constants() {
        let resolver = MapResolver {
            journals: HashMap::new(),
        };
        let report = assemble_tr_j1(&request(), vec![], &resolver, &platform())
            .await
            .unwrap();

        let header = &report.header;
        assert_eq!(header.customer_id, "test");
        assert_eq!(header.report_id, "TR_J1");
        assert_eq!(header.release, 5);
        assert_eq!(header.created_by, "Test Platform");
        assert_eq!(header.institution_name, "Test Institution");
        let begin = header
            .report_filters
            .iter()
            .find(|f| f.name == "Begin_Date")
            .unwrap();
        assert_eq!(begin.value, "2021");
        let end = header
            .report_filters
            .iter()
            .find(|f| f.name == "End_Date")
            .unwrap();
        assert_eq!(end.value, "2022");
    }
}
