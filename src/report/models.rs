//! COUNTER release 5 document types for the TR_J1 report.
//!
//! Field names follow the COUNTER JSON schema, hence the explicit renames.

use chrono::NaiveDate;
use serde::Serialize;

pub const REPORT_ID: &str = "TR_J1";
pub const REPORT_NAME: &str = "Journal Requests (Excluding OA_Gold)";
pub const RELEASE: u32 = 5;
pub const DATA_TYPE: &str = "Journal";
pub const METRIC_TYPE: &str = "Unique_Item_Request";

#[derive(Debug, Serialize)]
pub struct CounterReport {
    #[serde(rename = "Report_Header")]
    pub header: ReportHeader,
    #[serde(rename = "Report_Items")]
    pub items: Vec<ReportItem>,
}

#[derive(Debug, Serialize)]
pub struct ReportHeader {
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "Created_By")]
    pub created_by: String,
    #[serde(rename = "Customer_ID")]
    pub customer_id: String,
    #[serde(rename = "Report_ID")]
    pub report_id: String,
    #[serde(rename = "Release")]
    pub release: u32,
    #[serde(rename = "Report_Name")]
    pub report_name: String,
    #[serde(rename = "Institution_Name")]
    pub institution_name: String,
    #[serde(rename = "Report_Filters")]
    pub report_filters: Vec<ReportFilter>,
}

#[derive(Debug, Serialize)]
pub struct ReportFilter {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ReportItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Item_ID")]
    pub item_id: Vec<ItemIdentifier>,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Publisher")]
    pub publisher: Option<String>,
    #[serde(rename = "Performance")]
    pub performance: Vec<Performance>,
}

#[derive(Debug, Serialize)]
pub struct ItemIdentifier {
    #[serde(rename = "Type")]
    pub id_type: String,
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Performance {
    #[serde(rename = "Period")]
    pub period: Period,
    #[serde(rename = "Instance")]
    pub instance: Vec<Instance>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Period {
    #[serde(rename = "Begin_Date")]
    pub begin_date: NaiveDate,
    #[serde(rename = "End_Date")]
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct Instance {
    #[serde(rename = "MetricType")]
    pub metric_type: String,
    #[serde(rename = "Count")]
    pub count: i64,
}
