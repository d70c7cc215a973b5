//! The fixed set of aggregate views over the reconciled record set.
//!
//! Eight named count tables, each recomputed from scratch on every request,
//! optionally restricted by an exact-equality department filter. Aggregation
//! is a pure function of the immutable record set plus the filter, so two
//! runs with the same inputs produce identical output; all sort orders carry
//! explicit tiebreaks to keep that guarantee independent of map iteration
//! order. A view whose group set comes out empty degrades to a single
//! placeholder row — the presentation layer always expects at least one row.

use std::hash::Hash;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::models::ReconciledRecord;
use crate::models::sentinels;

/// Cause codes counted as violent deaths: `X9` followed by a digit, at the
/// start of the code. This replaces the historical `X9[0-9]|X95|X9`
/// pattern, whose extra alternatives were redundant and whose unanchored
/// bare `X9` matched codes merely containing the pair.
static VIOLENT_CAUSE: Lazy<Regex> = Lazy::new(|| Regex::new("^X9[0-9]").expect("valid pattern"));

/// Whether a cause code counts as a violent death
#[must_use]
pub fn is_violent_cause(code: &str) -> bool {
    VIOLENT_CAUSE.is_match(code.trim())
}

/// Equality filter on the department display field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentFilter {
    /// No filtering
    All,
    /// Keep records whose department name equals this exactly
    Name(String),
}

impl DepartmentFilter {
    /// Interpret a raw request value; the `_ALL_` sentinel and blank input
    /// both mean "no filter"
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == sentinels::ALL_DEPARTMENTS {
            Self::All
        } else {
            Self::Name(trimmed.to_string())
        }
    }

    fn matches(&self, record: &ReconciledRecord) -> bool {
        match self {
            Self::All => true,
            Self::Name(name) => record.department == *name,
        }
    }
}

/// One group of a single-key count table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    /// Group label (department, municipality or life-stage name)
    pub label: String,
    /// Number of deaths in the group
    pub deaths: u64,
}

/// One month's death count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRow {
    /// Month number, `0` for records without a usable month
    pub month: i64,
    /// Number of deaths in the month
    pub deaths: u64,
}

/// One (department, sex) group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SexRow {
    /// Department display name
    pub department: String,
    /// Sex as reported
    pub sex: String,
    /// Number of deaths in the group
    pub deaths: u64,
}

/// One cause-of-death group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CauseRow {
    /// Cause code
    pub code: String,
    /// Cause display name
    pub name: String,
    /// Number of deaths attributed to the cause
    pub deaths: u64,
}

/// Ungrouped headline numbers for the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Total records in the filtered set
    pub total_records: u64,
    /// Distinct department names
    pub departments: u64,
    /// Distinct municipality names
    pub municipalities: u64,
}

/// The eight aggregate views, one request's atomic result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateSet {
    /// Deaths by department, most affected first
    pub by_department: Vec<CountRow>,
    /// Deaths by month, January first
    pub by_month: Vec<MonthRow>,
    /// The ten municipalities with the fewest deaths
    pub lowest_10_municipalities: Vec<CountRow>,
    /// The five municipalities with the most violent deaths
    pub top_5_violent_municipalities: Vec<CountRow>,
    /// Deaths by department and sex
    pub by_department_and_sex: Vec<SexRow>,
    /// Deaths by life-stage label, largest group first
    pub by_age_label: Vec<CountRow>,
    /// The ten most frequent causes of death
    pub top_10_causes: Vec<CauseRow>,
    /// Headline totals
    pub summary: Summary,
}

fn count_by<'a, K, F>(records: &[&'a ReconciledRecord], key: F) -> FxHashMap<K, u64>
where
    K: Eq + Hash,
    F: Fn(&'a ReconciledRecord) -> K,
{
    let mut counts = FxHashMap::default();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

/// Descending by count, label ascending as the tiebreak
fn sorted_desc(counts: FxHashMap<String, u64>) -> Vec<CountRow> {
    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .map(|(label, deaths)| CountRow { label, deaths })
        .collect()
}

/// Ascending by count, label ascending as the tiebreak
fn sorted_asc(counts: FxHashMap<String, u64>) -> Vec<CountRow> {
    counts
        .into_iter()
        .sorted_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
        .map(|(label, deaths)| CountRow { label, deaths })
        .collect()
}

fn or_placeholder(rows: Vec<CountRow>) -> Vec<CountRow> {
    if rows.is_empty() {
        vec![CountRow {
            label: sentinels::NO_DATA.to_string(),
            deaths: 0,
        }]
    } else {
        rows
    }
}

/// Compute all eight aggregate views over the filtered record set
#[must_use]
pub fn aggregate(records: &[ReconciledRecord], filter: &DepartmentFilter) -> AggregateSet {
    let filtered: Vec<&ReconciledRecord> = records.iter().filter(|r| filter.matches(r)).collect();

    let by_department = or_placeholder(sorted_desc(count_by(&filtered, |r| r.department.clone())));

    let mut by_month: Vec<MonthRow> = count_by(&filtered, |r| r.month)
        .into_iter()
        .sorted_by_key(|&(month, _)| month)
        .map(|(month, deaths)| MonthRow { month, deaths })
        .collect();
    if by_month.is_empty() {
        by_month.push(MonthRow { month: 0, deaths: 0 });
    }

    let lowest_10_municipalities = or_placeholder(
        sorted_asc(count_by(&filtered, |r| r.municipality.clone()))
            .into_iter()
            .take(10)
            .collect(),
    );

    let violent: Vec<&ReconciledRecord> = filtered
        .iter()
        .copied()
        .filter(|r| is_violent_cause(&r.cause_code))
        .collect();
    let top_5_violent_municipalities = or_placeholder(
        sorted_desc(count_by(&violent, |r| r.municipality.clone()))
            .into_iter()
            .take(5)
            .collect(),
    );

    let mut by_department_and_sex: Vec<SexRow> =
        count_by(&filtered, |r| (r.department.clone(), r.sex.clone()))
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .map(|((department, sex), deaths)| SexRow {
                department,
                sex,
                deaths,
            })
            .collect();
    if by_department_and_sex.is_empty() {
        by_department_and_sex.push(SexRow {
            department: sentinels::NO_DATA.to_string(),
            sex: "N/A".to_string(),
            deaths: 0,
        });
    }

    let by_age_label =
        or_placeholder(sorted_desc(count_by(&filtered, |r| r.age_label.to_string())));

    let mut top_10_causes: Vec<CauseRow> =
        count_by(&filtered, |r| (r.cause_code.clone(), r.cause_name.clone()))
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .take(10)
            .map(|((code, name), deaths)| CauseRow { code, name, deaths })
            .collect();
    if top_10_causes.is_empty() {
        top_10_causes.push(CauseRow {
            code: String::new(),
            name: sentinels::NO_DATA.to_string(),
            deaths: 0,
        });
    }

    let departments: FxHashSet<&str> = filtered.iter().map(|r| r.department.as_str()).collect();
    let municipalities: FxHashSet<&str> = filtered.iter().map(|r| r.municipality.as_str()).collect();
    let summary = Summary {
        total_records: filtered.len() as u64,
        departments: departments.len() as u64,
        municipalities: municipalities.len() as u64,
    };

    AggregateSet {
        by_department,
        by_month,
        lowest_10_municipalities,
        top_5_violent_municipalities,
        by_department_and_sex,
        by_age_label,
        top_10_causes,
        summary,
    }
}
