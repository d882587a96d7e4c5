use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Column layout shared by the trainer and the prediction endpoint:
/// `hire_year`, `hire_month`, then one `department_<name>` indicator per
/// department in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    departments: Vec<String>,
}

/// Difference between the trained department set and the live one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDrift {
    /// In the store now, absent at training time.
    pub unseen_by_model: Vec<String>,
    /// Known to the model, no longer in the store.
    pub missing_from_store: Vec<String>,
}

impl SchemaDrift {
    pub fn is_empty(&self) -> bool {
        self.unseen_by_model.is_empty() && self.missing_from_store.is_empty()
    }
}

impl FeatureSchema {
    pub fn from_departments<I, S>(departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut departments: Vec<String> = departments.into_iter().map(Into::into).collect();
        departments.sort();
        departments.dedup();
        Self { departments }
    }

    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn width(&self) -> usize {
        2 + self.departments.len()
    }

    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.width());
        columns.push("hire_year".to_string());
        columns.push("hire_month".to_string());
        columns.extend(self.departments.iter().map(|d| format!("department_{d}")));
        columns
    }

    pub fn knows(&self, department: &str) -> bool {
        self.position(department).is_some()
    }

    /// A department outside the schema encodes as all-zero indicators.
    pub fn encode(&self, department: &str, hire_date: NaiveDateTime) -> Vec<f64> {
        let mut row = vec![0.0; self.width()];
        row[0] = f64::from(hire_date.year());
        row[1] = f64::from(hire_date.month());
        if let Some(i) = self.position(department) {
            row[2 + i] = 1.0;
        }
        row
    }

    pub fn drift(&self, live: &[String]) -> SchemaDrift {
        let live = FeatureSchema::from_departments(live.iter().cloned());

        SchemaDrift {
            unseen_by_model: live
                .departments
                .iter()
                .filter(|d| !self.knows(d))
                .cloned()
                .collect(),
            missing_from_store: self
                .departments
                .iter()
                .filter(|d| !live.knows(d))
                .cloned()
                .collect(),
        }
    }

    fn position(&self, department: &str) -> Option<usize> {
        self.departments
            .binary_search_by(|d| d.as_str().cmp(department))
            .ok()
    }
}
