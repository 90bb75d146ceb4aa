use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::history::OptimizationRecord;
use crate::models::template::PromptTemplate;
use crate::store::PromptStore;

/// In-process store for tests. Keeps insertion order.
#[derive(Default)]
pub struct MemoryPromptStore {
    records: Mutex<Vec<OptimizationRecord>>,
    templates: Mutex<Vec<PromptTemplate>>,
}

impl MemoryPromptStore {
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl PromptStore for MemoryPromptStore {
    async fn insert_record(&self, record: &OptimizationRecord) -> Result<(), sqlx::Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list_records(&self, limit: i64) -> Result<Vec<OptimizationRecord>, sqlx::Error> {
        // Reverse first so equal timestamps come back newest-inserted first.
        let mut records: Vec<_> = self.records.lock().unwrap().iter().rev().cloned().collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit.max(0) as usize);
        Ok(records)
    }

    async fn delete_record(&self, id: &str) -> Result<bool, sqlx::Error> {
        let mut records = self.records.lock().unwrap();
        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_templates(&self) -> Result<i64, sqlx::Error> {
        Ok(self.templates.lock().unwrap().len() as i64)
    }

    async fn insert_template(&self, template: &PromptTemplate) -> Result<(), sqlx::Error> {
        self.templates.lock().unwrap().push(template.clone());
        Ok(())
    }

    async fn list_templates(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<PromptTemplate>, sqlx::Error> {
        Ok(self
            .templates
            .lock()
            .unwrap()
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect())
    }
}
