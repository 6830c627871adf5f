//! In-memory [`TableStore`] implementation

use crate::adapters::database::traits::{TableIndex, TableStore};
use crate::adapters::table::record::AdministrationRecord;
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tokio::sync::RwLock;

/// Primary key of an item: (pk, sk)
type PrimaryKey = (String, String);

/// Secondary index entry: (index pk, index sk, pk, sk)
type IndexEntry = (String, String, String, String);

#[derive(Default)]
struct Tables {
    items: BTreeMap<PrimaryKey, AdministrationRecord>,
    indexes: HashMap<TableIndex, BTreeSet<IndexEntry>>,
}

impl Tables {
    fn index_entry(record: &AdministrationRecord, index: TableIndex) -> IndexEntry {
        let keys = record.keys();
        let (ipk, isk) = keys.for_index(index);
        (
            ipk.to_string(),
            isk.to_string(),
            record.pk.clone(),
            record.sk.clone(),
        )
    }

    fn put(&mut self, record: AdministrationRecord) {
        let primary = (record.pk.clone(), record.sk.clone());

        if let Some(previous) = self.items.get(&primary) {
            for index in TableIndex::SECONDARY {
                let entry = Self::index_entry(previous, index);
                if let Some(entries) = self.indexes.get_mut(&index) {
                    entries.remove(&entry);
                }
            }
        }

        for index in TableIndex::SECONDARY {
            self.indexes
                .entry(index)
                .or_default()
                .insert(Self::index_entry(&record, index));
        }
        self.items.insert(primary, record);
    }

    fn query(&self, index: TableIndex, partition_key: &str) -> Vec<AdministrationRecord> {
        if index == TableIndex::Primary {
            let start = (partition_key.to_string(), String::new());
            return self
                .items
                .range(start..)
                .take_while(|((pk, _), _)| pk == partition_key)
                .map(|(_, record)| record.clone())
                .collect();
        }

        let Some(entries) = self.indexes.get(&index) else {
            return Vec::new();
        };

        let start = (
            partition_key.to_string(),
            String::new(),
            String::new(),
            String::new(),
        );
        entries
            .range(start..)
            .take_while(|(ipk, _, _, _)| ipk == partition_key)
            .filter_map(|(_, _, pk, sk)| self.items.get(&(pk.clone(), sk.clone())).cloned())
            .collect()
    }

    fn index_len(&self, index: TableIndex) -> usize {
        match index {
            TableIndex::Primary => self.items.len(),
            _ => self.indexes.get(&index).map_or(0, BTreeSet::len),
        }
    }
}

/// In-memory single table with ordered secondary indexes
pub struct InMemoryTable {
    table_name: String,
    tables: RwLock<Tables>,
}

impl InMemoryTable {
    /// Create an empty table
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Number of items stored
    pub async fn len(&self) -> usize {
        self.tables.read().await.items.len()
    }

    /// Whether the table holds no items
    pub async fn is_empty(&self) -> bool {
        self.tables.read().await.items.is_empty()
    }

    /// Number of entries in one index
    pub async fn index_len(&self, index: TableIndex) -> usize {
        self.tables.read().await.index_len(index)
    }
}

#[async_trait]
impl TableStore for InMemoryTable {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_table_exists(&self) -> Result<()> {
        tracing::debug!(table = %self.table_name, "In-memory table ready");
        Ok(())
    }

    async fn put_item(&self, record: &AdministrationRecord) -> Result<()> {
        self.tables.write().await.put(record.clone());
        Ok(())
    }

    async fn query(
        &self,
        index: TableIndex,
        partition_key: &str,
    ) -> Result<Vec<AdministrationRecord>> {
        Ok(self.tables.read().await.query(index, partition_key))
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }
}
