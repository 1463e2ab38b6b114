use std::borrow::Cow;
use std::cmp::Ordering;

use bollard::models::Network;

use crate::resource::{short_id, Column, Resource, ResourceKind, SortKey};

const COLUMNS: &[Column] = &[
    Column::fixed("NETWORK ID", 12),
    Column::fill("NAME", 2),
    Column::fill("DRIVER", 1),
    Column::fixed("SCOPE", 6),
    Column::fixed("CONTAINERS", 10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkSortKey {
    Name,
    Driver,
    Scope,
}

impl SortKey for NetworkSortKey {
    fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Driver => "driver",
            Self::Scope => "scope",
        }
    }

    fn column(&self) -> Option<usize> {
        match self {
            Self::Name => Some(1),
            Self::Driver => Some(2),
            Self::Scope => Some(3),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRecord {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub scope: String,
    pub containers: usize,
}

impl Resource for NetworkRecord {
    type SortKey = NetworkSortKey;

    const KIND: ResourceKind = ResourceKind::Networks;

    fn name(&self) -> &str {
        &self.name
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn sort_keys() -> &'static [NetworkSortKey] {
        &[NetworkSortKey::Name, NetworkSortKey::Driver, NetworkSortKey::Scope]
    }

    fn compare(&self, other: &Self, key: NetworkSortKey) -> Ordering {
        match key {
            NetworkSortKey::Name => self.name.cmp(&other.name),
            NetworkSortKey::Driver => self.driver.cmp(&other.driver),
            NetworkSortKey::Scope => self.scope.cmp(&other.scope),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            short_id(&self.id).to_string(),
            self.name.clone(),
            self.driver.clone(),
            self.scope.clone(),
            self.containers.to_string(),
        ]
    }

    fn filter_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}", self.name, short_id(&self.id)))
    }
}

impl From<&Network> for NetworkRecord {
    fn from(n: &Network) -> Self {
        Self {
            id: n.id.clone().unwrap_or_default(),
            name: n.name.clone().unwrap_or_default(),
            driver: n.driver.clone().unwrap_or_default(),
            scope: n.scope.clone().unwrap_or_default(),
            containers: n.containers.as_ref().map(|c| c.len()).unwrap_or(0),
        }
    }
}

impl From<Network> for NetworkRecord {
    fn from(n: Network) -> Self {
        Self::from(&n)
    }
}
