use std::cmp::Ordering;

use bollard::models::Volume;

use crate::resource::{Column, Resource, ResourceKind, SortKey};

const COLUMNS: &[Column] = &[Column::fixed("DRIVER", 10), Column::fill("VOLUME NAME", 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeSortKey {
    Name,
    Driver,
}

impl SortKey for VolumeSortKey {
    fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Driver => "driver",
        }
    }

    fn column(&self) -> Option<usize> {
        match self {
            Self::Driver => Some(0),
            Self::Name => Some(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeRecord {
    pub name: String,
    pub driver: String,
}

impl VolumeRecord {
    pub fn new(name: impl Into<String>, driver: impl Into<String>) -> Self {
        Self { name: name.into(), driver: driver.into() }
    }
}

impl Resource for VolumeRecord {
    type SortKey = VolumeSortKey;

    const KIND: ResourceKind = ResourceKind::Volumes;

    fn name(&self) -> &str {
        &self.name
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn sort_keys() -> &'static [VolumeSortKey] {
        &[VolumeSortKey::Name, VolumeSortKey::Driver]
    }

    fn compare(&self, other: &Self, key: VolumeSortKey) -> Ordering {
        match key {
            VolumeSortKey::Name => self.name.cmp(&other.name),
            VolumeSortKey::Driver => self.driver.cmp(&other.driver),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![self.driver.clone(), self.name.clone()]
    }
}

impl From<&Volume> for VolumeRecord {
    fn from(v: &Volume) -> Self {
        Self::new(v.name.clone(), v.driver.clone())
    }
}

impl From<Volume> for VolumeRecord {
    fn from(v: Volume) -> Self {
        Self::from(&v)
    }
}
