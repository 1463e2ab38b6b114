use std::borrow::Cow;
use std::cmp::Ordering;
use std::time::Duration;

use bollard::models::{ContainerSummary, Port};

use crate::resource::{age_since_unix, format_duration, short_id, Column, Resource, ResourceKind, SortKey, Tone};

const COLUMNS: &[Column] = &[
    Column::fixed("CONTAINER", 12),
    Column::fill("IMAGE", 2),
    Column::fill("COMMAND", 2),
    Column::fixed("CREATED", 7),
    Column::fill("STATUS", 2),
    Column::fill("PORTS", 2),
    Column::fill("NAMES", 2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerSortKey {
    Name,
    Image,
    Status,
    Created,
}

impl SortKey for ContainerSortKey {
    fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Image => "image",
            Self::Status => "status",
            Self::Created => "created",
        }
    }

    fn column(&self) -> Option<usize> {
        match self {
            Self::Image => Some(1),
            Self::Created => Some(3),
            Self::Status => Some(4),
            Self::Name => Some(6),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRecord {
    pub id: String,
    pub name: String,
    pub image: String,
    pub command: String,
    pub created: i64,
    pub age: Duration,
    pub state: String,
    pub status: String,
    pub ports: String,
}

impl Resource for ContainerRecord {
    type SortKey = ContainerSortKey;

    const KIND: ResourceKind = ResourceKind::Containers;

    fn name(&self) -> &str {
        &self.name
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn sort_keys() -> &'static [ContainerSortKey] {
        &[ContainerSortKey::Name, ContainerSortKey::Image, ContainerSortKey::Status, ContainerSortKey::Created]
    }

    fn compare(&self, other: &Self, key: ContainerSortKey) -> Ordering {
        match key {
            ContainerSortKey::Name => self.name.cmp(&other.name),
            ContainerSortKey::Image => self.image.cmp(&other.image),
            ContainerSortKey::Status => self.status.cmp(&other.status),
            ContainerSortKey::Created => self.created.cmp(&other.created),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            short_id(&self.id).to_string(),
            self.image.clone(),
            format!("\"{}\"", self.command),
            format_duration(self.age),
            self.status.clone(),
            self.ports.clone(),
            self.name.clone(),
        ]
    }

    fn filter_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {} {}", self.name, self.image, short_id(&self.id)))
    }

    fn tone(&self) -> Tone {
        match self.state.to_ascii_lowercase().as_str() {
            "running" => Tone::Running,
            "created" | "paused" | "restarting" => Tone::Pending,
            "exited" | "dead" | "removing" => Tone::Failed,
            _ => Tone::Normal,
        }
    }
}

pub fn format_ports(ports: &[Port]) -> String {
    ports
        .iter()
        .map(|p| {
            let proto =
                p.typ.as_ref().map(|t| t.to_string()).filter(|t| !t.is_empty()).unwrap_or_else(|| "tcp".into());
            match p.public_port {
                Some(public) => {
                    let ip = p.ip.as_deref().unwrap_or("");
                    format!("{ip}:{public}->{}/{proto}", p.private_port)
                }
                None => format!("{}/{proto}", p.private_port),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<&ContainerSummary> for ContainerRecord {
    fn from(c: &ContainerSummary) -> Self {
        let name = c
            .names
            .as_ref()
            .and_then(|names| names.first())
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_default();
        let created = c.created.unwrap_or_default();

        Self {
            id: c.id.clone().unwrap_or_default(),
            name,
            image: c.image.clone().unwrap_or_default(),
            command: c.command.clone().unwrap_or_default(),
            created,
            age: age_since_unix(created),
            state: c.state.clone().unwrap_or_default(),
            status: c.status.clone().unwrap_or_default(),
            ports: c.ports.as_deref().map(format_ports).unwrap_or_default(),
        }
    }
}

impl From<ContainerSummary> for ContainerRecord {
    fn from(c: ContainerSummary) -> Self {
        Self::from(&c)
    }
}
