use std::borrow::Cow;
use std::cmp::Ordering;
use std::time::Duration;

use bollard::models::ImageSummary;

use crate::resource::{age_since_unix, format_duration, format_size, short_id, Column, Resource, ResourceKind, SortKey};

const NONE: &str = "<none>";

const COLUMNS: &[Column] = &[
    Column::fill("REPOSITORY", 3),
    Column::fill("TAG", 1),
    Column::fixed("IMAGE ID", 12),
    Column::fixed("CREATED", 7),
    Column::fixed("SIZE", 8),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSortKey {
    Repository,
    Tag,
    Created,
    Size,
}

impl SortKey for ImageSortKey {
    fn label(&self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::Tag => "tag",
            Self::Created => "created",
            Self::Size => "size",
        }
    }

    fn column(&self) -> Option<usize> {
        match self {
            Self::Repository => Some(0),
            Self::Tag => Some(1),
            Self::Created => Some(3),
            Self::Size => Some(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub id: String,
    /// `repository:tag`, or the short id for dangling images.
    pub name: String,
    pub repository: String,
    pub tag: String,
    pub created: i64,
    pub age: Duration,
    pub size: i64,
}

/// Splits `registry:5000/app:1.0` into repository and tag. A colon that is
/// followed by a path segment belongs to the registry host, not the tag.
pub fn split_repo_tag(reference: &str) -> (String, String) {
    match reference.rsplit_once(':') {
        Some((repo, tag)) if !tag.contains('/') && !repo.is_empty() => (repo.to_string(), tag.to_string()),
        _ => (reference.to_string(), NONE.to_string()),
    }
}

impl Resource for ImageRecord {
    type SortKey = ImageSortKey;

    const KIND: ResourceKind = ResourceKind::Images;

    fn name(&self) -> &str {
        &self.name
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn sort_keys() -> &'static [ImageSortKey] {
        &[ImageSortKey::Repository, ImageSortKey::Tag, ImageSortKey::Created, ImageSortKey::Size]
    }

    fn compare(&self, other: &Self, key: ImageSortKey) -> Ordering {
        match key {
            ImageSortKey::Repository => self.repository.cmp(&other.repository),
            ImageSortKey::Tag => self.tag.cmp(&other.tag),
            ImageSortKey::Created => self.created.cmp(&other.created),
            ImageSortKey::Size => self.size.cmp(&other.size),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.repository.clone(),
            self.tag.clone(),
            short_id(&self.id).to_string(),
            format_duration(self.age),
            format_size(self.size),
        ]
    }

    fn filter_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}", self.name, short_id(&self.id)))
    }
}

impl From<&ImageSummary> for ImageRecord {
    fn from(img: &ImageSummary) -> Self {
        let reference = img.repo_tags.iter().find(|t| t.as_str() != "<none>:<none>");
        let (repository, tag) = match reference {
            Some(r) => split_repo_tag(r),
            None => (NONE.to_string(), NONE.to_string()),
        };
        let name = match reference {
            Some(r) => r.clone(),
            None => short_id(&img.id).to_string(),
        };

        Self {
            id: img.id.clone(),
            name,
            repository,
            tag,
            created: img.created,
            age: age_since_unix(img.created),
            size: img.size,
        }
    }
}

impl From<ImageSummary> for ImageRecord {
    fn from(img: ImageSummary) -> Self {
        Self::from(&img)
    }
}
