// src/domain/entry.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tag::Tag;
use chrono::{Local, NaiveDateTime};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Timestamp format used in storage and export: "YYYY-MM-DD HH:MM:SS"
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed classification label for what an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Code,
    Writing,
    Image,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::General => "General",
            Category::Code => "Code",
            Category::Writing => "Writing",
            Category::Image => "Image",
            Category::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "code" => Ok(Category::Code),
            "writing" => Ok(Category::Writing),
            "image" => Ok(Category::Image),
            "other" => Ok(Category::Other),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

/// Fixed classification label for the AI model an entry targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiModel {
    ChatGpt,
    Claude,
    DallE,
    Midjourney,
    StableDiffusion,
    Other,
}

impl fmt::Display for AiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AiModel::ChatGpt => "ChatGPT",
            AiModel::Claude => "Claude",
            AiModel::DallE => "DALL-E",
            AiModel::Midjourney => "Midjourney",
            AiModel::StableDiffusion => "Stable Diffusion",
            AiModel::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for AiModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chatgpt" => Ok(AiModel::ChatGpt),
            "claude" => Ok(AiModel::Claude),
            "dall-e" | "dalle" => Ok(AiModel::DallE),
            "midjourney" => Ok(AiModel::Midjourney),
            "stable diffusion" | "stable-diffusion" => Ok(AiModel::StableDiffusion),
            "other" => Ok(AiModel::Other),
            _ => Err(DomainError::UnknownModel(s.to_string())),
        }
    }
}

/// One recorded prompt/link record with metadata.
///
/// Entries are immutable after creation: no setters beyond the id stamp
/// applied by the repository on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Option<i32>,
    pub prompt: String,
    pub link: String,
    pub tags: HashSet<Tag>,
    pub category: Category,
    pub ai_model: AiModel,
    pub date_added: NaiveDateTime,
}

impl Entry {
    /// Create a new entry stamped with the current local time.
    pub fn new<S: AsRef<str>>(
        prompt: S,
        link: S,
        tags: HashSet<Tag>,
        category: Category,
        ai_model: AiModel,
    ) -> Self {
        Self {
            id: None,
            prompt: prompt.as_ref().to_string(),
            link: link.as_ref().to_string(),
            tags,
            category,
            ai_model,
            date_added: Local::now().naive_local(),
        }
    }

    /// Reconstruct an entry from its storage representation.
    pub fn from_storage(
        id: i32,
        prompt: String,
        link: String,
        tag_string: String,
        category: &str,
        ai_model: &str,
        date_added: &str,
    ) -> DomainResult<Self> {
        let tags = Tag::parse_tags(tag_string)?;
        let category = category.parse::<Category>()?;
        let ai_model = ai_model.parse::<AiModel>()?;
        let date_added = NaiveDateTime::parse_from_str(date_added, DATE_FORMAT)
            .map_err(|e| DomainError::InvalidTimestamp(format!("{}: {}", date_added, e)))?;

        Ok(Self {
            id: Some(id),
            prompt,
            link,
            tags,
            category,
            ai_model,
            date_added,
        })
    }

    /// True when both prompt and link are empty (nothing worth storing)
    pub fn is_blank(prompt: &str, link: &str) -> bool {
        prompt.trim().is_empty() && link.trim().is_empty()
    }

    /// Get formatted tag string, sorted and comma-separated
    pub fn formatted_tags(&self) -> String {
        Tag::format_tags(&self.tags)
    }

    /// Get the timestamp in storage format
    pub fn formatted_date(&self) -> String {
        self.date_added.format(DATE_FORMAT).to_string()
    }

    /// Case-insensitive substring match over prompt, link and tags
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.prompt.to_lowercase().contains(&term)
            || self.link.to_lowercase().contains(&term)
            || self.formatted_tags().contains(&term)
    }

    /// Set the ID (used by the repository after insert)
    pub fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} <{}> ({}/{})",
            self.id.map_or("New".to_string(), |id| id.to_string()),
            self.prompt,
            self.link,
            self.category,
            self.ai_model,
        )
    }
}
