//! Draft listing accumulated by the creation form.
//!
//! Images are an ordered sequence capped at [`MAX_DRAFT_IMAGES`]; the cover
//! is whichever image sits at index 0. A batch that would exceed the cap is
//! rejected whole.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use crate::listing::{Category, Condition, Price, PriceError};

pub const MAX_DRAFT_IMAGES: usize = 5;

/// Error returned by draft mutations and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("You can upload maximum {max} images")]
    TooManyImages { current: usize, incoming: usize, max: usize },
    #[error("{0} is required")]
    MissingField(DraftField),
    #[error("unknown {field} option: {value}")]
    UnknownOption { field: DraftField, value: String },
    #[error(transparent)]
    Price(#[from] PriceError),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// Form fields addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Description,
    Price,
    Category,
    Condition,
    Location,
}

impl DraftField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
            Self::Category => "category",
            Self::Condition => "condition",
            Self::Location => "location",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "price" => Some(Self::Price),
            "category" => Some(Self::Category),
            "condition" => Some(Self::Condition),
            "location" => Some(Self::Location),
            _ => None,
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An attached image. `preview_url` is a client-local object URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftImage {
    pub name: String,
    pub preview_url: String,
}

/// Listing fields as typed so far. Price stays raw text until validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftListing {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub location: String,
    images: Vec<DraftImage>,
}

/// A validated draft, ready for the create boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    pub condition: Condition,
    pub location: String,
    /// Image names in display order; the first is the cover.
    #[serde(default)]
    pub images: Vec<String>,
}

impl DraftListing {
    /// Write one field. Select fields take the option label; an empty label
    /// clears the selection.
    ///
    /// # Errors
    ///
    /// [`DraftError::UnknownOption`] when a select label is not recognized.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        match field {
            DraftField::Title => self.title = value.to_owned(),
            DraftField::Description => self.description = value.to_owned(),
            DraftField::Price => self.price = value.to_owned(),
            DraftField::Location => self.location = value.to_owned(),
            DraftField::Category => {
                self.category = select_option(field, value, Category::from_label)?;
            }
            DraftField::Condition => {
                self.condition = select_option(field, value, Condition::from_label)?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn images(&self) -> &[DraftImage] {
        &self.images
    }

    #[must_use]
    pub fn cover(&self) -> Option<&DraftImage> {
        self.images.first()
    }

    #[must_use]
    pub fn remaining_image_slots(&self) -> usize {
        MAX_DRAFT_IMAGES.saturating_sub(self.images.len())
    }

    /// Append a batch of images, or reject all of it if the cap would be
    /// exceeded.
    ///
    /// # Errors
    ///
    /// [`DraftError::TooManyImages`]; the draft is unchanged.
    pub fn attach_images(&mut self, batch: Vec<DraftImage>) -> Result<(), DraftError> {
        if self.images.len() + batch.len() > MAX_DRAFT_IMAGES {
            return Err(DraftError::TooManyImages {
                current: self.images.len(),
                incoming: batch.len(),
                max: MAX_DRAFT_IMAGES,
            });
        }
        self.images.extend(batch);
        Ok(())
    }

    /// Remove the image at `index`, shifting later images down.
    pub fn remove_image(&mut self, index: usize) -> Option<DraftImage> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Check required fields and parse the price.
    ///
    /// # Errors
    ///
    /// The first missing or malformed field, in form order.
    pub fn validate(&self) -> Result<NewListing, DraftError> {
        let title = required(DraftField::Title, &self.title)?;
        let description = required(DraftField::Description, &self.description)?;
        let price = Price::parse(&self.price)?;
        let category = self.category.ok_or(DraftError::MissingField(DraftField::Category))?;
        let condition = self.condition.ok_or(DraftError::MissingField(DraftField::Condition))?;
        let location = required(DraftField::Location, &self.location)?;

        Ok(NewListing {
            title,
            description,
            price,
            category,
            condition,
            location,
            images: self.images.iter().map(|img| img.name.clone()).collect(),
        })
    }
}

impl NewListing {
    /// Re-run the draft rules on a listing received over the wire.
    ///
    /// # Errors
    ///
    /// [`DraftError::MissingField`] for blank text fields, or
    /// [`DraftError::TooManyImages`] when more than the cap is named.
    pub fn check(&self) -> Result<(), DraftError> {
        required(DraftField::Title, &self.title)?;
        required(DraftField::Description, &self.description)?;
        required(DraftField::Location, &self.location)?;
        if self.images.len() > MAX_DRAFT_IMAGES {
            return Err(DraftError::TooManyImages { current: 0, incoming: self.images.len(), max: MAX_DRAFT_IMAGES });
        }
        Ok(())
    }
}

fn required(field: DraftField, value: &str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

fn select_option<T>(field: DraftField, value: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>, DraftError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse(value)
        .map(Some)
        .ok_or_else(|| DraftError::UnknownOption { field, value: value.to_owned() })
}
