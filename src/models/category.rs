//! A named screen of pictograms and the text each one speaks.

use crate::models::keyed_store::{Entries, KeyedStore};
use crate::models::{BoardError, Page};

/// One screen of the board: image references mapped to spoken text.
///
/// # Validation
///
/// - Image references must be non-empty and contain no whitespace, since the
///   board file separates the path from its text at the first space
/// - Spoken text and category names must not contain line breaks
///
/// The category name is fixed at construction. An empty name is the unnamed
/// home screen.
#[derive(Debug, Clone, Default)]
pub struct Category {
    name: String,
    items: KeyedStore<String, String>,
}

impl Category {
    /// Creates an empty category.
    ///
    /// # Examples
    ///
    /// ```
    /// use aacboard::models::{Category, Page};
    ///
    /// let mut food = Category::new("food");
    /// food.add_item("img/fries.png", "french fries").unwrap();
    /// assert_eq!(food.speak("img/fries.png").unwrap(), "french fries");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: KeyedStore::new(),
        }
    }

    /// The display name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the spoken text for `image` without changing anything.
    ///
    /// # Errors
    ///
    /// - [`BoardError::ElementNotFound`] if the image is not in this category
    /// - [`BoardError::InvalidImage`] for an empty image reference
    pub fn speak(&self, image: &str) -> Result<&str, BoardError> {
        self.items
            .get(image)
            .map(String::as_str)
            .map_err(|err| BoardError::from_store(err, image))
    }

    /// Removes an image and returns its text. Absent images are ignored.
    ///
    /// The last item moves into the removed slot, so `image_locs` order is
    /// not preserved across removals.
    pub fn remove_item(&mut self, image: &str) -> Option<String> {
        self.items.remove(image)
    }

    /// Iterates over `(image, text)` pairs in storage order.
    pub fn items(&self) -> Entries<'_, String, String> {
        self.items.entries()
    }

    /// Number of images in this category.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the category holds no images.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates an image reference.
    pub(crate) fn validate_image(image: &str) -> Result<(), BoardError> {
        if image.is_empty() {
            return Err(BoardError::InvalidImage(
                "image reference cannot be empty".to_string(),
            ));
        }

        if image.chars().any(char::is_whitespace) {
            return Err(BoardError::InvalidImage(format!(
                "image reference '{image}' cannot contain whitespace"
            )));
        }

        Ok(())
    }

    /// Validates spoken or display text.
    pub(crate) fn validate_text(text: &str) -> Result<(), BoardError> {
        if text.contains(['\n', '\r']) {
            return Err(BoardError::InvalidText(format!(
                "text '{}' cannot contain line breaks",
                text.escape_debug()
            )));
        }

        Ok(())
    }
}

impl Page for Category {
    fn add_item(&mut self, image: &str, text: &str) -> Result<(), BoardError> {
        Self::validate_image(image)?;
        Self::validate_text(text)?;

        self.items
            .set(image.to_string(), text.to_string())
            .map_err(|err| BoardError::from_store(err, image))
    }

    fn image_locs(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    fn category_name(&self) -> &str {
        &self.name
    }

    fn select(&mut self, image: &str) -> Result<String, BoardError> {
        self.speak(image).map(str::to_owned)
    }

    fn has_image(&self, image: &str) -> bool {
        self.items.has_key(image)
    }
}
