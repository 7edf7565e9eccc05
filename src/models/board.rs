//! Two-level navigation over a home screen and its categories.

use crate::models::keyed_store::{KeyedStore, StoreError};
use crate::models::{Category, Page};
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// Marker that starts an item line in the board file format.
pub const ITEM_MARKER: char = '>';

/// Errors surfaced by [`Category`] and [`Board`] operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The selected image is neither a category nor an item on the current screen.
    #[error("no such element: {0}")]
    ElementNotFound(String),
    /// An image reference was empty or otherwise unusable.
    #[error("invalid image: {0}")]
    InvalidImage(String),
    /// Spoken or display text could not be stored.
    #[error("invalid text: {0}")]
    InvalidText(String),
    /// A category is already registered under this image.
    #[error("category already exists: {0}")]
    DuplicateCategory(String),
    /// Writing the board failed.
    #[error("failed to write board: {0}")]
    Io(#[from] io::Error),
}

impl BoardError {
    /// Translates a storage error for `key` into the board-level contract.
    pub(crate) fn from_store(err: StoreError, key: &str) -> Self {
        match err {
            StoreError::InvalidKey => {
                Self::InvalidImage("image reference cannot be empty".to_string())
            }
            StoreError::KeyNotFound => Self::ElementNotFound(key.to_string()),
        }
    }
}

/// The full communication board.
///
/// The board owns a home screen plus a table of categories keyed by the image
/// that opens them. Exactly one screen is current: home at construction and
/// after [`Board::reset`], or a registered category after selecting its image.
///
/// # Selection
///
/// [`Page::select`] resolves a token in a fixed order:
///
/// 1. A registered category image switches to that category and returns `""`
/// 2. An item on the current screen returns its spoken text
/// 3. Anything else is [`BoardError::ElementNotFound`]
///
/// # Examples
///
/// ```
/// use aacboard::models::{Board, Page};
///
/// let mut board = Board::new();
/// board.add_category("img/food/plate.png", "food").unwrap();
/// board.add_item_to("img/food/plate.png", "img/fries.png", "french fries").unwrap();
///
/// assert_eq!(board.select("img/food/plate.png").unwrap(), "");
/// assert_eq!(board.category_name(), "food");
/// assert_eq!(board.select("img/fries.png").unwrap(), "french fries");
///
/// board.reset();
/// assert_eq!(board.category_name(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Board {
    home: Category,
    categories: KeyedStore<String, Category>,
    /// Image of the current category; `None` while on the home screen
    current: Option<String>,
}

impl Board {
    /// Creates a board with an empty home screen and no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns to the home screen. No stored data changes.
    pub fn reset(&mut self) {
        if let Some(image) = self.current.take() {
            debug!(from = %image, "reset to home");
        }
    }

    /// Returns true while the home screen is current.
    pub fn is_home(&self) -> bool {
        self.current.is_none()
    }

    /// Image of the current category, or `None` on the home screen.
    pub fn current_image(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Registers a new, empty category opened by `image`.
    ///
    /// The category image is also placed on the home screen with `name` as its
    /// text, so the home screen lists every category.
    ///
    /// # Errors
    ///
    /// - [`BoardError::DuplicateCategory`] if `image` already opens a category
    /// - [`BoardError::InvalidImage`] / [`BoardError::InvalidText`] for unusable
    ///   input, including an image starting with [`ITEM_MARKER`]
    pub fn add_category(&mut self, image: &str, name: &str) -> Result<(), BoardError> {
        Category::validate_image(image)?;
        Category::validate_text(name)?;

        // a header starting with the marker would read back as an item line
        if image.starts_with(ITEM_MARKER) {
            return Err(BoardError::InvalidImage(format!(
                "category image '{image}' cannot start with '{ITEM_MARKER}'"
            )));
        }

        if self.categories.has_key(image) {
            return Err(BoardError::DuplicateCategory(image.to_string()));
        }

        self.categories
            .set(image.to_string(), Category::new(name))
            .map_err(|err| BoardError::from_store(err, image))?;
        self.home.add_item(image, name)?;

        debug!(image, name, "registered category");
        Ok(())
    }

    /// Unregisters the category opened by `image` and returns it.
    ///
    /// Its image leaves the home screen, and if it was current the board
    /// returns home.
    pub fn remove_category(&mut self, image: &str) -> Option<Category> {
        let removed = self.categories.remove(image)?;
        self.home.remove_item(image);

        if self.current.as_deref() == Some(image) {
            self.current = None;
        }

        debug!(image, "removed category");
        Some(removed)
    }

    /// Adds an item to a registered category without navigating to it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ElementNotFound`] if no category is registered
    /// under `category`, or the validation errors of [`Page::add_item`].
    pub fn add_item_to(
        &mut self,
        category: &str,
        image: &str,
        text: &str,
    ) -> Result<(), BoardError> {
        self.categories
            .get_mut(category)
            .map_err(|err| BoardError::from_store(err, category))?
            .add_item(image, text)
    }

    /// Removes an item from a registered category without navigating to it.
    ///
    /// Returns `Ok(None)` when the category exists but holds no such image.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ElementNotFound`] if no category is registered
    /// under `category`.
    pub fn remove_item_from(
        &mut self,
        category: &str,
        image: &str,
    ) -> Result<Option<String>, BoardError> {
        let page = self
            .categories
            .get_mut(category)
            .map_err(|err| BoardError::from_store(err, category))?;
        Ok(page.remove_item(image))
    }

    /// Removes an item from the current screen and returns its text.
    pub fn remove_item(&mut self, image: &str) -> Option<String> {
        self.current_page_mut().remove_item(image)
    }

    /// Returns true if `image` opens a registered category.
    pub fn has_category(&self, image: &str) -> bool {
        self.categories.has_key(image)
    }

    /// Looks up a registered category by the image that opens it.
    pub fn category(&self, image: &str) -> Option<&Category> {
        self.categories.get(image).ok()
    }

    /// Iterates over `(image, category)` pairs in storage order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> + '_ {
        self.categories
            .entries()
            .map(|(image, category)| (image.as_str(), category))
    }

    /// Number of registered categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// The home screen.
    pub fn home(&self) -> &Category {
        &self.home
    }

    /// Writes every registered category in the board file format.
    ///
    /// Each category produces a header line `<image> <name>` followed by one
    /// `><image> <text>` line per item. Nothing in the board changes, even
    /// when the writer fails part way.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), BoardError> {
        for (image, category) in &self.categories {
            writeln!(writer, "{} {}", image, category.name())?;
            for (item, text) in category.items() {
                writeln!(writer, "{ITEM_MARKER}{item} {text}")?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn current_page(&self) -> &Category {
        self.current
            .as_deref()
            .and_then(|image| self.categories.get(image).ok())
            .unwrap_or(&self.home)
    }

    fn current_page_mut(&mut self) -> &mut Category {
        match self.current.as_deref() {
            Some(image) => match self.categories.get_mut(image) {
                Ok(category) => category,
                Err(_) => &mut self.home,
            },
            None => &mut self.home,
        }
    }
}

impl Page for Board {
    /// Adds to the current screen. A category is never registered this way;
    /// use [`Board::add_category`] for that.
    ///
    /// At home, a registered category's image is rejected with
    /// [`BoardError::DuplicateCategory`] so its home label stays its name.
    fn add_item(&mut self, image: &str, text: &str) -> Result<(), BoardError> {
        if self.is_home() && self.categories.has_key(image) {
            return Err(BoardError::DuplicateCategory(image.to_string()));
        }
        self.current_page_mut().add_item(image, text)
    }

    fn image_locs(&self) -> Vec<String> {
        self.current_page().image_locs()
    }

    fn category_name(&self) -> &str {
        if self.is_home() {
            ""
        } else {
            self.current_page().name()
        }
    }

    fn select(&mut self, image: &str) -> Result<String, BoardError> {
        if self.categories.has_key(image) {
            debug!(image, "switched category");
            self.current = Some(image.to_string());
            return Ok(String::new());
        }

        let page = self.current_page();
        if page.has_image(image) {
            return page.speak(image).map(str::to_owned);
        }

        Err(BoardError::ElementNotFound(image.to_string()))
    }

    /// True if `image` is an item in any registered category.
    fn has_image(&self, image: &str) -> bool {
        self.categories
            .values()
            .any(|category| category.has_image(image))
    }
}
