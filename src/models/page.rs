//! Shared interface for anything that can be shown as a screen of pictograms.

use crate::models::BoardError;

/// A screen of selectable images.
///
/// Both a single [`Category`](crate::models::Category) and the whole
/// [`Board`](crate::models::Board) are pages: a category is one fixed screen,
/// while a board forwards to whichever category is current.
pub trait Page {
    /// Adds (or replaces) the spoken text for an image on this page.
    fn add_item(&mut self, image: &str, text: &str) -> Result<(), BoardError>;

    /// Image references shown on this page, in storage order.
    fn image_locs(&self) -> Vec<String>;

    /// Name of the page, empty for the home screen.
    fn category_name(&self) -> &str;

    /// Handles a selection and returns the text to speak.
    ///
    /// An empty string means the selection changed the screen rather than
    /// producing speech.
    fn select(&mut self, image: &str) -> Result<String, BoardError>;

    /// Returns true if the image can be selected somewhere on this page.
    fn has_image(&self, image: &str) -> bool;
}
