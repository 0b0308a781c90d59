//! Client-side staging of binary assets pending upload.
//!
//! Staged files exist only in the browser until the form is submitted; they
//! are never part of the persistence payload. The staging rules are generic
//! over the file handle so they can be exercised off-wasm.

pub const MAX_PENDING_GALLERY_FILES: usize = 10;

#[derive(Debug, Clone)]
pub struct PendingUploads<F = web_sys::File> {
    poster: Option<F>,
    images: Vec<F>,
    document: Option<F>,
}

impl<F> Default for PendingUploads<F> {
    fn default() -> Self {
        Self {
            poster: None,
            images: Vec::new(),
            document: None,
        }
    }
}

impl<F> PendingUploads<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Staging a second poster replaces the first; a film has one poster.
    pub fn set_poster(&mut self, file: F) {
        self.poster = Some(file);
    }

    pub fn clear_poster(&mut self) {
        self.poster = None;
    }

    pub fn poster(&self) -> Option<&F> {
        self.poster.as_ref()
    }

    /// Append gallery candidates. Rejected as a whole, before any upload
    /// call is made, if the pending total would exceed
    /// [`MAX_PENDING_GALLERY_FILES`].
    pub fn stage_images(&mut self, files: Vec<F>) -> Result<(), String> {
        if self.images.len() + files.len() > MAX_PENDING_GALLERY_FILES {
            return Err(format!(
                "At most {} gallery images can be staged for upload",
                MAX_PENDING_GALLERY_FILES
            ));
        }
        self.images.extend(files);
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn images(&self) -> &[F] {
        &self.images
    }

    /// A film carries a single document upload; restaging replaces it.
    pub fn set_document(&mut self, file: F) {
        self.document = Some(file);
    }

    pub fn clear_document(&mut self) {
        self.document = None;
    }

    pub fn document(&self) -> Option<&F> {
        self.document.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.poster.is_none() && self.images.is_empty() && self.document.is_none()
    }

    pub fn clear(&mut self) {
        self.poster = None;
        self.images.clear();
        self.document = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_poster_replaces_rather_than_appends() {
        let mut uploads: PendingUploads<&str> = PendingUploads::new();
        uploads.set_poster("first.jpg");
        uploads.set_poster("second.jpg");
        assert_eq!(uploads.poster(), Some(&"second.jpg"));
    }

    #[test]
    fn staging_beyond_the_gallery_cap_is_rejected_whole() {
        let mut uploads: PendingUploads<usize> = PendingUploads::new();
        uploads.stage_images((0..MAX_PENDING_GALLERY_FILES).collect()).unwrap();
        // The rejected batch stages nothing.
        assert!(uploads.stage_images(vec![99]).is_err());
        assert_eq!(uploads.images().len(), MAX_PENDING_GALLERY_FILES);
    }

    #[test]
    fn staging_keeps_array_order_for_sequential_upload() {
        let mut uploads: PendingUploads<&str> = PendingUploads::new();
        uploads.stage_images(vec!["a.png", "b.png"]).unwrap();
        uploads.stage_images(vec!["c.png"]).unwrap();
        assert_eq!(uploads.images(), &["a.png", "b.png", "c.png"]);
        uploads.remove_image(1);
        assert_eq!(uploads.images(), &["a.png", "c.png"]);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut uploads: PendingUploads<&str> = PendingUploads::new();
        uploads.set_poster("p");
        uploads.set_document("d");
        uploads.stage_images(vec!["i"]).unwrap();
        assert!(!uploads.is_empty());
        uploads.clear();
        assert!(uploads.is_empty());
    }
}
