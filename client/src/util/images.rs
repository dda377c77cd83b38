//! Image picker helpers for the new-listing form.
//!
//! Selected files become client-local object URLs for previews. They are
//! never uploaded; only the file names travel with a submitted listing.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use market::draft::{DraftImage, MAX_DRAFT_IMAGES};

/// Hint under the picker, e.g. `3 of 5 photos. The first photo is the cover.`
#[must_use]
pub fn upload_hint(attached: usize) -> String {
    format!("{attached} of {MAX_DRAFT_IMAGES} photos. The first photo is the cover.")
}

/// Collect the files picked in a file `<input>` as draft images.
///
/// Requires a browser; returns an empty batch on the server.
pub fn images_from_input(ev: &leptos::ev::Event) -> Vec<DraftImage> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return Vec::new();
        };
        let Some(files) = input.files() else {
            return Vec::new();
        };
        let batch = (0..files.length())
            .filter_map(|i| files.get(i))
            .filter_map(|file| {
                let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok()?;
                Some(DraftImage { name: file.name(), preview_url })
            })
            .collect();
        // Let the same file be picked again after removal.
        input.set_value("");
        batch
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        Vec::new()
    }
}

/// Release object URLs that are no longer displayed.
pub fn revoke_previews(images: &[DraftImage]) {
    #[cfg(feature = "hydrate")]
    {
        for image in images {
            let _ = web_sys::Url::revoke_object_url(&image.preview_url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = images;
    }
}
