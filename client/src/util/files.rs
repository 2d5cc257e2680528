//! File input helpers.

use crate::net::backend::Attachment;

/// First file chosen in the `<input type="file">` that fired `ev`.
pub fn attachment_from_event(ev: &leptos::ev::Event) -> Option<Attachment> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        input.files()?.get(0).map(Attachment::from_file)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Object URL for previewing a picked image, revoked by the caller.
pub fn preview_url(attachment: &Attachment) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::Url::create_object_url_with_blob(&attachment.file).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = attachment;
        None
    }
}

pub fn revoke_preview(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
