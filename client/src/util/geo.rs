//! Browser geolocation for complaint capture.
//!
//! Requires a browser environment. SSR builds report `Unavailable` so the
//! submit form simply keeps waiting for a location.

use crate::net::types::GeoPoint;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("Geolocation is not supported by this browser")]
    Unavailable,
    #[error("Unable to get location. Please enable location services.")]
    Denied,
}

/// One-shot position fix from `navigator.geolocation`.
///
/// # Errors
///
/// `Unavailable` without a geolocation API, `Denied` when the browser
/// refuses or fails to produce a fix.
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::channel::oneshot;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::*;

        let geolocation = web_sys::window()
            .map(|w| w.navigator())
            .and_then(|n| n.geolocation().ok())
            .ok_or(GeoError::Unavailable)?;

        let (tx, rx) = oneshot::channel::<Option<GeoPoint>>();
        let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));
        let tx_err = tx.clone();

        let on_success = Closure::once_into_js(move |position: JsValue| {
            let fix = read_coords(&position);
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(fix);
            }
        });
        let on_error = Closure::once_into_js(move |_err: JsValue| {
            if let Some(tx) = tx_err.borrow_mut().take() {
                let _ = tx.send(None);
            }
        });

        geolocation
            .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
            .map_err(|_| GeoError::Unavailable)?;

        rx.await.ok().flatten().ok_or(GeoError::Denied)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GeoError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn read_coords(position: &wasm_bindgen::JsValue) -> Option<GeoPoint> {
    use js_sys::Reflect;

    let coords = Reflect::get(position, &"coords".into()).ok()?;
    let lat = Reflect::get(&coords, &"latitude".into()).ok()?.as_f64()?;
    let lng = Reflect::get(&coords, &"longitude".into()).ok()?.as_f64()?;
    Some(GeoPoint { lat, lng })
}
