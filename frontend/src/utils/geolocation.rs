use async_trait::async_trait;

use crate::state::attendance::LocationProvider;

/// One-shot read of the browser Geolocation API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocation;

pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{:.6}, {:.6}", latitude, longitude)
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl LocationProvider for BrowserGeolocation {
    async fn current_location(&self) -> Result<String, String> {
        use futures::channel::oneshot;
        use std::{cell::RefCell, rc::Rc};
        use wasm_bindgen::{closure::Closure, JsCast, JsValue};

        let geolocation = web_sys::window()
            .ok_or_else(|| "No window object".to_string())?
            .navigator()
            .geolocation()
            .map_err(|_| "Geolocation is not available".to_string())?;

        let (tx, rx) = oneshot::channel::<Result<String, String>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let tx_ok = tx.clone();
        let on_success = Closure::once(move |position: JsValue| {
            let read = |key: &str| -> Option<f64> {
                let coords = js_sys::Reflect::get(&position, &"coords".into()).ok()?;
                js_sys::Reflect::get(&coords, &key.into()).ok()?.as_f64()
            };
            let result = match (read("latitude"), read("longitude")) {
                (Some(lat), Some(lng)) => Ok(format_coordinates(lat, lng)),
                _ => Err("Position has no coordinates".to_string()),
            };
            if let Some(tx) = tx_ok.borrow_mut().take() {
                let _ = tx.send(result);
            }
        });

        let tx_err = tx.clone();
        let on_error = Closure::once(move |error: JsValue| {
            let message = js_sys::Reflect::get(&error, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
                .unwrap_or_else(|| "Unable to read your location".to_string());
            if let Some(tx) = tx_err.borrow_mut().take() {
                let _ = tx.send(Err(message));
            }
        });

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .map_err(|_| "Unable to read your location".to_string())?;

        let result = rx
            .await
            .unwrap_or_else(|_| Err("Location request was dropped".to_string()));
        drop(on_success);
        drop(on_error);
        result
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl LocationProvider for BrowserGeolocation {
    async fn current_location(&self) -> Result<String, String> {
        Err("Geolocation is not available".to_string())
    }
}
