//! Icon image loading for the animated background. Each image loads
//! independently; a failure or timeout drops that icon from the set and the
//! engine keeps going with whatever survived.

use futures::future::{join_all, select, Either};
use futures::pin_mut;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use hoshikuzu_core::scheduler::ICON_LOAD_TIMEOUT_MS;

pub(crate) async fn load_icon_set(urls: Vec<String>) -> Vec<HtmlImageElement> {
    let loads = urls.iter().map(|url| load_icon(url));
    let mut icons = Vec::with_capacity(urls.len());
    for (url, result) in urls.iter().zip(join_all(loads).await) {
        match result {
            Ok(image) => icons.push(image),
            Err(reason) => {
                gloo::console::warn!("background icon skipped", url.as_str(), reason);
            }
        }
    }
    icons
}

async fn load_icon(url: &str) -> Result<HtmlImageElement, &'static str> {
    let image = HtmlImageElement::new().map_err(|_| "create failed")?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });
    image.set_src(url);

    let load = JsFuture::from(promise);
    let timeout = TimeoutFuture::new(ICON_LOAD_TIMEOUT_MS);
    pin_mut!(load, timeout);
    match select(load, timeout).await {
        Either::Left((Ok(_), _)) => Ok(image),
        Either::Left((Err(_), _)) => Err("load error"),
        Either::Right(_) => Err("timed out"),
    }
}
