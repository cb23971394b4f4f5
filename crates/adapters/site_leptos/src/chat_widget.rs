//! [`ChatWidgetLoader`] that injects the MyAlice web chat launcher.

use folio_app::ports::ChatWidgetLoader;
use folio_domain::chat_widget::ChatWidgetOptions;
use folio_domain::error::FolioError;
use wasm_bindgen::prelude::*;

use crate::error::BrowserError;

/// Global the widget script defines once loaded.
const WIDGET_GLOBAL: &str = "MyAliceWebChat";

/// Loads the widget script from `script_src` and initialises it on load.
#[derive(Debug, Clone)]
pub struct MyAliceWidget {
    script_src: String,
}

impl MyAliceWidget {
    pub fn new(script_src: impl Into<String>) -> Self {
        Self {
            script_src: script_src.into(),
        }
    }

    fn inject(&self, options: &ChatWidgetOptions) -> Result<(), BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        if js_sys::Reflect::has(&window, &JsValue::from_str(WIDGET_GLOBAL))? {
            return Ok(());
        }
        let document = window.document().ok_or(BrowserError::NoDocument)?;
        let body = document.body().ok_or(BrowserError::NoDocument)?;

        let container = document.create_element("div")?;
        container.set_id(&options.selector);

        let script: web_sys::HtmlScriptElement = document
            .create_element("script")?
            .dyn_into()
            .map_err(|_| BrowserError::Js("created element is not a script".to_string()))?;
        script.set_type("text/javascript");
        script.set_async(true);
        script.set_src(&self.script_src);

        let init_options = to_js(options)?;
        let on_load = Closure::once_into_js(move || {
            if let Err(err) = init_widget(&init_options) {
                tracing::warn!(error = %err, "chat widget init failed");
            }
        });
        script.set_onload(Some(on_load.unchecked_ref()));

        body.append_child(&script)?;
        body.append_child(&container)?;
        Ok(())
    }
}

impl ChatWidgetLoader for MyAliceWidget {
    fn load(&self, options: &ChatWidgetOptions) -> Result<(), FolioError> {
        self.inject(options).map_err(BrowserError::into_widget)
    }
}

fn to_js(options: &ChatWidgetOptions) -> Result<JsValue, BrowserError> {
    let json = serde_json::to_string(options).map_err(|err| BrowserError::Js(err.to_string()))?;
    Ok(js_sys::JSON::parse(&json)?)
}

fn init_widget(options: &JsValue) -> Result<(), BrowserError> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    let widget = js_sys::Reflect::get(&window, &JsValue::from_str(WIDGET_GLOBAL))?;
    let init: js_sys::Function = js_sys::Reflect::get(&widget, &JsValue::from_str("init"))?
        .dyn_into()
        .map_err(|_| BrowserError::Js(format!("{WIDGET_GLOBAL}.init is not a function")))?;
    init.call1(&widget, options)?;
    Ok(())
}
