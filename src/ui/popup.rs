/// Popup UI for Tab Grouper extension
///
/// The popup has exactly one job: relay an opaque "open settings" request
/// to the host. It carries no parameters, gets no response, and never
/// touches the origin index or the grouping policy.

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn openOptionsPage() -> Result<(), JsValue>;
}

#[function_component(App)]
pub fn app() -> Html {
    // Relay the request as soon as the popup opens
    use_effect_with((), move |_| {
        spawn_local(async move {
            if let Err(e) = openOptionsPage().await {
                log::warn!("Failed to open settings: {:?}", e);
            }
        });
        || ()
    });

    // And again on click, in case the first relay was dismissed
    let on_open_settings = Callback::from(move |_| {
        spawn_local(async move {
            if let Err(e) = openOptionsPage().await {
                log::warn!("Failed to open settings: {:?}", e);
            }
        });
    });

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Tab Grouper"}</h1>
            <p class="popup-text">
                {"Tabs from the same site are grouped automatically once three of them pile up in a window."}
            </p>
            <Button onclick={on_open_settings} variant={ButtonVariant::Secondary} block={true}>
                {"⚙️ Open Settings"}
            </Button>
            <p class="footer-popup">
                {"Tab Grouper v0.1.0"}
            </p>
        </div>
    }
}
