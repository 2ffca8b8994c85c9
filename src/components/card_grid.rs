//! Card height synchronization: square cards keep a 1:1 aspect by pinning
//! their height to the first square's measured width, and wide cards in the
//! same grid match that height. Re-applied on load and resize.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

fn set_heights(root: &Element, selector: &str, size: f64) {
    if let Ok(nodes) = root.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let _ = el.style().set_property("height", &format!("{size}px"));
            }
        }
    }
}

fn sync_heights(root: &Element) -> Option<()> {
    let first = root.query_selector(".lm-card--square").ok().flatten()?;
    let size = first.get_bounding_client_rect().width();
    set_heights(root, ".lm-card--square", size);
    set_heights(root, ".lm-card--wide", size);
    Some(())
}

#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    let root_ref = use_node_ref();

    {
        let root_ref = root_ref.clone();
        use_effect_with_deps(
            move |_| {
                let apply = Closure::wrap(Box::new(move || {
                    if let Some(root) = root_ref.cast::<Element>() {
                        let _ = sync_heights(&root);
                    }
                }) as Box<dyn FnMut()>);

                let win_handle = window();
                if let Some(win) = &win_handle {
                    let _ = win
                        .add_event_listener_with_callback("resize", apply.as_ref().unchecked_ref());
                    let _ = win
                        .add_event_listener_with_callback("load", apply.as_ref().unchecked_ref());
                }

                let _ = apply
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    if let Some(win) = &win_handle {
                        for event in ["resize", "load"] {
                            let _ = win.remove_event_listener_with_callback(
                                event,
                                apply.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class={classes!("card-grid", props.class.clone())} ref={root_ref}>
            { for props.children.iter() }
        </div>
    }
}
