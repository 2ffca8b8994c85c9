//! DOM adapter for the scroll-scrubbed gallery stage.
//!
//! Subscribes to `scroll`/`resize`/`load`, snapshots geometry into a
//! [`ScrollFrame`], and writes the computed [`VisualState`] back as inline
//! styles. Missing elements make an update a no-op; nothing here throws.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, AddEventListenerOptions, HtmlElement, HtmlMediaElement};
use yew::prelude::*;

use super::interp::{self, ScrollFrame, StageTuning, VisualState};

#[derive(Properties, PartialEq)]
pub struct GalleryStageProps {
    pub image_src: AttrValue,
    #[prop_or_default]
    pub image_alt: AttrValue,
    /// Caption shown over the stage while progress is low.
    #[prop_or_default]
    pub label: AttrValue,
    /// Optional overlay video glued to the image.
    #[prop_or_default]
    pub video_src: Option<AttrValue>,
    #[prop_or_default]
    pub video_poster: Option<AttrValue>,
    // String-encoded flags, anything but "false" enables them.
    #[prop_or(AttrValue::Static("true"))]
    pub video_loop: AttrValue,
    #[prop_or(AttrValue::Static("true"))]
    pub video_muted: AttrValue,
    #[prop_or(AttrValue::Static("true"))]
    pub video_autoplay: AttrValue,
}

fn flag(raw: &AttrValue) -> bool {
    raw.as_str() != "false"
}

fn apply(
    img: &HtmlElement,
    video: Option<&HtmlElement>,
    overlay: Option<&HtmlElement>,
    label: Option<&HtmlElement>,
    state: &VisualState,
) {
    let _ = img.style().set_property(
        "transform",
        &format!(
            "translate3d(0, {:.1}px, 0) scale({:.3})",
            state.translate_y, state.scale
        ),
    );
    // Image takes half the blur, the overlay video the full radius.
    let _ = img
        .style()
        .set_property("filter", &format!("blur({:.2}px)", state.blur / 2.0));

    if let Some(video) = video {
        let _ = video
            .style()
            .set_property("transform", &format!("scale({:.3})", state.video_scale));
        let _ = video
            .style()
            .set_property("filter", &format!("blur({:.2}px)", state.blur));
    }
    if let Some(overlay) = overlay {
        let _ = overlay
            .style()
            .set_property("opacity", &format!("{:.3}", state.overlay_opacity));
        let _ = overlay.style().set_property(
            "backdrop-filter",
            &format!("blur({:.2}px)", state.backdrop_blur),
        );
    }
    if let Some(label) = label {
        let _ = label
            .style()
            .set_property("opacity", &format!("{:.3}", state.label_opacity));
    }
}

fn update_stage(
    scrub: &HtmlElement,
    stage: &HtmlElement,
    img: &HtmlElement,
    video: Option<&HtmlElement>,
    overlay: Option<&HtmlElement>,
    label: Option<&HtmlElement>,
) -> Option<()> {
    let win = window()?;
    let document = win.document()?;
    let vw = win.inner_width().ok()?.as_f64()?;
    let vh = win.inner_height().ok()?.as_f64()?;
    let scroll_y = win.scroll_y().ok()?;

    // End scale references the wide card so the image lands at 120% of its
    // width; fall back to the design width when no card is on the page.
    let wide_width = document
        .query_selector(".lm-card--wide")
        .ok()
        .flatten()
        .map(|el| el.get_bounding_client_rect().width())
        .unwrap_or(1100.0);

    let frame = ScrollFrame {
        top: scrub.offset_top() as f64,
        scrub_height: scrub.offset_height() as f64,
        pin_height: stage.offset_height() as f64,
        buffer: 0.2 * vh,
        viewport_width: vw,
        viewport_height: vh,
        wide_width,
    };

    let style = win.get_computed_style(stage).ok().flatten();
    let custom = |name: &str| -> String {
        style
            .as_ref()
            .and_then(|s| s.get_property_value(name).ok())
            .unwrap_or_default()
    };
    let tuning = StageTuning {
        boost: interp::parse_boost(&custom("--stage-boost")),
        overshoot: interp::parse_overshoot(&custom("--stage-overshoot"), vh),
        ..StageTuning::default()
    };

    apply(
        img,
        video,
        overlay,
        label,
        &interp::compute(&frame, &tuning, scroll_y),
    );
    Some(())
}

#[function_component(GalleryStage)]
pub fn gallery_stage(props: &GalleryStageProps) -> Html {
    let scrub_ref = use_node_ref();
    let stage_ref = use_node_ref();
    let img_ref = use_node_ref();
    let video_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let label_ref = use_node_ref();

    {
        let scrub_ref = scrub_ref.clone();
        let stage_ref = stage_ref.clone();
        let img_ref = img_ref.clone();
        let video_ref = video_ref.clone();
        let overlay_ref = overlay_ref.clone();
        let label_ref = label_ref.clone();
        let video_loop = flag(&props.video_loop);
        let video_muted = flag(&props.video_muted);
        let video_autoplay = flag(&props.video_autoplay);

        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    video.set_loop(video_loop);
                    video.set_muted(video_muted);
                    video.set_autoplay(video_autoplay);
                }

                let update = Closure::wrap(Box::new(move || {
                    let (Some(scrub), Some(stage), Some(img)) = (
                        scrub_ref.cast::<HtmlElement>(),
                        stage_ref.cast::<HtmlElement>(),
                        img_ref.cast::<HtmlElement>(),
                    ) else {
                        return;
                    };
                    let _ = update_stage(
                        &scrub,
                        &stage,
                        &img,
                        video_ref.cast::<HtmlElement>().as_ref(),
                        overlay_ref.cast::<HtmlElement>().as_ref(),
                        label_ref.cast::<HtmlElement>().as_ref(),
                    );
                }) as Box<dyn FnMut()>);

                let win_handle = window();
                if let Some(win) = &win_handle {
                    let opts = AddEventListenerOptions::new();
                    opts.set_passive(true);
                    let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        update.as_ref().unchecked_ref(),
                        &opts,
                    );
                    let _ = win
                        .add_event_listener_with_callback("resize", update.as_ref().unchecked_ref());
                    let _ = win
                        .add_event_listener_with_callback("load", update.as_ref().unchecked_ref());
                }

                // Initial paint before any event fires.
                let _ = update
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    if let Some(win) = &win_handle {
                        for event in ["scroll", "resize", "load"] {
                            let _ = win.remove_event_listener_with_callback(
                                event,
                                update.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            (),
        );
    }

    html! {
        <section class="gallery-scrub" data-gallery-scrub="" ref={scrub_ref}>
            <div class="gallery-stage" data-gallery-stage="" ref={stage_ref}>
                <img
                    class="gallery-stage__image"
                    ref={img_ref}
                    src={props.image_src.clone()}
                    alt={props.image_alt.clone()}
                />
                if let Some(src) = &props.video_src {
                    <video
                        class="gallery-stage__video"
                        ref={video_ref}
                        src={src.clone()}
                        poster={props.video_poster.clone()}
                        playsinline=true
                    />
                }
                <div class="gallery-stage__overlay" ref={overlay_ref}></div>
                <div class="gallery-stage__label" ref={label_ref}>{ &props.label }</div>
            </div>
        </section>
    }
}
