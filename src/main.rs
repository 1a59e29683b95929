use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, HtmlImageElement, HtmlSelectElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use kururin_core::game::{scramble_seed, splitmix32, PUZZLE_SEED};
use kururin_core::{
    puzzle_by_slug, CoreAction, PuzzleModel, PuzzleRules, RenderSurface, DEFAULT_PUZZLE_SLUG,
};

mod input;
mod renderer;

use input::{first_touch, screen_to_surface_coords, HasClientRect};
use renderer::CanvasSurface;

const CANVAS_FALLBACK_PX: u32 = 480;

#[derive(Clone, Copy, PartialEq)]
struct RingPreset {
    label: &'static str,
    rings: usize,
}

const RING_PRESETS: [RingPreset; 4] = [
    RingPreset {
        label: "3 rings",
        rings: 3,
    },
    RingPreset {
        label: "5 rings",
        rings: 5,
    },
    RingPreset {
        label: "8 rings",
        rings: 8,
    },
    RingPreset {
        label: "12 rings",
        rings: 12,
    },
];

const DEFAULT_PRESET_INDEX: usize = 1;

type SharedModel = Rc<RefCell<Option<PuzzleModel<HtmlImageElement>>>>;

fn time_nonce(previous: u32) -> u32 {
    splitmix32(Date::now() as u32 ^ previous.wrapping_add(0x9E37_79B9))
}

fn surface_coords(canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) -> Option<(f32, f32)> {
    screen_to_surface_coords(
        client_x,
        client_y,
        canvas.client_rect(),
        canvas.width() as f32,
        canvas.height() as f32,
    )
}

fn redraw(canvas: &HtmlCanvasElement, model: &SharedModel) {
    let borrowed = model.borrow();
    let Some(model) = borrowed.as_ref() else {
        return;
    };
    match CanvasSurface::new(canvas) {
        Ok(mut surface) => model.draw(&mut surface),
        Err(err) => gloo::console::error!("canvas context unavailable", format!("{err:?}")),
    }
}

fn dispatch(canvas: &HtmlCanvasElement, model: &SharedModel, action: CoreAction) {
    let needs_redraw = match model.borrow_mut().as_mut() {
        Some(model) => model.apply(action),
        None => false,
    };
    if needs_redraw {
        redraw(canvas, model);
    }
}

fn fit_canvas_to_container(canvas: &HtmlCanvasElement) {
    let rect = canvas.client_rect();
    let width = rect.width as u32;
    let height = rect.height as u32;
    canvas.set_width(if width == 0 { CANVAS_FALLBACK_PX } else { width });
    canvas.set_height(if height == 0 { CANVAS_FALLBACK_PX } else { height });
}

#[function_component(App)]
fn app() -> Html {
    let canvas_ref = use_node_ref();
    let image = use_mut_ref(|| None::<HtmlImageElement>);
    let image_load = use_mut_ref(|| None::<EventListener>);
    let model: SharedModel = use_mut_ref(|| None);
    let image_size = use_state(|| None::<(u32, u32)>);
    let preset_index = use_state(|| DEFAULT_PRESET_INDEX);
    let scramble_nonce = use_state(|| 0u32);

    let image_size_value = *image_size;
    let preset_index_value = *preset_index;
    let scramble_nonce_value = *scramble_nonce;

    // Kick off the built-in image load once; `load` supplies the decoded size.
    {
        let image = image.clone();
        let image_load = image_load.clone();
        let image_size = image_size.clone();
        use_effect_with((), move |_| {
            match (puzzle_by_slug(DEFAULT_PUZZLE_SLUG), HtmlImageElement::new()) {
                (Some(entry), Ok(element)) => {
                    let size_handle = image_size.clone();
                    let loaded = element.clone();
                    let listener = EventListener::new(&element, "load", move |_: &Event| {
                        size_handle.set(Some((loaded.natural_width(), loaded.natural_height())));
                    });
                    element.set_src(entry.src);
                    *image_load.borrow_mut() = Some(listener);
                    *image.borrow_mut() = Some(element);
                }
                (None, _) => gloo::console::error!("default puzzle missing from catalog"),
                (_, Err(err)) => {
                    gloo::console::error!("image element creation failed", format!("{err:?}"))
                }
            }
            || ()
        });
    }

    // Rebuild the puzzle whenever the image, the ring preset or the scramble
    // nonce changes.
    {
        let canvas_ref = canvas_ref.clone();
        let image = image.clone();
        let model = model.clone();
        use_effect_with(
            (image_size_value, preset_index_value, scramble_nonce_value),
            move |(size, preset, nonce)| {
                let canvas = canvas_ref.cast::<HtmlCanvasElement>();
                let handle = image.borrow().clone();
                if let (Some((image_w, image_h)), Some(canvas), Some(handle)) =
                    (*size, canvas, handle)
                {
                    let rings = RING_PRESETS[*preset].rings;
                    fit_canvas_to_container(&canvas);
                    match CanvasSurface::new(&canvas) {
                        Ok(mut surface) => {
                            let seed = scramble_seed(PUZZLE_SEED, *nonce, rings);
                            match PuzzleModel::new(
                                surface.width(),
                                surface.height(),
                                image_w as f32,
                                image_h as f32,
                                rings,
                                handle,
                                seed,
                                PuzzleRules::default(),
                            ) {
                                Ok(next) => {
                                    next.draw(&mut surface);
                                    *model.borrow_mut() = Some(next);
                                }
                                Err(err) => {
                                    *model.borrow_mut() = None;
                                    gloo::console::error!("puzzle layout failed", err.to_string());
                                }
                            }
                        }
                        Err(err) => gloo::console::error!(
                            "canvas context unavailable",
                            format!("{err:?}")
                        ),
                    }
                }
                || ()
            },
        );
    }

    // Pointer wiring: the grab starts on the canvas; move and release are
    // observed on the document so a drag that leaves the canvas still tracks.
    {
        let canvas_ref = canvas_ref.clone();
        let model = model.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let document = web_sys::window().and_then(|window| window.document());
            if let (Some(canvas), Some(document)) = (canvas, document) {
                let not_passive = EventListenerOptions::enable_prevent_default();

                {
                    let canvas = canvas.clone();
                    let model = model.clone();
                    listeners.push(EventListener::new(
                        &canvas.clone(),
                        "mousedown",
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let coords = surface_coords(
                                &canvas,
                                event.client_x() as f32,
                                event.client_y() as f32,
                            );
                            if let Some((x, y)) = coords {
                                dispatch(&canvas, &model, CoreAction::PointerDown { x, y });
                            }
                        },
                    ));
                }
                {
                    let canvas = canvas.clone();
                    let model = model.clone();
                    listeners.push(EventListener::new(
                        &document,
                        "mousemove",
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let coords = surface_coords(
                                &canvas,
                                event.client_x() as f32,
                                event.client_y() as f32,
                            );
                            if let Some((x, y)) = coords {
                                dispatch(&canvas, &model, CoreAction::PointerMove { x, y });
                            }
                        },
                    ));
                }
                {
                    let canvas = canvas.clone();
                    let model = model.clone();
                    listeners.push(EventListener::new(
                        &document,
                        "mouseup",
                        move |_: &Event| {
                            dispatch(&canvas, &model, CoreAction::PointerUp);
                        },
                    ));
                }
                {
                    let canvas = canvas.clone();
                    let model = model.clone();
                    listeners.push(EventListener::new_with_options(
                        &canvas.clone(),
                        "touchstart",
                        not_passive,
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            let Some(touch) = first_touch(event) else {
                                return;
                            };
                            let coords = surface_coords(
                                &canvas,
                                touch.client_x() as f32,
                                touch.client_y() as f32,
                            );
                            if let Some((x, y)) = coords {
                                event.prevent_default();
                                dispatch(&canvas, &model, CoreAction::PointerDown { x, y });
                            }
                        },
                    ));
                }
                {
                    let canvas = canvas.clone();
                    let model = model.clone();
                    listeners.push(EventListener::new_with_options(
                        &document,
                        "touchmove",
                        not_passive,
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            let dragging = model
                                .borrow()
                                .as_ref()
                                .map(|model| model.is_dragging())
                                .unwrap_or(false);
                            if !dragging {
                                return;
                            }
                            let Some(touch) = first_touch(event) else {
                                return;
                            };
                            // Keep the page from scrolling mid-drag.
                            event.prevent_default();
                            let coords = surface_coords(
                                &canvas,
                                touch.client_x() as f32,
                                touch.client_y() as f32,
                            );
                            if let Some((x, y)) = coords {
                                dispatch(&canvas, &model, CoreAction::PointerMove { x, y });
                            }
                        },
                    ));
                }
                for release in ["touchend", "touchcancel"] {
                    let canvas = canvas.clone();
                    let model = model.clone();
                    listeners.push(EventListener::new(&document, release, move |_: &Event| {
                        dispatch(&canvas, &model, CoreAction::PointerUp);
                    }));
                }
            }
            move || drop(listeners)
        });
    }

    let on_preset_change = {
        let preset_index = preset_index.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(value) = select.value().parse::<usize>() {
                if value < RING_PRESETS.len() {
                    preset_index.set(value);
                }
            }
        })
    };

    let on_scramble = {
        let scramble_nonce = scramble_nonce.clone();
        Callback::from(move |_: MouseEvent| {
            scramble_nonce.set(time_nonce(*scramble_nonce));
        })
    };

    let preset_options: Html = RING_PRESETS
        .iter()
        .enumerate()
        .map(|(index, preset)| {
            html! {
                <option value={index.to_string()} selected={index == preset_index_value}>
                    { preset.label }
                </option>
            }
        })
        .collect();

    let status = if image_size_value.is_none() {
        html! { <span class="status">{ "Loading image..." }</span> }
    } else {
        html! {}
    };

    html! {
        <main class="app">
            <header class="toolbar">
                <h1>{ "Kururin" }</h1>
                <label for="ring-preset">{ "Rings" }</label>
                <select id="ring-preset" onchange={on_preset_change}>
                    { preset_options }
                </select>
                <button onclick={on_scramble} disabled={image_size_value.is_none()}>
                    { "Scramble" }
                </button>
                { status }
            </header>
            <canvas ref={canvas_ref} class="puzzle-canvas" />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
