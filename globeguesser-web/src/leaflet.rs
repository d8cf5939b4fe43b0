//! Minimal bindings to the global Leaflet `L` namespace plus the option
//! builders the map panes share.
//!
//! Only the surface the game actually touches is bound: map creation,
//! tile layers, markers, one polyline, and the two viewport calls the
//! fitter can request.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use globeguesser_game::{CenterZoom, GeoBounds, GeoPoint, ViewportPlan};

/// OpenStreetMap raster tiles, identical for every pane.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

#[wasm_bindgen]
extern "C" {
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container: &HtmlElement, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64);

    /// Leaflet throws on bounds it cannot express; the caller degrades
    /// to the plan's fallback view.
    #[wasm_bindgen(method, catch, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &JsValue, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map);

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_marker(latlng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map);

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, latlng: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);

    pub type Polyline;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    pub fn new_polyline(latlngs: &JsValue, options: &JsValue) -> Polyline;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Polyline, map: &Map);

    /// Leaflet mouse event; only the clicked coordinate is read.
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MapMouseEvent) -> LatLng;

    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

fn obj(entries: &[(&str, JsValue)]) -> JsValue {
    let target = Object::new();
    for (key, value) in entries {
        // Reflect::set only fails on non-objects; `target` always is one.
        let _ = Reflect::set(&target, &JsValue::from_str(key), value);
    }
    target.into()
}

/// `[lat, lng]` pair in the array form Leaflet accepts everywhere.
#[must_use]
pub fn lat_lng(point: GeoPoint) -> JsValue {
    let pair = Array::new();
    pair.push(&JsValue::from_f64(point.lat));
    pair.push(&JsValue::from_f64(point.lng));
    pair.into()
}

/// `[[south, west], [north, east]]` corner-pair form of a bounds box.
#[must_use]
pub fn bounds_corners(bounds: GeoBounds) -> JsValue {
    let corners = Array::new();
    corners.push(&lat_lng(GeoPoint::new(bounds.south, bounds.west)));
    corners.push(&lat_lng(GeoPoint::new(bounds.north, bounds.east)));
    corners.into()
}

fn world_bounds() -> JsValue {
    bounds_corners(GeoBounds {
        south: -85.0,
        west: -180.0,
        north: 85.0,
        east: 180.0,
    })
}

/// Shared pane options: bounded world, solid edge viscosity, no
/// attribution control.
#[must_use]
pub fn map_options(min_zoom: f64, max_zoom: f64) -> JsValue {
    obj(&[
        ("attributionControl", JsValue::FALSE),
        ("maxBounds", world_bounds()),
        ("maxBoundsViscosity", JsValue::from_f64(1.0)),
        ("minZoom", JsValue::from_f64(min_zoom)),
        ("maxZoom", JsValue::from_f64(max_zoom)),
    ])
}

/// Attach the shared tile layer, clamped to the world box with no
/// horizontal wrap so the result polyline stays on one world copy.
pub fn add_base_tiles(map: &Map) {
    let tiles = new_tile_layer(
        TILE_URL,
        obj(&[("noWrap", JsValue::TRUE), ("bounds", world_bounds())]).as_ref(),
    );
    tiles.add_to(map);
}

/// Drop a default marker on the map.
pub fn place_marker(map: &Map, point: GeoPoint, title: &str) -> Marker {
    let marker = new_marker(
        &lat_lng(point),
        &obj(&[("title", JsValue::from_str(title))]),
    );
    marker.add_to(map);
    marker
}

/// Draw the guess-to-answer segment.
pub fn draw_path(map: &Map, path: [GeoPoint; 2]) -> Polyline {
    let latlngs = Array::new();
    latlngs.push(&lat_lng(path[0]));
    latlngs.push(&lat_lng(path[1]));
    let line = new_polyline(
        latlngs.as_ref(),
        &obj(&[
            ("color", JsValue::from_str("red")),
            ("weight", JsValue::from_f64(3.0)),
        ]),
    );
    line.add_to(map);
    line
}

/// Apply a computed viewport plan, degrading to its fallback view when
/// the map refuses the bounds fit.
pub fn apply_viewport(map: &Map, plan: &ViewportPlan) {
    match *plan {
        ViewportPlan::FitBounds {
            bounds,
            max_zoom,
            fallback,
        } => {
            let options = obj(&[
                ("maxZoom", JsValue::from_f64(f64::from(max_zoom))),
                ("animate", JsValue::FALSE),
            ]);
            if map.fit_bounds(&bounds_corners(bounds), &options).is_err() {
                log::debug!("bounds fit refused; centering at zoom {}", fallback.zoom);
                apply_center(map, fallback);
            }
        }
        ViewportPlan::Center(view) => apply_center(map, view),
    }
}

fn apply_center(map: &Map, view: CenterZoom) {
    map.set_view(&lat_lng(view.center), f64::from(view.zoom));
}
