use maud::{html, Markup, PreEscaped};

const DECK_JS: &str = "https://unpkg.com/deck.gl@8.9.35/dist.min.js";
const DECK_JSON_JS: &str = "https://unpkg.com/@deck.gl/json@8.9.35/dist.min.js";
const MAPBOX_JS: &str = "https://api.tiles.mapbox.com/mapbox-gl-js/v1.13.0/mapbox-gl.js";
const MAPBOX_CSS: &str = "https://api.tiles.mapbox.com/mapbox-gl-js/v1.13.0/mapbox-gl.css";

// Reads the JSON spec next to the container, converts it with @deck.gl/json
// and fills the tooltip template from the hovered row. Row values come from
// the CSVs and are escaped before they reach innerHTML.
const BOOT_JS: &str = r#"
(function () {
  const ESCAPES = { "&": "&amp;", "<": "&lt;", ">": "&gt;", '"': "&quot;", "'": "&#39;" };
  const escapeHtml = (v) => String(v ?? "").replace(/[&<>"']/g, (c) => ESCAPES[c]);
  const el = document.currentScript.previousElementSibling;
  const spec = JSON.parse(document.getElementById(el.dataset.spec).textContent);
  const tooltip = spec.tooltip;
  delete spec.tooltip;
  const converter = new deck.JSONConverter({
    configuration: new deck.JSONConfiguration({ classes: deck })
  });
  const props = converter.convert(spec);
  new deck.DeckGL({
    container: el,
    mapboxApiAccessToken: el.dataset.token || undefined,
    mapStyle: el.dataset.token ? props.mapStyle : undefined,
    initialViewState: props.initialViewState,
    controller: true,
    layers: props.layers,
    getTooltip: tooltip && (({ object }) => object && {
      html: tooltip.html.replace(/\{(\w+)\}/g, (_, k) => escapeHtml(object[k])),
      style: tooltip.style
    })
  });
})();
"#;

/// The map widget: a container plus the deck spec it renders.
pub fn deck_map(id: &str, spec_json: &str, mapbox_token: Option<&str>) -> Markup {
    let spec_id = format!("{id}-spec");
    // JSON inside a script element must not close the element early.
    let spec_json = spec_json.replace("</", "<\\/");

    html! {
        link rel="stylesheet" href=(MAPBOX_CSS);
        script src=(MAPBOX_JS) {}
        script src=(DECK_JS) {}
        script src=(DECK_JSON_JS) {}
        script type="application/json" id=(spec_id) { (PreEscaped(spec_json)) }
        div id=(id) class="map" data-spec=(spec_id) data-token=[mapbox_token] {}
        script { (PreEscaped(BOOT_JS)) }
    }
}
