//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map and D3.js chart functions live in `assets/js/*.js` and are
//! loaded at runtime. They are evaluated as globals (no ES modules) and
//! exposed via `window.*`. Arguments are passed as JSON string literals.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static MAP_JS: &str = include_str!("../assets/js/map.js");
static HYDROGRAPH_JS: &str = include_str!("../assets/js/hydrograph.js");
static PROFILE_CHART_JS: &str = include_str!("../assets/js/profile-chart.js");
static DOWNLOAD_JS: &str = include_str!("../assets/js/download.js");

/// Globals defined by the scripts above, promoted to `window` after eval.
const EXPORTED_FUNCTIONS: [&str; 7] = [
    "renderBasinMap",
    "renderHydrograph",
    "renderProfileChart",
    "downloadText",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GBD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the map and chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope via indirect eval once D3 is
/// ready, then each function is promoted to `window.*`. Safe to call more
/// than once; only the first call installs the scripts.
pub fn init_scripts() {
    let all_js = [TOOLTIP_JS, MAP_JS, HYDROGRAPH_JS, PROFILE_CHART_JS, DOWNLOAD_JS].join("\n");
    let promote: String = EXPORTED_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__gbdScriptsRequested) return;
            window.__gbdScriptsRequested = true;
            window.__gbdScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__gbdScripts);
                    delete window.__gbdScripts;
                    {promote}
                    window.__gbdScriptsReady = true;
                    console.log('GBD scripts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string(&all_js),
        promote = promote,
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll interval and attempt cap for deferred renders (about 10 s).
const POLL_INTERVAL_MS: u32 = 100;
const MAX_POLL_ATTEMPTS: u32 = 100;

/// Script that calls `window.<function>(container_id, ...args)` once the
/// scripts are ready, the extra global `requires` (if any) is loaded and
/// the container exists in the DOM.
///
/// A newer render for the same container cancels the pending one, and a
/// poll gives up after `MAX_POLL_ATTEMPTS`.
fn render_script(function: &str, container_id: &str, args: &[String], requires: Option<&str>) -> String {
    let library_ready = requires
        .map(|lib| format!("typeof {} !== 'undefined' &&", lib))
        .unwrap_or_default();
    let mut call_args = vec![js_string(container_id)];
    call_args.extend(args.iter().cloned());
    format!(
        r#"
        (function() {{
            var polls = window.__gbdPolls = window.__gbdPolls || {{}};
            var key = {container};
            if (polls[key]) clearInterval(polls[key]);
            var attempts = 0;
            var poll = polls[key] = setInterval(function() {{
                attempts += 1;
                if (window.__gbdScriptsReady && {library_ready}
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById(key)) {{
                    clearInterval(poll);
                    delete polls[key];
                    try {{
                        window.{function}({call_args});
                    }} catch(e) {{ console.error('[GBD] {function} error:', e); }}
                }} else if (attempts >= {max_attempts}) {{
                    clearInterval(poll);
                    delete polls[key];
                    console.warn('[GBD] {function}: gave up waiting for', key);
                }}
            }}, {interval});
        }})();
        "#,
        container = js_string(container_id),
        call_args = call_args.join(", "),
        max_attempts = MAX_POLL_ATTEMPTS,
        interval = POLL_INTERVAL_MS,
    )
}

fn render_when_ready(function: &str, container_id: &str, args: &[String], requires: Option<&str>) {
    call_js(&render_script(function, container_id, args, requires));
}

/// Render the Leaflet map: markers, optional basin boundary overlay and
/// the plugin controls that are available.
pub fn render_map(container_id: &str, map_json: &str, boundary_json: Option<&str>) {
    let boundary = boundary_json.map(js_string).unwrap_or_else(|| "null".to_string());
    render_when_ready(
        "renderBasinMap",
        container_id,
        &[js_string(map_json), boundary],
        Some("L"),
    );
}

/// Render a discharge hydrograph (one line per comparison year).
pub fn render_hydrograph(container_id: &str, chart_json: &str) {
    render_when_ready("renderHydrograph", container_id, &[js_string(chart_json)], None);
}

/// Render filled cross-section profiles (one area per survey year).
pub fn render_profile_chart(container_id: &str, chart_json: &str) {
    render_when_ready("renderProfileChart", container_id, &[js_string(chart_json)], None);
}

/// Offer `contents` as a file download via a Blob and a temporary anchor.
pub fn trigger_download(file_name: &str, mime: &str, contents: &str) {
    call_js(&format!(
        "window.downloadText({}, {}, {});",
        js_string(file_name),
        js_string(mime),
        js_string(contents)
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}
