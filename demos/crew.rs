use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_identity_map::{
    CANVAS_HEIGHT, CANVAS_WIDTH, ChartViewConfig, IdentityChart, IdentityMap, IdentityMapView,
    Theme,
};

const CREW: &str = r#"{
    "Navigator": {
        "Strength": 9,
        "Title": "Wayfinder",
        "Beliefs": "Every map is a promise",
        "Style": "Quietly certain"
    },
    "Quartermaster": {
        "Strength": 6,
        "Title": "Keeper of stores",
        "Beliefs": "Scarcity is a planning failure"
    },
    "Stowaway": {
        "Strength": -3,
        "Style": "Seen only in peripheral vision"
    },
    "Captain": {
        "Strength": 10,
        "Title": "Master and commander",
        "Beliefs": "The ship decides",
        "Style": "Loud, then silent"
    },
    "Cook": {
        "Strength": 2
    }
}"#;

fn main() {
    let entries: IdentityMap = serde_json::from_str(CREW).expect("crew roster parses");

    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(CANVAS_WIDTH), px(CANVAS_HEIGHT)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, move |_window, cx| {
            let chart = IdentityChart::builder()
                .title("Ship's Crew")
                .subtitle("Hover a marker for the full dossier")
                .theme(Theme::dark())
                .entries(entries)
                .build();

            let config = ChartViewConfig {
                hover_anim_ms: 200,
                ..Default::default()
            };

            cx.new(|_| IdentityMapView::with_config(chart, config))
        })
        .unwrap();
    });
}
