use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_identity_map::{
    CANVAS_HEIGHT, CANVAS_WIDTH, Entry, IdentityChart, IdentityMap, IdentityMapView,
};

fn main() {
    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(CANVAS_WIDTH), px(CANVAS_HEIGHT)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let entries: IdentityMap = [
                ("Curiosity", Entry::new(8.0)),
                ("Patience", Entry::new(3.0)),
                ("Doubt", Entry::new(-4.0)),
                ("Resolve", Entry::new(10.0)),
            ]
            .into_iter()
            .collect();

            let chart = IdentityChart::builder()
                .title("Identity Map")
                .subtitle("Position and size follow each entry's strength")
                .entries(entries)
                .build();

            cx.new(|_| IdentityMapView::new(chart))
        })
        .unwrap();
    });
}
