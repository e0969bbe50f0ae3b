use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use mortgage_ui::components::{AppWindow, WindowPreferences};
use mortgage_ui::{gui, logging};

fn main() {
    logging::init_default_logging();
    info!("starting mortgage calculator");

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(|cx| {
        gui::setup_app(cx);

        let preferences = WindowPreferences::default();
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                preferences.size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some("Mortgage Calculator".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window: &mut Window, cx: &mut App| {
            let content = gui::build_main_content(window, cx);
            let view = cx.new(|view_cx| AppWindow::new(content, view_cx));
            cx.new(|root_cx| Root::new(view, window, root_cx))
        });

        if let Err(error) = opened {
            error!(?error, "failed to open main window");
            cx.quit();
        }
    });
}
